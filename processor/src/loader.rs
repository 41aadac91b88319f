use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::ParseIntError;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use scheduler::{Process, Ticks};
use thiserror::Error;
use tracing::debug;

/// The latest tick a loaded batch may reach, counting the latest arrival
/// plus every burst.
///
/// Every running total a policy keeps is bounded by the square of the batch
/// size times its horizon, and the batch size is bounded by the horizon, so
/// this limit keeps all of them well inside [`Ticks`].
pub const MAX_HORIZON: Ticks = 1 << 20;

/// Errors produced while loading process records.
///
/// Every one of them is fatal: loading stops at the first bad row.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The dataset could not be opened
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The dataset could not be read
    #[error("cannot read process list: {0}")]
    Read(#[from] io::Error),

    /// A row has fewer than the three mandatory fields
    #[error("line {line}: expected at least 3 fields (id, burst, arrival), found {found}")]
    MissingFields { line: usize, found: usize },

    /// A row has more than the four known fields
    #[error("line {line}: expected at most 4 fields (id, burst, arrival, priority), found {found}")]
    TooManyFields { line: usize, found: usize },

    /// A field is not an integer
    #[error("line {line}: {field} {value:?} is not an integer")]
    InvalidInteger {
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A field is an integer outside of its allowed range
    #[error("line {line}: {field} {value} is out of range")]
    OutOfRange {
        line: usize,
        field: &'static str,
        value: i64,
    },

    /// The rows would keep the processor busy past [`MAX_HORIZON`]
    #[error("line {line}: the schedule would run past tick {limit}")]
    HorizonExceeded { line: usize, limit: Ticks },

    /// Two rows share an id
    #[error("line {line}: process id {id} is already in use")]
    DuplicateId { line: usize, id: i64 },
}

fn field(line: usize, name: &'static str, value: &str) -> Result<i64, LoadError> {
    let value = value.trim();
    value
        .parse::<i64>()
        .map_err(|source| LoadError::InvalidInteger {
            line,
            field: name,
            value: value.to_owned(),
            source,
        })
}

fn bounded(
    line: usize,
    name: &'static str,
    value: i64,
    range: RangeInclusive<i64>,
) -> Result<i64, LoadError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(LoadError::OutOfRange {
            line,
            field: name,
            value,
        })
    }
}

fn parse_row(line: usize, row: &str) -> Result<Process, LoadError> {
    let fields: Vec<&str> = row.split(',').collect();
    match fields.len() {
        0..=2 => {
            return Err(LoadError::MissingFields {
                line,
                found: fields.len(),
            })
        }
        3 | 4 => {}
        found => return Err(LoadError::TooManyFields { line, found }),
    }

    let id = field(line, "id", fields[0])?;
    let burst = bounded(line, "burst", field(line, "burst", fields[1])?, 1..=MAX_HORIZON)?;
    let arrival = bounded(
        line,
        "arrival",
        field(line, "arrival", fields[2])?,
        0..=MAX_HORIZON,
    )?;
    let priority = match fields.get(3) {
        Some(value) => bounded(
            line,
            "priority",
            field(line, "priority", value)?,
            i64::from(i32::MIN)..=i64::from(i32::MAX),
        )?,
        None => 0,
    };

    Ok(Process::new(id, burst, arrival).with_priority(priority))
}

/// Load process records from comma separated rows.
///
/// Each row is `id,burst,arrival[,priority]`; the priority defaults to 0.
/// Blank lines are skipped. Bursts and arrivals must fit within
/// [`MAX_HORIZON`], as must the batch as a whole. Priorities must fit an
/// `i32`.
pub fn load_processes<R: BufRead>(reader: R) -> Result<Vec<Process>, LoadError> {
    let mut processes = Vec::new();
    let mut ids = HashSet::new();
    let mut total_burst: Ticks = 0;
    let mut latest_arrival: Ticks = 0;

    for (index, row) in reader.lines().enumerate() {
        let row = row?;
        if row.trim().is_empty() {
            continue;
        }

        let line = index + 1;
        let process = parse_row(line, &row)?;
        if !ids.insert(process.pid) {
            return Err(LoadError::DuplicateId {
                line,
                id: process.pid.get(),
            });
        }

        total_burst = total_burst
            .checked_add(process.burst)
            .ok_or(LoadError::HorizonExceeded {
                line,
                limit: MAX_HORIZON,
            })?;
        latest_arrival = latest_arrival.max(process.arrival);
        if latest_arrival.saturating_add(total_burst) > MAX_HORIZON {
            return Err(LoadError::HorizonExceeded {
                line,
                limit: MAX_HORIZON,
            });
        }
        processes.push(process);
    }

    debug!(count = processes.len(), "loaded processes");
    Ok(processes)
}

/// Load process records from the file at `path`.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<Process>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_processes(BufReader::new(file))
}
