use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{bail, Context};

/// The round robin quantum used when `RR_QUANTUM` is not set.
pub const DEFAULT_QUANTUM: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(quantum) => quantum,
    None => unreachable!(),
};

/// Runner configuration, built from the command line and the environment.
#[derive(Debug, PartialEq)]
pub struct Config {
    /// The process dataset to simulate.
    pub dataset: PathBuf,

    /// The round robin quantum (`RR_QUANTUM`).
    pub quantum: NonZeroUsize,

    /// Emit JSON logs instead of the compact format (`SCHEDULER_TRACE_JSON`).
    pub trace_json: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        Config::parse(std::env::args(), |name| std::env::var(name).ok())
    }

    /// Build the configuration.
    ///
    /// * `args` - the command line, including the program name.
    /// * `var` - looks up an environment variable.
    pub fn parse<I, F>(args: I, var: F) -> anyhow::Result<Config>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut args = args.into_iter();
        let program = args.next().unwrap_or_else(|| "runner".to_owned());
        let operands: Vec<String> = args.collect();
        if operands.len() != 1 {
            bail!("invalid args: must give a scheduling file to process\nusage: {program} <dataset.csv>");
        }

        let quantum = match var("RR_QUANTUM") {
            Some(value) => value
                .trim()
                .parse::<NonZeroUsize>()
                .with_context(|| format!("RR_QUANTUM must be a positive integer, got {value:?}"))?,
            None => DEFAULT_QUANTUM,
        };

        let trace_json = var("SCHEDULER_TRACE_JSON")
            .map(|value| value == "1" || value == "true")
            .unwrap_or(false);

        Ok(Config {
            dataset: PathBuf::from(&operands[0]),
            quantum,
            trace_json,
        })
    }
}
