use tracing::debug;

use super::Ledger;
use crate::{Process, Schedule, SchedulingPolicy, Ticks};

/// Shortest job first with a priority tie break.
///
/// Unlike [`super::Sjf`], only processes that have already arrived are
/// eligible. Among them the smallest burst wins, then the lowest priority
/// value, then the earliest position in the sorted working copy. When
/// nothing is eligible, the clock skips to the next arrival.
pub struct SjfPriority;

impl SjfPriority {
    fn select(remaining: &[Process], now: Ticks) -> Option<usize> {
        let mut shortest: Option<usize> = None;
        for (index, process) in remaining.iter().enumerate() {
            if process.arrival > now {
                continue;
            }
            shortest = match shortest {
                Some(current) => {
                    let best = &remaining[current];
                    if process.burst < best.burst
                        || (process.burst == best.burst && process.priority < best.priority)
                    {
                        Some(index)
                    } else {
                        Some(current)
                    }
                }
                None => Some(index),
            };
        }
        shortest
    }
}

impl SchedulingPolicy for SjfPriority {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn run(&self, processes: &[Process]) -> Schedule {
        let mut remaining = processes.to_vec();
        remaining.sort_by_key(|process| (process.arrival, process.priority, process.burst));

        let mut ledger = Ledger::new(remaining.len());

        while !remaining.is_empty() {
            match SjfPriority::select(&remaining, ledger.clock.now()) {
                Some(index) => {
                    let process = remaining.remove(index);
                    ledger.dispatch(&process);
                }
                None => {
                    let next_arrival = remaining
                        .iter()
                        .map(|process| process.arrival)
                        .min()
                        .unwrap_or_default();
                    debug!(clock = ledger.clock.now(), next_arrival, "idle");
                    ledger.clock.advance_to(next_arrival);
                }
            }
        }

        ledger.finish()
    }
}
