//! The scheduling policies.
//!
//! Each policy lives in its own file and is exported here.

use tracing::debug;

use crate::{Clock, Metrics, Process, Schedule, Statistics, Ticks, TimeSlice};

mod fcfs;
pub use fcfs::Fcfs;

mod sjf;
pub use sjf::Sjf;

mod sjf_priority;
pub use sjf_priority::SjfPriority;

mod round_robin;
pub use round_robin::{priority_penalty, RoundRobin};

/// Bookkeeping shared by the two shortest job first policies.
///
/// The turnaround total subtracts the running wait total from every
/// completion rather than the process's own wait.
struct Ledger {
    clock: Clock,
    total_wait: Ticks,
    total_turnaround: Ticks,
    gantt: Vec<TimeSlice>,
    metrics: Vec<Metrics>,
}

impl Ledger {
    fn new(capacity: usize) -> Self {
        Ledger {
            clock: Clock::default(),
            total_wait: 0,
            total_turnaround: 0,
            gantt: Vec::with_capacity(capacity),
            metrics: Vec::with_capacity(capacity),
        }
    }

    /// Run `process` to completion starting at the current clock.
    fn dispatch(&mut self, process: &Process) {
        let start = self.clock.now();
        let stop = start + process.burst;
        let wait = start - process.arrival;
        let turnaround = stop - process.arrival;

        self.total_wait += wait;
        self.total_turnaround += turnaround - self.total_wait;

        debug!(pid = %process.pid, start, stop, wait, "dispatch");
        self.gantt.push(TimeSlice::new(process.pid, start, stop));
        self.metrics.push(Metrics::new(process, wait, turnaround, stop));

        self.clock.advance(process.burst);
    }

    fn finish(self) -> Schedule {
        let count = self.metrics.len();
        Schedule {
            statistics: Statistics::aggregate(
                self.total_wait,
                self.total_turnaround,
                count,
                self.clock.now(),
            ),
            gantt: self.gantt,
            metrics: self.metrics,
        }
    }
}
