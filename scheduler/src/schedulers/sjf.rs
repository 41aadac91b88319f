use tracing::debug;

use super::Ledger;
use crate::{Process, Schedule, SchedulingPolicy};

/// Non preemptive shortest job first.
///
/// The next process is the one with the smallest burst among all the
/// remaining ones, whether or not it has arrived yet. When it has not, the
/// clock jumps forward to its arrival.
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "Shortest-job-first"
    }

    fn run(&self, processes: &[Process]) -> Schedule {
        let mut remaining = processes.to_vec();
        remaining.sort_by_key(|process| process.arrival);

        let mut ledger = Ledger::new(remaining.len());

        while !remaining.is_empty() {
            let mut shortest = 0;
            for (index, process) in remaining.iter().enumerate() {
                if process.burst < remaining[shortest].burst {
                    shortest = index;
                }
            }
            let process = remaining.remove(shortest);

            if process.arrival > ledger.clock.now() {
                debug!(pid = %process.pid, clock = ledger.clock.now(), arrival = process.arrival, "idle until arrival");
                ledger.clock.advance_to(process.arrival);
            }

            ledger.dispatch(&process);
        }

        ledger.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Sjf;
    use crate::{Process, SchedulingPolicy};

    #[test]
    fn ties_go_to_earliest_arrival() {
        let processes = [Process::new(1, 4, 3), Process::new(2, 4, 1)];
        let schedule = Sjf.run(&processes);
        assert_eq!(schedule.gantt[0].pid, 2);
        assert_eq!(schedule.gantt[0].start, 1);
    }

    #[test]
    fn jumps_to_future_arrival() {
        let processes = [Process::new(1, 9, 0), Process::new(2, 1, 5)];
        let schedule = Sjf.run(&processes);
        assert_eq!(schedule.gantt[0].pid, 2);
        assert_eq!(schedule.gantt[0].start, 5);
        assert_eq!(schedule.gantt[1].start, 6);
        assert_eq!(schedule.metrics[1].wait, 6);
    }
}
