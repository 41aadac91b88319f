use tracing::debug;

use crate::{Metrics, Process, Schedule, SchedulingPolicy, Statistics, Ticks, TimeSlice};

/// First come, first served.
///
/// Processes run in the order they are given, without sorting. The service
/// clock is the running sum of the bursts, so the processor is treated as
/// never idle even when an arrival lies beyond it.
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "First-come, first-serve"
    }

    fn decimal_times(&self) -> bool {
        false
    }

    fn run(&self, processes: &[Process]) -> Schedule {
        let mut service: Ticks = 0;
        let mut total_wait: Ticks = 0;
        let mut total_turnaround: Ticks = 0;
        let mut last_completion: Ticks = 0;
        let mut gantt = Vec::with_capacity(processes.len());
        let mut metrics = Vec::with_capacity(processes.len());

        for process in processes {
            let wait = (service - process.arrival).max(0);
            let start = wait + process.arrival;
            let turnaround = process.burst + wait;
            let completion = process.arrival + wait + process.burst;

            total_wait += wait;
            total_turnaround += turnaround;
            last_completion = completion;
            service += process.burst;

            debug!(pid = %process.pid, start, stop = completion, service, "dispatch");
            gantt.push(TimeSlice::new(process.pid, start, completion));
            metrics.push(Metrics::new(process, wait, turnaround, completion));
        }

        Schedule {
            gantt,
            metrics,
            statistics: Statistics::aggregate(
                total_wait,
                total_turnaround,
                processes.len(),
                last_completion,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Fcfs;
    use crate::{Process, SchedulingPolicy};

    #[test]
    fn keeps_input_order() {
        let processes = [Process::new(3, 2, 4), Process::new(1, 2, 0)];
        let schedule = Fcfs.run(&processes);
        let pids: Vec<i64> = schedule.gantt.iter().map(|slice| slice.pid.get()).collect();
        assert_eq!(pids, vec![3, 1]);
    }

    #[test]
    fn late_arrival_does_not_wait() {
        let processes = [Process::new(1, 2, 0), Process::new(2, 3, 10)];
        let schedule = Fcfs.run(&processes);
        assert_eq!(schedule.metrics[1].wait, 0);
        assert_eq!(schedule.metrics[1].completion, 13);
        assert_eq!(schedule.gantt[1].start, 10);
        assert_eq!(schedule.gantt[1].stop, 13);
    }
}
