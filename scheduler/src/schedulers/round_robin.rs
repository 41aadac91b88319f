use std::collections::VecDeque;
use std::num::NonZeroUsize;

use tracing::debug;

use crate::{Clock, Metrics, Process, Schedule, SchedulingPolicy, Statistics, Ticks, TimeSlice};

/// The adjustment subtracted from a round robin turnaround to get the wait.
///
/// Processes with a priority value above 1 are credited 5 units of wait per
/// level, those below 1 are charged the same amount.
pub fn priority_penalty(process: &Process) -> Ticks {
    (process.priority - 1) * 5
}

#[derive(Copy, Clone)]
struct PCB {
    process: Process,
    remaining: Ticks,
}

impl PCB {
    fn new(process: Process) -> Self {
        PCB {
            process,
            remaining: process.burst,
        }
    }
}

/// Round robin over a fixed quantum.
///
/// Every process is loaded into the ready queue, in arrival order, before
/// the first dispatch. The elapsed clock starts at zero and never idles.
pub struct RoundRobin {
    quantum: NonZeroUsize,
}

impl RoundRobin {
    pub fn new(quantum: NonZeroUsize) -> Self {
        RoundRobin { quantum }
    }

    pub fn quantum(&self) -> NonZeroUsize {
        self.quantum
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "Round-robin"
    }

    fn run(&self, processes: &[Process]) -> Schedule {
        let quantum = Ticks::try_from(self.quantum.get()).unwrap_or(Ticks::MAX);

        let mut sorted = processes.to_vec();
        sorted.sort_by_key(|process| process.arrival);
        let mut ready_queue: VecDeque<PCB> = sorted.into_iter().map(PCB::new).collect();

        let mut elapsed = Clock::default();
        let mut total_wait: Ticks = 0;
        let mut total_turnaround: Ticks = 0;
        let mut gantt = Vec::new();
        let mut metrics = Vec::with_capacity(ready_queue.len());

        while let Some(mut pcb) = ready_queue.pop_front() {
            let ran = pcb.remaining.min(quantum);
            let start = elapsed.now();
            elapsed.advance(ran);
            pcb.remaining -= ran;

            debug!(pid = %pcb.process.pid, start, stop = elapsed.now(), remaining = pcb.remaining, "dispatch");
            gantt.push(TimeSlice::new(pcb.process.pid, start, elapsed.now()));

            if pcb.remaining > 0 {
                ready_queue.push_back(pcb);
                continue;
            }

            let turnaround = elapsed.now() - pcb.process.arrival;
            let wait = turnaround - priority_penalty(&pcb.process);
            total_wait += wait;
            total_turnaround += turnaround;

            debug!(pid = %pcb.process.pid, completion = elapsed.now(), wait, turnaround, "completed");
            metrics.push(Metrics::new(&pcb.process, wait, turnaround, elapsed.now()));
        }

        Schedule {
            statistics: Statistics::aggregate(
                total_wait,
                total_turnaround,
                metrics.len(),
                elapsed.now(),
            ),
            gantt,
            metrics,
        }
    }
}
