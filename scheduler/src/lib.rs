//! A scheduler library.
//!
//! This library provides the data model and the policies used to simulate
//! the scheduling of a fixed batch of processes on a single processor.
//!

use std::num::NonZeroUsize;

mod scheduler;
mod stats;

pub use crate::scheduler::{
    Clock, Metrics, Pid, Process, Schedule, SchedulingPolicy, Ticks, TimeSlice,
};
pub use crate::stats::Statistics;

pub mod schedulers;

use schedulers::{Fcfs, RoundRobin, Sjf, SjfPriority};

/// Returns a structure that implements the `SchedulingPolicy` trait with a first come, first served policy
pub fn fcfs() -> impl SchedulingPolicy {
    Fcfs
}

/// Returns a structure that implements the `SchedulingPolicy` trait with a non preemptive shortest job first policy
///
/// The shortest remaining job is picked even if it has not arrived yet.
pub fn sjf() -> impl SchedulingPolicy {
    Sjf
}

/// Returns a structure that implements the `SchedulingPolicy` trait with a shortest job first policy
/// that only considers arrived processes and breaks ties by priority
pub fn sjf_priority() -> impl SchedulingPolicy {
    SjfPriority
}

/// Returns a structure that implements the `SchedulingPolicy` trait with a round robin policy
///
/// * `quantum` - the time units that a process can run before it is sent
///               to the back of the ready queue.
pub fn round_robin(quantum: NonZeroUsize) -> impl SchedulingPolicy {
    RoundRobin::new(quantum)
}

/// Returns every policy, in the order they are reported.
pub fn policies(quantum: NonZeroUsize) -> Vec<Box<dyn SchedulingPolicy>> {
    vec![
        Box::new(Fcfs),
        Box::new(Sjf),
        Box::new(SjfPriority),
        Box::new(RoundRobin::new(quantum)),
    ]
}
