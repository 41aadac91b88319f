use std::fmt::{self, Display};

use crate::stats::Statistics;

/// A point or a duration on the virtual clock.
///
/// Signed, since the round robin priority penalty can push a wait below zero.
pub type Ticks = i64;

/// The PID of a simulated process.
///
/// PIDs come straight from the input and are only required to be unique
/// within one simulation run.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Pid(i64);

impl Pid {
    pub fn new(pid: i64) -> Pid {
        Pid(pid)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for Pid {
    fn from(pid: i64) -> Self {
        Pid(pid)
    }
}

impl PartialEq<i64> for Pid {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

impl Display for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A process record, as read from the input.
///
/// Records are never mutated by a policy. Policies that need to reorder
/// them or consume their burst work on a private copy.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Process {
    /// The PID of the process.
    pub pid: Pid,

    /// The time at which the process becomes eligible to run.
    pub arrival: Ticks,

    /// The total processor time the process needs.
    pub burst: Ticks,

    /// The process priority, lower is more important. Defaults to 0.
    pub priority: i64,
}

impl Process {
    /// Create a process with the default priority.
    ///
    /// The argument order follows the input rows: id, burst, arrival.
    pub fn new(pid: i64, burst: Ticks, arrival: Ticks) -> Process {
        Process {
            pid: Pid::new(pid),
            arrival,
            burst,
            priority: 0,
        }
    }

    pub fn with_priority(mut self, priority: i64) -> Process {
        self.priority = priority;
        self
    }
}

/// An interval during which a process occupies the processor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TimeSlice {
    pub pid: Pid,
    pub start: Ticks,
    pub stop: Ticks,
}

impl TimeSlice {
    pub fn new(pid: Pid, start: Ticks, stop: Ticks) -> TimeSlice {
        debug_assert!(stop >= start, "slice for {pid} stops before it starts");
        TimeSlice { pid, start, stop }
    }

    pub fn duration(&self) -> Ticks {
        self.stop - self.start
    }
}

impl Display for TimeSlice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}, {}]", self.pid, self.start, self.stop)
    }
}

/// The timings of a finished process.
///
/// A row is produced once, when its process completes, and never changes
/// afterwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Metrics {
    pub pid: Pid,
    pub priority: i64,

    /// The original burst of the process.
    pub burst: Ticks,
    pub arrival: Ticks,
    pub wait: Ticks,
    pub turnaround: Ticks,
    pub completion: Ticks,
}

impl Metrics {
    pub(crate) fn new(process: &Process, wait: Ticks, turnaround: Ticks, completion: Ticks) -> Self {
        Metrics {
            pid: process.pid,
            priority: process.priority,
            burst: process.burst,
            arrival: process.arrival,
            wait,
            turnaround,
            completion,
        }
    }
}

impl Display for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.pid,
            self.priority,
            self.burst,
            self.arrival,
            self.wait,
            self.turnaround,
            self.completion
        )
    }
}

/// Everything a policy produces for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    /// The Gantt timeline, in emission order.
    pub gantt: Vec<TimeSlice>,

    /// One row per process, in completion order.
    pub metrics: Vec<Metrics>,

    pub statistics: Statistics,
}

/// The virtual clock a policy advances while it dispatches processes.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Clock {
    now: Ticks,
}

impl Clock {
    pub fn now(&self) -> Ticks {
        self.now
    }

    /// Move the clock forward by `delta`.
    pub fn advance(&mut self, delta: Ticks) {
        self.now += delta;
    }

    /// Move the clock to `time`, unless it is already past it.
    pub fn advance_to(&mut self, time: Ticks) {
        self.now = self.now.max(time);
    }
}

/// The trait that every scheduling policy implements.
pub trait SchedulingPolicy {
    /// The title used when reporting this policy's schedule.
    fn name(&self) -> &'static str;

    /// Run the policy over `processes` on a fresh clock.
    ///
    /// The slice belongs to the caller and is shared by every policy, so
    /// implementations must copy it before reordering anything.
    fn run(&self, processes: &[Process]) -> Schedule;

    /// Whether the schedule table prints wait and turnaround with two
    /// decimals rather than as whole ticks.
    fn decimal_times(&self) -> bool {
        true
    }
}
