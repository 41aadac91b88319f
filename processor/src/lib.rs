//! A processor simulation library
//!
//! This is used for running the policies from the [`scheduler`] crate over a
//! batch of processes and reporting the schedules they produce.

use std::collections::HashMap;
use std::fmt::Display;
use std::num::NonZeroUsize;

use scheduler::{Pid, Process, Schedule, SchedulingPolicy, Ticks};
use tracing::{info, info_span};

mod loader;

pub use loader::{load_file, load_processes, LoadError, MAX_HORIZON};

/// The outcome of running one policy.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The title of the policy that produced the schedule.
    pub title: String,

    /// Print wait and turnaround with two decimals.
    pub decimal_times: bool,

    /// The Gantt timeline, the per process rows and the statistics.
    pub schedule: Schedule,
}

impl Report {
    fn new<S>(policy: &S, schedule: Schedule) -> Report
    where
        S: SchedulingPolicy + ?Sized,
    {
        Report {
            title: policy.name().to_owned(),
            decimal_times: policy.decimal_times(),
            schedule,
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = "-".repeat(self.title.len() * 2);
        writeln!(f, "{rule}")?;
        writeln!(f, "{} {}", " ".repeat(self.title.len() / 2), self.title)?;
        writeln!(f, "{rule}")?;

        writeln!(f, "Gantt schedule")?;
        write!(f, "|")?;
        for slice in &self.schedule.gantt {
            let pid = slice.pid.to_string();
            let padding = " ".repeat(8usize.saturating_sub(pid.len()) / 2);
            write!(f, "{padding}{pid}{padding}|")?;
        }
        writeln!(f)?;
        for slice in &self.schedule.gantt {
            write!(f, "{}\t", slice.start)?;
        }
        if let Some(last) = self.schedule.gantt.last() {
            write!(f, "{}", last.stop)?;
        }
        writeln!(f)?;
        writeln!(f)?;

        writeln!(f, "Schedule table")?;
        writeln!(f, "ID\tPRIORITY\tBURST\tARRIVAL\tWAIT\tTURNAROUND\tEXIT")?;
        for row in &self.schedule.metrics {
            if !self.decimal_times {
                writeln!(f, "{}", row)?;
                continue;
            }
            writeln!(
                f,
                "{}\t{}\t{}\t{}\t{:.2}\t{:.2}\t{}",
                row.pid,
                row.priority,
                row.burst,
                row.arrival,
                row.wait as f64,
                row.turnaround as f64,
                row.completion
            )?;
        }

        let statistics = &self.schedule.statistics;
        writeln!(f, "Average wait: {:.2}", statistics.average_wait)?;
        writeln!(f, "Average turnaround: {:.2}", statistics.average_turnaround)?;
        writeln!(f, "Throughput: {:.2}/t", statistics.throughput)
    }
}

/// The processor simulator.
///
/// It owns the pristine process records and lends them, read only, to every
/// policy it runs.
pub struct Processor {
    processes: Vec<Process>,
}

impl Processor {
    pub fn new(processes: Vec<Process>) -> Self {
        Processor { processes }
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Run a single policy over the process records.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use processor::Processor;
    /// use scheduler::Process;
    ///
    /// let processor = Processor::new(vec![Process::new(1, 24, 0), Process::new(2, 3, 0)]);
    /// let report = processor.run(&scheduler::fcfs());
    ///
    /// println!("{}", report);
    /// ```
    pub fn run<S>(&self, policy: &S) -> Report
    where
        S: SchedulingPolicy + ?Sized,
    {
        let span = info_span!("policy", name = policy.name());
        let _guard = span.enter();

        let schedule = policy.run(&self.processes);
        self.observe(&schedule);

        info!(
            slices = schedule.gantt.len(),
            rows = schedule.metrics.len(),
            average_wait = schedule.statistics.average_wait,
            average_turnaround = schedule.statistics.average_turnaround,
            throughput = schedule.statistics.throughput,
            "schedule complete"
        );

        Report::new(policy, schedule)
    }

    /// Run every policy, in reporting order.
    pub fn run_all(&self, quantum: NonZeroUsize) -> Vec<Report> {
        scheduler::policies(quantum)
            .iter()
            .map(|policy| self.run(policy.as_ref()))
            .collect()
    }

    // Every process must complete once and run for exactly its burst
    fn observe(&self, schedule: &Schedule) {
        debug_assert_eq!(
            schedule.metrics.len(),
            self.processes.len(),
            "schedule must complete every process exactly once"
        );

        let mut ran: HashMap<Pid, Ticks> = HashMap::new();
        for slice in &schedule.gantt {
            debug_assert!(slice.stop >= slice.start, "slice {slice} runs backwards");
            *ran.entry(slice.pid).or_default() += slice.duration();
        }
        for process in &self.processes {
            debug_assert_eq!(
                ran.get(&process.pid).copied().unwrap_or_default(),
                process.burst,
                "process {} did not run for its burst",
                process.pid
            );
        }
    }
}

/// Run every policy over `processes`.
///
/// * `processes` - the records, shared read only by every policy.
/// * `quantum` - the round robin quantum.
pub fn simulate(processes: &[Process], quantum: NonZeroUsize) -> Vec<Report> {
    Processor::new(processes.to_vec()).run_all(quantum)
}

/// Format the [`Processor`]'s reports to a [`String`].
///
/// * `reports` - the reports returned by the [`Processor`].
///
/// ## Example
///
/// ```rust
/// use processor::{format_reports, simulate};
/// use scheduler::Process;
/// use std::num::NonZeroUsize;
///
/// let reports = simulate(&[Process::new(1, 5, 0)], NonZeroUsize::new(2).unwrap());
///
/// println!("{}", format_reports(&reports));
/// ```
pub fn format_reports(reports: &[Report]) -> String {
    let mut s = String::new();
    for report in reports {
        s.push_str(&format!("{}\n", report));
    }
    s
}
