use std::collections::HashMap;
use std::num::NonZeroUsize;

use proptest::prelude::*;
use scheduler::{policies, Process, SchedulingPolicy};

/// Batches of up to 12 processes with unique PIDs.
fn batch() -> impl Strategy<Value = Vec<Process>> {
    prop::collection::vec((1i64..20, 0i64..40, -2i64..6), 0..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (burst, arrival, priority))| {
                Process::new(index as i64 + 1, burst, arrival).with_priority(priority)
            })
            .collect()
    })
}

fn all(quantum: usize) -> Vec<Box<dyn SchedulingPolicy>> {
    policies(NonZeroUsize::new(quantum).unwrap())
}

proptest! {
    #[test]
    fn slices_add_up_to_burst(processes in batch(), quantum in 1usize..5) {
        for policy in all(quantum) {
            let schedule = policy.run(&processes);
            let mut ran: HashMap<i64, i64> = HashMap::new();
            for slice in &schedule.gantt {
                prop_assert!(slice.stop >= slice.start);
                *ran.entry(slice.pid.get()).or_default() += slice.duration();
            }
            for process in &processes {
                prop_assert_eq!(
                    ran.get(&process.pid.get()).copied(),
                    Some(process.burst),
                    "{} lost time for {}",
                    policy.name(),
                    process.pid
                );
            }
        }
    }

    #[test]
    fn every_process_completes_once(processes in batch(), quantum in 1usize..5) {
        for policy in all(quantum) {
            let schedule = policy.run(&processes);
            prop_assert_eq!(schedule.metrics.len(), processes.len());

            let mut pids: Vec<i64> = schedule.metrics.iter().map(|row| row.pid.get()).collect();
            pids.sort_unstable();
            let expected: Vec<i64> = (1..=processes.len() as i64).collect();
            prop_assert_eq!(pids, expected);
        }
    }

    #[test]
    fn deterministic(processes in batch(), quantum in 1usize..5) {
        for (first, second) in all(quantum).into_iter().zip(all(quantum)) {
            let copy = processes.clone();
            prop_assert_eq!(first.run(&processes), second.run(&copy));
        }
    }

    #[test]
    fn throughput_matches_own_clock(processes in batch(), quantum in 1usize..5) {
        prop_assume!(!processes.is_empty());
        for policy in all(quantum) {
            let schedule = policy.run(&processes);
            let clock = match policy.name() {
                "First-come, first-serve" => schedule.metrics.last().map(|row| row.completion),
                _ => schedule.gantt.last().map(|slice| slice.stop),
            }
            .unwrap_or_default();
            prop_assert_eq!(
                schedule.statistics.throughput,
                processes.len() as f64 / clock as f64
            );
        }
    }
}
