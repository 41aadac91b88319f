use crate::Ticks;

/// Aggregate performance figures of one schedule.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Statistics {
    pub average_wait: f64,
    pub average_turnaround: f64,

    /// Completed processes per unit of virtual time.
    pub throughput: f64,
}

impl Statistics {
    /// Derive the statistics of a schedule from its totals.
    ///
    /// * `total_wait` - the sum of the wait times.
    /// * `total_turnaround` - the turnaround total as accumulated by the policy.
    /// * `count` - the number of processes.
    /// * `last_completion` - the clock value the policy finished at.
    ///
    /// An empty schedule has zero averages and a clock that never moved has
    /// zero throughput.
    pub fn aggregate(
        total_wait: Ticks,
        total_turnaround: Ticks,
        count: usize,
        last_completion: Ticks,
    ) -> Statistics {
        if count == 0 {
            return Statistics::default();
        }

        let count = count as f64;
        let throughput = if last_completion > 0 {
            count / last_completion as f64
        } else {
            0.0
        };

        Statistics {
            average_wait: total_wait as f64 / count,
            average_turnaround: total_turnaround as f64 / count,
            throughput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Statistics;

    #[test]
    fn averages_over_count() {
        let stats = Statistics::aggregate(51, 81, 3, 30);
        assert_eq!(stats.average_wait, 17.0);
        assert_eq!(stats.average_turnaround, 27.0);
        assert_eq!(stats.throughput, 0.1);
    }

    #[test]
    fn empty() {
        assert_eq!(Statistics::aggregate(0, 0, 0, 0), Statistics::default());
    }

    #[test]
    fn zero_clock() {
        let stats = Statistics::aggregate(0, 0, 2, 0);
        assert_eq!(stats.throughput, 0.0);
    }
}
