//! Progress reporting for long solves.
//!
//! A [`Progress`] sink is told after every step how many of the steps in the
//! current solve have completed. It is purely advisory: nothing it does can
//! change the solution.
//!
//! Closures work directly as sinks:
//!
//! ```
//! use ndarray::prelude::*;
//! use ndarray_odesolver::Integrator;
//!
//! let mut solver = Integrator::forward_euler(|y: ArrayView1<'_, f64>, _t: f64| y.mapv(|v| -v));
//! solver.set_initial_conditions(1.).unwrap();
//!
//! let mut seen = Vec::new();
//! solver
//!     .solve_with_progress(vec![0., 0.1, 0.2], |step: usize, total: usize| {
//!         seen.push((step, total))
//!     })
//!     .unwrap();
//! assert_eq!(seen, vec![(1, 2), (2, 2)]);
//! ```

use log::info;

/// Receives `(completed steps, total steps)` notifications.
pub trait Progress {
    fn report(&mut self, step: usize, total: usize);
}

/// Blanket implementation for closures.
impl<F> Progress for F
where
    F: FnMut(usize, usize),
{
    fn report(&mut self, step: usize, total: usize) {
        self(step, total)
    }
}

/// Ignores all notifications.
impl Progress for () {
    fn report(&mut self, _step: usize, _total: usize) {}
}

/// Writes an `info` log record each time another `interval` percent of the
/// steps has completed.
#[derive(Debug, Clone)]
pub struct LogProgress {
    interval: usize,
    next: usize,
}

impl LogProgress {
    /// Creates a sink logging every `interval` percent, clamped to `1..=100`.
    pub fn new(interval: usize) -> LogProgress {
        let interval = interval.max(1).min(100);
        LogProgress {
            interval,
            next: interval,
        }
    }

    /// Returns the percentage to report for this step, if a milestone was
    /// crossed.
    fn milestone(&mut self, step: usize, total: usize) -> Option<usize> {
        if total == 0 {
            return None;
        }
        if step <= 1 {
            // New solve; start counting milestones again.
            self.next = self.interval;
        }
        let percent = step.saturating_mul(100) / total;
        if percent < self.next {
            return None;
        }
        while self.next <= percent {
            self.next += self.interval;
        }
        Some(percent)
    }
}

impl Default for LogProgress {
    fn default() -> LogProgress {
        LogProgress::new(10)
    }
}

impl Progress for LogProgress {
    fn report(&mut self, step: usize, total: usize) {
        if let Some(percent) = self.milestone(step, total) {
            info!("step {}/{} ({}%)", step, total, percent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestones(sink: &mut LogProgress, total: usize) -> Vec<usize> {
        (1..=total)
            .filter_map(|step| sink.milestone(step, total))
            .collect()
    }

    #[test]
    fn reports_each_interval_once() {
        let mut sink = LogProgress::new(25);
        assert_eq!(milestones(&mut sink, 8), vec![25, 50, 75, 100]);
    }

    #[test]
    fn coarse_grid_skips_missed_milestones() {
        let mut sink = LogProgress::new(10);
        assert_eq!(milestones(&mut sink, 3), vec![33, 66, 100]);
    }

    #[test]
    fn restarts_for_new_solve() {
        let mut sink = LogProgress::new(50);
        assert_eq!(milestones(&mut sink, 4), vec![50, 100]);
        assert_eq!(milestones(&mut sink, 4), vec![50, 100]);
    }

    #[test]
    fn interval_is_clamped() {
        let mut sink = LogProgress::new(0);
        assert_eq!(milestones(&mut sink, 200).len(), 100);
        let mut sink = LogProgress::new(500);
        assert_eq!(milestones(&mut sink, 7), vec![100]);
    }

    #[test]
    fn closure_sink_receives_calls() {
        let mut calls = Vec::new();
        {
            let mut sink = |step: usize, total: usize| calls.push((step, total));
            sink.report(1, 3);
            sink.report(2, 3);
        }
        assert_eq!(calls, vec![(1, 3), (2, 3)]);
    }
}
