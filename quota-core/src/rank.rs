//! Derivation and ranking: per-task ROI, priority weight, and the
//! deterministic display order.

use crate::task::Task;
use serde::Serialize;
use std::cmp::Ordering;

/// ROI = revenue / hours spent.
///
/// `None` when no finite quotient exists: non-finite operands, zero or
/// negative time. NaN and infinities never come out of here.
pub fn compute_roi(revenue: f64, time_taken: f64) -> Option<f64> {
    if !revenue.is_finite() || !time_taken.is_finite() || time_taken <= 0.0 {
        return None;
    }
    let roi = revenue / time_taken;
    roi.is_finite().then_some(roi)
}

/// A task plus its computed display fields.
///
/// Regenerated from the source `Task` on every call; it carries no
/// identity of its own and is discarded after rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedTask {
    pub task: Task,
    pub roi: Option<f64>,
    pub priority_weight: i64,
}

impl DerivedTask {
    pub fn from_task(task: &Task) -> Self {
        Self {
            roi: compute_roi(task.revenue, task.time_taken),
            priority_weight: task.priority.weight(),
            task: task.clone(),
        }
    }
}

/// Enrich a whole snapshot for display.
pub fn derive_all(tasks: &[Task]) -> Vec<DerivedTask> {
    tasks.iter().map(DerivedTask::from_task).collect()
}

/// Rank tasks for display. Returns a new vector; the input is untouched.
///
/// Comparator (a total order, so any permutation of equal input sorts to
/// byte-identical output):
/// 1) ROI descending, undefined ROI substituted with negative infinity
/// 2) priority weight descending
/// 3) title ascending
pub fn sort_tasks(tasks: &[DerivedTask]) -> Vec<DerivedTask> {
    let mut ranked = tasks.to_vec();
    ranked.sort_by(compare_ranked);
    ranked
}

fn compare_ranked(a: &DerivedTask, b: &DerivedTask) -> Ordering {
    let a_roi = a.roi.unwrap_or(f64::NEG_INFINITY);
    let b_roi = b.roi.unwrap_or(f64::NEG_INFINITY);
    b_roi
        .total_cmp(&a_roi)
        .then_with(|| b.priority_weight.cmp(&a.priority_weight))
        .then_with(|| a.task.title.cmp(&b.task.title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Priority, TaskStatus};

    fn task(title: &str, revenue: f64, hours: f64, priority: Priority) -> Task {
        Task::new(format!("t-{title}"), title)
            .with_revenue(revenue)
            .with_time_taken(hours)
            .with_priority(priority)
            .with_status(TaskStatus::Done)
    }

    #[test]
    fn test_roi_basic() {
        assert_eq!(compute_roi(1000.0, 10.0), Some(100.0));
        assert_eq!(compute_roi(-500.0, 5.0), Some(-100.0));
        assert_eq!(compute_roi(0.0, 8.0), Some(0.0));
    }

    #[test]
    fn test_roi_undefined_cases() {
        assert_eq!(compute_roi(100.0, 0.0), None);
        assert_eq!(compute_roi(100.0, -2.0), None);
        assert_eq!(compute_roi(f64::NAN, 10.0), None);
        assert_eq!(compute_roi(100.0, f64::NAN), None);
        assert_eq!(compute_roi(f64::INFINITY, 10.0), None);
        // Finite operands whose quotient overflows are undefined too.
        assert_eq!(compute_roi(f64::MAX, f64::MIN_POSITIVE), None);
    }

    #[test]
    fn test_sort_by_roi_desc() {
        let a = DerivedTask::from_task(&task("A", 1000.0, 10.0, Priority::High));
        let b = DerivedTask::from_task(&task("B", 500.0, 10.0, Priority::Low));
        let ranked = sort_tasks(&[b, a]);
        assert_eq!(ranked[0].task.title, "A");
        assert_eq!(ranked[0].roi, Some(100.0));
        assert_eq!(ranked[1].roi, Some(50.0));
    }

    #[test]
    fn test_undefined_roi_ranks_last() {
        let measured = DerivedTask::from_task(&task("loss", -100.0, 10.0, Priority::Low));
        let unmeasured = DerivedTask::from_task(&task("untracked", 9999.0, 0.0, Priority::High));
        let ranked = sort_tasks(&[unmeasured, measured]);
        // Even a negative ROI beats an undefined one.
        assert_eq!(ranked[0].task.title, "loss");
        assert_eq!(ranked[1].roi, None);
    }

    #[test]
    fn test_equal_roi_breaks_on_priority_then_title() {
        let high = DerivedTask::from_task(&task("zeta", 100.0, 1.0, Priority::High));
        let low = DerivedTask::from_task(&task("alpha", 100.0, 1.0, Priority::Low));
        let medium = DerivedTask::from_task(&task("beta", 100.0, 1.0, Priority::Medium));
        let ranked = sort_tasks(&[low.clone(), medium, high]);
        assert_eq!(ranked[0].task.title, "zeta");
        assert_eq!(ranked[1].task.title, "beta");
        assert_eq!(ranked[2].task.title, "alpha");

        // Same ROI and priority: alphabetical.
        let low2 = DerivedTask::from_task(&task("aardvark", 100.0, 1.0, Priority::Low));
        let ranked = sort_tasks(&[low, low2]);
        assert_eq!(ranked[0].task.title, "aardvark");
    }

    #[test]
    fn test_sort_is_deterministic_under_permutation() {
        let tasks: Vec<DerivedTask> = [
            task("A", 100.0, 1.0, Priority::High),
            task("B", 100.0, 1.0, Priority::High),
            task("C", 0.0, 0.0, Priority::Low),
            task("D", 50.0, 1.0, Priority::Medium),
            task("E", 100.0, 1.0, Priority::Low),
        ]
        .iter()
        .map(DerivedTask::from_task)
        .collect();

        let sorted = sort_tasks(&tasks);
        let reversed: Vec<DerivedTask> = tasks.iter().rev().cloned().collect();
        assert_eq!(sort_tasks(&reversed), sorted);

        let rotated: Vec<DerivedTask> = tasks[2..]
            .iter()
            .chain(&tasks[..2])
            .cloned()
            .collect();
        assert_eq!(sort_tasks(&rotated), sorted);
    }

    #[test]
    fn test_sort_is_idempotent_and_nonmutating() {
        let tasks: Vec<DerivedTask> = [
            task("B", 10.0, 1.0, Priority::Low),
            task("A", 20.0, 1.0, Priority::High),
        ]
        .iter()
        .map(DerivedTask::from_task)
        .collect();

        let input_before = tasks.clone();
        let once = sort_tasks(&tasks);
        let twice = sort_tasks(&once);
        assert_eq!(once, twice);
        assert_eq!(tasks, input_before);
    }
}
