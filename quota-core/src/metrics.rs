//! Aggregate metrics: scalar reductions over a task snapshot.
//!
//! Every function returns a zero/neutral default on empty input. Non-finite
//! field values are skipped by the sums so no NaN leaks into the results.

use crate::rank::compute_roi;
use crate::task::{Task, TaskStatus};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PerformanceGrade {
    Excellent,
    Good,
    NeedsImprovement,
}

/// Grade an average ROI: above 500 is Excellent, 200 up to and including
/// 500 is Good, everything else Needs Improvement.
pub fn performance_grade(avg_roi: f64) -> PerformanceGrade {
    if avg_roi > 500.0 {
        PerformanceGrade::Excellent
    } else if avg_roi >= 200.0 {
        PerformanceGrade::Good
    } else {
        PerformanceGrade::NeedsImprovement
    }
}

/// Revenue actually closed: Done tasks only.
pub fn total_revenue(tasks: &[Task]) -> f64 {
    tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Done)
        .map(|t| t.revenue)
        .filter(|r| r.is_finite())
        .sum()
}

/// Hours spent across the whole snapshot, Done or not.
pub fn total_time_taken(tasks: &[Task]) -> f64 {
    tasks
        .iter()
        .map(|t| t.time_taken)
        .filter(|h| h.is_finite())
        .sum()
}

/// Percentage of tasks that reached Done.
pub fn time_efficiency(tasks: &[Task]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }
    let done = tasks.iter().filter(|t| t.status == TaskStatus::Done).count();
    done as f64 / tasks.len() as f64 * 100.0
}

/// Closed revenue per hour of total effort; 0 when no time was logged.
pub fn revenue_per_hour(tasks: &[Task]) -> f64 {
    let hours = total_time_taken(tasks);
    if hours > 0.0 {
        let rate = total_revenue(tasks) / hours;
        if rate.is_finite() { rate } else { 0.0 }
    } else {
        0.0
    }
}

/// Mean ROI over tasks with a defined ROI. Tasks with undefined ROI do
/// not count toward the denominator; 0 when nothing is measurable.
pub fn average_roi(tasks: &[Task]) -> f64 {
    let rois: Vec<f64> = tasks
        .iter()
        .filter_map(|t| compute_roi(t.revenue, t.time_taken))
        .collect();
    if rois.is_empty() {
        return 0.0;
    }
    rois.iter().sum::<f64>() / rois.len() as f64
}

/// Full aggregate snapshot, a pure function of the task collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub total_revenue: f64,
    pub total_time_taken: f64,
    pub time_efficiency_pct: f64,
    pub revenue_per_hour: f64,
    pub average_roi: f64,
    pub grade: PerformanceGrade,
}

pub fn compute_metrics(tasks: &[Task]) -> Metrics {
    let avg = average_roi(tasks);
    Metrics {
        total_revenue: total_revenue(tasks),
        total_time_taken: total_time_taken(tasks),
        time_efficiency_pct: time_efficiency(tasks),
        revenue_per_hour: revenue_per_hour(tasks),
        average_roi: avg,
        grade: performance_grade(avg),
    }
}
