//! Weighted pipeline value: expected revenue across the whole snapshot,
//! discounted by how far each task has progressed.

use crate::task::Task;

/// Σ revenue × status weight (Todo 0.1, In Progress 0.5, Done 1.0).
///
/// Counts every task regardless of completion; non-finite revenue
/// contributes nothing.
pub fn weighted_pipeline(tasks: &[Task]) -> f64 {
    tasks
        .iter()
        .filter(|t| t.revenue.is_finite())
        .map(|t| t.revenue * t.status.pipeline_weight())
        .sum()
}
