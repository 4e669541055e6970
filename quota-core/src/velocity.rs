//! Completion velocity per priority bucket: how many days tasks take from
//! creation to completion.

use crate::task::{Priority, Task};
use crate::time::days_between;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorityVelocity {
    pub priority: Priority,
    pub completed: usize,
    pub avg_days: f64,
    pub median_days: f64,
}

/// One entry per priority, always in High/Medium/Low order. Buckets with
/// no completed tasks report 0/0 rather than being omitted.
///
/// The median of an even-sized bucket is the upper-middle element
/// (`sorted[n/2]`), not an interpolated midpoint; downstream dashboards
/// already show those numbers and they must not shift.
pub fn velocity_by_priority(tasks: &[Task]) -> Vec<PriorityVelocity> {
    Priority::ALL
        .iter()
        .map(|&priority| {
            let mut days: Vec<i64> = tasks
                .iter()
                .filter(|t| t.priority == priority)
                .filter_map(|t| t.completed_at.map(|done| days_between(t.created_at, done)))
                .collect();

            if days.is_empty() {
                return PriorityVelocity {
                    priority,
                    completed: 0,
                    avg_days: 0.0,
                    median_days: 0.0,
                };
            }

            days.sort_unstable();
            let avg_days = days.iter().sum::<i64>() as f64 / days.len() as f64;
            let median_days = days[days.len() / 2] as f64;

            PriorityVelocity {
                priority,
                completed: days.len(),
                avg_days,
                median_days,
            }
        })
        .collect()
}
