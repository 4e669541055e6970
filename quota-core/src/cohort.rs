//! Cohort revenue: tasks grouped by creation week and priority, for
//! revenue attribution back to when the work entered the pipeline.

use crate::task::{Priority, Task};
use crate::time::iso_week_key;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortRevenue {
    pub week: String,
    pub priority: Priority,
    pub revenue: f64,
}

/// One entry per distinct (creation week, priority) group, every task
/// included regardless of status. Output is sorted by week then priority
/// weight so repeated runs render identically.
pub fn cohort_revenue(tasks: &[Task]) -> Vec<CohortRevenue> {
    let mut groups: HashMap<(String, Priority), f64> = HashMap::new();

    for t in tasks {
        let key = (iso_week_key(t.created_at), t.priority);
        let entry = groups.entry(key).or_insert(0.0);
        if t.revenue.is_finite() {
            *entry += t.revenue;
        }
    }

    let mut cohorts: Vec<CohortRevenue> = groups
        .into_iter()
        .map(|((week, priority), revenue)| CohortRevenue { week, priority, revenue })
        .collect();

    cohorts.sort_by(|a, b| {
        a.week
            .cmp(&b.week)
            .then_with(|| b.priority.weight().cmp(&a.priority.weight()))
    });
    cohorts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskStatus;
    use chrono::{TimeZone, Utc};

    fn created(day: u32, priority: Priority, revenue: f64) -> Task {
        Task::new("t", "x")
            .with_revenue(revenue)
            .with_priority(priority)
            .with_created_at(Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap())
    }

    #[test]
    fn test_empty_input() {
        assert!(cohort_revenue(&[]).is_empty());
    }

    #[test]
    fn test_groups_by_week_and_priority() {
        let tasks = vec![
            created(4, Priority::High, 100.0), // W10
            created(5, Priority::High, 50.0),  // W10, same group
            created(4, Priority::Low, 30.0),   // W10, other priority
            created(11, Priority::High, 70.0), // W11
        ];
        let cohorts = cohort_revenue(&tasks);
        assert_eq!(cohorts.len(), 3);

        assert_eq!(cohorts[0].week, "2024-W10");
        assert_eq!(cohorts[0].priority, Priority::High);
        assert_eq!(cohorts[0].revenue, 150.0);

        assert_eq!(cohorts[1].week, "2024-W10");
        assert_eq!(cohorts[1].priority, Priority::Low);

        assert_eq!(cohorts[2].week, "2024-W11");
        assert_eq!(cohorts[2].revenue, 70.0);
    }

    #[test]
    fn test_open_tasks_count_too() {
        // Cohorts track entry into the pipeline, not completion.
        let t = created(4, Priority::Medium, 500.0).with_status(TaskStatus::Todo);
        let cohorts = cohort_revenue(&[t]);
        assert_eq!(cohorts.len(), 1);
        assert_eq!(cohorts[0].revenue, 500.0);
    }
}
