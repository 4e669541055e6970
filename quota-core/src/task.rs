//! Task model for the sales analytics engine.
//!
//! The engine never mutates a `Task`; callers own storage and hand us
//! read-only snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Expected-value weight used for pipeline estimates:
    /// a Todo deal is worth 10% of face value, an in-progress deal 50%,
    /// a closed deal 100%.
    pub fn pipeline_weight(&self) -> f64 {
        match self {
            TaskStatus::Todo => 0.1,
            TaskStatus::InProgress => 0.5,
            TaskStatus::Done => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Fixed reporting order for per-priority breakdowns.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Integer weight used as a ranking tie-break: High=3, Medium=2, Low=1.
    pub fn weight(&self) -> i64 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

/// Core task type.
///
/// Note: we keep this small + serializable. Where the records come from
/// (seed files, HTTP) is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,

    /// Deal value. Any finite number as supplied by the caller; negative
    /// means a loss-making engagement.
    pub revenue: f64,

    /// Hours spent. Non-positive or non-finite means "unmeasured" and the
    /// task gets no ROI.
    pub time_taken: f64,

    pub priority: Priority,
    pub status: TaskStatus,

    pub created_at: DateTime<Utc>,

    /// Set once the task reaches Done.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            revenue: 0.0,
            time_taken: 0.0,
            priority: Priority::Medium,
            status: TaskStatus::Todo,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn with_revenue(mut self, revenue: f64) -> Self {
        self.revenue = revenue;
        self
    }

    pub fn with_time_taken(mut self, hours: f64) -> Self {
        self.time_taken = hours;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn with_completed_at(mut self, at: DateTime<Utc>) -> Self {
        self.completed_at = Some(at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_builder_defaults() {
        let t = Task::new("t1", "Renew Acme contract");
        assert_eq!(t.priority, Priority::Medium);
        assert_eq!(t.status, TaskStatus::Todo);
        assert_eq!(t.revenue, 0.0);
        assert!(t.completed_at.is_none());
    }

    #[test]
    fn test_priority_weights() {
        assert_eq!(Priority::High.weight(), 3);
        assert_eq!(Priority::Medium.weight(), 2);
        assert_eq!(Priority::Low.weight(), 1);
    }

    #[test]
    fn test_pipeline_weights() {
        assert_eq!(TaskStatus::Todo.pipeline_weight(), 0.1);
        assert_eq!(TaskStatus::InProgress.pipeline_weight(), 0.5);
        assert_eq!(TaskStatus::Done.pipeline_weight(), 1.0);
    }

    #[test]
    fn test_serde_round_trip() {
        let created = Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap();
        let t = Task::new("t2", "Demo for Initech")
            .with_revenue(1200.0)
            .with_time_taken(6.5)
            .with_priority(Priority::High)
            .with_status(TaskStatus::Done)
            .with_created_at(created)
            .with_completed_at(created + chrono::Duration::days(3));

        let json = serde_json::to_string(&t).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
