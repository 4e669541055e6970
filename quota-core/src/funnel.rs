//! Status funnel: where the snapshot sits in the Todo → In Progress →
//! Done progression.

use crate::task::{Task, TaskStatus};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusFunnel {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,

    /// Share of tasks that left Todo: (in_progress + done) / total.
    pub advance_ratio: f64,

    /// Done per currently in-progress task: done / in_progress.
    pub close_ratio: f64,
}

pub fn compute_funnel(tasks: &[Task]) -> StatusFunnel {
    let mut todo = 0;
    let mut in_progress = 0;
    let mut done = 0;
    for t in tasks {
        match t.status {
            TaskStatus::Todo => todo += 1,
            TaskStatus::InProgress => in_progress += 1,
            TaskStatus::Done => done += 1,
        }
    }

    let total = todo + in_progress + done;
    let advance_ratio = if total > 0 {
        (in_progress + done) as f64 / total as f64
    } else {
        0.0
    };
    let close_ratio = if in_progress > 0 {
        done as f64 / in_progress as f64
    } else {
        0.0
    };

    StatusFunnel {
        todo,
        in_progress,
        done,
        advance_ratio,
        close_ratio,
    }
}
