//! quota-core: the sales-task analytics engine.
//!
//! A pure computation layer: callers hand in a read-only snapshot of
//! tasks and get back derived values, rankings and statistical summaries.
//! No I/O, no shared state, no caching; the same snapshot always produces
//! the same output.

pub mod cohort;
pub mod funnel;
pub mod metrics;
pub mod pipeline;
pub mod rank;
pub mod task;
pub mod throughput;
pub mod time;
pub mod velocity;

pub use cohort::{CohortRevenue, cohort_revenue};
pub use funnel::{StatusFunnel, compute_funnel};
pub use metrics::{
    Metrics, PerformanceGrade, average_roi, compute_metrics, performance_grade, revenue_per_hour,
    time_efficiency, total_revenue, total_time_taken,
};
pub use pipeline::weighted_pipeline;
pub use rank::{DerivedTask, compute_roi, derive_all, sort_tasks};
pub use task::{Priority, Task, TaskStatus};
pub use throughput::{ForecastPoint, WeekBucket, forecast, throughput_by_week};
pub use time::{days_between, iso_week_key, parse_local_to_utc};
pub use velocity::{PriorityVelocity, velocity_by_priority};
