//! Plain-text dashboard rendering.

use quota_core::{
    Task, cohort_revenue, compute_funnel, compute_metrics, derive_all, forecast, sort_tasks,
    throughput_by_week, velocity_by_priority, weighted_pipeline,
};

const FORECAST_HORIZON_WEEKS: usize = 4;

pub fn print_dashboard(tasks: &[Task]) {
    let m = compute_metrics(tasks);
    println!("# Performance\n");
    println!("Closed revenue:   ${:.2}", m.total_revenue);
    println!("Hours logged:     {:.1}", m.total_time_taken);
    println!("Completion:       {:.1}%", m.time_efficiency_pct);
    println!("Revenue per hour: ${:.2}", m.revenue_per_hour);
    println!("Average ROI:      {:.1}", m.average_roi);
    println!("Grade:            {:?}", m.grade);

    let f = compute_funnel(tasks);
    println!("\n# Funnel\n");
    println!("Todo: {}  In progress: {}  Done: {}", f.todo, f.in_progress, f.done);
    println!("Advance ratio: {:.2}  Close ratio: {:.2}", f.advance_ratio, f.close_ratio);

    println!("\n# Velocity (days to close)\n");
    for v in velocity_by_priority(tasks) {
        println!(
            "{:<8} closed={:<3} avg={:<6.1} median={:.1}",
            format!("{:?}", v.priority),
            v.completed,
            v.avg_days,
            v.median_days
        );
    }

    println!("\n# Pipeline\n");
    println!("Weighted pipeline value: ${:.2}", weighted_pipeline(tasks));

    let weeks = throughput_by_week(tasks);
    println!("\n# Weekly throughput\n");
    if weeks.is_empty() {
        println!("(no completed tasks yet)");
    }
    for w in &weeks {
        println!("{}  closed={:<3} revenue=${:.2}", w.week, w.count, w.revenue);
    }
    for p in forecast(&weeks, FORECAST_HORIZON_WEEKS) {
        println!("{:>8}  forecast revenue=${:.2}", p.week, p.revenue);
    }

    println!("\n# Cohorts (by creation week)\n");
    for c in cohort_revenue(tasks) {
        println!(
            "{}  {:<8} revenue=${:.2}",
            c.week,
            format!("{:?}", c.priority),
            c.revenue
        );
    }
}

pub fn print_ranked(tasks: &[Task], limit: usize) {
    let ranked = sort_tasks(&derive_all(tasks));
    println!("{:<4} {:<30} {:<8} {:>10} {:>8} {:>10}", "#", "title", "prio", "revenue", "hours", "roi");

    for (i, d) in ranked.iter().take(limit).enumerate() {
        let roi = match d.roi {
            Some(r) => format!("{r:.1}"),
            None => "n/a".to_string(),
        };
        println!(
            "{:<4} {:<30} {:<8} {:>10.2} {:>8.1} {:>10}",
            i + 1,
            truncate(&d.task.title, 30),
            format!("{:?}", d.task.priority),
            d.task.revenue,
            d.task.time_taken,
            roi
        );
    }

    if ranked.len() > limit {
        println!("… and {} more", ranked.len() - limit);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}
