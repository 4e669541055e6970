use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod export;
mod fetch;
mod load;
mod render;

#[derive(Parser, Debug)]
#[command(name = "quota", version, about = "Sales-task analytics CLI")]
struct Cli {
    /// IANA timezone for naive seed timestamps (e.g. America/Chicago)
    #[arg(long, global = true, default_value = "UTC")]
    tz: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Full dashboard: metrics, funnel, velocity, pipeline, forecast, cohorts
    Report {
        /// Seed file (.json array or .csv export)
        #[arg(long)]
        input: PathBuf,
    },

    /// Ranked task list with per-task ROI
    Rank {
        #[arg(long)]
        input: PathBuf,

        /// Limit number of tasks printed (default: 20)
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Write ranked.csv and weekly.csv for spreadsheet use
    Export {
        #[arg(long)]
        input: PathBuf,

        /// Output directory (default: current directory)
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },

    /// Fetch a JSON seed over HTTP, normalize it, and save a snapshot
    Fetch {
        #[arg(long)]
        url: String,

        /// Where to write the normalized snapshot
        #[arg(long, default_value = "tasks.json")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Report { input } => {
            let tasks = load::load_tasks(&input, &cli.tz)?;
            render::print_dashboard(&tasks);
        }

        Command::Rank { input, limit } => {
            let tasks = load::load_tasks(&input, &cli.tz)?;
            render::print_ranked(&tasks, limit);
        }

        Command::Export { input, out } => {
            let tasks = load::load_tasks(&input, &cli.tz)?;
            export::export_csv(&tasks, &out)?;
            println!("Exported {} tasks to {}", tasks.len(), out.display());
        }

        Command::Fetch { url, out } => {
            let tasks = fetch::fetch_seed(&url, &cli.tz).await?;
            fetch::write_snapshot(&tasks, &out)?;
            println!("Saved {} normalized tasks to {}", tasks.len(), out.display());
        }
    }

    Ok(())
}
