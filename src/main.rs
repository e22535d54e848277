//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `attendance_dashboard` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use attendance_dashboard::app::run_shell;
use attendance_dashboard::config::{Cli, Command, SearchArgs};
use attendance_dashboard::initialization::init_logger_with;
use attendance_dashboard::table::render_table;
use attendance_dashboard::{ApiClient, Dashboard};

async fn search(api: ApiClient, args: SearchArgs) -> Result<()> {
    let mut dashboard = Dashboard::new(api);
    *dashboard.filters_mut() = args.filters();

    let result = dashboard.search().await;
    if !result.success {
        eprintln!("{}", result.message);
    }
    print!("{}", render_table(&result.rows));

    if let Some(path) = args.export.as_deref() {
        match dashboard
            .export(path)
            .with_context(|| format!("Failed to export to {}", path.display()))?
        {
            Some(summary) => println!(
                "Exported {} row{} to {}",
                summary.rows,
                if summary.rows == 1 { "" } else { "s" },
                summary.path.display()
            ),
            None => println!("Nothing to export."),
        }
    }
    Ok(())
}

async fn spots(api: ApiClient) -> Result<()> {
    let spots = api
        .fetch_spots()
        .await
        .context("Failed to fetch the spot list")?;
    if spots.is_empty() {
        println!("No spots.");
    }
    for spot in &spots {
        println!("{}", spot.label());
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    let api = ApiClient::new(&config).context("Failed to initialize the API client")?;

    match cli.command {
        Command::Search(args) => search(api, args).await,
        Command::Spots => spots(api).await,
        Command::Shell => {
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            run_shell(Dashboard::new(api), input).await.map(|_| ())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(cli).await {
        eprintln!("attendance_dashboard error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
