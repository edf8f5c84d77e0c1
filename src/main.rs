//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_checker` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::process;

use dns_checker::initialization::init_logger_with;
use dns_checker::{run_check, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    // Options may come from a .env file: current directory first, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_check(opt).await {
        Ok(report) => {
            println!(
                "Checked {} domain{}: {} alive, {} dead, {} invalid, {} transient errors in {:.1}s",
                report.total_domains,
                if report.total_domains == 1 { "" } else { "s" },
                report.alive.to_string().green(),
                report.dead.to_string().red(),
                report.invalid,
                report.transient,
                report.elapsed_seconds
            );
            for path in [&report.alive_path, &report.dead_path].into_iter().flatten() {
                println!("Results saved in {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("dns_checker error: {:#}", e);
            process::exit(1);
        }
    }
}
