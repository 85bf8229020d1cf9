use crate::config::Config;
use crate::graph::{process_repositories, render_graph};
use crate::scan;
use anyhow::Context;
use chrono::Local;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "commitgrid")]
#[command(about = "Scan local git clones and render a six-month commit activity calendar")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, help = "Folder to scan for repositories")]
    pub folder: Option<PathBuf>,

    #[arg(short, long, help = "Author email to filter by")]
    pub email: Option<String>,

    #[arg(short, long, help = "Print per-phase timings")]
    pub verbose: bool,
}

impl Cli {
    pub fn execute(self) -> anyhow::Result<()> {
        let start = Instant::now();

        let config =
            Config::load(self.folder, self.email).context("Failed to load configuration")?;

        println!(
            "Scanning {} for commits by {}",
            style(config.folder.display()).cyan(),
            style(&config.email).cyan()
        );

        let phase = Instant::now();
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Scanning repositories...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        let repos = scan::scan(&config.folder).context("Failed to scan for repositories")?;
        spinner.finish_and_clear();

        if self.verbose {
            println!("[perf] scan: {:.2?}", phase.elapsed());
            println!("[info] processing {} repositories", repos.len());
        }

        let now = Local::now();

        let phase = Instant::now();
        let table = process_repositories(&config.email, &repos, now)
            .context("Failed to aggregate commit history")?;
        if self.verbose {
            println!("[perf] aggregate: {:.2?}", phase.elapsed());
        }

        println!();
        print!("{}", render_graph(&table, now));

        let elapsed = Duration::from_millis(start.elapsed().as_millis() as u64);
        println!("\nDone in {}", humantime::format_duration(elapsed));

        Ok(())
    }
}
