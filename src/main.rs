use anyhow::Result;
use clap::Parser;
use commitgrid::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.execute()
}
