use anyhow::Result;
use clap::Parser;
use hangterm::cli::{run_cli, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with the game on stdout
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    run_cli(cli)
}
