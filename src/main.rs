use anyhow::Context;
use clap::Parser;
use quadmark::cli::{Cli, Command};
use quadmark::{commands, init_logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging().context("failed to initialize logging")?;

    match cli.command {
        Command::Render(args) => commands::render(&args),
        Command::Config(args) => commands::config(&args),
    }
}
