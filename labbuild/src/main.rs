use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod build_cmd;
mod cli;
mod inspect_cmd;
mod path_guard;
mod plan_cmd;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build(args) => build_cmd::run_build(args),
        Command::Plan(args) => plan_cmd::run_plan(args),
        Command::Inspect(args) => inspect_cmd::run_inspect(args),
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
