use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use labbuild::kind::DeviceKind;

#[derive(Parser, Debug)]
#[command(name = "labbuild")]
#[command(about = "Canonicalize device configs and derive a containerlab topology")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Rewrite every node's config and write the derived topology.
    Build(BuildArgs),
    /// Show mappings, config changes and links without writing anything.
    Plan(PlanArgs),
    /// Show how one raw config is classified.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Lab declaration (lab.yml).
    pub lab: PathBuf,
    /// Derived topology file; defaults to the settings value next to the lab file.
    #[arg(short, long)]
    pub topology: Option<PathBuf>,
    /// Directory for rewritten configs.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
    /// Optional TOML settings file.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Keep lines the per-kind cleanup rules would drop.
    #[arg(long)]
    pub no_clean: bool,
    /// Print every device and its interface mappings after the build.
    #[arg(long)]
    pub dump: bool,
}

#[derive(Parser, Debug)]
pub struct PlanArgs {
    pub lab: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub no_clean: bool,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    pub file: PathBuf,
    /// Device kind used for classification.
    #[arg(long)]
    pub kind: DeviceKind,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
