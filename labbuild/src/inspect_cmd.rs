use anyhow::{Context, Result};
use ios_config_core::parse_file;
use labbuild::inspect::{build_inspect_report, render_inspect_text};

use crate::cli::{InspectArgs, OutputFormat};

pub fn run_inspect(args: InspectArgs) -> Result<()> {
    let doc = parse_file(&args.file)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;
    let report = build_inspect_report(&doc, args.kind);

    match args.format {
        OutputFormat::Text => println!("{}", render_inspect_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
