use anyhow::Result;
use labbuild::pipeline::{build_lab, BuildOptions};
use labbuild::report::{build_plan_report, render_plan_text};

use crate::build_cmd::load;
use crate::cli::{OutputFormat, PlanArgs};

pub fn run_plan(args: PlanArgs) -> Result<()> {
    let loaded = load(&args.lab, args.config.as_deref(), args.no_clean)?;
    let build = build_lab(
        loaded.sources,
        BuildOptions {
            clean: loaded.settings.clean,
        },
    );
    let report = build_plan_report(&build);

    match args.format {
        OutputFormat::Text => println!("{}", render_plan_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
