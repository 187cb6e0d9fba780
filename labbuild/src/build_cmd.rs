use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use labbuild::pipeline::{build_lab, BuildOptions, DeviceSource};
use labbuild::report::render_device_dump;
use labbuild::settings::{load_settings, BuildSettings};
use labbuild::topology::{load_lab, DerivedTopology, LabFile};

use crate::cli::BuildArgs;
use crate::path_guard::ensure_outputs_not_inputs;

/// A loaded lab: declaration, its directory, settings and every node's source.
pub struct LoadedLab {
    pub lab: LabFile,
    pub lab_dir: PathBuf,
    pub settings: BuildSettings,
    pub sources: Vec<DeviceSource>,
}

/// Read settings, the lab file and every raw config. Nothing is written.
pub fn load(lab_path: &Path, settings_path: Option<&Path>, no_clean: bool) -> Result<LoadedLab> {
    let mut settings = load_settings(settings_path)?;
    if no_clean {
        settings.clean = false;
    }

    let lab = load_lab(lab_path)?;
    let lab_dir = match lab_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let sources = lab
        .device_sources(&lab_dir)
        .with_context(|| format!("failed to load lab {}", lab_path.display()))?;

    Ok(LoadedLab {
        lab,
        lab_dir,
        settings,
        sources,
    })
}

pub fn run_build(args: BuildArgs) -> Result<()> {
    let LoadedLab {
        lab,
        lab_dir,
        settings,
        sources,
    } = load(&args.lab, args.config.as_deref(), args.no_clean)?;

    let output_dir = args
        .output_dir
        .unwrap_or_else(|| lab_dir.join(&settings.output_dir));
    let topology_path = args
        .topology
        .unwrap_or_else(|| lab_dir.join(&settings.topology_file));
    let config_paths: Vec<PathBuf> = sources
        .iter()
        .map(|s| output_dir.join(format!("{}.cfg", s.node_name)))
        .collect();

    let mut inputs = vec![args.lab.as_path()];
    inputs.extend(args.config.as_deref());
    inputs.extend(sources.iter().map(|s| s.path.as_path()));
    let mut outputs = vec![topology_path.as_path()];
    outputs.extend(config_paths.iter().map(PathBuf::as_path));
    ensure_outputs_not_inputs(&outputs, &inputs)?;

    let build = build_lab(
        sources,
        BuildOptions {
            clean: settings.clean,
        },
    );

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;
    for (device, path) in build.devices.iter().zip(&config_paths) {
        fs::write(path, &device.config)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("[+] wrote {}", path.display());
    }

    DerivedTopology::new(&lab, build.links.clone()).write_file(&topology_path)?;
    println!("[+] generated {}", topology_path.display());

    if args.dump {
        print!("{}", render_device_dump(&build.devices));
    }
    Ok(())
}
