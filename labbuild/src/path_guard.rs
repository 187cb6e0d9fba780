use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Fail when any output path resolves to one of the inputs or to another output.
pub fn ensure_outputs_not_inputs(outputs: &[&Path], inputs: &[&Path]) -> Result<()> {
    let inputs = inputs
        .iter()
        .map(|input| {
            normalize_for_compare(input)
                .with_context(|| format!("failed to normalize input path {}", input.display()))
                .map(|norm| (norm, *input))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut written: Vec<(PathBuf, &Path)> = Vec::with_capacity(outputs.len());
    for output in outputs {
        let out_norm = normalize_for_compare(output)
            .with_context(|| format!("failed to normalize output path {}", output.display()))?;
        if let Some((_, input)) = inputs.iter().find(|(norm, _)| *norm == out_norm) {
            bail!(
                "refusing to overwrite source file: output {} matches input {}",
                output.display(),
                input.display()
            );
        }
        if let Some((_, earlier)) = written.iter().find(|(norm, _)| *norm == out_norm) {
            bail!(
                "refusing to write two outputs to one file: {} matches {}",
                output.display(),
                earlier.display()
            );
        }
        written.push((out_norm, *output));
    }
    Ok(())
}

fn normalize_for_compare(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return path
            .canonicalize()
            .with_context(|| format!("canonicalize {}", path.display()));
    }

    // Outputs that do not exist yet: resolve the parent when it exists so a
    // symlinked or `..`-laden output dir still compares equal.
    if let (Some(parent), Some(file)) = (path.parent(), path.file_name()) {
        if !parent.as_os_str().is_empty() && parent.exists() {
            let parent = parent
                .canonicalize()
                .with_context(|| format!("canonicalize {}", parent.display()))?;
            return Ok(parent.join(file));
        }
    }

    let base = if path.is_absolute() {
        PathBuf::new()
    } else {
        std::env::current_dir().context("current_dir")?
    };
    Ok(base.join(path))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::ensure_outputs_not_inputs;

    #[test]
    fn output_matching_input_through_dotdot_is_refused() {
        let dir = tempfile::tempdir().expect("tempdir");
        let configs = dir.path().join("configs");
        fs::create_dir(&configs).expect("mkdir");
        let raw = configs.join("r1.cfg");
        fs::write(&raw, "hostname r1\n").expect("write");

        let sneaky = configs.join("..").join("configs").join("r1.cfg");
        let err = ensure_outputs_not_inputs(&[sneaky.as_path()], &[raw.as_path()])
            .expect_err("collision should be refused");
        assert!(err.to_string().contains("refusing to overwrite source file"));
    }

    #[test]
    fn colliding_outputs_are_refused() {
        let dir = tempfile::tempdir().expect("tempdir");
        let raw = dir.path().join("r1.cfg");
        fs::write(&raw, "hostname r1\n").expect("write");

        let out = dir.path().join("new_configs").join("r1.cfg");
        let err = ensure_outputs_not_inputs(&[out.as_path(), out.as_path()], &[raw.as_path()])
            .expect_err("duplicate output should be refused");
        assert!(err.to_string().contains("refusing to write two outputs to one file"));
    }

    #[test]
    fn fresh_outputs_pass() {
        let dir = tempfile::tempdir().expect("tempdir");
        let raw = dir.path().join("r1.cfg");
        fs::write(&raw, "hostname r1\n").expect("write");

        let out = dir.path().join("new_configs").join("r1.cfg");
        let topo = dir.path().join("topology.yml");
        ensure_outputs_not_inputs(&[out.as_path(), topo.as_path()], &[raw.as_path()])
            .expect("distinct paths");
    }
}
