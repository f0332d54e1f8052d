//! Writing rendered artifacts to disk and running the formatter.

use std::fs;
use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::openapi::ir::Artifact;

fn write_all(root: &Path, artifacts: &[Artifact]) -> Result<()> {
    for artifact in artifacts {
        let path = root.join(&artifact.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        fs::write(&path, &artifact.contents).map_err(|e| Error::io(&path, e))?;
        debug!(path = %path.display(), bytes = artifact.contents.len(), "Wrote artifact.");
    }
    Ok(())
}

fn parent_dir(output: &Path) -> PathBuf {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Write artifacts under `output`.
///
/// With `overwrite`, files are first written to a staging directory next to
/// `output`, which then takes its place; the previous directory is only
/// removed once the swap succeeded. Without it, files are written over
/// whatever is already there.
pub fn write_artifacts(output: &Path, artifacts: &[Artifact], overwrite: bool) -> Result<()> {
    if !overwrite {
        fs::create_dir_all(output).map_err(|e| Error::io(output, e))?;
        return write_all(output, artifacts);
    }

    let parent = parent_dir(output);
    fs::create_dir_all(&parent).map_err(|e| Error::io(&parent, e))?;

    let staged = tempfile::Builder::new()
        .prefix(".swagen-staged-")
        .tempdir_in(&parent)
        .map_err(|e| Error::io(&parent, e))?;
    write_all(staged.path(), artifacts)?;

    // Holds the previous output until the new one is in place; removed on drop.
    let retired = tempfile::Builder::new()
        .prefix(".swagen-retired-")
        .tempdir_in(&parent)
        .map_err(|e| Error::io(&parent, e))?;
    let previous = retired.path().join("previous");
    let had_previous = output.exists();
    if had_previous {
        fs::rename(output, &previous).map_err(|e| Error::io(output, e))?;
    }

    if let Err(err) = fs::rename(staged.path(), output) {
        if had_previous && let Err(restore) = fs::rename(&previous, output) {
            warn!(
                error = %restore,
                path = %previous.display(),
                "Failed to restore previous output directory."
            );
        }
        return Err(Error::io(output, err));
    }

    debug!(path = %output.display(), replaced = had_previous, "Swapped in staged output.");
    Ok(())
}

/// Run `command` with the output directory appended as its last argument.
///
/// Returns whether the formatter exited successfully. Failures are logged
/// and never abort a run.
pub async fn run_formatter(command: &str, dir: &Path) -> bool {
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        return false;
    };

    info!(command, dir = %dir.display(), "Running formatter.");
    let result = Command::new(program)
        .args(parts)
        .arg(dir)
        .output()
        .await;

    match result {
        Ok(output) if output.status.success() => {
            debug!(command, "Formatter finished.");
            true
        }
        Ok(output) => {
            warn!(
                command,
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "Formatter exited with an error."
            );
            false
        }
        Err(err) => {
            warn!(command, error = %err, "Failed to start formatter.");
            false
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn artifact(path: &str, contents: &str) -> Artifact {
        Artifact {
            path: PathBuf::from(path),
            contents: contents.to_string(),
        }
    }

    fn leftovers(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with(".swagen-"))
            .collect()
    }

    #[test]
    fn test_overwrite_replaces_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("api");
        fs::create_dir_all(output.join("stale")).unwrap();
        fs::write(output.join("stale/index.ts"), "old").unwrap();

        write_artifacts(
            &output,
            &[artifact("index.ts", "new"), artifact("user/index.ts", "u")],
            true,
        )
        .unwrap();

        assert!(!output.join("stale").exists());
        assert_eq!(fs::read_to_string(output.join("index.ts")).unwrap(), "new");
        assert_eq!(fs::read_to_string(output.join("user/index.ts")).unwrap(), "u");
        assert!(leftovers(dir.path()).is_empty());
    }

    #[test]
    fn test_write_over_keeps_other_files() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("api");
        fs::create_dir_all(&output).unwrap();
        fs::write(output.join("custom.ts"), "mine").unwrap();
        fs::write(output.join("index.ts"), "old").unwrap();

        write_artifacts(&output, &[artifact("index.ts", "new")], false).unwrap();

        assert_eq!(fs::read_to_string(output.join("custom.ts")).unwrap(), "mine");
        assert_eq!(fs::read_to_string(output.join("index.ts")).unwrap(), "new");
    }

    #[test]
    fn test_overwrite_creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("src/services/api");

        write_artifacts(&output, &[artifact("types.ts", "t")], true).unwrap();

        assert_eq!(fs::read_to_string(output.join("types.ts")).unwrap(), "t");
    }

    #[test]
    fn test_failed_staging_leaves_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("api");
        fs::create_dir_all(&output).unwrap();
        fs::write(output.join("index.ts"), "old").unwrap();

        // A file and a directory cannot share the `types.ts` path.
        let err = write_artifacts(
            &output,
            &[artifact("types.ts", "t"), artifact("types.ts/inner.ts", "x")],
            true,
        )
        .unwrap_err();

        assert!(matches!(err, Error::Io { .. }));
        assert_eq!(fs::read_to_string(output.join("index.ts")).unwrap(), "old");
        assert!(leftovers(dir.path()).is_empty());
    }

    #[tokio::test]
    async fn test_missing_formatter_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!run_formatter("swagen-no-such-formatter --write", dir.path()).await);
        assert!(!run_formatter("   ", dir.path()).await);
    }
}
