//! Output writer that leaves unchanged files untouched.

use crate::error::CodegenError;
use crate::generator::Artifact;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// What happened to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file did not exist.
    Created,
    /// The file existed with other contents and was replaced.
    Changed,
    /// The file already had these contents and was not written.
    Unchanged,
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("created"),
            Self::Changed => f.write_str("changed"),
            Self::Unchanged => f.write_str("unchanged"),
        }
    }
}

/// Writes `contents` to `path` unless the file already holds exactly that.
///
/// # Errors
/// Returns any IO error other than the file not existing.
pub fn write_if_changed(path: &Path, contents: &str) -> io::Result<WriteOutcome> {
    let outcome = match std::fs::read(path) {
        Ok(existing) if existing == contents.as_bytes() => return Ok(WriteOutcome::Unchanged),
        Ok(_) => WriteOutcome::Changed,
        Err(err) if err.kind() == io::ErrorKind::NotFound => WriteOutcome::Created,
        Err(err) => return Err(err),
    };
    std::fs::write(path, contents)?;
    Ok(outcome)
}

/// Writes artifacts into `dir`, creating it if needed.
///
/// # Errors
/// Returns the first IO error.
pub fn write_artifacts(
    dir: &Path,
    artifacts: &[Artifact],
) -> Result<Vec<(PathBuf, WriteOutcome)>, CodegenError> {
    std::fs::create_dir_all(dir)?;

    let mut outcomes = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = dir.join(&artifact.file_name);
        let outcome = write_if_changed(&path, &artifact.contents)?;
        tracing::info!("{} {} ({})", outcome, path.display(), artifact.kind);
        outcomes.push((path, outcome));
    }
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ArtifactKind;

    #[test]
    fn test_write_if_changed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Widget.rs");

        assert_eq!(write_if_changed(&path, "a").unwrap(), WriteOutcome::Created);
        assert_eq!(write_if_changed(&path, "a").unwrap(), WriteOutcome::Unchanged);
        assert_eq!(write_if_changed(&path, "ab").unwrap(), WriteOutcome::Changed);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ab");

        // Replacement is whole-file, never an append or a partial overwrite.
        assert_eq!(write_if_changed(&path, "x").unwrap(), WriteOutcome::Changed);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "x");
    }

    #[test]
    fn test_unchanged_file_is_not_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mod.rs");
        std::fs::write(&path, "same").unwrap();

        let mut permissions = std::fs::metadata(&path).unwrap().permissions();
        permissions.set_readonly(true);
        std::fs::set_permissions(&path, permissions).unwrap();

        // A write attempt would fail on the read-only file.
        assert_eq!(write_if_changed(&path, "same").unwrap(), WriteOutcome::Unchanged);
    }

    #[test]
    fn test_write_artifacts_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("generated");
        let artifacts = [Artifact {
            file_name: "mod.rs".to_string(),
            kind: ArtifactKind::Index,
            contents: "// empty\n".to_string(),
        }];

        let outcomes = write_artifacts(&out, &artifacts).unwrap();
        assert_eq!(outcomes, [(out.join("mod.rs"), WriteOutcome::Created)]);

        let outcomes = write_artifacts(&out, &artifacts).unwrap();
        assert_eq!(outcomes[0].1, WriteOutcome::Unchanged);
    }
}
