//! File export of generated artifacts

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::model::{GeneratedArtifact, Language};

/// Extension used for languages without an entry in the table
pub const FALLBACK_EXTENSION: &str = "txt";

/// Errors that can occur when writing an artifact to disk
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolve the file extension for a language key
pub fn extension_for(language: &str) -> &'static str {
    language
        .parse::<Language>()
        .map(Language::extension)
        .unwrap_or(FALLBACK_EXTENSION)
}

/// File name for an exported artifact: `generated-<type>-<id>.<ext>`
pub fn export_filename(artifact: &GeneratedArtifact) -> String {
    format!(
        "generated-{}-{}.{}",
        artifact.code_type(),
        artifact.id(),
        extension_for(artifact.language().as_str())
    )
}

/// Write the artifact's code into `dir`, returning the full path
pub fn write_artifact(artifact: &GeneratedArtifact, dir: &Path) -> Result<PathBuf, ExportError> {
    let path = dir.join(export_filename(artifact));
    std::fs::create_dir_all(dir)
        .and_then(|_| std::fs::write(&path, artifact.code()))
        .map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;
    info!(path = %path.display(), "exported artifact");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CodeType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extension_table() {
        assert_eq!(extension_for("python"), "py");
        assert_eq!(extension_for("javascript"), "js");
        assert_eq!(extension_for("typescript"), "ts");
        assert_eq!(extension_for("csharp"), "cs");
        assert_eq!(extension_for("cpp"), "cpp");
        assert_eq!(extension_for("rust"), "rs");
    }

    #[test]
    fn test_unknown_language_extension() {
        assert_eq!(extension_for("cobol"), "txt");
        assert_eq!(extension_for(""), "txt");
    }

    #[test]
    fn test_export_filename() {
        let artifact = GeneratedArtifact::new(
            Language::Python,
            CodeType::Class,
            "class A: pass".to_string(),
            "A",
        );
        assert_eq!(
            export_filename(&artifact),
            format!("generated-class-{}.py", artifact.id())
        );
    }

    #[test]
    fn test_write_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = GeneratedArtifact::new(
            Language::Go,
            CodeType::Function,
            "package main\n".to_string(),
            "main",
        );
        let path = write_artifact(&artifact, &dir.path().join("out")).unwrap();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("go"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "package main\n");
    }
}
