//! Template reading against a resolved template root.
//!
//! The reader walks the manifest pairing in order, resolves each template
//! name beneath the template root, and collects the raw template bodies.
//! Pairs whose file checks fail are skipped rather than failing the run;
//! only an empty result signals "nothing to generate" to the caller.

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use crate::core::templates::{SkeletonManifest, TEMPLATE_EXT, TemplateRecord};
use crate::core::{Error, Result};

/// Reads manifest-listed templates from a template root directory.
#[derive(Debug)]
pub struct TemplateReader {
    template_dir: PathBuf,
}

impl TemplateReader {
    /// Create a reader rooted at `template_dir`.
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
        }
    }

    /// The template root this reader resolves names against.
    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    /// Read all valid templates named by the manifest, in manifest order.
    ///
    /// Fails with [`Error::MissingData`] when the manifest carries no
    /// pairing at all. A pair whose template file is missing, is not a
    /// regular file, lacks the `.template` extension, or cannot be read as
    /// UTF-8 contributes nothing to the result. Callers must treat an empty
    /// result as "nothing to generate".
    pub async fn read(&self, manifest: &SkeletonManifest) -> Result<Vec<TemplateRecord>> {
        if manifest.is_empty() {
            return Err(Error::missing_data(
                "manifest defines no template/module pairs",
            ));
        }

        let mut records = Vec::new();
        for (template_name, module) in manifest.pairs() {
            let path = self.template_dir.join(template_name);

            if path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXT) {
                warn!(
                    template = template_name,
                    "skipping entry without .{} extension", TEMPLATE_EXT
                );
                continue;
            }

            match fs::metadata(&path).await {
                Ok(meta) if meta.is_file() => {}
                Ok(_) => {
                    warn!(path = %path.display(), "skipping entry: not a regular file");
                    continue;
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            }

            match fs::read_to_string(&path).await {
                Ok(content) => {
                    debug!(template = template_name, module, "loaded template");
                    records.push(TemplateRecord::new(module, content));
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable entry");
                }
            }
        }

        debug!(count = records.len(), "template read pass finished");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::templates::parse_manifest_yaml;
    use tempfile::TempDir;

    async fn write_template(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).await.unwrap();
    }

    #[tokio::test]
    async fn test_read_preserves_manifest_order() {
        let temp_dir = TempDir::new().unwrap();
        write_template(temp_dir.path(), "main.c.template", "// PRO main").await;
        write_template(temp_dir.path(), "makefile.template", "TARGET = PRO").await;

        let manifest = parse_manifest_yaml(
            r#"
templates:
  - main.c.template
  - makefile.template
modules:
  - source/main.c
  - build/Makefile
"#,
        )
        .unwrap();

        let reader = TemplateReader::new(temp_dir.path());
        let records = reader.read(&manifest).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].destination, PathBuf::from("source/main.c"));
        assert_eq!(records[0].content, "// PRO main");
        assert_eq!(records[1].destination, PathBuf::from("build/Makefile"));
        assert_eq!(records[1].content, "TARGET = PRO");
    }

    #[tokio::test]
    async fn test_read_skips_missing_template() {
        let temp_dir = TempDir::new().unwrap();
        write_template(temp_dir.path(), "main.c.template", "// PRO main").await;

        let manifest = parse_manifest_yaml(
            r#"
templates:
  - missing.template
  - main.c.template
modules:
  - source/missing.c
  - source/main.c
"#,
        )
        .unwrap();

        let reader = TemplateReader::new(temp_dir.path());
        let records = reader.read(&manifest).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].destination, PathBuf::from("source/main.c"));
    }

    #[tokio::test]
    async fn test_read_skips_unregistered_extension() {
        let temp_dir = TempDir::new().unwrap();
        write_template(temp_dir.path(), "notes.txt", "not a template").await;

        let manifest = parse_manifest_yaml(
            r#"
templates:
  - notes.txt
modules:
  - source/notes.c
"#,
        )
        .unwrap();

        let reader = TemplateReader::new(temp_dir.path());
        let records = reader.read(&manifest).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_read_empty_manifest() {
        let reader = TemplateReader::new("/nonexistent");

        let err = reader.read(&SkeletonManifest::default()).await.unwrap_err();
        assert!(matches!(err, Error::MissingData(_)));
    }
}
