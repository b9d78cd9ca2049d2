//! Generation orchestration: reader then writer, one pass.

use std::path::PathBuf;
use tracing::{debug, warn};

use crate::core::Result;
use crate::core::templates::{
    SkeletonManifest, TemplateReader, TreeWriter, load_manifest_from_dir,
    writer::validate_project_name,
};

/// Composes the template reader and tree writer for a single run.
///
/// The manifest is loaded once from the template root at construction;
/// [`generate`](ProjectSetup::generate) then performs a single pass with no
/// retries and no rollback.
#[derive(Debug)]
pub struct ProjectSetup {
    manifest: SkeletonManifest,
    reader: TemplateReader,
    writer: TreeWriter,
}

impl ProjectSetup {
    /// Create a setup for the given template root, writing relative to the
    /// current working directory.
    pub async fn new(template_dir: impl Into<PathBuf>) -> Result<Self> {
        let template_dir = template_dir.into();
        let manifest = load_manifest_from_dir(&template_dir).await?;
        Ok(Self {
            manifest,
            reader: TemplateReader::new(template_dir),
            writer: TreeWriter::new()?,
        })
    }

    /// Create a setup with an explicit output base directory.
    pub async fn with_output_dir(
        template_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        let template_dir = template_dir.into();
        let manifest = load_manifest_from_dir(&template_dir).await?;
        Ok(Self {
            manifest,
            reader: TemplateReader::new(template_dir),
            writer: TreeWriter::with_base_dir(output_dir),
        })
    }

    /// The manifest loaded for this run.
    pub fn manifest(&self) -> &SkeletonManifest {
        &self.manifest
    }

    /// Generate the project skeleton for `project_name`.
    ///
    /// Returns `Ok(false)` without touching the filesystem when no manifest
    /// entry passed the reader's file checks; otherwise returns the writer's
    /// overall status unchanged.
    pub async fn generate(&self, project_name: &str) -> Result<bool> {
        validate_project_name(project_name)?;
        debug!(project = project_name, "generating project skeleton");

        let records = self.reader.read(&self.manifest).await?;
        if records.is_empty() {
            warn!("no valid templates found, nothing to generate");
            return Ok(false);
        }

        self.writer.write(&records, project_name).await
    }
}
