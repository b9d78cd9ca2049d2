//! Tree materialization: skeleton provisioning, substitution, and writes.
//!
//! The writer owns the fixed on-disk layout of a generated project. The
//! layout is a hardcoded domain constant (STM32/ARM toolchain convention)
//! and is expressed as a static list of relative paths so the structure on
//! disk never drifts.

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use crate::core::templates::{PLACEHOLDER, TemplateRecord};
use crate::core::{Error, Result};

/// Fixed directory skeleton of a generated project, relative to the output
/// base directory. The empty entry is the project root itself.
pub const SKELETON_DIRS: [&str; 11] = [
    "",
    "build",
    "build/source",
    "build/includes/STM32F4xx_StdPeriph_Driver/src",
    "scripts",
    "source",
    "includes",
    "includes/CMSIS",
    "includes/STM32F4xx",
    "includes/STM32F4xx_StdPeriph_Driver/src",
    "includes/STM32F4xx_StdPeriph_Driver/inc",
];

/// Writes substituted template records into the project skeleton.
#[derive(Debug)]
pub struct TreeWriter {
    base_dir: PathBuf,
}

impl TreeWriter {
    /// Create a writer rooted at the current working directory.
    pub fn new() -> Result<Self> {
        Ok(Self {
            base_dir: std::env::current_dir()?,
        })
    }

    /// Create a writer rooted at an explicit base directory.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Materialize `records` under `<base_dir>/<project_name>/`.
    ///
    /// Validation failures (`MissingData`/`InvalidArgument`) are raised
    /// before any filesystem mutation. Once writing begins, per-file
    /// failures are recorded and iteration continues; files already written
    /// stay on disk. Returns `Ok(true)` only if every record produced a
    /// validated file.
    pub async fn write(&self, records: &[TemplateRecord], project_name: &str) -> Result<bool> {
        if records.is_empty() {
            return Err(Error::missing_data("no template records to write"));
        }
        validate_project_name(project_name)?;

        let pro_dir = self.base_dir.join(project_name);
        self.provision(&pro_dir).await?;

        let mut statuses = Vec::with_capacity(records.len());
        for record in records {
            let module_path = pro_dir.join(&record.destination);
            debug!(module = %module_path.display(), "generating module");
            statuses.push(self.write_module(&module_path, &record.content, project_name).await);
        }

        Ok(statuses.iter().all(|ok| *ok) && statuses.len() == records.len())
    }

    /// Ensure the full directory skeleton exists under `pro_dir`.
    ///
    /// If even one of the fixed directories is missing, creation is issued
    /// for all of them; creating an already-existing directory is not an
    /// error, so re-running against a complete or partial tree is safe.
    async fn provision(&self, pro_dir: &Path) -> Result<()> {
        let mut missing = false;
        for dir in SKELETON_DIRS {
            if !pro_dir.join(dir).exists() {
                missing = true;
                break;
            }
        }
        if !missing {
            debug!(root = %pro_dir.display(), "project skeleton already complete");
            return Ok(());
        }

        for dir in SKELETON_DIRS {
            fs::create_dir_all(pro_dir.join(dir)).await?;
        }
        debug!(root = %pro_dir.display(), "provisioned project skeleton");
        Ok(())
    }

    /// Substitute, write, chmod, and validate a single module file.
    async fn write_module(&self, module_path: &Path, content: &str, project_name: &str) -> bool {
        let substituted = content.replace(PLACEHOLDER, project_name);

        if let Err(e) = fs::write(module_path, substituted).await {
            warn!(module = %module_path.display(), error = %e, "failed to write module");
            return false;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o666);
            if let Err(e) = fs::set_permissions(module_path, permissions).await {
                warn!(module = %module_path.display(), error = %e, "failed to set module permissions");
                return false;
            }
        }

        verify_module(module_path).await
    }
}

/// Post-write validation: the file must exist as a regular file, carry the
/// expected write mode, and have a recognizable format.
async fn verify_module(module_path: &Path) -> bool {
    let meta = match fs::metadata(module_path).await {
        Ok(meta) => meta,
        Err(e) => {
            warn!(module = %module_path.display(), error = %e, "written module missing on re-check");
            return false;
        }
    };
    if !meta.is_file() {
        warn!(module = %module_path.display(), "written module is not a regular file");
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if meta.permissions().mode() & 0o666 != 0o666 {
            warn!(module = %module_path.display(), "written module lost its write mode");
            return false;
        }
    }

    match module_format(module_path) {
        Some(format) => {
            debug!(module = %module_path.display(), format, "module validated");
            true
        }
        None => {
            warn!(module = %module_path.display(), "module has no recognizable format");
            false
        }
    }
}

/// Infer a module's format from a makefile name match or its extension.
fn module_format(module_path: &Path) -> Option<&str> {
    let name = module_path.file_name()?.to_str()?;
    if name.contains("Makefile") {
        return Some("makefile");
    }
    module_path.extension()?.to_str()
}

/// A project name must be a single, plain path component.
pub(crate) fn validate_project_name(project_name: &str) -> Result<()> {
    if project_name.is_empty() {
        return Err(Error::missing_data("empty project name"));
    }
    if project_name == "." || project_name == ".." || project_name.contains(['/', '\\']) {
        return Err(Error::invalid_argument(format!(
            "project name is not a plain directory name: {project_name:?}"
        )));
    }
    Ok(())
}
