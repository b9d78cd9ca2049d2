//! Template-root and output-directory resolution.

use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Trait for reading template configuration, allowing dependency injection
/// for testing.
pub trait TemplateConfigReader {
    fn get_template_dir(&self) -> Option<String>;
}

/// Production implementation that reads from environment variables.
pub struct EnvTemplateConfigReader;

impl TemplateConfigReader for EnvTemplateConfigReader {
    fn get_template_dir(&self) -> Option<String> {
        std::env::var("STM32GEN_TEMPLATE_DIR").ok()
    }
}

/// Mock implementation for testing with controlled values.
#[cfg(test)]
pub struct MockTemplateConfigReader(Option<String>);

#[cfg(test)]
impl MockTemplateConfigReader {
    pub fn new(template_dir: Option<String>) -> Self {
        Self(template_dir)
    }
}

#[cfg(test)]
impl TemplateConfigReader for MockTemplateConfigReader {
    fn get_template_dir(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Directory resolution for a generation run.
pub struct TemplateDir;

impl TemplateDir {
    /// Resolve the template root: an explicit directory wins, then the
    /// configured one. `Ok(None)` means no override is in effect and the
    /// caller should fall back to the bundled template set.
    ///
    /// A resolved directory that does not exist is an error, not a silent
    /// fallback.
    pub fn resolve_template_dir(
        custom_dir: Option<&Path>,
        config: &impl TemplateConfigReader,
    ) -> io::Result<Option<PathBuf>> {
        let resolved = custom_dir
            .map(Path::to_path_buf)
            .or_else(|| config.get_template_dir().map(PathBuf::from));

        match resolved {
            Some(dir) if dir.is_dir() => {
                debug!(dir = %dir.display(), "resolved template directory");
                Ok(Some(dir))
            }
            Some(dir) => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("template directory not found: {}", dir.display()),
            )),
            None => Ok(None),
        }
    }

    /// Resolve the output base directory: explicit, or the current working
    /// directory.
    pub fn resolve_output_dir(output_dir: Option<&Path>) -> io::Result<PathBuf> {
        match output_dir {
            Some(dir) => Ok(dir.to_path_buf()),
            None => std::env::current_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_dir_wins_over_config() {
        let custom = TempDir::new().unwrap();
        let configured = TempDir::new().unwrap();
        let config =
            MockTemplateConfigReader::new(Some(configured.path().to_string_lossy().into_owned()));

        let resolved = TemplateDir::resolve_template_dir(Some(custom.path()), &config).unwrap();
        assert_eq!(resolved, Some(custom.path().to_path_buf()));
    }

    #[test]
    fn test_configured_dir_used_without_custom() {
        let configured = TempDir::new().unwrap();
        let config =
            MockTemplateConfigReader::new(Some(configured.path().to_string_lossy().into_owned()));

        let resolved = TemplateDir::resolve_template_dir(None, &config).unwrap();
        assert_eq!(resolved, Some(configured.path().to_path_buf()));
    }

    #[test]
    fn test_no_override_resolves_to_none() {
        let config = MockTemplateConfigReader::new(None);

        let resolved = TemplateDir::resolve_template_dir(None, &config).unwrap();
        assert_eq!(resolved, None);
    }

    #[test]
    fn test_missing_resolved_dir_is_an_error() {
        let config = MockTemplateConfigReader::new(Some("/nonexistent/stm32gen".into()));

        let err = TemplateDir::resolve_template_dir(None, &config).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_resolve_output_dir_explicit() {
        let dir = TempDir::new().unwrap();

        let resolved = TemplateDir::resolve_output_dir(Some(dir.path())).unwrap();
        assert_eq!(resolved, dir.path().to_path_buf());
    }
}
