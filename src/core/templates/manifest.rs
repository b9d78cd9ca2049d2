//! Manifest parsing for the bundled template set.
//!
//! The manifest is a YAML document with exactly two top-level sequences,
//! `templates` (template file names under the template root) and `modules`
//! (destination paths relative to the project root). The sequences are
//! positionally paired: `templates[i]` is rendered into `modules[i]`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::core::{Error, Result};

/// Ordered description of what to generate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkeletonManifest {
    /// Template file names, resolved against the template root
    #[serde(default)]
    pub templates: Vec<String>,
    /// Destination paths, relative to the project root
    #[serde(default)]
    pub modules: Vec<String>,
}

impl SkeletonManifest {
    /// True when the manifest carries no usable pairing at all.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty() || self.modules.is_empty()
    }

    /// Positional (template, module) pairs in manifest order.
    ///
    /// Mismatched sequence lengths truncate at the shorter one; the surplus
    /// entries of the longer sequence are never visited.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.templates
            .iter()
            .map(String::as_str)
            .zip(self.modules.iter().map(String::as_str))
    }
}

/// Parse manifest YAML content into a [`SkeletonManifest`].
///
/// A document whose top level is not a mapping is rejected with
/// [`Error::InvalidArgument`] before any field is deserialized.
pub fn parse_manifest_yaml(content: &str) -> Result<SkeletonManifest> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    if !value.is_mapping() {
        return Err(Error::invalid_argument(
            "manifest document is not a mapping",
        ));
    }
    Ok(serde_yaml::from_value(value)?)
}

/// Load the skeleton manifest from a template directory.
///
/// Accepts either `manifest.yml` or `manifest.yaml`, in that order.
pub async fn load_manifest_from_dir(dir: &Path) -> Result<SkeletonManifest> {
    let path = manifest_path(dir).ok_or_else(|| {
        Error::missing_data(format!(
            "no manifest.yml or manifest.yaml found in {}",
            dir.display()
        ))
    })?;

    let content = fs::read_to_string(&path).await?;
    parse_manifest_yaml(&content)
}

fn manifest_path(dir: &Path) -> Option<PathBuf> {
    ["manifest.yml", "manifest.yaml"]
        .into_iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}
