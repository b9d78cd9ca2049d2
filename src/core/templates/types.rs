//! Shared types and constants for the template pipeline.

use std::path::PathBuf;

/// Substitution token recognized in template bodies.
///
/// Every occurrence is replaced with the project name at write time. This is
/// a plain literal replace with no expression syntax around it.
pub const PLACEHOLDER: &str = "PRO";

/// Registered extension for template files.
///
/// Manifest entries pointing at files without this extension are treated as
/// not-a-template and skipped by the reader.
pub const TEMPLATE_EXT: &str = "template";

/// A template resolved to its raw content, paired with its destination.
///
/// Produced by [`TemplateReader::read`](crate::core::templates::TemplateReader::read),
/// consumed once by [`TreeWriter::write`](crate::core::templates::TreeWriter::write),
/// and not retained after materialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRecord {
    /// Destination path relative to the future project root
    pub destination: PathBuf,
    /// Unresolved template body, zero or more `PRO` occurrences
    pub content: String,
}

impl TemplateRecord {
    pub fn new(destination: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            content: content.into(),
        }
    }
}
