//! Bundled templates embedded in the binary at compile time.
//!
//! The template set under `templates/` is compiled into the binary with
//! `rust-embed`, so stm32gen works immediately after `cargo install` without
//! a separate template installation step. At run time the bundled set is
//! exported to a scratch directory, which then serves as an ordinary
//! template root for the reader.

use rust_embed::RustEmbed;
use std::io;
use std::path::Path;
use tracing::debug;

/// Container for the template set embedded at compile time.
#[derive(RustEmbed)]
#[folder = "templates/"]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    /// Materialize every bundled file under `output_dir`, preserving the
    /// relative directory structure.
    ///
    /// Returns the number of files written. Existing files are overwritten,
    /// so exporting into the same directory twice is safe.
    pub fn export_to(output_dir: &Path) -> io::Result<usize> {
        let mut count = 0;
        for name in Self::iter() {
            let file = Self::get(&name).ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("embedded template missing: {name}"),
                )
            })?;

            let dest = output_dir.join(name.as_ref());
            if let Some(parent) = dest.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&dest, file.data.as_ref())?;
            count += 1;
        }

        debug!(count, dir = %output_dir.display(), "exported bundled templates");
        Ok(count)
    }
}
