//! Template system for skeleton generation.
//!
//! This module provides the template pipeline used by stm32gen to produce a
//! project tree from a bundled template set. It covers manifest parsing,
//! template-root resolution, template reading, tree writing, and the
//! orchestration of the whole run.
//!
//! The pipeline is one-directional: manifest → reader → records → writer →
//! file tree on disk.

pub mod dir;
pub mod embedded;
pub mod manifest;
pub mod reader;
pub mod setup;
pub mod types;
pub mod writer;

pub use dir::*;
pub use embedded::*;
pub use manifest::*;
pub use reader::*;
pub use setup::*;
pub use types::*;
pub use writer::*;
