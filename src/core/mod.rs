//! Core generator modules shared by the CLI.

pub mod error;
pub mod templates;

pub use error::{Error, Result};
