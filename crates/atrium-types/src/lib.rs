//! Foundation types for the Atrium shell.
//!
//! This crate contains the types shared by every Atrium crate: screen
//! identifiers used on the host wire, and the workspace error type.

pub mod error;
pub mod screen;

pub use error::{AtriumError, Result};
pub use screen::ScreenId;
