//! Template rendering engine for gostarter
//!
//! This module contains the pieces that turn a logical template name plus
//! [`TemplateData`] into text on disk:
//! - `bundle`: read-only template sources (embedded or in memory)
//! - `path`: the forward-slash bundle address space and host path translation
//! - `data`: the variable schema every template receives
//! - `engine`: render, render-to-file and validate
//! - `filters`: case conversion filters used by the bundled templates

pub mod bundle;
pub mod data;
pub mod engine;
pub mod filters;
pub mod path;

pub use bundle::{EmbeddedBundle, MemoryBundle, TemplateBundle};
pub use data::{DbDriver, TemplateData};
pub use engine::TemplateEngine;
pub use path::{native_path, BundlePath};
