/// Handles argument parsing and command dispatch.
pub mod cli;

/// Constants shared across modules.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Project manifests and the generation run.
pub mod generator;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Output mode detection.
pub mod mode;

/// Console and JSON output of generation results.
pub mod output;

/// Bundled templates and the rendering engine.
pub mod template;

/// Validators for user-supplied project settings.
pub mod validation;
