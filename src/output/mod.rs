//! Output rendering for generation results.
//!
//! The generator reports a title, sections, tables and progress through the
//! [`Output`] trait. [`ConsoleOutput`] prints styled text as calls arrive;
//! [`JsonOutput`] collects everything and writes one JSON document on flush.
//! [`for_mode`] picks the implementation once, from the detected [`Mode`].

pub mod console;
pub mod json;
pub mod progress;
pub mod theme;

pub use console::ConsoleOutput;
pub use json::{JsonDocument, JsonOutput};
pub use progress::{NoopProgress, ProgressBar, ProgressSpec, ProgressTracker};
pub use theme::Theme;

use crate::{error::Result, mode::Mode};
use log::debug;
use serde::Serialize;
use std::io::Write;

/// A titled block of free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub body: String,
}

impl Section {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { title: title.into(), body: body.into() }
    }
}

/// Tabular data. Rows may have fewer or more cells than there are headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { headers: headers.into_iter().map(Into::into).collect(), rows: Vec::new() }
    }

    pub fn with_row<I, S>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_row(row);
        self
    }

    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }
}

/// Sink for generation events.
///
/// Only [`flush`](Output::flush) can fail; the other calls are best effort
/// and never panic on empty input.
pub trait Output {
    fn title(&mut self, title: &str);

    fn section(&mut self, section: Section);

    fn table(&mut self, table: Table);

    /// Starts a progress tracker. The output cannot be used until the
    /// tracker is dropped.
    fn progress(&mut self, spec: ProgressSpec) -> Box<dyn ProgressTracker + '_>;

    fn flush(&mut self) -> Result<()>;
}

/// Builds the output for `mode`.
///
/// `Json` selects [`JsonOutput`]; every other mode prints to the console.
/// There is no TUI yet, so `Tui` falls back to the console as well.
pub fn for_mode<'a, W: Write + 'a>(mode: Mode, writer: W, theme: Theme) -> Box<dyn Output + 'a> {
    match mode {
        Mode::Json => Box::new(JsonOutput::new(writer)),
        Mode::Tui => {
            debug!("Interactive output is not available, using console output");
            Box::new(ConsoleOutput::new(writer, theme))
        }
        Mode::Auto | Mode::Console => Box::new(ConsoleOutput::new(writer, theme)),
    }
}
