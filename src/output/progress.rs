use crate::output::Theme;
use log::debug;
use serde::Serialize;
use std::io::Write;

const BAR_WIDTH: usize = 30;

/// Parameters for one progress bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressSpec {
    pub label: String,
    /// Number of steps; zero or negative means already complete.
    pub total: i64,
}

impl ProgressSpec {
    pub fn new(label: impl Into<String>, total: i64) -> Self {
        Self { label: label.into(), total }
    }
}

/// Handle returned by [`Output::progress`](crate::output::Output::progress).
pub trait ProgressTracker {
    /// Advances the tracker by `n` steps.
    fn increment(&mut self, n: i64);

    /// Finalizes the tracker. Calling it more than once has no effect.
    fn done(&mut self);
}

/// Tracker that accepts every call and prints nothing.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressTracker for NoopProgress {
    fn increment(&mut self, _n: i64) {}

    fn done(&mut self) {}
}

/// Single-line progress bar redrawn in place with a carriage return.
pub struct ProgressBar<'a, W: Write> {
    writer: &'a mut W,
    theme: &'a Theme,
    spec: ProgressSpec,
    current: i64,
    finished: bool,
}

impl<'a, W: Write> ProgressBar<'a, W> {
    /// Creates the bar and draws its initial state.
    pub fn new(writer: &'a mut W, theme: &'a Theme, spec: ProgressSpec) -> Self {
        let mut bar = Self { writer, theme, spec, current: 0, finished: false };
        bar.draw();
        bar
    }

    /// Completed fraction in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.spec.total <= 0 {
            return 1.0;
        }
        (self.current as f64 / self.spec.total as f64).clamp(0.0, 1.0)
    }

    /// Whole percent done, rounded down so only a met target shows 100.
    pub fn percent(&self) -> u32 {
        (self.fraction() * 100.0).floor() as u32
    }

    fn draw(&mut self) {
        let filled = (self.fraction() * BAR_WIDTH as f64).floor() as usize;
        let percent = self.percent();
        let percent_style = if percent >= 100 { &self.theme.success } else { &self.theme.warning };
        let line = format!(
            "\r{} [{}{}] {}% {}",
            self.spec.label,
            self.theme.success.apply_to("#".repeat(filled)),
            "-".repeat(BAR_WIDTH - filled),
            percent_style.apply_to(format!("{percent:>3}")),
            self.theme.muted.apply_to(format!("({}/{})", self.current, self.spec.total)),
        );
        if let Err(e) = self
            .writer
            .write_all(line.as_bytes())
            .and_then(|_| self.writer.flush())
        {
            debug!("Failed to draw progress bar: {e}");
        }
    }
}

impl<W: Write> ProgressTracker for ProgressBar<'_, W> {
    fn increment(&mut self, n: i64) {
        if self.finished {
            return;
        }
        self.current = self.current.saturating_add(n);
        self.draw();
    }

    fn done(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        if let Err(e) = self.writer.write_all(b"\n").and_then(|_| self.writer.flush()) {
            debug!("Failed to finish progress bar: {e}");
        }
    }
}
