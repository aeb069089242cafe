use crate::{
    error::Result,
    output::{
        progress::{ProgressBar, ProgressSpec, ProgressTracker},
        Output, Section, Table, Theme,
    },
};
use log::debug;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";

/// Human-readable output written straight to the sink as each call is made.
pub struct ConsoleOutput<W: Write> {
    writer: W,
    theme: Theme,
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W, theme: Theme) -> Self {
        Self { writer, theme }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = self.writer.write_all(text.as_bytes()) {
            debug!("Failed to write console output: {e}");
        }
    }
}

/// Lays out `table` as aligned lines, header first.
///
/// Column width is the widest display width among the header and every
/// cell in that column. All but the last column are padded. Missing cells
/// are empty and cells past the header count are dropped.
fn layout_table(table: &Table, theme: &Theme) -> String {
    let columns = table.headers.len();
    if columns == 0 {
        return String::new();
    }

    fn cell(row: &[String], i: usize) -> &str {
        row.get(i).map(String::as_str).unwrap_or("")
    }
    let widths: Vec<usize> = (0..columns)
        .map(|i| {
            table
                .rows
                .iter()
                .map(|row| cell(row, i).width())
                .chain(std::iter::once(table.headers[i].width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_row = |row: &[String]| {
        let mut line = String::new();
        for (i, width) in widths.iter().enumerate() {
            let text = cell(row, i);
            line.push_str(text);
            if i + 1 < columns {
                line.push_str(&" ".repeat(width - text.width()));
                line.push_str(COLUMN_GAP);
            }
        }
        line
    };

    let mut out = format!("{}\n", theme.title.apply_to(format_row(&table.headers)));
    for row in &table.rows {
        out.push_str(&format_row(row));
        out.push('\n');
    }
    out
}

impl<W: Write> Output for ConsoleOutput<W> {
    fn title(&mut self, title: &str) {
        let text = format!("{}\n\n", self.theme.title.apply_to(title));
        self.emit(&text);
    }

    fn section(&mut self, section: Section) {
        let mut text = format!("{}\n", self.theme.title.apply_to(&section.title));
        for line in section.body.lines() {
            text.push_str("  ");
            text.push_str(line);
            text.push('\n');
        }
        text.push('\n');
        self.emit(&text);
    }

    fn table(&mut self, table: Table) {
        let text = layout_table(&table, &self.theme);
        if !text.is_empty() {
            self.emit(&format!("{text}\n"));
        }
    }

    fn progress(&mut self, spec: ProgressSpec) -> Box<dyn ProgressTracker + '_> {
        Box::new(ProgressBar::new(&mut self.writer, &self.theme, spec))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console() -> ConsoleOutput<Vec<u8>> {
        ConsoleOutput::new(Vec::new(), Theme::plain())
    }

    fn text(output: ConsoleOutput<Vec<u8>>) -> String {
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn writes_title_and_section() {
        let mut out = console();
        out.title("Creating shop");
        out.section(Section::new("Next steps", "cd shop\ngo run ./cmd/server"));
        assert_eq!(
            text(out),
            "Creating shop\n\nNext steps\n  cd shop\n  go run ./cmd/server\n\n"
        );
    }

    #[test]
    fn table_pads_all_but_last_column() {
        let table = Table::new(["Name", "Type"]).with_row(["user.go", "model"]);
        let out = layout_table(&table, &Theme::plain());
        assert_eq!(out, "Name     Type\nuser.go  model\n");
    }

    #[test]
    fn table_tolerates_short_and_long_rows() {
        let table = Table::new(["A", "B"])
            .with_row(["only"])
            .with_row(["x", "y", "ignored"]);
        let out = layout_table(&table, &Theme::plain());
        assert_eq!(out, "A     B\nonly  \nx     y\n");
        assert!(!out.contains("ignored"));
    }

    #[test]
    fn table_measures_wide_characters() {
        let table = Table::new(["名前", "x"]).with_row(["ab", "y"]);
        let out = layout_table(&table, &Theme::plain());
        // "名前" is four columns wide.
        assert_eq!(out, "名前  x\nab    y\n");
    }

    #[test]
    fn empty_table_prints_nothing() {
        let mut out = console();
        out.table(Table::default());
        out.table(Table::new(Vec::<String>::new()).with_row(["orphan"]));
        assert_eq!(text(out), "");
    }

    #[test]
    fn header_only_table() {
        let out = layout_table(&Table::new(["File"]), &Theme::plain());
        assert_eq!(out, "File\n");
    }

    #[test]
    fn empty_strings_do_not_fail() {
        let mut out = console();
        out.title("");
        out.section(Section::new("", ""));
        out.flush().unwrap();
        assert_eq!(text(out), "\n\n\n\n");
    }

    #[test]
    fn progress_writes_to_same_sink() {
        let mut out = console();
        {
            let mut bar = out.progress(ProgressSpec::new("Rendering", 2));
            bar.increment(2);
            bar.done();
        }
        out.title("After");
        let text = text(out);
        assert!(text.contains("100% (2/2)\n"));
        assert!(text.ends_with("After\n\n"));
    }

    #[test]
    fn colored_header_keeps_layout() {
        let table = Table::new(["Name", "Type"]).with_row(["user.go", "model"]);
        let out = layout_table(&table, &Theme::colored());
        assert_eq!(console::strip_ansi_codes(&out), "Name     Type\nuser.go  model\n");
    }
}
