use crate::{
    error::Result,
    output::{
        progress::{NoopProgress, ProgressSpec, ProgressTracker},
        Output, Section, Table,
    },
};
use serde::Serialize;
use std::io::Write;

/// Everything reported during one run, serialized on flush.
#[derive(Debug, Default, Serialize)]
pub struct JsonDocument {
    pub title: String,
    pub sections: Vec<Section>,
    pub tables: Vec<Table>,
}

/// Machine-readable output: accumulates calls and writes one JSON document
/// per [`flush`](Output::flush).
///
/// Single writer only; it is not meant to be shared between threads.
pub struct JsonOutput<W: Write> {
    writer: W,
    document: JsonDocument,
}

impl<W: Write> JsonOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, document: JsonDocument::default() }
    }

    pub fn document(&self) -> &JsonDocument {
        &self.document
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for JsonOutput<W> {
    fn title(&mut self, title: &str) {
        self.document.title = title.to_string();
    }

    fn section(&mut self, section: Section) {
        self.document.sections.push(section);
    }

    fn table(&mut self, table: Table) {
        self.document.tables.push(table);
    }

    fn progress(&mut self, _spec: ProgressSpec) -> Box<dyn ProgressTracker + '_> {
        Box::new(NoopProgress)
    }

    fn flush(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.document)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
