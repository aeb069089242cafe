//! Project generation: renders every manifest entry and reports through an
//! [`Output`].

pub mod manifest;

pub use manifest::{Manifest, ManifestEntry};

use crate::{
    error::Result,
    output::{Output, ProgressSpec, Section, Table},
    template::{TemplateData, TemplateEngine},
};
use log::info;
use std::path::{Path, PathBuf};

/// Drives one generation run over a [`Manifest`].
pub struct Generator<'a> {
    engine: &'a TemplateEngine,
}

impl<'a> Generator<'a> {
    pub fn new(engine: &'a TemplateEngine) -> Self {
        Self { engine }
    }

    /// Generates the project described by `data` into `project_root`.
    pub fn generate(
        &self,
        output: &mut dyn Output,
        data: &TemplateData,
        project_root: &Path,
    ) -> Result<Vec<PathBuf>> {
        let manifest = Manifest::for_project(data);
        self.generate_manifest(output, &manifest, data, project_root)
    }

    /// Renders every entry of `manifest` below `project_root`.
    ///
    /// All templates are validated before anything is written. The first
    /// failure aborts the run; files already written are left in place.
    ///
    /// # Returns
    /// * `Result<Vec<PathBuf>>` - Host paths of the written files, in manifest order
    pub fn generate_manifest(
        &self,
        output: &mut dyn Output,
        manifest: &Manifest,
        data: &TemplateData,
        project_root: &Path,
    ) -> Result<Vec<PathBuf>> {
        output.title(&format!("Creating {}", data.project_name));

        for entry in manifest.entries() {
            self.engine.validate(entry.template)?;
        }

        let written = self.write_all(output, manifest, data, project_root)?;

        let mut table = Table::new(["File", "Template"]);
        for entry in manifest.entries() {
            table.push_row([entry.output, entry.template]);
        }
        output.table(table);
        output.section(next_steps(data, project_root));
        output.flush()?;

        Ok(written)
    }

    fn write_all(
        &self,
        output: &mut dyn Output,
        manifest: &Manifest,
        data: &TemplateData,
        project_root: &Path,
    ) -> Result<Vec<PathBuf>> {
        let total = i64::try_from(manifest.len()).unwrap_or(i64::MAX);
        let mut progress = output.progress(ProgressSpec::new("Rendering templates", total));
        let mut written = Vec::with_capacity(manifest.len());

        let result = manifest.entries().iter().try_for_each(|entry| -> Result<()> {
            let path = entry.output_path(project_root);
            self.engine.render_to_file(entry.template, data, &path)?;
            info!("Wrote {}", path.display());
            written.push(path);
            progress.increment(1);
            Ok(())
        });
        progress.done();

        result.map(|()| written)
    }
}

fn next_steps(data: &TemplateData, project_root: &Path) -> Section {
    let mut steps = vec![
        format!("cd {}", project_root.display()),
        "go mod tidy".to_string(),
    ];
    if data.driver().is_some_and(|driver| driver.needs_server()) {
        steps.push("docker compose up -d".to_string());
    }
    steps.push("go run ./cmd/server".to_string());
    Section::new("Next steps", steps.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::JsonOutput;
    use crate::template::{DbDriver, MemoryBundle};

    fn data() -> TemplateData {
        TemplateData::new("shop", "example.com/shop", DbDriver::Sqlite, "1.22", 2026)
    }

    #[test]
    fn validation_failure_writes_nothing() {
        let engine = TemplateEngine::with_bundle(
            MemoryBundle::new()
                .with_template("a.tmpl", "a")
                .with_template("b.tmpl", "{% for %}"),
        );
        let manifest = Manifest::new(vec![
            ManifestEntry::new("a.tmpl", "a.txt"),
            ManifestEntry::new("b.tmpl", "b.txt"),
        ]);
        let tmp = tempfile::tempdir().unwrap();
        let mut out = JsonOutput::new(Vec::new());

        let err = Generator::new(&engine)
            .generate_manifest(&mut out, &manifest, &data(), tmp.path())
            .unwrap_err();

        assert!(matches!(err, crate::error::Error::Validation(ref e) if e.name == "b.tmpl"));
        assert!(!tmp.path().join("a.txt").exists());
    }

    #[test]
    fn render_failure_stops_at_first_error() {
        let engine = TemplateEngine::with_bundle(
            MemoryBundle::new()
                .with_template("a.tmpl", "a")
                .with_template("bad.tmpl", "{{ Missing }}")
                .with_template("c.tmpl", "c"),
        );
        let manifest = Manifest::new(vec![
            ManifestEntry::new("a.tmpl", "a.txt"),
            ManifestEntry::new("bad.tmpl", "bad.txt"),
            ManifestEntry::new("c.tmpl", "c.txt"),
        ]);
        let tmp = tempfile::tempdir().unwrap();
        let mut out = JsonOutput::new(Vec::new());

        let err = Generator::new(&engine)
            .generate_manifest(&mut out, &manifest, &data(), tmp.path())
            .unwrap_err();

        assert!(matches!(err, crate::error::Error::Template(ref e) if e.name == "bad.tmpl"));
        assert!(tmp.path().join("a.txt").exists());
        assert!(!tmp.path().join("c.txt").exists());
        assert!(out.into_inner().is_empty());
    }

    #[test]
    fn reports_written_files() {
        let engine = TemplateEngine::with_bundle(
            MemoryBundle::new().with_template("a.tmpl", "{{ ProjectName }}"),
        );
        let manifest = Manifest::new(vec![ManifestEntry::new("a.tmpl", "nested/a.txt")]);
        let tmp = tempfile::tempdir().unwrap();
        let mut out = JsonOutput::new(Vec::new());

        let written = Generator::new(&engine)
            .generate_manifest(&mut out, &manifest, &data(), tmp.path())
            .unwrap();

        assert_eq!(written, vec![tmp.path().join("nested").join("a.txt")]);
        let doc = out.document();
        assert_eq!(doc.title, "Creating shop");
        assert_eq!(doc.tables[0].rows, vec![vec!["nested/a.txt", "a.tmpl"]]);
        assert_eq!(doc.sections[0].title, "Next steps");
        assert!(!doc.sections[0].body.contains("docker compose"));
    }
}
