use crate::template::{native_path, TemplateData};
use std::path::{Path, PathBuf};

/// One file of a generated project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Logical template name inside the bundle.
    pub template: &'static str,
    /// Output location relative to the project root, always with `/`.
    pub output: &'static str,
}

impl ManifestEntry {
    pub const fn new(template: &'static str, output: &'static str) -> Self {
        Self { template, output }
    }

    /// Host path of the generated file below `root`.
    pub fn output_path<P: AsRef<Path>>(&self, root: P) -> PathBuf {
        native_path(root, self.output)
    }
}

const BASE_FILES: &[ManifestEntry] = &[
    ManifestEntry::new("go.mod.tmpl", "go.mod"),
    ManifestEntry::new("cmd/main.go.tmpl", "cmd/server/main.go"),
    ManifestEntry::new("internal/config.go.tmpl", "internal/config/config.go"),
    ManifestEntry::new("internal/database.go.tmpl", "internal/database/database.go"),
    ManifestEntry::new("internal/handlers.go.tmpl", "internal/handlers/handlers.go"),
    ManifestEntry::new("internal/handlers_test.go.tmpl", "internal/handlers/handlers_test.go"),
    ManifestEntry::new("Makefile.tmpl", "Makefile"),
    ManifestEntry::new("README.md.tmpl", "README.md"),
    ManifestEntry::new("gitignore.tmpl", ".gitignore"),
    ManifestEntry::new("env.example.tmpl", ".env.example"),
    ManifestEntry::new("LICENSE.tmpl", "LICENSE"),
];

const SERVER_DB_FILES: &[ManifestEntry] =
    &[ManifestEntry::new("docker-compose.yml.tmpl", "docker-compose.yml")];

/// The ordered list of files that make up one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new(entries: Vec<ManifestEntry>) -> Self {
        Self { entries }
    }

    /// Files for a project using `data`'s database driver.
    ///
    /// Drivers that need a database server also get a compose file.
    pub fn for_project(data: &TemplateData) -> Self {
        let mut entries = BASE_FILES.to_vec();
        if data.driver().is_some_and(|driver| driver.needs_server()) {
            entries.extend_from_slice(SERVER_DB_FILES);
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::DbDriver;

    fn data(driver: DbDriver) -> TemplateData {
        TemplateData::new("shop", "example.com/shop", driver, "1.22", 2026)
    }

    fn outputs(manifest: &Manifest) -> Vec<&'static str> {
        manifest.entries().iter().map(|e| e.output).collect()
    }

    #[test]
    fn server_databases_get_compose_file() {
        for driver in [DbDriver::Postgres, DbDriver::Mysql] {
            let manifest = Manifest::for_project(&data(driver));
            assert!(outputs(&manifest).contains(&"docker-compose.yml"));
        }
    }

    #[test]
    fn sqlite_has_no_compose_file() {
        let manifest = Manifest::for_project(&data(DbDriver::Sqlite));
        assert!(!outputs(&manifest).contains(&"docker-compose.yml"));
        assert_eq!(manifest.len(), BASE_FILES.len());
    }

    #[test]
    fn output_paths_use_host_separators() {
        let entry = ManifestEntry::new("cmd/main.go.tmpl", "cmd/server/main.go");
        let expected: PathBuf = ["root", "cmd", "server", "main.go"].iter().collect();
        assert_eq!(entry.output_path("root"), expected);
    }

    #[test]
    fn outputs_are_unique() {
        let manifest = Manifest::for_project(&data(DbDriver::Postgres));
        let mut seen = outputs(&manifest);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), manifest.len());
    }
}
