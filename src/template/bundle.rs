use crate::constants::{TEMPLATE_ROOT, TEMPLATE_SUFFIX};
use crate::template::path::BundlePath;
use include_dir::{include_dir, Dir, DirEntry};
use std::collections::BTreeMap;

static ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Read-only source of template text, addressed by [`BundlePath`].
pub trait TemplateBundle {
    /// Returns the raw bytes stored at `path`, or `None` if nothing is there.
    fn read(&self, path: &BundlePath) -> Option<&[u8]>;

    /// Lists every path in the bundle.
    fn paths(&self) -> Vec<BundlePath>;

    /// Logical names of the templates below the template root, sorted.
    fn template_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .paths()
            .iter()
            .filter_map(|p| p.strip_root(TEMPLATE_ROOT))
            .filter(|name| name.ends_with(TEMPLATE_SUFFIX))
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }
}

/// Templates compiled into the binary from the `assets/` directory.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedBundle {
    dir: &'static Dir<'static>,
}

impl EmbeddedBundle {
    pub fn new() -> Self {
        Self { dir: &ASSETS }
    }

    // `Dir::get_file` matches on host `Path`s, so lookups compare each
    // embedded file in bundle space instead.
    fn find(dir: &'static Dir<'static>, path: &BundlePath) -> Option<&'static [u8]> {
        for entry in dir.entries() {
            match entry {
                DirEntry::File(file) => {
                    if BundlePath::from_embedded(file.path()) == *path {
                        return Some(file.contents());
                    }
                }
                DirEntry::Dir(sub) => {
                    if let Some(contents) = Self::find(sub, path) {
                        return Some(contents);
                    }
                }
            }
        }
        None
    }

    fn collect(dir: &'static Dir<'static>, out: &mut Vec<BundlePath>) {
        for entry in dir.entries() {
            match entry {
                DirEntry::File(file) => out.push(BundlePath::from_embedded(file.path())),
                DirEntry::Dir(sub) => Self::collect(sub, out),
            }
        }
    }
}

impl Default for EmbeddedBundle {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateBundle for EmbeddedBundle {
    fn read(&self, path: &BundlePath) -> Option<&[u8]> {
        Self::find(self.dir, path)
    }

    fn paths(&self) -> Vec<BundlePath> {
        let mut out = Vec::new();
        Self::collect(self.dir, &mut out);
        out
    }
}

/// In-memory bundle, used by tests and by applications that build their
/// templates at runtime.
#[derive(Debug, Clone, Default)]
pub struct MemoryBundle {
    files: BTreeMap<BundlePath, Vec<u8>>,
}

impl MemoryBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `contents` at an explicit bundle path.
    pub fn insert(&mut self, path: BundlePath, contents: impl Into<Vec<u8>>) {
        self.files.insert(path, contents.into());
    }

    /// Stores `contents` under the template root as `name`.
    pub fn with_template(mut self, name: &str, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(BundlePath::join(TEMPLATE_ROOT, name), contents);
        self
    }
}

impl TemplateBundle for MemoryBundle {
    fn read(&self, path: &BundlePath) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    fn paths(&self) -> Vec<BundlePath> {
        self.files.keys().cloned().collect()
    }
}
