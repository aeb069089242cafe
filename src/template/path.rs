use std::fmt::{self, Display};
use std::path::{Component, Path, PathBuf};

/// A location inside the template bundle.
///
/// Bundle paths live in a virtual, always forward-slash address space that
/// never depends on the host separator. They are deliberately not
/// `std::path::Path`: output locations on disk use `Path`, lookups use this.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BundlePath(String);

impl BundlePath {
    /// Joins `root` and `name` with forward-slash path rules.
    ///
    /// Empty and `.` segments are dropped and `..` removes the previous
    /// segment, so the result is clean and never climbs above the bundle top.
    ///
    /// # Examples
    /// ```
    /// use gostarter::template::BundlePath;
    ///
    /// let path = BundlePath::join("templates", "./cmd//main.go.tmpl");
    /// assert_eq!(path.as_str(), "templates/cmd/main.go.tmpl");
    /// ```
    pub fn join(root: &str, name: &str) -> Self {
        let mut segments: Vec<&str> = Vec::new();
        for segment in root.split('/').chain(name.split('/')) {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                s => segments.push(s),
            }
        }
        Self(segments.join("/"))
    }

    /// Converts a path recorded by the embedding step into the bundle space.
    pub(crate) fn from_embedded(path: &Path) -> Self {
        let segments: Vec<String> = path
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        Self(segments.join("/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the part of the path below `root`, if the path lives there.
    pub fn strip_root(&self, root: &str) -> Option<&str> {
        self.0.strip_prefix(root)?.strip_prefix('/')
    }
}

impl Display for BundlePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Translates a forward-slash relative path into a host path below `root`.
///
/// Each segment is pushed separately so the host separator is used on every
/// platform. Empty, `.` and `..` segments are skipped.
pub fn native_path<P: AsRef<Path>>(root: P, relative: &str) -> PathBuf {
    let mut path = root.as_ref().to_path_buf();
    for segment in relative.split('/') {
        if matches!(segment, "" | "." | "..") {
            continue;
        }
        path.push(segment);
    }
    path
}
