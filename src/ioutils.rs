use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::constants::permissions;
use crate::error::{Error, Result};

/// Ensures the output directory is safe to write to.
pub fn get_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() && !force {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

/// Creates `dest_path` and all missing parents.
pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(permissions::DIR_MODE);
    }
    builder.create(dest_path).map_err(|source| Error::WriteError {
        path: dest_path.display().to_string(),
        source,
    })
}

/// Writes `content` to `dest_path`, replacing any existing file and creating
/// parent directories first.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    let base_path = std::env::current_dir().unwrap_or_default();
    let abs_path = if dest_path.is_absolute() {
        dest_path.to_path_buf()
    } else {
        base_path.join(dest_path)
    };

    if let Some(parent) = abs_path.parent() {
        create_dir_all(parent)?;
    }

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(permissions::FILE_MODE);
    }
    let to_write_error =
        |source: std::io::Error| Error::WriteError { path: abs_path.display().to_string(), source };
    let mut file = options.open(&abs_path).map_err(to_write_error)?;
    file.write_all(content.as_bytes()).map_err(to_write_error)
}
