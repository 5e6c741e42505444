use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Creates a directory and all of its missing ancestors.
///
/// Succeeds silently when the directory is already there.
pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    log::debug!("Ensuring directory {}", dest_path.display());
    std::fs::create_dir_all(dest_path).map_err(|e| {
        Error::io(format!("create directory '{}'", dest_path.display()), e)
    })
}

/// Creates `path` exclusively, or truncates it when `force` is set.
///
/// # Returns
/// * `Ok(File)` - An open, empty file
/// * `Err(Error::FileAlreadyExists)` - The file exists and `force` is false
/// * `Err(Error::IoFailure)` - Any other OS level failure
pub fn create_file<P: AsRef<Path>>(path: P, force: bool) -> Result<File> {
    let path = path.as_ref();
    match OpenOptions::new().read(true).write(true).create_new(true).open(path) {
        Ok(file) => {
            log::debug!("Created {}", path.display());
            Ok(file)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            if !force {
                return Err(Error::FileAlreadyExists { path: path.display().to_string() });
            }
            log::warn!("Overwriting {}", path.display());
            File::create(path)
                .map_err(|e| Error::io(format!("create file '{}'", path.display()), e))
        }
        Err(e) => Err(Error::io(format!("create file '{}'", path.display()), e)),
    }
}

/// Creates `path` with [`create_file`] and writes `content` into it.
pub fn write_file<P: AsRef<Path>>(path: P, content: &[u8], force: bool) -> Result<()> {
    let path = path.as_ref();
    let mut file = create_file(path, force)?;
    file.write_all(content)
        .map_err(|e| Error::io(format!("write file '{}'", path.display()), e))
}

/// Writes `content` to `path`, replacing whatever is there.
pub fn overwrite_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    log::debug!("Writing {}", path.display());
    std::fs::write(path, content)
        .map_err(|e| Error::io(format!("write file '{}'", path.display()), e))
}
