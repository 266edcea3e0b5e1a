use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{CapabilityError, Result};

/// Creates `path` and any missing parents. An existing directory is not an
/// error; anything else already at `path` is left alone and reported.
pub fn create_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        info!(path = %path.display(), "directory already present");
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| CapabilityError::create_directory(path, e))?;
    info!(path = %path.display(), "directory created");
    Ok(())
}

pub fn ensure_directory<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    writeln!(out, "Creating directory: {}", path.display())?;
    out.flush()?;
    create_directory(path)
}
