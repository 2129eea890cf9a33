use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Write `content` to `target` via a temp file in the same directory, so a
/// reader never sees a half-written transcript. Parent directories are
/// created as needed.
pub fn write_transcript(target: &Path, content: &str) -> Result<()> {
    let wrap = |source| Error::Write {
        path: target.to_path_buf(),
        source,
    };

    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(wrap)?;

    let temp = NamedTempFile::new_in(parent).map_err(wrap)?;
    std::fs::write(temp.path(), content).map_err(wrap)?;
    temp.persist(target).map_err(|e| wrap(e.error))?;
    Ok(())
}

pub fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| Error::NotUtf8 {
        path: path.to_path_buf(),
    })
}
