use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::Result;

const SUBTITLE_EXTENSION: &str = "srt";

/// Every `*.srt` file under `root`, recursively, sorted by path.
/// Hidden files and directories are skipped. `root` itself may be a single
/// file.
///
/// Only an unreadable `root` is an error. Entries below it that cannot be
/// walked (symlink loops, permission errors, dangling links) are logged and
/// skipped so their siblings are still found.
pub fn subtitle_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) if error.depth() == 0 => return Err(error.into()),
            Err(error) => {
                tracing::warn!(
                    path = ?error.path(),
                    %error,
                    "skipping_unwalkable_entry"
                );
                continue;
            }
        };
        if entry.file_type().is_file() && is_subtitle(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn is_subtitle(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(SUBTITLE_EXTENSION))
}
