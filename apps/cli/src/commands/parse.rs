use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::output::read_text;

pub fn run(file: &Path, out: &mut impl Write) -> Result<()> {
    let raw = read_text(file)?;
    let source_id = file.to_string_lossy();
    let captions = hypr_subtitle::parse(&source_id, &raw).map_err(|source| {
        Error::Subtitle(hypr_subtitle::Error::Parse {
            source_id: source_id.to_string(),
            source,
        })
    })?;

    serde_json::to_writer_pretty(&mut *out, &captions)?;
    writeln!(out).map_err(|source| Error::Write {
        path: "<stdout>".into(),
        source,
    })?;
    Ok(())
}
