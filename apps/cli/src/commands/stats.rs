use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::output::read_text;
use crate::settings::ThresholdArgs;

pub fn run(file: &Path, thresholds: &ThresholdArgs, out: &mut impl Write) -> Result<()> {
    let pipeline = thresholds.pipeline()?;
    let raw = read_text(file)?;
    let rendered = pipeline.run(&file.to_string_lossy(), &raw)?;

    serde_json::to_writer_pretty(&mut *out, &rendered.stats)?;
    writeln!(out).map_err(|source| Error::Write {
        path: "<stdout>".into(),
        source,
    })?;
    Ok(())
}
