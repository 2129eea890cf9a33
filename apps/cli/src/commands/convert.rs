use std::path::PathBuf;

use crate::discover::subtitle_files;
use crate::error::{Error, Result};
use crate::runtime::BatchRuntime;
use crate::settings::ThresholdArgs;

pub struct Args {
    pub root: PathBuf,
    pub dry_run: bool,
    pub thresholds: ThresholdArgs,
}

pub fn run(args: Args) -> Result<()> {
    let pipeline = args.thresholds.pipeline()?;
    let files = subtitle_files(&args.root)?;
    if files.is_empty() {
        tracing::warn!(root = %args.root.display(), "no_subtitle_files");
        return Ok(());
    }
    tracing::info!(root = %args.root.display(), files = files.len(), "discovered");

    let outcomes = BatchRuntime::new(pipeline, args.dry_run).run(&files);

    let mut failed = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(report) => tracing::info!(
                input = %outcome.input.display(),
                output = %report.output.display(),
                written = report.written,
                chunks = report.stats.chunks,
                words = report.stats.words,
                max_words = ?report.stats.max_words,
                "converted"
            ),
            Err(error) => {
                failed += 1;
                tracing::error!(input = %outcome.input.display(), %error, "conversion_failed");
            }
        }
    }

    tracing::info!(total = outcomes.len(), failed, "batch_complete");
    if failed > 0 {
        return Err(Error::BatchFailed {
            count: failed,
            total: outcomes.len(),
        });
    }
    Ok(())
}
