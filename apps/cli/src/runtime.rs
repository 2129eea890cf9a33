use std::path::{Path, PathBuf};

use hypr_subtitle::{ChunkPipeline, ChunkStats};
use rayon::prelude::*;

use crate::error::Result;
use crate::output::{read_text, write_transcript};

#[derive(Debug)]
pub struct FileReport {
    pub output: PathBuf,
    pub stats: ChunkStats,
    pub written: bool,
}

pub struct FileOutcome {
    pub input: PathBuf,
    pub result: Result<FileReport>,
}

/// Runs the full pipeline for each file independently. A failure is kept
/// with its file and never stops the rest of the batch.
pub struct BatchRuntime {
    pipeline: ChunkPipeline,
    dry_run: bool,
}

impl BatchRuntime {
    pub fn new(pipeline: ChunkPipeline, dry_run: bool) -> Self {
        Self { pipeline, dry_run }
    }

    /// Outcomes come back in the same order as `files`.
    pub fn run(&self, files: &[PathBuf]) -> Vec<FileOutcome> {
        files
            .par_iter()
            .map(|input| FileOutcome {
                input: input.clone(),
                result: self.convert(input),
            })
            .collect()
    }

    pub fn convert(&self, input: &Path) -> Result<FileReport> {
        let raw = read_text(input)?;
        let source_id = input.to_string_lossy();
        let rendered = self.pipeline.run(&source_id, &raw)?;

        let output = hypr_subtitle::output_path(input);
        if !self.dry_run {
            write_transcript(&output, &rendered.text)?;
        }

        Ok(FileReport {
            output,
            stats: rendered.stats,
            written: !self.dry_run,
        })
    }
}
