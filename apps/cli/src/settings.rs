use std::path::PathBuf;

use hypr_subtitle::{ChunkConfig, ChunkPipeline};

use crate::error::Result;
use crate::output::read_text;

#[derive(clap::Args, Debug, Clone, Default)]
pub struct ThresholdArgs {
    /// Captions slower than this open a new fragment group
    #[arg(long, global = true, env = "SRT_MIN_WORDS_PER_SECOND")]
    pub min_words_per_second: Option<f64>,

    /// Chunks with more words than this open a new output chunk
    #[arg(long, global = true, env = "SRT_MIN_WORDS_PER_CHUNK")]
    pub min_words_per_chunk: Option<usize>,

    /// JSON file with a partial or full threshold config
    #[arg(long, global = true, env = "SRT_CHUNK_CONFIG")]
    pub config: Option<PathBuf>,
}

impl ThresholdArgs {
    /// Defaults, then the config file, then explicit flags or env.
    pub fn resolve(&self) -> Result<ChunkConfig> {
        let mut config = match &self.config {
            Some(path) => serde_json::from_str(&read_text(path)?)?,
            None => ChunkConfig::default(),
        };

        if let Some(v) = self.min_words_per_second {
            config.min_words_per_second = v;
        }
        if let Some(v) = self.min_words_per_chunk {
            config.min_words_per_chunk = v;
        }

        tracing::debug!(?config, "thresholds");
        Ok(config)
    }

    pub fn pipeline(&self) -> Result<ChunkPipeline> {
        Ok(ChunkPipeline::new(self.resolve()?)?)
    }
}
