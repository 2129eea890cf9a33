use crate::error::ConfigError;

pub const DEFAULT_MIN_WORDS_PER_SECOND: f64 = 1.5;
pub const DEFAULT_MIN_WORDS_PER_CHUNK: usize = 300;

fn default_min_words_per_second() -> f64 {
    DEFAULT_MIN_WORDS_PER_SECOND
}

fn default_min_words_per_chunk() -> usize {
    DEFAULT_MIN_WORDS_PER_CHUNK
}

/// Thresholds for the two regrouping stages.
///
/// Every field has a default, so a partial config file is enough.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChunkConfig {
    /// Fluency threshold for [`crate::FragmentGrouper`].
    #[serde(default = "default_min_words_per_second")]
    pub min_words_per_second: f64,
    /// Word budget for [`crate::BudgetSplitter`].
    #[serde(default = "default_min_words_per_chunk")]
    pub min_words_per_chunk: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            min_words_per_second: DEFAULT_MIN_WORDS_PER_SECOND,
            min_words_per_chunk: DEFAULT_MIN_WORDS_PER_CHUNK,
        }
    }
}

impl ChunkConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_words_per_second.is_finite() || self.min_words_per_second < 0.0 {
            return Err(ConfigError::InvalidWordsPerSecond(
                self.min_words_per_second,
            ));
        }
        Ok(())
    }
}
