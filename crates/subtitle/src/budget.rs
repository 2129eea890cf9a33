use crate::config::DEFAULT_MIN_WORDS_PER_CHUNK;
use crate::grouping::regroup;
use crate::types::Chunk;

/// Stage 2: re-groups stage-1 chunks around oversized ones.
///
/// A chunk whose *own* word count exceeds `min_words_per_chunk` opens a new
/// group; following chunks accumulate into it until the next oversized one.
/// The check is per incoming chunk, not against a running total, so an
/// output chunk can end up well past the budget (a large chunk followed by
/// many small ones) or hold a single large chunk (two large chunks in a row).
#[derive(Debug, Clone, Copy)]
pub struct BudgetSplitter {
    min_words_per_chunk: usize,
}

impl BudgetSplitter {
    pub fn new(min_words_per_chunk: usize) -> Self {
        Self {
            min_words_per_chunk,
        }
    }

    pub fn min_words_per_chunk(&self) -> usize {
        self.min_words_per_chunk
    }

    pub fn is_oversized(&self, chunk: &Chunk) -> bool {
        chunk.word_count > self.min_words_per_chunk
    }

    pub fn split(&self, mut chunks: Vec<Chunk>) -> Vec<Chunk> {
        chunks.sort_by_key(|c| c.start);
        regroup(chunks, |c: &Chunk| self.is_oversized(c), |c| c)
    }
}

impl Default for BudgetSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WORDS_PER_CHUNK)
    }
}
