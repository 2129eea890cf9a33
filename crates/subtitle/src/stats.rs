use crate::types::Chunk;

/// Summary of one file's final chunks, for reporting.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct ChunkStats {
    pub chunks: usize,
    pub words: usize,
    pub min_words: Option<usize>,
    pub max_words: Option<usize>,
    pub mean_words: Option<f64>,
    /// Seconds from the earliest start to the latest end.
    pub span_seconds: f64,
}

impl ChunkStats {
    pub fn from_chunks(chunks: &[Chunk]) -> Self {
        let words: usize = chunks.iter().map(|c| c.word_count).sum();
        let min_words = chunks.iter().map(|c| c.word_count).min();
        let max_words = chunks.iter().map(|c| c.word_count).max();
        let mean_words = (!chunks.is_empty()).then(|| words as f64 / chunks.len() as f64);

        let span_seconds = match (
            chunks.iter().map(|c| c.start).min(),
            chunks.iter().map(|c| c.end).max(),
        ) {
            (Some(start), Some(end)) => end.millis_since(start).max(0) as f64 / 1_000.0,
            _ => 0.0,
        };

        Self {
            chunks: chunks.len(),
            words,
            min_words,
            max_words,
            mean_words,
            span_seconds,
        }
    }
}
