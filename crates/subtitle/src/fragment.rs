use crate::config::DEFAULT_MIN_WORDS_PER_SECOND;
use crate::grouping::regroup;
use crate::types::{Chunk, RatedCaption};

/// Stage 1: merges captions spoken too slowly to stand alone.
///
/// A caption whose rate is below `min_words_per_second` opens a new group,
/// and the captions after it accumulate into that group until the next slow
/// caption. A fragment is therefore never emitted by itself unless the next
/// caption is also slow.
#[derive(Debug, Clone, Copy)]
pub struct FragmentGrouper {
    min_words_per_second: f64,
}

impl FragmentGrouper {
    pub fn new(min_words_per_second: f64) -> Self {
        Self {
            min_words_per_second,
        }
    }

    pub fn min_words_per_second(&self) -> f64 {
        self.min_words_per_second
    }

    pub fn is_fragment(&self, caption: &RatedCaption) -> bool {
        caption.rate < self.min_words_per_second
    }

    /// Captions must be in file order. Output is ordered by start.
    pub fn group(&self, captions: &[RatedCaption]) -> Vec<Chunk> {
        let mut chunks = regroup(
            captions,
            |c: &&RatedCaption| self.is_fragment(c),
            Chunk::from,
        );
        chunks.sort_by_key(|c| c.start);
        chunks
    }
}

impl Default for FragmentGrouper {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WORDS_PER_SECOND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::Timestamp;
    use crate::types::CaptionLine;

    fn rated(index: i64, start_ms: u64, text: &str, rate: f64) -> RatedCaption {
        let word_count = text.split_whitespace().count();
        RatedCaption {
            line: CaptionLine {
                source_id: "f.srt".into(),
                sequence_index: index,
                start: Timestamp::from_millis(start_ms),
                end: Timestamp::from_millis(start_ms + 1_000),
                text: text.into(),
            },
            duration_seconds: 1.0,
            word_count,
            rate,
        }
    }

    fn members(chunks: &[Chunk]) -> Vec<i64> {
        chunks.iter().map(|c| c.representative_index).collect()
    }

    #[test]
    fn slow_captions_open_groups() {
        let captions: Vec<_> = [5.0, 1.0, 5.0, 0.5, 5.0]
            .into_iter()
            .enumerate()
            .map(|(i, rate)| rated(i as i64, i as u64 * 1_000, &format!("c{i}"), rate))
            .collect();

        let chunks = FragmentGrouper::new(1.5).group(&captions);

        assert_eq!(chunks.len(), 3);
        assert_eq!(members(&chunks), vec![0, 1, 3]);
        assert_eq!(chunks[0].text, "c0");
        assert_eq!(chunks[1].text, "c1 c2");
        assert_eq!(chunks[2].text, "c3 c4");
        assert_eq!(chunks[1].start, Timestamp::from_millis(1_000));
        assert_eq!(chunks[1].end, Timestamp::from_millis(3_000));
    }

    #[test]
    fn zero_rate_caption_opens_its_own_group() {
        let captions = vec![
            rated(1, 0, "fast words here", 3.0),
            rated(2, 1_000, "", 0.0),
            rated(3, 2_000, "then more", 3.0),
        ];

        let chunks = FragmentGrouper::default().group(&captions);

        assert_eq!(members(&chunks), vec![1, 2]);
        assert_eq!(chunks[1].text, " then more");
        assert_eq!(chunks[1].word_count, 2);
    }

    #[test]
    fn threshold_is_strict() {
        let captions = vec![rated(1, 0, "a", 3.0), rated(2, 1_000, "b", 1.5)];
        let chunks = FragmentGrouper::new(1.5).group(&captions);
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn threshold_is_configurable() {
        let captions = vec![rated(1, 0, "a", 3.0), rated(2, 1_000, "b", 2.5)];
        assert_eq!(FragmentGrouper::new(1.5).group(&captions).len(), 1);
        assert_eq!(FragmentGrouper::new(2.6).group(&captions).len(), 2);
    }

    #[test]
    fn word_counts_are_summed() {
        let captions = vec![
            rated(1, 0, "one", 1.0),
            rated(2, 1_000, "two three", 2.0),
            rated(3, 2_000, "four five six", 3.0),
        ];
        let chunks = FragmentGrouper::default().group(&captions);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].word_count, 6);
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        assert!(FragmentGrouper::default().group(&[]).is_empty());
    }
}
