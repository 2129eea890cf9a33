use crate::budget::BudgetSplitter;
use crate::config::ChunkConfig;
use crate::error::{Error, Result};
use crate::format;
use crate::fragment::FragmentGrouper;
use crate::parser;
use crate::rate;
use crate::stats::ChunkStats;
use crate::types::Chunk;

/// Everything produced for one source file.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub chunks: Vec<Chunk>,
    pub text: String,
    pub stats: ChunkStats,
}

/// Parse → annotate → group → split, for one file at a time.
///
/// Holds only the thresholds, so one pipeline can be shared across threads
/// and reused for every file in a batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChunkPipeline {
    grouper: FragmentGrouper,
    splitter: BudgetSplitter,
}

impl ChunkPipeline {
    pub fn new(config: ChunkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            grouper: FragmentGrouper::new(config.min_words_per_second),
            splitter: BudgetSplitter::new(config.min_words_per_chunk),
        })
    }

    pub fn config(&self) -> ChunkConfig {
        ChunkConfig {
            min_words_per_second: self.grouper.min_words_per_second(),
            min_words_per_chunk: self.splitter.min_words_per_chunk(),
        }
    }

    /// Raw file text to final chunks, sorted by start.
    pub fn process(&self, source_id: &str, raw: &str) -> Result<Vec<Chunk>> {
        let lines = parser::parse(source_id, raw).map_err(|source| Error::Parse {
            source_id: source_id.to_string(),
            source,
        })?;
        let captions = lines.len();

        let rated = rate::annotate(lines);
        let fragments = self.grouper.group(&rated);
        let fragment_groups = fragments.len();
        let chunks = self.splitter.split(fragments);

        tracing::debug!(
            source_id,
            captions,
            fragment_groups,
            chunks = chunks.len(),
            "regrouped"
        );
        Ok(chunks)
    }

    /// Final chunks to output text.
    pub fn render(&self, chunks: &[Chunk]) -> String {
        format::render(chunks)
    }

    pub fn run(&self, source_id: &str, raw: &str) -> Result<Rendered> {
        let chunks = self.process(source_id, raw)?;
        let text = self.render(&chunks);
        let stats = ChunkStats::from_chunks(&chunks);
        Ok(Rendered {
            chunks,
            text,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::Timestamp;
    use quickcheck::Arbitrary;

    fn srt(entries: &[(u64, u64, &str)]) -> String {
        entries
            .iter()
            .enumerate()
            .map(|(i, (start, end, text))| {
                format!(
                    "{}\n{} --> {}\n{}\n\n",
                    i + 1,
                    Timestamp::from_millis(*start),
                    Timestamp::from_millis(*end),
                    text
                )
            })
            .collect()
    }

    fn pipeline(min_words_per_chunk: usize) -> ChunkPipeline {
        ChunkPipeline::new(ChunkConfig {
            min_words_per_second: 1.5,
            min_words_per_chunk,
        })
        .unwrap()
    }

    #[test]
    fn merges_slow_fragments_end_to_end() {
        let raw = srt(&[
            (0, 1_000, "we are talking quickly now"),
            (1_000, 3_000, "so"),
            (3_000, 4_000, "this continues the thought"),
            (4_000, 5_000, "and this too keeps going"),
        ]);

        let rendered = pipeline(4).run("e.srt", &raw).unwrap();

        assert_eq!(rendered.chunks.len(), 2);
        assert_eq!(rendered.chunks[0].text, "we are talking quickly now");
        assert_eq!(
            rendered.chunks[1].text,
            "so this continues the thought and this too keeps going"
        );
        assert_eq!(rendered.chunks[1].representative_index, 2);
        assert_eq!(rendered.stats.words, 5 + 1 + 4 + 5);
        assert_eq!(
            rendered.text,
            "00:00:00,000 --> 00:00:01,000\nwe are talking quickly now\n\n\n\n\
             00:00:01,000 --> 00:00:05,000\nso this continues the thought and this too keeps going\n\n\n"
        );
    }

    #[test]
    fn under_budget_file_collapses_to_one_chunk() {
        let raw = srt(&[
            (0, 1_000, "we are talking quickly now"),
            (1_000, 3_000, "so"),
            (3_000, 4_000, "this continues the thought"),
        ]);

        let chunks = ChunkPipeline::default().process("e.srt", &raw).unwrap();

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].start, Timestamp::ZERO);
        assert_eq!(chunks[0].end, Timestamp::from_millis(4_000));
        assert_eq!(chunks[0].word_count, 10);
    }

    #[test]
    fn small_budget_applies_second_stage() {
        let raw = srt(&[
            (0, 1_000, "a b c"),
            (1_000, 2_000, "d e f"),
            (2_000, 4_000, "g"),
            (4_000, 5_000, "h i j"),
        ]);
        let chunks = pipeline(4).process("b.srt", &raw).unwrap();

        // stage 1: {a b c, d e f} (6 words), {g, h i j} (4 words)
        // stage 2: 6 > 4 opens, 4 does not
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].word_count, 10);
        assert_eq!(chunks[0].end, Timestamp::from_millis(5_000));
    }

    #[test]
    fn parse_failure_names_the_source() {
        let err = ChunkPipeline::default()
            .process("bad.srt", "1\n00:00:01,000 - 00:00:02,000\nhi")
            .unwrap_err();

        assert!(matches!(&err, Error::Parse { source_id, .. } if source_id == "bad.srt"));
        assert_eq!(
            err.to_string(),
            "bad.srt: block 1: time range \"00:00:01,000 - 00:00:02,000\" must contain exactly one \" --> \""
        );
    }

    #[test]
    fn huge_timestamps_stay_file_scoped() {
        let raw = "1\n00:00:00,001 --> 2562047788015:12:55,808\nhello world\n";
        let chunks = ChunkPipeline::default().process("o.srt", raw).unwrap();

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].word_count, 2);
        assert_eq!(chunks[0].end.to_string(), "2562047788015:12:55,808");
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ChunkConfig {
            min_words_per_second: -1.0,
            ..Default::default()
        };
        assert!(matches!(ChunkPipeline::new(config), Err(Error::Config(_))));
    }

    #[test]
    fn config_round_trips() {
        let config = ChunkConfig {
            min_words_per_second: 2.0,
            min_words_per_chunk: 42,
        };
        assert_eq!(ChunkPipeline::new(config).unwrap().config(), config);
    }

    #[derive(Debug, Clone)]
    struct Captions(Vec<(u16, u16, String)>);

    impl Arbitrary for Captions {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let len = usize::arbitrary(g) % 40;
            let words = ["lorem", "ipsum", "dolor", "sit", "amet", "so", "uh"];
            Self(
                (0..len)
                    .map(|_| {
                        let gap = u16::arbitrary(g) % 500;
                        let duration = u16::arbitrary(g) % 4_000;
                        let n = usize::arbitrary(g) % 8;
                        let text = (0..n)
                            .map(|_| *g.choose(&words).unwrap_or(&"x"))
                            .collect::<Vec<_>>()
                            .join(" ");
                        (gap, duration, text)
                    })
                    .collect(),
            )
        }
    }

    impl Captions {
        fn to_srt(&self) -> String {
            let mut cursor = 0u64;
            let entries: Vec<(u64, u64, String)> = self
                .0
                .iter()
                .map(|(gap, duration, text)| {
                    let start = cursor + *gap as u64;
                    let end = start + *duration as u64;
                    cursor = end;
                    // an empty caption line would be dropped as a separator
                    let text = if text.is_empty() { "-".to_string() } else { text.clone() };
                    (start, end, text)
                })
                .collect();
            let borrowed: Vec<(u64, u64, &str)> = entries
                .iter()
                .map(|(s, e, t)| (*s, *e, t.as_str()))
                .collect();
            srt(&borrowed)
        }
    }

    #[quickcheck_macros::quickcheck]
    fn prop_words_are_conserved(captions: Captions) -> bool {
        let raw = captions.to_srt();
        let rated = rate::annotate(parser::parse("q.srt", &raw).unwrap());
        let expected: usize = rated.iter().map(|c| c.word_count).sum();

        let chunks = pipeline(10).process("q.srt", &raw).unwrap();

        chunks.iter().map(|c| c.word_count).sum::<usize>() == expected
    }

    #[quickcheck_macros::quickcheck]
    fn prop_starts_are_non_decreasing(captions: Captions) -> bool {
        let raw = captions.to_srt();
        let chunks = ChunkPipeline::default().process("q.srt", &raw).unwrap();
        chunks.windows(2).all(|w| w[0].start <= w[1].start)
    }

    #[quickcheck_macros::quickcheck]
    fn prop_nonempty_input_yields_chunks(captions: Captions) -> quickcheck::TestResult {
        if captions.0.is_empty() {
            return quickcheck::TestResult::discard();
        }
        let raw = captions.to_srt();
        let chunks = ChunkPipeline::default().process("q.srt", &raw).unwrap();
        quickcheck::TestResult::from_bool(!chunks.is_empty() && chunks.len() <= captions.0.len())
    }
}
