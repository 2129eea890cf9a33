use crate::timestamp::Timestamp;

/// One timed entry as it appears in the subtitle file.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CaptionLine {
    pub source_id: String,
    /// Index as written in the file. Only meaningful within one source.
    pub sequence_index: i64,
    pub start: Timestamp,
    pub end: Timestamp,
    pub text: String,
}

/// A [`CaptionLine`] annotated with its speaking rate.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RatedCaption {
    #[serde(flatten)]
    pub line: CaptionLine,
    /// `end - start` in seconds. Negative when the file has `end < start`.
    pub duration_seconds: f64,
    pub word_count: usize,
    /// Words per second, see [`crate::rate::speaking_rate`].
    pub rate: f64,
}

/// An aggregated run of one or more captions.
///
/// Members are reduced on construction and never kept: `start`/`end` are the
/// min/max over members, `text` is member text joined by a single space, and
/// `word_count` is the member sum.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Chunk {
    pub source_id: String,
    /// `sequence_index` of the first member, in original order.
    pub representative_index: i64,
    pub start: Timestamp,
    pub end: Timestamp,
    pub text: String,
    pub word_count: usize,
}

impl From<&RatedCaption> for Chunk {
    fn from(caption: &RatedCaption) -> Self {
        Self {
            source_id: caption.line.source_id.clone(),
            representative_index: caption.line.sequence_index,
            start: caption.line.start,
            end: caption.line.end,
            text: caption.line.text.clone(),
            word_count: caption.word_count,
        }
    }
}

impl Chunk {
    /// Fold `next` into this chunk. `next` must come after every member
    /// already absorbed, in original order.
    pub(crate) fn absorb(&mut self, next: Chunk) {
        self.start = self.start.min(next.start);
        self.end = self.end.max(next.end);
        self.text.push(' ');
        self.text.push_str(&next.text);
        self.word_count += next.word_count;
    }
}
