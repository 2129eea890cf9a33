use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timestamp {value:?}, expected HH:MM:SS,mmm")]
pub struct TimestampError {
    pub value: String,
}

/// A malformed caption block. `block` is 1-based and counts blocks, not
/// physical lines, so it matches the caption a person would look for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("block {block}: caption index {line:?} is not an integer")]
    InvalidIndex { block: usize, line: String },

    #[error("block {block}: time range {line:?} must contain exactly one \" --> \"")]
    MalformedTimeRange { block: usize, line: String },

    #[error("block {block}: {source}")]
    InvalidTimestamp {
        block: usize,
        #[source]
        source: TimestampError,
    },

    #[error("block {block}: truncated, expected 3 lines but found {found}")]
    TruncatedBlock { block: usize, found: usize },
}

impl ParseError {
    pub fn block(&self) -> usize {
        match self {
            Self::InvalidIndex { block, .. }
            | Self::MalformedTimeRange { block, .. }
            | Self::InvalidTimestamp { block, .. }
            | Self::TruncatedBlock { block, .. } => *block,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("min_words_per_second must be a finite, non-negative number (got {0})")]
    InvalidWordsPerSecond(f64),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{source_id}: {source}")]
    Parse {
        source_id: String,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
