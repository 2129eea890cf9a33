//! # Subtitle regrouping
//!
//! Turns dense subtitle tracks into readable timed chunks:
//!
//! ```text
//! raw text ─ parser ─▶ CaptionLine ─ rate ─▶ RatedCaption
//!          ─ fragment ─▶ Chunk ─ budget ─▶ Chunk ─ format ─▶ text
//! ```
//!
//! Every stage returns a new ordered sequence and never touches the input
//! of an earlier one. [`ChunkPipeline`] runs the whole chain for one file.

mod budget;
mod config;
mod error;
mod format;
mod fragment;
pub mod grouping;
mod parser;
mod pipeline;
pub mod rate;
mod stats;
mod timestamp;
mod types;

pub use budget::BudgetSplitter;
pub use config::{ChunkConfig, DEFAULT_MIN_WORDS_PER_CHUNK, DEFAULT_MIN_WORDS_PER_SECOND};
pub use error::{ConfigError, Error, ParseError, Result, TimestampError};
pub use format::{output_path, render, render_chunk};
pub use fragment::FragmentGrouper;
pub use parser::parse;
pub use pipeline::{ChunkPipeline, Rendered};
pub use rate::annotate;
pub use stats::ChunkStats;
pub use timestamp::Timestamp;
pub use types::{CaptionLine, Chunk, RatedCaption};
