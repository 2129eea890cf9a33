use crate::types::{CaptionLine, RatedCaption};

/// Annotate each caption with duration, word count and speaking rate.
/// One output per input, same order.
pub fn annotate(lines: Vec<CaptionLine>) -> Vec<RatedCaption> {
    lines.into_iter().map(rate_caption).collect()
}

pub fn rate_caption(line: CaptionLine) -> RatedCaption {
    let duration_seconds = line.end.millis_since(line.start) as f64 / 1_000.0;
    let word_count = word_count(&line.text);
    let rate = speaking_rate(word_count, duration_seconds);

    RatedCaption {
        line,
        duration_seconds,
        word_count,
        rate,
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Words per second.
///
/// A zero-length caption has no meaningful rate; it is defined as the word
/// count itself, so a zero-length caption with no words rates `0` and always
/// opens a new fragment group. Anything non-finite is also reported as `0`.
pub fn speaking_rate(word_count: usize, duration_seconds: f64) -> f64 {
    let rate = if duration_seconds == 0.0 {
        word_count as f64
    } else {
        word_count as f64 / duration_seconds
    };

    if rate.is_finite() { rate } else { 0.0 }
}
