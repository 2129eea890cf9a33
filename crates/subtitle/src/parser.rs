use crate::error::ParseError;
use crate::timestamp::Timestamp;
use crate::types::CaptionLine;

const TIME_RANGE_SEPARATOR: &str = " --> ";
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parse the raw text of one subtitle file into captions, in file order.
///
/// Blank lines are separators only; the remaining lines are consumed three
/// at a time as index, time range and text. The first malformed block aborts
/// the whole file, so a caller never sees a partial caption list.
pub fn parse(source_id: &str, raw: &str) -> Result<Vec<CaptionLine>, ParseError> {
    let raw = raw.strip_prefix(BYTE_ORDER_MARK).unwrap_or(raw);
    // `\r\n` splits into a line plus an empty one, which is dropped below.
    let lines: Vec<&str> = raw
        .split(['\n', '\r'])
        .filter(|line| !line.is_empty())
        .collect();

    let mut captions = Vec::with_capacity(lines.len() / 3);
    for (i, block) in lines.chunks(3).enumerate() {
        let block_no = i + 1;
        let [index, range, text] = block else {
            return Err(ParseError::TruncatedBlock {
                block: block_no,
                found: block.len(),
            });
        };

        let sequence_index = parse_index(index, block_no)?;
        let (start, end) = parse_time_range(range, block_no)?;

        captions.push(CaptionLine {
            source_id: source_id.to_string(),
            sequence_index,
            start,
            end,
            text: (*text).to_string(),
        });
    }

    tracing::trace!(source_id, captions = captions.len(), "parsed");
    Ok(captions)
}

fn parse_index(line: &str, block: usize) -> Result<i64, ParseError> {
    line.trim()
        .parse()
        .map_err(|_| ParseError::InvalidIndex {
            block,
            line: line.to_string(),
        })
}

fn parse_time_range(line: &str, block: usize) -> Result<(Timestamp, Timestamp), ParseError> {
    let malformed = || ParseError::MalformedTimeRange {
        block,
        line: line.to_string(),
    };

    let (start, end) = line.split_once(TIME_RANGE_SEPARATOR).ok_or_else(malformed)?;
    if end.contains(TIME_RANGE_SEPARATOR) {
        return Err(malformed());
    }

    let timestamp = |s: &str| {
        s.trim()
            .parse::<Timestamp>()
            .map_err(|source| ParseError::InvalidTimestamp { block, source })
    };

    Ok((timestamp(start)?, timestamp(end)?))
}
