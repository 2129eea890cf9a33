use std::fmt;
use std::str::FromStr;

use crate::error::TimestampError;

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// Offset from the start of the media, at millisecond precision.
///
/// Parses from and renders to the subtitle clock format `HH:MM:SS,mmm`.
/// Hours are not capped at 24 so long recordings still round-trip.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct Timestamp(u64);

impl Timestamp {
    pub const ZERO: Self = Self(0);

    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Signed distance `self - earlier` in milliseconds. Negative when the
    /// caption's end precedes its start, which the parser does not reject.
    /// Saturates at the `i64` bounds for clock values past `i64::MAX`.
    pub fn millis_since(self, earlier: Self) -> i64 {
        let diff = i128::from(self.0) - i128::from(earlier.0);
        diff.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / MS_PER_HOUR;
        let minutes = (self.0 % MS_PER_HOUR) / MS_PER_MINUTE;
        let seconds = (self.0 % MS_PER_MINUTE) / MS_PER_SECOND;
        let millis = self.0 % MS_PER_SECOND;
        write!(f, "{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimestampError {
            value: s.to_string(),
        };

        let (clock, millis) = s.split_once(',').ok_or_else(invalid)?;
        let mut parts = clock.split(':');
        let (Some(h), Some(m), Some(sec), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        if h.len() < 2 || m.len() != 2 || sec.len() != 2 || millis.len() != 3 {
            return Err(invalid());
        }

        let hours = digits(h).ok_or_else(invalid)?;
        let minutes = digits(m).filter(|v| *v < 60).ok_or_else(invalid)?;
        let seconds = digits(sec).filter(|v| *v < 60).ok_or_else(invalid)?;
        let millis = digits(millis).ok_or_else(invalid)?;

        hours
            .checked_mul(MS_PER_HOUR)
            .and_then(|ms| {
                ms.checked_add(minutes * MS_PER_MINUTE + seconds * MS_PER_SECOND + millis)
            })
            .map(Self)
            .ok_or_else(invalid)
    }
}

// `u64::from_str` accepts a leading `+`; the clock format does not.
fn digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> Self {
        ts.to_string()
    }
}

impl TryFrom<String> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
