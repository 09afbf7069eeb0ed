// Year ranges and year augmentation of candidates

use std::fmt;
use std::num::ParseIntError;
use std::ops::RangeInclusive;
use std::str::FromStr;

use tracing::debug;

/// Error returned when a `START-END` year range cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum YearRangeError {
    #[error("invalid year range {0:?}: expected START-END, e.g. 1990-2025")]
    Malformed(String),
    #[error("invalid year {value:?} in year range: {source}")]
    InvalidYear {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid year range: start {start} is after end {end}")]
    Reversed { start: u32, end: u32 },
}

/// An inclusive, non-empty range of years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRange {
    start: u32,
    end: u32,
}

impl YearRange {
    /// Create a range, rejecting `start > end`.
    pub fn new(start: u32, end: u32) -> Result<Self, YearRangeError> {
        if start > end {
            return Err(YearRangeError::Reversed { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of years in the range (always at least one).
    pub fn count(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    pub fn years(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }
}

impl FromStr for YearRange {
    type Err = YearRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| YearRangeError::Malformed(s.to_string()))?;
        Self::new(parse_year(start)?, parse_year(end)?)
    }
}

fn parse_year(text: &str) -> Result<u32, YearRangeError> {
    let text = text.trim();
    text.parse().map_err(|source| YearRangeError::InvalidYear {
        value: text.to_string(),
        source,
    })
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Yield every candidate followed by `candidate + year` and
/// `year + candidate` for every year in `range`.
///
/// Lazy, so a consumer such as [`WordlistBuilder`](crate::cap::WordlistBuilder)
/// can bound memory. Years are rendered in plain decimal; `C` candidates
/// yield exactly `C * (1 + 2 * range.count())` strings, which may repeat
/// when a candidate is itself made of years.
pub fn with_years<I>(candidates: I, range: &YearRange) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = String>,
{
    let years: Vec<String> = range.years().map(|y| y.to_string()).collect();
    debug!(years = years.len(), "augmenting candidates with years");
    candidates.into_iter().flat_map(move |candidate| {
        let forms: Vec<String> = years
            .iter()
            .flat_map(|year| [format!("{candidate}{year}"), format!("{year}{candidate}")])
            .collect();
        std::iter::once(candidate).chain(forms)
    })
}
