use time::Date;

use crate::dates;
use crate::error::ApiError;

/// Inclusive date constraint for a log query, one variant per
/// combination of the `from`/`to` parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    Between(Date, Date),
    From(Date),
    Until(Date),
    All,
}

impl DateRange {
    /// Empty or whitespace-only parameters count as absent, the same way
    /// an empty body `date` does on creation; only non-blank text that
    /// fails to parse is an error.
    pub fn from_params(from: Option<&str>, to: Option<&str>) -> Result<Self, ApiError> {
        let from = present(from).map(dates::parse_date_text).transpose()?;
        let to = present(to).map(dates::parse_date_text).transpose()?;
        Ok(match (from, to) {
            (Some(from), Some(to)) => Self::Between(from, to),
            (Some(from), None) => Self::From(from),
            (None, Some(to)) => Self::Until(to),
            (None, None) => Self::All,
        })
    }
}

fn present(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|s| !s.is_empty())
}

/// A cap on the number of log entries. Non-numeric or negative text is
/// ignored rather than rejected; absence means unbounded.
pub fn parse_limit(text: Option<&str>) -> Option<i64> {
    text.and_then(|t| t.trim().parse::<i64>().ok())
        .filter(|n| *n >= 0)
}
