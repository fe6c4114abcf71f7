use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::error::ApiError;

/// The wire form for every date this API stores or returns, e.g.
/// "Thu Jan 05 2023". Filtering happens on native DATE values; this
/// text is only produced at the serialization boundary.
const CANONICAL: &[FormatItem<'static>] =
    format_description!("[weekday repr:short] [month repr:short] [day] [year]");

const ISO: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub fn format_date_string(date: Date) -> String {
    // the canonical description has no fallible components
    date.format(CANONICAL).expect("format canonical date")
}

/// Accepts ISO `YYYY-MM-DD` or the canonical form itself, so feeding a
/// date the API produced back into it is a no-op.
pub fn parse_date_text(text: &str) -> Result<Date, ApiError> {
    let text = text.trim();
    Date::parse(text, ISO)
        .or_else(|_| Date::parse(text, CANONICAL))
        .map_err(|_| ApiError::InvalidDate)
}

pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}
