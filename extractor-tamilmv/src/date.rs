use chrono::format::ParseErrorKind;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use tamilmv_extractor_prelude::DATETIME_FORMAT;

// 2023-11-05T10:00:00Z
pub fn parse(input: &str) -> Result<DateTime<Utc>, ParseErrorKind> {
    NaiveDateTime::parse_from_str(input, DATETIME_FORMAT)
        .map(|dt| Utc.from_utc_datetime(&dt))
        .map_err(|err| {
            tracing::debug!("unable to parse date {input:?}: {err:?}");
            err.kind()
        })
}
