pub use chrono;

use chrono::format::ParseErrorKind;
use chrono::{DateTime, Utc};
use url::ParseError;

/// Format of the `datetime` attribute carried by release pages.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
/// Format used when printing a release date.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub trait ScraperBuilder: std::fmt::Debug {
    fn build(self) -> Result<Box<dyn Scraper + Send + Sync + 'static>, ScrapeError>;
}

#[async_trait::async_trait]
pub trait Scraper: std::fmt::Debug {
    async fn scrape(&self, url: &str) -> Result<Movie, ScrapeError>;
}

/// Failure of the extraction pass over an already fetched document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtractionError {
    /// A required single-occurrence element was not found.
    Missing(&'static str),
    /// A required element was found but its content could not be understood.
    Malformed {
        field: &'static str,
        cause: ParseErrorKind,
    },
}

impl ExtractionError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing(field) => field,
            Self::Malformed { field, .. } => field,
        }
    }
}

impl std::fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(field) => write!(f, "ExtractionError {{ missing={field:?} }}"),
            Self::Malformed { field, cause } => write!(
                f,
                "ExtractionError {{ malformed={field:?}, cause={cause:?} }}"
            ),
        }
    }
}

impl std::error::Error for ExtractionError {}

#[derive(Clone, Debug)]
pub enum ScrapeError {
    UnableToBuildClient { cause: String },
    UnableToBuildUrl { url: String, cause: ParseError },
    UnableToQuery { url: String, cause: String },
    UnableToRead { url: String, cause: String },
    Extraction(ExtractionError),
}

impl From<ExtractionError> for ScrapeError {
    fn from(value: ExtractionError) -> Self {
        Self::Extraction(value)
    }
}

impl std::fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnableToBuildClient { cause } => {
                write!(f, "unable to build http client: {cause}")
            }
            Self::UnableToBuildUrl { url, cause } => {
                write!(f, "unable to build url {url:?}: {cause}")
            }
            Self::UnableToQuery { url, cause } => write!(f, "unable to query {url:?}: {cause}"),
            Self::UnableToRead { url, cause } => write!(f, "unable to read {url:?}: {cause}"),
            Self::Extraction(inner) => write!(f, "{inner}"),
        }
    }
}

impl std::error::Error for ScrapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToBuildUrl { cause, .. } => Some(cause),
            Self::Extraction(inner) => Some(inner),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Movie {
    pub name: String,
    pub release_datetime: DateTime<Utc>,
    pub poster_url: String,
    pub screenshots: Vec<String>,
    pub torrents: Vec<Torrent>,
}

impl Movie {
    pub fn release_datetime_str(&self) -> String {
        self.release_datetime.format(DATETIME_FORMAT).to_string()
    }

    pub fn release_date_display(&self) -> String {
        self.release_datetime.format(DISPLAY_FORMAT).to_string()
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Movie: {} (Released on: {})",
            self.name,
            self.release_date_display()
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Torrent {
    pub file_name: String,
    pub torrent_link: String,
    pub magnet_link: String,
}

impl Torrent {
    pub fn new<N, T, M>(file_name: N, torrent_link: T, magnet_link: M) -> Self
    where
        N: Into<String>,
        T: Into<String>,
        M: Into<String>,
    {
        Self {
            file_name: file_name.into(),
            torrent_link: torrent_link.into(),
            magnet_link: magnet_link.into(),
        }
    }
}

impl std::fmt::Display for Torrent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Torrent File: {}", self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn movie() -> Movie {
        Movie {
            name: "Kumari Srimathi".into(),
            release_datetime: Utc.with_ymd_and_hms(2023, 11, 5, 10, 0, 0).unwrap(),
            poster_url: "poster.jpg".into(),
            screenshots: vec!["shot1.png".into()],
            torrents: vec![Torrent::new(
                "Movie.torrent",
                "https://x/m.torrent",
                "magnet:?xt=...",
            )],
        }
    }

    #[test]
    fn should_display_movie() {
        assert_eq!(
            movie().to_string(),
            "Movie: Kumari Srimathi (Released on: 2023-11-05 10:00:00)"
        );
    }

    #[test]
    fn should_display_torrent() {
        assert_eq!(
            movie().torrents[0].to_string(),
            "Torrent File: Movie.torrent"
        );
    }

    #[test]
    fn should_format_release_datetime_with_source_pattern() {
        assert_eq!(movie().release_datetime_str(), "2023-11-05T10:00:00Z");
    }

    #[test]
    fn should_serialize_movie() {
        let value = serde_json::to_value(movie()).unwrap();
        assert_eq!(value["name"], "Kumari Srimathi");
        assert_eq!(value["release_datetime"], "2023-11-05T10:00:00Z");
        assert_eq!(value["screenshots"][0], "shot1.png");
        assert_eq!(value["torrents"][0]["magnet_link"], "magnet:?xt=...");
    }

    #[test]
    fn should_describe_errors() {
        let err = ExtractionError::Missing("title");
        assert_eq!(err.field(), "title");
        assert_eq!(err.to_string(), "ExtractionError { missing=\"title\" }");

        let err = ScrapeError::from(ExtractionError::Malformed {
            field: "timestamp",
            cause: ParseErrorKind::Invalid,
        });
        assert!(matches!(
            err,
            ScrapeError::Extraction(ExtractionError::Malformed {
                field: "timestamp",
                ..
            })
        ));
    }
}
