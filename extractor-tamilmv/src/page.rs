use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tamilmv_extractor_helper::{image::is_image, text::normalize};
use tamilmv_extractor_prelude::{ExtractionError, Movie, Torrent};

const TITLE: &str = "title";
const TIMESTAMP: &str = "timestamp";

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h3").unwrap());
static TIME_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("time").unwrap());
static IMAGE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("img.ipsImage").unwrap());
static MAGNET_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.skyblue-button").unwrap());
static TORRENT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[data-fileext=\"torrent\"]").unwrap());
static FILE_NAME_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span[style=\"color:#0000ff;\"]").unwrap());

/// The three lists torrents are built from, in document order.
///
/// They are expected to have the same length. Nothing enforces it: pairing
/// stops at the shortest list and the extra entries are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TorrentSources {
    pub file_names: Vec<String>,
    pub torrent_links: Vec<String>,
    pub magnet_links: Vec<String>,
}

impl TorrentSources {
    /// Lengths of file names, torrent links and magnet links.
    pub fn lengths(&self) -> (usize, usize, usize) {
        (
            self.file_names.len(),
            self.torrent_links.len(),
            self.magnet_links.len(),
        )
    }

    pub fn is_aligned(&self) -> bool {
        let (names, links, magnets) = self.lengths();
        names == links && links == magnets
    }

    pub fn into_torrents(self) -> Vec<Torrent> {
        self.file_names
            .into_iter()
            .zip(self.torrent_links)
            .zip(self.magnet_links)
            .map(|((file_name, torrent_link), magnet_link)| {
                Torrent::new(file_name, torrent_link, magnet_link)
            })
            .collect()
    }
}

fn parse_name(html: &Html) -> Result<String, ExtractionError> {
    html.select(&TITLE_SELECTOR)
        .next()
        .map(|elt| normalize(&elt.text().collect::<String>()))
        .filter(|name| !name.is_empty())
        .ok_or(ExtractionError::Missing(TITLE))
}

fn parse_release_datetime(html: &Html) -> Result<DateTime<Utc>, ExtractionError> {
    let value = html
        .select(&TIME_SELECTOR)
        .next()
        .and_then(|elt| elt.value().attr("datetime"))
        .ok_or(ExtractionError::Missing(TIMESTAMP))?;
    crate::date::parse(value).map_err(|cause| ExtractionError::Malformed {
        field: TIMESTAMP,
        cause,
    })
}

/// Returns the poster followed by the screenshots.
fn parse_images(html: &Html) -> (String, Vec<String>) {
    let mut pics = html
        .select(&IMAGE_SELECTOR)
        .filter_map(|elt| elt.value().attr("src"))
        .filter(|src| is_image(src))
        .map(String::from);
    let poster = pics.next().unwrap_or_default();
    (poster, pics.collect())
}

fn collect_hrefs(html: &Html, selector: &Selector) -> Vec<String> {
    html.select(selector)
        .filter_map(|elt| elt.value().attr("href"))
        .map(String::from)
        .collect()
}

pub fn torrent_sources(html: &Html) -> TorrentSources {
    TorrentSources {
        file_names: html
            .select(&FILE_NAME_SELECTOR)
            .map(|elt| normalize(&elt.text().collect::<String>()))
            .collect(),
        torrent_links: collect_hrefs(html, &TORRENT_SELECTOR),
        magnet_links: collect_hrefs(html, &MAGNET_SELECTOR),
    }
}

pub fn extract(html: &Html) -> Result<Movie, ExtractionError> {
    let name = parse_name(html)?;
    let release_datetime = parse_release_datetime(html)?;
    let (poster_url, screenshots) = parse_images(html);

    let sources = torrent_sources(html);
    if !sources.is_aligned() {
        let (names, links, magnets) = sources.lengths();
        tracing::warn!(
            "{name:?} has {names} file names, {links} torrent links and {magnets} magnet links, keeping the shortest"
        );
    }

    Ok(Movie {
        name,
        release_datetime,
        poster_url,
        screenshots,
        torrents: sources.into_torrents(),
    })
}

pub fn parse(html: &str) -> Result<Movie, ExtractionError> {
    let html = Html::parse_document(html);
    extract(&html)
}
