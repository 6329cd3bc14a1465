use crate::config::OutputFormat;
use tamilmv_extractor_prelude::Movie;

/// Renders a movie the way it is printed on stdout.
pub fn render(movie: &Movie, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(movie).map_err(|err| err.to_string()),
        OutputFormat::Text => {
            let mut lines = vec![movie.to_string()];
            lines.extend(movie.torrents.iter().map(|torrent| torrent.to_string()));
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::config::OutputFormat;
    use chrono::{TimeZone, Utc};
    use tamilmv_extractor_prelude::{Movie, Torrent};

    fn movie() -> Movie {
        Movie {
            name: "Kumari Srimathi".into(),
            release_datetime: Utc.with_ymd_and_hms(2023, 11, 5, 10, 0, 0).unwrap(),
            poster_url: "poster.jpg".into(),
            screenshots: vec!["shot1.png".into()],
            torrents: vec![
                Torrent::new("1080p.torrent", "https://x/1.torrent", "magnet:?xt=1"),
                Torrent::new("720p.torrent", "https://x/2.torrent", "magnet:?xt=2"),
            ],
        }
    }

    #[test]
    fn should_render_text() {
        assert_eq!(
            render(&movie(), OutputFormat::Text).unwrap(),
            "Movie: Kumari Srimathi (Released on: 2023-11-05 10:00:00)\nTorrent File: 1080p.torrent\nTorrent File: 720p.torrent"
        );
    }

    #[test]
    fn should_render_json() {
        let output = render(&movie(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["poster_url"], "poster.jpg");
        assert_eq!(value["release_datetime"], "2023-11-05T10:00:00Z");
        assert_eq!(value["torrents"][1]["torrent_link"], "https://x/2.torrent");
    }
}
