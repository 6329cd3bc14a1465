use std::process::ExitCode;
use tamilmv_extractor_prelude::{Scraper, ScraperBuilder};

mod config;
mod output;

const DEFAULT_URL: &str = "https://www.1tamilmv.prof/index.php?/forums/topic/175496-kumari-srimathi-2023-s01-ep-01-07-true-web-dl-1080p-720p-x264-tamil-telugu-hindi-malayalam-39gb-16gb-900mb-esub/";

fn init_logs() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tamilmv=debug,tamilmv_extractor_tamilmv=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(cfg!(debug_assertions))
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn target_url() -> String {
    std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from(DEFAULT_URL))
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logs();

    let config = match config::Config::from_env() {
        Ok(value) => value,
        Err(error) => {
            tracing::error!("unable to load configuration: {error}");
            return ExitCode::FAILURE;
        }
    };
    let scraper = match config.scraper.build() {
        Ok(value) => value,
        Err(error) => {
            tracing::error!("unable to build scraper: {error}");
            return ExitCode::FAILURE;
        }
    };

    let url = target_url();
    let movie = match scraper.scrape(url.as_str()).await {
        Ok(value) => value,
        Err(error) => {
            tracing::error!("unable to scrape {url:?}: {error}");
            return ExitCode::FAILURE;
        }
    };

    match output::render(&movie, config.output.format) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!("unable to render {:?}: {error}", movie.name);
            ExitCode::FAILURE
        }
    }
}
