mod app;
mod application;
mod domain;
mod downloader;
mod ui;
mod utils;

use iced::{window, Point, Size};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    init_logging();

    iced::application(app::DownloadApp::default, app::update, app::view)
        .title("YouTube Downloader")
        .window(window::Settings {
            size: Size::new(600.0, 400.0),
            position: window::Position::Specific(Point::new(100.0, 100.0)),
            ..Default::default()
        })
        .run()
}

/// Log to stderr, `RUST_LOG` overrides the default filter.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,yt_downloader=debug"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(
        "Saving downloads to {}",
        utils::default_download_dir().display()
    );
}
