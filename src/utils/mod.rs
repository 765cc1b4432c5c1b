use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

static YOUTUBE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:www\.)?youtu(?:be\.com/watch\?v=|\.be/)([\w-]*)(&(amp;)?[\w?=]*)?$")
        .expect("YouTube URL pattern is valid")
});

/// Check that the whole string is a YouTube watch or short link.
///
/// The input is matched as-is, callers trim it first.
pub fn is_youtube_url(url: &str) -> bool {
    YOUTUBE_URL.is_match(url)
}

/// `~/Downloads/YouTube`, falling back to the working directory when no home is known
pub fn default_download_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Downloads")
        .join("YouTube")
}
