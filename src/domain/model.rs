use std::fmt;

/// Choices offered by the quality picker, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VideoQuality {
    #[default]
    Best,
    P1080,
    P720,
    P480,
    P360,
    Worst,
}

impl VideoQuality {
    pub const ALL: [VideoQuality; 6] = [
        VideoQuality::Best,
        VideoQuality::P1080,
        VideoQuality::P720,
        VideoQuality::P480,
        VideoQuality::P360,
        VideoQuality::Worst,
    ];

    /// Format selector understood by yt-dlp
    pub fn format_selector(self) -> &'static str {
        match self {
            VideoQuality::Best => "best",
            VideoQuality::P1080 => "best[height<=1080]",
            VideoQuality::P720 => "best[height<=720]",
            VideoQuality::P480 => "best[height<=480]",
            VideoQuality::P360 => "best[height<=360]",
            VideoQuality::Worst => "worst",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VideoQuality::Best => "Best Quality",
            VideoQuality::P1080 => "1080p",
            VideoQuality::P720 => "720p",
            VideoQuality::P480 => "480p",
            VideoQuality::P360 => "360p",
            VideoQuality::Worst => "Worst Quality",
        }
    }
}

impl fmt::Display for VideoQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video(VideoQuality),
    Audio,
}

impl MediaKind {
    /// Text of the information dialog shown once the download finished.
    pub fn completion_message(self) -> String {
        match self {
            MediaKind::Video(quality) => format!("Video downloaded in {} quality!", quality),
            MediaKind::Audio => "Audio downloaded successfully!".to_string(),
        }
    }
}

/// A validated request, ready to be turned into downloader options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub kind: MediaKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DownloadPhase {
    #[default]
    Idle,
    Busy,
}
