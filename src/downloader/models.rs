use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::VideoQuality;

pub const AUDIO_FORMAT: &str = "bestaudio/best";
pub const AUDIO_CODEC: &str = "mp3";
pub const AUDIO_QUALITY: &str = "192";

/// Filename template, expanded by yt-dlp from the item metadata
pub const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Options handed to yt-dlp for a single download.
///
/// Serializes with the same keys the yt-dlp Python API uses, which keeps
/// the debug logs comparable with yt-dlp's own option dumps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadOptions {
    pub format: String,
    #[serde(rename = "outtmpl")]
    pub output_template: String,
    pub quiet: bool,
    #[serde(rename = "noplaylist")]
    pub no_playlist: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub postprocessors: Vec<PostProcessor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "key")]
pub enum PostProcessor {
    #[serde(rename = "FFmpegExtractAudio")]
    ExtractAudio {
        #[serde(rename = "preferredcodec")]
        codec: String,
        #[serde(rename = "preferredquality")]
        quality: String,
    },
}

impl DownloadOptions {
    pub fn video(quality: VideoQuality, output_dir: &Path) -> Self {
        Self {
            format: quality.format_selector().to_string(),
            output_template: output_template(output_dir),
            quiet: true,
            no_playlist: true,
            postprocessors: Vec::new(),
        }
    }

    pub fn audio(output_dir: &Path) -> Self {
        Self {
            format: AUDIO_FORMAT.to_string(),
            output_template: output_template(output_dir),
            quiet: true,
            no_playlist: true,
            postprocessors: vec![PostProcessor::ExtractAudio {
                codec: AUDIO_CODEC.to_string(),
                quality: AUDIO_QUALITY.to_string(),
            }],
        }
    }

    /// Command line equivalent of these options, without the URL.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "-f".to_string(),
            self.format.clone(),
            "-o".to_string(),
            self.output_template.clone(),
        ];

        if self.quiet {
            args.push("--quiet".to_string());
            args.push("--no-warnings".to_string());
        }

        if self.no_playlist {
            args.push("--no-playlist".to_string());
        }

        for step in &self.postprocessors {
            match step {
                PostProcessor::ExtractAudio { codec, quality } => {
                    args.push("-x".to_string());
                    args.push("--audio-format".to_string());
                    args.push(codec.clone());
                    args.push("--audio-quality".to_string());
                    // bare numbers up to 10 mean VBR levels to yt-dlp
                    args.push(format!("{}K", quality));
                }
            }
        }

        args
    }
}

fn output_template(output_dir: &Path) -> String {
    output_dir.join(OUTPUT_TEMPLATE).to_string_lossy().into_owned()
}

/// How the yt-dlp executable is launched
#[derive(Debug, Clone)]
pub struct DownloaderConfig {
    pub program: PathBuf,
    /// Arguments placed before the generated ones, e.g. `-m yt_dlp` for a python launcher.
    pub base_args: Vec<String>,
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("yt-dlp"),
            base_args: Vec::new(),
        }
    }
}
