use std::process::Stdio;

use futures::future::BoxFuture;
use thiserror::Error;
use tokio::process::Command;

use super::models::{DownloadOptions, DownloaderConfig};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DownloaderError {
    #[error("Failed to start {program}: {reason}")]
    Spawn { program: String, reason: String },

    #[error("yt-dlp failed ({status}): {message}")]
    Failed { status: String, message: String },
}

pub type Result<T> = std::result::Result<T, DownloaderError>;

/// Something that can fetch a single URL with the given options.
pub trait Downloader: Send + Sync {
    fn download(&self, url: &str, options: &DownloadOptions) -> BoxFuture<'static, Result<()>>;
}

/// Runs the yt-dlp executable as a child process.
#[derive(Debug, Clone, Default)]
pub struct YtDlp {
    config: DownloaderConfig,
}

impl YtDlp {
    pub fn new(config: DownloaderConfig) -> Self {
        Self { config }
    }

    fn build_args(&self, url: &str, options: &DownloadOptions) -> Vec<String> {
        let mut args = self.config.base_args.clone();
        args.extend(options.to_args());
        // Stop option parsing so a URL can never be taken for a flag
        args.push("--".to_string());
        args.push(url.to_string());
        args
    }
}

impl Downloader for YtDlp {
    fn download(&self, url: &str, options: &DownloadOptions) -> BoxFuture<'static, Result<()>> {
        let program = self.config.program.clone();
        let args = self.build_args(url, options);

        Box::pin(async move {
            tracing::debug!("Running {} {:?}", program.display(), args);

            let output = Command::new(&program)
                .args(&args)
                .stdin(Stdio::null())
                .output()
                .await
                .map_err(|e| DownloaderError::Spawn {
                    program: program.display().to_string(),
                    reason: e.to_string(),
                })?;

            if output.status.success() {
                return Ok(());
            }

            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = stderr
                .lines()
                .rev()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .unwrap_or("no error output")
                .to_string();

            Err(DownloaderError::Failed {
                status: output.status.to_string(),
                message,
            })
        })
    }
}
