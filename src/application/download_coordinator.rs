use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{
    domain::{AppError, DownloadRequest, MediaKind},
    downloader::{DownloadOptions, Downloader, DownloaderConfig, YtDlp},
    utils::{default_download_dir, is_youtube_url},
};

/// Trim the raw input and check it against the YouTube link pattern.
pub fn validate_url(input: &str) -> Result<&str, AppError> {
    let url = input.trim();
    if url.is_empty() {
        return Err(AppError::EmptyUrl);
    }
    if !is_youtube_url(url) {
        return Err(AppError::InvalidUrl);
    }
    Ok(url)
}

#[derive(Clone)]
pub struct DownloadCoordinator {
    downloader: Arc<dyn Downloader>,
    output_dir: PathBuf,
}

impl Default for DownloadCoordinator {
    fn default() -> Self {
        Self::new(
            Arc::new(YtDlp::new(DownloaderConfig::default())),
            default_download_dir(),
        )
    }
}

impl DownloadCoordinator {
    pub fn new(downloader: Arc<dyn Downloader>, output_dir: PathBuf) -> Self {
        Self {
            downloader,
            output_dir,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn prepare(&self, input: &str, kind: MediaKind) -> Result<DownloadRequest, AppError> {
        let url = validate_url(input)?;
        Ok(DownloadRequest {
            url: url.to_string(),
            kind,
        })
    }

    pub fn options_for(&self, kind: MediaKind) -> DownloadOptions {
        match kind {
            MediaKind::Video(quality) => DownloadOptions::video(quality, &self.output_dir),
            MediaKind::Audio => DownloadOptions::audio(&self.output_dir),
        }
    }

    /// Run one download to completion. Returns the kind that was fetched so the
    /// caller can word the completion dialog.
    pub async fn download(&self, request: DownloadRequest) -> Result<MediaKind, AppError> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| {
                AppError::Io(format!(
                    "Failed to create {}: {}",
                    self.output_dir.display(),
                    e
                ))
            })?;

        let options = self.options_for(request.kind);
        match serde_json::to_string(&options) {
            Ok(json) => tracing::debug!("Download options for {}: {}", request.url, json),
            Err(e) => tracing::warn!("Could not serialize download options: {}", e),
        }

        self.downloader.download(&request.url, &options).await?;

        tracing::info!("Finished {:?} download of {}", request.kind, request.url);
        Ok(request.kind)
    }
}
