use std::sync::Mutex;

use futures::future::BoxFuture;

use super::{ytdlp::Result, DownloadOptions, Downloader, DownloaderError};

/// Records every call instead of running yt-dlp
#[derive(Default)]
pub struct RecordingDownloader {
    pub calls: Mutex<Vec<(String, DownloadOptions)>>,
    pub fail_with: Option<DownloaderError>,
}

impl RecordingDownloader {
    pub fn calls(&self) -> Vec<(String, DownloadOptions)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Downloader for RecordingDownloader {
    fn download(&self, url: &str, options: &DownloadOptions) -> BoxFuture<'static, Result<()>> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), options.clone()));
        let result = match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        };
        Box::pin(async move { result })
    }
}
