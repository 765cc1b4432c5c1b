use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Please enter a YouTube URL first!")]
    EmptyUrl,

    #[error("Please enter a valid YouTube URL!")]
    InvalidUrl,

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Downloader error: {0}")]
    Downloader(String),
}

impl From<crate::downloader::DownloaderError> for AppError {
    fn from(err: crate::downloader::DownloaderError) -> Self {
        AppError::Downloader(err.to_string())
    }
}
