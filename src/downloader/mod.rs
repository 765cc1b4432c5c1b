pub mod models;
pub mod ytdlp;

#[cfg(test)]
pub mod testing;

pub use models::{DownloadOptions, DownloaderConfig};
pub use ytdlp::{Downloader, DownloaderError, YtDlp};
