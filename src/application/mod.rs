pub mod download_coordinator;

pub use download_coordinator::{validate_url, DownloadCoordinator};
