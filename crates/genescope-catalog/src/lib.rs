pub mod config;
pub mod paginate;
pub mod search;
pub mod session;
pub mod store;

pub use config::CatalogConfig;
pub use paginate::{page_window, paginate, Page, PageMarker};
pub use search::{search, ResultSet, SearchOutcome};
pub use session::SearchSession;
pub use store::RecordStore;

use genescope_formats::FormatError;
use thiserror::Error;

/// Failure to bring the record store into its loaded state.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read record file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse record file: {0}")]
    Parse(#[from] FormatError),
    #[error("Record store is already loaded")]
    AlreadyLoaded,
    #[error("Record store load already failed; start a new session to reload")]
    PreviousLoadFailed,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Record store is not loaded")]
    NotLoaded,
    #[error("No record at index {0}")]
    NoSuchRecord(usize),
    #[error("Page {page} is outside 1..={total}")]
    PageOutOfRange { page: usize, total: usize },
}
