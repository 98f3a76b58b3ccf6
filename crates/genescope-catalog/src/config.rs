use std::num::NonZeroUsize;
use std::path::PathBuf;

use genescope_core::primer::DEFAULT_PRIMER_LENGTH;

/// Default location of the record file, relative to the working directory.
pub const DEFAULT_RECORDS_PATH: &str = "data/genes.json";
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(10).unwrap();
pub const DEFAULT_CHUNK_SIZE: NonZeroUsize = NonZeroUsize::new(10).unwrap();

/// Settings for browsing the catalogue and running the sequence tools.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Record file loaded once at startup.
    pub records_path: PathBuf,
    /// Results shown per page.
    pub page_size: NonZeroUsize,
    /// Primer length for primer design.
    pub primer_length: usize,
    /// Symbols per display group when printing sequences.
    pub chunk_size: NonZeroUsize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            records_path: PathBuf::from(DEFAULT_RECORDS_PATH),
            page_size: DEFAULT_PAGE_SIZE,
            primer_length: DEFAULT_PRIMER_LENGTH,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
