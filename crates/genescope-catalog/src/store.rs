use std::path::Path;

use genescope_core::record::GeneRecord;
use genescope_formats::records;

use crate::{CatalogError, LoadError};

/// Write-once holder of the gene catalogue.
///
/// Starts unloaded and accepts exactly one load attempt. Success moves it
/// to loaded; failure moves it to failed with no partial list. Either way
/// later loads are rejected and a fresh store is needed.
#[derive(Debug, Default)]
pub enum RecordStore {
    #[default]
    Unloaded,
    Loaded(Vec<GeneRecord>),
    Failed,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::Unloaded
    }

    fn ensure_unattempted(&self) -> Result<(), LoadError> {
        match self {
            RecordStore::Unloaded => Ok(()),
            RecordStore::Loaded(_) => Err(LoadError::AlreadyLoaded),
            RecordStore::Failed => Err(LoadError::PreviousLoadFailed),
        }
    }

    /// Parse a record file payload into the store.
    pub fn load_from_str(&mut self, payload: &str) -> Result<usize, LoadError> {
        self.ensure_unattempted()?;

        match records::parse(payload) {
            Ok(parsed) => {
                let count = parsed.len();
                tracing::info!(records = count, "record store loaded");
                *self = RecordStore::Loaded(parsed);
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(error = %e, "record file could not be parsed");
                *self = RecordStore::Failed;
                Err(LoadError::Parse(e))
            }
        }
    }

    /// Read and parse the record file at `path`.
    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        self.ensure_unattempted()?;

        let path = path.as_ref();
        let payload = match std::fs::read_to_string(path) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "record file could not be read");
                *self = RecordStore::Failed;
                return Err(LoadError::Io(e));
            }
        };
        self.load_from_str(&payload)
    }

    /// Convenience constructor: a store loaded from `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let mut store = Self::new();
        store.load_from_path(path)?;
        Ok(store)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, RecordStore::Loaded(_))
    }

    /// The full record list in insertion order.
    pub fn records(&self) -> Result<&[GeneRecord], CatalogError> {
        match self {
            RecordStore::Loaded(records) => Ok(records),
            RecordStore::Unloaded | RecordStore::Failed => Err(CatalogError::NotLoaded),
        }
    }

    pub fn get(&self, index: usize) -> Result<&GeneRecord, CatalogError> {
        self.records()?
            .get(index)
            .ok_or(CatalogError::NoSuchRecord(index))
    }

    pub fn len(&self) -> usize {
        self.records().map(<[GeneRecord]>::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
