pub mod codon;
pub mod operations;
pub mod primer;
pub mod record;
pub mod tool;

pub use primer::*;
pub use record::*;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolkitError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
