//! Backing stores for the postal code dataset.
//!
//! Providers load the whole dataset on every call. Nothing is cached, so edits
//! to the backing store show up on the next request.

mod csv_source;

pub use csv_source::CsvDatasetProvider;

use async_trait::async_trait;
use thiserror::Error;

use crate::features::postcodes::models::PostalRecord;

#[derive(Debug, Error)]
pub enum DatasetError {
    /// Backing store is missing or unreadable
    #[error("cannot read dataset at '{path}': {source}")]
    Source {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be turned into a record; the whole load is aborted
    #[error("malformed dataset row at line {line}: {reason}")]
    Format { line: u64, reason: String },
}

/// Loads the ordered postal code dataset.
#[async_trait]
pub trait DatasetProvider: Send + Sync {
    /// Read every record in source order.
    ///
    /// # Errors
    ///
    /// * `DatasetError::Source` - the backing store cannot be read
    /// * `DatasetError::Format` - any row is malformed, including a non-integer `street_code`
    async fn load(&self) -> Result<Vec<PostalRecord>, DatasetError>;
}
