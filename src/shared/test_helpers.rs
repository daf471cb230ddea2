#[cfg(test)]
use crate::features::postcodes::models::PostalRecord;

#[cfg(test)]
use crate::features::postcodes::sources::{DatasetError, DatasetProvider};

#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

/// Two-row fixture: Northgate/North/101/A1 and Southgate/South/202/B2
#[cfg(test)]
pub fn gates_dataset() -> Vec<PostalRecord> {
    vec![
        PostalRecord {
            suburb: "Northgate".to_string(),
            area: "North".to_string(),
            street_code: 101,
            box_code: "A1".to_string(),
        },
        PostalRecord {
            suburb: "Southgate".to_string(),
            area: "South".to_string(),
            street_code: 202,
            box_code: "B2".to_string(),
        },
    ]
}

/// In-memory provider that counts how often it is loaded
#[cfg(test)]
pub struct StaticDatasetProvider {
    records: Vec<PostalRecord>,
    pub loads: AtomicUsize,
}

#[cfg(test)]
impl StaticDatasetProvider {
    pub fn new(records: Vec<PostalRecord>) -> Self {
        Self {
            records,
            loads: AtomicUsize::new(0),
        }
    }
}

#[cfg(test)]
#[async_trait::async_trait]
impl DatasetProvider for StaticDatasetProvider {
    async fn load(&self) -> Result<Vec<PostalRecord>, DatasetError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.clone())
    }
}

/// Provider that always fails with the configured error kind
#[cfg(test)]
pub enum FailingDatasetProvider {
    Unreadable,
    Malformed,
}

#[cfg(test)]
impl FailingDatasetProvider {
    pub fn unreadable() -> Self {
        Self::Unreadable
    }

    pub fn malformed() -> Self {
        Self::Malformed
    }
}

#[cfg(test)]
#[async_trait::async_trait]
impl DatasetProvider for FailingDatasetProvider {
    async fn load(&self) -> Result<Vec<PostalRecord>, DatasetError> {
        match self {
            Self::Unreadable => Err(DatasetError::Source {
                path: "sample_data/postalcodes.csv".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            }),
            Self::Malformed => Err(DatasetError::Format {
                line: 2,
                reason: "street_code 'abc' is not an integer".to_string(),
            }),
        }
    }
}
