use crate::features::postcodes::models::PostalRecord;
use crate::shared::constants::{MSG_NO_MATCH, MSG_SIMILAR_RESULTS};

/// Suburb/area pair offered when validation finds no exact match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub suburb: String,
    pub area: String,
}

impl From<PostalRecord> for Suggestion {
    fn from(record: PostalRecord) -> Self {
        Self {
            suburb: record.suburb,
            area: record.area,
        }
    }
}

/// Result of validating a suburb/area combination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// First record in dataset order whose suburb and area both equal the input, ignoring case
    ExactMatch { details: PostalRecord },
    /// Records resembling the input on either field, possibly empty
    NoExactMatch { suggestions: Vec<Suggestion> },
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::ExactMatch { .. })
    }

    /// Human-readable explanation; `None` for an exact match.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ValidationOutcome::ExactMatch { .. } => None,
            ValidationOutcome::NoExactMatch { suggestions } if suggestions.is_empty() => {
                Some(MSG_NO_MATCH)
            }
            ValidationOutcome::NoExactMatch { .. } => Some(MSG_SIMILAR_RESULTS),
        }
    }
}
