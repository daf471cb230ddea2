use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::postcodes::models::{PostalRecord, Suggestion, ValidationOutcome};

/// Query parameters for suburb autocomplete
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AutocompleteQuery {
    /// Partial suburb name (case-insensitive, matched anywhere in the suburb)
    #[validate(length(min = 2, message = "query must be at least 2 characters"))]
    #[param(example = "north", min_length = 2)]
    pub query: String,
}

/// Query parameters for suburb/area validation
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ValidateQuery {
    /// Suburb to validate
    #[validate(length(min = 2, message = "suburb must be at least 2 characters"))]
    #[param(example = "Northgate", min_length = 2)]
    pub suburb: String,

    /// Area the suburb is expected to belong to
    #[validate(length(min = 2, message = "area must be at least 2 characters"))]
    #[param(example = "North", min_length = 2)]
    pub area: String,
}

/// Full postal code entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct PostalRecordDto {
    pub suburb: String,
    pub area: String,
    pub street_code: i64,
    pub box_code: String,
}

impl From<PostalRecord> for PostalRecordDto {
    fn from(record: PostalRecord) -> Self {
        Self {
            suburb: record.suburb,
            area: record.area,
            street_code: record.street_code,
            box_code: record.box_code,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AutocompleteResponseDto {
    pub results: Vec<PostalRecordDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct SuggestionDto {
    pub suburb: String,
    pub area: String,
}

impl From<Suggestion> for SuggestionDto {
    fn from(suggestion: Suggestion) -> Self {
        Self {
            suburb: suggestion.suburb,
            area: suggestion.area,
        }
    }
}

/// Validation result; `details` on an exact match, otherwise `message` and `suggestions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ValidateResponseDto {
    ExactMatch {
        valid: bool,
        details: PostalRecordDto,
    },
    NoExactMatch {
        valid: bool,
        message: String,
        suggestions: Vec<SuggestionDto>,
    },
}

impl From<ValidationOutcome> for ValidateResponseDto {
    fn from(outcome: ValidationOutcome) -> Self {
        let valid = outcome.is_valid();
        let message = outcome.message().unwrap_or_default().to_string();
        match outcome {
            ValidationOutcome::ExactMatch { details } => Self::ExactMatch {
                valid,
                details: details.into(),
            },
            ValidationOutcome::NoExactMatch { suggestions } => Self::NoExactMatch {
                valid,
                message,
                suggestions: suggestions.into_iter().map(Into::into).collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn northgate() -> PostalRecord {
        PostalRecord {
            suburb: "Northgate".to_string(),
            area: "North".to_string(),
            street_code: 101,
            box_code: "A1".to_string(),
        }
    }

    #[test]
    fn test_exact_match_serialization() {
        let dto = ValidateResponseDto::from(ValidationOutcome::ExactMatch {
            details: northgate(),
        });

        assert_eq!(
            serde_json::to_value(dto).unwrap(),
            json!({
                "valid": true,
                "details": {"suburb": "Northgate", "area": "North", "street_code": 101, "box_code": "A1"}
            })
        );
    }

    #[test]
    fn test_no_match_serializes_empty_suggestions() {
        let dto = ValidateResponseDto::from(ValidationOutcome::NoExactMatch {
            suggestions: vec![],
        });

        assert_eq!(
            serde_json::to_value(dto).unwrap(),
            json!({"valid": false, "message": "No exact match found.", "suggestions": []})
        );
    }

    #[test]
    fn test_query_length_validation() {
        assert!(AutocompleteQuery {
            query: "no".to_string()
        }
        .validate()
        .is_ok());
        assert!(AutocompleteQuery {
            query: "n".to_string()
        }
        .validate()
        .is_err());

        let errors = ValidateQuery {
            suburb: "N".to_string(),
            area: "N".to_string(),
        }
        .validate()
        .unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("suburb"));
        assert!(fields.contains_key("area"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        assert!(AutocompleteQuery {
            query: "Å".to_string()
        }
        .validate()
        .is_err());
    }
}
