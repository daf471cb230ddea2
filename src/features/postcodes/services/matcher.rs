//! Matching rules over a loaded dataset.
//!
//! Comparisons fold case with Unicode lowercasing and nothing else: no
//! whitespace, diacritic or punctuation normalization.

use crate::features::postcodes::models::{PostalRecord, Suggestion, ValidationOutcome};

/// Records whose suburb contains `query`, ignoring case, in dataset order.
pub fn autocomplete(records: Vec<PostalRecord>, query: &str) -> Vec<PostalRecord> {
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| record.suburb.to_lowercase().contains(&needle))
        .collect()
}

/// Exact match on both fields first; otherwise every record resembling
/// the suburb OR the area.
pub fn validate(mut records: Vec<PostalRecord>, suburb: &str, area: &str) -> ValidationOutcome {
    let suburb = suburb.to_lowercase();
    let area = area.to_lowercase();

    let exact = records.iter().position(|record| {
        record.suburb.to_lowercase() == suburb && record.area.to_lowercase() == area
    });

    if let Some(index) = exact {
        // first in dataset order wins when duplicates exist
        return ValidationOutcome::ExactMatch {
            details: records.swap_remove(index),
        };
    }

    let suggestions = records
        .into_iter()
        .filter(|record| {
            record.suburb.to_lowercase().contains(&suburb)
                || record.area.to_lowercase().contains(&area)
        })
        .map(Suggestion::from)
        .collect();

    ValidationOutcome::NoExactMatch { suggestions }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(suburb: &str, area: &str, street_code: i64, box_code: &str) -> PostalRecord {
        PostalRecord {
            suburb: suburb.to_string(),
            area: area.to_string(),
            street_code,
            box_code: box_code.to_string(),
        }
    }

    fn suggestion(suburb: &str, area: &str) -> Suggestion {
        Suggestion {
            suburb: suburb.to_string(),
            area: area.to_string(),
        }
    }

    fn gates() -> Vec<PostalRecord> {
        vec![
            record("Northgate", "North", 101, "A1"),
            record("Southgate", "South", 202, "B2"),
        ]
    }

    #[test]
    fn test_autocomplete_matches_case_insensitively() {
        let expected = vec![record("Northgate", "North", 101, "A1")];
        assert_eq!(autocomplete(gates(), "north"), expected);
        assert_eq!(autocomplete(gates(), "NORTH"), expected);
        assert_eq!(autocomplete(gates(), "NoRtH"), expected);
    }

    #[test]
    fn test_autocomplete_matches_mid_string_in_order() {
        let results = autocomplete(gates(), "gate");
        assert_eq!(results, gates());
    }

    #[test]
    fn test_autocomplete_only_looks_at_suburb() {
        let records = vec![record("Hillcrest", "Northern Hills", 7, "Z9")];
        assert!(autocomplete(records, "north").is_empty());
    }

    #[test]
    fn test_autocomplete_keeps_duplicates() {
        let records = vec![
            record("Northgate", "North", 101, "A1"),
            record("Southgate", "South", 202, "B2"),
            record("Northgate", "North", 101, "A1"),
        ];
        let results = autocomplete(records, "northgate");
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_autocomplete_no_match_is_empty() {
        assert!(autocomplete(gates(), "zzz").is_empty());
        assert!(autocomplete(Vec::new(), "north").is_empty());
    }

    #[test]
    fn test_autocomplete_folds_non_ascii_case() {
        let records = vec![record("Ängelholm", "Skåne", 26231, "S1")];
        assert_eq!(autocomplete(records, "äNGEL").len(), 1);
    }

    #[test]
    fn test_validate_exact_match() {
        let outcome = validate(gates(), "Northgate", "North");
        assert_eq!(
            outcome,
            ValidationOutcome::ExactMatch {
                details: record("Northgate", "North", 101, "A1"),
            }
        );
    }

    #[test]
    fn test_validate_exact_match_ignores_case() {
        let outcome = validate(gates(), "SOUTHGATE", "south");
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_validate_exact_match_prefers_first_duplicate() {
        let records = vec![
            record("Southgate", "South", 202, "B2"),
            record("Northgate", "North", 101, "A1"),
            record("northgate", "NORTH", 999, "Z9"),
        ];
        let outcome = validate(records, "Northgate", "North");
        assert_eq!(
            outcome,
            ValidationOutcome::ExactMatch {
                details: record("Northgate", "North", 101, "A1"),
            }
        );
    }

    #[test]
    fn test_validate_exact_match_requires_full_equality() {
        let outcome = validate(gates(), "Northgat", "North");
        assert!(!outcome.is_valid());
    }

    #[test]
    fn test_validate_suggestions_use_or_semantics() {
        let outcome = validate(gates(), "gate", "xyz");
        assert_eq!(
            outcome,
            ValidationOutcome::NoExactMatch {
                suggestions: vec![
                    suggestion("Northgate", "North"),
                    suggestion("Southgate", "South"),
                ],
            }
        );
        assert_eq!(
            outcome.message(),
            Some("No exact match, but here are similar results.")
        );
    }

    #[test]
    fn test_validate_suggestions_match_area_alone() {
        let outcome = validate(gates(), "Westville", "Sou");
        assert_eq!(
            outcome,
            ValidationOutcome::NoExactMatch {
                suggestions: vec![suggestion("Southgate", "South")],
            }
        );
    }

    #[test]
    fn test_validate_no_suggestions() {
        let outcome = validate(gates(), "zzz", "zzz");
        assert_eq!(
            outcome,
            ValidationOutcome::NoExactMatch {
                suggestions: vec![]
            }
        );
        assert_eq!(outcome.message(), Some("No exact match found."));
    }

    #[test]
    fn test_validate_does_not_trim_whitespace() {
        let outcome = validate(gates(), " Northgate", "North");
        assert!(!outcome.is_valid());
    }
}
