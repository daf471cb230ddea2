/// Message returned when validation fails but suggestions were found
pub const MSG_SIMILAR_RESULTS: &str = "No exact match, but here are similar results.";

/// Message returned when validation fails and nothing resembles the input
pub const MSG_NO_MATCH: &str = "No exact match found.";
