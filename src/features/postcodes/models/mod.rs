mod postal_record;
mod validation_outcome;

pub use postal_record::PostalRecord;
pub use validation_outcome::{Suggestion, ValidationOutcome};
