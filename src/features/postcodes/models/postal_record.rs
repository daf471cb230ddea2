/// One postal code entry from the dataset.
///
/// The dataset declares no uniqueness on `(suburb, area)`; duplicates are kept
/// in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalRecord {
    pub suburb: String,
    pub area: String,
    pub street_code: i64,
    pub box_code: String,
}
