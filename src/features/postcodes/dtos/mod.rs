mod postcode_dto;

pub use postcode_dto::*;
