pub mod postcode_handler;

pub use postcode_handler::*;
