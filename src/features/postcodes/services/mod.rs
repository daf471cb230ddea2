pub mod matcher;
mod postcode_service;

pub use postcode_service::PostcodeService;
