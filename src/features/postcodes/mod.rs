//! Postal code lookup feature.
//!
//! Suburb autocomplete and suburb/area validation over a flat postal code
//! dataset. The dataset is reloaded from its provider on every request.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/autocomplete?query=` | Records whose suburb contains the query |
//! | GET | `/validate?suburb=&area=` | Exact suburb/area match, or similar suggestions |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod sources;

pub use services::PostcodeService;
pub use sources::CsvDatasetProvider;
