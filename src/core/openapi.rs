use utoipa::{Modify, OpenApi};

use crate::features::postcodes::{dtos as postcodes_dtos, handlers as postcodes_handlers};
use crate::shared::types::ApiErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        postcodes_handlers::autocomplete,
        postcodes_handlers::validate,
    ),
    components(
        schemas(
            ApiErrorResponse,
            postcodes_dtos::PostalRecordDto,
            postcodes_dtos::SuggestionDto,
            postcodes_dtos::AutocompleteResponseDto,
            postcodes_dtos::ValidateResponseDto,
        )
    ),
    tags(
        (name = "postcodes", description = "Suburb autocomplete and suburb/area validation"),
    ),
    info(
        title = "Address Lookup & Validation API",
        version = "0.1.0",
        description = "Suburb autocomplete and suburb/area validation over a postal code dataset",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
