//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Events API",
        version = "0.1.0",
        description = "MongoDB-based REST API for managing calendar events",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8083", description = "Local development server")
    ),
    nest(
        (path = {""}, api = domain_events::ApiDoc)
    ),
    tags(
        (name = "Events", description = "Calendar event endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;
