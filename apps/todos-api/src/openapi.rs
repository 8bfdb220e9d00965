//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the todos API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todos API",
        version = "0.1.0",
        description = "MongoDB-based REST API for a single-user daily todo list",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    nest(
        (path = "/todos", api = domain_todos::ApiDoc)
    ),
    tags(
        (name = "Todos", description = "Daily todo endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;
