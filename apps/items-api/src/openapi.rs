//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Top-level document; the items paths are nested in at runtime by
/// [`document`] because their prefix is configurable.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Items API",
        version = "0.1.0",
        description = "Reactive-style CRUD API for items stored in MongoDB",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Items", description = "Item CRUD endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// The full document with the items API mounted at `base_path`
pub fn document(base_path: &str) -> utoipa::openapi::OpenApi {
    ApiDoc::openapi().nest(base_path, domain_items::ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_paths_follow_base_path() {
        let doc = document("/v1/items");

        assert!(doc.paths.paths.contains_key("/v1/items"));
        assert!(doc.paths.paths.contains_key("/v1/items/{id}"));
    }
}
