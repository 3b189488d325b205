use utoipa::OpenApi;

/// Aggregated OpenAPI documentation for the whole service.
///
/// Domain docs are nested under their mount points; the shared `/api`
/// prefix added by `create_router` is expressed as the server URL.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product CMS API",
        description = "Product catalog with lifecycle status, soft delete and a public live view"
    ),
    servers((url = "/api")),
    paths(crate::api::health::health),
    components(schemas(crate::api::health::HealthResponse)),
    tags((name = "health", description = "Service health checks")),
    nest(
        (path = "/products", api = domain_products::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
