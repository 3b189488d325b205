use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{ApiMessage, ApiResponse, IdPath, ValidatedJson, ValidatedQuery};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{
    ActorPayload, CreateProduct, LiveProduct, Product, ProductFilter, ProductStatus, UpdateProduct,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

const TAG: &str = "products";

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        list_live_products,
        get_product,
        create_product,
        update_product,
        delete_product,
        restore_product,
    ),
    components(schemas(
        Product,
        LiveProduct,
        CreateProduct,
        UpdateProduct,
        ActorPayload,
        ProductStatus,
        ApiMessage
    )),
    tags(
        (name = TAG, description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the product router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/live", get(list_live_products))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/{id}/restore", post(restore_product))
        .with_state(shared_service)
}

/// List products with optional filters
///
/// `live=true` overrides the other parameters and restricts the listing to
/// published, non-deleted rows; the response still carries full rows. The
/// three-column public projection lives at `/live`.
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ProductFilter),
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<Product>>),
        (status = 400, description = "Malformed query parameters"),
        (status = 500, description = "Database error")
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedQuery(filter): ValidatedQuery<ProductFilter>,
) -> ProductResult<Json<ApiResponse<Vec<Product>>>> {
    let products = service.list_products(filter).await?;
    Ok(Json(ApiResponse::list(products)))
}

/// List the public live view (published, non-deleted products)
#[utoipa::path(
    get,
    path = "/live",
    tag = TAG,
    responses(
        (status = 200, description = "Published products", body = ApiResponse<Vec<LiveProduct>>),
        (status = 500, description = "Database error")
    )
)]
async fn list_live_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<ApiResponse<Vec<LiveProduct>>>> {
    let products = service.list_live_products().await?;
    Ok(Json(ApiResponse::list(products)))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<Product>),
        (status = 404, description = "Product not found or soft-deleted"),
        (status = 500, description = "Database error")
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<ApiResponse<Product>>> {
    let product = service.get_product(id).await?;
    Ok(Json(ApiResponse::data(product)))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = ApiResponse<Product>),
        (status = 400, description = "Missing product_name or created_by"),
        (status = 500, description = "Database error")
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            product,
            "Product created successfully",
        )),
    ))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = ApiResponse<Product>),
        (status = 400, description = "Missing updated_by"),
        (status = 404, description = "Product not found or soft-deleted"),
        (status = 500, description = "Database error")
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<Json<ApiResponse<Product>>> {
    let product = service.update_product(id, input).await?;
    Ok(Json(ApiResponse::with_message(
        product,
        "Product updated successfully",
    )))
}

/// Soft-delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = ActorPayload,
    responses(
        (status = 200, description = "Product deleted successfully", body = ApiMessage),
        (status = 400, description = "Missing updated_by"),
        (status = 404, description = "Product not found or already deleted"),
        (status = 500, description = "Database error")
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<ActorPayload>,
) -> ProductResult<Json<ApiMessage>> {
    service.delete_product(id, input.updated_by).await?;
    Ok(Json(ApiMessage::success("Product deleted successfully")))
}

/// Restore a soft-deleted product
#[utoipa::path(
    post,
    path = "/{id}/restore",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = ActorPayload,
    responses(
        (status = 200, description = "Product restored successfully", body = ApiMessage),
        (status = 400, description = "Missing updated_by"),
        (status = 404, description = "Product does not exist"),
        (status = 500, description = "Database error")
    )
)]
async fn restore_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<ActorPayload>,
) -> ProductResult<Json<ApiMessage>> {
    service.restore_product(id, input.updated_by).await?;
    Ok(Json(ApiMessage::success("Product restored successfully")))
}
