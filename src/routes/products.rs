use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    routing::get,
};

use crate::{
    dto::products::CreateProductRequest,
    error::{AppResult, ErrorBody},
    models::Product,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/product/{id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products", body = [Product]),
        (status = 500, description = "Store error", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.products.list().await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/product/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = Product),
        (status = 400, description = "Malformed id; answered with 500 before validation errors got their own status", body = ErrorBody),
        (status = 404, description = "Product not found; answered with 500 before not-found got its own status", body = ErrorBody),
        (status = 500, description = "Store error", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Product>> {
    let Path(id) = id?;
    let product = state.products.get(id).await?;
    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Created product with its assigned id", body = Product),
        (status = 400, description = "Missing or invalid field; answered with 500 before validation errors got their own status", body = ErrorBody),
        (status = 500, description = "Store error", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> AppResult<Json<Product>> {
    let Json(payload) = payload?;
    let product = state.products.create(payload).await?;
    Ok(Json(product))
}
