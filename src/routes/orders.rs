use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    routing::{get, post},
};

use crate::{
    dto::orders::{CreateOrderItemRequest, CreateOrderRequest},
    error::{AppResult, ErrorBody},
    models::{Order, OrderItem},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route("/order/{id}", get(get_order))
        .route("/orderItems", post(create_order_items))
}

#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders, without items", body = [Order]),
        (status = 500, description = "Store error", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    let orders = state.orders.list().await?;
    Ok(Json(orders))
}

#[utoipa::path(
    get,
    path = "/order/{id}",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Get order, without items", body = Order),
        (status = 400, description = "Malformed id; answered with 500 before validation errors got their own status", body = ErrorBody),
        (status = 404, description = "Order not found; answered with 500 before not-found got its own status", body = ErrorBody),
        (status = 500, description = "Store error", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Order>> {
    let Path(id) = id?;
    let order = state.orders.get(id).await?;
    Ok(Json(order))
}

#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order and all items committed", body = Order),
        (status = 400, description = "Missing or invalid field; answered with 500 before validation errors got their own status", body = ErrorBody),
        (status = 500, description = "Nothing was persisted", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> AppResult<Json<Order>> {
    let Json(payload) = payload?;
    let order = state.orders.create(payload).await?;
    Ok(Json(order))
}

#[utoipa::path(
    post,
    path = "/orderItems",
    request_body = Vec<CreateOrderItemRequest>,
    responses(
        (status = 200, description = "Inserted items", body = [OrderItem]),
        (status = 400, description = "Missing or invalid field; answered with 500 before validation errors got their own status", body = ErrorBody),
        (status = 500, description = "Insert failed; earlier items stay persisted", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn create_order_items(
    State(state): State<AppState>,
    payload: Result<Json<Vec<CreateOrderItemRequest>>, JsonRejection>,
) -> AppResult<Json<Vec<OrderItem>>> {
    let Json(items) = payload?;
    let items = state.orders.create_items(items).await?;
    Ok(Json(items))
}
