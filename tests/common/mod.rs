#![allow(dead_code)]

use std::time::Duration;

use catalog_api::{
    db::{connect, run_migrations},
    dto::products::CreateProductRequest,
    entity::{OrderItems, Orders},
    models::Product,
    state::AppState,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use tempfile::TempDir;

/// Keeps the temporary database directory alive for the duration of a test.
pub struct TestStore {
    pub state: AppState,
    _dir: TempDir,
}

// Each test gets its own SQLite file so ids start at 1 and nothing leaks between tests.
pub async fn setup_store() -> anyhow::Result<TestStore> {
    let dir = tempfile::tempdir()?;
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("catalog.db").display());
    let orm = connect(&url, 4, Duration::from_secs(5)).await?;
    run_migrations(&orm).await?;
    Ok(TestStore {
        state: AppState::new(orm, Duration::from_secs(5)),
        _dir: dir,
    })
}

pub fn product_request(code: &str, name: &str) -> CreateProductRequest {
    CreateProductRequest {
        product_code: Some(code.into()),
        name: Some(name.into()),
        inventory: Some(5),
        price: Some(100),
        status: Some("active".into()),
    }
}

pub async fn seed_product(state: &AppState, code: &str) -> anyhow::Result<Product> {
    Ok(state.products.create(product_request(code, "Widget")).await?)
}

pub async fn order_rows(state: &AppState) -> anyhow::Result<u64> {
    Ok(Orders::find().count(&state.orm).await?)
}

pub async fn order_item_rows(state: &AppState) -> anyhow::Result<u64> {
    Ok(OrderItems::find().count(&state.orm).await?)
}
