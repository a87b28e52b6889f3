mod common;

use catalog_api::{dto::products::CreateProductRequest, error::ErrorKind};
use common::{product_request, setup_store};

#[tokio::test]
async fn create_then_get_returns_the_same_product() -> anyhow::Result<()> {
    let store = setup_store().await?;
    let products = &store.state.products;

    let created = products.create(product_request("ABC1", "Widget")).await?;
    assert_eq!(created.id, 1);

    let fetched = products.get(created.id).await?;
    assert_eq!(fetched, created);
    assert_eq!(fetched.product_code, "ABC1");
    assert_eq!(fetched.name, "Widget");
    assert_eq!(fetched.inventory, 5);
    assert_eq!(fetched.price, 100);
    assert_eq!(fetched.status, "active");
    Ok(())
}

#[tokio::test]
async fn list_is_empty_then_returns_rows_in_id_order() -> anyhow::Result<()> {
    let store = setup_store().await?;
    let products = &store.state.products;

    assert!(products.list().await?.is_empty());

    products.create(product_request("A-1", "First")).await?;
    products.create(product_request("B-2", "Second")).await?;

    let listed = products.list().await?;
    let ids: Vec<i64> = listed.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(listed[1].name, "Second");
    Ok(())
}

#[tokio::test]
async fn get_missing_product_is_not_found() -> anyhow::Result<()> {
    let store = setup_store().await?;
    let err = store.state.products.get(999).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("no rows"));
    Ok(())
}

#[tokio::test]
async fn invalid_product_never_reaches_the_store() -> anyhow::Result<()> {
    let store = setup_store().await?;
    let products = &store.state.products;

    let err = products
        .create(CreateProductRequest {
            status: None,
            ..product_request("ABC1", "Widget")
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(products.list().await?.is_empty());
    Ok(())
}
