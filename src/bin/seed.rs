use catalog_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
};
use sqlx::SqlitePool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let inserted = seed_products(orm.get_sqlite_connection_pool()).await?;
    println!("Seed completed. Inserted {inserted} products");
    Ok(())
}

async fn seed_products(pool: &SqlitePool) -> anyhow::Result<usize> {
    let (existing,): (i64,) = sqlx::query_as("SELECT count(*) FROM products")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        println!("products table already has {existing} rows, skipping");
        return Ok(0);
    }

    let products = vec![
        ("HOOD-01", "Axum Hoodie", 50, 5500, "active"),
        ("MUG-01", "Ferris Mug", 100, 1200, "active"),
        ("STK-PACK", "Rust Sticker Pack", 200, 500, "active"),
        ("EBOOK-ASYNC", "E-book: Async Rust", 0, 2500, "discontinued"),
    ];

    let mut tx = pool.begin().await?;
    for (code, name, inventory, price, status) in products.iter().copied() {
        sqlx::query(
            r#"
            INSERT INTO products (product_code, name, inventory, price, status)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(code)
        .bind(name)
        .bind(inventory)
        .bind(price)
        .bind(status)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    Ok(products.len())
}
