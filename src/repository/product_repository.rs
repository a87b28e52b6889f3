use std::time::Duration;

use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

use super::with_deadline;
use crate::{
    db::DbConn,
    dto::products::CreateProductRequest,
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    error::{AppError, AppResult},
    models::Product,
};

/// Sole writer of the `products` table.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    orm: DbConn,
    deadline: Duration,
}

impl ProductRepository {
    pub fn new(orm: DbConn, deadline: Duration) -> Self {
        Self { orm, deadline }
    }

    pub async fn list(&self) -> AppResult<Vec<Product>> {
        with_deadline(self.deadline, "list products", async {
            let products = Products::find()
                .order_by_asc(Column::Id)
                .all(&self.orm)
                .await?
                .into_iter()
                .map(product_from_entity)
                .collect();
            Ok(products)
        })
        .await
    }

    pub async fn get(&self, id: i64) -> AppResult<Product> {
        with_deadline(self.deadline, "get product", async {
            let product = Products::find_by_id(id).one(&self.orm).await?;
            match product {
                Some(p) => Ok(product_from_entity(p)),
                None => Err(AppError::not_found("product", id)),
            }
        })
        .await
    }

    /// Inserts a product after validating the request; the store assigns the id.
    pub async fn create(&self, payload: CreateProductRequest) -> AppResult<Product> {
        let new = payload.validate()?;
        with_deadline(self.deadline, "create product", async move {
            let active = ActiveModel {
                id: NotSet,
                product_code: Set(new.product_code),
                name: Set(new.name),
                inventory: Set(new.inventory),
                price: Set(new.price),
                status: Set(new.status),
            };
            let product = active.insert(&self.orm).await?;
            tracing::info!(product_id = product.id, "product created");
            Ok(product_from_entity(product))
        })
        .await
    }
}

fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        product_code: model.product_code,
        name: model.name,
        inventory: model.inventory,
        price: model.price,
        status: model.status,
    }
}
