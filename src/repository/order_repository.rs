use std::time::Duration;

use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseTransaction, EntityTrait, QueryOrder, Set,
    TransactionTrait,
};

use super::with_deadline;
use crate::{
    db::DbConn,
    dto::orders::{CreateOrderItemRequest, CreateOrderRequest, NewOrder, validate_items},
    entity::{
        order_items::{ActiveModel as OrderItemActive, Model as OrderItemModel},
        orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel},
    },
    error::{AppError, AppResult},
    models::{Order, OrderItem},
};

/// Sole writer of the `orders` and `order_items` tables.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    orm: DbConn,
    deadline: Duration,
}

impl OrderRepository {
    pub fn new(orm: DbConn, deadline: Duration) -> Self {
        Self { orm, deadline }
    }

    /// Bare order rows; `items` is not loaded.
    pub async fn list(&self) -> AppResult<Vec<Order>> {
        with_deadline(self.deadline, "list orders", async {
            let orders = Orders::find()
                .order_by_asc(OrderCol::Id)
                .all(&self.orm)
                .await?
                .into_iter()
                .map(order_from_entity)
                .collect();
            Ok(orders)
        })
        .await
    }

    pub async fn get(&self, id: i64) -> AppResult<Order> {
        with_deadline(self.deadline, "get order", async {
            let order = Orders::find_by_id(id).one(&self.orm).await?;
            match order {
                Some(o) => Ok(order_from_entity(o)),
                None => Err(AppError::not_found("order", id)),
            }
        })
        .await
    }

    /// Creates the order row and all of its line-items in one transaction.
    ///
    /// Either every row commits or none does; the caller gets a single result.
    /// The returned order echoes the submitted items stamped with the new id.
    pub async fn create(&self, payload: CreateOrderRequest) -> AppResult<Order> {
        let new = payload.validate()?;
        with_deadline(self.deadline, "create order", self.create_atomically(new)).await
    }

    async fn create_atomically(&self, new: NewOrder) -> AppResult<Order> {
        let item_count = new.items.len();
        let txn = self.orm.begin().await?;

        let result = insert_order_rows(&txn, new).await;
        match result {
            Ok(order) => {
                txn.commit().await?;
                tracing::info!(order_id = order.id, items = item_count, "order created");
                Ok(order)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::warn!(error = %rollback_err, "order rollback failed");
                }
                tracing::debug!(error = %err, "order creation rolled back");
                Err(err)
            }
        }
    }

    /// Inserts line-items one statement at a time, without a shared transaction.
    ///
    /// The whole batch is validated first. Inserting stops at the first store
    /// failure; items written before it stay persisted.
    pub async fn create_items(
        &self,
        payload: Vec<CreateOrderItemRequest>,
    ) -> AppResult<Vec<OrderItem>> {
        let items = validate_items(payload)?;
        with_deadline(self.deadline, "create order items", async move {
            let mut inserted = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                let active = OrderItemActive {
                    order_id: Set(item.order_id),
                    product_id: Set(item.product_id),
                    quantity: Set(item.quantity),
                };
                match active.insert(&self.orm).await {
                    Ok(model) => inserted.push(order_item_from_entity(model)),
                    Err(err) => {
                        tracing::warn!(
                            index,
                            persisted = inserted.len(),
                            "order item insert failed, stopping batch"
                        );
                        return Err(err.into());
                    }
                }
            }
            Ok(inserted)
        })
        .await
    }
}

async fn insert_order_rows(txn: &DatabaseTransaction, new: NewOrder) -> AppResult<Order> {
    let order = OrderActive {
        id: NotSet,
        customer_name: Set(new.customer_name),
        total: Set(new.total),
        status: Set(new.status),
    }
    .insert(txn)
    .await?;

    let mut items = Vec::with_capacity(new.items.len());
    for line in new.items {
        let item = OrderItemActive {
            order_id: Set(order.id),
            product_id: Set(line.product_id),
            quantity: Set(line.quantity),
        }
        .insert(txn)
        .await?;
        items.push(order_item_from_entity(item));
    }

    let mut order = order_from_entity(order);
    order.items = Some(items);
    Ok(order)
}

fn order_from_entity(model: OrderModel) -> Order {
    Order {
        id: model.id,
        customer_name: model.customer_name,
        total: model.total,
        status: model.status,
        items: None,
    }
}

fn order_item_from_entity(model: OrderItemModel) -> OrderItem {
    OrderItem {
        order_id: model.order_id,
        product_id: model.product_id,
        quantity: model.quantity,
    }
}
