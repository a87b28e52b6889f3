use std::collections::HashSet;

use serde::Deserialize;
use utoipa::ToSchema;

use super::{products::STATUS_MAX_CHARS, required, required_text};
use crate::error::{AppError, AppResult};

pub const CUSTOMER_NAME_MAX_CHARS: usize = 256;

/// Body of `POST /orders`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_name: Option<String>,
    pub total: Option<i64>,
    pub status: Option<String>,
    #[serde(default)]
    pub items: Vec<CreateOrderItemRequest>,
}

/// One line-item. Inside an order create `order_id` is ignored; the bulk
/// `POST /orderItems` path requires it.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateOrderItemRequest {
    pub order_id: Option<i64>,
    pub product_id: Option<i64>,
    pub quantity: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_name: String,
    pub total: i64,
    pub status: String,
    pub items: Vec<NewLineItem>,
}

/// A line-item of an order that does not exist yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewLineItem {
    pub product_id: i64,
    pub quantity: i32,
}

/// A line-item for an existing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewOrderItem {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
}

impl CreateOrderRequest {
    pub fn validate(self) -> AppResult<NewOrder> {
        let customer_name =
            required_text("customerName", self.customer_name, CUSTOMER_NAME_MAX_CHARS)?;
        let total = required("total", self.total)?;
        let status = required_text("status", self.status, STATUS_MAX_CHARS)?;

        let mut seen = HashSet::with_capacity(self.items.len());
        let mut items = Vec::with_capacity(self.items.len());
        for (index, item) in self.items.into_iter().enumerate() {
            let line = item.validate_line(index)?;
            if !seen.insert(line.product_id) {
                return Err(AppError::validation(format!(
                    "items[{index}]: product {} appears more than once",
                    line.product_id
                )));
            }
            items.push(line);
        }

        Ok(NewOrder {
            customer_name,
            total,
            status,
            items,
        })
    }
}

impl CreateOrderItemRequest {
    fn validate_line(self, index: usize) -> AppResult<NewLineItem> {
        let product_id = required(&format!("items[{index}].product_id"), self.product_id)?;
        let quantity = required(&format!("items[{index}].quantity"), self.quantity)?;
        if quantity <= 0 {
            return Err(AppError::validation(format!(
                "items[{index}].quantity must be positive"
            )));
        }
        Ok(NewLineItem {
            product_id,
            quantity,
        })
    }

    fn validate_standalone(self, index: usize) -> AppResult<NewOrderItem> {
        let order_id = required(&format!("[{index}].order_id"), self.order_id)?;
        let product_id = required(&format!("[{index}].product_id"), self.product_id)?;
        let quantity = required(&format!("[{index}].quantity"), self.quantity)?;
        if quantity <= 0 {
            return Err(AppError::validation(format!(
                "[{index}].quantity must be positive"
            )));
        }
        Ok(NewOrderItem {
            order_id,
            product_id,
            quantity,
        })
    }
}

/// Validates a whole `POST /orderItems` batch before anything is written.
pub fn validate_items(items: Vec<CreateOrderItemRequest>) -> AppResult<Vec<NewOrderItem>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| item.validate_standalone(index))
        .collect()
}
