use std::time::Duration;

use crate::{
    db::DbConn,
    repository::{OrderRepository, ProductRepository},
};

/// Handler state. Both repositories share one store handle.
#[derive(Clone)]
pub struct AppState {
    pub orm: DbConn,
    pub products: ProductRepository,
    pub orders: OrderRepository,
}

impl AppState {
    pub fn new(orm: DbConn, deadline: Duration) -> Self {
        Self {
            products: ProductRepository::new(orm.clone(), deadline),
            orders: OrderRepository::new(orm.clone(), deadline),
            orm,
        }
    }
}
