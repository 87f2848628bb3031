//! Shared application state for all routes.

use crate::store::CarStore;

#[derive(Clone)]
pub struct AppState {
    pub store: CarStore,
}

impl AppState {
    pub fn new(store: CarStore) -> Self {
        Self { store }
    }
}
