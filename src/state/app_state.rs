use std::sync::Arc;

use crate::store::LinkStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn LinkStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self { store }
    }
}
