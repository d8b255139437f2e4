use std::sync::Arc;

use crate::insert::InsertClient;

#[derive(Clone)]
pub struct AppState {
    pub inserts: Arc<InsertClient>,
}

impl AppState {
    pub fn new(inserts: InsertClient) -> Self {
        Self {
            inserts: Arc::new(inserts),
        }
    }
}
