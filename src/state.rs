use std::sync::Arc;
use crate::store::SaleStore;

#[derive(Clone)]
pub struct AppState {
    pub sales: Arc<dyn SaleStore>,
}
