use std::sync::Arc;

use service::{CustomerId, CustomerRepository};

/// Router state: the one customer store of this process.
pub struct AppState<K> {
    pub customers: Arc<dyn CustomerRepository<K>>,
}

impl<K: CustomerId> AppState<K> {
    pub fn new<R>(customers: Arc<R>) -> Self
    where
        R: CustomerRepository<K> + 'static,
    {
        Self { customers }
    }
}

impl<K> Clone for AppState<K> {
    fn clone(&self) -> Self {
        Self { customers: Arc::clone(&self.customers) }
    }
}
