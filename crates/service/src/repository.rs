use async_trait::async_trait;

use crate::customer::{Customer, CustomerId, CustomerInput};
use crate::errors::ServiceError;
use crate::storage::customer_store::CustomerStore;

/// Trait abstraction for customer storage, consumed by the HTTP layer.
/// The in-memory [`CustomerStore`] is the only implementation today.
#[async_trait]
pub trait CustomerRepository<K: CustomerId>: Send + Sync {
    async fn list(&self) -> Vec<Customer<K>>;
    async fn len(&self) -> usize;
    async fn get(&self, id: &K) -> Result<Customer<K>, ServiceError>;
    async fn create(&self, input: CustomerInput<K>) -> Result<Customer<K>, ServiceError>;
    async fn replace(&self, id: &K, input: CustomerInput<K>) -> Result<Vec<Customer<K>>, ServiceError>;
    async fn delete(&self, id: &K) -> Result<Vec<Customer<K>>, ServiceError>;
}

#[async_trait]
impl<K: CustomerId> CustomerRepository<K> for CustomerStore<K> {
    async fn list(&self) -> Vec<Customer<K>> { self.list().await }
    async fn len(&self) -> usize { self.len().await }
    async fn get(&self, id: &K) -> Result<Customer<K>, ServiceError> { self.get(id).await }
    async fn create(&self, input: CustomerInput<K>) -> Result<Customer<K>, ServiceError> { self.create(input).await }
    async fn replace(&self, id: &K, input: CustomerInput<K>) -> Result<Vec<Customer<K>>, ServiceError> { self.replace(id, input).await }
    async fn delete(&self, id: &K) -> Result<Vec<Customer<K>>, ServiceError> { self.delete(id).await }
}
