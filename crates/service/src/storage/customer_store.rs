use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::customer::{Customer, CustomerId, CustomerInput};
use crate::errors::ServiceError;
use crate::storage::customers::Customers;

/// Shared handle over one [`Customers`] collection.
///
/// Create, replace and delete hold the write lock for the whole
/// scan-and-mutate sequence. List and get share the read lock, so they never
/// see a half-applied swap-remove.
#[derive(Clone)]
pub struct CustomerStore<K> {
    inner: Arc<RwLock<Customers<K>>>,
}

impl<K: CustomerId> CustomerStore<K> {
    pub fn new(customers: Customers<K>) -> Arc<Self> {
        info!(scheme = K::SCHEME, count = customers.len(), "customer store initialized");
        Arc::new(Self { inner: Arc::new(RwLock::new(customers)) })
    }

    /// Store holding the sample records.
    pub fn seeded() -> Arc<Self> {
        Self::new(Customers::seeded())
    }

    pub fn empty() -> Arc<Self> {
        Self::new(Customers::new())
    }

    pub async fn list(&self) -> Vec<Customer<K>> {
        let customers = self.inner.read().await;
        customers.list().to_vec()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn get(&self, id: &K) -> Result<Customer<K>, ServiceError> {
        let customers = self.inner.read().await;
        customers.get(id).cloned()
    }

    pub async fn create(&self, input: CustomerInput<K>) -> Result<Customer<K>, ServiceError> {
        let mut customers = self.inner.write().await;
        match customers.create(input) {
            Ok(created) => {
                info!(id = %created.id, count = customers.len(), "customer created");
                Ok(created)
            }
            Err(e) => {
                warn!(error = %e, "customer create rejected");
                Err(e)
            }
        }
    }

    /// Overwrite a record in place; returns the whole collection afterwards.
    pub async fn replace(&self, id: &K, input: CustomerInput<K>) -> Result<Vec<Customer<K>>, ServiceError> {
        let mut customers = self.inner.write().await;
        let all = customers.replace(id, input).map_err(|e| {
            debug!(%id, "replace target missing");
            e
        })?;
        info!(%id, "customer replaced");
        Ok(all.to_vec())
    }

    /// Swap-remove a record; returns the remaining collection.
    pub async fn delete(&self, id: &K) -> Result<Vec<Customer<K>>, ServiceError> {
        let mut customers = self.inner.write().await;
        let left = customers.delete(id).map_err(|e| {
            debug!(%id, "delete target missing");
            e
        })?;
        info!(%id, count = left.len(), "customer deleted");
        Ok(left.to_vec())
    }
}
