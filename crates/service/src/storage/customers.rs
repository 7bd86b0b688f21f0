use crate::customer::{seed::sample_customers, Customer, CustomerId, CustomerInput};
use crate::errors::ServiceError;

const ENTITY: &str = "customer";

/// Owned, synchronous customer collection.
///
/// Records live in a `Vec` in insertion order; lookups are a linear scan
/// where the first match wins. Identifiers are unique at all times.
/// Deletion swap-removes, so the last record takes the freed slot and list
/// order after a delete is not stable.
#[derive(Clone, Debug)]
pub struct Customers<K> {
    records: Vec<Customer<K>>,
}

impl<K> Default for Customers<K> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<K: CustomerId> Customers<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection holding the sample records.
    pub fn seeded() -> Self {
        Self { records: sample_customers() }
    }

    /// Build from existing records, rejecting duplicate identifiers.
    pub fn from_records(records: Vec<Customer<K>>) -> Result<Self, ServiceError> {
        let mut out = Self::new();
        for record in records {
            if out.contains(&record.id) {
                return Err(ServiceError::conflict(ENTITY, &record.id));
            }
            out.records.push(record);
        }
        Ok(out)
    }

    /// All records in storage order.
    pub fn list(&self) -> &[Customer<K>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: &K) -> Option<usize> {
        self.records.iter().position(|c| &c.id == id)
    }

    pub fn contains(&self, id: &K) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &K) -> Result<&Customer<K>, ServiceError> {
        self.records
            .iter()
            .find(|c| &c.id == id)
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    /// Append a record. The identifier is resolved by the scheme first, then
    /// checked for uniqueness; on conflict nothing changes.
    pub fn create(&mut self, input: CustomerInput<K>) -> Result<Customer<K>, ServiceError> {
        let requested = input.id.clone();
        let id = K::resolve(requested, &self.records);
        if self.contains(&id) {
            return Err(ServiceError::conflict(ENTITY, &id));
        }
        let record = input.into_customer(id);
        self.records.push(record.clone());
        Ok(record)
    }

    /// Overwrite every field of the matching record except its identifier.
    pub fn replace(&mut self, id: &K, input: CustomerInput<K>) -> Result<&[Customer<K>], ServiceError> {
        let index = self.position(id).ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        self.records[index].overwrite_with(input);
        Ok(self.records.as_slice())
    }

    /// Remove the matching record and return what is left.
    pub fn delete(&mut self, id: &K) -> Result<&[Customer<K>], ServiceError> {
        let index = self.position(id).ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        self.swap_remove_at(index)
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        Ok(self.records.as_slice())
    }

    /// Move the last record into `index` and shrink by one.
    ///
    /// An out-of-range index is a caller bug, not a user error: it yields
    /// `None` and leaves the collection untouched.
    pub fn swap_remove_at(&mut self, index: usize) -> Option<Customer<K>> {
        if index >= self.records.len() {
            return None;
        }
        Some(self.records.swap_remove(index))
    }
}
