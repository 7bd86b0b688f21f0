//! Service layer owning the customer records.
//! - `customer` holds the record model, identifier schemes and seed data.
//! - `storage` holds the synchronous collection and the shared, lock-guarded handle.
//! - `repository` is the trait the HTTP layer talks to.

pub mod customer;
pub mod errors;
pub mod repository;
pub mod storage;

pub use customer::{Customer, CustomerId, CustomerInput};
pub use errors::ServiceError;
pub use repository::CustomerRepository;
pub use storage::{customer_store::CustomerStore, customers::Customers};
