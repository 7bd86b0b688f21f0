//! In-memory customer storage.
//!
//! `customers` is the plain collection with the CRUD rules; `customer_store`
//! wraps it in a lock so one instance can be shared by request handlers.

pub mod customer_store;
pub mod customers;
