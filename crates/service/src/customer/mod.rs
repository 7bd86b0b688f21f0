//! Customer record model.

pub mod id;
pub mod model;
pub mod seed;

pub use id::CustomerId;
pub use model::{Customer, CustomerInput};
