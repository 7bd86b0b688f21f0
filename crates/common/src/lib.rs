//! Shared helpers for the customer service crates.
//!
//! Logging bootstrap, startup environment checks and the small response
//! types every HTTP surface agrees on.

pub mod env;
pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn message_body_serializes_message_field() {
        let body = types::MessageBody::new("Customer not found");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"message": "Customer not found"}));
    }
}
