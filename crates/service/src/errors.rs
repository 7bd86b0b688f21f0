use thiserror::Error;

/// Failures reported by the customer store. Neither is fatal; callers map
/// them onto their own surface (HTTP status and message body).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{} {} not found", entity, id))
    }

    pub fn conflict(entity: &str, id: impl std::fmt::Display) -> Self {
        Self::Conflict(format!("{} {} already exists", entity, id))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_entity_and_id() {
        let e = ServiceError::not_found("customer", 7);
        assert!(e.is_not_found());
        assert_eq!(e.to_string(), "not found: customer 7 not found");

        let e = ServiceError::conflict("customer", 2);
        assert!(e.is_conflict());
        assert_eq!(e.to_string(), "conflict: customer 2 already exists");
    }
}
