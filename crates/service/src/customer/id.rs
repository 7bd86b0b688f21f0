//! Identifier schemes.
//!
//! A store is built for one identifier type. `i64` is the client-assigned
//! sequential scheme, `Uuid` the server-minted one.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use super::model::Customer;

pub trait CustomerId:
    Clone + PartialEq + Debug + Display + FromStr + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Scheme name as written in configuration and logs.
    const SCHEME: &'static str;

    /// Identifier for a record about to be created, chosen before the
    /// uniqueness check. `requested` is the id carried by the payload.
    fn resolve(requested: Option<Self>, existing: &[Customer<Self>]) -> Self;

    /// Identifier of the `position`-th seed record.
    fn seed_id(position: usize) -> Self;

    /// Parse a path segment; anything unparseable matches no record.
    fn parse_param(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

impl CustomerId for i64 {
    const SCHEME: &'static str = "sequential";

    /// Client-supplied id wins; otherwise one past the current maximum.
    fn resolve(requested: Option<Self>, existing: &[Customer<Self>]) -> Self {
        requested.unwrap_or_else(|| {
            existing
                .iter()
                .map(|c| c.id)
                .max()
                .map_or(1, |max| max.saturating_add(1))
        })
    }

    fn seed_id(position: usize) -> Self {
        position as i64 + 1
    }
}

impl CustomerId for Uuid {
    const SCHEME: &'static str = "uuid";

    /// Always a fresh v4 id; the payload's id is ignored.
    fn resolve(_requested: Option<Self>, _existing: &[Customer<Self>]) -> Self {
        Uuid::new_v4()
    }

    fn seed_id(_position: usize) -> Self {
        Uuid::new_v4()
    }
}
