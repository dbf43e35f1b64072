//! Identifier newtypes.
//!
//! The upstream data source hands out numeric identifiers; these wrappers keep
//! hospital, tag, and product identifiers from being mixed up at compile time.
//! All of them serialise transparently as plain integers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier of a hospital.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct HospitalId(pub i64);

/// Unique identifier of a tag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct TagId(pub i64);

/// Unique identifier of a product.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl std::fmt::Display for HospitalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for TagId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for HospitalId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<i64> for TagId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
