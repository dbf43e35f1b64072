//! Hospital domain model.
//!
//! These are the carrier types the rest of the system filters and renders.
//! The serde shape matches the upstream API wire format (camelCase keys),
//! so the same structs serve as fixture format, REST payload, and in-memory
//! model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stockboard_types::{HospitalId, NonEmptyText, ProductId, TagId};
use utoipa::ToSchema;

use crate::tag::Tag;

/// A hospital with its associated tags and stock records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    /// Unique identifier of this hospital.
    pub id: HospitalId,

    /// Display name.
    #[schema(value_type = String)]
    pub name: NonEmptyText,

    /// Free-text description shown on the card.
    #[serde(default)]
    pub description: String,

    /// Whether the viewer may navigate to this hospital's detail view.
    #[serde(default)]
    pub can_manage: bool,

    /// Tags attached to this hospital, in source order.
    #[serde(default)]
    pub tags: Vec<Tag>,

    /// Stock records for this hospital, in source order.
    #[serde(default)]
    pub inventory: Vec<InventoryLine>,
}

impl Hospital {
    /// True when every identifier in `tag_ids` appears among this hospital's tags.
    pub fn has_all_tags<'a>(&self, tag_ids: impl IntoIterator<Item = &'a TagId>) -> bool {
        tag_ids
            .into_iter()
            .all(|wanted| self.tags.iter().any(|t| t.id == *wanted))
    }

    /// The identifiers of this hospital's tags, in source order.
    pub fn tag_ids(&self) -> impl Iterator<Item = TagId> + '_ {
        self.tags.iter().map(|t| t.id)
    }
}

/// The product a stock record refers to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRef {
    /// Unique identifier of the product.
    pub id: ProductId,
    /// Product name (rendered upper-cased on cards).
    pub name: String,
}

/// A hospital-specific stock record: a product plus the join attributes of
/// the hospital/product relation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryLine {
    /// The product this line refers to.
    pub product: ProductRef,
    /// Units currently in stock at this hospital.
    pub quantity: i64,
    /// When this stock record was last updated.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(id: i64, description: &str) -> Tag {
        Tag {
            id: TagId(id),
            description: description.to_string(),
        }
    }

    fn hospital_with_tags(ids: &[i64]) -> Hospital {
        Hospital {
            id: HospitalId(1),
            name: NonEmptyText::new("General").expect("valid name"),
            description: String::new(),
            can_manage: false,
            tags: ids.iter().map(|&i| tag(i, "t")).collect(),
            inventory: vec![],
        }
    }

    #[test]
    fn has_all_tags_requires_every_id() {
        let hospital = hospital_with_tags(&[1, 2]);
        assert!(hospital.has_all_tags(&[TagId(1)]));
        assert!(hospital.has_all_tags(&[TagId(1), TagId(2)]));
        assert!(!hospital.has_all_tags(&[TagId(1), TagId(3)]));
    }

    #[test]
    fn has_all_tags_with_empty_wanted_set() {
        let hospital = hospital_with_tags(&[]);
        assert!(hospital.has_all_tags(&[]));
    }

    #[test]
    fn deserialises_camel_case_wire_shape() {
        let json = r#"{
            "id": 3,
            "name": "Riverside Clinic",
            "description": "Community clinic",
            "canManage": true,
            "tags": [{ "id": 2, "description": "urgent" }],
            "inventory": [
                {
                    "product": { "id": 9, "name": "gloves" },
                    "quantity": 120,
                    "updatedAt": "2026-01-23T13:58:04Z"
                }
            ]
        }"#;

        let hospital: Hospital = serde_json::from_str(json).expect("parse hospital");
        assert_eq!(hospital.id, HospitalId(3));
        assert!(hospital.can_manage);
        assert_eq!(hospital.tags.len(), 1);
        assert_eq!(hospital.inventory[0].product.name, "gloves");
        assert_eq!(hospital.inventory[0].quantity, 120);
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{ "id": 4, "name": "Hilltop" }"#;
        let hospital: Hospital = serde_json::from_str(json).expect("parse hospital");
        assert!(!hospital.can_manage);
        assert!(hospital.tags.is_empty());
        assert!(hospital.inventory.is_empty());
        assert!(hospital.description.is_empty());
    }
}
