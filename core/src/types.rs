//! Domain DTOs for the card catalog.
//!
//! # Design
//! Every card field is optional: the catalog omits or nulls whatever a given
//! printing lacks, and a missing field must never fail the decode. Unknown
//! wire fields are ignored. The types mirror the mock-server's schema but
//! are defined independently; integration tests catch drift.

use serde::{Deserialize, Serialize};

/// Query key used for card-name lookups.
pub const NAME_PARAM: &str = "name";

/// One `key=value` pair of the query string. Duplicates are allowed and kept
/// in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParameter {
    pub key: String,
    pub value: String,
}

impl QueryParameter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Shorthand for a `name=<value>` lookup.
    pub fn name(value: impl Into<String>) -> Self {
        Self::new(NAME_PARAM, value)
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(rename = "set", skip_serializing_if = "Option::is_none")]
    pub card_set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Body of `GET /v1/cards`. An absent or null `cards` means no matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub cards: Option<Vec<CardRecord>>,
}

impl CatalogResponse {
    /// The decoded records; empty when the catalog sent none.
    pub fn cards(&self) -> &[CardRecord] {
        self.cards.as_deref().unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }
}
