//! Flavor records and the payload used to create or replace them.
//!
//! On the wire a record's name travels as `flavor`:
//!
//! ```json
//! { "id": 1, "flavor": "chocolate", "price": 2.5, "tags": ["classic"] }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::StoreError;

/// A stored flavor.
///
/// Numeric fields keep the client's representation: `7` stays `7`, `7.0` stays `7.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlavorRecord {
    /// Assigned at creation, never reused or changed.
    pub id: u64,
    #[serde(rename = "flavor")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<Number>,
}

impl FlavorRecord {
    pub(crate) fn from_input(id: u64, name: String, input: FlavorInput) -> Self {
        Self {
            id,
            name,
            description: input.description,
            price: input.price,
            tags: input.tags,
            popularity: input.popularity,
        }
    }

    /// Overwrite every mutable field. Optional fields absent from `input` are cleared.
    pub(crate) fn replace(&mut self, name: String, input: FlavorInput) {
        self.name = name;
        self.description = input.description;
        self.price = input.price;
        self.tags = input.tags;
        self.popularity = input.popularity;
    }
}

/// Create/update payload. `flavor` is required by the store but optional here
/// so a missing name is reported as a validation failure, not a decode error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FlavorInput {
    #[serde(default)]
    pub flavor: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Number>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub popularity: Option<Number>,
}

impl FlavorInput {
    /// Payload carrying only a name.
    pub fn named(flavor: impl Into<String>) -> Self {
        Self {
            flavor: Some(flavor.into()),
            ..Self::default()
        }
    }

    /// Decode an untyped JSON body. Wrong field types are validation errors.
    pub fn from_json(body: Value) -> Result<Self, StoreError> {
        Ok(serde_json::from_value(body)?)
    }
}
