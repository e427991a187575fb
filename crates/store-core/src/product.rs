//! # Product Types
//!
//! The product record served by the store API.
//! Field names match the JSON wire format.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A product in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Caller-supplied identifier (not required to be unique)
    pub id: String,

    /// Display name
    pub name: String,

    /// Units in stock
    pub quantity: i64,

    /// Barcode or internal code
    pub code_value: String,

    /// Whether the product is published
    pub is_published: bool,

    /// Expiration timestamp, RFC3339 on the wire with its original offset
    #[serde(with = "rfc3339")]
    pub expiration: DateTime<FixedOffset>,

    /// Unit price
    pub price: f64,
}

impl Product {
    /// Create a published product with the given price, expiring now
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity: 0,
            code_value: String::new(),
            is_published: true,
            expiration: Utc::now().fixed_offset(),
            price,
        }
    }

    /// Builder: set quantity
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Builder: set code value
    pub fn with_code_value(mut self, code_value: impl Into<String>) -> Self {
        self.code_value = code_value.into();
        self
    }

    /// Builder: set published flag
    pub fn with_published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }

    /// Builder: set expiration
    pub fn with_expiration<Tz: TimeZone>(mut self, expiration: DateTime<Tz>) -> Self {
        self.expiration = expiration.fixed_offset();
        self
    }

    /// Check if this product is priced strictly above `threshold`
    pub fn is_priced_above(&self, threshold: f64) -> bool {
        self.price > threshold
    }
}

/// RFC3339 with `Z` for a zero offset and any other offset kept as sent
mod rfc3339 {
    use chrono::{DateTime, FixedOffset, SecondsFormat};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &DateTime<FixedOffset>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<FixedOffset>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw).map_err(D::Error::custom)
    }
}
