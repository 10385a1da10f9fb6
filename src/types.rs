use serde::{Deserialize, Serialize};

/// One tokenized (AI, value) pair, in scan order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedElement {
    pub ai: String,
    pub value: String,
}

impl DecodedElement {
    pub fn new(ai: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            ai: ai.into(),
            value: value.into(),
        }
    }
}

/// Structured result of decoding one scanned label
///
/// A pure value created by a single parse call; it has no identity beyond
/// the caller's ownership and is never mutated after construction. Field
/// names are serialized in camelCase for the inventory-entry forms that
/// consume the JSON shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedRecord {
    /// Product identifier, AI 01
    pub gtin: Option<String>,
    /// Batch or lot number, AI 10
    pub batch_number: Option<String>,
    /// Serial number, AI 21
    pub serial_number: Option<String>,
    /// Serial Shipping Container Code, AI 00
    pub sscc: Option<String>,
    /// Expiry date (AI 17): ISO `YYYY-MM-DD` when the six-digit source
    /// value normalized, otherwise the source value retained unmodified
    pub expiry_date: Option<String>,
    /// Production date (AI 11), same normalization rule as `expiry_date`
    pub production_date: Option<String>,
    /// Every decoded element in scan order, including AIs that have no
    /// named field above. Consumed by the label-printing/report side.
    pub elements: Vec<DecodedElement>,
    /// The original, unmodified input string, always retained for
    /// audit/debugging
    pub raw: String,
}

impl DecodedRecord {
    /// Pretty JSON for the hand-off to the inventory-entry forms.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// True when at least one named field was populated; used by callers to
    /// distinguish a real decode from a fallback record that only carries
    /// `raw`.
    pub fn has_named_fields(&self) -> bool {
        self.gtin.is_some()
            || self.batch_number.is_some()
            || self.serial_number.is_some()
            || self.sscc.is_some()
            || self.expiry_date.is_some()
            || self.production_date.is_some()
    }
}
