//! Maps tokenized elements onto the named fields of a `DecodedRecord`
//!
//! The mapping is a plain overwrite-on-insert: when an AI code recurs in a
//! scan, the last occurrence wins. Elements whose AI has no named field
//! (counts, internal codes, unregistered bracket AIs) are still carried in
//! the record's element list.

use crate::dates;
use crate::types::{DecodedElement, DecodedRecord};

// AI codes with named fields on the record
pub const AI_SSCC: &str = "00";
pub const AI_GTIN: &str = "01";
pub const AI_BATCH: &str = "10";
pub const AI_PROD_DATE: &str = "11";
pub const AI_EXPIRY: &str = "17";
pub const AI_SERIAL: &str = "21";

/// Build the output record from the tokenized elements. `raw` is the
/// original input before normalization; it is always retained.
pub fn map_elements(raw: &str, elements: Vec<DecodedElement>) -> DecodedRecord {
    let mut record = DecodedRecord {
        raw: raw.to_string(),
        ..Default::default()
    };

    for element in &elements {
        let value = element.value.clone();
        match element.ai.as_str() {
            AI_SSCC => record.sscc = Some(value),
            AI_GTIN => record.gtin = Some(value),
            AI_BATCH => record.batch_number = Some(value),
            AI_SERIAL => record.serial_number = Some(value),
            AI_EXPIRY => record.expiry_date = Some(dates::normalize_or_raw(&value)),
            AI_PROD_DATE => record.production_date = Some(dates::normalize_or_raw(&value)),
            _ => {}
        }
    }

    record.elements = elements;
    record
}
