//! Static registry of GS1 Application Identifiers
//!
//! The registry is built once per process and never mutated afterwards, so
//! lookups are safe from any thread without coordination.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::warn;

/// Length class of an Application Identifier's data field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiLength {
    /// The field consumes exactly this many characters
    Fixed(usize),
    /// The field runs until a separator or the next detectable AI.
    /// `max` is the GS1 maximum; it is advisory and never enforced by
    /// truncation.
    Variable { max: usize },
}

/// One known Application Identifier
#[derive(Debug, Clone, Copy)]
pub struct AiDescriptor {
    /// 2-4 digit AI code, unique within the registry
    pub code: &'static str,
    /// Human label, diagnostic only
    pub name: &'static str,
    pub length: AiLength,
}

/// The AIs understood by both the decoder and the label-printing side.
/// Codes and length classes follow the GS1 General Specifications.
const KNOWN_AIS: &[AiDescriptor] = &[
    AiDescriptor { code: "00", name: "SSCC", length: AiLength::Fixed(18) },
    AiDescriptor { code: "01", name: "GTIN", length: AiLength::Fixed(14) },
    AiDescriptor { code: "02", name: "CONTENT", length: AiLength::Fixed(14) },
    AiDescriptor { code: "10", name: "BATCH/LOT", length: AiLength::Variable { max: 20 } },
    AiDescriptor { code: "11", name: "PROD DATE", length: AiLength::Fixed(6) },
    AiDescriptor { code: "13", name: "PACK DATE", length: AiLength::Fixed(6) },
    AiDescriptor { code: "15", name: "BEST BEFORE", length: AiLength::Fixed(6) },
    AiDescriptor { code: "17", name: "USE BY OR EXPIRY", length: AiLength::Fixed(6) },
    AiDescriptor { code: "20", name: "VARIANT", length: AiLength::Fixed(2) },
    AiDescriptor { code: "21", name: "SERIAL", length: AiLength::Variable { max: 20 } },
    AiDescriptor { code: "22", name: "CPV", length: AiLength::Variable { max: 20 } },
    AiDescriptor { code: "30", name: "VAR COUNT", length: AiLength::Variable { max: 8 } },
    AiDescriptor { code: "37", name: "COUNT", length: AiLength::Variable { max: 8 } },
    AiDescriptor { code: "90", name: "INTERNAL", length: AiLength::Variable { max: 30 } },
    AiDescriptor { code: "91", name: "INTERNAL", length: AiLength::Variable { max: 30 } },
    AiDescriptor { code: "92", name: "INTERNAL", length: AiLength::Variable { max: 30 } },
    AiDescriptor { code: "240", name: "ADDITIONAL ID", length: AiLength::Variable { max: 30 } },
    AiDescriptor { code: "241", name: "CUST. PART NO.", length: AiLength::Variable { max: 30 } },
    AiDescriptor { code: "250", name: "SECONDARY SERIAL", length: AiLength::Variable { max: 30 } },
    AiDescriptor { code: "251", name: "REF. TO SOURCE", length: AiLength::Variable { max: 30 } },
    AiDescriptor { code: "8017", name: "GSRN - PROVIDER", length: AiLength::Fixed(18) },
    AiDescriptor { code: "8200", name: "PRODUCT URL", length: AiLength::Variable { max: 70 } },
];

static AI_TABLE: Lazy<HashMap<&'static str, &'static AiDescriptor>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for ai in KNOWN_AIS {
        if table.insert(ai.code, ai).is_some() {
            // A duplicate entry in the static table is a programming error,
            // not a runtime data condition; flag it and keep the last one.
            warn!("AI registry: duplicate registration for code '{}'", ai.code);
        }
    }
    table
});

/// Look up an AI by its exact code.
pub fn lookup(code: &str) -> Option<&'static AiDescriptor> {
    AI_TABLE.get(code).copied()
}

/// Probe for a registered AI starting at byte position `pos` of `s`.
///
/// Codes are tried longest first (4, then 3, then 2 digits): shorter codes
/// share the digit alphabet with longer ones, so stopping at a failed short
/// probe would mis-resolve codes like "240" whose two-digit prefix is not
/// registered.
pub fn lookup_at(s: &str, pos: usize) -> Option<&'static AiDescriptor> {
    for len in [4usize, 3, 2] {
        let Some(candidate) = s.get(pos..pos + len) else {
            continue;
        };
        if !candidate.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        if let Some(ai) = lookup(candidate) {
            return Some(ai);
        }
    }
    None
}

/// List all registered AI codes (diagnostic helper).
pub fn known_codes() -> Vec<&'static str> {
    KNOWN_AIS.iter().map(|ai| ai.code).collect()
}
