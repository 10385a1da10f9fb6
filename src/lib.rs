pub mod compose;
pub mod config;
pub mod dates;
pub mod decode;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod registry;
pub mod types;

pub use config::DecoderConfig;
pub use decode::{is_valid, parse, Gs1Decoder, ScanFormat};
pub use normalize::FNC1;
pub use types::{DecodedElement, DecodedRecord};
