use thiserror::Error;

/// Errors from the decoder's ambient surfaces (configuration, CLI I/O,
/// JSON output). Decoding itself is total and degrades to partial records
/// instead of failing; nothing on the parse path produces these.
#[derive(Error, Debug)]
pub enum DecoderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DecoderError>;
