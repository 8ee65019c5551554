//! Error types for the protocol layer.
//!
//! A `ProtocolError` means a document could not be turned into (or read
//! back from) its wire form. Board and session problems have their own
//! error types in the crates that own them.

/// What can go wrong while shaping a wire document.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The codec could not serialize the document.
    #[cfg(feature = "json")]
    #[error("could not encode document: {0}")]
    Encode(serde_json::Error),

    /// The bytes were not a valid document of the requested type.
    #[cfg(feature = "json")]
    #[error("could not decode document: {0}")]
    Decode(serde_json::Error),

    /// The document encoded fine but cannot be embedded as asked, e.g. a
    /// script variable name that is not a JavaScript identifier.
    #[error("invalid message: {0}")]
    InvalidMessage(String),
}
