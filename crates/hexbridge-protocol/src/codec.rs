//! Codec trait and implementations for serializing wire documents.
//!
//! A "codec" (coder/decoder) converts between Rust types and raw bytes.
//! The rest of hexbridge doesn't care HOW documents are serialized: it
//! just needs something that implements [`Codec`]. Today that is
//! [`JsonCodec`], because the page consumes the snapshot as a JavaScript
//! literal.

use serde::{de::DeserializeOwned, Serialize};

use crate::ProtocolError;

/// A codec that can encode Rust types to bytes and decode bytes back.
///
/// ## Trait bounds explained
///
/// - `Send + Sync` → safe to share between request-handling threads.
/// - `'static` → the codec owns everything it needs, so it can live
///   inside long-lived shared state such as the bridge facade.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if serialization fails.
    fn encode<T: Serialize>(
        &self,
        value: &T,
    ) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns `ProtocolError::Decode` if the bytes are malformed,
    /// incomplete, or don't match the expected type.
    fn decode<T: DeserializeOwned>(
        &self,
        data: &[u8],
    ) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that uses JSON (via `serde_json`).
///
/// This is behind the `json` feature flag (enabled by default).
///
/// ## Example
///
/// ```rust
/// use hexbridge_protocol::{Codec, JsonCodec, RenderedMessage};
///
/// let codec = JsonCodec;
/// let msg = RenderedMessage {
///     name: "Admin".into(),
///     color: "black".into(),
///     text: "Game started".into(),
/// };
///
/// let bytes = codec.encode(&msg).unwrap();
/// let decoded: RenderedMessage = codec.decode(&bytes).unwrap();
/// assert_eq!(msg, decoded);
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(
        &self,
        value: &T,
    ) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(
        &self,
        data: &[u8],
    ) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}

// ---------------------------------------------------------------------------
// Script embedding
// ---------------------------------------------------------------------------

/// Encodes `value` and wraps it in a JavaScript assignment statement:
/// `var <variable> = <encoded>;`.
///
/// The page drops this straight into a `<script>` element, so any `</`
/// in the payload is written as `<\/` (still the same string to a JSON or
/// JavaScript parser) and a player-chosen color can never close the
/// element early.
///
/// # Errors
/// - [`ProtocolError::InvalidMessage`] if `variable` is not a plain
///   JavaScript identifier, or the codec output is not UTF-8.
/// - Whatever the codec returns from [`Codec::encode`].
pub fn script_assignment<C: Codec, T: Serialize>(
    codec: &C,
    variable: &str,
    value: &T,
) -> Result<String, ProtocolError> {
    if !is_identifier(variable) {
        return Err(ProtocolError::InvalidMessage(format!(
            "`{variable}` is not a valid script variable name"
        )));
    }

    let bytes = codec.encode(value)?;
    let body = String::from_utf8(bytes).map_err(|e| {
        ProtocolError::InvalidMessage(format!(
            "encoded document is not UTF-8: {e}"
        ))
    })?;

    Ok(format!("var {variable} = {};", body.replace("</", "<\\/")))
}

/// ASCII-only identifier check: `[A-Za-z_$][A-Za-z0-9_$]*`.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
