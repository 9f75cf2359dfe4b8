//! Serializer adapters consumed by the encoder facade.
//!
//! A [`Marshaller`] is a pure strategy: it turns an already-redacted (or
//! deliberately unredacted) message into bytes and reports failures as
//! [`MarshalError`]. It does not traverse messages, consult descriptors, or
//! make redaction decisions.

use serde::Serialize;

/// Error surfaced by a [`Marshaller`] implementation.
///
/// Wraps whatever the underlying serializer reports. The encoder facade
/// propagates it verbatim and never retries.
#[derive(Debug, thiserror::Error)]
#[error("serialization failed: {source}")]
pub struct MarshalError {
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl MarshalError {
    /// Wraps a serializer's error.
    pub fn new<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self {
            source: source.into(),
        }
    }
}

/// A serialization strategy the encoder delegates to.
///
/// Implementations must be safe for concurrent use through `&self` if the
/// owning encoder is shared across threads; the facade does not enforce this,
/// it is part of the marshaller's contract.
pub trait Marshaller {
    /// Serializes `message` to bytes.
    fn marshal<M: Serialize>(&self, message: &M) -> Result<Vec<u8>, MarshalError>;
}

/// The default marshaller: compact JSON via `serde_json`.
///
/// Deterministic for identical inputs and total on well-formed messages
/// (failures are limited to values `serde_json` cannot represent, such as
/// non-string map keys).
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonMarshaller;

impl Marshaller for JsonMarshaller {
    fn marshal<M: Serialize>(&self, message: &M) -> Result<Vec<u8>, MarshalError> {
        serde_json::to_vec(message).map_err(MarshalError::new)
    }
}
