//! The encoder facade: configuration, orchestration, and the error taxonomy.

use serde::Serialize;

use super::marshaller::{JsonMarshaller, MarshalError, Marshaller};
use super::redact::redacted_copy;
use crate::descriptor::AnnotationMarker;
use crate::message::Message;

/// Errors returned by [`Encoder::marshal`] and [`Encoder::require_marshaller`].
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The marshaller rejected the message. Surfaced verbatim, never retried.
    #[error(transparent)]
    Serialization(#[from] MarshalError),
    /// No marshaller was supplied and the default fallback was declined.
    ///
    /// Unreachable through [`Encoder::new`] and [`Encoder::with_marshaller`],
    /// which always hold a marshaller by construction.
    #[error("marshaller has not been initialized")]
    UninitializedMarshaller,
}

/// Redaction behavior for one encoder instance.
///
/// Constructed once by the caller and fixed for the lifetime of the encoder;
/// there is no run-time toggling mid-call.
///
/// ```rust
/// use scrubber::{AnnotationMarker, RedactionConfig};
///
/// const SENSITIVE: AnnotationMarker = AnnotationMarker::new("acme.v1.sensitive");
///
/// let redacting = RedactionConfig::new(SENSITIVE);
/// let passthrough = RedactionConfig::new(SENSITIVE).with_enabled(false);
/// # assert!(redacting.is_enabled());
/// # assert!(!passthrough.is_enabled());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RedactionConfig {
    enabled: bool,
    marker: AnnotationMarker,
}

impl RedactionConfig {
    /// Configuration that clears fields annotated with `marker`.
    #[must_use]
    pub const fn new(marker: AnnotationMarker) -> Self {
        Self {
            enabled: true,
            marker,
        }
    }

    /// Enables or disables redaction. Disabled encoders serialize the
    /// caller's message directly, regardless of any markers present.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Whether redaction runs before serialization.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The marker this configuration honors.
    #[must_use]
    pub const fn marker(&self) -> AnnotationMarker {
        self.marker
    }
}

/// The public entry point: clone → redact → serialize.
///
/// Holds its [`RedactionConfig`] and its marshaller as plain constructor-
/// injected state. Concurrent [`marshal`](Encoder::marshal) calls on a shared
/// instance are independent: each call works on its own clone, and the
/// configuration is immutable after construction. The marshaller's own
/// concurrent-use contract is the marshaller's to satisfy.
///
/// The caller's message is never mutated, whether redaction is enabled or
/// not.
#[derive(Clone, Debug)]
pub struct Encoder<S = JsonMarshaller> {
    config: RedactionConfig,
    marshaller: S,
}

impl Encoder<JsonMarshaller> {
    /// Constructs an encoder using the default JSON marshaller.
    #[must_use]
    pub const fn new(config: RedactionConfig) -> Self {
        Self::with_marshaller(config, JsonMarshaller)
    }
}

impl<S: Marshaller> Encoder<S> {
    /// Constructs an encoder with an explicit marshaller.
    #[must_use]
    pub const fn with_marshaller(config: RedactionConfig, marshaller: S) -> Self {
        Self { config, marshaller }
    }

    /// Constructs an encoder from an optional marshaller, declining the
    /// default fallback.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::UninitializedMarshaller`] when `marshaller` is
    /// `None`. Callers that want the fallback should use [`Encoder::new`]
    /// instead.
    pub fn require_marshaller(
        config: RedactionConfig,
        marshaller: Option<S>,
    ) -> Result<Self, EncodeError> {
        match marshaller {
            Some(marshaller) => Ok(Self::with_marshaller(config, marshaller)),
            None => Err(EncodeError::UninitializedMarshaller),
        }
    }

    /// This encoder's configuration.
    #[must_use]
    pub const fn config(&self) -> &RedactionConfig {
        &self.config
    }

    /// Serializes `message`, clearing marked fields first when redaction is
    /// enabled.
    ///
    /// With redaction enabled the message is deep-copied, the copy is redacted
    /// in place and serialized, and the copy is discarded; the original is
    /// returned to the caller bit-for-bit as it came in. With redaction
    /// disabled the original is serialized directly.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::Serialization`] when the marshaller fails.
    /// Either a complete byte sequence is returned or an error; there is no
    /// partial output.
    pub fn marshal<M>(&self, message: &M) -> Result<Vec<u8>, EncodeError>
    where
        M: Message + Serialize + Clone,
    {
        if !self.config.enabled {
            return Ok(self.marshaller.marshal(message)?);
        }

        let copy = redacted_copy(message, self.config.marker);
        Ok(self.marshaller.marshal(&copy)?)
    }
}
