//! Adapters for emitting redacted messages through `slog`.
//!
//! This module connects the encoder's redaction pass with `slog` by providing
//! a `slog::Value` wrapper that serializes redacted output as structured JSON
//! via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation honors a [`RedactionConfig`], so a
//!   marked field never reaches the drain.
//! - Avoiding fallible logging APIs: serialization failures are represented
//!   as placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog`, define markers, or validate that a
//! [`Message`] implementation enumerates its fields correctly.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::encode::{redacted_copy, RedactionConfig};
use crate::message::Message;

/// A `slog::Value` that emits an owned redacted payload as structured JSON.
///
/// The payload is stored as a `serde_json::Value` and emitted via `slog`'s
/// nested-value support.
pub struct RedactedJson {
    value: JsonValue,
}

impl RedactedJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }
}

impl SlogValue for RedactedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts messages into a `slog::Value` that logs their redacted form as
/// JSON.
///
/// Calling `into_redacted_json` consumes the message, applies the config's
/// redaction pass to a deep copy (or serializes directly when the config is
/// disabled), and stores the result as a `serde_json::Value`. The marked
/// fields of the message are never serialized when redaction is enabled.
///
/// ## Example
/// ```ignore
/// use scrubber::slog::IntoRedactedJson;
///
/// info!(logger, "event"; "data" => event.into_redacted_json(&config));
/// ```
pub trait IntoRedactedJson: Message + Clone + Serialize + Sized {
    /// Redacts `self` per `config` and returns a `slog::Value` that
    /// serializes as structured JSON.
    ///
    /// If converting the output into `serde_json::Value` fails, the returned
    /// value stores a JSON string with the message
    /// `"Failed to serialize redacted value"`.
    fn into_redacted_json(self, config: &RedactionConfig) -> RedactedJson {
        let value = if config.is_enabled() {
            serde_json::to_value(redacted_copy(&self, config.marker()))
        } else {
            serde_json::to_value(self)
        };
        RedactedJson::new(value.unwrap_or_else(|_| {
            JsonValue::String("Failed to serialize redacted value".to_string())
        }))
    }
}

impl<T> IntoRedactedJson for T where T: Message + Clone + Serialize {}
