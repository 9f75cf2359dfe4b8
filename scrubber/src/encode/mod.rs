//! Encoding entrypoints, serializer adapters, and the redaction walk.
//!
//! This module ties the pieces together:
//!
//! - **`marshaller`**: Strategy layer - how a message becomes bytes
//!   ([`Marshaller`], [`JsonMarshaller`])
//! - **`redact`**: Algorithm layer - the descriptor-driven walk
//!   ([`redact_in_place`], [`redacted_copy`])
//! - **`encoder`**: Facade layer - configuration and orchestration
//!   ([`Encoder`], [`RedactionConfig`])
//!
//! Descriptor and marker types live in `crate::descriptor`.

mod encoder;
mod marshaller;
mod redact;

pub use encoder::{EncodeError, Encoder, RedactionConfig};
pub use marshaller::{JsonMarshaller, MarshalError, Marshaller};
pub use redact::{redact_in_place, redacted_copy};
