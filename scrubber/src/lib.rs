//! Schema-driven message encoding with sensitive-field redaction.
//!
//! This crate separates:
//! - **Schema metadata**: which fields exist and which are marked sensitive.
//! - **Redaction**: clearing marked fields on a deep copy, never in the
//!   caller's message.
//! - **Serialization**: a pluggable [`Marshaller`] strategy, JSON by default.
//!
//! The derive macro builds the per-type field-descriptor table and the
//! reflection accessors behind `#[derive(Message)]`; the [`Encoder`] applies
//! the clone → redact → serialize pipeline when you call
//! [`Encoder::marshal`].
//!
//! Key rules:
//! - A marker is an opaque identity the schema author attaches to fields with
//!   `#[message(marked(...))]`; the engine only evaluates membership.
//! - A marked field is cleared whole, removal not transformation; the walk
//!   never descends into something it has cleared.
//! - Unmarked scalar, list-of-scalar, and map fields pass through unchanged;
//!   maps are opaque to the walk even when their values are messages.
//! - The caller's message is never mutated; redaction runs on a deep copy
//!   that is discarded after serialization.
//!
//! What this crate does:
//! - defines the descriptor model ([`FieldDescriptor`], [`FieldKind`],
//!   [`AnnotationMarker`]) and the [`Message`] reflection capability
//! - implements the descriptor-driven redaction walk and the encoder facade
//! - provides integrations behind feature flags (e.g. `slog`)
//!
//! What it does not do:
//! - perform I/O or logging
//! - define which fields of your schema are sensitive
//!
//! The `Message` derive macro lives in `scrubber-derive` and is re-exported
//! from the crate root.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::option_if_let_else,
    clippy::from_over_into
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use scrubber_derive::Message;

// Module declarations
mod descriptor;
mod encode;
mod message;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use descriptor::{AnnotationMarker, FieldDescriptor, FieldKind};
pub use encode::{
    redact_in_place, redacted_copy, EncodeError, Encoder, JsonMarshaller, MarshalError, Marshaller,
    RedactionConfig,
};
pub use message::Message;
