//! The redaction walk: descriptor-driven clearing of marked fields.
//!
//! [`redact_in_place`] is a plain recursive function over the [`Message`]
//! reflection capability. It visits populated fields pre-order in declaration
//! order, clears any field whose descriptor carries the active marker, and
//! descends into singular and repeated message values. The walk is total: no
//! input it accepts can make it fail.
//!
//! Maps are opaque to the walk. A marked map field is cleared whole like any
//! other field, but an unmarked map is never descended into, even when its
//! values are messages with marked fields of their own. This is a deliberate
//! boundary of the engine, not an oversight.

use crate::descriptor::{AnnotationMarker, FieldKind};
use crate::message::Message;

/// Clears every populated field carrying `marker`, recursing into nested
/// message values.
///
/// A marked field is cleared whole and not descended into: clearing removes
/// the entire subtree, so there is nothing left to redact inside it. Repeated
/// message fields keep their order and length; only field contents inside
/// each element may be cleared.
///
/// The caller is expected to pass a clone when the original must survive;
/// [`redacted_copy`] packages that pattern.
pub fn redact_in_place(message: &mut dyn Message, marker: AnnotationMarker) {
    for field in message.fields() {
        if !message.is_populated(field) {
            continue;
        }

        if field.has_marker(marker) {
            message.clear_field(field);
            continue;
        }

        match field.kind() {
            FieldKind::Scalar | FieldKind::ListOfScalar | FieldKind::Map => {}
            FieldKind::SingularMessage => {
                if let Some(nested) = message.message_mut(field) {
                    redact_in_place(nested, marker);
                }
            }
            FieldKind::ListOfMessage => {
                let len = message.message_list_len(field);
                for index in 0..len {
                    if let Some(element) = message.message_list_mut(field, index) {
                        redact_in_place(element, marker);
                    }
                }
            }
        }
    }
}

/// Returns a deep copy of `message` with every marked field cleared, leaving
/// `message` untouched.
#[must_use]
pub fn redacted_copy<M>(message: &M, marker: AnnotationMarker) -> M
where
    M: Message + Clone,
{
    let mut copy = message.clone();
    redact_in_place(&mut copy, marker);
    copy
}
