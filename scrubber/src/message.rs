//! The reflection capability consumed by the redaction walk.
//!
//! [`Message`] is the contract between the engine and a schema-described
//! record type: enumerate the type's field descriptors in declaration order,
//! ask whether a field currently carries a value, clear a field, and reach
//! into nested message values mutably. How a type satisfies the contract is
//! its own business — `#[derive(Message)]` generates an implementation from a
//! struct definition, and hand-written implementations are equally valid.
//!
//! Deep copies come from `Clone`: a message type owns its field values, so a
//! clone is independent of the original and may be mutated freely.
//!
//! The trait is object-safe. The walk recurses over `&mut dyn Message`, which
//! keeps the traversal a plain recursive function instead of a generic one
//! instantiated per message type.

use crate::descriptor::FieldDescriptor;

/// A schema-described record whose fields can be enumerated, inspected, and
/// cleared through descriptors.
///
/// Implementations must uphold two invariants the redaction walk relies on:
///
/// - [`fields`](Message::fields) returns descriptors in schema declaration
///   order, and that order is stable across calls.
/// - Values form a finite tree: a nested message value is owned by its parent
///   and is not aliased elsewhere in the same message. (The derive cannot
///   express a cyclic shape; hand-written implementations that introduce
///   aliasing are unsupported.)
///
/// Descriptors passed to the accessor methods are expected to come from this
/// type's own [`fields`](Message::fields) table. Accessors keyed by a foreign
/// descriptor return the unpopulated/empty answer rather than panicking.
pub trait Message {
    /// Field descriptors in schema declaration order.
    fn fields(&self) -> &'static [FieldDescriptor];

    /// Whether the field currently carries a value.
    ///
    /// Scalars with implicit presence count as populated when they differ
    /// from their default; `Option` fields when `Some`; lists and maps when
    /// non-empty.
    fn is_populated(&self, field: &FieldDescriptor) -> bool;

    /// Clears the field back to its unpopulated state.
    ///
    /// Clearing an already-clear field is a no-op.
    fn clear_field(&mut self, field: &FieldDescriptor);

    /// Mutable access to a populated singular-message field.
    ///
    /// Returns `None` when the field is unpopulated or is not a
    /// [`FieldKind::SingularMessage`] field.
    ///
    /// [`FieldKind::SingularMessage`]: crate::FieldKind::SingularMessage
    fn message_mut(&mut self, _field: &FieldDescriptor) -> Option<&mut dyn Message> {
        None
    }

    /// Number of elements in a repeated-message field; 0 for other kinds.
    fn message_list_len(&self, _field: &FieldDescriptor) -> usize {
        0
    }

    /// Mutable access to one element of a repeated-message field.
    fn message_list_mut(
        &mut self,
        _field: &FieldDescriptor,
        _index: usize,
    ) -> Option<&mut dyn Message> {
        None
    }
}
