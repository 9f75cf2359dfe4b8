//! Schema metadata for message fields.
//!
//! A [`FieldDescriptor`] identifies one field of a message type: its position
//! in declaration order, its name, its [`FieldKind`], and the set of
//! [`AnnotationMarker`]s the schema author attached to it. Descriptor tables
//! are built once per message type (usually by `#[derive(Message)]`) and live
//! in statics, so everything here is `const`-constructible.
//!
//! Markers are opaque identities, not field names: whether a field is
//! sensitive is decided by annotation-set membership, never by string-matching
//! the field name.

/// Opaque identifier a schema author attaches to a field to mark it.
///
/// Define a marker once as a `const` and reference it both in
/// `#[message(marked(...))]` attributes and in the [`RedactionConfig`] that
/// selects which marker the encoder honors:
///
/// ```rust
/// use scrubber::AnnotationMarker;
///
/// const SENSITIVE: AnnotationMarker = AnnotationMarker::new("acme.v1.sensitive");
/// ```
///
/// Markers compare by their identity string. The engine never defines which
/// fields are sensitive; it only evaluates whether a descriptor carries a
/// given marker.
///
/// [`RedactionConfig`]: crate::RedactionConfig
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnnotationMarker {
    id: &'static str,
}

impl AnnotationMarker {
    /// Constructs a marker with the given identity.
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self { id }
    }

    /// Returns the marker's identity string.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }
}

/// The shape of a field as declared in its message's schema.
///
/// The kind decides whether the redaction walk descends into a field's value:
/// only `SingularMessage` and `ListOfMessage` fields are recursed into.
/// `Map` fields are never descended into, even when their values are
/// messages; a map is cleared whole when marked and is otherwise opaque to
/// the walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// A leaf value: integer, string, boolean, or any other non-message type.
    Scalar,
    /// A repeated leaf value (`Vec` of scalars).
    ListOfScalar,
    /// A single nested message value.
    SingularMessage,
    /// A repeated nested message value (`Vec` of messages).
    ListOfMessage,
    /// A keyed collection. Opaque to the redaction walk.
    Map,
}

/// Schema metadata identifying one field of a message type.
///
/// Identity within a type is the declaration `index`; the `name` is carried
/// for diagnostics and mirrors the schema field name. The annotation set is
/// fixed at declaration time.
#[derive(Clone, Copy, Debug)]
pub struct FieldDescriptor {
    index: usize,
    name: &'static str,
    kind: FieldKind,
    annotations: &'static [AnnotationMarker],
}

impl FieldDescriptor {
    /// Constructs a descriptor. Intended for generated descriptor tables and
    /// hand-written [`Message`] implementations.
    ///
    /// [`Message`]: crate::Message
    #[must_use]
    pub const fn new(
        index: usize,
        name: &'static str,
        kind: FieldKind,
        annotations: &'static [AnnotationMarker],
    ) -> Self {
        Self {
            index,
            name,
            kind,
            annotations,
        }
    }

    /// The field's position in its message's declaration order.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The schema field name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The declared shape of the field.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The markers declared on this field.
    #[must_use]
    pub const fn annotations(&self) -> &'static [AnnotationMarker] {
        self.annotations
    }

    /// Returns true iff the field's declared annotations include `marker`.
    ///
    /// Inspects schema metadata only, never runtime values, so the field does
    /// not need to be populated. An empty annotation set yields `false`; this
    /// method is total.
    #[must_use]
    pub fn has_marker(&self, marker: AnnotationMarker) -> bool {
        self.annotations.iter().any(|declared| *declared == marker)
    }
}
