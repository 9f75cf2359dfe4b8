//! Syntactic type-shape classification for the derive macro.

/// The container shape of a field's declared type, judged syntactically.
///
/// Classification looks at the last path segment only, so qualified spellings
/// like `std::collections::HashMap` classify the same as bare `HashMap`.
/// This is intentionally conservative: a type alias hiding a container is
/// classified as `Bare`, and the generated code's trait bounds surface the
/// mismatch at the field's span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TypeShape {
    /// `Option<T>`: explicit presence.
    Option,
    /// `Vec<T>`: a repeated field.
    Vec,
    /// `HashMap<K, V>` or `BTreeMap<K, V>`: a keyed collection.
    Map,
    /// Anything else: a scalar leaf with implicit presence.
    Bare,
}

pub(crate) fn classify_type(ty: &syn::Type) -> TypeShape {
    let syn::Type::Path(path) = ty else {
        return TypeShape::Bare;
    };

    let Some(segment) = path.path.segments.last() else {
        return TypeShape::Bare;
    };

    let has_type_args = matches!(&segment.arguments, syn::PathArguments::AngleBracketed(args)
        if args.args.iter().any(|arg| matches!(arg, syn::GenericArgument::Type(_))));

    match segment.ident.to_string().as_str() {
        "Option" if has_type_args => TypeShape::Option,
        "Vec" if has_type_args => TypeShape::Vec,
        "HashMap" | "BTreeMap" if has_type_args => TypeShape::Map,
        _ => TypeShape::Bare,
    }
}
