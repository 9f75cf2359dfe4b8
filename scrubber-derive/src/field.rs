//! Parsing of `#[message(...)]` field attributes.
//!
//! This module maps attribute syntax to field declarations and produces
//! structured errors for invalid forms.

use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, Meta, Result};

/// Options parsed from the `#[message(...)]` attributes of one field.
///
/// ## Attribute Mapping
///
/// | Attribute | Meaning |
/// |-----------|---------|
/// | None | Leaf field; kind inferred from the type shape |
/// | `#[message]` / `#[message(nested)]` | Value(s) are messages to walk into |
/// | `#[message(marked(PATH, ...))]` | Attach marker consts to the field |
#[derive(Clone, Debug, Default)]
pub(crate) struct FieldOptions {
    /// True when the field's value (or list elements) are nested messages.
    pub(crate) nested: bool,
    /// Paths to `AnnotationMarker` consts declared on the field.
    pub(crate) markers: Vec<syn::Path>,
}

fn set_nested(nested: &mut bool, span: Span) -> Result<()> {
    if *nested {
        return Err(syn::Error::new(
            span,
            "duplicate `nested` option on the same field",
        ));
    }
    *nested = true;
    Ok(())
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut options = FieldOptions::default();
    let mut seen = false;

    for attr in attrs {
        if !attr.path().is_ident("message") {
            continue;
        }
        if seen {
            return Err(syn::Error::new(
                attr.span(),
                "multiple #[message] attributes specified on the same field",
            ));
        }
        seen = true;

        match &attr.meta {
            Meta::Path(_) => {
                // Bare #[message] - the field value is a nested message
                set_nested(&mut options.nested, attr.span())?;
            }
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("nested") {
                        set_nested(&mut options.nested, meta.path.span())
                    } else if meta.path.is_ident("marked") {
                        let before = options.markers.len();
                        meta.parse_nested_meta(|marker| {
                            options.markers.push(marker.path.clone());
                            Ok(())
                        })?;
                        if options.markers.len() == before {
                            return Err(
                                meta.error("expected at least one marker path in `marked(...)`")
                            );
                        }
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown field option `{}`; expected `nested` or `marked(...)`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[message]",
                ));
            }
        }
    }

    Ok(options)
}
