//! Derive macro for `scrubber`.
//!
//! This crate generates the reflection capability behind `#[derive(Message)]`.
//! It:
//! - reads `#[message(...)]` field attributes
//! - builds a `const` field-descriptor table in declaration order
//! - emits the `Message` accessor implementations keyed by descriptor index
//!
//! It does **not** define markers or decide what gets redacted. Those live in
//! the main `scrubber` crate and are evaluated at runtime.

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

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod derive_struct;
mod field;
mod shape;
use derive_struct::derive_struct;

/// Derives the `scrubber::Message` reflection capability for named-field
/// structs.
///
/// The generated implementation enumerates a `const` descriptor table in
/// declaration order and provides the populated/clear/nested accessors the
/// redaction walk consumes.
///
/// # Field Attributes
///
/// - **No annotation**: a leaf field. `Option<T>` gets explicit presence,
///   `Vec<T>` becomes a list of scalars, `HashMap`/`BTreeMap` become opaque
///   map fields, and anything else is a scalar with implicit presence
///   (populated iff it differs from `Default::default()`; the type must
///   implement `Default` and `PartialEq`).
///
/// - `#[message]` (or `#[message(nested)]`): the field's value(s) are nested
///   messages the walk descends into. The type must be `Option<T>` or
///   `Vec<T>` where `T` implements `Message`.
///
/// - `#[message(marked(PATH, ...))]`: attaches marker `const`s (of type
///   `scrubber::AnnotationMarker`) to the field's descriptor. A field whose
///   descriptor carries the encoder's active marker is cleared whole.
///
/// `nested` and `marked(...)` combine: `#[message(nested, marked(SECRET))]`
/// declares a nested message field that is itself cleared when `SECRET` is
/// active.
///
/// Enums, unions, tuple structs, and generic types are rejected at compile
/// time: schema messages are concrete named-field records.
#[proc_macro_derive(Message, attributes(message))]
pub fn derive_message(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the scrubber crate root.
///
/// Handles crate renaming (e.g., `my_scrub = { package = "scrubber", ... }`)
/// and internal usage (when the derive is used inside the scrubber crate
/// itself).
fn crate_root() -> TokenStream {
    match crate_name("scrubber") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::scrubber },
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        ..
    } = input;

    if let Some(param) = generics.params.first() {
        return Err(syn::Error::new(
            param.span(),
            "`Message` cannot be derived for generic types; \
             descriptor tables are built per concrete message type",
        ));
    }

    let crate_root = crate_root();

    let output = match &data {
        Data::Struct(data) => derive_struct(data, &crate_root)?,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span(),
                "`Message` cannot be derived for enums",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "`Message` cannot be derived for unions",
            ));
        }
    };

    let descriptor_entries = &output.descriptor_entries;
    let populated_arms = &output.populated_arms;
    let clear_arms = &output.clear_arms;

    let message_mut_method = if output.message_mut_arms.is_empty() {
        quote! {}
    } else {
        let arms = &output.message_mut_arms;
        quote! {
            fn message_mut(
                &mut self,
                field: &#crate_root::FieldDescriptor,
            ) -> ::core::option::Option<&mut dyn #crate_root::Message> {
                match field.index() {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };

    let list_methods = if output.list_len_arms.is_empty() {
        quote! {}
    } else {
        let len_arms = &output.list_len_arms;
        let mut_arms = &output.list_mut_arms;
        quote! {
            fn message_list_len(&self, field: &#crate_root::FieldDescriptor) -> usize {
                match field.index() {
                    #(#len_arms)*
                    _ => 0,
                }
            }

            fn message_list_mut(
                &mut self,
                field: &#crate_root::FieldDescriptor,
                index: usize,
            ) -> ::core::option::Option<&mut dyn #crate_root::Message> {
                match field.index() {
                    #(#mut_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };

    Ok(quote! {
        impl #crate_root::Message for #ident {
            fn fields(&self) -> &'static [#crate_root::FieldDescriptor] {
                const FIELDS: &[#crate_root::FieldDescriptor] = &[
                    #(#descriptor_entries),*
                ];
                FIELDS
            }

            fn is_populated(&self, field: &#crate_root::FieldDescriptor) -> bool {
                match field.index() {
                    #(#populated_arms)*
                    _ => false,
                }
            }

            fn clear_field(&mut self, field: &#crate_root::FieldDescriptor) {
                match field.index() {
                    #(#clear_arms)*
                    _ => {}
                }
            }

            #message_mut_method

            #list_methods
        }
    })
}
