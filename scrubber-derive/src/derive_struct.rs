//! Struct-specific `Message` derivation.
//!
//! This module turns a named-field struct definition into the pieces of a
//! `Message` implementation: the descriptor-table entries and the match arms
//! of the reflection accessors, all keyed by declaration index.

use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{spanned::Spanned, DataStruct, Fields, Result};

use crate::{
    field::parse_field_options,
    shape::{classify_type, TypeShape},
};

/// How one field participates in the generated reflection accessors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FieldPlan {
    /// Implicit presence: populated iff the value differs from its default.
    Scalar,
    /// `Option<T>` leaf: explicit presence.
    OptionalScalar,
    /// `Vec<T>` of leaves.
    ScalarList,
    /// `Option<T>` where `T: Message`.
    SingularMessage,
    /// `Vec<T>` where `T: Message`.
    MessageList,
    /// Keyed collection; opaque to the walk.
    Map,
}

#[derive(Debug)]
pub(crate) struct StructDeriveOutput {
    pub(crate) descriptor_entries: Vec<TokenStream>,
    pub(crate) populated_arms: Vec<TokenStream>,
    pub(crate) clear_arms: Vec<TokenStream>,
    pub(crate) message_mut_arms: Vec<TokenStream>,
    pub(crate) list_len_arms: Vec<TokenStream>,
    pub(crate) list_mut_arms: Vec<TokenStream>,
}

pub(crate) fn derive_struct(
    data: &DataStruct,
    crate_root: &TokenStream,
) -> Result<StructDeriveOutput> {
    let fields = match &data.fields {
        Fields::Named(fields) => fields.named.iter().collect::<Vec<_>>(),
        // An empty message is a valid schema; it has no fields to enumerate.
        Fields::Unit => Vec::new(),
        Fields::Unnamed(fields) => {
            return Err(syn::Error::new(
                fields.span(),
                "`Message` requires named fields; schema fields carry names",
            ));
        }
    };

    let mut output = StructDeriveOutput {
        descriptor_entries: Vec::new(),
        populated_arms: Vec::new(),
        clear_arms: Vec::new(),
        message_mut_arms: Vec::new(),
        list_len_arms: Vec::new(),
        list_mut_arms: Vec::new(),
    };

    for (index, field) in fields.into_iter().enumerate() {
        let options = parse_field_options(&field.attrs)?;
        let plan = resolve_plan(field, options.nested)?;

        let ident = field
            .ident
            .as_ref()
            .expect("named field should have an identifier");
        let name = ident.to_string();
        let span = field.ty.span();
        let ty = &field.ty;
        let markers = &options.markers;
        let kind = kind_tokens(plan, crate_root);

        output.descriptor_entries.push(quote! {
            #crate_root::FieldDescriptor::new(#index, #name, #kind, &[#(#markers),*])
        });

        output.populated_arms.push(match plan {
            FieldPlan::Scalar => quote_spanned! { span =>
                #index => self.#ident != <#ty as ::core::default::Default>::default(),
            },
            FieldPlan::OptionalScalar | FieldPlan::SingularMessage => quote_spanned! { span =>
                #index => self.#ident.is_some(),
            },
            FieldPlan::ScalarList | FieldPlan::MessageList | FieldPlan::Map => {
                quote_spanned! { span =>
                    #index => !self.#ident.is_empty(),
                }
            }
        });

        output.clear_arms.push(match plan {
            FieldPlan::Scalar => quote_spanned! { span =>
                #index => self.#ident = ::core::default::Default::default(),
            },
            FieldPlan::OptionalScalar | FieldPlan::SingularMessage => quote_spanned! { span =>
                #index => self.#ident = ::core::option::Option::None,
            },
            FieldPlan::ScalarList | FieldPlan::MessageList | FieldPlan::Map => {
                quote_spanned! { span =>
                    #index => self.#ident.clear(),
                }
            }
        });

        match plan {
            FieldPlan::SingularMessage => {
                output.message_mut_arms.push(quote_spanned! { span =>
                    #index => self
                        .#ident
                        .as_mut()
                        .map(|nested| nested as &mut dyn #crate_root::Message),
                });
            }
            FieldPlan::MessageList => {
                output.list_len_arms.push(quote_spanned! { span =>
                    #index => self.#ident.len(),
                });
                output.list_mut_arms.push(quote_spanned! { span =>
                    #index => self
                        .#ident
                        .get_mut(index)
                        .map(|element| element as &mut dyn #crate_root::Message),
                });
            }
            _ => {}
        }
    }

    Ok(output)
}

fn resolve_plan(field: &syn::Field, nested: bool) -> Result<FieldPlan> {
    let shape = classify_type(&field.ty);
    if nested {
        return match shape {
            TypeShape::Option => Ok(FieldPlan::SingularMessage),
            TypeShape::Vec => Ok(FieldPlan::MessageList),
            TypeShape::Map | TypeShape::Bare => Err(syn::Error::new(
                field.ty.span(),
                "#[message] fields must be `Option<T>` or `Vec<T>` where `T` implements `Message`",
            )),
        };
    }
    Ok(match shape {
        TypeShape::Option => FieldPlan::OptionalScalar,
        TypeShape::Vec => FieldPlan::ScalarList,
        TypeShape::Map => FieldPlan::Map,
        TypeShape::Bare => FieldPlan::Scalar,
    })
}

fn kind_tokens(plan: FieldPlan, crate_root: &TokenStream) -> TokenStream {
    match plan {
        FieldPlan::Scalar | FieldPlan::OptionalScalar => {
            quote! { #crate_root::FieldKind::Scalar }
        }
        FieldPlan::ScalarList => quote! { #crate_root::FieldKind::ListOfScalar },
        FieldPlan::SingularMessage => quote! { #crate_root::FieldKind::SingularMessage },
        FieldPlan::MessageList => quote! { #crate_root::FieldKind::ListOfMessage },
        FieldPlan::Map => quote! { #crate_root::FieldKind::Map },
    }
}
