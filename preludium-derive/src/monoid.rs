//! Implementation of the `#[derive(Monoid)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input, parse_quote};

use crate::fields::{bounded_generics, construct, struct_fields};

/// Main implementation of the Monoid derive macro.
pub fn derive_monoid_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input))
}

fn expand(input: &DeriveInput) -> TokenStream2 {
    let fields = match struct_fields(input, "Monoid") {
        Ok(fields) => fields,
        Err(error) => return error,
    };

    let trait_path = parse_quote!(::preludium::typeclass::Monoid);
    let generics = bounded_generics(&input.generics, fields, &trait_path);
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();
    let name = &input.ident;

    let identity = construct(fields, |_, field_type| {
        quote! { <#field_type as #trait_path>::mzero() }
    });

    quote! {
        impl #impl_generics #trait_path for #name #type_generics #where_clause {
            fn mzero() -> Self {
                #identity
            }
        }
    }
}
