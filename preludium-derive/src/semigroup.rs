//! Implementation of the `#[derive(Semigroup)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input, parse_quote};

use crate::fields::{bounded_generics, construct, struct_fields};

/// Main implementation of the Semigroup derive macro.
pub fn derive_semigroup_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input))
}

fn expand(input: &DeriveInput) -> TokenStream2 {
    let fields = match struct_fields(input, "Semigroup") {
        Ok(fields) => fields,
        Err(error) => return error,
    };

    let trait_path = parse_quote!(::preludium::typeclass::Semigroup);
    let generics = bounded_generics(&input.generics, fields, &trait_path);
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();
    let name = &input.ident;

    let combined = construct(fields, |member, field_type| {
        quote! {
            <#field_type as #trait_path>::op(self.#member, other.#member)
        }
    });

    quote! {
        impl #impl_generics #trait_path for #name #type_generics #where_clause {
            #[allow(unused_variables)]
            fn op(self, other: Self) -> Self {
                #combined
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::ToTokens;
    use rstest::rstest;
    use syn::ItemImpl;

    fn expand_to_impl(input: &DeriveInput) -> ItemImpl {
        syn::parse2(expand(input)).unwrap()
    }

    #[rstest]
    fn named_struct_combines_each_field() {
        let input: DeriveInput = parse_quote! {
            struct Stats { count: Sum<u32>, label: String }
        };
        let rendered = expand_to_impl(&input).to_token_stream().to_string();
        assert!(rendered.contains("count :"));
        assert!(rendered.contains("self . label , other . label"));
    }

    #[rstest]
    fn tuple_struct_uses_indices() {
        let input: DeriveInput = parse_quote! {
            struct Pair(String, Vec<u8>);
        };
        let rendered = expand_to_impl(&input).to_token_stream().to_string();
        assert!(rendered.contains("self . 0 , other . 0"));
        assert!(rendered.contains("self . 1 , other . 1"));
    }

    #[rstest]
    fn generic_fields_are_bounded() {
        let input: DeriveInput = parse_quote! {
            struct Wrapper<T> { inner: T }
        };
        let item = expand_to_impl(&input);
        let where_clause = item.generics.where_clause.unwrap();
        assert_eq!(where_clause.predicates.len(), 1);
    }

    #[rstest]
    fn enums_are_rejected() {
        let input: DeriveInput = parse_quote! {
            enum Choice { Left, Right }
        };
        assert!(expand(&input).to_string().contains("compile_error"));
    }
}
