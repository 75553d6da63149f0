//! Helpers shared by the derive implementations.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Generics, Index, Member, Path, WherePredicate, parse_quote};

/// Returns the struct fields, or a compile error for enums and unions.
pub fn struct_fields<'a>(
    input: &'a DeriveInput,
    derive_name: &str,
) -> Result<&'a Fields, TokenStream2> {
    match &input.data {
        Data::Struct(data_struct) => Ok(&data_struct.fields),
        Data::Enum(_) => Err(syn::Error::new_spanned(
            &input.ident,
            format!("{derive_name} can only be derived for structs, not enums."),
        )
        .to_compile_error()),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            format!("{derive_name} cannot be derived for unions."),
        )
        .to_compile_error()),
    }
}

/// Copies `generics`, requiring every field type to implement `bound`.
pub fn bounded_generics(generics: &Generics, fields: &Fields, bound: &Path) -> Generics {
    let mut generics = generics.clone();
    let predicates = fields.iter().map(|field| -> WherePredicate {
        let field_type = &field.ty;
        parse_quote!(#field_type: #bound)
    });
    generics.make_where_clause().predicates.extend(predicates);
    generics
}

/// Builds `Self { .. }`, `Self(..)` or `Self` with one expression per
/// field, produced by `value` from the field's accessor.
pub fn construct<F>(fields: &Fields, mut value: F) -> TokenStream2
where
    F: FnMut(&Member, &syn::Type) -> TokenStream2,
{
    let members = fields.iter().enumerate().map(|(index, field)| {
        field.ident.clone().map_or_else(
            || Member::Unnamed(Index::from(index)),
            Member::Named,
        )
    });
    let values: Vec<TokenStream2> = members
        .clone()
        .zip(fields.iter())
        .map(|(member, field)| value(&member, &field.ty))
        .collect();

    match fields {
        Fields::Named(_) => {
            let members = members.collect::<Vec<_>>();
            quote! { Self { #(#members: #values),* } }
        }
        Fields::Unnamed(_) => quote! { Self(#(#values),*) },
        Fields::Unit => quote! { Self },
    }
}
