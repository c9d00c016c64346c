//! `#[derive(Request)]` — implements `Request` with the response type
//! taken from the `#[response(T)]` attribute.

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Type, parse_macro_input};

/// Implementation of the `Request` derive.
pub fn derive_request_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut response: Option<Type> = None;
    for attr in &input.attrs {
        if attr.path().is_ident("response") {
            if response.is_some() {
                return syn::Error::new_spanned(attr, "duplicate #[response(...)] attribute")
                    .to_compile_error()
                    .into();
            }
            match attr.parse_args::<Type>() {
                Ok(ty) => response = Some(ty),
                Err(err) => return err.to_compile_error().into(),
            }
        }
    }

    let response = match response {
        Some(ty) => quote!(#ty),
        None => quote!(()),
    };

    let expanded = quote! {
        impl #impl_generics ::courier::Request for #name #ty_generics #where_clause {
            type Response = #response;
        }
    };

    TokenStream::from(expanded)
}
