//! `#[derive(Notification)]` — implements the `Notification` marker.

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

/// Implementation of the `Notification` derive.
pub fn derive_notification_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::courier::Notification for #name #ty_generics #where_clause {}
    };

    TokenStream::from(expanded)
}
