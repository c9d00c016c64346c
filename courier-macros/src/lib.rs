//! Derive macros for the Courier dispatch library.
//!
//! These macros emit impls against the `courier` facade crate paths, so
//! they are meant to be used through `courier` with the `macros` feature.

use proc_macro::TokenStream;

mod notification;
mod request;

/// Derive macro for implementing the `Request` trait.
///
/// The response type is declared with the `#[response(T)]` attribute and
/// defaults to `()` when absent.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Request)]
/// #[response(u64)]
/// struct CreateCustomer {
///     name: String,
/// }
/// ```
#[proc_macro_derive(Request, attributes(response))]
pub fn derive_request(input: TokenStream) -> TokenStream {
    request::derive_request_impl(input)
}

/// Derive macro for implementing the `Notification` trait.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone, Notification)]
/// struct OrderPlaced {
///     order_id: u64,
/// }
/// ```
#[proc_macro_derive(Notification)]
pub fn derive_notification(input: TokenStream) -> TokenStream {
    notification::derive_notification_impl(input)
}
