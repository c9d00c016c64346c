//! Request trait for request/response dispatch.

/// A value describing one unit of work with an expected single response type.
///
/// The associated [`Response`](Request::Response) type binds a request to
/// what its handler must produce, so a mismatched handler fails to compile
/// at registration rather than at call time.
///
/// # Example
///
/// ```rust,ignore
/// struct CreateCustomer { name: String }
///
/// impl Request for CreateCustomer {
///     type Response = u64; // the new customer's id
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Request",
    label = "missing `Request` implementation",
    note = "Declare the expected response type: `impl Request for {Self} {{ type Response = ...; }}`."
)]
pub trait Request: Send + 'static {
    /// The value the request's handler produces on success.
    type Response: Send + 'static;
}
