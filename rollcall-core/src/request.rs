//! Request marker trait and the empty-request sentinel.

/// A marker trait for request payload types.
///
/// Requests must be `Send + Sync + 'static` so registrations can be shared
/// freely across threads.
///
/// # Example
///
/// ```rust,ignore
/// struct CreateOrderRequest {
///     customer_id: u64,
/// }
///
/// impl Request for CreateOrderRequest {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Request",
    label = "must be `Send + Sync + 'static`",
    note = "Mark request payload types with `impl Request for {Self} {{}}` or `#[derive(Request)]`."
)]
pub trait Request: Send + Sync + 'static {}

/// The sentinel request type bound by endpoints declared without a request
/// type parameter.
///
/// An `impl Endpoint for Ping` (no type argument) is equivalent to
/// `impl Endpoint<EmptyRequest> for Ping`, and pairs only with a validator
/// that is itself declared over `EmptyRequest`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyRequest;

impl Request for EmptyRequest {}
