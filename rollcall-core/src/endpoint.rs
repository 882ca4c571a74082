//! The request-handler capability.
//!
//! An endpoint answers requests of one request type. At startup the
//! discovery engine instantiates each registered endpoint once, runs its
//! [`configure`](Endpoint::configure) step, and snapshots the resulting
//! [`EndpointSettings`] into the registry. Request execution itself is the
//! routing layer's concern and never happens during discovery.
//!
//! # Static vs Dynamic Dispatch
//!
//! `Endpoint` is generic over its request type for precise pairing with
//! validators. For heterogeneous storage in the registry, use the
//! object-safe [`DynEndpoint`] together with the [`ErasedEndpoint`]
//! adapter.

use crate::{
    error::BoxError,
    request::{EmptyRequest, Request},
    settings::EndpointSettings,
};
use std::marker::PhantomData;

/// A type that answers requests of type `R`.
///
/// Declaring the request type through the type parameter is what pairs an
/// endpoint with the validator covering the same request type. An impl
/// written without a type argument is bound to the [`EmptyRequest`]
/// sentinel.
///
/// Implementations hold their own [`EndpointSettings`] value, mutate it in
/// [`configure`](Self::configure), and hand it back through
/// [`settings`](Self::settings):
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct CreateOrder {
///     settings: EndpointSettings,
/// }
///
/// impl Endpoint<CreateOrderRequest> for CreateOrder {
///     fn configure(&mut self) -> Result<(), BoxError> {
///         self.settings.post("/orders");
///         Ok(())
///     }
///
///     fn settings(&self) -> &EndpointSettings {
///         &self.settings
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an endpoint for requests of type `{R}`",
    label = "missing `Endpoint<{R}>` implementation",
    note = "Endpoints must define `configure` and `settings` for the request type `{R}`."
)]
pub trait Endpoint<R: Request = EmptyRequest>: Send + Sync + 'static {
    /// One-time self-configuration, run by discovery before the endpoint's
    /// settings are read. Expected to populate the settings object with at
    /// least one route and one verb. A failure here aborts startup.
    fn configure(&mut self) -> Result<(), BoxError>;

    /// Accessor for the settings object populated by
    /// [`configure`](Self::configure).
    fn settings(&self) -> &EndpointSettings;
}

/// Object-safe version of [`Endpoint`], independent of the request type.
///
/// Use this trait where endpoints of different request types share one
/// collection. Obtain instances through [`ErasedEndpoint`].
pub trait DynEndpoint: Send + Sync + 'static {
    /// See [`Endpoint::configure`].
    fn configure(&mut self) -> Result<(), BoxError>;

    /// See [`Endpoint::settings`].
    fn settings(&self) -> &EndpointSettings;
}

/// Adapter erasing an [`Endpoint`]'s request type parameter.
pub struct ErasedEndpoint<E, R> {
    inner: E,
    _request: PhantomData<fn() -> R>,
}

impl<E, R> ErasedEndpoint<E, R>
where
    E: Endpoint<R>,
    R: Request,
{
    /// Wrap a concrete endpoint for storage as a [`DynEndpoint`].
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            _request: PhantomData,
        }
    }
}

impl<E, R> DynEndpoint for ErasedEndpoint<E, R>
where
    E: Endpoint<R>,
    R: Request,
{
    fn configure(&mut self) -> Result<(), BoxError> {
        self.inner.configure()
    }

    fn settings(&self) -> &EndpointSettings {
        self.inner.settings()
    }
}
