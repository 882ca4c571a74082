//! The input-validation capability.
//!
//! A validator covers exactly one request type, declared through its type
//! parameter binding. Discovery pairs each validator with the endpoint
//! sharing that request type; running validators against live requests is
//! an external engine's concern.

use crate::request::Request;
use std::{any::Any, marker::PhantomData};
use thiserror::Error;

/// A type that validates instances of request type `R` before an endpoint
/// processes them.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a validator for requests of type `{R}`",
    label = "missing `Validator<{R}>` implementation",
    note = "Validators must declare the request type they cover, e.g. `impl Validator<MyRequest>`."
)]
pub trait Validator<R: Request>: Send + Sync + 'static {
    /// Check one request instance.
    fn validate(&self, request: &R) -> Result<(), ValidationFailure>;
}

/// A single failed validation rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationFailure {
    field: Option<String>,
    message: String,
}

impl ValidationFailure {
    /// A failure not tied to a specific field.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }

    /// A failure on one named field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// The offending field, if the rule named one.
    pub fn field_name(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Object-safe version of [`Validator`], independent of the request type.
///
/// The request is passed as `&dyn Any` and downcast inside the adapter, so
/// validators over different request types can share one table.
pub trait DynValidator: Send + Sync + 'static {
    /// Validate a type-erased request instance.
    ///
    /// Fails with a type-mismatch [`ValidationFailure`] if `request` is not
    /// the request type this validator covers.
    fn validate_dyn(&self, request: &dyn Any) -> Result<(), ValidationFailure>;
}

/// Adapter erasing a [`Validator`]'s request type parameter.
pub struct ErasedValidator<V, R> {
    inner: V,
    _request: PhantomData<fn() -> R>,
}

impl<V, R> ErasedValidator<V, R>
where
    V: Validator<R>,
    R: Request,
{
    /// Wrap a concrete validator for storage as a [`DynValidator`].
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            _request: PhantomData,
        }
    }
}

impl<V, R> DynValidator for ErasedValidator<V, R>
where
    V: Validator<R>,
    R: Request,
{
    fn validate_dyn(&self, request: &dyn Any) -> Result<(), ValidationFailure> {
        match request.downcast_ref::<R>() {
            Some(request) => self.inner.validate(request),
            None => Err(ValidationFailure::new(format!(
                "expected a request of type `{}`",
                std::any::type_name::<R>()
            ))),
        }
    }
}
