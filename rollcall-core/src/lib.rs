//! # rollcall-core
//!
//! Core capability traits for the Rollcall endpoint discovery engine.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! application code that declares endpoints, validators, and event
//! subscribers without needing the full `rollcall` engine.
//!
//! # Capability Model
//!
//! Rollcall recognizes three capabilities, each declared by implementing a
//! trait from this crate:
//!
//! ## [`Endpoint`]
//!
//! A type that answers requests of one request type. Endpoints carry an
//! [`EndpointSettings`] object which they populate during their one-time
//! [`configure`](Endpoint::configure) step: route patterns, permitted
//! verbs, access policy. The discovery engine runs `configure` exactly once
//! per endpoint at startup and snapshots the settings into the registry.
//!
//! ## [`Validator`]
//!
//! A type that validates instances of one request type before an endpoint
//! processes them. The request type a validator covers is declared through
//! its type parameter binding; discovery pairs each validator with the
//! endpoint sharing that request type.
//!
//! ## [`EventSubscriber`]
//!
//! A type that registers interest in process-wide events at startup.
//! Discovery instantiates each subscriber once and hands it to the external
//! [`EventBus`].
//!
//! # Request Types
//!
//! Request payloads are plain data types marked with [`Request`]. An
//! endpoint declared without a request type parameter is bound to the
//! [`EmptyRequest`] sentinel.
//!
//! # Error Types
//!
//! - [`DiscoveryError`] - fatal startup discovery failures
//! - [`ValidationFailure`] - a single failed validation rule
//! - [`InvalidSettings`] - unusable endpoint settings

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod endpoint;
mod error;
mod request;
mod settings;
mod subscriber;
mod validator;

// Re-exports
pub use endpoint::{DynEndpoint, Endpoint, ErasedEndpoint};
pub use error::{BoxError, DiscoveryError};
pub use request::{EmptyRequest, Request};
pub use settings::{EndpointSettings, InvalidSettings, Verbs};
pub use subscriber::{EventBus, EventSubscriber};
pub use validator::{DynValidator, ErasedValidator, ValidationFailure, Validator};
