//! # rollcall - Startup-Time Endpoint Discovery
//!
//! `rollcall` builds the immutable endpoint registry a request-handling
//! framework routes against. At startup it gathers every registered
//! capability (endpoints, validators, event subscribers), pairs validators
//! with the endpoints sharing their request type, runs each endpoint's
//! self-configuration step, subscribes every event subscriber with the
//! external bus, and freezes the result behind an exactly-once lazy cell.
//!
//! Registration is explicit: types enter discovery through
//! const-constructible registrations, either submitted to the process-wide
//! `inventory` collection (usually via the `#[endpoint]`, `#[validator]`,
//! and `#[subscriber]` attributes from the `macros` feature) or assembled
//! by hand into a [`RegistrationSet`]. Nothing is ever found by reflective
//! enumeration.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rollcall::{
//!     Discovery, EmptyRequest, Endpoint, EndpointRegistration,
//!     EndpointSettings, RegistrationSet, RegistryCell,
//! };
//!
//! #[derive(Default)]
//! struct Ping {
//!     settings: EndpointSettings,
//! }
//!
//! impl Endpoint for Ping {
//!     fn configure(&mut self) -> Result<(), rollcall::BoxError> {
//!         self.settings.get("/ping").allow_anonymous();
//!         Ok(())
//!     }
//!
//!     fn settings(&self) -> &EndpointSettings {
//!         &self.settings
//!     }
//! }
//!
//! let set = RegistrationSet::new()
//!     .with(EndpointRegistration::new::<Ping, EmptyRequest>(module_path!()));
//!
//! let cell = Arc::new(RegistryCell::new(Discovery::with_set(set, bus)));
//! let registry = cell.definitions()?;   // pipeline runs exactly once
//! ```
//!
//! Discovery either completes or is fatal to startup: duplicate validators,
//! failing factories, and unusable endpoint settings all abort the build,
//! and the cell caches the failure for every later caller.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod definition;
mod discover;
mod pairing;
mod registration;
mod registry;
mod scan;
mod type_info;

pub mod testing;

// Capability traits and supporting types
pub use rollcall_core::{
    BoxError, DiscoveryError, DynEndpoint, DynValidator, EmptyRequest, Endpoint, EndpointSettings,
    ErasedEndpoint, ErasedValidator, EventBus, EventSubscriber, InvalidSettings, Request,
    ValidationFailure, Validator, Verbs,
};

// Registration
pub use registration::{
    Capability, EndpointFactory, EndpointRegistration, Registration, RegistrationSet,
    SubscriberFactory, SubscriberRegistration, ValidatorFactory, ValidatorRegistration,
};

// Scanning
pub use scan::EXCLUDED_COMPONENTS;

// Discovery pipeline and registry
pub use definition::{EndpointDefinition, ValidatorBinding};
pub use discover::Discovery;
pub use registry::{Registry, RegistryCell};
pub use type_info::TypeInfo;

// Registration attributes
#[cfg(feature = "macros")]
pub use rollcall_macros::{Request, endpoint, subscriber, validator};

// Re-exported for macro-generated registrations.
pub use inventory;
