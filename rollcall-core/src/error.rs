//! Error types for Rollcall.
//!
//! Discovery failures are fatal to startup and are never recovered locally.
//! [`DiscoveryError`] is `Clone` so the registry cell can cache the first
//! failure and re-raise it to every current and future caller.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Fatal errors raised while building the endpoint registry.
///
/// Any of these aborts the whole build; there is no partial registry. The
/// offending type is identifiable from the error detail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    /// No endpoint, validator, or subscriber registrations survived the
    /// component scan. The application is misconfigured or empty.
    #[error("unable to discover any endpoint, validator, or subscriber registrations")]
    NoRegistrations,

    /// Registrations were found, but not a single endpoint definition came
    /// out of the build.
    #[error("unable to discover any endpoint declarations")]
    NoEndpoints,

    /// Two validator types declare the same request type. There is no
    /// last-write-wins; this is a hard configuration error.
    #[error(
        "duplicate validator for request type `{request}`: \
         `{second}` conflicts with already-registered `{first}`"
    )]
    DuplicateValidator {
        /// The contested request type.
        request: &'static str,
        /// The validator registered first.
        first: &'static str,
        /// The validator whose registration was rejected.
        second: &'static str,
    },

    /// A registered factory failed to construct its endpoint or subscriber.
    #[error("failed to construct `{type_name}`: {reason}")]
    Instantiation {
        /// The type that could not be constructed.
        type_name: &'static str,
        /// The factory's failure, rendered to a message.
        reason: String,
    },

    /// An endpoint's configuration step failed or left its settings
    /// unusable.
    #[error("endpoint `{type_name}` could not be configured: {reason}")]
    Configuration {
        /// The endpoint whose configuration failed.
        type_name: &'static str,
        /// What went wrong.
        reason: String,
    },
}
