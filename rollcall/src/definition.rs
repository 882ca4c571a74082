//! Registry entries produced by the definition builder.

use crate::registration::{EndpointFactory, ValidatorFactory, ValidatorRegistration};
use crate::type_info::TypeInfo;
use rollcall_core::{DiscoveryError, DynEndpoint, DynValidator, EndpointSettings};
use std::fmt;

/// A validator paired to an endpoint definition.
#[derive(Clone, Copy)]
pub struct ValidatorBinding {
    validator: TypeInfo,
    construct: ValidatorFactory,
}

impl ValidatorBinding {
    pub(crate) fn new(registration: &ValidatorRegistration) -> Self {
        Self {
            validator: registration.validator(),
            construct: registration.factory(),
        }
    }

    /// The bound validator type.
    pub fn validator(&self) -> TypeInfo {
        self.validator
    }

    /// Construct a validator instance for the validation engine.
    pub fn instantiate(&self) -> Result<Box<dyn DynValidator>, DiscoveryError> {
        (self.construct)().map_err(|error| DiscoveryError::Instantiation {
            type_name: self.validator.name(),
            reason: error.to_string(),
        })
    }
}

impl fmt::Debug for ValidatorBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValidatorBinding")
            .field(&self.validator)
            .finish()
    }
}

/// One entry of the endpoint registry: an endpoint type, the request type
/// it answers, its optional validator, and the settings snapshotted from
/// its configuration step. Immutable once built.
pub struct EndpointDefinition {
    endpoint: TypeInfo,
    request: TypeInfo,
    validator: Option<ValidatorBinding>,
    settings: EndpointSettings,
    construct: EndpointFactory,
}

impl EndpointDefinition {
    pub(crate) fn new(
        endpoint: TypeInfo,
        request: TypeInfo,
        validator: Option<ValidatorBinding>,
        settings: EndpointSettings,
        construct: EndpointFactory,
    ) -> Self {
        Self {
            endpoint,
            request,
            validator,
            settings,
            construct,
        }
    }

    /// The endpoint type.
    pub fn endpoint(&self) -> TypeInfo {
        self.endpoint
    }

    /// The request type the endpoint answers.
    pub fn request(&self) -> TypeInfo {
        self.request
    }

    /// The validator covering this endpoint's request type, if any.
    pub fn validator(&self) -> Option<&ValidatorBinding> {
        self.validator.as_ref()
    }

    /// The settings populated by the endpoint's configuration step.
    pub fn settings(&self) -> &EndpointSettings {
        &self.settings
    }

    /// Construct a fresh endpoint instance, for the routing layer.
    pub fn instantiate(&self) -> Result<Box<dyn DynEndpoint>, DiscoveryError> {
        (self.construct)().map_err(|error| DiscoveryError::Instantiation {
            type_name: self.endpoint.name(),
            reason: error.to_string(),
        })
    }
}

impl fmt::Debug for EndpointDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointDefinition")
            .field("endpoint", &self.endpoint)
            .field("request", &self.request)
            .field("validator", &self.validator)
            .field("settings", &self.settings)
            .finish()
    }
}
