//! The discovery pipeline: scan, classify, pair, subscribe, build.

use crate::definition::{EndpointDefinition, ValidatorBinding};
use crate::pairing::PairingTable;
use crate::registration::{
    EndpointRegistration, Registration, RegistrationSet, SubscriberRegistration,
};
use crate::registry::Registry;
use crate::scan::scan;
use rollcall_core::{DiscoveryError, EventBus};
use std::sync::Arc;
use tracing::debug;

/// One startup discovery run over a registration set.
///
/// The pipeline is three sequential passes:
///
/// 1. scan the non-excluded components and partition their registrations
///    into the pairing table (endpoints, validators) and the subscriber
///    list;
/// 2. instantiate every subscriber and hand it to the event bus; this is
///    the one side-effecting pass, kept apart from classification so that
///    "subscribe exactly once" does not depend on scan ordering;
/// 3. build an [`EndpointDefinition`] per endpoint candidate.
///
/// Any failure aborts the whole run; there is no partial registry.
pub struct Discovery {
    set: RegistrationSet,
    bus: Arc<dyn EventBus>,
}

impl Discovery {
    /// Discover over everything submitted to the process-wide `inventory`
    /// collection.
    pub fn new(bus: Arc<dyn EventBus>) -> Self {
        Self::with_set(RegistrationSet::from_inventory(), bus)
    }

    /// Discover over an explicitly assembled registration set.
    pub fn with_set(set: RegistrationSet, bus: Arc<dyn EventBus>) -> Self {
        Self { set, bus }
    }

    /// Run the pipeline once and produce the registry.
    pub fn run(&self) -> Result<Registry, DiscoveryError> {
        let mut table = PairingTable::new();
        let mut subscribers: Vec<&SubscriberRegistration> = Vec::new();
        let mut discovered = 0usize;

        for registration in scan(&self.set) {
            discovered += 1;
            match registration {
                Registration::Endpoint(endpoint) => table.add_endpoint(*endpoint),
                Registration::Validator(validator) => table.add_validator(*validator)?,
                Registration::Subscriber(subscriber) => subscribers.push(subscriber),
            }
        }

        if discovered == 0 {
            return Err(DiscoveryError::NoRegistrations);
        }

        debug!(
            endpoints = table.candidates().len(),
            validators = table.validator_count(),
            subscribers = subscribers.len(),
            "classified registrations"
        );

        for registration in subscribers {
            let subscriber =
                (registration.factory())().map_err(|error| DiscoveryError::Instantiation {
                    type_name: registration.subscriber().name(),
                    reason: error.to_string(),
                })?;
            subscriber.subscribe(self.bus.as_ref());
            debug!(
                subscriber = registration.subscriber().name(),
                "subscribed event subscriber"
            );
        }

        let mut definitions = Vec::with_capacity(table.candidates().len());
        for candidate in table.candidates() {
            definitions.push(build_definition(candidate, &table)?);
        }

        if definitions.is_empty() {
            return Err(DiscoveryError::NoEndpoints);
        }

        Ok(Registry::new(definitions))
    }
}

fn build_definition(
    candidate: &EndpointRegistration,
    table: &PairingTable,
) -> Result<EndpointDefinition, DiscoveryError> {
    let mut instance =
        (candidate.factory())().map_err(|error| DiscoveryError::Instantiation {
            type_name: candidate.endpoint().name(),
            reason: error.to_string(),
        })?;

    instance
        .configure()
        .map_err(|error| DiscoveryError::Configuration {
            type_name: candidate.endpoint().name(),
            reason: error.to_string(),
        })?;

    let validator = table
        .resolve(candidate.request().id())
        .map(ValidatorBinding::new);

    let settings = instance.settings().clone();
    settings
        .validate()
        .map_err(|error| DiscoveryError::Configuration {
            type_name: candidate.endpoint().name(),
            reason: error.to_string(),
        })?;

    debug!(
        endpoint = candidate.endpoint().name(),
        request = candidate.request().name(),
        validator = validator.as_ref().map(|v| v.validator().name()),
        routes = ?settings.route_patterns(),
        "built endpoint definition"
    );

    Ok(EndpointDefinition::new(
        candidate.endpoint(),
        candidate.request(),
        validator,
        settings,
        candidate.factory(),
    ))
}
