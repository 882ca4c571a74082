//! Pairing of endpoints with the validators covering their request types.

use crate::registration::{EndpointRegistration, ValidatorRegistration};
use rollcall_core::DiscoveryError;
use std::any::TypeId;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Transient working state of one registry build: the endpoint candidates
/// in scan order, and the request-type → validator map. Discarded once the
/// definitions are assembled.
#[derive(Debug, Default)]
pub(crate) struct PairingTable {
    candidates: Vec<EndpointRegistration>,
    validators: HashMap<TypeId, ValidatorRegistration>,
}

impl PairingTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record an endpoint candidate. Insertion order follows scan order and
    /// carries no meaning beyond deterministic iteration.
    pub(crate) fn add_endpoint(&mut self, registration: EndpointRegistration) {
        self.candidates.push(registration);
    }

    /// Record a validator under its request type. A second validator for an
    /// already-claimed request type is a hard configuration error.
    pub(crate) fn add_validator(
        &mut self,
        registration: ValidatorRegistration,
    ) -> Result<(), DiscoveryError> {
        match self.validators.entry(registration.request().id()) {
            Entry::Occupied(existing) => Err(DiscoveryError::DuplicateValidator {
                request: registration.request().name(),
                first: existing.get().validator().name(),
                second: registration.validator().name(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(registration);
                Ok(())
            }
        }
    }

    /// The validator covering `request`, if one was registered.
    pub(crate) fn resolve(&self, request: TypeId) -> Option<&ValidatorRegistration> {
        self.validators.get(&request)
    }

    pub(crate) fn candidates(&self) -> &[EndpointRegistration] {
        &self.candidates
    }

    pub(crate) fn validator_count(&self) -> usize {
        self.validators.len()
    }
}
