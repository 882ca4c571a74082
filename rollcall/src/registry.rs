//! The immutable endpoint registry and its one-shot lazy cell.

use crate::definition::EndpointDefinition;
use crate::discover::Discovery;
use rollcall_core::DiscoveryError;
use std::sync::OnceLock;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// The immutable, process-lifetime collection of endpoint definitions.
///
/// Built exactly once by [`Discovery::run`]; never empty; exclusively owns
/// its entries.
#[derive(Debug)]
pub struct Registry {
    definitions: Box<[EndpointDefinition]>,
}

impl Registry {
    pub(crate) fn new(definitions: Vec<EndpointDefinition>) -> Self {
        Self {
            definitions: definitions.into_boxed_slice(),
        }
    }

    /// All definitions, in discovery order.
    pub fn definitions(&self) -> &[EndpointDefinition] {
        &self.definitions
    }

    /// Iterate the definitions.
    pub fn iter(&self) -> impl Iterator<Item = &EndpointDefinition> {
        self.definitions.iter()
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the registry holds no definitions. A discovery run that
    /// would produce an empty registry fails instead, so this is only ever
    /// `false` on a built registry.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a EndpointDefinition;
    type IntoIter = std::slice::Iter<'a, EndpointDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions.iter()
    }
}

/// An exactly-once, thread-safe lazy wrapper around one [`Discovery`] run.
///
/// The host application constructs a cell during its initialization phase
/// and passes it (typically in an `Arc`) to the routing layer; there is no
/// ambient global. The first [`definitions`](Self::definitions) call runs
/// the pipeline; concurrent first callers block until that one run
/// completes and then observe the identical result. A failed run is cached
/// and re-raised to every later caller: a process with a broken registry
/// never heals by retrying discovery.
///
/// ```rust,ignore
/// let cell = Arc::new(RegistryCell::new(Discovery::new(bus)));
/// let registry = cell.definitions()?;
/// ```
pub struct RegistryCell {
    discovery: Discovery,
    built: OnceLock<(Result<Registry, DiscoveryError>, Duration)>,
}

impl RegistryCell {
    /// Wrap a discovery run in a lazy cell.
    pub fn new(discovery: Discovery) -> Self {
        Self {
            discovery,
            built: OnceLock::new(),
        }
    }

    /// The registry, building it on first call.
    ///
    /// At most one thread ever executes the pipeline; every caller,
    /// including callers arriving after a failure, observes the same
    /// cached outcome.
    pub fn definitions(&self) -> Result<&Registry, DiscoveryError> {
        let (result, _) = self.built.get_or_init(|| {
            let started = Instant::now();
            let result = self.discovery.run();
            let elapsed = started.elapsed();
            match &result {
                Ok(registry) => info!(
                    endpoints = registry.len(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "endpoint discovery complete"
                ),
                Err(error) => error!(%error, "endpoint discovery failed"),
            }
            (result, elapsed)
        });
        result.as_ref().map_err(Clone::clone)
    }

    /// Wall-clock duration of the one discovery run, for observability
    /// tooling. `None` until the run has happened; recorded for failed
    /// runs too.
    pub fn build_duration(&self) -> Option<Duration> {
        self.built.get().map(|(_, elapsed)| *elapsed)
    }

    /// Whether the cell holds a successfully built registry.
    pub fn is_ready(&self) -> bool {
        matches!(self.built.get(), Some((Ok(_), _)))
    }
}
