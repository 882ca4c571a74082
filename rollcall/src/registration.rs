//! Capability-typed registration tables.
//!
//! Every endpoint, validator, and event subscriber enters discovery through
//! an explicit registration: a const-constructible, `Copy` value naming the
//! registered type, the component (module path) it was registered from, and
//! a factory function for constructing instances. There is no reflective
//! enumeration anywhere; a type that never registers simply does not exist
//! as far as discovery is concerned.
//!
//! Registrations reach the engine one of two ways:
//!
//! - submitted to the process-wide `inventory` collection, usually by the
//!   `#[endpoint]` / `#[validator]` / `#[subscriber]` attributes, and
//!   gathered with [`RegistrationSet::from_inventory`];
//! - assembled by hand into a [`RegistrationSet`], which is how hosts with
//!   explicit wiring (and tests) drive discovery.

use crate::type_info::TypeInfo;
use rollcall_core::{
    BoxError, DynEndpoint, DynValidator, Endpoint, ErasedEndpoint, ErasedValidator, EventSubscriber,
    Request, Validator,
};
use std::fmt;
use std::sync::Arc;

/// Factory for registry-owned endpoint instances.
pub type EndpointFactory = fn() -> Result<Box<dyn DynEndpoint>, BoxError>;

/// Factory for validator instances, consumed by the validation engine.
pub type ValidatorFactory = fn() -> Result<Box<dyn DynValidator>, BoxError>;

/// Factory for event subscriber instances.
pub type SubscriberFactory = fn() -> Result<Arc<dyn EventSubscriber>, BoxError>;

fn default_endpoint<E, R>() -> Result<Box<dyn DynEndpoint>, BoxError>
where
    E: Endpoint<R> + Default,
    R: Request,
{
    Ok(Box::new(ErasedEndpoint::new(E::default())))
}

fn default_validator<V, R>() -> Result<Box<dyn DynValidator>, BoxError>
where
    V: Validator<R> + Default,
    R: Request,
{
    Ok(Box::new(ErasedValidator::new(V::default())))
}

fn default_subscriber<S>() -> Result<Arc<dyn EventSubscriber>, BoxError>
where
    S: EventSubscriber + Default,
{
    Ok(Arc::new(S::default()))
}

/// Registration of one endpoint type.
#[derive(Clone, Copy)]
pub struct EndpointRegistration {
    endpoint: TypeInfo,
    request: TypeInfo,
    component: &'static str,
    construct: EndpointFactory,
}

impl EndpointRegistration {
    /// Register `E` as the endpoint for request type `R`, constructed via
    /// `Default`. `component` is the registering module's path, normally
    /// `module_path!()`.
    pub const fn new<E, R>(component: &'static str) -> Self
    where
        E: Endpoint<R> + Default,
        R: Request,
    {
        Self {
            endpoint: TypeInfo::of::<E>(),
            request: TypeInfo::of::<R>(),
            component,
            construct: default_endpoint::<E, R>,
        }
    }

    /// Register `E` with an explicit, possibly fallible factory.
    pub const fn with_factory<E, R>(component: &'static str, construct: EndpointFactory) -> Self
    where
        E: Endpoint<R>,
        R: Request,
    {
        Self {
            endpoint: TypeInfo::of::<E>(),
            request: TypeInfo::of::<R>(),
            component,
            construct,
        }
    }

    /// The registered endpoint type.
    pub fn endpoint(&self) -> TypeInfo {
        self.endpoint
    }

    /// The request type this endpoint answers.
    pub fn request(&self) -> TypeInfo {
        self.request
    }

    /// The component this registration came from.
    pub fn component(&self) -> &'static str {
        self.component
    }

    /// The registered factory.
    pub fn factory(&self) -> EndpointFactory {
        self.construct
    }
}

impl fmt::Debug for EndpointRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointRegistration")
            .field("endpoint", &self.endpoint)
            .field("request", &self.request)
            .field("component", &self.component)
            .finish()
    }
}

/// Registration of one validator type.
#[derive(Clone, Copy)]
pub struct ValidatorRegistration {
    validator: TypeInfo,
    request: TypeInfo,
    component: &'static str,
    construct: ValidatorFactory,
}

impl ValidatorRegistration {
    /// Register `V` as the validator for request type `R`, constructed via
    /// `Default`.
    pub const fn new<V, R>(component: &'static str) -> Self
    where
        V: Validator<R> + Default,
        R: Request,
    {
        Self {
            validator: TypeInfo::of::<V>(),
            request: TypeInfo::of::<R>(),
            component,
            construct: default_validator::<V, R>,
        }
    }

    /// Register `V` with an explicit, possibly fallible factory.
    pub const fn with_factory<V, R>(component: &'static str, construct: ValidatorFactory) -> Self
    where
        V: Validator<R>,
        R: Request,
    {
        Self {
            validator: TypeInfo::of::<V>(),
            request: TypeInfo::of::<R>(),
            component,
            construct,
        }
    }

    /// The registered validator type.
    pub fn validator(&self) -> TypeInfo {
        self.validator
    }

    /// The request type this validator covers.
    pub fn request(&self) -> TypeInfo {
        self.request
    }

    /// The component this registration came from.
    pub fn component(&self) -> &'static str {
        self.component
    }

    /// The registered factory.
    pub fn factory(&self) -> ValidatorFactory {
        self.construct
    }
}

impl fmt::Debug for ValidatorRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegistration")
            .field("validator", &self.validator)
            .field("request", &self.request)
            .field("component", &self.component)
            .finish()
    }
}

/// Registration of one event subscriber type.
#[derive(Clone, Copy)]
pub struct SubscriberRegistration {
    subscriber: TypeInfo,
    component: &'static str,
    construct: SubscriberFactory,
}

impl SubscriberRegistration {
    /// Register `S` as an event subscriber, constructed via `Default`.
    pub const fn new<S>(component: &'static str) -> Self
    where
        S: EventSubscriber + Default,
    {
        Self {
            subscriber: TypeInfo::of::<S>(),
            component,
            construct: default_subscriber::<S>,
        }
    }

    /// Register `S` with an explicit, possibly fallible factory.
    pub const fn with_factory<S>(component: &'static str, construct: SubscriberFactory) -> Self
    where
        S: EventSubscriber,
    {
        Self {
            subscriber: TypeInfo::of::<S>(),
            component,
            construct,
        }
    }

    /// The registered subscriber type.
    pub fn subscriber(&self) -> TypeInfo {
        self.subscriber
    }

    /// The component this registration came from.
    pub fn component(&self) -> &'static str {
        self.component
    }

    /// The registered factory.
    pub fn factory(&self) -> SubscriberFactory {
        self.construct
    }
}

impl fmt::Debug for SubscriberRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberRegistration")
            .field("subscriber", &self.subscriber)
            .field("component", &self.component)
            .finish()
    }
}

/// The capability a registration declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Answers requests.
    Endpoint,
    /// Validates requests.
    Validator,
    /// Subscribes to process-wide events.
    Subscriber,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Capability::Endpoint => "endpoint",
            Capability::Validator => "validator",
            Capability::Subscriber => "subscriber",
        })
    }
}

/// One registration of any capability.
///
/// The capability is part of the registration itself, so classification is
/// explicit and total. A type wanting two capabilities submits two
/// registrations; each drives its own branch of the pipeline.
#[derive(Debug, Clone, Copy)]
pub enum Registration {
    /// An endpoint registration.
    Endpoint(EndpointRegistration),
    /// A validator registration.
    Validator(ValidatorRegistration),
    /// A subscriber registration.
    Subscriber(SubscriberRegistration),
}

impl Registration {
    /// The component this registration came from.
    pub fn component(&self) -> &'static str {
        match self {
            Registration::Endpoint(r) => r.component(),
            Registration::Validator(r) => r.component(),
            Registration::Subscriber(r) => r.component(),
        }
    }

    /// The declared capability.
    pub fn capability(&self) -> Capability {
        match self {
            Registration::Endpoint(_) => Capability::Endpoint,
            Registration::Validator(_) => Capability::Validator,
            Registration::Subscriber(_) => Capability::Subscriber,
        }
    }

    /// The registered type.
    pub fn type_info(&self) -> TypeInfo {
        match self {
            Registration::Endpoint(r) => r.endpoint(),
            Registration::Validator(r) => r.validator(),
            Registration::Subscriber(r) => r.subscriber(),
        }
    }
}

impl From<EndpointRegistration> for Registration {
    fn from(registration: EndpointRegistration) -> Self {
        Registration::Endpoint(registration)
    }
}

impl From<ValidatorRegistration> for Registration {
    fn from(registration: ValidatorRegistration) -> Self {
        Registration::Validator(registration)
    }
}

impl From<SubscriberRegistration> for Registration {
    fn from(registration: SubscriberRegistration) -> Self {
        Registration::Subscriber(registration)
    }
}

inventory::collect!(Registration);

/// The set of registrations discovery runs over.
///
/// Gather the process-wide collection with
/// [`from_inventory`](Self::from_inventory), or build a set by hand for
/// explicit wiring.
#[derive(Debug, Clone, Default)]
pub struct RegistrationSet {
    entries: Vec<Registration>,
}

impl RegistrationSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gather every registration submitted to the process-wide `inventory`
    /// collection.
    pub fn from_inventory() -> Self {
        Self {
            entries: inventory::iter::<Registration>.into_iter().copied().collect(),
        }
    }

    /// Add a registration, builder-style.
    pub fn with(mut self, registration: impl Into<Registration>) -> Self {
        self.push(registration);
        self
    }

    /// Add a registration.
    pub fn push(&mut self, registration: impl Into<Registration>) {
        self.entries.push(registration.into());
    }

    /// Iterate the set in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Registration> {
        self.entries.iter()
    }

    /// Number of registrations in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
