#![allow(dead_code)] // not every test binary uses every fixture

use rollcall::{
    BoxError, DynEndpoint, EmptyRequest, Endpoint, EndpointRegistration, EndpointSettings,
    EventBus, EventSubscriber, Request, SubscriberRegistration, ValidationFailure, Validator,
    ValidatorRegistration,
};
use std::sync::Arc;

/// Component name used for fixture registrations; not on the exclusion
/// list.
pub const APP: &str = "storefront::orders";

// ============================================================================
// Request Types
// ============================================================================

pub struct CreateOrderRequest {
    pub customer_id: u64,
}

impl Request for CreateOrderRequest {}

pub struct RefundRequest {
    pub order_id: u64,
}

impl Request for RefundRequest {}

// ============================================================================
// Endpoints
// ============================================================================

/// Request-less endpoint; bound to the `EmptyRequest` sentinel.
#[derive(Default)]
pub struct PingEndpoint {
    settings: EndpointSettings,
}

impl Endpoint for PingEndpoint {
    fn configure(&mut self) -> Result<(), BoxError> {
        self.settings.get("/ping").allow_anonymous();
        Ok(())
    }

    fn settings(&self) -> &EndpointSettings {
        &self.settings
    }
}

#[derive(Default)]
pub struct CreateOrderEndpoint {
    settings: EndpointSettings,
}

impl Endpoint<CreateOrderRequest> for CreateOrderEndpoint {
    fn configure(&mut self) -> Result<(), BoxError> {
        self.settings.post("/orders").roles(["clerk"]);
        Ok(())
    }

    fn settings(&self) -> &EndpointSettings {
        &self.settings
    }
}

#[derive(Default)]
pub struct RefundEndpoint {
    settings: EndpointSettings,
}

impl Endpoint<RefundRequest> for RefundEndpoint {
    fn configure(&mut self) -> Result<(), BoxError> {
        self.settings.post("/orders/{id}/refund");
        Ok(())
    }

    fn settings(&self) -> &EndpointSettings {
        &self.settings
    }
}

/// Configuration step fails outright.
#[derive(Default)]
pub struct BrokenConfigEndpoint {
    settings: EndpointSettings,
}

impl Endpoint for BrokenConfigEndpoint {
    fn configure(&mut self) -> Result<(), BoxError> {
        Err("route table unavailable".into())
    }

    fn settings(&self) -> &EndpointSettings {
        &self.settings
    }
}

/// Configuration step succeeds but configures nothing usable.
#[derive(Default)]
pub struct BareEndpoint {
    settings: EndpointSettings,
}

impl Endpoint for BareEndpoint {
    fn configure(&mut self) -> Result<(), BoxError> {
        Ok(())
    }

    fn settings(&self) -> &EndpointSettings {
        &self.settings
    }
}

/// Endpoint whose registered factory always fails.
#[derive(Default)]
pub struct UnbuildableEndpoint {
    settings: EndpointSettings,
}

impl Endpoint for UnbuildableEndpoint {
    fn configure(&mut self) -> Result<(), BoxError> {
        self.settings.get("/unreachable");
        Ok(())
    }

    fn settings(&self) -> &EndpointSettings {
        &self.settings
    }
}

pub fn failing_endpoint_factory() -> Result<Box<dyn DynEndpoint>, BoxError> {
    Err("connection pool missing".into())
}

pub fn unbuildable_endpoint() -> EndpointRegistration {
    EndpointRegistration::with_factory::<UnbuildableEndpoint, EmptyRequest>(
        APP,
        failing_endpoint_factory,
    )
}

/// A type carrying both the endpoint and subscriber capabilities, via two
/// independent registrations.
#[derive(Default)]
pub struct AuditEndpoint {
    settings: EndpointSettings,
}

impl Endpoint for AuditEndpoint {
    fn configure(&mut self) -> Result<(), BoxError> {
        self.settings.get("/audit");
        Ok(())
    }

    fn settings(&self) -> &EndpointSettings {
        &self.settings
    }
}

impl EventSubscriber for AuditEndpoint {
    fn subscribe(self: Arc<Self>, bus: &dyn EventBus) {
        bus.accept(self);
    }
}

// ============================================================================
// Validators
// ============================================================================

#[derive(Default)]
pub struct CreateOrderValidator;

impl Validator<CreateOrderRequest> for CreateOrderValidator {
    fn validate(&self, request: &CreateOrderRequest) -> Result<(), ValidationFailure> {
        if request.customer_id == 0 {
            return Err(ValidationFailure::field("customer_id", "must be non-zero"));
        }
        Ok(())
    }
}

/// Second validator over `CreateOrderRequest`, for duplicate detection.
#[derive(Default)]
pub struct ConflictingOrderValidator;

impl Validator<CreateOrderRequest> for ConflictingOrderValidator {
    fn validate(&self, _request: &CreateOrderRequest) -> Result<(), ValidationFailure> {
        Ok(())
    }
}

/// Validator bound to the `EmptyRequest` sentinel.
#[derive(Default)]
pub struct EmptyRequestValidator;

impl Validator<EmptyRequest> for EmptyRequestValidator {
    fn validate(&self, _request: &EmptyRequest) -> Result<(), ValidationFailure> {
        Ok(())
    }
}

// ============================================================================
// Subscribers
// ============================================================================

#[derive(Default)]
pub struct OrderPlacedMailer;

impl EventSubscriber for OrderPlacedMailer {
    fn subscribe(self: Arc<Self>, bus: &dyn EventBus) {
        bus.accept(self);
    }
}

#[derive(Default)]
pub struct InventoryProjection;

impl EventSubscriber for InventoryProjection {
    fn subscribe(self: Arc<Self>, bus: &dyn EventBus) {
        bus.accept(self);
    }
}

pub struct UnbuildableSubscriber;

impl EventSubscriber for UnbuildableSubscriber {
    fn subscribe(self: Arc<Self>, bus: &dyn EventBus) {
        bus.accept(self);
    }
}

pub fn failing_subscriber_factory() -> Result<Arc<dyn EventSubscriber>, BoxError> {
    Err("message broker offline".into())
}

pub fn unbuildable_subscriber() -> SubscriberRegistration {
    SubscriberRegistration::with_factory::<UnbuildableSubscriber>(APP, failing_subscriber_factory)
}

// ============================================================================
// Registration helpers
// ============================================================================

pub fn ping() -> EndpointRegistration {
    EndpointRegistration::new::<PingEndpoint, EmptyRequest>(APP)
}

pub fn create_order() -> EndpointRegistration {
    EndpointRegistration::new::<CreateOrderEndpoint, CreateOrderRequest>(APP)
}

pub fn refund() -> EndpointRegistration {
    EndpointRegistration::new::<RefundEndpoint, RefundRequest>(APP)
}

pub fn create_order_validator() -> ValidatorRegistration {
    ValidatorRegistration::new::<CreateOrderValidator, CreateOrderRequest>(APP)
}

pub fn conflicting_order_validator() -> ValidatorRegistration {
    ValidatorRegistration::new::<ConflictingOrderValidator, CreateOrderRequest>(APP)
}

pub fn empty_request_validator() -> ValidatorRegistration {
    ValidatorRegistration::new::<EmptyRequestValidator, EmptyRequest>(APP)
}

pub fn order_placed_mailer() -> SubscriberRegistration {
    SubscriberRegistration::new::<OrderPlacedMailer>(APP)
}

pub fn inventory_projection() -> SubscriberRegistration {
    SubscriberRegistration::new::<InventoryProjection>(APP)
}
