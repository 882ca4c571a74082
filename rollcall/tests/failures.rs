//! Fatal discovery failures: every error aborts the whole build.

use rollcall::testing::RecordingBus;
use rollcall::{Discovery, DiscoveryError, EmptyRequest, EndpointRegistration, RegistrationSet};
use std::sync::Arc;

mod common;
use common::{
    BareEndpoint, BrokenConfigEndpoint, OrderPlacedMailer, conflicting_order_validator,
    create_order, create_order_validator, order_placed_mailer, ping, unbuildable_endpoint,
    unbuildable_subscriber,
};

#[test]
fn duplicate_validator_is_a_hard_error() {
    let set = RegistrationSet::new()
        .with(create_order())
        .with(create_order_validator())
        .with(conflicting_order_validator());

    let error = Discovery::with_set(set, Arc::new(RecordingBus::new()))
        .run()
        .unwrap_err();

    match error {
        DiscoveryError::DuplicateValidator {
            request,
            first,
            second,
        } => {
            assert!(request.ends_with("CreateOrderRequest"));
            assert!(first.ends_with("CreateOrderValidator"));
            assert!(second.ends_with("ConflictingOrderValidator"));
        }
        other => panic!("expected DuplicateValidator, got {other:?}"),
    }
}

#[test]
fn failing_endpoint_factory_aborts_the_build() {
    let set = RegistrationSet::new()
        .with(ping())
        .with(unbuildable_endpoint());

    let error = Discovery::with_set(set, Arc::new(RecordingBus::new()))
        .run()
        .unwrap_err();

    match error {
        DiscoveryError::Instantiation { type_name, reason } => {
            assert!(type_name.ends_with("UnbuildableEndpoint"));
            assert_eq!(reason, "connection pool missing");
        }
        other => panic!("expected Instantiation, got {other:?}"),
    }
}

#[test]
fn failing_subscriber_factory_aborts_the_build() {
    let set = RegistrationSet::new()
        .with(ping())
        .with(unbuildable_subscriber());

    let error = Discovery::with_set(set, Arc::new(RecordingBus::new()))
        .run()
        .unwrap_err();

    match error {
        DiscoveryError::Instantiation { type_name, reason } => {
            assert!(type_name.ends_with("UnbuildableSubscriber"));
            assert_eq!(reason, "message broker offline");
        }
        other => panic!("expected Instantiation, got {other:?}"),
    }
}

#[test]
fn failing_configure_step_aborts_the_build() {
    let set = RegistrationSet::new().with(EndpointRegistration::new::<
        BrokenConfigEndpoint,
        EmptyRequest,
    >(common::APP));

    let error = Discovery::with_set(set, Arc::new(RecordingBus::new()))
        .run()
        .unwrap_err();

    match error {
        DiscoveryError::Configuration { type_name, reason } => {
            assert!(type_name.ends_with("BrokenConfigEndpoint"));
            assert_eq!(reason, "route table unavailable");
        }
        other => panic!("expected Configuration, got {other:?}"),
    }
}

#[test]
fn unusable_settings_are_a_configuration_error() {
    let set = RegistrationSet::new()
        .with(EndpointRegistration::new::<BareEndpoint, EmptyRequest>(
            common::APP,
        ));

    let error = Discovery::with_set(set, Arc::new(RecordingBus::new()))
        .run()
        .unwrap_err();

    match error {
        DiscoveryError::Configuration { type_name, reason } => {
            assert!(type_name.ends_with("BareEndpoint"));
            assert_eq!(reason, "no route patterns configured");
        }
        other => panic!("expected Configuration, got {other:?}"),
    }
}

#[test]
fn empty_registration_set_fails_discovery() {
    let error = Discovery::with_set(RegistrationSet::new(), Arc::new(RecordingBus::new()))
        .run()
        .unwrap_err();

    assert_eq!(error, DiscoveryError::NoRegistrations);
}

#[test]
fn all_registrations_excluded_fails_discovery() {
    let set = RegistrationSet::new().with(EndpointRegistration::new::<
        common::PingEndpoint,
        EmptyRequest,
    >("rollcall::fixtures"));

    let error = Discovery::with_set(set, Arc::new(RecordingBus::new()))
        .run()
        .unwrap_err();

    assert_eq!(error, DiscoveryError::NoRegistrations);
}

#[test]
fn subscribers_alone_do_not_make_a_registry() {
    let bus = Arc::new(RecordingBus::new());
    let set = RegistrationSet::new()
        .with(order_placed_mailer())
        .with(create_order_validator());

    let error = Discovery::with_set(set, bus.clone()).run().unwrap_err();

    // Subscription still happened; the build then failed for want of a
    // single endpoint definition.
    assert_eq!(error, DiscoveryError::NoEndpoints);
    assert_eq!(bus.count_of::<OrderPlacedMailer>(), 1);
}
