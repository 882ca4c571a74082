//! The event-subscription capability and the external event bus surface.

use std::sync::Arc;

/// A type that registers interest in process-wide events at startup.
///
/// Discovery instantiates each registered subscriber exactly once and
/// invokes [`subscribe`](Self::subscribe) with the external [`EventBus`].
/// The usual implementation hands itself straight to the bus:
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct OrderPlacedMailer;
///
/// impl EventSubscriber for OrderPlacedMailer {
///     fn subscribe(self: Arc<Self>, bus: &dyn EventBus) {
///         bus.accept(self);
///     }
/// }
/// ```
pub trait EventSubscriber: Send + Sync + 'static {
    /// Register this instance with the event bus. Invoked exactly once per
    /// process, during discovery.
    fn subscribe(self: Arc<Self>, bus: &dyn EventBus);

    /// The subscriber's type name, for diagnostics.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// The external event bus collaborator.
///
/// The only surface discovery relies on is accepting a subscriber
/// instance; delivery semantics are entirely the bus's own business.
pub trait EventBus: Send + Sync {
    /// Take ownership of one subscriber instance.
    fn accept(&self, subscriber: Arc<dyn EventSubscriber>);
}
