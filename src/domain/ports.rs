use super::payload::Payload;
use serde_json::Value;

/// Hands out fresh, empty payloads.
///
/// Services that want their payload construction to be swappable (for
/// instance to pre-populate extras, or to observe creation in tests) take a
/// `PayloadProviderBox` instead of calling `Payload::new` directly.
pub trait PayloadProvider<I = Value, O = Value, M = Value, E = Value>: Send + Sync {
    fn new_instance(&self) -> Payload<I, O, M, E>;
}

pub type PayloadProviderBox<I = Value, O = Value, M = Value, E = Value> =
    Box<dyn PayloadProvider<I, O, M, E>>;
