use crate::domain::payload::Payload;
use crate::domain::ports::PayloadProvider;
use tracing::trace;

/// Stateless factory for empty payloads.
///
/// Holds no data, so a single instance can be copied or shared freely
/// between threads; every call returns an independent payload.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PayloadFactory;

impl PayloadFactory {
    /// Creates a new `PayloadFactory` instance.
    pub fn new() -> Self {
        Self
    }

    /// Returns a new payload with every slot empty.
    pub fn new_instance<I, O, M, E>(&self) -> Payload<I, O, M, E> {
        trace!("Creating new payload instance");
        Payload::new()
    }
}

impl<I, O, M, E> PayloadProvider<I, O, M, E> for PayloadFactory {
    fn new_instance(&self) -> Payload<I, O, M, E> {
        PayloadFactory::new_instance(self)
    }
}
