//! Application layer providing the concrete payload factory.

pub mod factory;
