//! A small result object for handing the outcome of a domain operation to
//! whoever presents it.
//!
//! A service fills a [`Payload`] with a status, the input it received, the
//! output it produced, messages and any extras, then returns it. The caller
//! branches on the status to decide how to read the rest.

pub mod application;
pub mod domain;
pub mod error;

pub use application::factory::PayloadFactory;
pub use domain::payload::{Payload, PayloadParts};
pub use domain::ports::{PayloadProvider, PayloadProviderBox};
pub use domain::status::Status;
pub use error::{PayloadError, Result};
