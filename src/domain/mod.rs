//! Domain types shared between the service layer that fills a payload and
//! the presentation layer that reads it.

pub mod payload;
pub mod ports;
pub mod status;
