//! Payment collection
//!
//! [`builder`] assembles a persisted record from settlement output with
//! the documented per-field defaults; [`service`] runs the whole
//! collection flow against the store boundaries.

mod builder;
mod service;

pub use builder::*;
pub use service::*;
