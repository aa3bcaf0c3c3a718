//! Data models
//!
//! Shared between the billing engine and any API/frontend layer.
//! Monetary fields are `f64` at this boundary; all arithmetic happens
//! in `rust_decimal` inside the engine. All entity IDs are `i64`.

pub mod payment;
pub mod provider;
pub mod subscriber;

// Re-exports
pub use payment::*;
pub use provider::*;
pub use subscriber::*;
