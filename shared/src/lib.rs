//! Shared types for the back-office billing workspace
//!
//! Common types used across crates: data models, the unified error
//! type, and small utilities (timestamps, id generation).

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult};
pub use serde::{Deserialize, Serialize};
