//! Unified error type for the billing workspace
//!
//! Every layer boundary speaks [`AppError`]; the store layer has its
//! own narrower error that converts into this one.
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 5xxx: Payment errors
//! - 9xxx: System errors

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Validation error
    #[error("{message}")]
    Validation { message: String },

    /// Unparseable or out-of-range calendar date
    ///
    /// Dates are never silently defaulted: a bad renewal date corrupts
    /// every following billing cycle.
    #[error("Invalid date: {message}")]
    InvalidDate { message: String },

    /// Resource not found
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Resource already exists, or a concurrent writer won the race
    #[error("Conflict: {resource}")]
    Conflict { resource: String },

    /// Business rule violation
    #[error("Business rule violation: {message}")]
    BusinessRule { message: String },

    /// Database error
    #[error("Database error: {message}")]
    Database { message: String },

    /// Internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    // ========== Convenient constructors ==========

    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a Conflict error
    pub fn conflict(resource: impl Into<String>) -> Self {
        Self::Conflict {
            resource: resource.into(),
        }
    }

    /// Create a BusinessRule error
    pub fn business_rule(message: impl Into<String>) -> Self {
        Self::BusinessRule {
            message: message.into(),
        }
    }

    /// Create a Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "E0002",
            Self::NotFound { .. } => "E0003",
            Self::Conflict { .. } => "E0004",
            Self::BusinessRule { .. } => "E0005",
            Self::InvalidDate { .. } => "E5001",
            Self::Database { .. } => "E9002",
            Self::Internal { .. } => "E9001",
        }
    }
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;
