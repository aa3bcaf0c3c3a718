//! Engine configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | ACTIVE_PROVIDER | All | Provider filter used to resolve blank sources |
//! | LOG_LEVEL | info | Tracing level filter |
//! | LOG_DIR | (unset) | Directory for daily-rolling log files |

use shared::models::ALL_PROVIDERS;

use crate::payments::CollectionContext;

#[derive(Debug, Clone)]
pub struct Config {
    /// Provider filter active for this office session; `All` is the
    /// wildcard and makes blank sources resolve to the default provider
    pub active_provider: String,
    /// Tracing level filter: trace | debug | info | warn | error
    pub log_level: String,
    /// Optional directory for file log output
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables (a `.env` file is
    /// honored when present), falling back to defaults.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self {
            active_provider: std::env::var("ACTIVE_PROVIDER")
                .unwrap_or_else(|_| ALL_PROVIDERS.into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Resolution context for payment collection under this config
    pub fn collection_context(&self) -> CollectionContext {
        CollectionContext::new(self.active_provider.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
