//! Error types for the cluster inventory
//!
//! Provides structured error types for the resource listing dispatcher,
//! provider backends, cluster configuration and diagnostics.

use crate::domain::ports::CloudProvider;
use thiserror::Error;

/// Unified error type for the inventory layer
#[derive(Error, Debug)]
pub enum Error {
    // =========================================================================
    // Internal Errors
    // =========================================================================
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Cluster is not fully resolved: {0}")]
    InvalidCluster(String),

    // =========================================================================
    // Dispatch Errors
    // =========================================================================
    #[error("listing resources on cloud provider {provider:?} is not (yet) supported")]
    UnsupportedProvider { provider: String },

    #[error("Cloud handle for {provider} is not a {expected}")]
    CloudMismatch {
        provider: CloudProvider,
        expected: &'static str,
    },

    // =========================================================================
    // Provider Discovery Errors
    // =========================================================================
    #[error("Resource discovery failed on {provider}: {reason}")]
    Discovery {
        provider: CloudProvider,
        reason: String,
    },

    #[error("Provider API error on {provider}: {source}")]
    Provider {
        provider: CloudProvider,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Duplicate resource key in inventory: {key}")]
    DuplicateResourceKey { key: String },

    // =========================================================================
    // Parse Errors
    // =========================================================================
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // =========================================================================
    // IO Errors
    // =========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Discovery failure described by a plain message
    pub fn discovery(provider: CloudProvider, reason: impl Into<String>) -> Self {
        Error::Discovery {
            provider,
            reason: reason.into(),
        }
    }

    /// Discovery failure carrying the provider client's own error
    pub fn provider<E>(provider: CloudProvider, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Provider {
            provider,
            source: Box::new(source),
        }
    }

    /// Provider identifier this error is attributed to, if any
    pub fn provider_id(&self) -> Option<String> {
        match self {
            Error::UnsupportedProvider { provider } => Some(provider.clone()),
            Error::CloudMismatch { provider, .. }
            | Error::Discovery { provider, .. }
            | Error::Provider { provider, .. } => Some(provider.to_string()),
            _ => None,
        }
    }

    /// Check if no backend exists for the requested provider
    pub fn is_unsupported_provider(&self) -> bool {
        matches!(self, Error::UnsupportedProvider { .. })
    }

    /// Check if the failure came from within a provider backend
    pub fn is_discovery_failure(&self) -> bool {
        matches!(
            self,
            Error::Discovery { .. }
                | Error::Provider { .. }
                | Error::CloudMismatch { .. }
                | Error::DuplicateResourceKey { .. }
        )
    }
}

/// Result type alias for the inventory layer
pub type Result<T> = std::result::Result<T, Error>;
