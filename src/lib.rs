//! Cluster Inventory - Cloud Resource Listing
//!
//! Enumerates every infrastructure object belonging to a cluster on one of
//! several unrelated cloud providers and returns it as a single,
//! provider-agnostic, uniquely keyed inventory for teardown and audit.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                        ResourceCollector                             │
//! │   provider id ──► ProviderRegistry ──► ResourceLister (backend)      │
//! │   ClusterConfig ──► ClusterInfo (+ Azure shared-infra flags)         │
//! ├──────────────────────────────────────────────────────────────────────┤
//! │  aws │ gce │ do │ hetzner │ openstack │ azure │ scaleway  (external)  │
//! ├──────────────────────────────────────────────────────────────────────┤
//! │             ResourceMap: "type:id" ──► Resource                      │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`inventory`]: Dispatcher, provider registry and resource entities
//! - [`domain`]: Cluster descriptor and provider ports
//! - [`values`]: Optional conversions and debug rendering
//! - [`config`]: Cluster configuration
//! - [`error`]: Error types and handling

pub mod config;
pub mod domain;
pub mod error;
pub mod inventory;
pub mod values;

// Re-export commonly used types
pub use config::{AzureConfig, ClusterConfig, DnsType};

pub use domain::{
    AzureClusterInfo, Cloud, CloudProvider, ClusterInfo, ProviderCloud,
    ResourceLister, ResourceListerRef,
};

pub use error::{Error, Result};

pub use inventory::{
    resource_key, InventoryBuilder, ProviderRegistry, Resource, ResourceCollector, ResourceMap,
    ResourceMapExt,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
