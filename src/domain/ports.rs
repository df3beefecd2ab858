//! Domain Ports - Core trait definitions for the inventory layer
//!
//! These traits define the boundary between the dispatcher and the
//! per-provider discovery backends. Backends implement [`ResourceLister`]
//! and receive a [`ProviderCloud`] scoped to exactly one provider.

use crate::domain::cluster::ClusterInfo;
use crate::error::{Error, Result};
use crate::inventory::resource::ResourceMap;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::str::FromStr;
use std::sync::Arc;

// =============================================================================
// Cloud Providers
// =============================================================================

/// Cloud providers a discovery backend can exist for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CloudProvider {
    #[serde(rename = "aws")]
    Aws,
    #[serde(rename = "gce")]
    Gce,
    #[serde(rename = "do")]
    DigitalOcean,
    #[serde(rename = "hetzner")]
    Hetzner,
    #[serde(rename = "openstack")]
    OpenStack,
    #[serde(rename = "azure")]
    Azure,
    #[serde(rename = "scaleway")]
    Scaleway,
}

impl CloudProvider {
    /// Every provider, in declaration order
    pub const ALL: [CloudProvider; 7] = [
        CloudProvider::Aws,
        CloudProvider::Gce,
        CloudProvider::DigitalOcean,
        CloudProvider::Hetzner,
        CloudProvider::OpenStack,
        CloudProvider::Azure,
        CloudProvider::Scaleway,
    ];

    /// Provider identifier as reported by cloud handles
    pub fn as_str(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "aws",
            CloudProvider::Gce => "gce",
            CloudProvider::DigitalOcean => "do",
            CloudProvider::Hetzner => "hetzner",
            CloudProvider::OpenStack => "openstack",
            CloudProvider::Azure => "azure",
            CloudProvider::Scaleway => "scaleway",
        }
    }
}

impl std::fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CloudProvider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CloudProvider::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Error::UnsupportedProvider {
                provider: s.to_string(),
            })
    }
}

// =============================================================================
// Cloud Handle
// =============================================================================

/// A live, authenticated handle to one cloud account
///
/// Implemented by the provider API clients. The inventory layer only needs
/// the provider identifier; backends recover their concrete client type
/// through [`ProviderCloud::downcast`].
pub trait Cloud: Send + Sync {
    /// Provider identifier, e.g. `aws` or `azure`
    fn provider_id(&self) -> &str;

    /// Returns this as Any for downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// A cloud handle whose provider identifier has been matched to a backend
#[derive(Clone, Copy)]
pub struct ProviderCloud<'a> {
    provider: CloudProvider,
    cloud: &'a dyn Cloud,
}

impl<'a> ProviderCloud<'a> {
    pub(crate) fn new(provider: CloudProvider, cloud: &'a dyn Cloud) -> Self {
        Self { provider, cloud }
    }

    /// Provider this view is scoped to
    pub fn provider(&self) -> CloudProvider {
        self.provider
    }

    /// Underlying handle, without the provider-specific type
    pub fn cloud(&self) -> &'a dyn Cloud {
        self.cloud
    }

    /// Concrete provider client behind the handle
    pub fn downcast<T: Cloud + 'static>(&self) -> Result<&'a T> {
        self.cloud
            .as_any()
            .downcast_ref::<T>()
            .ok_or(Error::CloudMismatch {
                provider: self.provider,
                expected: std::any::type_name::<T>(),
            })
    }
}

impl std::fmt::Debug for ProviderCloud<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCloud")
            .field("provider", &self.provider)
            .field("provider_id", &self.cloud.provider_id())
            .finish()
    }
}

// =============================================================================
// Resource Lister Port
// =============================================================================

/// Port for per-provider resource discovery
///
/// Given a cluster descriptor, return every resource belonging to the
/// cluster, keyed uniquely, or fail. Implementations perform read-only API
/// calls and return either a complete inventory or an error, never a
/// partial map.
#[async_trait]
pub trait ResourceLister: Send + Sync {
    /// Provider this backend discovers resources on
    fn provider(&self) -> CloudProvider;

    /// List all resources of the cluster
    async fn list_resources(
        &self,
        cloud: ProviderCloud<'_>,
        cluster: &ClusterInfo,
    ) -> Result<ResourceMap>;
}

// =============================================================================
// Type Aliases for Arc'd Traits
// =============================================================================

pub type ResourceListerRef = Arc<dyn ResourceLister>;
