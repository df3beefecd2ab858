//! Resource Collector
//!
//! Entry point of the inventory layer: resolves the cloud handle's provider
//! to a registered backend, builds the cluster descriptor and delegates.
//! The collector performs no I/O of its own and keeps no state between
//! calls; every call re-queries the provider.

use crate::config::ClusterConfig;
use crate::domain::cluster::ClusterInfo;
use crate::domain::ports::{Cloud, CloudProvider, ProviderCloud, ResourceListerRef};
use crate::error::{Error, Result};
use crate::inventory::registry::ProviderRegistry;
use crate::inventory::resource::ResourceMap;
use crate::values::debug_as_json_string;
use tracing::{debug, info, warn};

/// Lists the resources of a cluster on whichever provider a cloud handle is for
#[derive(Debug, Clone, Default)]
pub struct ResourceCollector {
    registry: ProviderRegistry,
}

impl ResourceCollector {
    pub fn new(registry: ProviderRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Collect every resource belonging to `cluster` on `cloud`
    ///
    /// Fails with [`Error::UnsupportedProvider`] when no backend matches the
    /// cloud's provider identifier. Backend errors are returned unchanged;
    /// there is no partial result.
    pub async fn list_resources(
        &self,
        cloud: &dyn Cloud,
        cluster: &ClusterConfig,
    ) -> Result<ResourceMap> {
        let (provider, lister) = self.resolve(cloud.provider_id())?;

        if let Some(configured) = cluster.cloud_provider.as_deref() {
            if configured != provider.as_str() {
                warn!(
                    "Cluster {} is configured for {} but the cloud handle is for {}",
                    cluster.name, configured, provider
                );
            }
        }

        let info = ClusterInfo::for_provider(cluster, provider)?;
        debug!("Cluster descriptor: {}", debug_as_json_string(&info));

        info!("Listing resources of cluster {} on {}", info.name(), provider);
        match lister
            .list_resources(ProviderCloud::new(provider, cloud), &info)
            .await
        {
            Ok(resources) => {
                info!(
                    "Found {} resources of cluster {} on {}",
                    resources.len(),
                    info.name(),
                    provider
                );
                Ok(resources)
            }
            Err(e) => {
                warn!("Resource discovery on {} failed: {}", provider, e);
                Err(e)
            }
        }
    }

    fn resolve(&self, provider_id: &str) -> Result<(CloudProvider, &ResourceListerRef)> {
        let unsupported = || Error::UnsupportedProvider {
            provider: provider_id.to_string(),
        };

        let provider: CloudProvider = provider_id.parse().map_err(|_| unsupported())?;
        let lister = self.registry.get(provider).ok_or_else(unsupported)?;
        Ok((provider, lister))
    }
}
