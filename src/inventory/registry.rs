//! Provider Registry
//!
//! Binds each [`CloudProvider`] to the backend that discovers its resources.

use crate::domain::ports::{CloudProvider, ResourceLister, ResourceListerRef};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Lookup from provider to discovery backend
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    listers: BTreeMap<CloudProvider, ResourceListerRef>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a backend under the provider it reports
    ///
    /// Returns the backend previously registered for that provider, if any.
    pub fn register(&mut self, lister: ResourceListerRef) -> Option<ResourceListerRef> {
        let provider = lister.provider();
        let previous = self.listers.insert(provider, lister);
        if previous.is_some() {
            warn!("Replacing resource lister for {}", provider);
        } else {
            debug!("Registered resource lister for {}", provider);
        }
        previous
    }

    /// Builder-style [`register`](Self::register)
    pub fn with<L: ResourceLister + 'static>(mut self, lister: L) -> Self {
        self.register(Arc::new(lister));
        self
    }

    pub fn get(&self, provider: CloudProvider) -> Option<&ResourceListerRef> {
        self.listers.get(&provider)
    }

    pub fn contains(&self, provider: CloudProvider) -> bool {
        self.listers.contains_key(&provider)
    }

    /// Providers with a registered backend
    pub fn providers(&self) -> impl Iterator<Item = CloudProvider> + '_ {
        self.listers.keys().copied()
    }

    /// Providers with no registered backend
    pub fn missing(&self) -> Vec<CloudProvider> {
        CloudProvider::ALL
            .into_iter()
            .filter(|p| !self.listers.contains_key(p))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.listers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listers.is_empty()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.providers().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cluster::ClusterInfo;
    use crate::domain::ports::ProviderCloud;
    use crate::error::Result;
    use crate::inventory::resource::ResourceMap;
    use async_trait::async_trait;

    struct EmptyLister(CloudProvider);

    #[async_trait]
    impl ResourceLister for EmptyLister {
        fn provider(&self) -> CloudProvider {
            self.0
        }

        async fn list_resources(
            &self,
            _cloud: ProviderCloud<'_>,
            _cluster: &ClusterInfo,
        ) -> Result<ResourceMap> {
            Ok(ResourceMap::new())
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = ProviderRegistry::new()
            .with(EmptyLister(CloudProvider::Aws))
            .with(EmptyLister(CloudProvider::Azure));

        assert_eq!(registry.len(), 2);
        assert!(registry.contains(CloudProvider::Aws));
        assert!(registry.get(CloudProvider::Gce).is_none());
        assert_eq!(
            registry.providers().collect::<Vec<_>>(),
            vec![CloudProvider::Aws, CloudProvider::Azure]
        );
    }

    #[test]
    fn test_missing_providers() {
        let empty = ProviderRegistry::new();
        assert_eq!(empty.missing(), CloudProvider::ALL.to_vec());

        let mut full = ProviderRegistry::new();
        for provider in CloudProvider::ALL {
            full.register(Arc::new(EmptyLister(provider)));
        }
        assert!(full.missing().is_empty());
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = ProviderRegistry::new();
        assert!(registry.register(Arc::new(EmptyLister(CloudProvider::Hetzner))).is_none());
        assert!(registry.register(Arc::new(EmptyLister(CloudProvider::Hetzner))).is_some());
        assert_eq!(registry.len(), 1);
    }
}
