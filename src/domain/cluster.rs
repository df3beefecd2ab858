//! Cluster identity descriptor
//!
//! [`ClusterInfo`] scopes a provider backend's search to one cluster. It is
//! built fresh for every listing call and never mutated afterwards.

use crate::config::ClusterConfig;
use crate::domain::ports::CloudProvider;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Azure-only part of the descriptor
///
/// The three `*_shared` flags tell the Azure backend which referenced
/// infrastructure is owned by other clusters and must be reported as shared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureClusterInfo {
    pub resource_group_name: String,
    pub resource_group_shared: bool,
    pub network_shared: bool,
    pub route_table_shared: bool,
}

impl AzureClusterInfo {
    /// Whether the resource group belongs to the cluster
    pub fn owns_resource_group(&self) -> bool {
        !self.resource_group_shared
    }

    /// Whether the virtual network belongs to the cluster
    pub fn owns_network(&self) -> bool {
        !self.network_shared
    }

    /// Whether the route table belongs to the cluster
    pub fn owns_route_table(&self) -> bool {
        !self.route_table_shared
    }
}

/// Identity of the cluster whose resources are listed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterInfo {
    name: String,
    uses_none_dns: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    azure: Option<AzureClusterInfo>,
}

impl ClusterInfo {
    /// Build a descriptor for a cluster that is not on Azure
    pub fn new(name: impl Into<String>, uses_none_dns: bool) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidCluster("cluster name is empty".to_string()));
        }

        Ok(Self {
            name,
            uses_none_dns,
            azure: None,
        })
    }

    /// Attach the Azure-only fields
    pub fn with_azure(mut self, azure: AzureClusterInfo) -> Self {
        self.azure = Some(azure);
        self
    }

    /// Build the descriptor handed to the backend of `provider`
    ///
    /// Azure fields are populated only when `provider` is Azure, whatever the
    /// cluster configuration says.
    pub fn for_provider(cluster: &ClusterConfig, provider: CloudProvider) -> Result<Self> {
        cluster.validate()?;

        let info = Self::new(cluster.name.clone(), cluster.uses_none_dns())?;
        if provider != CloudProvider::Azure {
            return Ok(info);
        }

        Ok(info.with_azure(AzureClusterInfo {
            resource_group_name: cluster.azure_resource_group_name(),
            resource_group_shared: cluster.is_shared_azure_resource_group(),
            network_shared: cluster.shared_network(),
            route_table_shared: cluster.is_shared_azure_route_table(),
        }))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the cluster runs without managed DNS records
    pub fn uses_none_dns(&self) -> bool {
        self.uses_none_dns
    }

    /// Azure-only fields; `None` for every other provider
    pub fn azure(&self) -> Option<&AzureClusterInfo> {
        self.azure.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AzureConfig, DnsType};

    fn azure_cluster() -> ClusterConfig {
        ClusterConfig {
            name: "dev.example.com".into(),
            cloud_provider: Some("azure".into()),
            dns: DnsType::None,
            network_id: Some("vnet-shared".into()),
            azure: Some(AzureConfig {
                resource_group_name: Some("rg1".into()),
                route_table_name: Some("rt-shared".into()),
            }),
        }
    }

    #[test]
    fn test_azure_fields_populated_for_azure() {
        let info = ClusterInfo::for_provider(&azure_cluster(), CloudProvider::Azure).unwrap();

        assert_eq!(info.name(), "dev.example.com");
        assert!(info.uses_none_dns());
        assert_eq!(
            info.azure(),
            Some(&AzureClusterInfo {
                resource_group_name: "rg1".into(),
                resource_group_shared: true,
                network_shared: true,
                route_table_shared: true,
            })
        );
    }

    #[test]
    fn test_azure_fields_never_populated_elsewhere() {
        let cluster = azure_cluster();
        for provider in CloudProvider::ALL {
            if provider == CloudProvider::Azure {
                continue;
            }
            let info = ClusterInfo::for_provider(&cluster, provider).unwrap();
            assert!(info.azure().is_none(), "azure fields set for {}", provider);
        }
    }

    #[test]
    fn test_owned_azure_infrastructure() {
        let mut cluster = azure_cluster();
        cluster.network_id = None;
        cluster.azure = Some(AzureConfig::default());

        let info = ClusterInfo::for_provider(&cluster, CloudProvider::Azure).unwrap();
        let azure = info.azure().unwrap();

        assert_eq!(azure.resource_group_name, "dev.example.com");
        assert!(azure.owns_resource_group());
        assert!(azure.owns_network());
        assert!(azure.owns_route_table());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(ClusterInfo::new("", false).is_err());
        assert!(matches!(
            ClusterInfo::new("   ", false),
            Err(Error::InvalidCluster(_))
        ));

        let mut cluster = azure_cluster();
        cluster.name.clear();
        assert!(ClusterInfo::for_provider(&cluster, CloudProvider::Aws).is_err());
    }

    #[test]
    fn test_json_omits_azure_when_unset() {
        let info = ClusterInfo::new("a.k8s.local", false).unwrap();
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "name": "a.k8s.local", "usesNoneDns": false })
        );
    }
}
