//! Cluster configuration
//!
//! The resolved cluster model the listing descriptor is built from. Loaded
//! from YAML by the diagnostic binary; library callers usually construct it
//! directly.

use crate::error::{Error, Result};
use crate::values::is_none_or_empty;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// DNS mode of the cluster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DnsType {
    #[default]
    Public,
    Private,
    None,
}

/// Azure-specific cluster settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureConfig {
    /// Pre-existing resource group to install into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group_name: Option<String>,
    /// Pre-existing route table to attach to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_table_name: Option<String>,
}

/// A fully resolved cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterConfig {
    pub name: String,
    /// Provider identifier the cluster was created on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_provider: Option<String>,
    #[serde(default)]
    pub dns: DnsType,
    /// Pre-existing network (VPC / VNet) the cluster was installed into
    #[serde(default, rename = "networkID", skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure: Option<AzureConfig>,
}

impl ClusterConfig {
    /// Create a config with defaults for everything but the name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cloud_provider: None,
            dns: DnsType::default(),
            network_id: None,
            azure: None,
        }
    }

    /// Parse a cluster from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let cluster: ClusterConfig = serde_yaml::from_str(yaml)?;
        cluster.validate()?;
        Ok(cluster)
    }

    /// Load a cluster from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let yaml = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&yaml)
    }

    /// Check that the cluster is resolved enough to list resources for
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidCluster("cluster name is empty".to_string()));
        }
        Ok(())
    }

    pub fn uses_none_dns(&self) -> bool {
        self.dns == DnsType::None
    }

    /// Resource group name, defaulting to the cluster name
    pub fn azure_resource_group_name(&self) -> String {
        self.azure
            .as_ref()
            .and_then(|a| a.resource_group_name.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.name.clone())
    }

    /// An explicitly named resource group is managed outside the cluster
    pub fn is_shared_azure_resource_group(&self) -> bool {
        !is_none_or_empty(self.azure.as_ref().and_then(|a| a.resource_group_name.as_deref()))
    }

    /// A referenced pre-existing network is managed outside the cluster
    pub fn shared_network(&self) -> bool {
        !is_none_or_empty(self.network_id.as_deref())
    }

    /// An explicitly named route table is managed outside the cluster
    pub fn is_shared_azure_route_table(&self) -> bool {
        !is_none_or_empty(self.azure.as_ref().and_then(|a| a.route_table_name.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    const AZURE_YAML: &str = r#"
name: prod.example.com
cloudProvider: azure
dns: none
networkID: vnet-123
azure:
  resourceGroupName: rg1
  routeTableName: rt1
"#;

    #[test]
    fn test_parse_azure_cluster() {
        let cluster = ClusterConfig::from_yaml_str(AZURE_YAML).unwrap();

        assert_eq!(cluster.name, "prod.example.com");
        assert_eq!(cluster.cloud_provider.as_deref(), Some("azure"));
        assert!(cluster.uses_none_dns());
        assert_eq!(cluster.azure_resource_group_name(), "rg1");
        assert!(cluster.is_shared_azure_resource_group());
        assert!(cluster.shared_network());
        assert!(cluster.is_shared_azure_route_table());
    }

    #[test]
    fn test_defaults() {
        let cluster = ClusterConfig::from_yaml_str("name: a.k8s.local").unwrap();

        assert_eq!(cluster.dns, DnsType::Public);
        assert!(!cluster.uses_none_dns());
        assert_eq!(cluster.azure_resource_group_name(), "a.k8s.local");
        assert!(!cluster.is_shared_azure_resource_group());
        assert!(!cluster.shared_network());
        assert!(!cluster.is_shared_azure_route_table());
    }

    #[test]
    fn test_blank_references_are_not_shared() {
        let mut cluster = ClusterConfig::new("c1");
        cluster.network_id = Some(String::new());
        cluster.azure = Some(AzureConfig {
            resource_group_name: Some(String::new()),
            route_table_name: Some(String::new()),
        });

        assert!(!cluster.shared_network());
        assert!(!cluster.is_shared_azure_resource_group());
        assert!(!cluster.is_shared_azure_route_table());
        assert_eq!(cluster.azure_resource_group_name(), "c1");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_matches!(
            ClusterConfig::from_yaml_str("name: \"  \""),
            Err(Error::InvalidCluster(_))
        );
        assert_matches!(ClusterConfig::from_yaml_str("dns: none"), Err(Error::Yaml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(AZURE_YAML.as_bytes()).unwrap();

        let cluster = ClusterConfig::load(file.path()).unwrap();
        assert_eq!(cluster.name, "prod.example.com");

        assert_matches!(
            ClusterConfig::load(file.path().with_extension("missing")),
            Err(Error::Io(_))
        );
    }
}
