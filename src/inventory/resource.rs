//! Discovered resources
//!
//! A [`Resource`] is one cloud object belonging to a cluster. Backends
//! collect them into a [`ResourceMap`] keyed uniquely, normally through an
//! [`InventoryBuilder`] so duplicate keys surface as errors instead of
//! silently replacing each other.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Inventory of one cluster, keyed by resource key
pub type ResourceMap = BTreeMap<String, Resource>;

/// Key of the resource with the given type and id
pub fn resource_key(resource_type: &str, id: &str) -> String {
    format!("{}:{}", resource_type, id)
}

// =============================================================================
// Resource
// =============================================================================

/// One cloud object belonging to a cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Display name
    pub name: String,
    /// Kind, e.g. `instance`, `vpc`, `dns-record`
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Provider identifier of the object
    pub id: String,
    /// Keys of resources that cannot be deleted before this one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<String>,
    /// Keys of resources that must be deleted before this one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocked: Vec<String>,
    /// Resources with the same group key can be deleted in one call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_key: Option<String>,
    /// Referenced by the cluster but owned elsewhere
    #[serde(default)]
    pub shared: bool,
    /// Provider-specific payload for the deletion engine
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub obj: Value,
}

impl Resource {
    pub fn new(
        resource_type: impl Into<String>,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            resource_type: resource_type.into(),
            id: id.into(),
            blocks: Vec::new(),
            blocked: Vec::new(),
            group_key: None,
            shared: false,
            obj: Value::Null,
        }
    }

    /// Key used for this resource in an inventory
    pub fn key(&self) -> String {
        resource_key(&self.resource_type, &self.id)
    }

    /// Record that this resource must go before `key`
    pub fn blocks(mut self, key: impl Into<String>) -> Self {
        self.blocks.push(key.into());
        self
    }

    /// Record that `key` must go before this resource
    pub fn blocked_by(mut self, key: impl Into<String>) -> Self {
        self.blocked.push(key.into());
        self
    }

    pub fn with_group_key(mut self, group_key: impl Into<String>) -> Self {
        self.group_key = Some(group_key.into());
        self
    }

    pub fn with_obj(mut self, obj: Value) -> Self {
        self.obj = obj;
        self
    }

    /// Mark as shared infrastructure
    pub fn shared(mut self) -> Self {
        self.shared = true;
        self
    }

    /// Whether the deletion engine may remove this resource
    pub fn is_deletion_candidate(&self) -> bool {
        !self.shared
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource_type, self.id)?;
        if !self.name.is_empty() && self.name != self.id {
            write!(f, " ({})", self.name)?;
        }
        if self.shared {
            write!(f, " [shared]")?;
        }
        Ok(())
    }
}

// =============================================================================
// Inventory Queries
// =============================================================================

/// Queries over a complete inventory
pub trait ResourceMapExt {
    /// Resources the deletion engine may remove
    fn deletion_candidates(&self) -> Vec<&Resource>;

    /// Dependency keys that point at resources missing from the inventory
    fn dangling_references(&self) -> BTreeSet<String>;

    /// Number of resources per kind
    fn count_by_type(&self) -> BTreeMap<&str, usize>;
}

impl ResourceMapExt for ResourceMap {
    fn deletion_candidates(&self) -> Vec<&Resource> {
        self.values().filter(|r| r.is_deletion_candidate()).collect()
    }

    fn dangling_references(&self) -> BTreeSet<String> {
        self.values()
            .flat_map(|r| r.blocks.iter().chain(r.blocked.iter()))
            .filter(|key| !self.contains_key(key.as_str()))
            .cloned()
            .collect()
    }

    fn count_by_type(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for r in self.values() {
            *counts.entry(r.resource_type.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

// =============================================================================
// Inventory Builder
// =============================================================================

/// Collects resources into a [`ResourceMap`], rejecting duplicate keys
#[derive(Debug, Default)]
pub struct InventoryBuilder {
    resources: ResourceMap,
}

impl InventoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource under [`Resource::key`]
    pub fn insert(&mut self, resource: Resource) -> Result<()> {
        let key = resource.key();
        self.insert_keyed(key, resource)
    }

    /// Add a resource under a provider-chosen key
    pub fn insert_keyed(&mut self, key: impl Into<String>, resource: Resource) -> Result<()> {
        match self.resources.entry(key.into()) {
            Entry::Vacant(slot) => {
                slot.insert(resource);
                Ok(())
            }
            Entry::Occupied(slot) => Err(Error::DuplicateResourceKey {
                key: slot.key().clone(),
            }),
        }
    }

    pub fn extend<I>(&mut self, resources: I) -> Result<()>
    where
        I: IntoIterator<Item = Resource>,
    {
        for resource in resources {
            self.insert(resource)?;
        }
        Ok(())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.resources.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn build(self) -> ResourceMap {
        self.resources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn vpc() -> Resource {
        Resource::new("vpc", "vpc-1", "dev.example.com")
            .blocked_by("subnet:subnet-a")
            .shared()
    }

    fn subnet() -> Resource {
        Resource::new("subnet", "subnet-a", "us-east-1a.dev.example.com")
            .blocks("vpc:vpc-1")
            .blocked_by("instance:i-123")
            .with_obj(json!({ "cidr": "10.0.0.0/24" }))
    }

    #[test]
    fn test_key_and_display() {
        let r = subnet();
        assert_eq!(r.key(), "subnet:subnet-a");
        assert_eq!(r.to_string(), "subnet:subnet-a (us-east-1a.dev.example.com)");
        assert_eq!(vpc().to_string(), "vpc:vpc-1 (dev.example.com) [shared]");
        assert_eq!(Resource::new("ip", "1.2.3.4", "1.2.3.4").to_string(), "ip:1.2.3.4");
    }

    #[test]
    fn test_builder_rejects_duplicates() {
        let mut builder = InventoryBuilder::new();
        builder.insert(subnet()).unwrap();

        assert_matches!(
            builder.insert(subnet()),
            Err(Error::DuplicateResourceKey { key }) if key == "subnet:subnet-a"
        );
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_builder_custom_keys() {
        let mut builder = InventoryBuilder::new();
        builder
            .insert_keyed("route53-record:A:api.dev", Resource::new("route53-record", "api.dev", "api"))
            .unwrap();
        builder
            .insert_keyed("route53-record:TXT:api.dev", Resource::new("route53-record", "api.dev", "api"))
            .unwrap();

        assert!(builder.contains_key("route53-record:A:api.dev"));
        assert_eq!(builder.build().len(), 2);
    }

    #[test]
    fn test_deletion_candidates_skip_shared() {
        let mut builder = InventoryBuilder::new();
        builder.extend(vec![vpc(), subnet()]).unwrap();
        let inventory = builder.build();

        let candidates: Vec<String> = inventory
            .deletion_candidates()
            .iter()
            .map(|r| r.key())
            .collect();
        assert_eq!(candidates, vec!["subnet:subnet-a"]);
    }

    #[test]
    fn test_dangling_references() {
        let mut builder = InventoryBuilder::new();
        builder.extend(vec![vpc(), subnet()]).unwrap();
        let inventory = builder.build();

        let dangling: Vec<String> = inventory.dangling_references().into_iter().collect();
        assert_eq!(dangling, vec!["instance:i-123"]);
    }

    #[test]
    fn test_count_by_type() {
        let mut builder = InventoryBuilder::new();
        builder
            .extend(vec![
                Resource::new("instance", "i-1", "master"),
                Resource::new("instance", "i-2", "node"),
                vpc(),
            ])
            .unwrap();
        let inventory = builder.build();
        let counts = inventory.count_by_type();

        assert_eq!(counts.get("instance"), Some(&2));
        assert_eq!(counts.get("vpc"), Some(&1));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(subnet()).unwrap();

        assert_eq!(json["type"], "subnet");
        assert_eq!(json["blocks"], json!(["vpc:vpc-1"]));
        assert_eq!(json["obj"]["cidr"], "10.0.0.0/24");
        assert!(json.get("groupKey").is_none());

        let back: Resource = serde_json::from_value(json).unwrap();
        assert_eq!(back, subnet());
    }
}
