//! Operations offered by the controller service
//!
//! The HTTP implementation lives in one module per resource as inherent methods on
//! [`Client`]; [`ControllerApi`] exposes the same operations behind a trait.

mod cluster;
mod configuration;
mod profile;
mod trigger;

use async_trait::async_trait;
use bytes::Bytes;

use crate::models::{Cluster, ClusterConfiguration, ConfigurationProfile, Trigger};
use crate::{Client, Result};

/// First path segment of every endpoint used by the CLI
const CLIENT: &str = "client";

/// Every operation the controller service offers to its command line client
///
/// Each method maps to exactly one HTTP request. Nothing is retried or cached.
#[async_trait]
pub trait ControllerApi: std::fmt::Debug + Send + Sync {
    /// List every registered cluster
    async fn read_list_of_clusters(&self) -> Result<Vec<Cluster>>;

    /// Register a new cluster under `name`
    async fn add_cluster(&self, name: &str) -> Result<()>;

    /// Remove the cluster with the given ID
    async fn delete_cluster(&self, cluster_id: &str) -> Result<()>;

    /// List every trigger
    async fn read_list_of_triggers(&self) -> Result<Vec<Trigger>>;

    /// Fetch a single trigger
    async fn read_trigger_by_id(&self, trigger_id: &str) -> Result<Trigger>;

    /// Request a must-gather on `cluster_name`
    async fn add_trigger(
        &self,
        username: &str,
        cluster_name: &str,
        reason: &str,
        link: &str,
    ) -> Result<()>;

    /// Remove a trigger
    async fn delete_trigger(&self, trigger_id: &str) -> Result<()>;

    /// Mark a trigger as active
    async fn activate_trigger(&self, trigger_id: &str) -> Result<()>;

    /// Mark a trigger as inactive
    async fn deactivate_trigger(&self, trigger_id: &str) -> Result<()>;

    /// List every configuration profile
    async fn read_list_of_configuration_profiles(&self) -> Result<Vec<ConfigurationProfile>>;

    /// Fetch a single configuration profile
    async fn read_configuration_profile(&self, profile_id: &str) -> Result<ConfigurationProfile>;

    /// Store a new configuration profile; `configuration` is sent as the request body
    async fn add_configuration_profile(
        &self,
        username: &str,
        description: &str,
        configuration: Bytes,
    ) -> Result<()>;

    /// Remove a configuration profile
    async fn delete_configuration_profile(&self, profile_id: &str) -> Result<()>;

    /// List every cluster configuration
    async fn read_list_of_configurations(&self) -> Result<Vec<ClusterConfiguration>>;

    /// Fetch the configuration document of a single cluster configuration
    async fn read_cluster_configuration_by_id(&self, configuration_id: &str) -> Result<String>;

    /// Create a configuration for `cluster`; `configuration` is sent as the request body
    async fn add_cluster_configuration(
        &self,
        username: &str,
        cluster: &str,
        reason: &str,
        description: &str,
        configuration: Bytes,
    ) -> Result<()>;

    /// Enable a cluster configuration
    async fn enable_cluster_configuration(&self, configuration_id: &str) -> Result<()>;

    /// Disable a cluster configuration
    async fn disable_cluster_configuration(&self, configuration_id: &str) -> Result<()>;

    /// Remove a cluster configuration
    async fn delete_cluster_configuration(&self, configuration_id: &str) -> Result<()>;
}

#[async_trait]
impl ControllerApi for Client {
    async fn read_list_of_clusters(&self) -> Result<Vec<Cluster>> {
        Self::read_list_of_clusters(self).await
    }

    async fn add_cluster(&self, name: &str) -> Result<()> {
        Self::add_cluster(self, name).await
    }

    async fn delete_cluster(&self, cluster_id: &str) -> Result<()> {
        Self::delete_cluster(self, cluster_id).await
    }

    async fn read_list_of_triggers(&self) -> Result<Vec<Trigger>> {
        Self::read_list_of_triggers(self).await
    }

    async fn read_trigger_by_id(&self, trigger_id: &str) -> Result<Trigger> {
        Self::read_trigger_by_id(self, trigger_id).await
    }

    async fn add_trigger(
        &self,
        username: &str,
        cluster_name: &str,
        reason: &str,
        link: &str,
    ) -> Result<()> {
        Self::add_trigger(self, username, cluster_name, reason, link).await
    }

    async fn delete_trigger(&self, trigger_id: &str) -> Result<()> {
        Self::delete_trigger(self, trigger_id).await
    }

    async fn activate_trigger(&self, trigger_id: &str) -> Result<()> {
        Self::activate_trigger(self, trigger_id).await
    }

    async fn deactivate_trigger(&self, trigger_id: &str) -> Result<()> {
        Self::deactivate_trigger(self, trigger_id).await
    }

    async fn read_list_of_configuration_profiles(&self) -> Result<Vec<ConfigurationProfile>> {
        Self::read_list_of_configuration_profiles(self).await
    }

    async fn read_configuration_profile(&self, profile_id: &str) -> Result<ConfigurationProfile> {
        Self::read_configuration_profile(self, profile_id).await
    }

    async fn add_configuration_profile(
        &self,
        username: &str,
        description: &str,
        configuration: Bytes,
    ) -> Result<()> {
        Self::add_configuration_profile(self, username, description, configuration).await
    }

    async fn delete_configuration_profile(&self, profile_id: &str) -> Result<()> {
        Self::delete_configuration_profile(self, profile_id).await
    }

    async fn read_list_of_configurations(&self) -> Result<Vec<ClusterConfiguration>> {
        Self::read_list_of_configurations(self).await
    }

    async fn read_cluster_configuration_by_id(&self, configuration_id: &str) -> Result<String> {
        Self::read_cluster_configuration_by_id(self, configuration_id).await
    }

    async fn add_cluster_configuration(
        &self,
        username: &str,
        cluster: &str,
        reason: &str,
        description: &str,
        configuration: Bytes,
    ) -> Result<()> {
        Self::add_cluster_configuration(self, username, cluster, reason, description, configuration)
            .await
    }

    async fn enable_cluster_configuration(&self, configuration_id: &str) -> Result<()> {
        Self::enable_cluster_configuration(self, configuration_id).await
    }

    async fn disable_cluster_configuration(&self, configuration_id: &str) -> Result<()> {
        Self::disable_cluster_configuration(self, configuration_id).await
    }

    async fn delete_cluster_configuration(&self, configuration_id: &str) -> Result<()> {
        Self::delete_cluster_configuration(self, configuration_id).await
    }
}
