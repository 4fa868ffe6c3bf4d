//! Cluster configurations

use serde::{Deserialize, Serialize};

/// A configuration instance bound to one cluster
///
/// Unlike [`Trigger::active`](crate::models::Trigger::active) the `active` flag is sent by the
/// controller as the string `"0"` or `"1"`. It is kept in that form.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClusterConfiguration {
    /// Configuration ID
    pub id: i64,
    /// Name of the cluster the configuration belongs to
    pub cluster: String,
    /// The configuration profile this instance was created from
    pub configuration: String,
    /// When the configuration was last changed
    pub changed_at: String,
    /// Who changed the configuration last
    pub changed_by: String,
    /// `"1"` when enabled, `"0"` otherwise
    pub active: String,
    /// Reason given for the last change
    pub reason: String,
}

impl ClusterConfiguration {
    /// Whether the controller reports this configuration as enabled
    pub fn is_active(&self) -> bool {
        self.active == "1"
    }
}
