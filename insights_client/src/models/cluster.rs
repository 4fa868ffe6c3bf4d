//! Clusters

use serde::{Deserialize, Serialize};

/// A cluster registered in the controller
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cluster {
    /// Cluster ID assigned by the controller
    pub id: i64,
    /// Cluster name, usually shaped like a GUID
    pub name: String,
}
