//! Triggers

use serde::{Deserialize, Serialize};

/// A must-gather collection request recorded by the controller
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Trigger {
    /// Trigger ID
    pub id: i64,
    /// Trigger type, e.g. `must-gather`
    #[serde(rename = "type")]
    pub trigger_type: String,
    /// Name of the cluster the trigger targets
    pub cluster: String,
    /// Reason given when the trigger was created
    pub reason: String,
    /// Link to a ticket or other context
    pub link: String,
    /// When the trigger was created
    pub triggered_at: String,
    /// Who created the trigger
    pub triggered_by: String,
    /// When the operator acknowledged the trigger
    pub acked_at: String,
    /// Extra parameters passed to the operator
    pub parameters: String,
    /// `1` when the trigger is active, `0` otherwise
    pub active: i64,
}

impl Trigger {
    /// Whether the controller reports this trigger as active
    pub fn is_active(&self) -> bool {
        self.active == 1
    }
}
