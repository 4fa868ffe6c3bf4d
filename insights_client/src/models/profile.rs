//! Configuration profiles

use serde::{Deserialize, Serialize};

/// A named, reusable configuration blob
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfigurationProfile {
    /// Profile ID
    pub id: i64,
    /// The configuration itself, a JSON document embedded in a string
    pub configuration: String,
    /// When the profile was last changed
    pub changed_at: String,
    /// Who changed the profile last
    pub changed_by: String,
    /// Free-form description
    pub description: String,
}
