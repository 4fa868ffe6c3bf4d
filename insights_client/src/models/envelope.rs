//! Response envelopes
//!
//! Every controller response is a JSON object with a `status` field that is either `"ok"` or
//! a description of what went wrong. Reads carry their payload next to the status under a
//! field whose name depends on the endpoint.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{Cluster, ClusterConfiguration, ConfigurationProfile, Trigger};

/// Value of the `status` field for a successful request
pub const STATUS_OK: &str = "ok";

/// Common behaviour of the controller's response envelopes
pub trait Envelope: DeserializeOwned {
    /// The payload carried next to the status
    type Payload;

    /// Name of the JSON field holding the payload
    const PAYLOAD_FIELD: &'static str;

    /// The raw status reported by the controller
    fn status(&self) -> &str;

    /// Take the payload out of the envelope, if the controller sent one
    fn into_payload(self) -> Option<Self::Payload>;

    /// Whether the controller reported success
    fn is_ok(&self) -> bool {
        self.status() == STATUS_OK
    }
}

/// Envelope of write requests, carrying nothing but the status
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// `"ok"` or an error description
    pub status: String,
}

impl Envelope for StatusResponse {
    type Payload = ();

    const PAYLOAD_FIELD: &'static str = "status";

    fn status(&self) -> &str {
        &self.status
    }

    fn into_payload(self) -> Option<Self::Payload> {
        Some(())
    }
}

macro_rules! envelope {
    (
        $(#[$meta:meta])*
        $name:ident { $field:ident: $payload:ty }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            /// `"ok"` or an error description
            pub status: String,
            #[doc = concat!("Payload, sent as `", stringify!($field), "` when the status is `\"ok\"`")]
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub $field: Option<$payload>,
        }

        impl Envelope for $name {
            type Payload = $payload;

            const PAYLOAD_FIELD: &'static str = stringify!($field);

            fn status(&self) -> &str {
                &self.status
            }

            fn into_payload(self) -> Option<Self::Payload> {
                self.$field
            }
        }
    };
}

envelope! {
    /// Response to `GET client/cluster`
    ClustersResponse { clusters: Vec<Cluster> }
}

envelope! {
    /// Response to `GET client/trigger`
    TriggersResponse { triggers: Vec<Trigger> }
}

envelope! {
    /// Response to `GET client/trigger/<id>`
    TriggerResponse { trigger: Trigger }
}

envelope! {
    /// Response to `GET client/profile`
    ProfilesResponse { profiles: Vec<ConfigurationProfile> }
}

envelope! {
    /// Response to `GET client/profile/<id>`
    ProfileResponse { profile: ConfigurationProfile }
}

envelope! {
    /// Response to `GET client/configuration`
    ConfigurationsResponse { configurations: Vec<ClusterConfiguration> }
}

envelope! {
    /// Response to `GET client/configuration/<id>`
    ConfigurationResponse { configuration: String }
}
