//! Records exchanged with the controller service and the envelopes that wrap them

mod cluster;
pub use cluster::Cluster;

mod configuration;
pub use configuration::ClusterConfiguration;

mod envelope;
pub use envelope::{
    ClustersResponse, ConfigurationResponse, ConfigurationsResponse, Envelope, ProfileResponse,
    ProfilesResponse, STATUS_OK, StatusResponse, TriggerResponse, TriggersResponse,
};

mod profile;
pub use profile::ConfigurationProfile;

mod trigger;
pub use trigger::Trigger;
