//! Configuration profiles

use bytes::Bytes;
use reqwest::Method;

use super::CLIENT;
use crate::models::{ConfigurationProfile, ProfileResponse, ProfilesResponse};
use crate::{Client, Result};

const PROFILE: &str = "profile";

impl Client {
    /// Make a request to the `GET client/profile` API
    pub async fn read_list_of_configuration_profiles(&self) -> Result<Vec<ConfigurationProfile>> {
        self.read::<ProfilesResponse>(&[CLIENT, PROFILE]).await
    }

    /// Make a request to the `GET client/profile/<id>` API
    pub async fn read_configuration_profile(
        &self,
        profile_id: &str,
    ) -> Result<ConfigurationProfile> {
        self.read::<ProfileResponse>(&[CLIENT, PROFILE, profile_id])
            .await
    }

    /// Make a request to the `POST client/profile` API
    ///
    /// The bytes of `configuration` are sent unchanged as the request body.
    pub async fn add_configuration_profile(
        &self,
        username: &str,
        description: &str,
        configuration: Bytes,
    ) -> Result<()> {
        self.write(
            Method::POST,
            &[CLIENT, PROFILE],
            &[("username", username), ("description", description)],
            Some(configuration),
        )
        .await
    }

    /// Make a request to the `DELETE client/profile/<id>` API
    pub async fn delete_configuration_profile(&self, profile_id: &str) -> Result<()> {
        self.write(Method::DELETE, &[CLIENT, PROFILE, profile_id], &[], None)
            .await
    }
}
