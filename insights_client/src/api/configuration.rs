//! Cluster configurations

use bytes::Bytes;
use reqwest::Method;

use super::CLIENT;
use crate::models::{ClusterConfiguration, ConfigurationResponse, ConfigurationsResponse};
use crate::{Client, Result};

const CONFIGURATION: &str = "configuration";

impl Client {
    /// Make a request to the `GET client/configuration` API
    pub async fn read_list_of_configurations(&self) -> Result<Vec<ClusterConfiguration>> {
        self.read::<ConfigurationsResponse>(&[CLIENT, CONFIGURATION])
            .await
    }

    /// Make a request to the `GET client/configuration/<id>` API
    pub async fn read_cluster_configuration_by_id(&self, configuration_id: &str) -> Result<String> {
        self.read::<ConfigurationResponse>(&[CLIENT, CONFIGURATION, configuration_id])
            .await
    }

    /// Make a request to the `POST client/cluster/<name>/configuration/create` API
    ///
    /// The bytes of `configuration` are sent unchanged as the request body.
    pub async fn add_cluster_configuration(
        &self,
        username: &str,
        cluster: &str,
        reason: &str,
        description: &str,
        configuration: Bytes,
    ) -> Result<()> {
        self.write(
            Method::POST,
            &[CLIENT, "cluster", cluster, CONFIGURATION, "create"],
            &[
                ("username", username),
                ("reason", reason),
                ("description", description),
            ],
            Some(configuration),
        )
        .await
    }

    /// Make a request to the `PUT client/configuration/<id>/enable` API
    pub async fn enable_cluster_configuration(&self, configuration_id: &str) -> Result<()> {
        self.write(
            Method::PUT,
            &[CLIENT, CONFIGURATION, configuration_id, "enable"],
            &[],
            None,
        )
        .await
    }

    /// Make a request to the `PUT client/configuration/<id>/disable` API
    pub async fn disable_cluster_configuration(&self, configuration_id: &str) -> Result<()> {
        self.write(
            Method::PUT,
            &[CLIENT, CONFIGURATION, configuration_id, "disable"],
            &[],
            None,
        )
        .await
    }

    /// Make a request to the `DELETE client/configuration/<id>` API
    pub async fn delete_cluster_configuration(&self, configuration_id: &str) -> Result<()> {
        self.write(
            Method::DELETE,
            &[CLIENT, CONFIGURATION, configuration_id],
            &[],
            None,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use mockito::{Matcher, Server};
    use pretty_assertions::assert_eq;

    use crate::{Client, Error};

    #[tokio::test]
    async fn read_list_of_configurations() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/client/configuration")
            .with_status(200)
            .with_body(
                r#"{
                    "status": "ok",
                    "configurations": [{
                        "id": 1,
                        "cluster": "00000000-0000-0000-0000-000000000000",
                        "configuration": "1",
                        "changed_at": "2019-01-01T00:00:00Z",
                        "changed_by": "admin",
                        "active": "0",
                        "reason": "initial"
                    }]
                }"#,
            )
            .create_async()
            .await;

        let client = Client::new(server.url()).unwrap();
        let configurations = client.read_list_of_configurations().await.unwrap();

        assert_eq!(configurations.len(), 1);
        assert_eq!(configurations[0].active, "0");
        assert!(!configurations[0].is_active());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn read_cluster_configuration_by_id() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/client/configuration/1")
            .with_status(200)
            .with_body(r#"{"status":"ok","configuration":"{\"no_op\":\"Z\"}"}"#)
            .create_async()
            .await;

        let client = Client::new(server.url()).unwrap();
        let configuration = client.read_cluster_configuration_by_id("1").await.unwrap();

        assert_eq!(configuration, r#"{"no_op":"Z"}"#);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn add_cluster_configuration() {
        let configuration = "{\"no_op\":\"Y\"}";
        let mut server = Server::new_async().await;
        let mock = server
            .mock(
                "POST",
                "/api/v1/client/cluster/cluster0/configuration/create",
            )
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("username".into(), "tester".into()),
                Matcher::UrlEncoded("reason".into(), "why not".into()),
                Matcher::UrlEncoded("description".into(), "desc".into()),
            ]))
            .match_body(configuration)
            .with_status(201)
            .with_body(r#"{"status":"ok"}"#)
            .create_async()
            .await;

        let client = Client::new(server.url()).unwrap();
        client
            .add_cluster_configuration(
                "tester",
                "cluster0",
                "why not",
                "desc",
                Bytes::from(configuration),
            )
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn enable_and_disable_cluster_configuration() {
        let mut server = Server::new_async().await;
        let enable = server
            .mock("PUT", "/api/v1/client/configuration/1/enable")
            .with_status(200)
            .with_body(r#"{"status":"ok"}"#)
            .create_async()
            .await;
        let disable = server
            .mock("PUT", "/api/v1/client/configuration/1/disable")
            .with_status(200)
            .with_body(r#"{"status":"ok"}"#)
            .create_async()
            .await;

        let client = Client::new(server.url()).unwrap();
        client.enable_cluster_configuration("1").await.unwrap();
        client.disable_cluster_configuration("1").await.unwrap();

        enable.assert_async().await;
        disable.assert_async().await;
    }

    #[tokio::test]
    async fn delete_cluster_configuration_bad_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("DELETE", "/api/v1/client/configuration/1")
            .with_status(200)
            .with_body("deleted")
            .create_async()
            .await;

        let client = Client::new(server.url()).unwrap();
        let err = client.delete_cluster_configuration("1").await.unwrap_err();

        assert!(matches!(err, Error::Decode(_)), "{err:?}");
        mock.assert_async().await;
    }
}
