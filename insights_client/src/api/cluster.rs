//! Clusters

use reqwest::Method;

use super::CLIENT;
use crate::models::{Cluster, ClustersResponse};
use crate::{Client, Result};

const CLUSTER: &str = "cluster";

impl Client {
    /// Make a request to the `GET client/cluster` API
    pub async fn read_list_of_clusters(&self) -> Result<Vec<Cluster>> {
        self.read::<ClustersResponse>(&[CLIENT, CLUSTER]).await
    }

    /// Make a request to the `POST client/cluster/<name>` API
    pub async fn add_cluster(&self, name: &str) -> Result<()> {
        self.write(Method::POST, &[CLIENT, CLUSTER, name], &[], None)
            .await
    }

    /// Make a request to the `DELETE client/cluster/<id>` API
    pub async fn delete_cluster(&self, cluster_id: &str) -> Result<()> {
        self.write(Method::DELETE, &[CLIENT, CLUSTER, cluster_id], &[], None)
            .await
    }
}
