//! Triggers

use reqwest::Method;

use super::CLIENT;
use crate::models::{Trigger, TriggerResponse, TriggersResponse};
use crate::{Client, Result};

const TRIGGER: &str = "trigger";

impl Client {
    /// Make a request to the `GET client/trigger` API
    pub async fn read_list_of_triggers(&self) -> Result<Vec<Trigger>> {
        self.read::<TriggersResponse>(&[CLIENT, TRIGGER]).await
    }

    /// Make a request to the `GET client/trigger/<id>` API
    pub async fn read_trigger_by_id(&self, trigger_id: &str) -> Result<Trigger> {
        self.read::<TriggerResponse>(&[CLIENT, TRIGGER, trigger_id])
            .await
    }

    /// Make a request to the `POST client/cluster/<name>/trigger/must-gather` API
    pub async fn add_trigger(
        &self,
        username: &str,
        cluster_name: &str,
        reason: &str,
        link: &str,
    ) -> Result<()> {
        self.write(
            Method::POST,
            &[CLIENT, "cluster", cluster_name, TRIGGER, "must-gather"],
            &[("username", username), ("reason", reason), ("link", link)],
            None,
        )
        .await
    }

    /// Make a request to the `DELETE client/trigger/<id>` API
    pub async fn delete_trigger(&self, trigger_id: &str) -> Result<()> {
        self.write(Method::DELETE, &[CLIENT, TRIGGER, trigger_id], &[], None)
            .await
    }

    /// Make a request to the `PUT client/trigger/<id>/activate` API
    pub async fn activate_trigger(&self, trigger_id: &str) -> Result<()> {
        self.write(
            Method::PUT,
            &[CLIENT, TRIGGER, trigger_id, "activate"],
            &[],
            None,
        )
        .await
    }

    /// Make a request to the `PUT client/trigger/<id>/deactivate` API
    pub async fn deactivate_trigger(&self, trigger_id: &str) -> Result<()> {
        self.write(
            Method::PUT,
            &[CLIENT, TRIGGER, trigger_id, "deactivate"],
            &[],
            None,
        )
        .await
    }
}
