//! Test doubles for the command layer

use std::collections::VecDeque;
use std::io;

use async_trait::async_trait;
use bytes::Bytes;
use insights_client::models::{Cluster, ClusterConfiguration, ConfigurationProfile, Trigger};
use insights_client::{ControllerApi, Error, Result};
use parking_lot::Mutex;
use rustyline::error::ReadlineError;

use super::Session;
use crate::shell::Prompter;

pub(super) type TestSession<C> = Session<C, ScriptedPrompter, Vec<u8>>;

/// Session over `api` answering prompts from `answers`, output captured
pub(super) fn session<C: ControllerApi>(api: C, answers: &[&str]) -> TestSession<C> {
    Session::new(api, ScriptedPrompter::new(answers), vec![])
}

pub(super) fn output<C: ControllerApi>(session: &TestSession<C>) -> String {
    String::from_utf8(session.output().clone()).unwrap()
}

/// Answers every prompt from a fixed script; an exhausted script behaves like Ctrl-D
#[derive(Debug, Default)]
pub(super) struct ScriptedPrompter {
    answers: VecDeque<String>,
    /// Messages shown by `read_input` and `read_file_name`
    pub(super) questions: Vec<String>,
    /// Files offered by the last `read_file_name`
    pub(super) offered_files: Vec<String>,
}

impl ScriptedPrompter {
    pub(super) fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| (*a).to_owned()).collect(),
            ..Default::default()
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn read_command(&mut self) -> Result<Option<String>, ReadlineError> {
        Ok(self.answers.pop_front())
    }

    fn read_input(&mut self, message: &str) -> Result<Option<String>, ReadlineError> {
        self.questions.push(message.to_owned());
        Ok(self.answers.pop_front())
    }

    fn read_file_name(
        &mut self,
        message: &str,
        files: &[String],
    ) -> Result<Option<String>, ReadlineError> {
        self.offered_files = files.to_vec();
        self.read_input(message)
    }
}

/// Terminal that hands out `command` and then fails on every prompt
#[derive(Debug)]
pub(super) struct BrokenTerminal {
    command: Option<String>,
}

impl BrokenTerminal {
    pub(super) fn new(command: &str) -> Self {
        Self {
            command: Some(command.to_owned()),
        }
    }
}

fn terminal_gone() -> ReadlineError {
    ReadlineError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
}

impl Prompter for BrokenTerminal {
    fn read_command(&mut self) -> Result<Option<String>, ReadlineError> {
        self.command.take().map(Some).ok_or_else(terminal_gone)
    }

    fn read_input(&mut self, _message: &str) -> Result<Option<String>, ReadlineError> {
        Err(terminal_gone())
    }

    fn read_file_name(
        &mut self,
        _message: &str,
        _files: &[String],
    ) -> Result<Option<String>, ReadlineError> {
        Err(terminal_gone())
    }
}

pub(super) const CLUSTER_0: &str = "00000000-0000-0000-0000-000000000000";
pub(super) const CLUSTER_1: &str = "00000000-0000-0000-0000-000000000001";

/// Controller answering with a small fixed data set and recording every call
#[derive(Debug, Default)]
pub(super) struct CannedController {
    /// Answer every listing with no records
    empty: bool,
    calls: Mutex<Vec<String>>,
}

impl CannedController {
    pub(super) fn empty() -> Self {
        Self {
            empty: true,
            ..Default::default()
        }
    }

    /// Calls made so far, with their arguments
    pub(super) fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().push(call.into());
    }

    fn records<T>(&self, records: impl FnOnce() -> Vec<T>) -> Vec<T> {
        if self.empty { vec![] } else { records() }
    }

    fn clusters() -> Vec<Cluster> {
        vec![
            Cluster {
                id: 0,
                name: CLUSTER_0.to_owned(),
            },
            Cluster {
                id: 1,
                name: CLUSTER_1.to_owned(),
            },
        ]
    }

    fn profiles() -> Vec<ConfigurationProfile> {
        vec![ConfigurationProfile {
            id: 0,
            configuration: r#"{"no_op":"X"}"#.to_owned(),
            changed_at: "2019-01-01T00:00:00.000000Z".to_owned(),
            changed_by: "admin".to_owned(),
            description: "default".to_owned(),
        }]
    }

    fn configurations() -> Vec<ClusterConfiguration> {
        vec![
            ClusterConfiguration {
                id: 0,
                cluster: CLUSTER_0.to_owned(),
                configuration: "0".to_owned(),
                changed_at: "2019-01-01T00:00:00.000000Z".to_owned(),
                changed_by: "admin".to_owned(),
                active: "1".to_owned(),
                reason: "initial".to_owned(),
            },
            ClusterConfiguration {
                id: 1,
                cluster: CLUSTER_1.to_owned(),
                configuration: "0".to_owned(),
                changed_at: "2019-01-02T00:00:00.000000Z".to_owned(),
                changed_by: "tester".to_owned(),
                active: "0".to_owned(),
                reason: "disabled".to_owned(),
            },
        ]
    }

    fn triggers() -> Vec<Trigger> {
        vec![Trigger {
            id: 0,
            trigger_type: "must-gather".to_owned(),
            cluster: CLUSTER_0.to_owned(),
            reason: "reason".to_owned(),
            link: "https://example.com/bug/1".to_owned(),
            triggered_at: "2019-01-01T00:00:00.000000Z".to_owned(),
            triggered_by: "admin".to_owned(),
            acked_at: "2019-01-02T00:00:00.000000Z".to_owned(),
            parameters: "{}".to_owned(),
            active: 1,
        }]
    }
}

fn not_found() -> Error {
    Error::RemoteStatus {
        status: "Not found".to_owned(),
    }
}

#[async_trait]
impl ControllerApi for CannedController {
    async fn read_list_of_clusters(&self) -> Result<Vec<Cluster>> {
        self.record("read_list_of_clusters");
        Ok(self.records(Self::clusters))
    }

    async fn add_cluster(&self, name: &str) -> Result<()> {
        self.record(format!("add_cluster {name}"));
        Ok(())
    }

    async fn delete_cluster(&self, cluster_id: &str) -> Result<()> {
        self.record(format!("delete_cluster {cluster_id}"));
        Ok(())
    }

    async fn read_list_of_triggers(&self) -> Result<Vec<Trigger>> {
        self.record("read_list_of_triggers");
        Ok(self.records(Self::triggers))
    }

    async fn read_trigger_by_id(&self, trigger_id: &str) -> Result<Trigger> {
        self.record(format!("read_trigger_by_id {trigger_id}"));
        Self::triggers()
            .into_iter()
            .find(|t| t.id.to_string() == trigger_id)
            .ok_or_else(not_found)
    }

    async fn add_trigger(
        &self,
        username: &str,
        cluster_name: &str,
        reason: &str,
        link: &str,
    ) -> Result<()> {
        self.record(format!("add_trigger {username} {cluster_name} {reason} {link}"));
        Ok(())
    }

    async fn delete_trigger(&self, trigger_id: &str) -> Result<()> {
        self.record(format!("delete_trigger {trigger_id}"));
        Ok(())
    }

    async fn activate_trigger(&self, trigger_id: &str) -> Result<()> {
        self.record(format!("activate_trigger {trigger_id}"));
        Ok(())
    }

    async fn deactivate_trigger(&self, trigger_id: &str) -> Result<()> {
        self.record(format!("deactivate_trigger {trigger_id}"));
        Ok(())
    }

    async fn read_list_of_configuration_profiles(&self) -> Result<Vec<ConfigurationProfile>> {
        self.record("read_list_of_configuration_profiles");
        Ok(self.records(Self::profiles))
    }

    async fn read_configuration_profile(&self, profile_id: &str) -> Result<ConfigurationProfile> {
        self.record(format!("read_configuration_profile {profile_id}"));
        Self::profiles()
            .into_iter()
            .find(|p| p.id.to_string() == profile_id)
            .ok_or_else(not_found)
    }

    async fn add_configuration_profile(
        &self,
        username: &str,
        description: &str,
        configuration: Bytes,
    ) -> Result<()> {
        self.record(format!(
            "add_configuration_profile {username} {description} {}",
            String::from_utf8_lossy(&configuration)
        ));
        Ok(())
    }

    async fn delete_configuration_profile(&self, profile_id: &str) -> Result<()> {
        self.record(format!("delete_configuration_profile {profile_id}"));
        Ok(())
    }

    async fn read_list_of_configurations(&self) -> Result<Vec<ClusterConfiguration>> {
        self.record("read_list_of_configurations");
        Ok(self.records(Self::configurations))
    }

    async fn read_cluster_configuration_by_id(&self, configuration_id: &str) -> Result<String> {
        self.record(format!("read_cluster_configuration_by_id {configuration_id}"));
        if configuration_id == "0" {
            Ok(r#"{"no_op":"X"}"#.to_owned())
        } else {
            Err(not_found())
        }
    }

    async fn add_cluster_configuration(
        &self,
        username: &str,
        cluster: &str,
        reason: &str,
        description: &str,
        configuration: Bytes,
    ) -> Result<()> {
        self.record(format!(
            "add_cluster_configuration {username} {cluster} {reason} {description} {}",
            String::from_utf8_lossy(&configuration)
        ));
        Ok(())
    }

    async fn enable_cluster_configuration(&self, configuration_id: &str) -> Result<()> {
        self.record(format!("enable_cluster_configuration {configuration_id}"));
        Ok(())
    }

    async fn disable_cluster_configuration(&self, configuration_id: &str) -> Result<()> {
        self.record(format!("disable_cluster_configuration {configuration_id}"));
        Ok(())
    }

    async fn delete_cluster_configuration(&self, configuration_id: &str) -> Result<()> {
        self.record(format!("delete_cluster_configuration {configuration_id}"));
        Ok(())
    }
}

/// Controller whose every call fails with the remote status "error"
#[derive(Debug, Default, Clone, Copy)]
pub(super) struct FailingController;

fn remote_error() -> Error {
    Error::RemoteStatus {
        status: "error".to_owned(),
    }
}

#[async_trait]
impl ControllerApi for FailingController {
    async fn read_list_of_clusters(&self) -> Result<Vec<Cluster>> {
        Err(remote_error())
    }

    async fn add_cluster(&self, _name: &str) -> Result<()> {
        Err(remote_error())
    }

    async fn delete_cluster(&self, _cluster_id: &str) -> Result<()> {
        Err(remote_error())
    }

    async fn read_list_of_triggers(&self) -> Result<Vec<Trigger>> {
        Err(remote_error())
    }

    async fn read_trigger_by_id(&self, _trigger_id: &str) -> Result<Trigger> {
        Err(remote_error())
    }

    async fn add_trigger(
        &self,
        _username: &str,
        _cluster_name: &str,
        _reason: &str,
        _link: &str,
    ) -> Result<()> {
        Err(remote_error())
    }

    async fn delete_trigger(&self, _trigger_id: &str) -> Result<()> {
        Err(remote_error())
    }

    async fn activate_trigger(&self, _trigger_id: &str) -> Result<()> {
        Err(remote_error())
    }

    async fn deactivate_trigger(&self, _trigger_id: &str) -> Result<()> {
        Err(remote_error())
    }

    async fn read_list_of_configuration_profiles(&self) -> Result<Vec<ConfigurationProfile>> {
        Err(remote_error())
    }

    async fn read_configuration_profile(&self, _profile_id: &str) -> Result<ConfigurationProfile> {
        Err(remote_error())
    }

    async fn add_configuration_profile(
        &self,
        _username: &str,
        _description: &str,
        _configuration: Bytes,
    ) -> Result<()> {
        Err(remote_error())
    }

    async fn delete_configuration_profile(&self, _profile_id: &str) -> Result<()> {
        Err(remote_error())
    }

    async fn read_list_of_configurations(&self) -> Result<Vec<ClusterConfiguration>> {
        Err(remote_error())
    }

    async fn read_cluster_configuration_by_id(&self, _configuration_id: &str) -> Result<String> {
        Err(remote_error())
    }

    async fn add_cluster_configuration(
        &self,
        _username: &str,
        _cluster: &str,
        _reason: &str,
        _description: &str,
        _configuration: Bytes,
    ) -> Result<()> {
        Err(remote_error())
    }

    async fn enable_cluster_configuration(&self, _configuration_id: &str) -> Result<()> {
        Err(remote_error())
    }

    async fn disable_cluster_configuration(&self, _configuration_id: &str) -> Result<()> {
        Err(remote_error())
    }

    async fn delete_cluster_configuration(&self, _configuration_id: &str) -> Result<()> {
        Err(remote_error())
    }
}
