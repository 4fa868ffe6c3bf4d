use std::io::Write;

use insights_client::ControllerApi;

use super::Session;
use crate::Result;
use crate::output::{pretty_json, trim_timestamp};
use crate::shell::Prompter;

impl<C, P, W> Session<C, P, W>
where
    C: ControllerApi,
    P: Prompter,
    W: Write,
{
    pub(super) async fn list_configurations(&mut self) -> Result<()> {
        let configurations = match self.api.read_list_of_configurations().await {
            Ok(configurations) => configurations,
            Err(e) => return self.report_error("Error reading list of configurations", &e),
        };

        writeln!(self.out, "{}", self.colors.header("List of configurations"))?;
        writeln!(
            self.out,
            "   #   ID Profile Cluster                              \
             Changed at           Changed by      Active Reason"
        )?;
        for (i, configuration) in configurations.iter().enumerate() {
            writeln!(
                self.out,
                "{:>4} {:>4} {:>7} {:<36} {:<20} {:<15} {} {}",
                i,
                configuration.id,
                configuration.configuration,
                configuration.cluster,
                trim_timestamp(&configuration.changed_at),
                configuration.changed_by,
                self.colors.yes_no(configuration.is_active(), 6),
                configuration.reason
            )?;
        }
        Ok(())
    }

    pub(super) async fn describe_configuration(&mut self, id: Option<String>) -> Result<()> {
        let Some(id) = self.ask_id(id, "Configuration")? else {
            return self.cancelled();
        };
        let configuration = match self.api.read_cluster_configuration_by_id(&id).await {
            Ok(configuration) => configuration,
            Err(e) => return self.report_error("Error reading cluster configuration", &e),
        };

        writeln!(self.out, "{}", self.colors.header("Cluster configuration"))?;
        writeln!(self.out, "{}", pretty_json(&configuration))?;
        Ok(())
    }

    pub(super) async fn add_configuration(&mut self) -> Result<()> {
        let Some(username) = self.logged_in_user()? else {
            return Ok(());
        };
        let Some(cluster) = self.ask("Cluster: ")? else {
            return self.cancelled();
        };
        let Some(reason) = self.ask("Reason: ")? else {
            return self.cancelled();
        };
        let Some(description) = self.ask("Description: ")? else {
            return self.cancelled();
        };
        let Some(configuration) = self.read_configuration_file()? else {
            return Ok(());
        };

        match self
            .api
            .add_cluster_configuration(&username, &cluster, &reason, &description, configuration)
            .await
        {
            Ok(()) => self.report_success("Configuration has been created"),
            Err(e) => self.report_error("Error creating cluster configuration", &e),
        }
    }

    pub(super) async fn enable_configuration(&mut self, id: Option<String>) -> Result<()> {
        let Some(id) = self.ask_id(id, "Configuration")? else {
            return self.cancelled();
        };

        match self.api.enable_cluster_configuration(&id).await {
            Ok(()) => self.report_success(format!("Configuration {id} has been enabled")),
            Err(e) => self.report_error("Error enabling configuration", &e),
        }
    }

    pub(super) async fn disable_configuration(&mut self, id: Option<String>) -> Result<()> {
        let Some(id) = self.ask_id(id, "Configuration")? else {
            return self.cancelled();
        };

        match self.api.disable_cluster_configuration(&id).await {
            Ok(()) => self.report_success(format!("Configuration {id} has been disabled")),
            Err(e) => self.report_error("Error disabling configuration", &e),
        }
    }

    pub(super) async fn delete_configuration(&mut self, id: Option<String>) -> Result<()> {
        let Some(id) = self.ask_id(id, "Configuration")? else {
            return self.cancelled();
        };

        match self.api.delete_cluster_configuration(&id).await {
            Ok(()) => self.report_success(format!("Configuration {id} has been deleted")),
            Err(e) => self.report_error("Error deleting configuration", &e),
        }
    }
}
