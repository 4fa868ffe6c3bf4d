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
    pub(super) async fn list_profiles(&mut self) -> Result<()> {
        let profiles = match self.api.read_list_of_configuration_profiles().await {
            Ok(profiles) => profiles,
            Err(e) => return self.report_error("Error reading list of configuration profiles", &e),
        };

        let header = self.colors.header("List of configuration profiles");
        writeln!(self.out, "{header}")?;
        writeln!(
            self.out,
            "   #   ID Changed at           Changed by           Description"
        )?;
        for (i, profile) in profiles.iter().enumerate() {
            writeln!(
                self.out,
                "{:>4} {:>4} {:<20} {:<20} {}",
                i,
                profile.id,
                trim_timestamp(&profile.changed_at),
                profile.changed_by,
                profile.description
            )?;
        }
        Ok(())
    }

    pub(super) async fn describe_profile(&mut self, id: Option<String>) -> Result<()> {
        let Some(id) = self.ask_id(id, "Profile")? else {
            return self.cancelled();
        };
        let profile = match self.api.read_configuration_profile(&id).await {
            Ok(profile) => profile,
            Err(e) => return self.report_error("Error reading configuration profile", &e),
        };

        writeln!(self.out, "{}", self.colors.header("Configuration profile"))?;
        writeln!(self.out, "ID:          {}", profile.id)?;
        let changed_at = trim_timestamp(&profile.changed_at);
        writeln!(self.out, "Changed at:  {changed_at}")?;
        writeln!(self.out, "Changed by:  {}", profile.changed_by)?;
        writeln!(self.out, "Description: {}", profile.description)?;
        writeln!(self.out, "{}", self.colors.bold("Configuration:"))?;
        writeln!(self.out, "{}", pretty_json(&profile.configuration))?;
        Ok(())
    }

    pub(super) async fn add_profile(&mut self) -> Result<()> {
        let Some(username) = self.logged_in_user()? else {
            return Ok(());
        };
        let Some(description) = self.ask("Description: ")? else {
            return self.cancelled();
        };
        let Some(configuration) = self.read_configuration_file()? else {
            return Ok(());
        };

        match self
            .api
            .add_configuration_profile(&username, &description, configuration)
            .await
        {
            Ok(()) => self.report_success("Configuration profile has been created"),
            Err(e) => self.report_error("Error creating configuration profile", &e),
        }
    }

    pub(super) async fn delete_profile(&mut self, id: Option<String>) -> Result<()> {
        let Some(id) = self.ask_id(id, "Profile")? else {
            return self.cancelled();
        };
        if !self.confirm(&format!("Delete configuration profile {id}?"))? {
            return self.cancelled();
        }

        match self.api.delete_configuration_profile(&id).await {
            Ok(()) => self.report_success(format!("Configuration profile {id} has been deleted")),
            Err(e) => self.report_error("Error deleting configuration profile", &e),
        }
    }
}
