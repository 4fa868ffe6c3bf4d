use std::io::Write;

use insights_client::ControllerApi;

use super::Session;
use crate::Result;
use crate::output::trim_timestamp;
use crate::shell::Prompter;

impl<C, P, W> Session<C, P, W>
where
    C: ControllerApi,
    P: Prompter,
    W: Write,
{
    pub(super) async fn list_triggers(&mut self) -> Result<()> {
        let triggers = match self.api.read_list_of_triggers().await {
            Ok(triggers) => triggers,
            Err(e) => return self.report_error("Error reading list of triggers", &e),
        };

        writeln!(self.out, "{}", self.colors.header("List of triggers"))?;
        writeln!(
            self.out,
            "   #   ID Type         Cluster                              \
             Triggered at         Triggered by    Active Acked at"
        )?;
        for (i, trigger) in triggers.iter().enumerate() {
            writeln!(
                self.out,
                "{:>4} {:>4} {:<12} {:<36} {:<20} {:<15} {} {}",
                i,
                trigger.id,
                trigger.trigger_type,
                trigger.cluster,
                trim_timestamp(&trigger.triggered_at),
                trigger.triggered_by,
                self.colors.yes_no(trigger.is_active(), 6),
                trim_timestamp(&trigger.acked_at)
            )?;
        }
        Ok(())
    }

    pub(super) async fn describe_trigger(&mut self, id: Option<String>) -> Result<()> {
        let Some(id) = self.ask_id(id, "Trigger")? else {
            return self.cancelled();
        };
        let trigger = match self.api.read_trigger_by_id(&id).await {
            Ok(trigger) => trigger,
            Err(e) => return self.report_error("Error reading trigger", &e),
        };

        writeln!(self.out, "{}", self.colors.header("Trigger info"))?;
        writeln!(self.out, "ID:           {}", trigger.id)?;
        writeln!(self.out, "Type:         {}", trigger.trigger_type)?;
        writeln!(self.out, "Cluster:      {}", trigger.cluster)?;
        writeln!(self.out, "Reason:       {}", trigger.reason)?;
        writeln!(self.out, "Link:         {}", trigger.link)?;
        let triggered_at = trim_timestamp(&trigger.triggered_at);
        writeln!(self.out, "Triggered at: {triggered_at}")?;
        writeln!(self.out, "Triggered by: {}", trigger.triggered_by)?;
        let acked_at = trim_timestamp(&trigger.acked_at);
        writeln!(self.out, "Acked at:     {acked_at}")?;
        writeln!(self.out, "Parameters:   {}", trigger.parameters)?;
        let active = self.colors.yes_no(trigger.is_active(), 0);
        writeln!(self.out, "Active:       {active}")?;
        Ok(())
    }

    pub(super) async fn add_trigger(&mut self) -> Result<()> {
        let Some(username) = self.logged_in_user()? else {
            return Ok(());
        };
        let Some(cluster) = self.ask("Cluster name: ")? else {
            return self.cancelled();
        };
        let Some(reason) = self.ask("Reason: ")? else {
            return self.cancelled();
        };
        let Some(link) = self.ask("Link: ")? else {
            return self.cancelled();
        };

        match self
            .api
            .add_trigger(&username, &cluster, &reason, &link)
            .await
        {
            Ok(()) => self.report_success("Trigger has been created"),
            Err(e) => self.report_error("Error creating trigger", &e),
        }
    }

    pub(super) async fn delete_trigger(&mut self, id: Option<String>) -> Result<()> {
        let Some(id) = self.ask_id(id, "Trigger")? else {
            return self.cancelled();
        };

        match self.api.delete_trigger(&id).await {
            Ok(()) => self.report_success(format!("Trigger {id} has been deleted")),
            Err(e) => self.report_error("Error deleting trigger", &e),
        }
    }

    pub(super) async fn activate_trigger(&mut self, id: Option<String>) -> Result<()> {
        let Some(id) = self.ask_id(id, "Trigger")? else {
            return self.cancelled();
        };

        match self.api.activate_trigger(&id).await {
            Ok(()) => self.report_success(format!("Trigger {id} has been activated")),
            Err(e) => self.report_error("Error activating trigger", &e),
        }
    }

    pub(super) async fn deactivate_trigger(&mut self, id: Option<String>) -> Result<()> {
        let Some(id) = self.ask_id(id, "Trigger")? else {
            return self.cancelled();
        };

        match self.api.deactivate_trigger(&id).await {
            Ok(()) => self.report_success(format!("Trigger {id} has been deactivated")),
            Err(e) => self.report_error("Error deactivating trigger", &e),
        }
    }
}
