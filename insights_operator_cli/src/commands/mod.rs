//! Commands available in the interactive shell
//!
//! Every command lives on [`Session`]: it calls exactly one [`ControllerApi`] operation and
//! prints either the result or an error header followed by the error. Failures never end the
//! session.

mod clusters;
mod configurations;
mod info;
mod profiles;
mod triggers;

#[cfg(test)]
mod testing;

use std::fmt::Display;
use std::io::Write;
use std::path::PathBuf;

use bytes::Bytes;
use insights_client::ControllerApi;
use tracing::{debug, info};

use crate::Result;
use crate::output::Colorizer;
use crate::shell::{Prompter, Resource, ShellCommand};

/// Everything a command needs: the controller, the operator and the terminal
#[derive(Debug)]
pub struct Session<C, P, W> {
    api: C,
    prompter: P,
    out: W,
    colors: Colorizer,
    /// Name of the operator, required by commands that record who made a change
    username: Option<String>,
    /// Ask before deleting clusters and profiles
    ask_for_confirmation: bool,
    /// Directory the configuration files are read from
    configurations_dir: PathBuf,
    /// Files found in `configurations_dir`, refreshed by every command that uploads one
    configuration_files: Vec<String>,
}

impl<C, P, W> Session<C, P, W>
where
    C: ControllerApi,
    P: Prompter,
    W: Write,
{
    /// Plain output, nobody logged in and no confirmations until configured otherwise
    pub fn new(api: C, prompter: P, out: W) -> Self {
        Self {
            api,
            prompter,
            out,
            colors: Colorizer::new(false),
            username: None,
            ask_for_confirmation: false,
            configurations_dir: PathBuf::from("configurations"),
            configuration_files: vec![],
        }
    }

    pub fn with_colors(mut self, colors: Colorizer) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_username(mut self, username: Option<String>) -> Self {
        self.username = username;
        self
    }

    pub fn with_confirmation(mut self, ask_for_confirmation: bool) -> Self {
        self.ask_for_confirmation = ask_for_confirmation;
        self
    }

    pub fn with_configurations_dir(mut self, configurations_dir: impl Into<PathBuf>) -> Self {
        self.configurations_dir = configurations_dir.into();
        self
    }

    #[cfg(test)]
    pub(super) fn api(&self) -> &C {
        &self.api
    }

    #[cfg(test)]
    pub(super) fn prompter(&self) -> &P {
        &self.prompter
    }

    #[cfg(test)]
    pub(super) fn output(&self) -> &W {
        &self.out
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Read, evaluate and print commands until the operator quits
    pub async fn run(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "Type {} for the list of commands, {} to leave",
            self.colors.bold("help"),
            self.colors.bold("quit")
        )?;
        self.out.flush()?;

        while let Some(line) = self.prompter.read_command()? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match ShellCommand::try_from(line) {
                Ok(ShellCommand::Quit) => break,
                Ok(command) => self.execute(command).await?,
                Err(message) => writeln!(self.out, "{}", self.colors.error(message))?,
            }
            self.out.flush()?;
        }

        info!("exiting at user request");
        writeln!(self.out, "Quitting")?;
        self.out.flush()?;
        Ok(())
    }

    /// Run a single command
    ///
    /// Controller failures are printed and do not fail the command; terminal and output
    /// failures do.
    pub async fn execute(&mut self, command: ShellCommand) -> Result<()> {
        debug!(?command, "executing command");
        match command {
            ShellCommand::Help => self.print_help(),
            ShellCommand::Version => self.print_version(),
            ShellCommand::License => self.print_license(),
            ShellCommand::Copyright => self.print_copyright(),
            ShellCommand::Login => self.login(),
            // handled by the read loop
            ShellCommand::Quit => Ok(()),
            ShellCommand::List(Resource::Cluster) => self.list_clusters().await,
            ShellCommand::List(Resource::Profile) => self.list_profiles().await,
            ShellCommand::List(Resource::Configuration) => self.list_configurations().await,
            ShellCommand::List(Resource::Trigger) => self.list_triggers().await,
            ShellCommand::Describe(Resource::Profile, id) => self.describe_profile(id).await,
            ShellCommand::Describe(Resource::Configuration, id) => {
                self.describe_configuration(id).await
            }
            ShellCommand::Describe(Resource::Trigger, id) => self.describe_trigger(id).await,
            ShellCommand::Describe(Resource::Cluster, _) => {
                self.report_failure("Clusters cannot be described")
            }
            ShellCommand::Add(Resource::Cluster) => self.add_cluster().await,
            ShellCommand::Add(Resource::Profile) => self.add_profile().await,
            ShellCommand::Add(Resource::Configuration) => self.add_configuration().await,
            ShellCommand::Add(Resource::Trigger) => self.add_trigger().await,
            ShellCommand::Delete(Resource::Cluster, id) => self.delete_cluster(id).await,
            ShellCommand::Delete(Resource::Profile, id) => self.delete_profile(id).await,
            ShellCommand::Delete(Resource::Configuration, id) => {
                self.delete_configuration(id).await
            }
            ShellCommand::Delete(Resource::Trigger, id) => self.delete_trigger(id).await,
            ShellCommand::EnableConfiguration(id) => self.enable_configuration(id).await,
            ShellCommand::DisableConfiguration(id) => self.disable_configuration(id).await,
            ShellCommand::ActivateTrigger(id) => self.activate_trigger(id).await,
            ShellCommand::DeactivateTrigger(id) => self.deactivate_trigger(id).await,
        }
    }

    fn login(&mut self) -> Result<()> {
        let Some(username) = self.ask("Username: ")? else {
            return self.cancelled();
        };
        self.report_success(format!("Logged in as {username}"))?;
        self.username = Some(username);
        Ok(())
    }

    /// Ask a question, treating an empty answer as a cancellation
    fn ask(&mut self, message: &str) -> Result<Option<String>> {
        let answer = self.prompter.read_input(message)?;
        Ok(non_empty(answer))
    }

    /// Use `id` when given on the command line, ask for it otherwise
    fn ask_id(&mut self, id: Option<String>, what: &str) -> Result<Option<String>> {
        match id {
            Some(id) => Ok(Some(id)),
            None => self.ask(&format!("{what} ID: ")),
        }
    }

    /// The name of the logged in operator, or a printed reminder to log in
    fn logged_in_user(&mut self) -> Result<Option<String>> {
        if self.username.is_none() {
            self.report_failure("Not logged in, use the 'login' command first")?;
        }
        Ok(self.username.clone())
    }

    /// Whether the operator agrees to a destructive command
    ///
    /// Always true unless confirmations are enabled.
    fn confirm(&mut self, question: &str) -> Result<bool> {
        if !self.ask_for_confirmation {
            return Ok(true);
        }
        let question = format!("{question} [y/N]: ");
        let Some(answer) = self.prompter.read_input(&question)? else {
            return Ok(false);
        };
        let answer = answer.trim().to_ascii_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    fn cancelled(&mut self) -> Result<()> {
        self.report_failure("Cancelled")
    }

    fn report_failure(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", self.colors.error(message))?;
        Ok(())
    }

    fn report_error(&mut self, header: &str, err: &dyn Display) -> Result<()> {
        writeln!(self.out, "{}", self.colors.error(header))?;
        writeln!(self.out, "{err}")?;
        Ok(())
    }

    fn report_success(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.out, "{}", self.colors.success(message))?;
        Ok(())
    }

    /// Rebuild the list of files offered when asking for a configuration file
    fn refresh_configuration_files(&mut self) {
        self.configuration_files = match std::fs::read_dir(&self.configurations_dir) {
            Ok(entries) => {
                let mut files: Vec<String> = entries
                    .filter_map(|entry| entry.ok())
                    .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
                    .filter_map(|entry| entry.file_name().into_string().ok())
                    .collect();
                files.sort();
                files
            }
            Err(e) => {
                let dir = self.configurations_dir.display();
                debug!(%e, %dir, "cannot list configuration files");
                vec![]
            }
        };
    }

    /// Ask for a configuration file and read it
    ///
    /// `None` when the operator cancelled or the file could not be read; the latter is
    /// reported to the operator.
    fn read_configuration_file(&mut self) -> Result<Option<Bytes>> {
        self.refresh_configuration_files();
        let message = "Configuration file (TAB to complete): ";
        let files = &self.configuration_files;
        let answer = self.prompter.read_file_name(message, files)?;
        let Some(file_name) = non_empty(answer) else {
            self.cancelled()?;
            return Ok(None);
        };

        let path = self.configurations_dir.join(&file_name);
        match std::fs::read(&path) {
            Ok(contents) => Ok(Some(Bytes::from(contents))),
            Err(e) => {
                self.report_error("Cannot read configuration file", &e)?;
                Ok(None)
            }
        }
    }
}

/// Trimmed answer, `None` when the prompt was cancelled or left empty
fn non_empty(answer: Option<String>) -> Option<String> {
    answer
        .map(|answer| answer.trim().to_owned())
        .filter(|answer| !answer.is_empty())
}
