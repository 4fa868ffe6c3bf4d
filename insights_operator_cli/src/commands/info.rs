use std::io::Write;

use insights_client::ControllerApi;

use super::Session;
use crate::shell::Prompter;
use crate::{Result, VERSION};

const LICENSE: &str = "\
Licensed under the Apache License, Version 2.0 (the \"License\");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an \"AS IS\" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.";

const AUTHORS: &[&str] = &["Insights Operator Controller Developers"];

impl<C, P, W> Session<C, P, W>
where
    C: ControllerApi,
    P: Prompter,
    W: Write,
{
    pub(super) fn print_help(&mut self) -> Result<()> {
        write!(
            self.out,
            include_str!("../help/help.txt"),
            self.colors.header("Session:"),
            self.colors.header("Clusters:"),
            self.colors.header("Configuration profiles:"),
            self.colors.header("Cluster configurations:"),
            self.colors.header("Must-gather triggers:"),
        )?;
        Ok(())
    }

    pub(super) fn print_version(&mut self) -> Result<()> {
        let version = self.colors.bold(VERSION);
        writeln!(self.out, "Insights operator CLI version {version}")?;
        Ok(())
    }

    pub(super) fn print_license(&mut self) -> Result<()> {
        writeln!(self.out, "{LICENSE}")?;
        Ok(())
    }

    pub(super) fn print_copyright(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "Copyright (c) the Insights Operator Controller authors"
        )?;
        writeln!(self.out, "{}", self.colors.bold("Authors:"))?;
        for author in AUTHORS {
            writeln!(self.out, "  {author}")?;
        }
        Ok(())
    }
}
