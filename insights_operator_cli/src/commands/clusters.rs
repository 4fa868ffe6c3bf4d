use std::io::Write;

use insights_client::ControllerApi;

use super::Session;
use crate::Result;
use crate::shell::Prompter;

impl<C, P, W> Session<C, P, W>
where
    C: ControllerApi,
    P: Prompter,
    W: Write,
{
    pub(super) async fn list_clusters(&mut self) -> Result<()> {
        let clusters = match self.api.read_list_of_clusters().await {
            Ok(clusters) => clusters,
            Err(e) => return self.report_error("Error reading list of clusters", &e),
        };

        writeln!(self.out, "{}", self.colors.header("List of clusters"))?;
        writeln!(self.out, "   #   ID Name")?;
        for (i, cluster) in clusters.iter().enumerate() {
            writeln!(self.out, "{:>4} {:>4} {}", i, cluster.id, cluster.name)?;
        }
        Ok(())
    }

    pub(super) async fn add_cluster(&mut self) -> Result<()> {
        let Some(name) = self.ask("Cluster name: ")? else {
            return self.cancelled();
        };

        match self.api.add_cluster(&name).await {
            Ok(()) => self.report_success(format!("Cluster {name} has been added")),
            Err(e) => self.report_error("Error adding new cluster", &e),
        }
    }

    pub(super) async fn delete_cluster(&mut self, id: Option<String>) -> Result<()> {
        let Some(id) = self.ask_id(id, "Cluster")? else {
            return self.cancelled();
        };
        if !self.confirm(&format!("Delete cluster {id}?"))? {
            return self.cancelled();
        }

        match self.api.delete_cluster(&id).await {
            Ok(()) => self.report_success(format!("Cluster {id} has been deleted")),
            Err(e) => self.report_error("Error deleting cluster", &e),
        }
    }
}
