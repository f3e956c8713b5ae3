use anyhow::Result;
use auth0_management::{CheckpointPaginationInfo, ManagementClient};
use clap::{Args, Subcommand};

use crate::commands::print_next_cursor;
use crate::output::{print_members, OutputFormat};

#[derive(Args)]
pub struct OrgsArgs {
    #[command(subcommand)]
    pub command: OrgsCommand,
}

#[derive(Subcommand)]
pub enum OrgsCommand {
    /// List members of an organization
    Members {
        /// Organization ID (e.g. org_0000000000000001)
        id: String,

        /// Results per page
        #[arg(long, default_value = "50")]
        take: u32,

        /// Cursor returned by the previous page
        #[arg(long)]
        from: Option<String>,
    },
}

pub async fn run(args: &OrgsArgs, client: &ManagementClient, format: &OutputFormat) -> Result<()> {
    match &args.command {
        OrgsCommand::Members { id, take, from } => {
            let mut pagination = CheckpointPaginationInfo::new(*take);
            if let Some(from) = from {
                pagination = pagination.with_from(from);
            }
            let page = client.organizations().members(id, &pagination).await?;
            let rows: Vec<_> = page
                .iter()
                .map(|m| (m.user_id.as_str(), m.email.as_deref(), m.name.as_deref()))
                .collect();
            print_members(&rows, format);
            print_next_cursor(page.next_cursor());
        }
    }
    Ok(())
}
