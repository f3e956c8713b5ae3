use anyhow::Result;
use auth0_management::{CheckpointPaginationInfo, GetRolesQuery, ManagementClient};
use clap::{Args, Subcommand};

use crate::commands::print_next_cursor;
use crate::output::{print_members, print_roles, OutputFormat};

#[derive(Args)]
pub struct RolesArgs {
    #[command(subcommand)]
    pub command: RolesCommand,
}

#[derive(Subcommand)]
pub enum RolesCommand {
    /// List roles
    List {
        /// Case-insensitive filter on the role name
        #[arg(long)]
        name: Option<String>,
    },
    /// List users holding a role
    Users {
        /// Role ID (e.g. rol_0000000000000001)
        id: String,

        /// Results per page
        #[arg(long, default_value = "50")]
        take: u32,

        /// Cursor returned by the previous page
        #[arg(long)]
        from: Option<String>,
    },
}

pub async fn run(args: &RolesArgs, client: &ManagementClient, format: &OutputFormat) -> Result<()> {
    match &args.command {
        RolesCommand::List { name } => {
            let mut query = GetRolesQuery::default();
            if let Some(name) = name {
                query = query.with_name_filter(name);
            }
            let page = client.roles().list(&query, None).await?;
            print_roles(page.items(), format);
        }
        RolesCommand::Users { id, take, from } => {
            let mut pagination = CheckpointPaginationInfo::new(*take);
            if let Some(from) = from {
                pagination = pagination.with_from(from);
            }
            let page = client.roles().users(id, &pagination).await?;
            let rows: Vec<_> = page
                .iter()
                .map(|u| (u.user_id.as_str(), u.email.as_deref(), u.name.as_deref()))
                .collect();
            print_members(&rows, format);
            print_next_cursor(page.next_cursor());
        }
    }
    Ok(())
}
