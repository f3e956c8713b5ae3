use anyhow::Result;
use auth0_management::{GetLogsQuery, ManagementClient, PaginationInfo};
use clap::{Args, Subcommand};

use crate::output::{print_logs, OutputFormat};

#[derive(Args)]
pub struct LogsArgs {
    #[command(subcommand)]
    pub command: LogsCommand,
}

#[derive(Subcommand)]
pub enum LogsCommand {
    /// List log events, newest first
    List {
        /// Lucene search query (e.g. 'type:f')
        #[arg(long)]
        q: Option<String>,

        /// Page number, starting at 0
        #[arg(long, default_value = "0")]
        page: u32,

        /// Results per page
        #[arg(long, default_value = "50")]
        per_page: u32,
    },
}

pub async fn run(args: &LogsArgs, client: &ManagementClient, format: &OutputFormat) -> Result<()> {
    match &args.command {
        LogsCommand::List { q, page, per_page } => {
            let mut query = GetLogsQuery::default();
            if let Some(q) = q {
                query = query.with_q(q);
            }
            let pagination = PaginationInfo::new(*page, *per_page, false);
            let page = client.logs().list(&query, Some(&pagination)).await?;
            print_logs(page.items(), format);
        }
    }
    Ok(())
}
