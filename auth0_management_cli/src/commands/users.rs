use anyhow::Result;
use auth0_management::{GetUsersQuery, ManagementClient, PaginationInfo, Query, SortDirection};
use clap::{Args, Subcommand};

use crate::output::{print_json, print_users, OutputFormat};

#[derive(Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Subcommand)]
pub enum UsersCommand {
    /// List users
    List(ListArgs),
    /// Get a single user by ID
    Get(GetArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Lucene search query (e.g. 'email:"jane@example.com"')
    #[arg(long)]
    pub q: Option<String>,

    /// Only users from this connection
    #[arg(long)]
    pub connection: Option<String>,

    /// Sort field (e.g. created_at, last_login)
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort ascending instead of descending
    #[arg(long)]
    pub asc: bool,

    /// Page number, starting at 0
    #[arg(long, default_value = "0")]
    pub page: u32,

    /// Results per page
    #[arg(long, default_value = "50")]
    pub per_page: u32,
}

#[derive(Args)]
pub struct GetArgs {
    /// User ID (e.g. auth0|64b7f1c2a9e3d5f6a7b8c9d0)
    pub id: String,

    /// Comma-separated fields to return
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,
}

pub async fn run(args: &UsersArgs, client: &ManagementClient, format: &OutputFormat) -> Result<()> {
    match &args.command {
        UsersCommand::List(list) => {
            let mut query = GetUsersQuery::default();
            if let Some(q) = &list.q {
                query = query.with_q(q).with_search_engine("v3");
            }
            if let Some(connection) = &list.connection {
                query = query.with_connection(connection);
            }
            if let Some(field) = &list.sort_by {
                let direction = if list.asc {
                    SortDirection::Asc
                } else {
                    SortDirection::Desc
                };
                query = query.with_sort(field, direction);
            }

            let pagination = PaginationInfo::new(list.page, list.per_page, true);
            let page = client.users().list(&query, Some(&pagination)).await?;
            if let Some(paging) = page.paging() {
                if let Some(total) = paging.total {
                    eprintln!("{} of {} users", page.len(), total);
                }
            }
            print_users(page.items(), format);
        }
        UsersCommand::Get(get) => {
            let fields: Vec<&str> = get.fields.iter().map(String::as_str).collect();
            let user = client.users().get(&get.id, &fields).await?;
            match format {
                OutputFormat::Json => print_json(&user),
                _ => print_users(std::slice::from_ref(&user), format),
            }
        }
    }
    Ok(())
}
