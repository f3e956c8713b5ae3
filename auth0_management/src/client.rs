//! Entry point bundling one [`Connection`] with the resource clients.

use std::sync::Arc;

use crate::connection::Connection;
use crate::error::Result;
use crate::resources::{
    ConnectionsClient, JobsClient, LogsClient, OrganizationsClient, RolesClient, UsersClient,
};

/// Management API client for one tenant.
///
/// Cheap to clone; all clones and all resource clients share the same
/// [`Connection`].
#[derive(Debug, Clone)]
pub struct ManagementClient {
    connection: Arc<Connection>,
}

impl ManagementClient {
    /// Creates a client for `domain` (e.g. `tenant.eu.auth0.com`) using an
    /// already issued management API token.
    pub fn new(domain: &str, token: impl Into<String>) -> Result<Self> {
        Ok(Self::from_connection(Connection::new(domain, token)?))
    }

    /// Wraps a connection built with [`Connection::builder`]. Used for testing with wiremock.
    pub fn from_connection(connection: Connection) -> Self {
        Self {
            connection: Arc::new(connection),
        }
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn users(&self) -> UsersClient {
        UsersClient::new(Arc::clone(&self.connection))
    }

    pub fn roles(&self) -> RolesClient {
        RolesClient::new(Arc::clone(&self.connection))
    }

    pub fn organizations(&self) -> OrganizationsClient {
        OrganizationsClient::new(Arc::clone(&self.connection))
    }

    pub fn connections(&self) -> ConnectionsClient {
        ConnectionsClient::new(Arc::clone(&self.connection))
    }

    pub fn logs(&self) -> LogsClient {
        LogsClient::new(Arc::clone(&self.connection))
    }

    pub fn jobs(&self) -> JobsClient {
        JobsClient::new(Arc::clone(&self.connection))
    }
}
