use std::sync::Arc;

use serde_json::json;

use crate::connection::Connection;
use crate::envelope::Json;
use crate::error::Result;
use crate::request::{ApiRequest, FileAttachment};
use crate::types::{ImportUsersRequest, Job};
use crate::uri::{PathParams, QueryParams};

/// Client for the `/jobs` endpoints.
#[derive(Debug, Clone)]
pub struct JobsClient {
    connection: Arc<Connection>,
}

impl JobsClient {
    pub(crate) fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    /// Starts a bulk import. The users file goes up as the `users` part of a
    /// multipart form; the other parameters become form fields.
    pub async fn import_users(&self, request: &ImportUsersRequest) -> Result<Job> {
        let url = self.connection.uri(
            "jobs/users-imports",
            &PathParams::new(),
            &QueryParams::new(),
        )?;
        let params = json!({
            "connection_id": request.connection_id,
            "upsert": request.upsert,
            "send_completion_email": request.send_completion_email,
            "external_id": request.external_id,
        });
        let file = FileAttachment::new("users", &request.file_name, request.users.clone())
            .with_content_type("application/json");
        self.connection
            .send(ApiRequest::post(url).json(&params)?.attach(file), &Json::new())
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Job> {
        let url = self.connection.uri(
            "jobs/{id}",
            &PathParams::new().with("id", id),
            &QueryParams::new(),
        )?;
        self.connection.send(ApiRequest::get(url), &Json::new()).await
    }
}
