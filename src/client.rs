//! Low-level client for the HBase REST gateway's schema endpoints
//!
//! Two operations, both a single request/response round-trip with no retry
//! or backoff: table creation is a `PUT /{table}/schema` carrying the
//! column-family document, deletion a `DELETE /{table}/schema`. Any 2xx
//! answer is success; everything else surfaces as
//! [`AdminError::UnexpectedStatus`] with the gateway's body attached.

use reqwest::{Client, RequestBuilder, Response};
use tracing::debug;

use crate::config::{AdminConfig, Credentials};
use crate::error::{AdminError, Result};
use crate::schema::TableSchema;

/// Long-lived gateway client, safe for concurrent use across tasks
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    config: AdminConfig,
}

impl RestClient {
    pub fn new(config: AdminConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.credentials {
            Some(Credentials::Basic { username, password }) => {
                request.basic_auth(username, Some(password))
            }
            None => request,
        }
    }

    /// Create a table with the given column families
    ///
    /// `table` is the effective (already prefixed) remote name. The gateway
    /// treats a re-PUT of an existing schema as an update, so repeating a
    /// creation with an identical schema succeeds.
    pub async fn create_table(&self, table: &str, families: &[&str]) -> Result<()> {
        let schema = TableSchema::new(table, families);
        let url = self.config.schema_url(table);
        debug!(table, url = %url, families = ?families, "creating table");

        let request = self.apply_auth(self.http.put(&url)).json(&schema);
        let response = request.send().await?;
        Self::check(table, response).await
    }

    /// Delete a table (and all of its column families)
    pub async fn delete_table(&self, table: &str) -> Result<()> {
        let url = self.config.schema_url(table);
        debug!(table, url = %url, "deleting table");

        let request = self.apply_auth(self.http.delete(&url));
        let response = request.send().await?;
        Self::check(table, response).await
    }

    async fn check(table: &str, response: Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(AdminError::UnexpectedStatus {
                table: table.to_string(),
                status: status.as_u16(),
                body,
            })
        }
    }
}
