//! Configuration for the schema administrator

use std::time::Duration;

use url::Url;

use crate::error::Result;

/// Credentials presented to the REST gateway on every call
#[derive(Debug, Clone)]
pub enum Credentials {
    Basic { username: String, password: String },
}

/// Connection and naming configuration
///
/// The `prefix` is prepended to every base table name before it reaches the
/// wire, so one gateway can host several deployments side by side.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Base URL of the HBase REST gateway (e.g. `http://hbase:8080`)
    pub endpoint: Url,

    /// Deployment prefix prepended to every table name (default: empty)
    pub prefix: String,

    /// Per-request timeout (default: 30s)
    pub timeout: Duration,

    /// Optional deadline for a whole provision/decommission run
    pub deadline: Option<Duration>,

    /// Optional gateway credentials
    pub credentials: Option<Credentials>,
}

impl AdminConfig {
    /// Create config with sensible defaults
    pub fn new(endpoint: &str) -> Result<Self> {
        Ok(Self {
            endpoint: Url::parse(endpoint)?,
            prefix: String::new(),
            timeout: Duration::from_secs(30),
            deadline: None,
            credentials: None,
        })
    }

    /// Override the table-name prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Override the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Bound a whole group operation by a deadline
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Attach basic-auth credentials
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials::Basic {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Effective remote name for a base table name: always `prefix + base`
    pub fn table_name(&self, base: &str) -> String {
        format!("{}{}", self.prefix, base)
    }

    /// Schema endpoint for a (already prefixed) table name
    pub fn schema_url(&self, table: &str) -> String {
        format!(
            "{}/{}/schema",
            self.endpoint.as_str().trim_end_matches('/'),
            table
        )
    }
}
