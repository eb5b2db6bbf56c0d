//! SchemaAdmin — group-level provisioning and teardown
//!
//! Resolves a table group to its roster, fires one gateway call per table
//! concurrently (full fan-out, no throttling), awaits all of them, and
//! reports a single aggregate outcome. Per-table results are logged as a
//! side effect; the caller sees `Ok` only when every call succeeded,
//! otherwise the first observed failure.
//!
//! # Example
//!
//! ```rust,no_run
//! use hbase_rest_admin::{AdminConfig, SchemaAdmin, TableGroup};
//!
//! #[tokio::main]
//! async fn main() -> hbase_rest_admin::Result<()> {
//!     let config = AdminConfig::new("http://hbase:8080")?.with_prefix("prod_");
//!     let admin = SchemaAdmin::new(config)?;
//!
//!     admin.provision(TableGroup::Validations).await?;
//!     Ok(())
//! }
//! ```

use std::future::Future;

use futures::future::join_all;
use tracing::{error, info};

use crate::client::RestClient;
use crate::config::AdminConfig;
use crate::error::{AdminError, Result};
use crate::schema::{Catalog, TableGroup};

/// Result of a single per-table gateway call
#[derive(Debug)]
pub struct TableOutcome {
    /// Effective (prefixed) remote table name
    pub table: String,
    pub result: Result<()>,
}

impl TableOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Group-level schema reconciler over a long-lived gateway client
pub struct SchemaAdmin {
    client: RestClient,
    catalog: Catalog,
}

impl SchemaAdmin {
    /// Create an administrator over the standard catalog
    pub fn new(config: AdminConfig) -> Result<Self> {
        Self::with_catalog(config, Catalog::standard())
    }

    /// Create an administrator over a custom catalog
    pub fn with_catalog(config: AdminConfig, catalog: Catalog) -> Result<Self> {
        Ok(Self {
            client: RestClient::new(config)?,
            catalog,
        })
    }

    pub fn config(&self) -> &AdminConfig {
        self.client.config()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // ─── Aggregate Operations ───

    /// Create every table in a group, with its column families
    ///
    /// Idempotent from the caller's perspective: the computed schema per
    /// table is identical on every call for the same group, and the gateway
    /// accepts a re-PUT of an existing schema. Returns `Ok` only when every
    /// per-table call succeeded, otherwise the first observed failure.
    pub async fn provision(&self, group: TableGroup) -> Result<()> {
        let outcomes = self.provision_report(group).await?;
        Self::aggregate(outcomes, "tables configured", "Error configuring tables")
    }

    /// Delete every table in a group
    pub async fn decommission(&self, group: TableGroup) -> Result<()> {
        let outcomes = self.decommission_report(group).await?;
        Self::aggregate(outcomes, "tables removed", "Error removing tables")
    }

    // ─── Per-Table Reports ───

    /// Provision a group, returning every per-table outcome in roster order
    pub async fn provision_report(&self, group: TableGroup) -> Result<Vec<TableOutcome>> {
        let calls = self.catalog.tables_for(group).into_iter().map(|def| {
            let table = self.config().table_name(&def.base_name);
            async move {
                let result = self.client.create_table(&table, &def.families).await;
                match &result {
                    Ok(()) => info!(table = %table, "table created"),
                    Err(e) => error!(table = %table, error = %e, "create table failed"),
                }
                TableOutcome { table, result }
            }
        });
        self.join_with_deadline("provision", join_all(calls.collect::<Vec<_>>()))
            .await
    }

    /// Decommission a group, returning every per-table outcome in roster order
    pub async fn decommission_report(&self, group: TableGroup) -> Result<Vec<TableOutcome>> {
        let calls = self.catalog.roster(group).iter().map(|base| {
            let table = self.config().table_name(base);
            async move {
                let result = self.client.delete_table(&table).await;
                match &result {
                    Ok(()) => info!(table = %table, "table removed"),
                    Err(e) => error!(table = %table, error = %e, "delete table failed"),
                }
                TableOutcome { table, result }
            }
        });
        self.join_with_deadline("decommission", join_all(calls.collect::<Vec<_>>()))
            .await
    }

    // ─── Internals ───

    async fn join_with_deadline<F>(&self, op: &'static str, joined: F) -> Result<Vec<TableOutcome>>
    where
        F: Future<Output = Vec<TableOutcome>>,
    {
        match self.config().deadline {
            Some(deadline) => tokio::time::timeout(deadline, joined)
                .await
                .map_err(|_| AdminError::DeadlineExceeded { op, deadline }),
            None => Ok(joined.await),
        }
    }

    /// Collapse per-table outcomes into the legacy first-error aggregate
    fn aggregate(outcomes: Vec<TableOutcome>, ok_msg: &str, err_msg: &str) -> Result<()> {
        let total = outcomes.len();
        let first_error = outcomes
            .into_iter()
            .find_map(|outcome| outcome.result.err());

        match first_error {
            Some(e) => {
                error!(error = %e, "{}", err_msg);
                Err(e)
            }
            None => {
                info!(tables = total, "{}", ok_msg);
                Ok(())
            }
        }
    }
}
