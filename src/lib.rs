//! # hbase-rest-admin
//!
//! Schema lifecycle tooling for HBase tables, driven through the REST
//! gateway's management endpoints. Given a named table group, ensures every
//! table and its column families exist (idempotent creation) or removes the
//! whole group, fanning out one remote call per table.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │             hbase-rest-admin             │
//! ├─────────────────────┬────────────────────┤
//! │     SchemaAdmin     │      Catalog       │
//! │  (fan-out, join,    │  (group rosters,   │
//! │   aggregate result) │   family sets)     │
//! ├─────────────────────┴────────────────────┤
//! │                RestClient                │
//! │   PUT /{table}/schema  DELETE /{table}/schema
//! ├──────────────────────────────────────────┤
//! │             HBase REST gateway           │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hbase_rest_admin::{AdminConfig, SchemaAdmin, TableGroup};
//!
//! #[tokio::main]
//! async fn main() -> hbase_rest_admin::Result<()> {
//!     let config = AdminConfig::new("http://hbase:8080")?.with_prefix("prod_");
//!     let admin = SchemaAdmin::new(config)?;
//!
//!     // Create all validations tables (6 calls, concurrent)
//!     admin.provision(TableGroup::Validations).await?;
//!
//!     // Tear the group back down
//!     admin.decommission(TableGroup::Validations).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Semantics
//!
//! - **Idempotent provisioning**: the computed schema per table is identical
//!   on every run; the gateway accepts a re-PUT of an existing schema.
//! - **Full fan-out**: all per-table calls for a group are in flight at
//!   once. Rosters are small (under 30 tables), so no throttling is applied.
//! - **First-error aggregate**: `provision`/`decommission` return the first
//!   observed per-table failure; the `*_report` variants expose every
//!   per-table outcome instead.
//! - **No retries**: each table is a single request/response round-trip.
//!   After any failure, re-run the operation — it is safe to repeat.

pub mod admin;
pub mod client;
pub mod config;
pub mod error;
pub mod schema;
pub mod telemetry;

// Re-exports for convenience
pub use admin::{SchemaAdmin, TableOutcome};
pub use client::RestClient;
pub use config::{AdminConfig, Credentials};
pub use error::{AdminError, Result};
pub use schema::{Catalog, TableDefinition, TableGroup};
