//! Table catalog and column-family schemas
//!
//! Each table group has:
//! - An ordered roster of base table names
//! - A column-family set per table, fixed at creation time
//! - A serde wire representation for the gateway's schema endpoint

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::AdminError;

// ─── Column Families ───

/// Families every table receives
pub const DEFAULT_FAMILIES: [&str; 2] = ["f", "d"];

/// Extra families for the two aggregate-statistics tables
pub const STATS_FAMILIES: [&str; 3] = ["type", "result", "metric"];

/// Counter family for every table in the validations group
pub const INCREMENT_FAMILY: &str = "inc";

/// Tables that carry the extended statistics families
pub const STATS_TABLES: [&str; 2] = ["agg_stats", "agg_account_stats"];

// ─── Table Groups ───

/// A named bundle of tables provisioned and decommissioned together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableGroup {
    /// Ledger and transaction data
    Ledgers,
    /// Validator and consensus metadata
    Validations,
}

impl TableGroup {
    pub const ALL: [TableGroup; 2] = [TableGroup::Ledgers, TableGroup::Validations];

    pub fn as_str(&self) -> &'static str {
        match self {
            TableGroup::Ledgers => "ledgers",
            TableGroup::Validations => "validations",
        }
    }
}

impl fmt::Display for TableGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableGroup {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ledgers" => Ok(TableGroup::Ledgers),
            "validations" => Ok(TableGroup::Validations),
            other => Err(AdminError::Config(format!("unknown table group: {other}"))),
        }
    }
}

// ─── Rosters ───

/// Base names for the ledgers group
pub const LEDGER_TABLES: [&str; 29] = [
    "ledgers",
    "transactions",
    "exchanges",
    "payments",
    "balance_changes",
    "account_exchanges",
    "account_offers",
    "account_payments",
    "accounts_created",
    "memos",
    "lu_ledgers_by_index",
    "lu_ledgers_by_time",
    "lu_transactions_by_time",
    "lu_account_transactions",
    "lu_affected_account_transactions",
    "lu_account_offers_by_sequence",
    "lu_account_memos",
    "agg_payments",
    "agg_exchanges",
    "agg_metrics",
    "agg_stats",
    "agg_account_stats",
    "agg_account_balance_changes",
    "agg_account_payments",
    "agg_account_exchanges",
    "top_markets",
    "top_currencies",
    "issuer_balance_snapshot",
    "control",
];

/// Base names for the validations group
pub const VALIDATION_TABLES: [&str; 6] = [
    "validations_by_ledger",
    "validations_by_validator",
    "validations_by_date",
    "validators_by_reporter",
    "validator_reports",
    "cluster_ledgers",
];

// ─── Catalog ───

/// Immutable mapping from group to its ordered table roster
///
/// Order is irrelevant to correctness (calls are independent) but is
/// preserved for deterministic logging. A group with no roster resolves to
/// an empty list, which provisions as a zero-call success.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    rosters: Vec<(TableGroup, Vec<String>)>,
}

impl Catalog {
    /// The production catalog: the full ledgers and validations rosters
    pub fn standard() -> Self {
        Catalog::default()
            .with_roster(TableGroup::Ledgers, LEDGER_TABLES)
            .with_roster(TableGroup::Validations, VALIDATION_TABLES)
    }

    /// Replace the roster for a group (builder style, test-friendly)
    pub fn with_roster<I, S>(mut self, group: TableGroup, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roster: Vec<String> = tables.into_iter().map(Into::into).collect();
        match self.rosters.iter_mut().find(|(g, _)| *g == group) {
            Some((_, existing)) => *existing = roster,
            None => self.rosters.push((group, roster)),
        }
        self
    }

    /// Ordered base names for a group; empty when the group has no roster
    pub fn roster(&self, group: TableGroup) -> &[String] {
        self.rosters
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, roster)| roster.as_slice())
            .unwrap_or(&[])
    }

    /// Expand a group into full table definitions with their family sets
    pub fn tables_for(&self, group: TableGroup) -> Vec<TableDefinition> {
        self.roster(group)
            .iter()
            .map(|base| TableDefinition {
                families: column_families(base, group),
                base_name: base.clone(),
            })
            .collect()
    }
}

/// Column families for a table, as a pure function of its base name and group
///
/// Three independent branches: every table gets the default pair, the two
/// aggregate-statistics tables get the extended trio, and every table in the
/// validations group gets the increment counter family.
pub fn column_families(base_name: &str, group: TableGroup) -> Vec<&'static str> {
    let mut families: Vec<&'static str> = DEFAULT_FAMILIES.to_vec();

    if STATS_TABLES.contains(&base_name) {
        families.extend(STATS_FAMILIES);
    }

    if group == TableGroup::Validations {
        families.push(INCREMENT_FAMILY);
    }

    families
}

/// A base table name paired with its computed column families
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDefinition {
    pub base_name: String,
    pub families: Vec<&'static str>,
}

// ─── Wire Types ───

/// Table schema document for the gateway's `PUT /{table}/schema` endpoint
#[derive(Debug, Clone, Serialize)]
pub struct TableSchema {
    pub name: String,
    #[serde(rename = "ColumnSchema")]
    pub column_schema: Vec<ColumnFamilySchema>,
}

/// One column-family entry in a [`TableSchema`]
#[derive(Debug, Clone, Serialize)]
pub struct ColumnFamilySchema {
    pub name: String,
}

impl TableSchema {
    pub fn new(name: impl Into<String>, families: &[&str]) -> Self {
        Self {
            name: name.into(),
            column_schema: families
                .iter()
                .map(|family| ColumnFamilySchema {
                    name: (*family).to_string(),
                })
                .collect(),
        }
    }
}
