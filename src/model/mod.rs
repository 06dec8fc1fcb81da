//! Semantic model entity types.
//!
//! A [`SemanticModel`] is a business-oriented description of a dataset:
//! logical tables with typed dimensions and facts, named relationships
//! between tables, model-level metrics, and verified queries. It is
//! independent of any single physical database.

pub mod error;
pub mod loader;
pub mod metric;
pub mod relationship;
pub mod table;
pub mod verified_query;

pub use error::{DocumentError, DocumentResult, ModelError, ModelResult, VerifiedQueryError};
pub use metric::Metric;
pub use relationship::{JoinType, Relationship, RelationshipColumn, RelationshipType};
pub use table::{
    AccessModifier, BaseTable, Columns, Dimension, Fact, Filter, SearchService, Table,
    TimeDimension,
};
pub use verified_query::{parse_verified_at, TimestampInput, VerifiedQuery};

use serde::{Deserialize, Serialize};

/// Free-text instruction blocks attached to a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CustomInstructions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql_generation: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_categorization: Option<Vec<String>>,
}

/// The root aggregate: tables, relationships, metrics, and verified queries.
///
/// Inserts are first-write-wins: adding a table, relationship, or metric
/// whose name already exists is a silent no-op, never an overwrite. Lookups
/// return the first match or `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticModel {
    /// Identifier-safe model name, unique among models
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// Logical tables. The document form also accepts this list under the
    /// legacy key `logical_tables`; `tables` is the canonical key on write.
    #[serde(default, alias = "logical_tables", skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<Table>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Relationship>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<Metric>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub verified_queries: Vec<VerifiedQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_instructions: Option<CustomInstructions>,
}

impl SemanticModel {
    /// Create an empty model.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            comments: None,
            tables: vec![],
            relationships: vec![],
            metrics: vec![],
            verified_queries: vec![],
            custom_instructions: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a logical table. No-op if a table with the same name exists.
    pub fn add_table(&mut self, table: Table) {
        if self.tables.iter().any(|t| t.name == table.name) {
            return;
        }
        self.tables.push(table);
    }

    /// Add a relationship. No-op if a relationship with the same name exists.
    pub fn add_relationship(&mut self, relationship: Relationship) {
        if self
            .relationships
            .iter()
            .any(|r| r.name == relationship.name)
        {
            return;
        }
        self.relationships.push(relationship);
    }

    /// Add a model-level metric. No-op if a metric with the same name exists.
    ///
    /// Metric names are optional and the dedup key is the `Option` itself, so
    /// a second unnamed metric is dropped the same way a second `revenue`
    /// would be. Historical behavior, kept as-is.
    pub fn add_metric(&mut self, metric: Metric) {
        if self.metrics.iter().any(|m| m.name == metric.name) {
            return;
        }
        self.metrics.push(metric);
    }

    /// Add a verified query. Queries are not deduplicated.
    pub fn add_verified_query(&mut self, query: VerifiedQuery) {
        self.verified_queries.push(query);
    }

    /// Look up a table by name.
    pub fn get_table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Look up a table by name, mutably.
    pub fn get_table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.iter_mut().find(|t| t.name == name)
    }

    /// Look up a model-level metric by name.
    pub fn get_metric(&self, name: &str) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.name.as_deref() == Some(name))
    }

    /// Look up a relationship by name.
    pub fn get_relationship(&self, name: &str) -> Option<&Relationship> {
        self.relationships.iter().find(|r| r.name == name)
    }

    /// Serialize to the canonical YAML document form.
    ///
    /// Unset fields are omitted so the output stays human-editable.
    pub fn to_yaml(&self) -> DocumentResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> DocumentResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a model from a YAML document. Accepts `logical_tables` as an
    /// alias for `tables`.
    pub fn from_yaml_str(yaml: &str) -> DocumentResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a model from a JSON document.
    pub fn from_json_str(json: &str) -> DocumentResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
