//! Relational-schema descriptions handed in by the database layer.
//!
//! Connectivity lives outside this crate: a connector extracts table and
//! column names plus type strings, materializes them as [`SchemaInfo`], and
//! passes that here. [`model_from_schema`] turns the description into a
//! first-cut semantic model (numeric columns become facts, everything else
//! becomes dimensions, plus a row-count metric per table).

use serde::{Deserialize, Serialize};

use crate::model::{BaseTable, Columns, Dimension, Fact, Metric, SemanticModel, Table};

/// A column of a physical table: name plus the backend's type string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: String,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

/// A physical table: ordered columns and an optional primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub primary_key: Vec<String>,
}

impl TableInfo {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnInfo>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            columns,
            primary_key: vec![],
        }
    }
}

/// An already-materialized schema description: the collaborator interface
/// between database connectors and the model core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SchemaInfo {
    pub tables: Vec<TableInfo>,
}

/// Broad semantic category of a backend type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    Numeric,
    Temporal,
    Categorical,
}

/// Infer a column's category from its type string.
///
/// Substring matching over lowercased type names; anything unrecognized is
/// treated as categorical.
pub fn infer_type_category(data_type: &str) -> TypeCategory {
    let ty = data_type.to_ascii_lowercase();
    if ["int", "float", "double", "decimal", "numeric"]
        .iter()
        .any(|t| ty.contains(t))
    {
        TypeCategory::Numeric
    } else if ["date", "time", "timestamp"].iter().any(|t| ty.contains(t)) {
        TypeCategory::Temporal
    } else {
        TypeCategory::Categorical
    }
}

/// Build a first-cut semantic model from a schema description.
///
/// Each table becomes a logical table whose numeric columns are facts and
/// whose temporal/categorical columns are dimensions, with `expr` set to the
/// column name. Every table also contributes a `<table>_count` metric.
pub fn model_from_schema(
    model_name: impl Into<String>,
    database: &str,
    schema: Option<&str>,
    info: &SchemaInfo,
) -> SemanticModel {
    let mut model = SemanticModel::new(model_name);
    model.description = Some(match schema {
        Some(s) => format!("Semantic model for {}.{}", database, s),
        None => format!("Semantic model for {}", database),
    });

    for table_info in &info.tables {
        let mut table = Table::new(&table_info.name);
        table.description = table_info.comment.clone();
        table.base_table = Some(BaseTable {
            database: Some(database.to_string()),
            schema: schema.map(ToString::to_string),
            table: Some(table_info.name.clone()),
        });
        if !table_info.primary_key.is_empty() {
            table.primary_key = Some(Columns::new(table_info.primary_key.clone()));
        }

        for column in &table_info.columns {
            match infer_type_category(&column.data_type) {
                TypeCategory::Numeric => {
                    table.facts.push(
                        Fact::new(&column.name)
                            .with_data_type(&column.data_type)
                            .with_expr(&column.name),
                    );
                }
                TypeCategory::Temporal | TypeCategory::Categorical => {
                    table.dimensions.push(
                        Dimension::new(&column.name)
                            .with_data_type(&column.data_type)
                            .with_expr(&column.name),
                    );
                }
            }
        }

        model.add_table(table);
    }

    for table_info in &info.tables {
        model.add_metric(
            Metric::new(format!("{}_count", table_info.name), "COUNT(*)").with_description(
                format!("Count of records in {}", table_info.name),
            ),
        );
    }

    model
}
