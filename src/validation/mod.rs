//! Deployment-readiness validation of semantic models.
//!
//! Findings are data, not errors: an incomplete model is a normal input.
//! Issues block deployment (referential or structural defects); warnings are
//! quality signals that do not.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use crate::model::SemanticModel;

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// A table has no dimensions.
    TableWithoutDimensions { table: String },
    /// A table declares a primary key with no columns.
    TableWithoutPrimaryKey { table: String },
    /// A relationship references a table name not in the model.
    UnknownRelationshipTable {
        relationship: String,
        side: Side,
        table: String,
    },
    /// A model-level metric has no expression.
    MetricWithoutExpr { metric: Option<String> },
}

/// Which side of a relationship a finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::TableWithoutDimensions { table } => {
                write!(f, "Table {} has no dimensions", table)
            }
            Finding::TableWithoutPrimaryKey { table } => {
                write!(f, "Table {} has no primary key", table)
            }
            Finding::UnknownRelationshipTable {
                relationship,
                side,
                table,
            } => {
                let side = match side {
                    Side::Left => "left",
                    Side::Right => "right",
                };
                write!(
                    f,
                    "Relationship {} references unknown {} table: {}",
                    relationship, side, table
                )
            }
            Finding::MetricWithoutExpr { metric } => {
                write!(
                    f,
                    "Metric {} has no expression",
                    metric.as_deref().unwrap_or("<unnamed>")
                )
            }
        }
    }
}

impl Finding {
    /// Issues block deployment; warnings do not.
    pub fn is_issue(&self) -> bool {
        matches!(
            self,
            Finding::UnknownRelationshipTable { .. } | Finding::MetricWithoutExpr { .. }
        )
    }
}

/// Entity counts included in a validation report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelCounts {
    pub tables: usize,
    pub relationships: usize,
    pub metrics: usize,
    pub verified_queries: usize,
}

/// The result of a validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
    pub counts: ModelCounts,
}

/// Validate a model for deployment readiness.
pub fn validate(model: &SemanticModel) -> ValidationReport {
    let mut findings = Vec::new();

    check_tables(model, &mut findings);
    check_relationships(model, &mut findings);
    check_metrics(model, &mut findings);

    let (issues, warnings): (Vec<_>, Vec<_>) =
        findings.into_iter().partition(Finding::is_issue);

    ValidationReport {
        valid: issues.is_empty(),
        issues: issues.iter().map(ToString::to_string).collect(),
        warnings: warnings.iter().map(ToString::to_string).collect(),
        counts: ModelCounts {
            tables: model.tables.len(),
            relationships: model.relationships.len(),
            metrics: model.metrics.len(),
            verified_queries: model.verified_queries.len(),
        },
    }
}

fn check_tables(model: &SemanticModel, findings: &mut Vec<Finding>) {
    for table in &model.tables {
        if table.dimensions.is_empty() {
            findings.push(Finding::TableWithoutDimensions {
                table: table.name.clone(),
            });
        }
        if let Some(pk) = &table.primary_key {
            if pk.columns.is_empty() {
                findings.push(Finding::TableWithoutPrimaryKey {
                    table: table.name.clone(),
                });
            }
        }
    }
}

fn check_relationships(model: &SemanticModel, findings: &mut Vec<Finding>) {
    let table_names: HashSet<&str> = model.tables.iter().map(|t| t.name.as_str()).collect();
    for rel in &model.relationships {
        if !table_names.contains(rel.left_table.as_str()) {
            findings.push(Finding::UnknownRelationshipTable {
                relationship: rel.name.clone(),
                side: Side::Left,
                table: rel.left_table.clone(),
            });
        }
        if !table_names.contains(rel.right_table.as_str()) {
            findings.push(Finding::UnknownRelationshipTable {
                relationship: rel.name.clone(),
                side: Side::Right,
                table: rel.right_table.clone(),
            });
        }
    }
}

fn check_metrics(model: &SemanticModel, findings: &mut Vec<Finding>) {
    for metric in &model.metrics {
        if metric.expr.as_deref().map_or(true, |e| e.trim().is_empty()) {
            findings.push(Finding::MetricWithoutExpr {
                metric: metric.name.clone(),
            });
        }
    }
}
