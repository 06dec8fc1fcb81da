//! Relationships: named join predicates between logical tables.

use serde::{Deserialize, Serialize};

/// SQL join type used when a relationship is deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JoinType {
    #[default]
    Inner,
    LeftOuter,
}

/// Cardinality of a relationship. Metadata only: it does not change the
/// generated SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    OneToOne,
    #[default]
    ManyToOne,
    OneToMany,
}

/// One pair of join columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RelationshipColumn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_column: Option<String>,
}

impl RelationshipColumn {
    pub fn new(left_column: impl Into<String>, right_column: impl Into<String>) -> Self {
        Self {
            left_column: Some(left_column.into()),
            right_column: Some(right_column.into()),
        }
    }
}

/// A named join predicate between two logical tables.
///
/// `left_table` and `right_table` reference tables by name. Referential
/// integrity is checked by the validation pass, not at construction time,
/// since tables and relationships may be added in any order.
///
/// The first entry of `relationship_columns` is the canonical join predicate;
/// downstream consumers only ever use the first pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub name: String,
    pub left_table: String,
    pub right_table: String,
    pub relationship_columns: Vec<RelationshipColumn>,
    #[serde(default)]
    pub join_type: JoinType,
    #[serde(default)]
    pub relationship_type: RelationshipType,
}

impl Relationship {
    /// Create a relationship with a single join-column pair.
    pub fn new(
        name: impl Into<String>,
        left_table: impl Into<String>,
        right_table: impl Into<String>,
        left_column: impl Into<String>,
        right_column: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            left_table: left_table.into(),
            right_table: right_table.into(),
            relationship_columns: vec![RelationshipColumn::new(left_column, right_column)],
            join_type: JoinType::default(),
            relationship_type: RelationshipType::default(),
        }
    }

    pub fn with_join_type(mut self, join_type: JoinType) -> Self {
        self.join_type = join_type;
        self
    }

    pub fn with_relationship_type(mut self, relationship_type: RelationshipType) -> Self {
        self.relationship_type = relationship_type;
        self
    }

    /// The canonical join predicate (first column pair), if any.
    pub fn join_predicate(&self) -> Option<&RelationshipColumn> {
        self.relationship_columns.first()
    }
}
