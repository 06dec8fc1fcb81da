//! Metric definitions.

use serde::{Deserialize, Serialize};

use super::table::AccessModifier;

/// An aggregate or derived business KPI expressed as a SQL formula.
///
/// The name is optional: a metric under construction may be unnamed. The
/// deployment-readiness validator reports a metric with no `expr` as an
/// issue; the constructor accepts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Metric {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub access_modifier: AccessModifier,
    /// SQL expression defining the metric calculation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expr: Option<String>,
}

impl Metric {
    /// Create a named metric with an expression.
    pub fn new(name: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            expr: Some(expr.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_synonyms(mut self, synonyms: Vec<String>) -> Self {
        self.synonyms = synonyms;
        self
    }
}
