//! Stepwise construction of semantic models.
//!
//! The builder is a small state machine: `create_model` makes a model
//! current, the `add_*` operations mutate it in any order, and `build`
//! detaches and returns it, leaving the builder with no current model.
//! Every mutating operation other than `create_model` and `load_yaml_file`
//! requires a current model.
//!
//! # Example
//!
//! ```
//! use semantica::builder::SemanticModelBuilder;
//!
//! let mut builder = SemanticModelBuilder::new();
//! builder.create_model("sales", Some("Retail sales"));
//! builder
//!     .add_table("orders", "analytics", "public", "orders", None, Some(vec!["order_id".into()]))?
//!     .add_dimension("orders", "region", Some("STRING"))?
//!     .add_metric("order_count", "COUNT(*)", None)?;
//! let model = builder.build()?;
//! assert_eq!(model.tables.len(), 1);
//! # Ok::<(), semantica::model::ModelError>(())
//! ```

use std::path::Path;

use log::info;

use crate::model::error::{ModelError, ModelResult};
use crate::model::{
    loader, BaseTable, Columns, Dimension, Fact, Metric, Relationship, SemanticModel, Table,
    VerifiedQuery,
};
use crate::validation::{self, ValidationReport};

/// Builder that constructs one model at a time and tracks completed models
/// by name.
#[derive(Debug, Default)]
pub struct SemanticModelBuilder {
    models: Vec<SemanticModel>,
    current: Option<SemanticModel>,
}

impl SemanticModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new model and make it current.
    ///
    /// If a model is already current it is silently replaced as the current
    /// pointer; the earlier model remains in the completed list only if it
    /// was registered there. Call [`build`](Self::build) first to keep it.
    pub fn create_model(&mut self, name: impl Into<String>, description: Option<&str>) -> &mut Self {
        let mut model = SemanticModel::new(name);
        model.description = description.map(ToString::to_string);
        self.models.push(model.clone());
        self.current = Some(model);
        self
    }

    fn current_mut(&mut self) -> ModelResult<&mut SemanticModel> {
        self.current.as_mut().ok_or(ModelError::NoCurrentModel)
    }

    /// Add a logical table to the current model.
    pub fn add_table(
        &mut self,
        name: impl Into<String>,
        database: impl Into<String>,
        schema: impl Into<String>,
        table: impl Into<String>,
        description: Option<&str>,
        primary_key: Option<Vec<String>>,
    ) -> ModelResult<&mut Self> {
        let mut logical_table = Table::new(name);
        logical_table.description = description.map(ToString::to_string);
        logical_table.base_table = Some(BaseTable::new(database, schema, table));
        logical_table.primary_key = Some(Columns::new(primary_key.unwrap_or_default()));
        self.current_mut()?.add_table(logical_table);
        Ok(self)
    }

    /// Add a dimension to a table of the current model.
    pub fn add_dimension(
        &mut self,
        table_name: &str,
        name: impl Into<String>,
        data_type: Option<&str>,
    ) -> ModelResult<&mut Self> {
        let mut dimension = Dimension::new(name);
        dimension.data_type = data_type.map(ToString::to_string);
        self.add_dimension_full(table_name, dimension)
    }

    /// Add a fully specified dimension to a table of the current model.
    pub fn add_dimension_full(
        &mut self,
        table_name: &str,
        dimension: Dimension,
    ) -> ModelResult<&mut Self> {
        let table = self
            .current_mut()?
            .get_table_mut(table_name)
            .ok_or(ModelError::TableNotFound)?;
        table.dimensions.push(dimension);
        Ok(self)
    }

    /// Add a fact to a table of the current model.
    pub fn add_fact(&mut self, table_name: &str, fact: Fact) -> ModelResult<&mut Self> {
        let table = self
            .current_mut()?
            .get_table_mut(table_name)
            .ok_or(ModelError::TableNotFound)?;
        table.facts.push(fact);
        Ok(self)
    }

    /// Add a relationship with a single join-column pair to the current model.
    pub fn add_relationship(
        &mut self,
        name: impl Into<String>,
        left_table: impl Into<String>,
        right_table: impl Into<String>,
        left_column: impl Into<String>,
        right_column: impl Into<String>,
    ) -> ModelResult<&mut Self> {
        let relationship =
            Relationship::new(name, left_table, right_table, left_column, right_column);
        self.current_mut()?.add_relationship(relationship);
        Ok(self)
    }

    /// Add a model-level metric to the current model.
    pub fn add_metric(
        &mut self,
        name: impl Into<String>,
        expr: impl Into<String>,
        description: Option<&str>,
    ) -> ModelResult<&mut Self> {
        let mut metric = Metric::new(name, expr);
        metric.description = description.map(ToString::to_string);
        self.current_mut()?.add_metric(metric);
        Ok(self)
    }

    /// Add a verified query to the current model, validating its SQL.
    pub fn add_verified_query(
        &mut self,
        name: impl Into<String>,
        question: impl Into<String>,
        sql: impl Into<String>,
    ) -> ModelResult<&mut Self> {
        // Validate before touching builder state so a bad query leaves the
        // current model unchanged.
        let query = VerifiedQuery::new(sql)?
            .with_name(name)
            .with_question(question);
        self.current_mut()?.add_verified_query(query);
        Ok(self)
    }

    /// Detach and return the current model, reverting the builder to the
    /// no-current-model state. This is the terminal transition.
    pub fn build(&mut self) -> ModelResult<SemanticModel> {
        let model = self.current.take().ok_or(ModelError::NoCurrentModel)?;
        // Keep the completed list in sync with the finished model.
        if let Some(entry) = self.models.iter_mut().find(|m| m.name == model.name) {
            *entry = model.clone();
        }
        info!("built semantic model '{}'", model.name);
        Ok(model)
    }

    /// Look up a registered model by name.
    ///
    /// The registered entry is a snapshot taken at `create_model` or
    /// `load_yaml_file` time and refreshed by [`build`](Self::build); edits
    /// made to the current model between the two are not visible here.
    pub fn get_model(&self, name: &str) -> Option<&SemanticModel> {
        self.models.iter().find(|m| m.name == name)
    }

    /// All registered models. Same snapshot semantics as
    /// [`get_model`](Self::get_model).
    pub fn models(&self) -> &[SemanticModel] {
        &self.models
    }

    /// Load a previously serialized model and make it current, for editing.
    pub fn load_yaml_file(&mut self, path: &Path) -> ModelResult<&mut Self> {
        let model = loader::load_model(path)?;
        self.models.push(model.clone());
        self.current = Some(model);
        Ok(self)
    }

    /// Export the current model through the document serializer.
    pub fn export_yaml_file(&mut self, path: &Path) -> ModelResult<&mut Self> {
        let model = self.current.as_ref().ok_or(ModelError::NoCurrentModel)?;
        loader::save_model(model, path)?;
        Ok(self)
    }

    /// Run the deployment-readiness validation pass on the current model.
    pub fn validate_current(&self) -> ModelResult<ValidationReport> {
        let model = self.current.as_ref().ok_or(ModelError::NoCurrentModel)?;
        Ok(validation::validate(model))
    }
}
