#[cfg(test)]
mod tests {
    use semantica::builder::SemanticModelBuilder;
    use semantica::model::{Dimension, Fact, ModelError, VerifiedQueryError};

    #[test]
    fn test_mutation_requires_current_model() {
        let mut builder = SemanticModelBuilder::new();
        let err = builder
            .add_table("orders", "analytics", "public", "orders", None, None)
            .unwrap_err();
        assert!(matches!(err, ModelError::NoCurrentModel));
        assert_eq!(
            err.to_string(),
            "No current semantic model is set in the builder"
        );
    }

    #[test]
    fn test_build_is_a_terminal_transition() {
        let mut builder = SemanticModelBuilder::new();
        builder.create_model("sales", None);
        builder.build().unwrap();
        let err = builder.build().unwrap_err();
        assert!(matches!(err, ModelError::NoCurrentModel));
    }

    #[test]
    fn test_dimension_on_unknown_table_fails() {
        let mut builder = SemanticModelBuilder::new();
        builder.create_model("sales", None);
        let err = builder
            .add_dimension("missing", "region", None)
            .unwrap_err();
        assert!(matches!(err, ModelError::TableNotFound));
    }

    #[test]
    fn test_full_fluent_chain() {
        let mut builder = SemanticModelBuilder::new();
        builder.create_model("sales", Some("Retail sales"));
        builder
            .add_table(
                "orders",
                "analytics",
                "public",
                "orders",
                Some("Order header rows"),
                Some(vec!["order_id".into()]),
            )
            .unwrap()
            .add_table("customers", "analytics", "public", "customers", None, Some(vec!["customer_id".into()]))
            .unwrap()
            .add_dimension("orders", "region", Some("STRING"))
            .unwrap()
            .add_dimension_full(
                "customers",
                Dimension::new("segment")
                    .with_data_type("STRING")
                    .with_description("Customer segment"),
            )
            .unwrap()
            .add_fact("orders", Fact::new("amount").with_data_type("NUMBER"))
            .unwrap()
            .add_relationship("orders_to_customers", "orders", "customers", "customer_id", "customer_id")
            .unwrap()
            .add_metric("order_count", "COUNT(*)", Some("Total orders"))
            .unwrap()
            .add_verified_query("smoke", "How many orders?", "SELECT COUNT(*) FROM orders")
            .unwrap();

        let model = builder.build().unwrap();
        assert_eq!(model.name, "sales");
        assert_eq!(model.description.as_deref(), Some("Retail sales"));
        assert_eq!(model.tables.len(), 2);

        let orders = model.get_table("orders").unwrap();
        let base = orders.base_table.as_ref().unwrap();
        assert_eq!(base.database.as_deref(), Some("analytics"));
        assert_eq!(base.schema.as_deref(), Some("public"));
        assert_eq!(base.table.as_deref(), Some("orders"));
        assert_eq!(
            orders.primary_key.as_ref().unwrap().columns,
            vec!["order_id".to_string()]
        );
        assert_eq!(orders.dimensions.len(), 1);
        assert_eq!(orders.facts.len(), 1);

        assert_eq!(model.relationships.len(), 1);
        assert_eq!(model.metrics.len(), 1);
        assert_eq!(model.verified_queries.len(), 1);
        assert_eq!(model.verified_queries[0].name.as_deref(), Some("smoke"));
    }

    #[test]
    fn test_built_model_is_registered_by_name() {
        let mut builder = SemanticModelBuilder::new();
        builder.create_model("sales", None);
        builder
            .add_metric("order_count", "COUNT(*)", None)
            .unwrap();

        // The registered entry is a snapshot; edits to the current model
        // only land there once build() runs.
        assert!(builder.get_model("sales").unwrap().metrics.is_empty());
        builder.build().unwrap();

        let registered = builder.get_model("sales").unwrap();
        assert_eq!(registered.metrics.len(), 1);
        assert!(builder.get_model("marketing").is_none());
        assert_eq!(builder.models().len(), 1);
    }

    #[test]
    fn test_bad_verified_query_leaves_model_unchanged() {
        let mut builder = SemanticModelBuilder::new();
        builder.create_model("sales", None);
        let err = builder
            .add_verified_query("broken", "?", "SELECT FROM WHERE")
            .unwrap_err();
        assert!(matches!(
            err,
            ModelError::VerifiedQuery(VerifiedQueryError::InvalidSql(_))
        ));
        let model = builder.build().unwrap();
        assert!(model.verified_queries.is_empty());
    }

    #[test]
    fn test_validate_current() {
        let mut builder = SemanticModelBuilder::new();
        assert!(matches!(
            builder.validate_current().unwrap_err(),
            ModelError::NoCurrentModel
        ));

        builder.create_model("sales", None);
        builder
            .add_table("orders", "analytics", "public", "orders", None, Some(vec!["order_id".into()]))
            .unwrap()
            .add_dimension("orders", "region", None)
            .unwrap();
        let report = builder.validate_current().unwrap();
        assert!(report.valid);
        assert_eq!(report.counts.tables, 1);
    }

    #[test]
    fn test_yaml_file_export_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales.yaml");

        let mut builder = SemanticModelBuilder::new();
        builder.create_model("sales", Some("Retail sales"));
        builder
            .add_table("orders", "analytics", "public", "orders", None, Some(vec!["order_id".into()]))
            .unwrap()
            .add_dimension("orders", "region", Some("STRING"))
            .unwrap()
            .export_yaml_file(&path)
            .unwrap();
        let exported = builder.build().unwrap();

        let mut fresh = SemanticModelBuilder::new();
        fresh.load_yaml_file(&path).unwrap();
        let reloaded = fresh.build().unwrap();
        assert_eq!(reloaded, exported);
    }
}
