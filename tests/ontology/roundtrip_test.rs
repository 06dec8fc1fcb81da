#[cfg(test)]
mod tests {
    use semantica::builder::SemanticModelBuilder;
    use semantica::model::SemanticModel;
    use semantica::ontology::{
        model_from_rdf_str, model_to_rdf_string, RdfSyntax, DEFAULT_NAMESPACE,
    };

    fn staff_model() -> SemanticModel {
        let mut builder = SemanticModelBuilder::new();
        builder.create_model("staff", Some("People and employers"));
        builder
            .add_table("person", "warehouse", "public", "person", Some("A person"), Some(vec!["person_id".into()]))
            .unwrap()
            .add_table("organization", "warehouse", "public", "organization", None, Some(vec!["organization_id".into()]))
            .unwrap()
            .add_dimension("person", "person_id", Some("STRING"))
            .unwrap()
            .add_dimension("person", "full_name", Some("STRING"))
            .unwrap()
            .add_dimension("organization", "organization_id", Some("STRING"))
            .unwrap()
            .add_dimension("organization", "founded", Some("DATE"))
            .unwrap()
            .add_dimension("organization", "headcount", Some("INTEGER"))
            .unwrap()
            .add_relationship("person_to_organization_worksfor", "person", "organization", "organization_id", "organization_id")
            .unwrap();
        builder.build().unwrap()
    }

    fn business_dimensions(model: &SemanticModel, table: &str) -> usize {
        model
            .get_table(table)
            .unwrap()
            .dimensions
            .iter()
            .filter(|d| !d.name.ends_with("_id"))
            .count()
    }

    #[test]
    fn test_model_survives_a_turtle_round_trip() {
        let model = staff_model();
        let turtle = model_to_rdf_string(&model, RdfSyntax::Turtle, DEFAULT_NAMESPACE).unwrap();
        let restored =
            model_from_rdf_str(&turtle, RdfSyntax::Turtle, "staff", "warehouse", "public")
                .unwrap();

        assert_eq!(restored.tables.len(), model.tables.len());
        for table in &model.tables {
            assert_eq!(
                business_dimensions(&restored, &table.name),
                business_dimensions(&model, &table.name),
                "dimension count changed for table {}",
                table.name
            );
        }
        assert_eq!(restored.relationships.len(), model.relationships.len());
    }

    #[test]
    fn test_restored_dimensions_keep_their_types() {
        let model = staff_model();
        let turtle = model_to_rdf_string(&model, RdfSyntax::Turtle, DEFAULT_NAMESPACE).unwrap();
        let restored =
            model_from_rdf_str(&turtle, RdfSyntax::Turtle, "staff", "warehouse", "public")
                .unwrap();

        let organization = restored.get_table("organization").unwrap();
        assert_eq!(
            organization
                .get_dimension("founded")
                .unwrap()
                .data_type
                .as_deref(),
            Some("DATE")
        );
        assert_eq!(
            organization
                .get_dimension("headcount")
                .unwrap()
                .data_type
                .as_deref(),
            Some("INTEGER")
        );
    }

    #[test]
    fn test_every_syntax_serializes_the_model() {
        let model = staff_model();
        for syntax in [RdfSyntax::Turtle, RdfSyntax::RdfXml, RdfSyntax::NTriples] {
            let text = model_to_rdf_string(&model, syntax, DEFAULT_NAMESPACE).unwrap();
            assert!(!text.is_empty(), "empty output for {:?}", syntax);
        }
    }

    #[test]
    fn test_ntriples_output_parses_back() {
        let model = staff_model();
        let ntriples =
            model_to_rdf_string(&model, RdfSyntax::NTriples, DEFAULT_NAMESPACE).unwrap();
        let restored =
            model_from_rdf_str(&ntriples, RdfSyntax::NTriples, "staff", "warehouse", "public")
                .unwrap();
        assert_eq!(restored.tables.len(), model.tables.len());
    }
}
