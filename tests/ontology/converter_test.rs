#[cfg(test)]
mod tests {
    use semantica::ontology::{OntologyConverter, OntologyError, PropertyKind};

    const STAFF_ONTOLOGY: &str = r#"
@prefix : <http://example.org/test#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

:Person a owl:Class ;
    rdfs:label "Person" .

:Organization a owl:Class ;
    rdfs:comment "An organization" .

:name a owl:DatatypeProperty ;
    rdfs:domain :Person ;
    rdfs:range xsd:string .

:founded a owl:DatatypeProperty ;
    rdfs:domain :Organization ;
    rdfs:range xsd:date .

:headcount a owl:DatatypeProperty ;
    rdfs:domain :Organization ;
    rdfs:range xsd:integer .

:worksFor a owl:ObjectProperty ;
    rdfs:domain :Person ;
    rdfs:range :Organization .
"#;

    fn loaded() -> OntologyConverter {
        let mut converter = OntologyConverter::new();
        converter.load_turtle(STAFF_ONTOLOGY).unwrap();
        converter
    }

    #[test]
    fn test_load_extracts_classes_and_properties() {
        let converter = loaded();

        assert_eq!(converter.classes().len(), 2);
        let person = &converter.classes()["Person"];
        assert_eq!(person.uri, "http://example.org/test#Person");
        assert_eq!(person.label.as_deref(), Some("Person"));
        let organization = &converter.classes()["Organization"];
        assert_eq!(organization.comment.as_deref(), Some("An organization"));

        assert_eq!(converter.properties().len(), 4);
        let name = &converter.properties()["name"];
        assert_eq!(name.kind, PropertyKind::Datatype);
        assert_eq!(name.domains, vec!["http://example.org/test#Person"]);
        assert_eq!(
            name.ranges,
            vec!["http://www.w3.org/2001/XMLSchema#string"]
        );
        let works_for = &converter.properties()["worksFor"];
        assert_eq!(works_for.kind, PropertyKind::Object);
    }

    #[test]
    fn test_classes_become_tables_with_synthetic_keys() {
        let model = loaded().convert_to_semantic_model("staff", "warehouse", "public");

        assert_eq!(model.name, "staff");
        assert_eq!(model.tables.len(), 2);

        let person = model.get_table("person").unwrap();
        let base = person.base_table.as_ref().unwrap();
        assert_eq!(base.database.as_deref(), Some("warehouse"));
        assert_eq!(base.schema.as_deref(), Some("public"));
        assert_eq!(
            person.primary_key.as_ref().unwrap().columns,
            vec!["person_id".to_string()]
        );

        let id = person.get_dimension("person_id").unwrap();
        assert!(id.unique);
        assert_eq!(id.data_type.as_deref(), Some("STRING"));
        assert_eq!(
            id.description.as_deref(),
            Some("Unique identifier for Person")
        );
    }

    #[test]
    fn test_datatype_properties_become_typed_dimensions() {
        let model = loaded().convert_to_semantic_model("staff", "warehouse", "public");

        let person = model.get_table("person").unwrap();
        assert_eq!(person.dimensions.len(), 2);
        let name = person.get_dimension("name").unwrap();
        assert_eq!(name.data_type.as_deref(), Some("STRING"));

        let organization = model.get_table("organization").unwrap();
        assert_eq!(organization.dimensions.len(), 3);
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
        assert!(organization.get_dimension("name").is_none());
    }

    #[test]
    fn test_object_properties_become_relationships() {
        let model = loaded().convert_to_semantic_model("staff", "warehouse", "public");

        assert_eq!(model.relationships.len(), 1);
        let rel = model
            .get_relationship("person_to_organization_worksFor")
            .unwrap();
        assert_eq!(rel.left_table, "person");
        assert_eq!(rel.right_table, "organization");
        let pair = rel.join_predicate().unwrap();
        assert_eq!(pair.left_column.as_deref(), Some("organization_id"));
        assert_eq!(pair.right_column.as_deref(), Some("organization_id"));
    }

    #[test]
    fn test_domainless_property_applies_to_every_class() {
        let turtle = r#"
@prefix : <http://example.org/test#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

:Person a owl:Class .
:Organization a owl:Class .
:notes a owl:DatatypeProperty ;
    rdfs:range xsd:string .
"#;
        let mut converter = OntologyConverter::new();
        converter.load_turtle(turtle).unwrap();
        let model = converter.convert_to_semantic_model("staff", "warehouse", "public");

        for table in &model.tables {
            assert!(table.get_dimension("notes").is_some());
        }
    }

    #[test]
    fn test_unknown_range_falls_back_to_string() {
        let turtle = r#"
@prefix : <http://example.org/test#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

:Thing a owl:Class .
:shape a owl:DatatypeProperty ;
    rdfs:domain :Thing ;
    rdfs:range :CustomShape .
"#;
        let mut converter = OntologyConverter::new();
        converter.load_turtle(turtle).unwrap();
        let model = converter.convert_to_semantic_model("things", "warehouse", "public");

        let shape = model
            .get_table("thing")
            .unwrap()
            .get_dimension("shape")
            .unwrap();
        assert_eq!(shape.data_type.as_deref(), Some("STRING"));
    }

    #[test]
    fn test_malformed_turtle_is_a_parse_error_and_preserves_state() {
        let mut converter = loaded();
        let err = converter.load_turtle("@prefix broken").unwrap_err();
        assert!(matches!(err, OntologyError::Parse(_)));

        // The earlier ontology is still loaded.
        assert_eq!(converter.classes().len(), 2);
        assert_eq!(converter.properties().len(), 4);
    }

    #[test]
    fn test_reload_replaces_previous_ontology() {
        let mut converter = loaded();
        converter
            .load_turtle(
                r#"
@prefix : <http://example.org/other#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .

:Widget a owl:Class .
"#,
            )
            .unwrap();

        assert_eq!(converter.classes().len(), 1);
        assert!(converter.classes().contains_key("Widget"));
        assert!(converter.properties().is_empty());
    }

    #[test]
    fn test_stats_and_mapping_report() {
        let converter = loaded();
        let stats = converter.stats();
        assert_eq!(stats.classes, 2);
        assert_eq!(stats.object_properties, 1);
        assert_eq!(stats.datatype_properties, 3);
        assert_eq!(stats.total_triples, converter.triple_count());

        let report = converter.mapping_report();
        assert!(report.starts_with("RDF/OWL to Semantic Model Mapping Report"));
        assert!(report.contains("Classes converted to tables:"));
        assert!(report.contains("  - Person -> person"));
        assert!(report.contains("Object properties converted to relationships:"));
        assert!(report.contains("Datatype properties converted to dimensions:"));
        assert!(report.contains("  - headcount -> INTEGER"));
    }
}
