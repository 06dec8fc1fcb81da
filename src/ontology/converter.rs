//! The ontology converter: load, extract, and convert in both directions.

use std::collections::BTreeMap;

use log::{debug, info};
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{
    Graph, Literal, NamedNode, NamedNodeRef, NamedOrBlankNodeRef, TermRef, Triple, TripleRef,
};
use oxrdf::GraphNameRef;
use oxrdfio::{RdfFormat, RdfParseError, RdfParser, RdfSerializer};
use thiserror::Error;

use super::vocab::{self, owl};
use crate::model::{
    BaseTable, Columns, Dimension, Relationship, RelationshipType, SemanticModel, Table,
};

/// Namespace used when the caller does not supply one.
pub const DEFAULT_NAMESPACE: &str = "http://example.org/semantic#";

/// Result type for ontology operations.
pub type OntologyResult<T> = Result<T, OntologyError>;

/// Errors from parsing, building, or serializing ontologies.
///
/// Parse errors are fatal: no partial model is ever returned.
#[derive(Debug, Error)]
pub enum OntologyError {
    /// Malformed or unparseable ontology syntax
    #[error("RDF parse error: {0}")]
    Parse(#[from] RdfParseError),

    /// IO error while serializing
    #[error("RDF write error: {0}")]
    Write(#[from] std::io::Error),

    /// A model or dimension name produced an invalid IRI
    #[error("Invalid IRI: {0}")]
    Iri(#[from] oxrdf::IriParseError),

    /// Serializer produced non-UTF-8 output
    #[error("Serialized RDF is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Serialization syntax for ontology text.
///
/// All three share the same graph-building logic and differ only in the
/// final text rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfSyntax {
    Turtle,
    RdfXml,
    NTriples,
}

impl RdfSyntax {
    fn format(self) -> RdfFormat {
        match self {
            RdfSyntax::Turtle => RdfFormat::Turtle,
            RdfSyntax::RdfXml => RdfFormat::RdfXml,
            RdfSyntax::NTriples => RdfFormat::NTriples,
        }
    }
}

/// An OWL class recorded during a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OntologyClass {
    pub uri: String,
    pub label: Option<String>,
    pub comment: Option<String>,
    pub superclasses: Vec<String>,
}

/// Discriminates object properties from datatype properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Object,
    Datatype,
}

/// An OWL property recorded during a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OntologyProperty {
    pub uri: String,
    pub label: Option<String>,
    pub comment: Option<String>,
    pub domains: Vec<String>,
    pub ranges: Vec<String>,
    pub kind: PropertyKind,
}

/// Converts between RDF/OWL ontologies and semantic models.
///
/// The class and property maps exist only between a `load` and the next;
/// loading a new ontology fully replaces them.
#[derive(Default)]
pub struct OntologyConverter {
    graph: Graph,
    classes: BTreeMap<String, OntologyClass>,
    properties: BTreeMap<String, OntologyProperty>,
}

impl OntologyConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an ontology, replacing any previously loaded state.
    ///
    /// A parse error is fatal and leaves the previously loaded ontology in
    /// place untouched.
    pub fn load(&mut self, data: &str, syntax: RdfSyntax) -> OntologyResult<()> {
        let mut graph = Graph::default();
        for quad in RdfParser::from_format(syntax.format()).for_reader(data.as_bytes()) {
            let quad = quad?;
            graph.insert(&Triple::new(quad.subject, quad.predicate, quad.object));
        }

        self.graph = graph;
        self.classes.clear();
        self.properties.clear();
        self.extract_classes();
        self.extract_properties();
        info!(
            "loaded ontology: {} classes, {} properties, {} triples",
            self.classes.len(),
            self.properties.len(),
            self.graph.len()
        );
        Ok(())
    }

    /// Load a Turtle ontology.
    pub fn load_turtle(&mut self, data: &str) -> OntologyResult<()> {
        self.load(data, RdfSyntax::Turtle)
    }

    /// Classes recorded by the last load, keyed by local name.
    pub fn classes(&self) -> &BTreeMap<String, OntologyClass> {
        &self.classes
    }

    /// Properties recorded by the last load, keyed by local name.
    pub fn properties(&self) -> &BTreeMap<String, OntologyProperty> {
        &self.properties
    }

    /// Total triples in the loaded graph.
    pub fn triple_count(&self) -> usize {
        self.graph.len()
    }

    fn extract_classes(&mut self) {
        let mut classes = BTreeMap::new();
        for subject in self
            .graph
            .subjects_for_predicate_object(rdf::TYPE, owl::CLASS)
        {
            let node = match subject {
                NamedOrBlankNodeRef::NamedNode(node) => node,
                _ => continue,
            };
            classes.insert(
                vocab::local_name(node.as_str()).to_string(),
                OntologyClass {
                    uri: node.as_str().to_string(),
                    label: first_literal(&self.graph, node, rdfs::LABEL),
                    comment: first_literal(&self.graph, node, rdfs::COMMENT),
                    superclasses: iri_objects(&self.graph, node, rdfs::SUB_CLASS_OF),
                },
            );
        }
        self.classes = classes;
    }

    fn extract_properties(&mut self) {
        let mut properties = BTreeMap::new();
        // Object properties first; a datatype property with the same local
        // name shadows an object property, matching historical behavior.
        for (owl_type, kind) in [
            (owl::OBJECT_PROPERTY, PropertyKind::Object),
            (owl::DATATYPE_PROPERTY, PropertyKind::Datatype),
        ] {
            for subject in self.graph.subjects_for_predicate_object(rdf::TYPE, owl_type) {
                let node = match subject {
                    NamedOrBlankNodeRef::NamedNode(node) => node,
                    _ => continue,
                };
                properties.insert(
                    vocab::local_name(node.as_str()).to_string(),
                    OntologyProperty {
                        uri: node.as_str().to_string(),
                        label: first_literal(&self.graph, node, rdfs::LABEL),
                        comment: first_literal(&self.graph, node, rdfs::COMMENT),
                        domains: iri_objects(&self.graph, node, rdfs::DOMAIN),
                        ranges: iri_objects(&self.graph, node, rdfs::RANGE),
                        kind,
                    },
                );
            }
        }
        self.properties = properties;
    }

    /// Convert the loaded ontology to a semantic model.
    ///
    /// Every class becomes a table named by its lowercased local name, with
    /// a synthetic `<table>_id` primary key. Datatype properties whose
    /// domain is empty or includes the class become dimensions; object
    /// properties between known classes become many-to-one relationships.
    pub fn convert_to_semantic_model(
        &self,
        model_name: &str,
        database: &str,
        schema: &str,
    ) -> SemanticModel {
        let mut model = SemanticModel::new(model_name);

        for (class_name, class) in &self.classes {
            let table_name = class_name.to_lowercase();
            let id_column = format!("{}_id", table_name);

            let mut table = Table::new(&table_name);
            table.description = class.comment.clone().or_else(|| class.label.clone());
            table.base_table = Some(BaseTable::new(database, schema, &table_name));
            table.primary_key = Some(Columns::new(vec![id_column.clone()]));
            table.dimensions.push(
                Dimension::new(id_column)
                    .with_data_type("STRING")
                    .with_unique(true)
                    .with_description(format!("Unique identifier for {}", class_name)),
            );

            for (prop_name, prop) in &self.properties {
                if prop.kind != PropertyKind::Datatype {
                    continue;
                }
                let applies = prop.domains.is_empty()
                    || prop
                        .domains
                        .iter()
                        .any(|d| vocab::local_name(d) == class_name);
                if !applies {
                    continue;
                }
                let data_type = prop
                    .ranges
                    .first()
                    .map(|r| vocab::xsd_to_semantic(r))
                    .unwrap_or("STRING");
                let mut dimension = Dimension::new(prop_name).with_data_type(data_type);
                dimension.description = prop.comment.clone().or_else(|| prop.label.clone());
                debug!(
                    "mapped datatype property {} -> {}.{} ({})",
                    prop_name, table_name, prop_name, data_type
                );
                table.dimensions.push(dimension);
            }

            model.add_table(table);
        }

        for (prop_name, prop) in &self.properties {
            if prop.kind != PropertyKind::Object {
                continue;
            }
            for domain_uri in &prop.domains {
                let domain_class = vocab::local_name(domain_uri);
                for range_uri in &prop.ranges {
                    let range_class = vocab::local_name(range_uri);
                    if !self.classes.contains_key(domain_class)
                        || !self.classes.contains_key(range_class)
                    {
                        continue;
                    }
                    let left_table = domain_class.to_lowercase();
                    let right_table = range_class.to_lowercase();
                    let rel_name =
                        format!("{}_to_{}_{}", left_table, right_table, prop_name);
                    // Join-key convention: both sides of the pair use the
                    // range table's synthetic id, never the domain table's
                    // key. Kept as-is for compatibility with existing
                    // exports; do not "correct" it.
                    let join_key = format!("{}_id", right_table);
                    model.add_relationship(
                        Relationship::new(
                            rel_name,
                            left_table,
                            right_table,
                            join_key.clone(),
                            join_key,
                        )
                        .with_relationship_type(RelationshipType::ManyToOne),
                    );
                }
            }
        }

        model
    }

    /// Render a semantic model as ontology text in the requested syntax.
    pub fn to_rdf_string(
        &self,
        model: &SemanticModel,
        syntax: RdfSyntax,
        namespace_uri: &str,
    ) -> OntologyResult<String> {
        let graph = ontology_from_model(model, namespace_uri)?;
        serialize_graph(&graph, syntax)
    }
}

/// First literal object of `(subject, predicate, _)`, if any.
fn first_literal(graph: &Graph, subject: NamedNodeRef<'_>, predicate: NamedNodeRef<'_>) -> Option<String> {
    graph
        .objects_for_subject_predicate(subject, predicate)
        .find_map(|term| match term {
            TermRef::Literal(literal) => Some(literal.value().to_string()),
            _ => None,
        })
}

/// All named-node objects of `(subject, predicate, _)`.
fn iri_objects(graph: &Graph, subject: NamedNodeRef<'_>, predicate: NamedNodeRef<'_>) -> Vec<String> {
    graph
        .objects_for_subject_predicate(subject, predicate)
        .filter_map(|term| match term {
            TermRef::NamedNode(node) => Some(node.as_str().to_string()),
            _ => None,
        })
        .collect()
}

/// Build the ontology graph for a semantic model.
///
/// Emits the ontology header first, then one OWL class per table, one
/// datatype property per dimension not named `*_id`, and one object
/// property per relationship.
pub fn ontology_from_model(
    model: &SemanticModel,
    namespace_uri: &str,
) -> OntologyResult<Graph> {
    let mut graph = Graph::default();

    let ontology_uri = NamedNode::new(namespace_uri.trim_end_matches(['#', '/']))?;
    graph.insert(TripleRef::new(&ontology_uri, rdf::TYPE, owl::ONTOLOGY));
    let ontology_label = Literal::new_simple_literal(format!("{} Ontology", model.name));
    graph.insert(TripleRef::new(&ontology_uri, rdfs::LABEL, &ontology_label));
    let ontology_comment = Literal::new_simple_literal(format!(
        "Ontology generated from semantic model: {}",
        model.name
    ));
    graph.insert(TripleRef::new(&ontology_uri, rdfs::COMMENT, &ontology_comment));

    for table in &model.tables {
        let class_name = vocab::title_case(&table.name);
        let class_uri = vocab::in_namespace(namespace_uri, &class_name)?;
        graph.insert(TripleRef::new(&class_uri, rdf::TYPE, owl::CLASS));
        let label = Literal::new_simple_literal(class_name);
        graph.insert(TripleRef::new(&class_uri, rdfs::LABEL, &label));
        if let Some(description) = &table.description {
            let comment = Literal::new_simple_literal(description.as_str());
            graph.insert(TripleRef::new(&class_uri, rdfs::COMMENT, &comment));
        }

        for dimension in &table.dimensions {
            // Synthetic key columns are table identity, not properties.
            if dimension.name.ends_with("_id") {
                continue;
            }
            let prop_uri = vocab::in_namespace(namespace_uri, &dimension.name)?;
            graph.insert(TripleRef::new(&prop_uri, rdf::TYPE, owl::DATATYPE_PROPERTY));
            let label =
                Literal::new_simple_literal(vocab::title_case(&dimension.name.replace('_', " ")));
            graph.insert(TripleRef::new(&prop_uri, rdfs::LABEL, &label));
            if let Some(description) = &dimension.description {
                let comment = Literal::new_simple_literal(description.as_str());
                graph.insert(TripleRef::new(&prop_uri, rdfs::COMMENT, &comment));
            }
            graph.insert(TripleRef::new(&prop_uri, rdfs::DOMAIN, &class_uri));
            if let Some(data_type) = &dimension.data_type {
                graph.insert(TripleRef::new(
                    &prop_uri,
                    rdfs::RANGE,
                    vocab::semantic_to_xsd(data_type),
                ));
            }
        }
    }

    for relationship in &model.relationships {
        let prop_name = relationship.name.replace("_to_", "_").replace('_', "");
        let prop_uri = vocab::in_namespace(namespace_uri, &prop_name)?;
        graph.insert(TripleRef::new(&prop_uri, rdf::TYPE, owl::OBJECT_PROPERTY));
        let label = Literal::new_simple_literal(vocab::title_case(&prop_name));
        graph.insert(TripleRef::new(&prop_uri, rdfs::LABEL, &label));

        let domain_uri =
            vocab::in_namespace(namespace_uri, &vocab::title_case(&relationship.left_table))?;
        let range_uri =
            vocab::in_namespace(namespace_uri, &vocab::title_case(&relationship.right_table))?;
        graph.insert(TripleRef::new(&prop_uri, rdfs::DOMAIN, &domain_uri));
        graph.insert(TripleRef::new(&prop_uri, rdfs::RANGE, &range_uri));
    }

    Ok(graph)
}

/// Serialize a graph in the requested syntax.
pub fn serialize_graph(graph: &Graph, syntax: RdfSyntax) -> OntologyResult<String> {
    let mut serializer = RdfSerializer::from_format(syntax.format())
        .with_prefix("owl", "http://www.w3.org/2002/07/owl#")?
        .with_prefix("rdfs", "http://www.w3.org/2000/01/rdf-schema#")?
        .with_prefix("xsd", "http://www.w3.org/2001/XMLSchema#")?
        .for_writer(Vec::new());
    for triple in graph.iter() {
        serializer.serialize_quad(triple.in_graph(GraphNameRef::DefaultGraph))?;
    }
    let bytes = serializer.finish()?;
    Ok(String::from_utf8(bytes)?)
}

/// Convert ontology text straight to a semantic model.
pub fn model_from_rdf_str(
    data: &str,
    syntax: RdfSyntax,
    model_name: &str,
    database: &str,
    schema: &str,
) -> OntologyResult<SemanticModel> {
    let mut converter = OntologyConverter::new();
    converter.load(data, syntax)?;
    Ok(converter.convert_to_semantic_model(model_name, database, schema))
}

/// Render a semantic model straight to ontology text.
pub fn model_to_rdf_string(
    model: &SemanticModel,
    syntax: RdfSyntax,
    namespace_uri: &str,
) -> OntologyResult<String> {
    let graph = ontology_from_model(model, namespace_uri)?;
    serialize_graph(&graph, syntax)
}
