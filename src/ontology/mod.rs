//! Bidirectional mapping between semantic models and RDF/OWL ontologies.
//!
//! The converter reads an ontology into class/property maps and turns them
//! into logical tables, dimensions, and relationships; in the other
//! direction it emits one OWL class per table, one datatype property per
//! dimension, and one object property per relationship. One graph builder
//! feeds all serialization syntaxes.

pub mod converter;
pub mod report;
pub mod vocab;

pub use converter::{
    model_from_rdf_str, model_to_rdf_string, ontology_from_model, serialize_graph,
    OntologyClass, OntologyConverter, OntologyError, OntologyProperty, OntologyResult,
    PropertyKind, RdfSyntax, DEFAULT_NAMESPACE,
};
pub use report::OntologyStats;
pub use vocab::{semantic_to_xsd, xsd_to_semantic};
