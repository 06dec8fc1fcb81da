//! Ontology statistics and the conversion mapping report.

use std::fmt::Write as _;

use serde::Serialize;

use super::converter::{OntologyConverter, PropertyKind};
use super::vocab;

/// Counts describing a loaded ontology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OntologyStats {
    pub classes: usize,
    pub object_properties: usize,
    pub datatype_properties: usize,
    pub total_triples: usize,
}

impl OntologyConverter {
    /// Statistics about the loaded ontology.
    pub fn stats(&self) -> OntologyStats {
        let object_properties = self
            .properties()
            .values()
            .filter(|p| p.kind == PropertyKind::Object)
            .count();
        let datatype_properties = self
            .properties()
            .values()
            .filter(|p| p.kind == PropertyKind::Datatype)
            .count();
        OntologyStats {
            classes: self.classes().len(),
            object_properties,
            datatype_properties,
            total_triples: self.triple_count(),
        }
    }

    /// Human-readable report of every class->table and property->
    /// dimension/relationship decision. Diagnostic only; nothing reads it
    /// back.
    pub fn mapping_report(&self) -> String {
        let stats = self.stats();
        let mut report = String::new();
        report.push_str("RDF/OWL to Semantic Model Mapping Report\n");
        report.push_str(&"=".repeat(50));
        report.push_str("\n\n");

        let _ = writeln!(report, "Classes converted to tables: {}", stats.classes);
        for (class_name, class) in self.classes() {
            let _ = writeln!(report, "  - {} -> {}", class_name, class_name.to_lowercase());
            if let Some(comment) = &class.comment {
                let _ = writeln!(report, "    Description: {}", comment);
            }
        }

        let _ = writeln!(
            report,
            "\nObject properties converted to relationships: {}",
            stats.object_properties
        );
        for (prop_name, prop) in self.properties() {
            if prop.kind != PropertyKind::Object {
                continue;
            }
            let _ = writeln!(report, "  - {}", prop_name);
            if let Some(comment) = &prop.comment {
                let _ = writeln!(report, "    Description: {}", comment);
            }
        }

        let _ = writeln!(
            report,
            "\nDatatype properties converted to dimensions: {}",
            stats.datatype_properties
        );
        for (prop_name, prop) in self.properties() {
            if prop.kind != PropertyKind::Datatype {
                continue;
            }
            let data_type = prop
                .ranges
                .first()
                .map(|r| vocab::xsd_to_semantic(r))
                .unwrap_or("STRING");
            let _ = writeln!(report, "  - {} -> {}", prop_name, data_type);
        }

        report
    }
}
