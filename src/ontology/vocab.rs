//! OWL vocabulary terms and the XSD <-> semantic type maps.

use oxrdf::vocab::xsd;
use oxrdf::{NamedNode, NamedNodeRef};

/// [OWL](https://www.w3.org/TR/owl2-overview/) vocabulary.
pub mod owl {
    use oxrdf::NamedNodeRef;

    pub const CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Class");
    pub const OBJECT_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#ObjectProperty");
    pub const DATATYPE_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#DatatypeProperty");
    pub const ONTOLOGY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Ontology");
}

/// Map an XSD datatype URI to a semantic data type name.
///
/// Total and defaulting: unknown or absent datatypes map to `STRING`.
pub fn xsd_to_semantic(datatype_uri: &str) -> &'static str {
    match datatype_uri {
        u if u == xsd::STRING.as_str() => "STRING",
        u if u == xsd::INT.as_str() => "INTEGER",
        u if u == xsd::INTEGER.as_str() => "INTEGER",
        u if u == xsd::DECIMAL.as_str() => "DECIMAL",
        u if u == xsd::FLOAT.as_str() => "FLOAT",
        u if u == xsd::DOUBLE.as_str() => "DOUBLE",
        u if u == xsd::BOOLEAN.as_str() => "BOOLEAN",
        u if u == xsd::DATE.as_str() => "DATE",
        u if u == xsd::DATE_TIME.as_str() => "TIMESTAMP",
        u if u == xsd::TIME.as_str() => "TIME",
        _ => "STRING",
    }
}

/// Map a semantic data type name to an XSD datatype.
///
/// Case-insensitive; unknown types default to `xsd:string`.
pub fn semantic_to_xsd(semantic_type: &str) -> NamedNodeRef<'static> {
    match semantic_type.to_ascii_uppercase().as_str() {
        "STRING" => xsd::STRING,
        "INTEGER" => xsd::INTEGER,
        "DECIMAL" => xsd::DECIMAL,
        "FLOAT" => xsd::FLOAT,
        "DOUBLE" => xsd::DOUBLE,
        "BOOLEAN" => xsd::BOOLEAN,
        "DATE" => xsd::DATE,
        "TIMESTAMP" => xsd::DATE_TIME,
        "TIME" => xsd::TIME,
        _ => xsd::STRING,
    }
}

/// Extract the local name of a URI: the fragment after `#`, else the last
/// `/` segment. A URI with neither yields itself unchanged.
pub fn local_name(uri: &str) -> &str {
    let after_hash = uri.rsplit('#').next().unwrap_or(uri);
    after_hash.rsplit('/').next().unwrap_or(after_hash)
}

/// Title-case an identifier segment-wise: the first letter of each
/// underscore-separated segment is uppercased, the rest lowercased.
/// `order_items` becomes `Order_Items`.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_segment_start = true;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if at_segment_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_segment_start = false;
        } else {
            out.push(c);
            at_segment_start = true;
        }
    }
    out
}

/// Build a named node under a namespace.
pub fn in_namespace(namespace: &str, local: &str) -> Result<NamedNode, oxrdf::IriParseError> {
    NamedNode::new(format!("{}{}", namespace, local))
}
