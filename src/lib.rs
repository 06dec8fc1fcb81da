//! # Semantica
//!
//! A semantic model toolkit: build business-oriented models of relational
//! data and round-trip them across document and ontology representations.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                 Schema description                       │
//! │        (tables, columns, types from a connector)         │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [schema::model_from_schema]
//! ┌─────────────────────────────────────────────────────────┐
//! │            SemanticModel (Rust types)                    │
//! │   tables · dimensions · facts · metrics · relationships  │
//! │                 ▲               │                        │
//! │   [builder] ────┘               ▼ [validation]           │
//! └─────────────────────────────────────────────────────────┘
//!            │                              │
//!            ▼ [model::loader]              ▼ [ontology]
//! ┌──────────────────────┐      ┌──────────────────────────┐
//! │   YAML / JSON doc    │      │  RDF/OWL ontology graph  │
//! │   (lossless, two-way)│      │  (Turtle, XML, NT)       │
//! └──────────────────────┘      └──────────────────────────┘
//! ```
//!
//! The core is synchronous and holds no shared mutable state: callers that
//! need concurrency keep one model, builder, or converter per worker.

pub mod builder;
pub mod model;
pub mod ontology;
pub mod schema;
pub mod validation;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::builder::SemanticModelBuilder;
    pub use crate::model::{
        BaseTable, Columns, Dimension, Fact, Filter, JoinType, Metric, ModelError, Relationship,
        RelationshipColumn, RelationshipType, SemanticModel, Table, TimeDimension, VerifiedQuery,
        VerifiedQueryError,
    };
    pub use crate::ontology::{OntologyConverter, RdfSyntax};
    pub use crate::validation::{validate, ValidationReport};
}

pub use builder::SemanticModelBuilder;
pub use model::SemanticModel;
pub use ontology::OntologyConverter;
