pub mod converter;
pub mod emitter;
pub mod error;
pub mod graph;
pub mod ir;
pub mod naming;
pub mod primitives;
pub mod schema;
pub mod source;

pub use converter::{RenderedDocument, SchemaConverter};
pub use error::{ConversionError, Result};
pub use graph::DependencyGraph;
pub use naming::{NamingPolicy, PropertyTransform};
pub use schema::SchemaDocument;

/// Convert a swagger document to Flow type aliases, keeping names as declared
pub fn convert_schema(json: &str) -> Result<String> {
    convert_schema_with_naming(json, NamingPolicy::default())
}

/// Convert a swagger document to Flow type aliases with a naming policy
pub fn convert_schema_with_naming(json: &str, naming: NamingPolicy) -> Result<String> {
    let document = SchemaDocument::from_json(json)?;

    let converter = SchemaConverter::with_naming(naming);
    converter.convert(&document)
}
