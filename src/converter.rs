use crate::emitter;
use crate::error::{ConversionError, Result};
use crate::graph::DependencyGraph;
use crate::ir::{Field, TypeAlias, TypeExpr};
use crate::naming::NamingPolicy;
use crate::primitives::flow_primitive;
use crate::schema::{ItemType, SchemaDefinition, SchemaDocument, SchemaType};
use indexmap::IndexMap;
use tracing::{debug, info};

/// Every rendered declaration of a document plus the graph that orders them.
#[derive(Debug, Clone, Default)]
pub struct RenderedDocument {
    pub graph: DependencyGraph,
    /// Declarations keyed by resolved type name, in definition order.
    pub aliases: IndexMap<String, TypeAlias>,
}

#[derive(Debug, Clone, Default)]
pub struct SchemaConverter {
    naming: NamingPolicy,
}

impl SchemaConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_naming(naming: NamingPolicy) -> Self {
        Self { naming }
    }

    /// Convert a whole document into Flow declarations, header first.
    pub fn convert(&self, document: &SchemaDocument) -> Result<String> {
        let rendered = self.render_definitions(document)?;
        let blocks = emitter::emit(&rendered.graph, &rendered.aliases)?;
        info!(
            declarations = rendered.aliases.len(),
            "converted swagger definitions"
        );
        Ok(blocks.join("\n\n"))
    }

    /// Render every definition, failing on the first one that cannot be
    /// rendered. Each call builds a fresh graph.
    pub fn render_definitions(&self, document: &SchemaDocument) -> Result<RenderedDocument> {
        let mut graph = DependencyGraph::new();
        let mut aliases: IndexMap<String, TypeAlias> = IndexMap::new();
        let mut sources: IndexMap<String, &str> = IndexMap::new();

        for (key, definition) in document.definitions() {
            let alias = self.render_definition(document, key, definition, &mut graph)?;

            if let Some(first) = sources.insert(alias.name.clone(), key.as_str()) {
                return Err(ConversionError::DuplicateTypeName {
                    name: alias.name,
                    first: first.to_string(),
                    second: key.clone(),
                });
            }
            aliases.insert(alias.name.clone(), alias);
        }

        Ok(RenderedDocument { graph, aliases })
    }

    /// Render a single definition and record its dependencies in `graph`.
    pub fn render_definition(
        &self,
        document: &SchemaDocument,
        key: &str,
        definition: &SchemaDefinition,
        graph: &mut DependencyGraph,
    ) -> Result<TypeAlias> {
        if !definition.is_object() {
            return Err(ConversionError::NonObjectDefinition {
                name: key.to_string(),
                kind: definition.kind_name(),
            });
        }
        if let Some(keyword) = definition.unsupported_keyword() {
            return Err(ConversionError::UnsupportedKeyword {
                definition: key.to_string(),
                keyword: keyword.to_string(),
            });
        }

        let name = self.naming.type_name(key);
        graph.add_node(&name);

        let mut fields = Vec::with_capacity(definition.properties.len());
        for (property, schema) in &definition.properties {
            let schema_type = SchemaType::from_property(key, property, schema)?;
            fields.push(Field {
                name: self.naming.property_name(property),
                ty: self.property_type(document, key, property, &schema_type)?,
            });
        }
        let body = TypeExpr::Object(fields);

        for dependency in body.references() {
            graph.add_dependency(&name, dependency);
        }
        debug!(definition = key, type_name = %name, "rendered definition");

        Ok(TypeAlias { name, body })
    }

    fn property_type(
        &self,
        document: &SchemaDocument,
        definition: &str,
        property: &str,
        schema_type: &SchemaType,
    ) -> Result<TypeExpr> {
        match schema_type {
            SchemaType::Primitive(primitive) => self.primitive(definition, property, primitive),
            SchemaType::Reference(target) => self.reference(document, definition, property, target),
            SchemaType::Array(ItemType::Primitive(primitive)) => Ok(TypeExpr::array(
                self.primitive(definition, property, primitive)?,
            )),
            SchemaType::Array(ItemType::Reference(target)) => Ok(TypeExpr::array(
                self.reference(document, definition, property, target)?,
            )),
        }
    }

    fn primitive(&self, definition: &str, property: &str, primitive: &str) -> Result<TypeExpr> {
        flow_primitive(primitive)
            .map(TypeExpr::Primitive)
            .ok_or_else(|| ConversionError::UnmappedPrimitive {
                definition: definition.to_string(),
                property: property.to_string(),
                primitive: primitive.to_string(),
            })
    }

    fn reference(
        &self,
        document: &SchemaDocument,
        definition: &str,
        property: &str,
        target: &str,
    ) -> Result<TypeExpr> {
        if !document.contains(target) {
            return Err(ConversionError::UnknownReference {
                definition: definition.to_string(),
                property: property.to_string(),
                target: target.to_string(),
            });
        }
        Ok(TypeExpr::Reference(self.naming.type_name(target)))
    }
}
