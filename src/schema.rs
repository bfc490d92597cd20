use crate::error::{ConversionError, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Keywords that describe constructs the converter cannot express. Their
/// presence fails the conversion instead of being dropped.
pub const UNSUPPORTED_KEYWORDS: &[&str] = &[
    "allOf",
    "anyOf",
    "oneOf",
    "not",
    "additionalProperties",
    "patternProperties",
    "enum",
    "discriminator",
];

const DEFINITIONS_REF_PREFIX: &str = "#/definitions/";

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    definitions: Option<IndexMap<String, SchemaDefinition>>,
}

/// A parsed swagger document, reduced to its `definitions` section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaDocument {
    definitions: IndexMap<String, SchemaDefinition>,
}

impl SchemaDocument {
    pub fn new(definitions: IndexMap<String, SchemaDefinition>) -> Self {
        Self { definitions }
    }

    /// Decode a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut de = serde_json::Deserializer::from_str(json);
        let raw: RawDocument = serde_path_to_error::deserialize(&mut de)
            .map_err(|e| ConversionError::ParseError(e.to_string()))?;
        de.end()
            .map_err(|e| ConversionError::ParseError(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Decode a document from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        let raw: RawDocument = serde_path_to_error::deserialize(value)
            .map_err(|e| ConversionError::ParseError(e.to_string()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawDocument) -> Result<Self> {
        raw.definitions
            .map(Self::new)
            .ok_or(ConversionError::MissingDefinitions)
    }

    pub fn definitions(&self) -> &IndexMap<String, SchemaDefinition> {
        &self.definitions
    }

    pub fn get(&self, key: &str) -> Option<&SchemaDefinition> {
        self.definitions.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.definitions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// The `type` keyword: a single name or a list of names.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TypeKeyword {
    Single(String),
    Multiple(Vec<String>),
}

impl TypeKeyword {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            TypeKeyword::Single(name) => Some(name),
            TypeKeyword::Multiple(_) => None,
        }
    }
}

impl fmt::Display for TypeKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKeyword::Single(name) => f.write_str(name),
            TypeKeyword::Multiple(names) => write!(f, "[{}]", names.join(", ")),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct SchemaDefinition {
    #[serde(rename = "type")]
    pub kind: Option<TypeKeyword>,

    #[serde(default)]
    pub properties: IndexMap<String, PropertySchema>,

    /// Every other keyword, kept so unsupported ones can be reported.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl SchemaDefinition {
    pub fn is_object(&self) -> bool {
        matches!(&self.kind, Some(TypeKeyword::Single(kind)) if kind == "object")
    }

    /// The declared kind for error messages.
    pub fn kind_name(&self) -> String {
        self.kind
            .as_ref()
            .map_or_else(|| "undefined".to_string(), ToString::to_string)
    }

    pub fn unsupported_keyword(&self) -> Option<&str> {
        find_unsupported(&self.extra)
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct PropertySchema {
    #[serde(rename = "$ref")]
    pub ref_: Option<String>,

    #[serde(rename = "type")]
    pub type_: Option<TypeKeyword>,

    pub items: Option<Box<PropertySchema>>,

    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

fn find_unsupported(extra: &IndexMap<String, Value>) -> Option<&str> {
    UNSUPPORTED_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| extra.contains_key(*keyword))
}

/// A property type the renderer knows how to express.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaType {
    Primitive(String),
    Reference(String),
    Array(ItemType),
}

/// Array element types. Only one level of array nesting is modeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemType {
    Primitive(String),
    Reference(String),
}

impl SchemaType {
    /// Classify a raw property of `definition`, failing on any shape that
    /// cannot be rendered.
    pub fn from_property(
        definition: &str,
        property: &str,
        schema: &PropertySchema,
    ) -> Result<Self> {
        let unsupported = |reason: String| ConversionError::UnsupportedShape {
            definition: definition.to_string(),
            property: property.to_string(),
            reason,
        };

        if let Some(keyword) = find_unsupported(&schema.extra) {
            return Err(unsupported(format!("`{}` is not supported", keyword)));
        }
        if schema.extra.contains_key("properties") {
            return Err(unsupported("inline object types are not supported".into()));
        }

        if let Some(reference) = &schema.ref_ {
            return Ok(SchemaType::Reference(parse_ref(
                definition, property, reference,
            )?));
        }

        let type_name = match &schema.type_ {
            None => return Err(unsupported("neither `type` nor `$ref` is declared".into())),
            Some(keyword) => keyword
                .as_single()
                .ok_or_else(|| unsupported(format!("union type {} is not supported", keyword)))?,
        };

        match type_name {
            "array" => {
                let items = schema
                    .items
                    .as_deref()
                    .ok_or_else(|| unsupported("array without `items`".into()))?;
                Ok(SchemaType::Array(Self::item_from_property(
                    definition, property, items,
                )?))
            }
            "object" => Err(unsupported("inline object types are not supported".into())),
            primitive => Ok(SchemaType::Primitive(primitive.to_string())),
        }
    }

    fn item_from_property(
        definition: &str,
        property: &str,
        items: &PropertySchema,
    ) -> Result<ItemType> {
        match Self::from_property(definition, property, items)? {
            SchemaType::Primitive(name) => Ok(ItemType::Primitive(name)),
            SchemaType::Reference(key) => Ok(ItemType::Reference(key)),
            SchemaType::Array(_) => Err(ConversionError::UnsupportedShape {
                definition: definition.to_string(),
                property: property.to_string(),
                reason: "nested arrays are not supported".into(),
            }),
        }
    }
}

/// Extract the definition key from a `#/definitions/<Key>` reference.
fn parse_ref(definition: &str, property: &str, reference: &str) -> Result<String> {
    match reference.strip_prefix(DEFINITIONS_REF_PREFIX) {
        Some(key) if !key.is_empty() && !key.contains('/') => {
            Ok(key.replace("~1", "/").replace("~0", "~"))
        }
        _ => Err(ConversionError::UnsupportedReference {
            definition: definition.to_string(),
            property: property.to_string(),
            reference: reference.to_string(),
        }),
    }
}
