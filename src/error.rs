use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConversionError>;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to parse swagger document: {0}")]
    ParseError(String),

    #[error("No swagger definitions to parse")]
    MissingDefinitions,

    #[error("Cannot render non-object definition `{name}` (type: {kind})")]
    NonObjectDefinition { name: String, kind: String },

    #[error("Unsupported keyword `{keyword}` in definition `{definition}`")]
    UnsupportedKeyword { definition: String, keyword: String },

    #[error("Unsupported type for `{definition}.{property}`: {reason}")]
    UnsupportedShape {
        definition: String,
        property: String,
        reason: String,
    },

    #[error("No Flow type for primitive `{primitive}` in `{definition}.{property}`")]
    UnmappedPrimitive {
        definition: String,
        property: String,
        primitive: String,
    },

    #[error("Unsupported $ref `{reference}` in `{definition}.{property}`")]
    UnsupportedReference {
        definition: String,
        property: String,
        reference: String,
    },

    #[error("`{definition}.{property}` references unknown definition `{target}`")]
    UnknownReference {
        definition: String,
        property: String,
        target: String,
    },

    #[error("Definitions `{first}` and `{second}` both resolve to type name `{name}`")]
    DuplicateTypeName {
        name: String,
        first: String,
        second: String,
    },

    #[error("Type `{0}` is ordered for emission but was never rendered")]
    MissingDeclaration(String),
}

impl ConversionError {
    /// Name of the definition the error is attributed to, if any.
    pub fn definition(&self) -> Option<&str> {
        match self {
            Self::NonObjectDefinition { name, .. } => Some(name),
            Self::UnsupportedKeyword { definition, .. }
            | Self::UnsupportedShape { definition, .. }
            | Self::UnmappedPrimitive { definition, .. }
            | Self::UnsupportedReference { definition, .. }
            | Self::UnknownReference { definition, .. } => Some(definition),
            Self::ParseError(_)
            | Self::MissingDefinitions
            | Self::DuplicateTypeName { .. }
            | Self::MissingDeclaration(_) => None,
        }
    }
}
