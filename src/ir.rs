//! Flow type expressions produced by the renderer. Text is only produced
//! through the `Display` impls.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Primitive(&'static str),
    Reference(String),
    Array(Box<TypeExpr>),
    Object(Vec<Field>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TypeExpr,
}

/// One `export type Name = body` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAlias {
    pub name: String,
    pub body: TypeExpr,
}

impl TypeExpr {
    pub fn array(item: TypeExpr) -> Self {
        TypeExpr::Array(Box::new(item))
    }

    /// Type names this expression mentions, in order of appearance.
    pub fn references(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_references(&mut names);
        names
    }

    fn collect_references<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            TypeExpr::Primitive(_) => {}
            TypeExpr::Reference(name) => names.push(name),
            TypeExpr::Array(item) => item.collect_references(names),
            TypeExpr::Object(fields) => {
                for field in fields {
                    field.ty.collect_references(names);
                }
            }
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Primitive(name) => f.write_str(name),
            TypeExpr::Reference(name) => f.write_str(name),
            TypeExpr::Array(item) => write!(f, "Array<{}>", item),
            TypeExpr::Object(fields) if fields.is_empty() => f.write_str("{}"),
            TypeExpr::Object(fields) => {
                f.write_str("{\n")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",\n")?;
                    }
                    write!(f, "\t{}: {}", field.name, field.ty)?;
                }
                f.write_str("\n}")
            }
        }
    }
}

impl fmt::Display for TypeAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "export type {} = {}", self.name, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_object_alias() {
        let alias = TypeAlias {
            name: "Pet".into(),
            body: TypeExpr::Object(vec![
                Field {
                    name: "id".into(),
                    ty: TypeExpr::Primitive("number"),
                },
                Field {
                    name: "tags".into(),
                    ty: TypeExpr::array(TypeExpr::Reference("Tag".into())),
                },
            ]),
        };

        assert_eq!(
            alias.to_string(),
            "export type Pet = {\n\tid: number,\n\ttags: Array<Tag>\n}"
        );
        assert_eq!(alias.body.references(), vec!["Tag"]);
    }

    #[test]
    fn empty_object_is_braces() {
        let alias = TypeAlias {
            name: "Empty".into(),
            body: TypeExpr::Object(Vec::new()),
        };
        assert_eq!(alias.to_string(), "export type Empty = {}");
    }
}
