use crate::error::{ConversionError, Result};
use crate::graph::DependencyGraph;
use crate::ir::TypeAlias;
use indexmap::IndexMap;

/// First line of every generated file.
pub const HEADER: &str = "// @flow";

/// Lay out the header followed by each declaration in dependency order.
///
/// Every ordered name must have a rendered declaration; a missing one is a
/// bug in the caller and fails instead of leaving a hole in the output.
pub fn emit(graph: &DependencyGraph, aliases: &IndexMap<String, TypeAlias>) -> Result<Vec<String>> {
    let mut blocks = Vec::with_capacity(aliases.len() + 1);
    blocks.push(HEADER.to_string());

    for name in graph.overall_order() {
        let alias = aliases
            .get(name)
            .ok_or_else(|| ConversionError::MissingDeclaration(name.to_string()))?;
        blocks.push(alias.to_string());
    }

    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Field, TypeExpr};

    fn alias(name: &str, fields: Vec<(&str, TypeExpr)>) -> TypeAlias {
        TypeAlias {
            name: name.to_string(),
            body: TypeExpr::Object(
                fields
                    .into_iter()
                    .map(|(name, ty)| Field {
                        name: name.to_string(),
                        ty,
                    })
                    .collect(),
            ),
        }
    }

    #[test]
    fn emits_header_then_ordered_declarations() {
        let mut graph = DependencyGraph::new();
        graph.add_node("Order");
        graph.add_dependency("Order", "Pet");
        graph.add_node("Pet");

        let mut aliases = IndexMap::new();
        aliases.insert(
            "Order".to_string(),
            alias("Order", vec![("pet", TypeExpr::Reference("Pet".into()))]),
        );
        aliases.insert(
            "Pet".to_string(),
            alias("Pet", vec![("name", TypeExpr::Primitive("string"))]),
        );

        let blocks = emit(&graph, &aliases).unwrap();
        assert_eq!(
            blocks,
            vec![
                "// @flow".to_string(),
                "export type Pet = {\n\tname: string\n}".to_string(),
                "export type Order = {\n\tpet: Pet\n}".to_string(),
            ]
        );
    }

    #[test]
    fn missing_declaration_fails_loudly() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("Order", "Pet");

        let mut aliases = IndexMap::new();
        aliases.insert("Order".to_string(), alias("Order", Vec::new()));

        let err = emit(&graph, &aliases).unwrap_err();
        assert!(matches!(err, ConversionError::MissingDeclaration(ref name) if name == "Pet"));
    }
}
