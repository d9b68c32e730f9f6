//! Python symbol extraction via tree-sitter.
//!
//! Walks the full syntax tree depth-first pre-order, so nested and
//! decorated definitions are collected after their enclosing definition.

use crate::model::Symbol;
use anyhow::{anyhow, Context, Result};
use tree_sitter::{Node, Parser};

/// Extract every function, async function, and class definition from
/// Python source, in tree order.
///
/// Source that does not parse as valid Python is an error; the caller
/// aborts the whole run rather than recovering per symbol.
pub fn extract_symbols(source: &str) -> Result<Vec<Symbol>> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .context("failed to load Python grammar")?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| anyhow!("parser produced no syntax tree"))?;
    if tree.root_node().has_error() {
        return Err(anyhow!("source is not valid Python"));
    }

    let mut symbols = Vec::new();
    collect(tree.root_node(), source.as_bytes(), &mut symbols);
    Ok(symbols)
}

fn collect(node: Node, source: &[u8], out: &mut Vec<Symbol>) {
    match node.kind() {
        "function_definition" => {
            if let Some(symbol) = function_symbol(node, source) {
                out.push(symbol);
            }
        }
        "class_definition" => {
            if let Some(name) = field_text(node, "name", source) {
                out.push(Symbol::Class {
                    name,
                    span: node.byte_range(),
                });
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect(child, source, out);
    }
}

fn function_symbol(node: Node, source: &[u8]) -> Option<Symbol> {
    let name = field_text(node, "name", source)?;
    let params = parameter_names(node, source);
    let span = node.byte_range();

    // `async def` is a function_definition whose first child is the
    // `async` keyword.
    let is_async = node.child(0).is_some_and(|c| c.kind() == "async");
    Some(if is_async {
        Symbol::AsyncFunction { name, params, span }
    } else {
        Symbol::Function { name, params, span }
    })
}

fn parameter_names(node: Node, source: &[u8]) -> Vec<String> {
    let Some(params) = node.child_by_field_name("parameters") else {
        return Vec::new();
    };
    let mut names = Vec::new();
    let mut cursor = params.walk();
    for child in params.named_children(&mut cursor) {
        if let Some(name) = parameter_name(child, source) {
            names.push(name);
        }
    }
    names
}

/// Resolve one parameter node to its declared name.
///
/// Covers plain, typed, defaulted, and splat forms. The bare `*` and `/`
/// separators carry no name and are skipped.
fn parameter_name(node: Node, source: &[u8]) -> Option<String> {
    match node.kind() {
        "identifier" => node_text(node, source),
        "typed_parameter" => node
            .named_child(0)
            .and_then(|inner| parameter_name(inner, source)),
        "default_parameter" | "typed_default_parameter" => node
            .child_by_field_name("name")
            .and_then(|inner| parameter_name(inner, source)),
        "list_splat_pattern" => node
            .named_child(0)
            .and_then(|inner| node_text(inner, source))
            .map(|name| format!("*{}", name)),
        "dictionary_splat_pattern" => node
            .named_child(0)
            .and_then(|inner| node_text(inner, source))
            .map(|name| format!("**{}", name)),
        _ => None,
    }
}

fn field_text(node: Node, field: &str, source: &[u8]) -> Option<String> {
    node.child_by_field_name(field)
        .and_then(|child| node_text(child, source))
}

fn node_text(node: Node, source: &[u8]) -> Option<String> {
    node.utf8_text(source).ok().map(str::to_string)
}
