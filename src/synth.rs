//! Placeholder description synthesis — pure functions of the signature.

use crate::model::Symbol;

/// Build the placeholder description for one symbol.
///
/// Functions get a TODO marker plus an `Args:` stub per parameter, in
/// declaration order. Classes get a fixed generic stub. Bodies, existing
/// docstrings, and annotations are never inspected.
pub fn synthesize(symbol: &Symbol) -> String {
    match symbol {
        Symbol::Function { name, params, .. } | Symbol::AsyncFunction { name, params, .. } => {
            let mut out = format!("TODO: Describe {}.", name);
            if !params.is_empty() {
                out.push_str("\n\nArgs:");
                for param in params {
                    out.push_str("\n    ");
                    out.push_str(param);
                    out.push_str(": TODO");
                }
            }
            out
        }
        Symbol::Class { .. } => "TODO: Describe class.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn function(name: &str, params: &[&str]) -> Symbol {
        Symbol::Function {
            name: name.to_string(),
            params: params.iter().map(|p| p.to_string()).collect(),
            span: 0..0,
        }
    }

    #[test]
    fn function_lists_params_in_order() {
        let text = synthesize(&function("add", &["a", "b", "c"]));
        assert_eq!(
            text,
            "TODO: Describe add.\n\nArgs:\n    a: TODO\n    b: TODO\n    c: TODO"
        );
    }

    #[test]
    fn function_without_params_has_no_args_section() {
        let text = synthesize(&function("main", &[]));
        assert_eq!(text, "TODO: Describe main.");
    }

    #[test]
    fn async_function_matches_function_shape() {
        let sync = synthesize(&function("run", &["x"]));
        let not_sync = synthesize(&Symbol::AsyncFunction {
            name: "run".to_string(),
            params: vec!["x".to_string()],
            span: 0..0,
        });
        assert_eq!(sync, not_sync);
    }

    #[test]
    fn class_stub_ignores_name() {
        let text = synthesize(&Symbol::Class {
            name: "Widget".to_string(),
            span: 0..0,
        });
        assert_eq!(text, "TODO: Describe class.");
    }
}
