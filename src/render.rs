//! Markdown page and index assembly.

use crate::model::{GeneratedDoc, SourceFile};
use std::ops::Range;

/// Render one source file's documentation page: title, summary, then one
/// block per symbol with its signature excerpt and placeholder text.
pub fn render_markdown(file: &SourceFile, doc: &GeneratedDoc) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", file.rel_path));
    out.push_str(&doc.summary);
    out.push('\n');

    for entry in &doc.entries {
        out.push('\n');
        out.push_str(&format!("## {}\n\n", entry.symbol.name()));
        out.push_str("```python\n");
        out.push_str(signature_line(&file.text, entry.symbol.span()));
        out.push_str("\n```\n\n");
        out.push_str(&entry.placeholder);
        out.push('\n');
    }

    out
}

/// Render the Markdown index: one link per generated page, keyed by the
/// source file's relative path.
pub fn render_index(entries: &[(String, String)]) -> String {
    let mut out = String::from("# Project Documentation\n");
    for (rel_path, file_name) in entries {
        out.push_str(&format!("\n- [{}]({})", rel_path, file_name));
    }
    out.push('\n');
    out
}

/// First line of the definition, sliced from the symbol's span.
fn signature_line<'a>(text: &'a str, span: &Range<usize>) -> &'a str {
    let excerpt = &text[span.clone()];
    excerpt.lines().next().unwrap_or(excerpt)
}
