//! Data model for extracted symbols — format-agnostic.

use std::ops::Range;
use std::path::PathBuf;

/// One discovered source file. Read once per run, immutable afterwards.
#[derive(Debug)]
pub struct SourceFile {
    /// Path on disk, as discovered.
    pub path: PathBuf,
    /// Path relative to the scan root, used for titles and index links.
    pub rel_path: String,
    pub text: String,
}

/// A documentable definition found in a file's syntax tree.
///
/// Closed set — synthesis and rendering dispatch by pattern matching,
/// never by runtime kind inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    Function {
        name: String,
        /// Positional parameter names in declaration order.
        /// Splat parameters keep their `*`/`**` prefix.
        params: Vec<String>,
        /// Byte range of the definition in the source text.
        span: Range<usize>,
    },
    AsyncFunction {
        name: String,
        params: Vec<String>,
        span: Range<usize>,
    },
    Class {
        name: String,
        span: Range<usize>,
    },
}

impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Symbol::Function { name, .. }
            | Symbol::AsyncFunction { name, .. }
            | Symbol::Class { name, .. } => name,
        }
    }

    pub fn span(&self) -> &Range<usize> {
        match self {
            Symbol::Function { span, .. }
            | Symbol::AsyncFunction { span, .. }
            | Symbol::Class { span, .. } => span,
        }
    }
}

/// Everything generated for one source file.
///
/// Entry order matches first occurrence in a depth-first pre-order walk
/// of the syntax tree.
#[derive(Debug)]
pub struct GeneratedDoc {
    pub summary: String,
    pub entries: Vec<DocEntry>,
}

/// One symbol paired with its synthesized placeholder description.
#[derive(Debug)]
pub struct DocEntry {
    pub symbol: Symbol,
    pub placeholder: String,
}
