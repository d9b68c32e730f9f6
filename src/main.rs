//! pydoc-gen — generate Markdown documentation stubs from Python sources.
//!
//! Scans a directory tree for `.py` files, extracts functions and classes
//! from each file's syntax tree, summarizes each file (remote
//! chat-completion call when a key is configured, deterministic stub
//! otherwise), and writes one Markdown page per file plus an index.

mod discover;
mod model;
mod parser;
mod render;
mod summary;
mod synth;

use anyhow::{Context, Result};
use clap::Parser;
use model::{DocEntry, GeneratedDoc, SourceFile};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use summary::SummaryConfig;

#[derive(Parser)]
#[command(
    name = "pydoc-gen",
    about = "Generate Markdown documentation stubs from Python source files"
)]
struct Cli {
    /// Root directory to scan for .py files
    path: PathBuf,

    /// Output directory
    #[arg(short = 'o', long, default_value = "output")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SummaryConfig::from_env();
    run(&cli.path, &cli.output, &config)?;
    println!("Documentation written to {}", cli.output.display());
    Ok(())
}

/// Process every discovered file strictly in discovery order, then write
/// the index. A failure on any file aborts before the index is written,
/// leaving already-written pages in place.
fn run(root: &Path, output_dir: &Path, config: &SummaryConfig) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let files = discover::find_python_files(root)?;
    let names = output_names(root, &files);
    let summarizer = summary::create_summarizer(config);

    let mut index: Vec<(String, String)> = Vec::new();
    for (path, name) in files.iter().zip(&names) {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let file = SourceFile {
            rel_path: relative_to(root, path),
            path: path.clone(),
            text,
        };

        let symbols = parser::extract_symbols(&file.text)
            .with_context(|| format!("failed to parse {}", file.path.display()))?;
        let summary_line = summarizer.summarize(&file.path, &file.text)?;
        let entries = symbols
            .into_iter()
            .map(|symbol| DocEntry {
                placeholder: synth::synthesize(&symbol),
                symbol,
            })
            .collect();
        let doc = GeneratedDoc {
            summary: summary_line,
            entries,
        };

        let file_name = format!("{}.md", name);
        let out_path = output_dir.join(&file_name);
        fs::write(&out_path, render::render_markdown(&file, &doc))
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        index.push((file.rel_path, file_name));
    }

    write_index(output_dir, &index)
}

/// Derive output page names (without the `.md` extension).
///
/// Unique stems stay flat. When two inputs share a stem, every colliding
/// file falls back to its root-relative path with separators replaced by
/// `__`, so distinct inputs never overwrite each other.
fn output_names(root: &Path, files: &[PathBuf]) -> Vec<String> {
    let stems: Vec<String> = files
        .iter()
        .map(|path| {
            path.file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default()
        })
        .collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for stem in &stems {
        *counts.entry(stem.as_str()).or_default() += 1;
    }

    files
        .iter()
        .zip(&stems)
        .map(|(path, stem)| {
            if counts[stem.as_str()] > 1 {
                relative_to(root, path)
                    .trim_end_matches(".py")
                    .replace('/', "__")
            } else {
                stem.clone()
            }
        })
        .collect()
}

fn relative_to(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Write `index.json` (flat list of generated page names) and `index.md`
/// (linked listing), fully replacing any prior index.
fn write_index(output_dir: &Path, entries: &[(String, String)]) -> Result<()> {
    let names: Vec<&str> = entries.iter().map(|(_, name)| name.as_str()).collect();
    let json = serde_json::to_string_pretty(&names).context("failed to serialize index")?;
    let json_path = output_dir.join("index.json");
    fs::write(&json_path, json)
        .with_context(|| format!("failed to write {}", json_path.display()))?;

    let md_path = output_dir.join("index.md");
    fs::write(&md_path, render::render_index(entries))
        .with_context(|| format!("failed to write {}", md_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_stems_stay_flat() {
        let root = Path::new("/proj");
        let files = vec![
            PathBuf::from("/proj/a.py"),
            PathBuf::from("/proj/sub/b.py"),
        ];
        assert_eq!(output_names(root, &files), ["a", "b"]);
    }

    #[test]
    fn colliding_stems_use_relative_path() {
        let root = Path::new("/proj");
        let files = vec![
            PathBuf::from("/proj/x/util.py"),
            PathBuf::from("/proj/y/util.py"),
            PathBuf::from("/proj/main.py"),
        ];
        assert_eq!(
            output_names(root, &files),
            ["x__util", "y__util", "main"]
        );
    }

    #[test]
    fn relative_path_uses_forward_slashes() {
        let root = Path::new("/proj");
        assert_eq!(
            relative_to(root, Path::new("/proj/sub/deep/c.py")),
            "sub/deep/c.py"
        );
    }
}
