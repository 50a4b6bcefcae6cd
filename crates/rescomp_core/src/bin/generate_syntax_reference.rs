//! Generate Markdown reference docs from `rescomp_core::lang` registries.
//!
//! This binary renders the statement keyword and closed vocabulary registries into a single
//! Markdown page under `docs/reference/`.
//!
//! ## Notes
//! - The generated file is meant to be checked into the repo and treated as a derived artifact.
//! - Do not edit the generated Markdown by hand; update the registries instead.
//!
//! ## Examples
//! Run from the workspace root:
//! ```bash
//! cargo run -p rescomp_core --bin generate_syntax_reference
//! ```
//!
//! ## Panics
//! - If the workspace root cannot be resolved.
//! - If output files cannot be written.

use std::fs;
use std::path::{Path, PathBuf};

use rescomp_core::lang::{keywords, vocab};

fn start_section(out: &mut String, heading: &str) {
    if !out.is_empty() && !out.ends_with("\n\n") {
        out.push('\n');
    }
    out.push_str(heading);
    out.push_str("\n\n");
}

fn main() {
    let root = workspace_root();

    let out_dir = root.join("docs/reference");
    fs::create_dir_all(&out_dir).expect("create docs/reference/");

    write_syntax_reference(&out_dir.join("syntax.md"));
}

/// Write `docs/reference/syntax.md`.
fn write_syntax_reference(path: &Path) {
    let mut out = String::new();
    out.push_str("# rescomp syntax reference\n\n");
    out.push_str("> Generated file. Regenerate with `cargo run -p rescomp_core --bin generate_syntax_reference`.\n\n");

    render_keywords_section(&mut out);
    render_vocab_section(&mut out);

    while out.ends_with("\n\n") {
        out.pop();
    }
    fs::write(path, out).expect("write syntax.md");
}

fn render_keywords_section(out: &mut String) {
    start_section(out, "## Statement keywords");
    out.push_str("| Keyword | Category | Since | Description |\n");
    out.push_str("|---|---|---|---|\n");
    for k in keywords::KEYWORDS {
        out.push_str(&format!(
            "| `{}` | {} | {} | {} |\n",
            k.canonical,
            k.category.label(),
            k.since,
            k.description
        ));
    }

    start_section(out, "### Examples");
    for k in keywords::KEYWORDS {
        for ex in k.examples {
            out.push_str(&format!("- `{}`", ex.code));
            if let Some(note) = ex.note {
                out.push_str(&format!(" ({note})"));
            }
            out.push('\n');
        }
    }
}

fn render_vocab_section(out: &mut String) {
    start_section(out, "## Closed vocabularies");
    out.push_str("| Vocabulary | Spellings | Description |\n");
    out.push_str("|---|---|---|\n");
    for v in vocab::VOCABULARIES {
        let spellings: Vec<String> = v.spellings.iter().map(|s| format!("`{s}`")).collect();
        out.push_str(&format!("| {} | {} | {} |\n", v.name, spellings.join(" "), v.description));
    }
}

fn workspace_root() -> PathBuf {
    // crates/rescomp_core -> workspace root
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .expect("resolve workspace root from CARGO_MANIFEST_DIR")
}
