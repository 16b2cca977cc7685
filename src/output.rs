//! CLI output formatting.
//!
//! Each command has a `format_*` function returning `Vec<String>` and a
//! `print_*` wrapper that writes to stdout. Format functions are pure —
//! no I/O, no side effects — so tests assert on lines directly.
//!
//! ## Build
//!
//! ```text
//! Pages
//! 001 Acme Studio — Strategy for small teams → index.html
//! 002 About → about.html
//! ...
//!
//! Assets: 3 files
//! Debug: site.json
//! ```
//!
//! ## Check
//!
//! ```text
//! Content
//!     5 navigation links
//!     3 services
//!     4 process steps
//!     2 bio paragraphs
//! ```

use crate::content::Document;
use crate::render::EmitSummary;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Lines describing what a build produced.
pub fn format_build_output(summary: &EmitSummary) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    for (i, (title, out_file)) in summary.pages.iter().enumerate() {
        lines.push(format!("{} {} → {}", format_index(i + 1), title, out_file));
    }
    lines.push(String::new());
    lines.push(format!("Assets: {} files", summary.assets_copied));
    lines.push("Debug: site.json".to_string());
    lines
}

pub fn print_build_output(summary: &EmitSummary) {
    for line in format_build_output(summary) {
        println!("{}", line);
    }
}

/// Content inventory lines for the `check` command.
pub fn format_check_output(doc: &Document) -> Vec<String> {
    vec![
        "Content".to_string(),
        format!("    {} navigation links", doc.ui.navigation.len()),
        format!("    {} services", doc.services.len()),
        format!("    {} process steps", doc.process.steps.len()),
        format!("    {} bio paragraphs", doc.about.bio_paragraphs.len()),
    ]
}

pub fn print_check_output(doc: &Document) {
    for line in format_check_output(doc) {
        println!("{}", line);
    }
}
