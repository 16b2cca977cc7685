//! View derivation from validated content.
//!
//! The only derived field today is `about.bio_paragraphs`: the free-text
//! bio split on blank lines into display-ready paragraphs. Templates loop
//! over the list instead of re-parsing the raw text.
//!
//! [`transform`] is pure and works on a clone — the loaded document stays
//! untouched, which keeps the loader's output reusable (the `check`
//! command inspects both raw and derived fields).

use crate::content::Document;

/// Produce the render document: the input plus derived fields.
pub fn transform(doc: &Document) -> Document {
    let mut out = doc.clone();
    out.about.bio_paragraphs = split_paragraphs(&doc.about.bio);
    out
}

/// Split free text into paragraphs on blank lines.
///
/// Runs of whitespace inside a paragraph collapse to single spaces, each
/// paragraph is trimmed, and empty paragraphs are dropped. Any number of
/// consecutive blank lines acts as one separator, so the result is stable
/// under re-splitting its own joined output:
///
/// - `"A.\n\nB."` → `["A.", "B."]`
/// - `"A.\n\n\n\nB."` → `["A.", "B."]`
/// - `"  \n\n  "` → `[]`
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut words: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !words.is_empty() {
                paragraphs.push(words.join(" "));
                words.clear();
            }
        } else {
            words.extend(line.split_whitespace());
        }
    }
    if !words.is_empty() {
        paragraphs.push(words.join(" "));
    }
    paragraphs
}
