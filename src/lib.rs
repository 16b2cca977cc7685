//! # microsite
//!
//! A minimal static site generator for single-file content sites. One YAML
//! file is the data source: its sections become pages, its lists become
//! page content, and everything else is templates and CSS.
//!
//! # Architecture: Four-Stage Pipeline
//!
//! microsite runs a single-pass pipeline, each stage a leaf function
//! composed in sequence by [`build::build`]:
//!
//! ```text
//! 1. Load       content/site.yaml  →  Document     (YAML → typed structs)
//! 2. Validate   Document           →  Document     (every required path, fail fast)
//! 3. Transform  Document           →  Document     (derived fields, e.g. bio paragraphs)
//! 4. Render     Document           →  dist/        (five HTML pages + assets + site.json)
//! ```
//!
//! The split exists for two reasons:
//!
//! - **Fail-fast**: validation finishes before the output directory is
//!   touched, so a bad content file never destroys a previous build.
//! - **Testability**: each stage is a library function, so tests exercise
//!   pipeline logic without spawning the binary.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Document model + YAML loading, `ContentError`, starter content |
//! | [`validate`] | Required-field checks — flat, first-failure-wins, dotted paths |
//! | [`transform`] | Derived view data (paragraph splitting) |
//! | [`render`] | Page table, minijinja rendering, asset copy, debug dump |
//! | [`build`] | Stage composition + `BuildError` |
//! | [`output`] | CLI output formatting — pure `format_*` functions |
//!
//! # Design Decisions
//!
//! ## File Templates Over Compile-Time HTML
//!
//! Pages are rendered with [minijinja](https://docs.rs/minijinja) from a
//! `templates/` directory rather than compile-time HTML macros. The site's
//! look is content, not code: designers edit `base.html` and the page
//! templates without touching Rust, `{% extends %}` keeps the shared
//! chrome in one place, and auto-escaping is on for every `*.html`
//! template so markup in content fields cannot inject script.
//!
//! ## Typed Document Over Free-Form Maps
//!
//! The content file deserializes into typed structs instead of a YAML
//! value tree. Unknown keys are rejected at parse time so typos fail
//! loudly, and validation reads like the schema: one `require_*` line per
//! dotted path.
//!
//! ## Full Regeneration, No Cache
//!
//! The output directory is deleted and recreated on every build. A build
//! is five template renders and a directory copy — fast enough that
//! incremental rebuilds would buy nothing and cost staleness bugs. The
//! only concurrency is the embarrassingly parallel page writes, which run
//! on the rayon pool.
//!
//! ## Debug Dump
//!
//! Every build writes `site.json`, the exact transformed document handed
//! to the templates. When a deployed page looks wrong, the dump answers
//! "what data did the template actually see" without a debugger. Note it
//! contains the full document, contact email included, so the output
//! directory is only as private as the site itself.

pub mod build;
pub mod content;
pub mod output;
pub mod render;
pub mod transform;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;
