//! Page rendering and output emission.
//!
//! The last pipeline stage. Renders a fixed table of five pages through a
//! [minijinja](https://docs.rs/minijinja) environment backed by a template
//! directory, copies the static assets tree, and writes a `site.json`
//! debug dump of the transformed document.
//!
//! ## Page Table
//!
//! Every page is a [`PageDescriptor`]: a template resolved by name, an
//! output filename, and per-page `<head>` metadata with fallbacks
//! (`about.html`'s title falls back to "About" when the section title is
//! blank, and every description falls back to `site.description`).
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── about.html
//! ├── services.html
//! ├── process.html
//! ├── contact.html
//! ├── assets/            # verbatim copy of the assets directory
//! │   └── css/style.css
//! └── site.json          # transformed document, pretty-printed
//! ```
//!
//! The output directory is removed and recreated before anything is
//! written — stale files never survive a rebuild. The clear is sequenced
//! before the parallel section, so it completes before the first write.
//!
//! ## Escaping
//!
//! Templates are named `*.html`, for which minijinja auto-escapes all
//! interpolations. A `<script>` in a content field reaches the page as
//! `&lt;script&gt;`.
//!
//! ## Concurrency
//!
//! The five renders are independent single-writer jobs, so they run on
//! the rayon pool via `try_for_each`; the first error aborts the build.

use crate::content::Document;
use minijinja::Environment;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One entry in the fixed page table.
#[derive(Debug, Clone)]
pub struct PageDescriptor {
    /// Template name, resolved against the templates directory.
    pub template: &'static str,
    /// Output filename under the output directory.
    pub out_file: &'static str,
    /// Per-page `<head>` metadata.
    pub meta: PageMeta,
}

/// Page metadata exposed to templates as `page`.
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

/// Transformed document flattened together with one page's metadata.
#[derive(Serialize)]
struct PageContext<'a> {
    #[serde(flatten)]
    doc: &'a Document,
    page: &'a PageMeta,
}

/// What a run produced, for CLI display.
#[derive(Debug)]
pub struct EmitSummary {
    /// `(page title, output filename)` in page-table order.
    pub pages: Vec<(String, String)>,
    /// Files copied from the assets directory.
    pub assets_copied: usize,
}

/// Resolve an optional-ish field: blank falls back to the default.
fn or_default(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// The fixed five-page table, with metadata drawn from the document.
pub fn page_table(doc: &Document) -> Vec<PageDescriptor> {
    let site_desc = doc.site.description.as_str();
    vec![
        PageDescriptor {
            template: "index.html",
            out_file: "index.html",
            meta: PageMeta {
                title: doc.site.title.clone(),
                description: site_desc.to_string(),
            },
        },
        PageDescriptor {
            template: "about.html",
            out_file: "about.html",
            meta: PageMeta {
                title: or_default(&doc.ui.sections.about_title, "About"),
                description: or_default(&doc.about.headline, site_desc),
            },
        },
        PageDescriptor {
            template: "services.html",
            out_file: "services.html",
            meta: PageMeta {
                title: or_default(&doc.ui.sections.services_title, "Services"),
                description: site_desc.to_string(),
            },
        },
        PageDescriptor {
            template: "process.html",
            out_file: "process.html",
            meta: PageMeta {
                title: or_default(&doc.ui.sections.process_title, "Process"),
                description: or_default(&doc.process.headline, site_desc),
            },
        },
        PageDescriptor {
            template: "contact.html",
            out_file: "contact.html",
            meta: PageMeta {
                title: or_default(&doc.ui.sections.contact_title, "Contact"),
                description: or_default(&doc.contact.intro, site_desc),
            },
        },
    ]
}

/// Render all pages, copy assets, write the debug dump.
///
/// `doc` is the transformed document. The output directory is cleared
/// first; on any error the run aborts with whatever was written so far
/// (the next run starts from a clean directory anyway).
pub fn emit(
    doc: &Document,
    templates_dir: &Path,
    assets_dir: &Path,
    output_dir: &Path,
) -> Result<EmitSummary, RenderError> {
    let mut env = Environment::new();
    env.set_loader(minijinja::path_loader(templates_dir));

    let pages = page_table(doc);

    reset_dir(output_dir)?;

    pages.par_iter().try_for_each(|page| {
        let template = env.get_template(page.template)?;
        let html = template.render(PageContext {
            doc,
            page: &page.meta,
        })?;
        fs::write(output_dir.join(page.out_file), html)?;
        Ok::<(), RenderError>(())
    })?;

    let assets_copied = copy_dir_recursive(assets_dir, &output_dir.join("assets"))?;

    let json = serde_json::to_string_pretty(doc)?;
    fs::write(output_dir.join("site.json"), json)?;

    Ok(EmitSummary {
        pages: pages
            .iter()
            .map(|p| (p.meta.title.clone(), p.out_file.to_string()))
            .collect(),
        assets_copied,
    })
}

/// Remove and recreate a directory. Missing is fine; anything else is not.
fn reset_dir(dir: &Path) -> std::io::Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    fs::create_dir_all(dir)
}

/// Copy a directory tree verbatim, returning the number of files copied.
fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<usize> {
    fs::create_dir_all(dst)?;
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copied += copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
            copied += 1;
        }
    }
    Ok(copied)
}
