//! Build pipeline driver.
//!
//! Composes the stages in order: load → validate → transform → emit.
//! Validation runs before the output directory is touched, so a failed
//! build leaves any previous output exactly as it was.
//!
//! Lives in the library (rather than `main.rs`) so integration tests can
//! run the whole pipeline without spawning the binary.

use crate::content::{self, ContentError, Document};
use crate::render::{self, EmitSummary, RenderError};
use crate::{transform, validate};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Input and output locations for one build.
#[derive(Debug, Clone)]
pub struct BuildPaths {
    /// The YAML content file.
    pub content: PathBuf,
    /// Directory of minijinja templates.
    pub templates: PathBuf,
    /// Static assets directory, copied verbatim.
    pub assets: PathBuf,
    /// Output directory, cleared and recreated each run.
    pub output: PathBuf,
}

/// Run the full pipeline once.
pub fn build(paths: &BuildPaths) -> Result<EmitSummary, BuildError> {
    let doc = load_and_check(&paths.content)?;
    let summary = render::emit(&doc, &paths.templates, &paths.assets, &paths.output)?;
    Ok(summary)
}

/// Load, validate, and transform the content file without writing output.
///
/// Backs the `check` command; also the front half of [`build`].
pub fn load_and_check(content_path: &Path) -> Result<Document, BuildError> {
    let doc = content::load(content_path)?;
    validate::validate(&doc)?;
    Ok(transform::transform(&doc))
}
