//! Building a single page.

use std::fs;
use std::path::{Path, PathBuf};

use quill_renderer::process_markdown;

use crate::output::resolve_output_path;
use crate::{BuildError, Template};

/// Render `source` through `template` and write it as an `index.html`.
///
/// `nominal` is the flat `{root}/{slug}.html` path; the real destination is
/// derived from it with [`resolve_output_path`]. Missing parent directories
/// are created. Returns the path that was written.
///
/// # Errors
///
/// Read, parse, and write failures are returned as-is with the offending
/// path attached.
pub fn build_page(
    template: &Template,
    source: &Path,
    nominal: &Path,
) -> Result<PathBuf, BuildError> {
    let content = fs::read_to_string(source).map_err(|e| BuildError::io(source, e))?;
    let page = process_markdown(&content).map_err(|e| BuildError::Content {
        path: source.to_path_buf(),
        source: e,
    })?;
    let html = template.render(&page);

    let destination = resolve_output_path(nominal);
    if let Some(dir) = destination.parent() {
        fs::create_dir_all(dir).map_err(|e| BuildError::io(dir, e))?;
    }
    fs::write(&destination, html).map_err(|e| BuildError::io(&destination, e))?;

    tracing::debug!(
        source = %source.display(),
        output = %destination.display(),
        "Wrote page"
    );
    Ok(destination)
}
