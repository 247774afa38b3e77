//! Decoding a whole content file into a rendered page.

use crate::frontmatter::{Attributes, FrontmatterError, extract_frontmatter};
use crate::markdown::render_markdown;

/// Front-matter attributes paired with the rendered HTML body.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedPage {
    /// Parsed front-matter.
    pub attributes: Attributes,
    /// HTML rendered from the markdown body.
    pub html: String,
}

/// Extract front-matter from `content` and render the remaining body.
///
/// # Errors
///
/// Returns [`FrontmatterError`] if the front-matter block is malformed.
pub fn process_markdown(content: &str) -> Result<RenderedPage, FrontmatterError> {
    let document = extract_frontmatter(content)?;
    Ok(RenderedPage {
        html: render_markdown(&document.body),
        attributes: document.attributes,
    })
}
