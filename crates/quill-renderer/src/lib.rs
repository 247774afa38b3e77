//! Front-matter extraction and markdown rendering for Quill.
//!
//! A content file is a YAML front-matter block followed by a markdown body.
//! [`extract_frontmatter`] splits the two, [`render_markdown`] turns the body
//! into HTML, and [`process_markdown`] does both in one step.
//!
//! # Example
//!
//! ```
//! use quill_renderer::process_markdown;
//!
//! let page = process_markdown("---\ntitle: Hello\n---\n# Hi\n").unwrap();
//! assert_eq!(page.attributes.title().as_deref(), Some("Hello"));
//! assert_eq!(page.html, "<h1>Hi</h1>\n");
//! ```

mod frontmatter;
mod markdown;
mod page;

pub use frontmatter::{Attributes, Document, FrontmatterError, extract_frontmatter};
pub use markdown::{parser_options, render_markdown};
pub use page::{RenderedPage, process_markdown};
