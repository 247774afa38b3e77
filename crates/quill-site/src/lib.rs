//! Page and site building for Quill.
//!
//! This crate turns content directories into a static site:
//!
//! - [`Template`]: literal `{{title}}`/`{{content}}` substitution
//! - [`page_output_path`]: directory-per-page URL layout
//! - [`build_page`]: decode, render, and write one markdown file
//! - [`SiteBuilder`]: pages, blog, and asset phases for a whole site

mod error;
mod output;
mod page_builder;
mod site_builder;
mod template;

pub use error::BuildError;
pub use output::{nominal_output_path, page_output_path, resolve_output_path, slug_for};
pub use page_builder::build_page;
pub use site_builder::{BuildReport, SiteBuilder, SiteLayout};
pub use template::{DEFAULT_TITLE, Template};
