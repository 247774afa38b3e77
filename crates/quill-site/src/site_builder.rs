//! Whole-site build.
//!
//! A build runs three phases in order and stops at the first fatal error:
//!
//! 1. Pages: every `.md` file in the pages directory (directory required).
//! 2. Blog: every `.md` file in the blog directory, written under `blog/`
//!    (directory optional).
//! 3. Assets: the stylesheet (required) and the script (optional).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::output::{nominal_output_path, slug_for};
use crate::page_builder::build_page;
use crate::{BuildError, Template};

/// Output subdirectory for blog posts.
const BLOG_OUTPUT_DIR: &str = "blog";

/// Locations of the site's inputs and output.
#[derive(Clone, Debug)]
pub struct SiteLayout {
    /// Directory of page sources (required).
    pub pages_dir: PathBuf,
    /// Directory of blog post sources (optional).
    pub blog_dir: PathBuf,
    /// Base HTML template (required).
    pub template: PathBuf,
    /// Stylesheet copied to `css/style.css` (required).
    pub stylesheet: PathBuf,
    /// Script copied to `js/main.js` (optional).
    pub script: PathBuf,
    /// Root of the generated site.
    pub output_dir: PathBuf,
}

/// Summary of a successful build.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Pages written from the pages directory.
    pub pages: usize,
    /// Posts written from the blog directory.
    pub posts: usize,
    /// Whether the blog phase was skipped because the directory is absent.
    pub blog_skipped: bool,
    /// Whether the script asset was copied.
    pub script_copied: bool,
}

/// Builds a static site from a [`SiteLayout`].
pub struct SiteBuilder {
    layout: SiteLayout,
}

impl SiteBuilder {
    /// Create a builder for the given layout.
    #[must_use]
    pub fn new(layout: SiteLayout) -> Self {
        Self { layout }
    }

    /// Run the full build.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error: a missing template, pages directory, or
    /// stylesheet; malformed content in any page or post; or any other I/O
    /// failure.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let template = Template::load(&self.layout.template)?;
        let mut report = BuildReport::default();

        report.pages = self.build_pages(&template)?;

        match self.build_blog(&template)? {
            Some(posts) => report.posts = posts,
            None => report.blog_skipped = true,
        }

        report.script_copied = self.copy_assets()?;

        tracing::info!(
            pages = report.pages,
            posts = report.posts,
            output = %self.layout.output_dir.display(),
            "Site build completed"
        );
        Ok(report)
    }

    fn build_pages(&self, template: &Template) -> Result<usize, BuildError> {
        let dir = &self.layout.pages_dir;
        let sources = list_markdown(dir)
            .map_err(|e| BuildError::required("Pages directory", dir, e))?;
        build_all(template, &sources, &self.layout.output_dir)
    }

    /// Returns `None` when the blog directory does not exist.
    fn build_blog(&self, template: &Template) -> Result<Option<usize>, BuildError> {
        let dir = &self.layout.blog_dir;
        let sources = match list_markdown(dir) {
            Ok(sources) => sources,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %dir.display(), "No blog posts found, skipping");
                return Ok(None);
            }
            Err(e) => return Err(BuildError::io(dir, e)),
        };

        let root = self.layout.output_dir.join(BLOG_OUTPUT_DIR);
        build_all(template, &sources, &root).map(Some)
    }

    /// Copy static assets. Returns whether the script was copied.
    fn copy_assets(&self) -> Result<bool, BuildError> {
        let out = &self.layout.output_dir;

        let css_dir = out.join("css");
        fs::create_dir_all(&css_dir).map_err(|e| BuildError::io(&css_dir, e))?;
        let stylesheet = &self.layout.stylesheet;
        fs::copy(stylesheet, css_dir.join("style.css"))
            .map_err(|e| BuildError::required("Stylesheet", stylesheet, e))?;

        let js_dir = out.join("js");
        fs::create_dir_all(&js_dir).map_err(|e| BuildError::io(&js_dir, e))?;
        let script = &self.layout.script;
        match fs::copy(script, js_dir.join("main.js")) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %script.display(), "No main.js found, skipping");
                Ok(false)
            }
            Err(e) => Err(BuildError::io(script, e)),
        }
    }
}

/// Build every `(slug, source)` pair into `root`.
fn build_all(
    template: &Template,
    sources: &[(String, PathBuf)],
    root: &Path,
) -> Result<usize, BuildError> {
    for (slug, source) in sources {
        build_page(template, source, &nominal_output_path(root, slug))?;
    }
    Ok(sources.len())
}

/// List markdown files in `dir` as `(slug, path)` pairs, sorted by slug.
///
/// Subdirectories and files without a `.md` extension are skipped.
fn list_markdown(dir: &Path) -> io::Result<Vec<(String, PathBuf)>> {
    let mut sources = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let Some(slug) = slug_for(&path) else {
            continue;
        };
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "Skipping non-file entry");
            continue;
        }
        let slug = slug.into_owned();
        sources.push((slug, path));
    }
    sources.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    Ok(sources)
}
