//! Base HTML template with literal placeholder substitution.

use std::fs;
use std::path::Path;

use quill_renderer::RenderedPage;

use crate::BuildError;

const TITLE_PLACEHOLDER: &str = "{{title}}";
const CONTENT_PLACEHOLDER: &str = "{{content}}";

/// Title used when a page has no (or a falsy) `title` attribute.
pub const DEFAULT_TITLE: &str = "Untitled";

/// The site's base HTML template.
///
/// Loaded once per build and shared read-only by every page.
#[derive(Clone, Debug)]
pub struct Template {
    source: String,
}

impl Template {
    /// Wrap template text.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Read the template from disk.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingResource`] if the file does not exist and
    /// [`BuildError::Io`] for any other read failure.
    pub fn load(path: &Path) -> Result<Self, BuildError> {
        let source =
            fs::read_to_string(path).map_err(|e| BuildError::required("Template", path, e))?;
        Ok(Self::new(source))
    }

    /// Raw template text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Substitute a page into the template.
    ///
    /// The first `{{title}}` becomes the page title (or [`DEFAULT_TITLE`]),
    /// then the first `{{content}}` in the title-substituted text becomes the
    /// page HTML. Missing placeholders are ignored.
    #[must_use]
    pub fn render(&self, page: &RenderedPage) -> String {
        let title = page.attributes.title();
        let title = title.as_deref().unwrap_or(DEFAULT_TITLE);

        let html = self.source.replacen(TITLE_PLACEHOLDER, title, 1);
        html.replacen(CONTENT_PLACEHOLDER, &page.html, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quill_renderer::process_markdown;

    const BASIC: &str = "<title>{{title}}</title><body>{{content}}</body>";

    fn render(template: &str, source: &str) -> String {
        let page = process_markdown(source).unwrap();
        Template::new(template).render(&page)
    }

    #[test]
    fn test_round_trip() {
        assert_eq!(
            render(BASIC, "---\ntitle: Hello\n---\n# Hi"),
            "<title>Hello</title><body><h1>Hi</h1>\n</body>"
        );
    }

    #[test]
    fn test_missing_title_defaults() {
        assert_eq!(
            render(BASIC, "Home"),
            "<title>Untitled</title><body><p>Home</p>\n</body>"
        );
    }

    #[test]
    fn test_empty_title_defaults() {
        assert_eq!(
            render(BASIC, "---\ntitle: \"\"\n---\nHome"),
            "<title>Untitled</title><body><p>Home</p>\n</body>"
        );
    }

    #[test]
    fn test_only_first_occurrence_replaced() {
        let template = "{{title}}|{{title}}|{{content}}|{{content}}";
        assert_eq!(
            render(template, "---\ntitle: T\n---\nx"),
            "T|{{title}}|<p>x</p>\n|{{content}}"
        );
    }

    #[test]
    fn test_content_before_title() {
        assert_eq!(
            render("{{content}}<h1>{{title}}</h1>", "---\ntitle: T\n---\nx"),
            "<p>x</p>\n<h1>T</h1>"
        );
    }

    #[test]
    fn test_missing_placeholders_ignored() {
        assert_eq!(render("<html></html>", "x"), "<html></html>");
        assert_eq!(
            render("<title>{{title}}</title>", "---\ntitle: Only\n---\nx"),
            "<title>Only</title>"
        );
    }

    #[test]
    fn test_content_not_rescanned_for_title() {
        assert_eq!(
            render(BASIC, "---\ntitle: Plain\n---\nliteral {{title}}"),
            "<title>Plain</title><body><p>literal {{title}}</p>\n</body>"
        );
    }

    #[test]
    fn test_title_substituted_before_content() {
        assert_eq!(
            render(BASIC, "---\ntitle: \"A {{content}} B\"\n---\nx"),
            "<title>A <p>x</p>\n B</title><body>{{content}}</body>"
        );
    }

    #[test]
    fn test_title_is_not_escaped() {
        assert_eq!(
            render("{{title}}", "---\ntitle: <em>Raw</em>\n---\n"),
            "<em>Raw</em>"
        );
    }

    #[test]
    fn test_load_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let err = Template::load(&dir.path().join("base.html")).unwrap_err();
        assert!(matches!(err, BuildError::MissingResource { .. }), "{err:?}");
    }

    #[test]
    fn test_load_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("base.html");
        std::fs::write(&path, BASIC).unwrap();
        assert_eq!(Template::load(&path).unwrap().as_str(), BASIC);
    }
}
