//! Markdown to HTML conversion.

use pulldown_cmark::{Options, Parser, html};

/// Parser options used for page bodies.
///
/// CommonMark plus the GitHub extensions authors expect (tables,
/// strikethrough, task lists). Heading attributes stay disabled so no ids are
/// injected into headings.
#[must_use]
pub fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM
}

/// Render a markdown body to HTML.
///
/// Raw HTML in the source is passed through unchanged.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, parser_options());
    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}
