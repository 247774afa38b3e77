//! Output path layout.
//!
//! Every page gets its own directory so URLs stay extension-free:
//! `about.md` is served from `/about/`, `index.md` from `/`.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Slug of the page written directly into the output root.
const INDEX_SLUG: &str = "index";

/// File name written into every page directory.
const INDEX_FILE: &str = "index.html";

/// Destination file for the page `slug` under `root`.
///
/// `index` maps to `{root}/index.html`; any other slug `X` maps to
/// `{root}/X/index.html`.
#[must_use]
pub fn page_output_path(root: &Path, slug: &str) -> PathBuf {
    if slug == INDEX_SLUG {
        root.join(INDEX_FILE)
    } else {
        root.join(slug).join(INDEX_FILE)
    }
}

/// Flat `{root}/{slug}.html` path handed to the page builder.
#[must_use]
pub fn nominal_output_path(root: &Path, slug: &str) -> PathBuf {
    root.join(format!("{slug}.html"))
}

/// Turn a nominal `dir/X.html` path into the real destination.
///
/// The basename without `.html` is the slug and `dir` is the root.
#[must_use]
pub fn resolve_output_path(nominal: &Path) -> PathBuf {
    let root = nominal.parent().unwrap_or(Path::new(""));
    let file_name = nominal
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let slug = file_name.strip_suffix(".html").unwrap_or(&file_name);
    page_output_path(root, slug)
}

/// Slug of a markdown file, or `None` if it is not a page.
///
/// Only the `.md` extension counts. File names that are not valid UTF-8 are
/// converted lossily so they still produce a page.
///
/// ```
/// use std::path::Path;
/// use quill_site::slug_for;
///
/// assert_eq!(slug_for(Path::new("pages/about.md")).as_deref(), Some("about"));
/// assert_eq!(slug_for(Path::new("pages/notes.txt")), None);
/// ```
#[must_use]
pub fn slug_for(path: &Path) -> Option<Cow<'_, str>> {
    if path.extension()? != "md" {
        return None;
    }
    path.file_stem().map(OsStr::to_string_lossy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_index_at_root() {
        assert_eq!(
            page_output_path(Path::new("public"), "index"),
            PathBuf::from("public/index.html")
        );
    }

    #[test]
    fn test_other_slugs_nested() {
        for slug in ["about", "contact", "indexes", "Index", "2024-recap"] {
            assert_eq!(
                page_output_path(Path::new("public"), slug),
                PathBuf::from(format!("public/{slug}/index.html")),
                "{slug}"
            );
        }
    }

    #[test]
    fn test_blog_root() {
        assert_eq!(
            page_output_path(Path::new("public/blog"), "first-post"),
            PathBuf::from("public/blog/first-post/index.html")
        );
        assert_eq!(
            page_output_path(Path::new("public/blog"), "index"),
            PathBuf::from("public/blog/index.html")
        );
    }

    #[test]
    fn test_resolve_output_path() {
        assert_eq!(
            resolve_output_path(Path::new("public/about.html")),
            PathBuf::from("public/about/index.html")
        );
        assert_eq!(
            resolve_output_path(Path::new("public/index.html")),
            PathBuf::from("public/index.html")
        );
        assert_eq!(
            resolve_output_path(Path::new("public/blog/hello.html")),
            PathBuf::from("public/blog/hello/index.html")
        );
    }

    #[test]
    fn test_nominal_round_trips_through_resolver() {
        let nominal = nominal_output_path(Path::new("out"), "about");
        assert_eq!(nominal, PathBuf::from("out/about.html"));
        assert_eq!(
            resolve_output_path(&nominal),
            page_output_path(Path::new("out"), "about")
        );
    }

    #[test]
    fn test_slug_for() {
        let slug = |name: &str| slug_for(Path::new(name)).map(Cow::into_owned);
        assert_eq!(slug("about.md").as_deref(), Some("about"));
        assert_eq!(slug("pages/index.md").as_deref(), Some("index"));
        assert_eq!(slug("release.notes.md").as_deref(), Some("release.notes"));
        assert_eq!(slug(".md"), None);
        assert_eq!(slug("draft.md.bak"), None);
        assert_eq!(slug("README.markdown"), None);
        assert_eq!(slug("style.css"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_slug_for_non_utf8_name() {
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"caf\xe9.md"));
        assert_eq!(slug_for(path).as_deref(), Some("caf\u{fffd}"));
    }
}
