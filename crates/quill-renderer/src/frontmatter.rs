//! YAML front-matter extraction.
//!
//! A front-matter block opens with a `---` line at the very top of the file
//! (an optional UTF-8 BOM is skipped) and closes with the next `---` or `...`
//! line. Everything after the closing fence is the markdown body.

use serde_yaml::{Mapping, Value};

/// Front-matter attributes of a content file.
///
/// Keys are YAML mapping keys, values are kept as raw YAML values so callers
/// decide how to interpret them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes(Mapping);

impl Attributes {
    /// Look up an attribute by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Page title as a display string.
    ///
    /// Falsy values (null, `false`, `0`, NaN, empty string) count as absent,
    /// so `title: ""` behaves exactly like a missing title. Sequences and
    /// mappings are not titles either.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        match self.get("title")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Bool(true) => Some("true".to_owned()),
            Value::Number(n) => {
                let falsy = n.as_f64().is_some_and(|f| f == 0.0 || f.is_nan());
                (!falsy).then(|| n.to_string())
            }
            _ => None,
        }
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the file had no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A content file split into attributes and markdown body.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    /// Parsed front-matter (empty when the file has none).
    pub attributes: Attributes,
    /// Markdown text following the front-matter block.
    pub body: String,
}

/// Errors emitted while extracting front-matter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    /// Opening `---` without a closing fence.
    #[error("Unterminated front-matter block: expected closing '---'")]
    Unterminated,
    /// YAML failed to parse.
    #[error("Front-matter parse error: {0}")]
    Parse(String),
    /// Top-level YAML node was not a mapping.
    #[error("Front-matter must be a YAML mapping at the top level")]
    InvalidRootType,
}

/// Split raw file text into front-matter attributes and markdown body.
///
/// Files without an opening fence have empty attributes and use the whole
/// text as the body.
///
/// # Errors
///
/// Returns [`FrontmatterError`] if the block is unterminated, is not valid
/// YAML, or is not a mapping.
pub fn extract_frontmatter(input: &str) -> Result<Document, FrontmatterError> {
    let text = input.strip_prefix('\u{feff}').unwrap_or(input);

    let Some((first, block_start)) = next_line(text, 0) else {
        return Ok(without_frontmatter(input));
    };
    if !is_opening_fence(first) {
        return Ok(without_frontmatter(input));
    }

    let mut cursor = block_start;
    while let Some((line, next)) = next_line(text, cursor) {
        if is_closing_fence(line) {
            let attributes = parse_block(&text[block_start..cursor])?;
            return Ok(Document {
                attributes,
                body: text[next..].to_owned(),
            });
        }
        cursor = next;
    }

    Err(FrontmatterError::Unterminated)
}

fn without_frontmatter(input: &str) -> Document {
    Document {
        attributes: Attributes::default(),
        body: input.to_owned(),
    }
}

fn parse_block(block: &str) -> Result<Attributes, FrontmatterError> {
    if block.trim().is_empty() {
        return Ok(Attributes::default());
    }

    let value: Value =
        serde_yaml::from_str(block).map_err(|e| FrontmatterError::Parse(e.to_string()))?;

    match value {
        Value::Mapping(mapping) => Ok(Attributes(mapping)),
        Value::Null => Ok(Attributes::default()),
        _ => Err(FrontmatterError::InvalidRootType),
    }
}

/// Return the line starting at `start` (without its `\n`) and the offset of
/// the following line.
fn next_line(input: &str, start: usize) -> Option<(&str, usize)> {
    if start >= input.len() {
        return None;
    }

    match input[start..].find('\n') {
        Some(pos) => Some((&input[start..start + pos], start + pos + 1)),
        None => Some((&input[start..], input.len())),
    }
}

fn is_opening_fence(line: &str) -> bool {
    line.trim_end_matches('\r') == "---"
}

fn is_closing_fence(line: &str) -> bool {
    matches!(line.trim_end(), "---" | "...")
}
