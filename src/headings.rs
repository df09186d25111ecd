//! Hierarchical numbering of markdown headings.
//!
//! `# Intro` becomes `# 1. Intro`, the following `## Scope` becomes
//! `## 1.1 Scope`, and so on down to level six. A heading whose title
//! already starts with a number such as `2.3 ` is left alone and does not
//! advance any counter.
//!
//! [`Document`] splits a page into YAML front matter and body and applies the
//! numbering to the body when the front matter opts in with
//! `auto_number_headers: true`.

use crate::error::{PinError, Result};

pub const MAX_LEVEL: usize = 6;

/// Front matter key that enables numbering for a page.
pub const AUTO_NUMBER_KEY: &str = "auto_number_headers";

const FENCE: &str = "---";

/// Fence line used when a page without front matter gains some.
const DEFAULT_FENCE: &str = "---\n";

/// Number every heading line of `content`.
pub fn number_headings(content: &str) -> String {
    let mut counters = [0usize; MAX_LEVEL];
    let mut out = String::with_capacity(content.len() + content.len() / 8);

    for line in content.split_inclusive('\n') {
        let (body, ending) = match line.strip_suffix("\r\n") {
            Some(b) => (b, "\r\n"),
            None => match line.strip_suffix('\n') {
                Some(b) => (b, "\n"),
                None => (line, ""),
            },
        };
        match parse_heading(body) {
            Some((level, title)) if !starts_with_number(title) => {
                counters[level - 1] += 1;
                for c in counters.iter_mut().skip(level) {
                    *c = 0;
                }
                out.push_str(&format_heading(level, &counters[..level], title));
            }
            _ => out.push_str(body),
        }
        out.push_str(ending);
    }
    out
}

fn format_heading(level: usize, counters: &[usize], title: &str) -> String {
    let hashes = "#".repeat(level);
    let number = counters
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(".");
    if level == 1 {
        format!("{hashes} {number}. {title}")
    } else {
        format!("{hashes} {number} {title}")
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\x0b' | '\x0c')
}

/// `(level, trimmed title)` for a line of 1 to 6 `#`, whitespace, then text.
fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if !(1..=MAX_LEVEL).contains(&level) {
        return None;
    }
    let rest = &line[level..];
    let mut chars = rest.chars();
    // At least one separator and at least one character after it.
    match (chars.next(), chars.next()) {
        (Some(sep), Some(_)) if is_blank(sep) => {
            Some((level, rest.trim_matches(|c: char| is_title_space(c) || c == '\0')))
        }
        _ => None,
    }
}

/// True for titles like `3 Foo`, `1.2 Foo` or `1.2. Foo`.
fn starts_with_number(title: &str) -> bool {
    let bytes = title.as_bytes();
    let mut i = 0;
    loop {
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == start {
            return false;
        }
        if i + 1 < bytes.len() && bytes[i] == b'.' && bytes[i + 1].is_ascii_digit() {
            i += 1;
            continue;
        }
        break;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
    }
    title[i..].starts_with(is_title_space)
}

fn is_title_space(c: char) -> bool {
    is_blank(c) || c == '\n'
}

/// A markdown page with optional YAML front matter.
///
/// The fence lines are kept exactly as read, line endings included, so a page
/// that is not numbered renders back byte for byte.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Raw front matter text between the fences, without them.
    pub front_matter: Option<String>,
    pub data: serde_yaml::Mapping,
    pub content: String,
    open_fence: String,
    close_fence: String,
}

/// Pieces of a page that opens with a `---` fenced block.
struct FrontMatterSplit<'a> {
    open: &'a str,
    raw: &'a str,
    close: &'a str,
    body: &'a str,
}

impl Document {
    pub fn parse(text: &str) -> Result<Self> {
        let Some(split) = split_front_matter(text) else {
            return Ok(Self {
                front_matter: None,
                data: serde_yaml::Mapping::new(),
                content: text.to_string(),
                open_fence: DEFAULT_FENCE.to_string(),
                close_fence: DEFAULT_FENCE.to_string(),
            });
        };
        let data = if split.raw.trim().is_empty() {
            serde_yaml::Mapping::new()
        } else {
            serde_yaml::from_str(split.raw).map_err(PinError::FrontMatter)?
        };
        Ok(Self {
            front_matter: Some(split.raw.to_string()),
            data,
            content: split.body.to_string(),
            open_fence: split.open.to_string(),
            close_fence: split.close.to_string(),
        })
    }

    /// Whether the front matter sets `auto_number_headers: true`.
    pub fn wants_numbering(&self) -> bool {
        matches!(
            self.data.get(AUTO_NUMBER_KEY),
            Some(serde_yaml::Value::Bool(true))
        )
    }

    /// Number the body if the page asks for it. Returns whether it did.
    pub fn pre_render(&mut self) -> bool {
        if !self.wants_numbering() {
            return false;
        }
        self.content = number_headings(&self.content);
        true
    }

    /// Page text with the original front matter block put back in front.
    pub fn render(&self) -> String {
        match &self.front_matter {
            Some(fm) => format!(
                "{}{fm}{}{}",
                self.open_fence, self.close_fence, self.content
            ),
            None => self.content.clone(),
        }
    }
}

/// Parse, number when enabled, and render a page in one go.
pub fn process_page(text: &str) -> Result<String> {
    let mut doc = Document::parse(text)?;
    if doc.pre_render() {
        tracing::debug!("numbered headings");
    }
    Ok(doc.render())
}

fn split_front_matter(text: &str) -> Option<FrontMatterSplit<'_>> {
    let open = ["---\r\n", "---\n"]
        .into_iter()
        .find(|fence| text.starts_with(*fence))?;
    let after_open = &text[open.len()..];
    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            return Some(FrontMatterSplit {
                open,
                raw: &after_open[..offset],
                close: line,
                body: &after_open[offset + line.len()..],
            });
        }
        offset += line.len();
    }
    None
}
