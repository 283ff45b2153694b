//! `JSDoc` tag extraction.
//!
//! A declaration's comment block is the run of `/** ... */` comments
//! immediately preceding it. The first block supplies the free-text
//! description; tags are collected from every block in source order.
//! Tag names are matched case-insensitively.

use ast_grep_core::{Doc, Node};
use cfmeta_core::SourcePosition;

use super::helpers::{normalize_line_endings, start_position};

pub(crate) const CUSTOM_FUNCTION: &str = "customfunction";
pub(crate) const HELP_URL: &str = "helpurl";
pub(crate) const VOLATILE: &str = "volatile";
pub(crate) const STREAMING: &str = "streaming";
pub(crate) const CANCELABLE: &str = "cancelable";
pub(crate) const REQUIRES_ADDRESS: &str = "requiresaddress";
pub(crate) const REQUIRES_PARAMETER_ADDRESSES: &str = "requiresparameteraddresses";

const PARAM_TAGS: &[&str] = &["param", "arg", "argument"];
const RETURN_TAGS: &[&str] = &["returns", "return"];

/// Parsed documentation attached to one declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentBlock {
    pub description: String,
    pub tags: Vec<DocTag>,
}

/// One `@tag` with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocTag {
    /// Tag name as written, without the `@`.
    pub name: String,
    /// `{...}` type expression of `@param` / `@returns`, braces removed.
    pub type_expression: Option<String>,
    /// Parameter named by a `@param` tag.
    pub parameter: Option<DocParameterName>,
    /// Trimmed free text.
    pub text: String,
    pub position: SourcePosition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocParameterName {
    pub name: String,
    /// `[name]` / `[name=default]` marks the parameter optional.
    pub bracketed: bool,
}

impl DocTag {
    fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    fn is_any_of(&self, names: &[&str]) -> bool {
        names.iter().any(|n| self.is(n))
    }
}

impl CommentBlock {
    /// Parse the raw text of a `/** ... */` comment starting at `start`.
    #[must_use]
    pub fn parse(raw: &str, start: SourcePosition) -> Self {
        let body = raw.strip_prefix("/**").unwrap_or(raw);
        let body = body.strip_suffix("*/").unwrap_or(body);

        let mut description: Vec<&str> = Vec::new();
        let mut pending: Vec<PendingTag> = Vec::new();

        for (index, raw_line) in body.split('\n').enumerate() {
            let raw_line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
            let (offset, content) = strip_line_decoration(raw_line);
            let column = if index == 0 {
                start.column + 3 + offset
            } else {
                1 + offset
            };
            let position = SourcePosition {
                line: start.line + index,
                column,
            };

            if let Some(rest) = content.strip_prefix('@')
                && rest.starts_with(|c: char| c.is_ascii_alphabetic())
            {
                let name_len = rest
                    .find(|c: char| c.is_whitespace() || c == '{')
                    .unwrap_or(rest.len());
                pending.push(PendingTag {
                    name: rest[..name_len].to_string(),
                    lines: vec![&rest[name_len..]],
                    position,
                });
            } else if let Some(tag) = pending.last_mut() {
                tag.lines.push(content);
            } else {
                description.push(content);
            }
        }

        Self {
            description: description.join("\n").trim().to_string(),
            tags: pending.into_iter().map(PendingTag::finish).collect(),
        }
    }

    /// Combine consecutive blocks: first description, all tags.
    #[must_use]
    pub fn merge(blocks: Vec<Self>) -> Option<Self> {
        let mut blocks = blocks.into_iter();
        let mut merged = blocks.next()?;
        for block in blocks {
            merged.tags.extend(block.tags);
        }
        Some(merged)
    }

    /// First tag named `name`, case-insensitively.
    #[must_use]
    pub fn find_tag(&self, name: &str) -> Option<&DocTag> {
        self.tags.iter().find(|t| t.is(name))
    }

    #[must_use]
    pub fn has_tag(&self, name: &str) -> bool {
        self.find_tag(name).is_some()
    }

    /// Text of the first tag named `name`, or `""` when absent.
    #[must_use]
    pub fn tag_text(&self, name: &str) -> &str {
        self.find_tag(name).map_or("", |t| t.text.as_str())
    }

    /// The `@param` tag documenting `name`. A later tag for the same name wins.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&DocTag> {
        self.tags
            .iter()
            .rev()
            .filter(|t| t.is_any_of(PARAM_TAGS))
            .find(|t| t.parameter.as_ref().is_some_and(|p| p.name == name))
    }

    /// The first `@returns` / `@return` tag.
    #[must_use]
    pub fn returns(&self) -> Option<&DocTag> {
        self.tags.iter().find(|t| t.is_any_of(RETURN_TAGS))
    }

    /// Id and display-name tokens of the `@customfunction` tag.
    ///
    /// The payload splits on whitespace: the first token is the id, the
    /// second the display name; anything after is ignored.
    #[must_use]
    pub fn id_and_name(&self) -> (Option<&str>, Option<&str>) {
        let mut tokens = self.tag_text(CUSTOM_FUNCTION).split_whitespace();
        (tokens.next(), tokens.next())
    }
}

/// Collect the `JSDoc` blocks directly preceding `anchor`.
pub(crate) fn leading_comment_block<D: Doc>(anchor: &Node<D>) -> Option<CommentBlock> {
    let mut blocks = Vec::new();
    let mut current = anchor.prev();
    while let Some(sibling) = current {
        if sibling.kind().as_ref() != "comment" {
            break;
        }
        let text = sibling.text();
        if text.starts_with("/**") && !text.starts_with("/**/") {
            blocks.push(CommentBlock::parse(&text, start_position(&sibling)));
        }
        current = sibling.prev();
    }
    blocks.reverse();
    CommentBlock::merge(blocks)
}

struct PendingTag<'a> {
    name: String,
    lines: Vec<&'a str>,
    position: SourcePosition,
}

impl PendingTag<'_> {
    fn finish(self) -> DocTag {
        let lower = self.name.to_ascii_lowercase();
        let is_param = PARAM_TAGS.contains(&lower.as_str());
        let is_return = RETURN_TAGS.contains(&lower.as_str());

        let body = self.lines.join("\n");
        let mut rest = body.trim_start();
        let mut type_expression = None;
        let mut parameter = None;

        if (is_param || is_return)
            && let Some((ty, after)) = split_type_expression(rest)
        {
            type_expression = Some(ty);
            rest = after.trim_start();
        }
        if is_param {
            let (name, after) = split_parameter_name(rest);
            parameter = name;
            rest = after;
        }

        let mut text = rest.trim();
        if is_param {
            text = text.strip_prefix('-').unwrap_or(text).trim();
        }

        DocTag {
            name: self.name,
            type_expression,
            parameter,
            text: normalize_line_endings(text),
            position: self.position,
        }
    }
}

/// Strip leading whitespace, the `*` gutter and one following space.
///
/// Returns the number of characters removed and the remaining content.
fn strip_line_decoration(line: &str) -> (usize, &str) {
    let rest = line.trim_start().trim_start_matches('*');
    let rest = rest.strip_prefix(' ').unwrap_or(rest);
    let offset = line[..line.len() - rest.len()].chars().count();
    (offset, rest.trim_end())
}

/// Split a leading `{...}` off `text`, honoring nested braces.
fn split_type_expression(text: &str) -> Option<(String, &str)> {
    if !text.starts_with('{') {
        return None;
    }
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((text[1..i].trim().to_string(), &text[i + 1..]));
                }
            }
            _ => {}
        }
    }
    None
}

/// Split the parameter name off a `@param` payload.
fn split_parameter_name(text: &str) -> (Option<DocParameterName>, &str) {
    if text.starts_with('[') {
        let mut depth = 0usize;
        for (i, c) in text.char_indices() {
            match c {
                '[' => depth += 1,
                ']' => {
                    depth -= 1;
                    if depth == 0 {
                        let inner = &text[1..i];
                        let name = inner.split('=').next().unwrap_or_default().trim();
                        let parameter = (!name.is_empty()).then(|| DocParameterName {
                            name: name.to_string(),
                            bracketed: true,
                        });
                        return (parameter, &text[i + 1..]);
                    }
                }
                _ => {}
            }
        }
    }

    let end = text.find(char::is_whitespace).unwrap_or(text.len());
    let name = &text[..end];
    if name.is_empty() {
        return (None, text);
    }
    (
        Some(DocParameterName {
            name: name.to_string(),
            bracketed: false,
        }),
        &text[end..],
    )
}
