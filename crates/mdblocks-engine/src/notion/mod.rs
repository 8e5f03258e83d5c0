//! # Wire Format
//!
//! `Serialize` impls that turn a block tree into the document store's block
//! schema:
//!
//! ```json
//! {"object": "block", "type": "paragraph", "paragraph": {"rich_text": [...], "color": "default"}}
//! ```
//!
//! Colors and toggles are fixed metadata; nothing here depends on parsing.
//! Span text longer than [`MAX_TEXT_CHARS`] is split into consecutive spans
//! with the same formatting, since the store rejects longer ones.

use serde::Serialize;
use serde::ser::{SerializeMap, SerializeSeq, Serializer};

use crate::parsing::{
    blocks::Block,
    inline::{Annotations, TextSpan},
};

/// Longest `content` the store accepts in a single rich text object.
pub const MAX_TEXT_CHARS: usize = 2000;

const DEFAULT_COLOR: &str = "default";

impl Block {
    /// The store's name for this block type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Block::Heading { level: 1, .. } => "heading_1",
            Block::Heading { level: 2, .. } => "heading_2",
            Block::Heading { .. } => "heading_3",
            Block::Paragraph { .. } => "paragraph",
            Block::BulletListItem { .. } => "bulleted_list_item",
            Block::NumberedListItem { .. } => "numbered_list_item",
            Block::TodoItem { .. } => "to_do",
            Block::CodeBlock { .. } => "code",
            Block::Quote { .. } => "quote",
            Block::Image { .. } => "image",
            Block::Divider => "divider",
        }
    }
}

/// Serializes blocks as a compact JSON array.
pub fn to_json(blocks: &[Block]) -> serde_json::Result<String> {
    serde_json::to_string(blocks)
}

/// Serializes blocks as an indented JSON array.
pub fn to_json_pretty(blocks: &[Block]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(blocks)
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let name = self.type_name();
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("object", "block")?;
        map.serialize_entry("type", name)?;
        match self {
            Block::Heading { spans, .. } => map.serialize_entry(
                name,
                &HeadingBody {
                    rich_text: RichText(spans),
                    color: DEFAULT_COLOR,
                    is_toggleable: false,
                },
            )?,
            Block::Paragraph { spans } | Block::Quote { spans } => map.serialize_entry(
                name,
                &TextBody {
                    rich_text: RichText(spans),
                    color: DEFAULT_COLOR,
                },
            )?,
            Block::BulletListItem { spans, children }
            | Block::NumberedListItem { spans, children } => map.serialize_entry(
                name,
                &ListItemBody {
                    rich_text: RichText(spans),
                    color: DEFAULT_COLOR,
                    children,
                },
            )?,
            Block::TodoItem { spans, checked } => map.serialize_entry(
                name,
                &TodoBody {
                    rich_text: RichText(spans),
                    checked: *checked,
                    color: DEFAULT_COLOR,
                },
            )?,
            Block::CodeBlock { language, text } => map.serialize_entry(
                name,
                &CodeBody {
                    rich_text: RichText(std::slice::from_ref(&TextSpan::plain(text.as_str()))),
                    language,
                },
            )?,
            Block::Image { url } => map.serialize_entry(
                name,
                &ImageBody {
                    kind: "external",
                    external: External { url },
                },
            )?,
            Block::Divider => map.serialize_entry(name, &Empty {})?,
        }
        map.end()
    }
}

#[derive(Serialize)]
struct HeadingBody<'a> {
    rich_text: RichText<'a>,
    color: &'static str,
    is_toggleable: bool,
}

#[derive(Serialize)]
struct TextBody<'a> {
    rich_text: RichText<'a>,
    color: &'static str,
}

#[derive(Serialize)]
struct ListItemBody<'a> {
    rich_text: RichText<'a>,
    color: &'static str,
    #[serde(skip_serializing_if = "<[Block]>::is_empty")]
    children: &'a [Block],
}

#[derive(Serialize)]
struct TodoBody<'a> {
    rich_text: RichText<'a>,
    checked: bool,
    color: &'static str,
}

#[derive(Serialize)]
struct CodeBody<'a> {
    rich_text: RichText<'a>,
    language: &'a str,
}

#[derive(Serialize)]
struct ImageBody<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    external: External<'a>,
}

#[derive(Serialize)]
struct External<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct Empty {}

/// A span sequence, with over-long spans split on the way out.
struct RichText<'a>(&'a [TextSpan]);

impl Serialize for RichText<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        for span in self.0 {
            for chunk in split_text(&span.content, MAX_TEXT_CHARS) {
                seq.serialize_element(&RichTextObject {
                    kind: "text",
                    text: TextContent {
                        content: chunk,
                        link: span.link.as_deref().map(|url| LinkTarget { url }),
                    },
                    annotations: AnnotationFlags::from(span.annotations),
                })?;
            }
        }
        seq.end()
    }
}

#[derive(Serialize)]
struct RichTextObject<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: TextContent<'a>,
    annotations: AnnotationFlags,
}

#[derive(Serialize)]
struct TextContent<'a> {
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<LinkTarget<'a>>,
}

#[derive(Serialize)]
struct LinkTarget<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct AnnotationFlags {
    bold: bool,
    italic: bool,
    strikethrough: bool,
    underline: bool,
    code: bool,
    color: &'static str,
}

impl From<Annotations> for AnnotationFlags {
    fn from(a: Annotations) -> Self {
        Self {
            bold: a.bold,
            italic: a.italic,
            strikethrough: a.strikethrough,
            underline: false,
            code: a.code,
            color: DEFAULT_COLOR,
        }
    }
}

/// Splits `text` into pieces of at most `max_chars` characters.
///
/// Empty text yields a single empty piece so a span is never dropped.
pub fn split_text(text: &str, max_chars: usize) -> Vec<&str> {
    if max_chars == 0 || text.chars().count() <= max_chars {
        return vec![text];
    }
    let mut pieces = vec![];
    let mut start = 0;
    let mut count = 0;
    for (i, _) in text.char_indices() {
        if count == max_chars {
            pieces.push(&text[start..i]);
            start = i;
            count = 0;
        }
        count += 1;
    }
    pieces.push(&text[start..]);
    pieces
}
