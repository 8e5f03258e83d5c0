use serde::Serialize;

use crate::parsing::{
    blocks::Block,
    inline::{Annotations, TextSpan},
};

/// Snapshot of a parsed document for testing with `insta`.
#[derive(Serialize)]
pub struct Snap {
    /// All top-level blocks in the document.
    pub blocks: Vec<BlockSnap>,
}

/// Snapshot of a single block for testing.
#[derive(Serialize)]
pub struct BlockSnap {
    /// Block kind as a string (e.g., "Heading(2)", "Code(python)", "Todo[x]").
    pub kind: String,
    /// Preview of block text (truncated for readability).
    pub text: String,
    /// Span labels, only present when some span carries formatting or a link.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inline: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BlockSnap>,
}

/// Converts a block tree into a serializable snapshot for testing.
pub fn normalize(blocks: &[Block]) -> Snap {
    Snap {
        blocks: blocks.iter().map(block_snap).collect(),
    }
}

fn block_snap(b: &Block) -> BlockSnap {
    let kind = match b {
        Block::Heading { level, .. } => format!("Heading({level})"),
        Block::Paragraph { .. } => "Paragraph".to_string(),
        Block::BulletListItem { .. } => "Bullet".to_string(),
        Block::NumberedListItem { .. } => "Numbered".to_string(),
        Block::TodoItem { checked, .. } => {
            if *checked {
                "Todo[x]".to_string()
            } else {
                "Todo[ ]".to_string()
            }
        }
        Block::CodeBlock { language, .. } => format!("Code({language})"),
        Block::Quote { .. } => "Quote".to_string(),
        Block::Image { .. } => "Image".to_string(),
        Block::Divider => "Divider".to_string(),
    };

    let spans = b.spans();
    let inline = if spans.iter().all(TextSpan::is_plain) {
        vec![]
    } else {
        spans.iter().map(span_label).collect()
    };

    BlockSnap {
        kind,
        text: preview(&b.text(), 80),
        inline,
        children: b.children().iter().map(block_snap).collect(),
    }
}

/// Renders a span as `flags:content`, e.g. `bold:x` or `link(https://a.b):a`.
fn span_label(span: &TextSpan) -> String {
    let Annotations {
        bold,
        italic,
        code,
        strikethrough,
    } = span.annotations;
    let mut flags: Vec<String> = [
        (bold, "bold"),
        (italic, "italic"),
        (code, "code"),
        (strikethrough, "strike"),
    ]
    .into_iter()
    .filter(|(on, _)| *on)
    .map(|(_, name)| name.to_string())
    .collect();
    if let Some(url) = &span.link {
        flags.push(format!("link({url})"));
    }
    if flags.is_empty() {
        flags.push("text".to_string());
    }
    format!("{}:{}", flags.join("+"), span.content)
}

/// Truncates to at most `max` bytes on a char boundary with "..." suffix if needed.
pub fn preview(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}
