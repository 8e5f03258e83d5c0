use crate::parsing::inline::{TextSpan, plain_text};

use super::kinds::ListKind;

/// One node of the output content tree.
///
/// Only list items own children: nested list items, or paragraphs that
/// continue the item. Children keep document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        /// Always in `1..=3`.
        level: u8,
        spans: Vec<TextSpan>,
    },
    Paragraph {
        spans: Vec<TextSpan>,
    },
    BulletListItem {
        spans: Vec<TextSpan>,
        children: Vec<Block>,
    },
    NumberedListItem {
        spans: Vec<TextSpan>,
        children: Vec<Block>,
    },
    TodoItem {
        spans: Vec<TextSpan>,
        checked: bool,
    },
    CodeBlock {
        language: String,
        text: String,
    },
    Quote {
        spans: Vec<TextSpan>,
    },
    Image {
        url: String,
    },
    Divider,
}

/// Index chain from the top-level sequence down to a block.
///
/// `[2, 0]` is the first child of the third top-level block.
pub type BlockPath = Vec<usize>;

impl Block {
    /// A list item with no children yet.
    pub fn list_item(kind: ListKind, spans: Vec<TextSpan>) -> Self {
        match kind {
            ListKind::Bulleted => Block::BulletListItem {
                spans,
                children: vec![],
            },
            ListKind::Numbered => Block::NumberedListItem {
                spans,
                children: vec![],
            },
        }
    }

    /// Rich text of the block; empty for code, images and dividers.
    pub fn spans(&self) -> &[TextSpan] {
        match self {
            Block::Heading { spans, .. }
            | Block::Paragraph { spans }
            | Block::BulletListItem { spans, .. }
            | Block::NumberedListItem { spans, .. }
            | Block::TodoItem { spans, .. }
            | Block::Quote { spans } => spans,
            Block::CodeBlock { .. } | Block::Image { .. } | Block::Divider => &[],
        }
    }

    pub fn children(&self) -> &[Block] {
        match self {
            Block::BulletListItem { children, .. } | Block::NumberedListItem { children, .. } => {
                children
            }
            _ => &[],
        }
    }

    /// Mutable children, or `None` for blocks that cannot own any.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Block>> {
        match self {
            Block::BulletListItem { children, .. } | Block::NumberedListItem { children, .. } => {
                Some(children)
            }
            _ => None,
        }
    }

    pub fn is_list_item(&self) -> bool {
        matches!(
            self,
            Block::BulletListItem { .. } | Block::NumberedListItem { .. }
        )
    }

    /// Display text without markup; the raw text for code blocks.
    pub fn text(&self) -> String {
        match self {
            Block::CodeBlock { text, .. } => text.clone(),
            Block::Image { url } => url.clone(),
            _ => plain_text(self.spans()),
        }
    }
}

/// Resolves a path to a block in the tree.
pub fn block_at_mut<'b>(blocks: &'b mut [Block], path: &[usize]) -> Option<&'b mut Block> {
    let (first, rest) = path.split_first()?;
    let mut node = blocks.get_mut(*first)?;
    for &idx in rest {
        node = node.children_mut()?.get_mut(idx)?;
    }
    Some(node)
}

/// Appends `block` as the last child of the block at `parent`, or at the top
/// level when `parent` is `None`. Returns the path of the appended block.
///
/// A parent path that does not resolve to a list item falls back to the top
/// level.
pub fn append_block(out: &mut Vec<Block>, parent: Option<&[usize]>, block: Block) -> BlockPath {
    if let Some(parent) = parent
        && let Some(children) = block_at_mut(out, parent).and_then(Block::children_mut)
    {
        children.push(block);
        let mut path = parent.to_vec();
        path.push(children.len() - 1);
        return path;
    }
    out.push(block);
    vec![out.len() - 1]
}
