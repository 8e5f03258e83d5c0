use super::kinds::{
    BlockQuote, CodeFence, FenceSig, Heading, Image, ListItem, ListKind, ThematicBreak,
};

/// What a line would open if nothing about the surrounding document mattered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `> text`; holds the quoted text.
    Quote(&'a str),
    Heading {
        level: u8,
        content: &'a str,
    },
    Todo {
        checked: bool,
        content: &'a str,
    },
    ListItem {
        kind: ListKind,
        indent: usize,
        content: &'a str,
    },
    Divider,
    Image {
        alt: &'a str,
        url: &'a str,
    },
    Blank,
    /// Anything else: prose.
    Text,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Whether the line is inside a
/// code fence is decided by the builder, which is why the fence signature is
/// kept apart from `kind`.
#[derive(Debug, Clone, Copy)]
pub struct LineClass<'a> {
    /// The line without its terminator.
    pub raw: &'a str,
    /// If the line looks like a fence opener/closer.
    pub fence_sig: Option<FenceSig<'a>>,
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Openers are tried in precedence order: quote, heading, todo, bullet
    /// or numbered item, divider, image, blank, text.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let raw = line.trim_end_matches(['\r', '\n']);
        LineClass {
            raw,
            fence_sig: CodeFence::sig(raw),
            kind: Self::kind(raw),
        }
    }

    fn kind(raw: &str) -> LineKind<'_> {
        if let Some(text) = BlockQuote::strip(raw) {
            return LineKind::Quote(text);
        }
        if let Some((level, content)) = Heading::parse(raw) {
            return LineKind::Heading { level, content };
        }
        if let Some((checked, content)) = ListItem::todo(raw) {
            return LineKind::Todo { checked, content };
        }
        if let Some((kind, indent, content)) = ListItem::parse(raw) {
            return LineKind::ListItem {
                kind,
                indent,
                content,
            };
        }
        if ThematicBreak::matches(raw) {
            return LineKind::Divider;
        }
        if let Some((alt, url)) = Image::parse(raw) {
            return LineKind::Image { alt, url };
        }
        if raw.trim().is_empty() {
            return LineKind::Blank;
        }
        LineKind::Text
    }
}
