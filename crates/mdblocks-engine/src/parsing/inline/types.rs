/// Formatting flags carried by a [`TextSpan`].
///
/// Each flag applies independently; several may be set on the same span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
    pub strikethrough: bool,
}

impl Annotations {
    /// No formatting at all.
    pub const PLAIN: Self = Self {
        bold: false,
        italic: false,
        code: false,
        strikethrough: false,
    };

    pub const BOLD: Self = Self {
        bold: true,
        ..Self::PLAIN
    };

    pub const ITALIC: Self = Self {
        italic: true,
        ..Self::PLAIN
    };

    pub const CODE: Self = Self {
        code: true,
        ..Self::PLAIN
    };

    pub const STRIKETHROUGH: Self = Self {
        strikethrough: true,
        ..Self::PLAIN
    };

    /// Returns true if no flag is set.
    pub fn is_plain(&self) -> bool {
        *self == Self::PLAIN
    }
}

/// One run of inline text sharing the same annotations and optional link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    /// Display text. Only empty when the source line itself was empty.
    pub content: String,
    pub annotations: Annotations,
    /// Link target for `[text](url)` spans.
    pub link: Option<String>,
}

impl TextSpan {
    /// A span with no annotations and no link.
    pub fn plain(content: impl Into<String>) -> Self {
        Self::styled(content, Annotations::PLAIN)
    }

    pub fn styled(content: impl Into<String>, annotations: Annotations) -> Self {
        Self {
            content: content.into(),
            annotations,
            link: None,
        }
    }

    /// A link span. An empty display text falls back to the URL itself.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        let url = url.into();
        let text = text.into();
        Self {
            content: if text.is_empty() { url.clone() } else { text },
            annotations: Annotations::PLAIN,
            link: Some(url),
        }
    }

    /// Returns true for spans without annotations or link.
    pub fn is_plain(&self) -> bool {
        self.annotations.is_plain() && self.link.is_none()
    }
}

/// Concatenates the display text of a span sequence.
pub fn plain_text(spans: &[TextSpan]) -> String {
    spans.iter().map(|s| s.content.as_str()).collect()
}
