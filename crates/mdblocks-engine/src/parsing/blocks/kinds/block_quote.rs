/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// A quote line starts with this marker once surrounding whitespace is trimmed.
    pub const MARKER: &'static str = "> ";

    /// Returns the quoted text of a line, or `None` if it is not a quote line.
    pub fn strip(line: &str) -> Option<&str> {
        line.trim()
            .strip_prefix(Self::MARKER)
            .map(str::trim)
    }
}
