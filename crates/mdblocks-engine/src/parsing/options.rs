/// Knobs for a single parse.
///
/// The defaults reproduce the converter's standard behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Emit a code block for a fence still open at end of input. When false
    /// the buffered lines are discarded.
    pub close_unterminated_fence: bool,
    /// Language used for fences without an info string.
    pub default_code_language: String,
}

impl ParseOptions {
    pub const DEFAULT_CODE_LANGUAGE: &'static str = "plain_text";
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            close_unterminated_fence: false,
            default_code_language: Self::DEFAULT_CODE_LANGUAGE.to_string(),
        }
    }
}
