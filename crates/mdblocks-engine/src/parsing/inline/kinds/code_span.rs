/// Code span inline type with owned delimiter constant.
///
/// Everything between the ticks is taken verbatim.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const TICK: &'static str = "`";
}
