/// Inline link `[text](url)`.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    /// Separates the display text from the target.
    pub const MIDDLE: &'static str = "](";
    pub const CLOSE: &'static str = ")";
}
