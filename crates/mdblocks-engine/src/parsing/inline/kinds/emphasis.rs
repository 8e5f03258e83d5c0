/// Strong emphasis (bold) delimiters.
pub struct Strong;

impl Strong {
    pub const STARS: &'static str = "**";
    pub const UNDERSCORES: &'static str = "__";
}

/// Emphasis (italic) delimiters.
///
/// These are prefixes of the [`Strong`] delimiters, so they must be tried
/// after them.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: &'static str = "*";
    pub const UNDERSCORE: &'static str = "_";
}
