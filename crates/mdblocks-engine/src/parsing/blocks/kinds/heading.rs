/// ATX heading (`# Title`).
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    /// Deeper headings are clamped to this level.
    pub const MAX_LEVEL: u8 = 3;

    /// Parses a heading line into `(level, content)`.
    ///
    /// The marker run must start the line and be followed by whitespace or
    /// the end of the line. A bare run such as `##` is an empty heading.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let rest = line.trim_start_matches(Self::MARKER);
        let hashes = line.len() - rest.len();
        if hashes == 0 {
            return None;
        }
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let level = hashes.min(usize::from(Self::MAX_LEVEL)) as u8;
        Some((level, rest.trim()))
    }
}
