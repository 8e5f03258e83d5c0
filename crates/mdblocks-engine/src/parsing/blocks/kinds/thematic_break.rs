/// Thematic break (`---`), emitted as a divider block.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [&'static str; 3] = ["---", "***", "___"];

    pub fn matches(line: &str) -> bool {
        Self::MARKERS.contains(&line.trim())
    }
}
