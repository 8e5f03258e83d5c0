/// Which character a fence is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// A line that looks like a fence marker, with its info string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig<'a> {
    pub kind: FenceKind,
    /// Text after the marker run, trimmed (e.g. `python`).
    pub info: &'a str,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Detects a fence marker at the start of the line.
    pub fn sig(line: &str) -> Option<FenceSig<'_>> {
        let t = line.trim_end();
        let (kind, ch) = if t.starts_with(Self::BACKTICKS) {
            (FenceKind::Backticks, '`')
        } else if t.starts_with(Self::TILDES) {
            (FenceKind::Tildes, '~')
        } else {
            return None;
        };
        Some(FenceSig {
            kind,
            info: t.trim_start_matches(ch).trim(),
        })
    }

    /// A fence only closes on a marker of its own kind.
    pub fn closes(kind: FenceKind, sig: FenceSig<'_>) -> bool {
        kind == sig.kind
    }

    /// Language tag for a fence: the lowercased info string, or `default`.
    pub fn language(info: &str, default: &str) -> String {
        if info.is_empty() {
            default.to_string()
        } else {
            info.to_lowercase()
        }
    }
}
