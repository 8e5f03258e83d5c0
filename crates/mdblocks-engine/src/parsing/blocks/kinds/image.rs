use std::sync::OnceLock;

use regex::Regex;

/// Standalone image line `![alt](url)`.
pub struct Image;

impl Image {
    pub const PREFIX: &'static str = "![";

    /// Parses an image line into `(alt, url)`.
    ///
    /// The image must start the trimmed line; anything after the closing
    /// parenthesis is ignored.
    pub fn parse(line: &str) -> Option<(&str, &str)> {
        let t = line.trim();
        if !t.starts_with(Self::PREFIX) {
            return None;
        }
        let caps = image_regex().captures(t)?;
        let alt = caps.get(1).map_or("", |m| m.as_str());
        let url = caps.get(2).map_or("", |m| m.as_str());
        Some((alt, url))
    }
}

fn image_regex() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX.get_or_init(|| Regex::new(r"^!\[(.*?)\]\((.*?)\)").expect("Invalid image regex"))
}
