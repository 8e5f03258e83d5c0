use super::{
    cursor::Cursor,
    kinds::{DELIMITERS, Link},
    types::TextSpan,
};

/// Splits one line of text into an ordered sequence of [`TextSpan`]s.
///
/// Scans left to right; at each position the delimiters of
/// [`DELIMITERS`](super::kinds::DELIMITERS) are tried in table order, then
/// links. The first construct that closes on the same line wins. Text between
/// constructs becomes plain spans.
///
/// Never fails: a delimiter without a closer stays literal text.
pub fn tokenize(line: &str) -> Vec<TextSpan> {
    let mut cur = Cursor::new(line);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<TextSpan>, text: &str) {
        if !text.is_empty() {
            out.push(TextSpan::plain(text));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        if let Some(span) = try_parse_delimited(&mut cur).or_else(|| try_parse_link(&mut cur)) {
            flush_text(&mut out, &line[text_start..start]);
            out.push(span);
            text_start = cur.pos();
            continue;
        }
        cur.bump_char();
    }

    flush_text(&mut out, &line[text_start..]);
    out
}

/// Attempts each symmetric delimiter at the current position.
fn try_parse_delimited(cur: &mut Cursor<'_>) -> Option<TextSpan> {
    DELIMITERS.iter().find_map(|d| {
        cur.enclosed(d.marker, d.marker)
            .map(|inner| TextSpan::styled(inner, d.annotations))
    })
}

/// Attempts to parse `[text](url)` at the current position.
///
/// The display text runs to the first `](` and the target to the first `)`
/// after it. An empty target is not a link.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<TextSpan> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }

    let text_start = cur.pos() + 1;
    let middle = cur.find_on_line(text_start, Link::MIDDLE)?;
    let url_start = middle + Link::MIDDLE.len();
    let url_end = cur.find_on_line(url_start, Link::CLOSE)?;
    if url_end == url_start {
        return None;
    }

    let text = &cur.s[text_start..middle];
    let url = &cur.s[url_start..url_end];
    cur.seek(url_end + Link::CLOSE.len());
    Some(TextSpan::link(text, url))
}
