/// A cursor for scanning a single line of inline text.
///
/// Delimiters are all ASCII, so every position the scanner stops at on a
/// successful match is a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.s.as_bytes()[self.i.min(self.s.len())..].starts_with(pat.as_bytes())
    }

    /// Advances past the current char (which may be several bytes).
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.s[self.i..].chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Moves to an absolute byte position.
    pub fn seek(&mut self, i: usize) {
        self.i = i;
    }

    /// Finds the next occurrence of `pat` at or after byte `from`, without
    /// crossing a line break. Returns the absolute byte offset.
    pub fn find_on_line(&self, from: usize, pat: &str) -> Option<usize> {
        let rest = self.s.get(from..)?;
        let line = match rest.find('\n') {
            Some(n) => &rest[..n],
            None => rest,
        };
        line.find(pat).map(|p| from + p)
    }

    /// Consumes `open ... close` starting at the cursor and returns the inner
    /// text. The inner text must be non-empty and on the same line.
    ///
    /// On failure the cursor is left untouched.
    pub fn enclosed(&mut self, open: &str, close: &str) -> Option<&'a str> {
        if !self.starts_with(open) {
            return None;
        }
        let inner_start = self.i + open.len();
        let inner_end = self.find_on_line(inner_start, close)?;
        if inner_end == inner_start {
            return None;
        }
        self.i = inner_end + close.len();
        Some(&self.s[inner_start..inner_end])
    }
}
