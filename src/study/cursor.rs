//! Line cursor for fixed-stride parsing.

/// Walks the lines of a text in fixed-size windows.
///
/// Lines are split on `\n` only, so blank separator lines and a trailing empty
/// line are preserved as positions. A trailing `\r` is dropped from each line.
pub(crate) struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        Self { lines, pos: 0 }
    }

    /// Take the next window of up to `stride` lines and advance by `stride`.
    ///
    /// The final window may be shorter than `stride`; `None` once every line
    /// has been consumed.
    pub(crate) fn next_window(&mut self, stride: usize) -> Option<&[&'a str]> {
        if stride == 0 || self.pos >= self.lines.len() {
            return None;
        }
        let start = self.pos;
        let end = (start + stride).min(self.lines.len());
        self.pos = start + stride;
        Some(&self.lines[start..end])
    }
}

/// Text after the first `delimiter`, or the whole line if it has none.
pub(crate) fn after_delimiter<'a>(line: &'a str, delimiter: &str) -> &'a str {
    line.split_once(delimiter).map_or(line, |(_, rest)| rest)
}
