//! Cursor over XTR text.
//!
//! The format mixes whitespace-separated integers with line-oriented
//! terminators, so the cursor offers both: integer reads skip any whitespace
//! including newlines, while [`XtrReader::expect_dot`] consumes whole lines.

use crate::error::{TraceError, TraceResult};

pub struct XtrReader<'a> {
    src: &'a str,
    pos: usize,
    /// Line of `pos` (1-indexed).
    line: usize,
}

impl<'a> XtrReader<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    pub fn bump(&mut self) -> Option<u8> {
        let c = self.peek()?;
        self.pos += 1;
        if c == b'\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Skip space characters only; newlines are significant.
    pub fn skip_spaces(&mut self) {
        while self.peek() == Some(b' ') {
            self.bump();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.bump();
        }
    }

    /// Read a signed integer after any whitespace. On failure only the
    /// whitespace is consumed.
    pub fn read_int(&mut self) -> Option<i32> {
        self.skip_whitespace();
        let rest = &self.src.as_bytes()[self.pos..];
        let sign = usize::from(matches!(rest.first(), Some(b'+' | b'-')));
        let digits = rest[sign..].iter().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            return None;
        }
        let end = self.pos + sign + digits;
        let value = self.src[self.pos..end].parse().ok()?;
        self.pos = end;
        Some(value)
    }

    /// Whether the cursor sits on a line end (`\n` or `\r\n`).
    pub fn at_line_end(&self) -> bool {
        match self.peek() {
            Some(b'\n') => true,
            Some(b'\r') => self.src.as_bytes().get(self.pos + 1) == Some(&b'\n'),
            _ => false,
        }
    }

    /// Read up to and including the next newline. `None` at end of input.
    pub fn read_line(&mut self) -> Option<&'a str> {
        if self.is_eof() {
            return None;
        }
        let rest = &self.src[self.pos..];
        let len = rest.find('\n').unwrap_or(rest.len());
        let line = &rest[..len];
        self.pos += len;
        self.bump();
        Some(line)
    }

    /// Consume a line consisting of a single dot, allowing one
    /// whitespace-only line before it.
    pub fn expect_dot(&mut self) -> TraceResult<()> {
        let mut start = self.line;
        let mut line = self.read_line();
        if line.is_some_and(|l| l.trim().is_empty()) {
            start = self.line;
            line = self.read_line();
        }
        match line {
            None => Err(TraceError::DotAtEof { line: self.line }),
            Some(l) if l.strip_suffix('\r').unwrap_or(l) == "." => Ok(()),
            Some(l) => Err(TraceError::ExpectedDot {
                found: l.to_string(),
                line: start,
            }),
        }
    }
}

/// Convert a read index to `usize`, rejecting negative values.
pub(crate) fn non_negative(what: &'static str, index: i32, line: usize) -> TraceResult<usize> {
    usize::try_from(index).map_err(|_| TraceError::NegativeIndex { what, index, line })
}

/// Reject `index >= len`.
pub(crate) fn in_range(what: &'static str, index: usize, len: usize, line: usize) -> TraceResult<usize> {
    if index < len {
        Ok(index)
    } else {
        Err(TraceError::OutOfRange {
            what,
            index,
            len,
            line,
        })
    }
}
