//! Field scanner for colon-separated intermediate-format lines.
//!
//! Mirrors `scanf` conversions: integers and words skip leading whitespace,
//! literals must match exactly, and trailing input is left unread.

pub(crate) struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    /// Unconsumed input.
    pub(crate) fn rest(&self) -> &'a str {
        self.rest
    }

    /// A signed decimal integer that fits in `i32`.
    pub(crate) fn int(&mut self) -> Option<i32> {
        let s = self.rest.trim_start();
        let bytes = s.as_bytes();
        let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
        let digits = bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            return None;
        }
        let end = sign + digits;
        let value = s[..end].parse().ok()?;
        self.rest = &s[end..];
        Some(value)
    }

    /// An exact literal.
    pub(crate) fn literal(&mut self, lit: &str) -> Option<()> {
        self.rest = self.rest.strip_prefix(lit)?;
        Some(())
    }

    /// A non-empty run of non-whitespace characters.
    pub(crate) fn word(&mut self) -> Option<&'a str> {
        let s = self.rest.trim_start();
        let end = s.find(char::is_whitespace).unwrap_or(s.len());
        if end == 0 {
            return None;
        }
        self.rest = &s[end..];
        Some(&s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_fields() {
        let mut s = Scanner::new("12:clock:-3:t(0) trailing");
        assert_eq!(s.int(), Some(12));
        assert_eq!(s.literal(":clock:"), Some(()));
        assert_eq!(s.int(), Some(-3));
        assert_eq!(s.literal(":"), Some(()));
        assert_eq!(s.word(), Some("t(0)"));
        assert_eq!(s.rest(), " trailing");
    }

    #[test]
    fn test_scan_int_skips_whitespace() {
        let mut s = Scanner::new("  7 -8\t+9");
        assert_eq!(s.int(), Some(7));
        assert_eq!(s.int(), Some(-8));
        assert_eq!(s.int(), Some(9));
        assert_eq!(s.int(), None);
    }

    #[test]
    fn test_scan_rejects() {
        assert_eq!(Scanner::new("-").int(), None);
        assert_eq!(Scanner::new("x1").int(), None);
        assert_eq!(Scanner::new("99999999999").int(), None);
        assert_eq!(Scanner::new("   ").word(), None);
        assert_eq!(Scanner::new("abc").literal("abd"), None);
    }
}
