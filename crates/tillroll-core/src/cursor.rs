//! Byte-position cursor over a borrowed input string.
//!
//! Every decoder in [`crate::decode`] advances a [`Cursor`]. On success the
//! cursor sits immediately after the consumed text; on failure it is left
//! wherever the failing primitive stopped, except where noted (single-step
//! primitives like [`literal`](Cursor::literal) never consume on failure).
//! Backtracking is explicit: callers [`mark`](Cursor::mark) before an optional
//! segment and [`reset`](Cursor::reset) on failure, which is a true
//! zero-side-effect rewind — no partially consumed field survives it.

use crate::error::DecodeError;

/// A cursor over `&str` input, tracking a byte offset.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte offset into the input.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// True when the whole input has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Save the current position for a later [`reset`](Cursor::reset).
    pub fn mark(&self) -> usize {
        self.pos
    }

    /// Rewind to a previously [`mark`](Cursor::mark)ed position.
    pub fn reset(&mut self, mark: usize) {
        debug_assert!(mark <= self.input.len());
        self.pos = mark;
    }

    fn fail(&self, expected: impl Into<String>) -> DecodeError {
        DecodeError::new(self.pos, expected)
    }

    /// Consume an exact literal, or fail without consuming anything.
    pub fn literal(&mut self, lit: &str) -> Result<(), DecodeError> {
        if self.rest().starts_with(lit) {
            self.pos += lit.len();
            Ok(())
        } else {
            Err(self.fail(format!("{lit:?}")))
        }
    }

    /// Consume exactly one occurrence of `c`, or fail without consuming.
    pub fn char_lit(&mut self, c: char) -> Result<(), DecodeError> {
        match self.rest().chars().next() {
            Some(got) if got == c => {
                self.pos += c.len_utf8();
                Ok(())
            }
            _ => Err(self.fail(format!("{c:?}"))),
        }
    }

    /// Consume exactly `n` ASCII digits and return their numeric value.
    ///
    /// Fails without consuming when fewer than `n` digits are present.
    pub fn fixed_number(&mut self, n: usize, what: &str) -> Result<u32, DecodeError> {
        let digits = self
            .rest()
            .get(..n)
            .filter(|run| run.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| self.fail(format!("{n} digits ({what})")))?;
        let value = digits
            .parse::<u32>()
            .map_err(|_| self.fail(format!("{n} digits ({what})")))?;
        self.pos += n;
        Ok(value)
    }

    /// Consume up to `max` leading ASCII digits, returning the digit slice.
    ///
    /// Fails without consuming when no digit is present.
    pub fn digit_run(&mut self, max: usize, what: &str) -> Result<&'a str, DecodeError> {
        let rest = self.rest();
        let len = rest
            .bytes()
            .take(max)
            .take_while(|b| b.is_ascii_digit())
            .count();
        if len == 0 {
            return Err(self.fail(what.to_string()));
        }
        self.pos += len;
        Ok(&rest[..len])
    }

    /// Skip a run of horizontal whitespace (spaces and tabs), zero or more.
    pub fn skip_hspace(&mut self) {
        let skipped = self
            .rest()
            .bytes()
            .take_while(|b| *b == b' ' || *b == b'\t')
            .count();
        self.pos += skipped;
    }

    /// Consume one line terminator (`\n` or `\r\n`). End of input counts as a
    /// terminator, so a final unterminated record still decodes.
    pub fn line_end(&mut self) -> Result<(), DecodeError> {
        if self.is_empty() || self.literal("\r\n").is_ok() || self.literal("\n").is_ok() {
            Ok(())
        } else {
            Err(self.fail("line terminator"))
        }
    }

    /// Ordered choice over literal alternatives: try each `(literal, value)`
    /// pair in table order, first match wins. Deterministic; fails without
    /// consuming when nothing matches.
    pub fn first_of<T: Copy>(&mut self, table: &[(&str, T)], what: &str) -> Result<T, DecodeError> {
        for (lit, value) in table {
            if self.literal(lit).is_ok() {
                return Ok(*value);
            }
        }
        Err(self.fail(what.to_string()))
    }
}
