//! Lexer for infix input: numbers and operation symbols.
//!
//! A symbol is any run of characters that is neither whitespace nor the start
//! of a number, so operations registered later (e.g. `^`, `**`, `mod`) lex
//! without changes here. A leading sign belongs to the number only where an
//! operand is expected: `2 - -3` and `2--3` are both `2`, `-`, `-3`, and
//! `2^-1` is `2`, `^`, `-1`.

use std::str::FromStr;

pub type Spanned<Tok, Loc, Error> = Result<(Loc, Tok, Loc), Error>;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Symbol(String),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexicalError {
    #[error("invalid number: {0}")]
    InvalidNumber(String),
}

pub struct Lexer<'input> {
    input: &'input str,
    pos: usize,
    expect_operand: bool,
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        Lexer {
            input,
            pos: 0,
            expect_operand: true,
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        let skipped: usize = rest
            .chars()
            .take_while(|c| c.is_whitespace())
            .map(char::len_utf8)
            .sum();
        self.pos += skipped;
    }

    fn take_num(&mut self) -> Option<Result<f64, LexicalError>> {
        let rest = &self.input[self.pos..];
        let bytes = rest.as_bytes();
        let n = bytes.len();
        let mut end = 0;
        if self.expect_operand && end < n && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        // [0-9]+\.?[0-9]* or \.[0-9]+
        if end < n && bytes[end].is_ascii_digit() {
            while end < n && bytes[end].is_ascii_digit() {
                end += 1;
            }
            if end < n && bytes[end] == b'.' {
                end += 1;
                while end < n && bytes[end].is_ascii_digit() {
                    end += 1;
                }
            }
        } else if end + 1 < n && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
            end += 1;
            while end < n && bytes[end].is_ascii_digit() {
                end += 1;
            }
        } else {
            return None;
        }
        // Optional exponent
        if end < n && (bytes[end] == b'e' || bytes[end] == b'E') {
            let exp_start = end;
            end += 1;
            if end < n && (bytes[end] == b'+' || bytes[end] == b'-') {
                end += 1;
            }
            if end < n && bytes[end].is_ascii_digit() {
                while end < n && bytes[end].is_ascii_digit() {
                    end += 1;
                }
            } else {
                end = exp_start; // no exponent, rewind
            }
        }
        let s = &rest[..end];
        self.pos += end;
        Some(f64::from_str(s).map_err(|_| LexicalError::InvalidNumber(s.to_string())))
    }

    fn take_symbol(&mut self) -> String {
        let rest = &self.input[self.pos..];
        let mut end = 0;
        for (i, c) in rest.char_indices() {
            // The first character is always part of the symbol, even a sign.
            if c.is_whitespace()
                || starts_unsigned_number(&rest[i..])
                || (i > 0 && starts_signed_number(&rest[i..]))
            {
                break;
            }
            end = i + c.len_utf8();
        }
        self.pos += end;
        rest[..end].to_string()
    }
}

fn starts_unsigned_number(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('.') => chars.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}

fn starts_signed_number(s: &str) -> bool {
    s.strip_prefix(['+', '-']).is_some_and(starts_unsigned_number)
}

/// Whether `s` lexes back as exactly one symbol token after a number, e.g. in `1 <s> 2`.
///
/// Rejects empty strings, whitespace, and anything a number could start at
/// (a digit, or `.` followed by a digit), wherever it occurs.
pub fn is_symbol_token(s: &str) -> bool {
    !s.is_empty()
        && !s.chars().any(char::is_whitespace)
        && !s.char_indices().any(|(i, _)| starts_unsigned_number(&s[i..]))
}

impl<'input> Iterator for Lexer<'input> {
    type Item = Spanned<Tok, usize, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        if self.pos >= self.input.len() {
            return None;
        }
        let start = self.pos;
        let tok = match self.take_num() {
            Some(Ok(n)) => {
                self.expect_operand = false;
                Tok::Num(n)
            }
            Some(Err(e)) => return Some(Err(e)),
            None => {
                self.expect_operand = true;
                Tok::Symbol(self.take_symbol())
            }
        };
        Some(Ok((start, tok, self.pos)))
    }
}
