//! Parser: infix line → [Infix]. Accepts exactly `<number> <symbol> <number>`.

use crate::error::ParseError;
use crate::lexer::{Lexer, Tok};

/// A parsed `left symbol right` line.
#[derive(Clone, Debug, PartialEq)]
pub struct Infix {
    pub left: f64,
    pub symbol: String,
    pub right: f64,
}

/// Parse a single infix calculation. Whether the symbol is registered is checked later, by the registry.
pub fn parse(input: &str) -> Result<Infix, ParseError> {
    let toks = Lexer::new(input)
        .map(|r| r.map(|(_, tok, _)| tok))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ParseError::new(e.to_string()))?;

    match toks.as_slice() {
        [Tok::Num(left), Tok::Symbol(symbol), Tok::Num(right)] => Ok(Infix {
            left: *left,
            symbol: symbol.clone(),
            right: *right,
        }),
        [] => Err(ParseError::new("empty input")),
        [Tok::Symbol(s), ..] => Err(ParseError::new(format!(
            "expected a number, found '{s}'"
        ))),
        [Tok::Num(_)] => Err(ParseError::new("expected an operation symbol after the number")),
        [Tok::Num(_), Tok::Num(n), ..] => Err(ParseError::new(format!(
            "expected an operation symbol, found number {n}"
        ))),
        [Tok::Num(_), Tok::Symbol(s)] => Err(ParseError::new(format!(
            "expected a number after '{s}'"
        ))),
        [Tok::Num(_), Tok::Symbol(_), Tok::Symbol(s), ..] => Err(ParseError::new(format!(
            "expected a number, found '{s}'"
        ))),
        [_, _, _, rest @ ..] => Err(ParseError::new(format!(
            "unexpected trailing input ({} more token{})",
            rest.len(),
            if rest.len() == 1 { "" } else { "s" }
        ))),
    }
}
