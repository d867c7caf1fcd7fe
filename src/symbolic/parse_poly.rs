//! a module turns a String in the polynomial notation into a canonical `Poly`
//!
//! # Grammar
//! ```text
//! poly      := constant | monomial ( '+' monomial )*
//! monomial  := '(' poly ',' exponent ')'
//! constant  := [ '-' ] digits
//! exponent  := digits
//! ```
//! No whitespace is allowed, `digits` has no leading zeros (except `0` itself), coefficients
//! span the whole `i64` range and exponents `0..=i32::MAX`.
//!
//! # Example
//! ```
//! use RustedPoly::symbolic::parse_poly::parse_polynomial;
//! let p = parse_polynomial("(1,0)+((2,1),2)", 0).unwrap();
//! assert_eq!(p.to_string(), "(1,0)+((2,1),2)");
//! assert_eq!(p.deg(), 3);
//! ```
//                  search recursion diagram
//                "(1,0)+((2,1)+(3,0),2)"           |
//                |   split by '+' outside brackets |
//                |_________________________________|
//                |    (1,0)    | ((2,1)+(3,0),2)   |
//                |      |      |         |         |
//                |_____\|/_____|________\|/________|
//                | comma at depth 0 | comma at depth 0
//                |  1   |   0  | (2,1)+(3,0) | 2   |
//                |__Ok__|__Ok__|______|______|_Ok__|
//                |             | split by '+'      |
//                |             |  (2,1)  | (3,0)   |
//                  etc...

use crate::symbolic::poly_engine::{Mono, Poly, PolyCoeff, PolyExp};
use crate::symbolic::utils::{
    find_char_positions_outside_brackets, find_pair_to_this_bracket, split_outside_brackets,
};
use log::debug;
use std::fmt;
use std::str::FromStr;

/// Default limit of nested monomial levels accepted by the parser.
pub const DEFAULT_MAX_DEPTH: usize = 512;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// malformed notation: brackets, separators, empty fields, stray characters
    Syntax(String),
    /// a well-formed numeric literal outside the representable range
    Range(String),
    /// the polynomial nests more levels than the parser accepts
    NestingTooDeep(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn is_syntax(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Syntax(_))
    }

    pub fn is_range(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Range(_))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Syntax(msg) => write!(f, "line {}: syntax error: {}", self.line, msg),
            ParseErrorKind::Range(msg) => write!(f, "line {}: out of range: {}", self.line, msg),
            ParseErrorKind::NestingTooDeep(limit) => write!(
                f,
                "line {}: polynomial nests deeper than {} levels",
                self.line, limit
            ),
        }
    }
}

impl std::error::Error for ParseError {}

fn syntax(msg: impl Into<String>) -> ParseErrorKind {
    ParseErrorKind::Syntax(msg.into())
}

/// Recursive-descent reader of the polynomial notation.
#[derive(Debug, Clone, Copy)]
pub struct PolyParser {
    max_depth: usize,
}

impl Default for PolyParser {
    fn default() -> Self {
        PolyParser::new(DEFAULT_MAX_DEPTH)
    }
}

impl PolyParser {
    pub fn new(max_depth: usize) -> Self {
        PolyParser { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parses one line of text. `line` is only used to tag errors.
    pub fn parse(&self, text: &str, line: usize) -> Result<Poly, ParseError> {
        let res = self.parse_poly(text, 0);
        match &res {
            Ok(p) => debug!("line {}: parsed polynomial of depth {}", line, p.depth()),
            Err(kind) => debug!("line {}: rejected '{}': {:?}", line, text, kind),
        }
        res.map_err(|kind| ParseError { line, kind })
    }

    fn parse_poly(&self, text: &str, depth: usize) -> Result<Poly, ParseErrorKind> {
        if text.starts_with('(') {
            self.parse_sum(text, depth)
        } else {
            parse_coeff(text).map(Poly::Coeff)
        }
    }

    /// phase 1: top-level monomial boundaries are the '+' signs outside brackets
    fn parse_sum(&self, text: &str, depth: usize) -> Result<Poly, ParseErrorKind> {
        if depth >= self.max_depth {
            return Err(ParseErrorKind::NestingTooDeep(self.max_depth));
        }
        let pieces = split_outside_brackets(text, '+')
            .ok_or_else(|| syntax("unbalanced parentheses"))?;
        // monomials parsed before a failure are dropped together with the vector
        let monos = pieces
            .into_iter()
            .map(|piece| self.parse_mono(piece, depth))
            .collect::<Result<Vec<Mono>, ParseErrorKind>>()?;
        Ok(Poly::from_monos(monos))
    }

    /// phase 2: `(poly,exp)` is split at the comma outside the inner brackets
    fn parse_mono(&self, piece: &str, depth: usize) -> Result<Mono, ParseErrorKind> {
        if piece.is_empty() {
            return Err(syntax("empty monomial"));
        }
        if !piece.starts_with('(') {
            return Err(syntax(format!("monomial '{}' must start with '('", piece)));
        }
        let close = find_pair_to_this_bracket(piece, 0)
            .ok_or_else(|| syntax("unbalanced parentheses"))?;
        if close != piece.len() - 1 {
            return Err(syntax(format!(
                "unexpected '{}' after monomial",
                &piece[close + 1..]
            )));
        }
        let inner = &piece[1..close];
        let comma = match find_char_positions_outside_brackets(inner, ',').as_slice() {
            [comma] => *comma,
            [] => return Err(syntax(format!("missing ',' in monomial '{}'", piece))),
            _ => return Err(syntax(format!("too many ',' in monomial '{}'", piece))),
        };
        let p = self.parse_poly(&inner[..comma], depth + 1)?;
        let exp = parse_exp(&inner[comma + 1..])?;
        Ok(Mono::new(p, exp))
    }
}

/// Non-empty ASCII digits without a leading zero, unless the literal is `0`.
fn check_digits(digits: &str, what: &str) -> Result<(), ParseErrorKind> {
    if digits.is_empty() {
        return Err(syntax(format!("empty {}", what)));
    }
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_digit()) {
        return Err(syntax(format!("unexpected '{}' in {}", c, what)));
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(syntax(format!("leading zero in {} '{}'", what, digits)));
    }
    Ok(())
}

/// Coefficient literal: optional '-' then digits, inside the `i64` range.
pub fn parse_coeff(text: &str) -> Result<PolyCoeff, ParseErrorKind> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    check_digits(digits, "coefficient")?;
    text.parse::<PolyCoeff>()
        .map_err(|_| ParseErrorKind::Range(format!("coefficient {}", text)))
}

/// Exponent literal: digits inside `0..=i32::MAX`.
pub fn parse_exp(text: &str) -> Result<PolyExp, ParseErrorKind> {
    check_digits(text, "exponent")?;
    // digits only, so the only possible failure is overflow
    text.parse::<i32>()
        .map(|e| e as PolyExp)
        .map_err(|_| ParseErrorKind::Range(format!("exponent {}", text)))
}

/// Parses a line of text into a canonical polynomial with the default nesting limit.
pub fn parse_polynomial(text: &str, line_number: usize) -> Result<Poly, ParseError> {
    PolyParser::default().parse(text, line_number)
}

impl FromStr for Poly {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_polynomial(s, 0)
    }
}
