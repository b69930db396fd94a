//! Lexical rules of path data.
//!
//! Whitespace and commas are both optional separators, so numbers may run
//! together: `10-5.5.5` is `10`, `-5.5`, `.5`. A comma is only allowed
//! between two numbers.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_while,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{all_consuming, map, map_res, opt, recognize},
    sequence::{pair, tuple},
};

use crate::error::GrammarError;

pub const COMMAND_LETTERS: &str = "MmLlHhVvCcSsQqTtAaZz";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind<'a> {
    Command(char),
    /// The source text is kept, arc flags are read from it.
    Number { text: &'a str, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    /// Byte offset into the path string.
    pub offset: usize,
    pub kind: TokenKind<'a>,
}

impl<'a> Token<'a> {
    /// Reads an arc flag (`0` or `1`) off the front of a number token.
    /// Flags need no separator, so `10` is the flag `1` followed by the
    /// number `0`; the remainder comes back as its own token.
    pub fn split_flag(&self) -> Result<(bool, Option<Token<'a>>), GrammarError> {
	let text = match self.kind {
	    TokenKind::Number { text, .. } => text,
	    TokenKind::Command(letter) =>
		return Err(GrammarError::new(self.offset, format!("expected a flag, found {:?}", letter))),
	};

	let flag = match text.chars().next() {
	    Some('0') => false,
	    Some('1') => true,
	    _ => return Err(GrammarError::new(self.offset, format!("expected a flag, found {:?}", text))),
	};

	let rest = &text[1..];
	if rest.is_empty() {
	    return Ok((flag, None));
	}

	match all_consuming(number)(rest) {
	    Ok((_, value)) => Ok((flag, Some(Token {
		offset: self.offset + 1,
		kind: TokenKind::Number { text: rest, value },
	    }))),
	    Err(_) => Err(GrammarError::new(self.offset + 1, format!("invalid number {:?} after flag", rest))),
	}
    }
}

/// Whitespace per the path data grammar: space, tab, LF, FF, CR.
pub fn is_wsp(c: char) -> bool {
    matches!(c, '\x20' | '\x09' | '\x0A' | '\x0C' | '\x0D')
}

pub(crate) fn wsp0(input: &str) -> IResult<&str, &str> {
    take_while(is_wsp)(input)
}

/// Optional comma with optional whitespace around it.
pub(crate) fn separator(input: &str) -> IResult<&str, ()> {
    map(tuple((wsp0, opt(char(',')), wsp0)), |_| ())(input)
}

fn command(input: &str) -> IResult<&str, char> {
    one_of(COMMAND_LETTERS)(input)
}

fn mantissa(input: &str) -> IResult<&str, &str> {
    alt((
	recognize(pair(digit1, opt(pair(char('.'), digit0)))),
	recognize(pair(char('.'), digit1)),
    ))(input)
}

fn exponent(input: &str) -> IResult<&str, &str> {
    recognize(tuple((one_of("eE"), opt(one_of("+-")), digit1)))(input)
}

fn number_text(input: &str) -> IResult<&str, &str> {
    recognize(tuple((opt(one_of("+-")), mantissa, opt(exponent))))(input)
}

pub(crate) fn number(input: &str) -> IResult<&str, f64> {
    map_res(number_text, |text: &str| text.parse::<f64>())(input)
}

/// Splits a whole path string into command letters and numbers.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, GrammarError> {
    let mut tokens: Vec<Token<'_>> = Vec::new();
    let mut pending_comma: Option<usize> = None;
    let mut rest = input.trim_start_matches(is_wsp);

    while !rest.is_empty() {
	let offset = input.len() - rest.len();

	if let Ok((tail, letter)) = command(rest) {
	    if let Some(at) = pending_comma {
		return Err(GrammarError::new(at, "comma before a command letter"));
	    }
	    tokens.push(Token { offset, kind: TokenKind::Command(letter) });
	    rest = tail;
	} else if let Some(tail) = rest.strip_prefix(',') {
	    let after_number = matches!(tokens.last(), Some(Token { kind: TokenKind::Number { .. }, .. }));
	    if pending_comma.is_some() || !after_number {
		return Err(GrammarError::new(offset, "unexpected comma"));
	    }
	    pending_comma = Some(offset);
	    rest = tail;
	} else if let Ok((tail, text)) = number_text(rest) {
	    let value = text.parse::<f64>()
		.map_err(|err| GrammarError::new(offset, format!("invalid number {:?}: {}", text, err)))?;
	    tokens.push(Token { offset, kind: TokenKind::Number { text, value } });
	    pending_comma = None;
	    rest = tail;
	} else {
	    let found = rest.chars().next().unwrap_or_default();
	    return Err(GrammarError::new(offset, format!("unexpected character {:?}", found)));
	}

	rest = rest.trim_start_matches(is_wsp);
    }

    if let Some(at) = pending_comma {
	return Err(GrammarError::new(at, "trailing comma"));
    }

    Ok(tokens)
}
