//! Lexer for field expressions using nom
//!
//! Splits expression text into numbers, words, operators, parentheses and
//! carets. Words are not classified here; the parser decides whether a
//! word is a function, an axis or both (`sinx`).

use crate::ast::Operator;
use crate::error::{ExprError, ExprResult};
use nom::{
    branch::alt,
    character::complete::{alpha1, char, digit1, multispace0},
    combinator::{map, opt, recognize, value},
    sequence::{pair, preceded},
    IResult,
};

/// Kind of a lexeme
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LexemeKind<'a> {
    /// Unsigned decimal literal, `12` or `3.5`
    Number(&'a str),
    /// Run of ASCII letters
    Word(&'a str),
    Operator(Operator),
    OpenParen,
    CloseParen,
    Caret,
}

/// A lexeme and its byte offset in the source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lexeme<'a> {
    pub kind: LexemeKind<'a>,
    pub offset: usize,
}

/// Split `source` into lexemes, skipping whitespace
pub fn lex(source: &str) -> ExprResult<Vec<Lexeme<'_>>> {
    let mut lexemes = Vec::new();
    let mut input = source;

    loop {
        let trimmed = input.trim_start();
        if trimmed.is_empty() {
            break;
        }
        let offset = source.len() - trimmed.len();

        match preceded(multispace0, lexeme)(input) {
            Ok((rest, kind)) => {
                lexemes.push(Lexeme { kind, offset });
                input = rest;
            }
            Err(_) => {
                return Err(ExprError::unsupported(
                    source,
                    offset,
                    "unexpected character",
                ))
            }
        }
    }

    Ok(lexemes)
}

/// Parse a single lexeme
fn lexeme(input: &str) -> IResult<&str, LexemeKind<'_>> {
    alt((
        map(number, LexemeKind::Number),
        map(alpha1, LexemeKind::Word),
        map(operator, LexemeKind::Operator),
        value(LexemeKind::OpenParen, char('(')),
        value(LexemeKind::CloseParen, char(')')),
        value(LexemeKind::Caret, char('^')),
    ))(input)
}

/// Parse an unsigned decimal literal
fn number(input: &str) -> IResult<&str, &str> {
    recognize(pair(digit1, opt(pair(char('.'), digit1))))(input)
}

/// Parse an arithmetic operator
fn operator(input: &str) -> IResult<&str, Operator> {
    alt((
        value(Operator::Add, char('+')),
        value(Operator::Sub, char('-')),
        value(Operator::Mul, char('*')),
        value(Operator::Div, char('/')),
    ))(input)
}
