//! Term tokenizer
//!
//! Grammar, per factor:
//! ```text
//! factor    := [op] body
//! body      := [number] function ['('] coord | ['('] coord
//! coord     := [number] [axis] ['^' number] [')'] ['^' number]
//! op        := '+' | '-' | '*' | '/'
//! function  := 'sin' | 'cos' | 'exp' | 'sqrt' | 'tan'
//! axis      := 'x' | 'y' | 'z' | 'r' | 'phi' | 'theta'
//! ```
//!
//! Parentheses are optional punctuation around the coordinate factor, not
//! grouping: `sqrt(1-theta^2)` reads as the two factors `sqrt(1` and
//! `-theta^2)`. A function name may be glued to its axis (`sinx`). When a
//! factor has no axis, a caret after the number is the post-exponent, so
//! `7^3` is 343.

use crate::ast::{Operator, Sign, Term, TermDescriptor};
use crate::coords::AXIS_NAMES;
use crate::error::{ExprError, ExprResult};
use crate::functions::Function;
use crate::lexer::{lex, Lexeme, LexemeKind};

/// Tokenize an expression into factor descriptors.
///
/// Empty or whitespace-only text yields no descriptors.
pub fn tokenize(expression: &str) -> ExprResult<Vec<TermDescriptor<'_>>> {
    let lexemes = lex(expression)?;
    let mut parser = TermParser::new(expression, &lexemes);
    let mut descriptors = Vec::new();

    while !parser.at_end() {
        descriptors.push(parser.descriptor()?);
    }

    Ok(descriptors)
}

/// Group an expression's descriptors into signed additive terms
pub fn split_terms(expression: &str) -> ExprResult<Vec<Term<'_>>> {
    let mut terms: Vec<Term<'_>> = Vec::new();

    for descriptor in tokenize(expression)? {
        match terms.last_mut() {
            Some(term) if !descriptor.starts_term() => term.factors.push(descriptor),
            _ => {
                let sign = match descriptor.op {
                    Some(Operator::Sub) => Sign::Minus,
                    _ => Sign::Plus,
                };
                terms.push(Term {
                    sign,
                    factors: vec![descriptor],
                });
            }
        }
    }

    Ok(terms)
}

/// Axis names an expression references, in order of first appearance
pub fn referenced_axes(expression: &str) -> ExprResult<Vec<&str>> {
    let mut axes: Vec<&str> = Vec::new();
    for descriptor in tokenize(expression)? {
        if !descriptor.axis.is_empty() && !axes.contains(&descriptor.axis) {
            axes.push(descriptor.axis);
        }
    }
    Ok(axes)
}

/// What a word lexeme stands for
#[derive(Debug, Clone, Copy, PartialEq)]
enum Word<'a> {
    Function(Function),
    Axis(&'a str),
    FunctionOf(Function, &'a str),
}

impl<'a> Word<'a> {
    fn classify(word: &'a str) -> Option<Self> {
        if AXIS_NAMES.contains(&word) {
            return Some(Word::Axis(word));
        }
        if let Ok(function) = word.parse::<Function>() {
            return Some(Word::Function(function));
        }
        Function::ALL.into_iter().find_map(|function| {
            word.strip_prefix(function.name())
                .filter(|rest| AXIS_NAMES.contains(rest))
                .map(|axis| Word::FunctionOf(function, axis))
        })
    }

    fn function(self) -> Option<Function> {
        match self {
            Word::Function(function) | Word::FunctionOf(function, _) => Some(function),
            Word::Axis(_) => None,
        }
    }
}

/// Cursor over a lexeme slice
struct TermParser<'s, 'a> {
    source: &'a str,
    lexemes: &'s [Lexeme<'a>],
    pos: usize,
}

impl<'s, 'a> TermParser<'s, 'a> {
    fn new(source: &'a str, lexemes: &'s [Lexeme<'a>]) -> Self {
        Self {
            source,
            lexemes,
            pos: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.lexemes.len()
    }

    fn peek(&self) -> Option<LexemeKind<'a>> {
        self.lexemes.get(self.pos).map(|lexeme| lexeme.kind)
    }

    fn peek_at(&self, ahead: usize) -> Option<LexemeKind<'a>> {
        self.lexemes.get(self.pos + ahead).map(|lexeme| lexeme.kind)
    }

    fn offset(&self) -> usize {
        self.lexemes
            .get(self.pos)
            .map_or(self.source.len(), |lexeme| lexeme.offset)
    }

    fn error(&self, reason: &str) -> ExprError {
        ExprError::unsupported(self.source, self.offset(), reason)
    }

    fn eat_operator(&mut self) -> Option<Operator> {
        match self.peek() {
            Some(LexemeKind::Operator(op)) => {
                self.pos += 1;
                Some(op)
            }
            _ => None,
        }
    }

    fn eat_number(&mut self) -> Option<&'a str> {
        match self.peek() {
            Some(LexemeKind::Number(text)) => {
                self.pos += 1;
                Some(text)
            }
            _ => None,
        }
    }

    fn eat(&mut self, kind: LexemeKind<'a>) -> bool {
        if self.peek() == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Classify the word at `ahead`, if it is one
    fn word_at(&self, ahead: usize) -> ExprResult<Option<Word<'a>>> {
        let Some(LexemeKind::Word(text)) = self.peek_at(ahead) else {
            return Ok(None);
        };
        match Word::classify(text) {
            Some(word) => Ok(Some(word)),
            None if self.peek_at(ahead + 1) == Some(LexemeKind::OpenParen) => {
                Err(ExprError::UnknownFunction {
                    name: text.to_string(),
                    offset: self.lexemes[self.pos + ahead].offset,
                })
            }
            None => Err(ExprError::unsupported(
                self.source,
                self.lexemes[self.pos + ahead].offset,
                format!("unknown identifier '{text}'"),
            )),
        }
    }

    /// `'^' number`, or nothing
    fn exponent(&mut self) -> ExprResult<&'a str> {
        if !self.eat(LexemeKind::Caret) {
            return Ok("");
        }
        self.eat_number()
            .ok_or_else(|| self.error("expected a number after '^'"))
    }

    /// Parse one factor
    fn descriptor(&mut self) -> ExprResult<TermDescriptor<'a>> {
        let mut descriptor = TermDescriptor::empty(self.offset());
        descriptor.op = self.eat_operator();

        // [number] function
        let leading_number = matches!(self.peek(), Some(LexemeKind::Number(_)));
        let word_ahead = if leading_number { 1 } else { 0 };
        if let Some(word) = self.word_at(word_ahead)? {
            if let Some(function) = word.function() {
                if let Some(text) = self.eat_number() {
                    descriptor.func_coeff = text;
                }
                self.pos += 1;
                descriptor.function = Some(function);
                if let Word::FunctionOf(_, axis) = word {
                    descriptor.axis = axis;
                }
            }
        }

        let open = self.eat(LexemeKind::OpenParen);

        if descriptor.axis.is_empty() {
            if let Some(text) = self.eat_number() {
                descriptor.coord_coeff = text;
            }
            match self.word_at(0)? {
                Some(Word::Axis(axis)) => {
                    self.pos += 1;
                    descriptor.axis = axis;
                }
                Some(_) => return Err(self.error("a function cannot wrap another function")),
                None => {}
            }
        }

        if open && descriptor.coord_coeff.is_empty() && descriptor.axis.is_empty() {
            if self.peek() == Some(LexemeKind::OpenParen) {
                return Err(self.error("nested parentheses are not supported"));
            }
            return Err(self.error("empty parentheses"));
        }

        let exponent = self.exponent()?;
        let close = self.eat(LexemeKind::CloseParen);
        let post_exponent = self.exponent()?;

        if descriptor.axis.is_empty() && !exponent.is_empty() {
            if !post_exponent.is_empty() {
                return Err(self.error("exponent applies to no coordinate"));
            }
            descriptor.func_exp = exponent;
        } else {
            descriptor.coord_exp = exponent;
            descriptor.func_exp = post_exponent;
        }

        if !descriptor.has_body() {
            if open || close {
                return Err(self.error("empty parentheses"));
            }
            return Err(self.error("empty term"));
        }

        match self.peek() {
            None | Some(LexemeKind::Operator(_)) => Ok(descriptor),
            Some(LexemeKind::OpenParen)
                if descriptor.function.is_none() && descriptor.axis.is_empty() =>
            {
                Err(self.error("coefficient before '(' needs a function name"))
            }
            Some(_) => Err(self.error("expected an operator between factors")),
        }
    }
}
