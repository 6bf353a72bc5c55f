//! Term descriptors produced by the tokenizer
//!
//! An expression is a flat list of [`TermDescriptor`]s. Each descriptor is
//! one factor of the shape
//!
//! ```text
//! [op][funcCoeff][funcName]( [coordCoeff][axisName][^coordExp] )[^funcExp]
//! ```
//!
//! A descriptor led by `+`, `-` or nothing opens a new additive [`Term`];
//! descriptors led by `*` or `/` continue the current one. Text fields
//! borrow from the source expression and are empty when the piece is absent.

use crate::functions::Function;
use serde::{Deserialize, Serialize};

/// Operator written in front of a factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Character representation
    pub fn as_char(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// `+` and `-` separate additive terms
    pub fn is_additive(self) -> bool {
        matches!(self, Operator::Add | Operator::Sub)
    }
}

/// Sign of an additive term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Sign {
    #[default]
    Plus,
    Minus,
}

impl Sign {
    /// Apply the sign to a term value
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Sign::Plus => value,
            Sign::Minus => -value,
        }
    }
}

/// One tokenized factor of an expression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermDescriptor<'a> {
    /// Leading operator, `None` only for the first factor of an expression
    pub op: Option<Operator>,
    /// Coefficient in front of the function name
    pub func_coeff: &'a str,
    /// Function wrapping the coordinate factor
    pub function: Option<Function>,
    /// Coefficient in front of the axis name
    pub coord_coeff: &'a str,
    /// Axis name
    pub axis: &'a str,
    /// Exponent applied to the axis value
    pub coord_exp: &'a str,
    /// Exponent applied after the function
    pub func_exp: &'a str,
    /// Byte offset of the factor in the source expression
    pub offset: usize,
}

impl<'a> TermDescriptor<'a> {
    /// A descriptor with no operator and every piece absent
    pub fn empty(offset: usize) -> Self {
        Self {
            op: None,
            func_coeff: "",
            function: None,
            coord_coeff: "",
            axis: "",
            coord_exp: "",
            func_exp: "",
            offset,
        }
    }

    /// Whether this factor starts a new additive term
    pub fn starts_term(&self) -> bool {
        self.op.map_or(true, Operator::is_additive)
    }

    /// Whether any piece besides the operator is present
    pub fn has_body(&self) -> bool {
        !(self.func_coeff.is_empty()
            && self.function.is_none()
            && self.coord_coeff.is_empty()
            && self.axis.is_empty()
            && self.coord_exp.is_empty()
            && self.func_exp.is_empty())
    }
}

/// An additive term: a sign plus a `*`/`/` chain of factors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Term<'a> {
    pub sign: Sign,
    pub factors: Vec<TermDescriptor<'a>>,
}

impl<'a> Term<'a> {
    /// Byte offset of the term's first factor
    pub fn offset(&self) -> usize {
        self.factors.first().map_or(0, |factor| factor.offset)
    }
}
