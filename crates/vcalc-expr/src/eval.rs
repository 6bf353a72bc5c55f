//! Expression evaluation
//!
//! Evaluates tokenized terms at a point of a coordinate system. All state
//! is local to a call: the running product of a term starts at `1` on every
//! call and nothing is cached between calls.

use crate::ast::{Operator, Term, TermDescriptor};
use crate::coords::{CoordinateSystem, Point};
use crate::error::ExprResult;
use crate::functions::coefficient;
use crate::parser::split_terms;

/// Evaluate a single factor.
///
/// `funcCoeff * f(coordCoeff * axis^coordExp)^funcExp`, with `f` the
/// identity when no function is present.
pub fn evaluate_factor(
    descriptor: &TermDescriptor<'_>,
    point: &Point,
    system: CoordinateSystem,
) -> ExprResult<f64> {
    let base = system.resolve(point, descriptor.axis)?;
    let coordinate =
        coefficient(descriptor.coord_coeff)? * base.powf(coefficient(descriptor.coord_exp)?);

    let wrapped = match descriptor.function {
        Some(function) => function.apply(coordinate),
        None => coordinate,
    };

    Ok(coefficient(descriptor.func_coeff)? * wrapped.powf(coefficient(descriptor.func_exp)?))
}

/// Fold the `*`/`/` chain of a term into one value.
///
/// The sign of the term is not applied. Division by a factor that
/// evaluates to zero yields an IEEE infinity or NaN.
pub fn evaluate_term(
    factors: &[TermDescriptor<'_>],
    point: &Point,
    system: CoordinateSystem,
) -> ExprResult<f64> {
    let mut product = 1.0;

    for factor in factors {
        let value = evaluate_factor(factor, point, system)?;
        match factor.op {
            Some(Operator::Mul) => product *= value,
            Some(Operator::Div) => product /= value,
            None | Some(Operator::Add) | Some(Operator::Sub) => product = value,
        }
    }

    Ok(product)
}

/// Sum already-split terms with their signs
pub fn evaluate_terms(
    terms: &[Term<'_>],
    point: &Point,
    system: CoordinateSystem,
) -> ExprResult<f64> {
    terms.iter().try_fold(0.0, |sum, term| {
        Ok(sum + term.sign.apply(evaluate_term(&term.factors, point, system)?))
    })
}

/// Evaluate an expression at `point`.
///
/// The empty expression evaluates to exactly `0`.
pub fn evaluate(expression: &str, point: &Point, system: CoordinateSystem) -> ExprResult<f64> {
    evaluate_terms(&split_terms(expression)?, point, system)
}
