//! Failure taxonomy of the resolution engine.
//!
//! None of these conditions abort a query. Each one is consumed by the
//! goal which produced it, which then simply yields no solution. They
//! are surfaced through the [tracer](../tracer/index.html) and the `log`
//! facade so that a failing query can be diagnosed.

use thiserror::Error;

/// The reasons a goal can fail to produce a solution.
///
/// A `Failure` is not an error in the Rust sense of "something went
/// wrong with the program"; it is the ordinary negative outcome of a
/// logical operation. The cut signal is deliberately *not* part of this
/// enum. It is control flow, modeled by
/// [Response::Cut](../solve/enum.Response.html#variant.Cut).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Failure {
    /// Two terms are not unifiable. Covers both name/arity conflicts
    /// and occurs-check violations.
    #[error("unification failed: {0}")]
    Unification(String),

    /// Arithmetic evaluation or comparison reached a variable with
    /// no binding.
    #[error("variable {0} is not instantiated")]
    Uninstantiated(String),

    /// An arithmetic operator could not be applied: wrong arity,
    /// division by zero, type mismatch, overflow.
    #[error("evaluation failed: {0}")]
    Eval(String),

    /// A call goal refers to a signature with no predicate. Under the
    /// closed-world policy this is reported to the tracer and the goal
    /// fails silently; the value exists so the condition is nameable.
    #[error("unknown predicate: {0}")]
    UnknownPredicate(String),
}

impl Failure {

    /// Builds a `Failure::Unification` for two conflicting terms.
    pub fn conflict<A, B>(left: A, right: B) -> Failure
        where A: std::fmt::Display, B: std::fmt::Display {
        Failure::Unification(format!("conflict: {} with {}", left, right))
    }

    /// Builds a `Failure::Unification` for an occurs-check violation.
    pub fn occurs_check<A, B>(var: A, term: B) -> Failure
        where A: std::fmt::Display, B: std::fmt::Display {
        Failure::Unification(format!("occurs check: {} occurs in {}", var, term))
    }

} // impl Failure
