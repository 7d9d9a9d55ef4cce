//! A logic expression to be proven.
//!
//! Every goal can be driven to produce a lazy sequence of
//! [Bindings](../bindings/struct.Bindings.html); the machinery for that
//! lives in [solve](../solve/index.html). This module defines the goal
//! tree itself: the built-in goals (`true`, `fail`, conjunction,
//! disjunction, unification, evaluation, comparison, negation, cut)
//! and the predicate call.

use std::fmt;

use super::arithmetic::CmpOp;
use super::knowledge_base::Signature;
use super::term::Term;

/// A node in a proof tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Goal {
    /// Succeeds exactly once, yielding its input bindings unchanged.
    True,
    /// Yields nothing.
    Fail,
    /// Conjunction. Subgoals are proven left to right, depth first;
    /// each solution of the first drives the rest.
    /// Use [conj!](../macro.conj.html) to construct.
    And(Vec<Goal>),
    /// Disjunction. Yields every solution of each subgoal, in order.
    /// Use [disj!](../macro.disj.html) to construct.
    Or(Vec<Goal>),
    /// Unification of two terms. Adds the equation and immediately
    /// computes the most-general unifier.
    /// Use [unify!](../macro.unify.html) to construct.
    Unify(Term, Term),
    /// Arithmetic evaluation: folds the right term to a number, then
    /// unifies the left term with it. The Prolog `is`.
    Eval(Term, Term),
    /// Numeric comparison of two evaluated terms.
    Compare(CmpOp, Term, Term),
    /// Negation as failure. Succeeds, binding nothing, exactly when
    /// the inner goal has no solution.
    Not(Box<Goal>),
    /// The cut. Succeeds once; on backtracking it raises a signal
    /// which prunes the remaining choice points of the clause and the
    /// remaining clauses of the enclosing predicate.
    Cut,
    /// A call to a predicate in the knowledge base, identified by
    /// name and arity. Use [call!](../macro.call.html) to construct.
    Call { name: String, args: Vec<Term> },
}

impl Goal {

    /// Makes a predicate-call goal.
    pub fn call(name: &str, args: Vec<Term>) -> Goal {
        Goal::Call { name: name.to_string(), args }
    }

    /// Makes a unification goal: `left = right`.
    pub fn unify(left: Term, right: Term) -> Goal {
        Goal::Unify(left, right)
    }

    /// Makes an evaluation goal: `target <- expr`.
    ///
    /// # Usage
    /// ```
    /// use entail::*;
    ///
    /// // N1 <- N - 1
    /// let goal = Goal::eval(var!("N1"), var!("N") - 1);
    /// assert_eq!("N1 <- (N - 1)", goal.to_string());
    /// ```
    pub fn eval(target: Term, expr: Term) -> Goal {
        Goal::Eval(target, expr)
    }

    /// Makes a comparison goal: `left < right`.
    pub fn lt(left: Term, right: Term) -> Goal {
        Goal::Compare(CmpOp::Lt, left, right)
    }

    /// Makes a comparison goal: `left <= right`.
    pub fn le(left: Term, right: Term) -> Goal {
        Goal::Compare(CmpOp::Le, left, right)
    }

    /// Makes a comparison goal: `left > right`.
    pub fn gt(left: Term, right: Term) -> Goal {
        Goal::Compare(CmpOp::Gt, left, right)
    }

    /// Makes a comparison goal: `left >= right`.
    pub fn ge(left: Term, right: Term) -> Goal {
        Goal::Compare(CmpOp::Ge, left, right)
    }

    /// Makes a negation-as-failure goal.
    pub fn not(goal: Goal) -> Goal {
        Goal::Not(Box::new(goal))
    }

    /// The signature of a call goal, None for any other goal.
    pub fn signature(&self) -> Option<Signature> {
        match self {
            Goal::Call { name, args } => {
                Some(Signature::new(name, args.len()))
            },
            _ => None,
        }
    } // signature()

    /// Rewrites every term in the goal tree into the given scope.
    ///
    /// `true`, `fail` and the cut are invariant; terms are rewritten
    /// by [Term::with_scope()](../term/enum.Term.html#method.with_scope),
    /// so variables which already bear a scope are left alone and the
    /// operation is idempotent.
    ///
    /// # Arguments
    /// * `scope` - scope id
    /// # Return
    /// * `new goal`
    /// # Usage
    /// ```
    /// use entail::*;
    ///
    /// let goal = call!("parent", var!("P"), var!("X"));
    /// assert_eq!("parent(P_4, X_4)", goal.with_scope(4).to_string());
    /// ```
    pub fn with_scope(&self, scope: u64) -> Goal {
        match self {
            Goal::True | Goal::Fail | Goal::Cut => self.clone(),
            Goal::And(goals) => {
                Goal::And(goals.iter().map(|g| g.with_scope(scope)).collect())
            },
            Goal::Or(goals) => {
                Goal::Or(goals.iter().map(|g| g.with_scope(scope)).collect())
            },
            Goal::Unify(left, right) => {
                Goal::Unify(left.with_scope(scope), right.with_scope(scope))
            },
            Goal::Eval(target, expr) => {
                Goal::Eval(target.with_scope(scope), expr.with_scope(scope))
            },
            Goal::Compare(op, left, right) => {
                Goal::Compare(*op, left.with_scope(scope), right.with_scope(scope))
            },
            Goal::Not(inner) => {
                Goal::Not(Box::new(inner.with_scope(scope)))
            },
            Goal::Call { name, args } => {
                let args = args.iter().map(|t| t.with_scope(scope)).collect();
                Goal::Call { name: name.clone(), args }
            },
        }
    } // with_scope()

} // impl Goal

/// Formats a list of displayable items with a separator.
fn format_list<T>(items: &[T], separator: &str)
                  -> String where T: fmt::Display {
    let parts: Vec<String> = items.iter().map(|i| i.to_string()).collect();
    parts.join(separator)
} // format_list()

// Display trait, to display goals.
impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self {
            Goal::True => { write!(f, "true") },
            Goal::Fail => { write!(f, "fail") },
            Goal::And(goals) => { write!(f, "{}", format_list(goals, ", ")) },
            Goal::Or(goals) => { write!(f, "{}", format_list(goals, "; ")) },
            Goal::Unify(left, right) => { write!(f, "{} = {}", left, right) },
            Goal::Eval(target, expr) => { write!(f, "{} <- {}", target, expr) },
            Goal::Compare(op, left, right) => {
                write!(f, "{} {} {}", left, op.symbol(), right)
            },
            Goal::Not(inner) => { write!(f, "not({})", inner) },
            Goal::Cut => { write!(f, "!") },
            Goal::Call { name, args } => {
                if args.is_empty() { write!(f, "{}", name) }
                else { write!(f, "{}({})", name, format_list(args, ", ")) }
            },
        } // match
    } // fmt
} // fmt::Display


// test
