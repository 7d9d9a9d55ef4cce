//! The resolution observer.
//!
//! The resolver reports three kinds of events: entering a goal,
//! yielding a solution for a goal, and free-form messages (mostly
//! consumed failures). Observers must not affect the outcome of
//! resolution; they only watch.

use std::cell::Cell;

use super::bindings::Bindings;
use super::goal::Goal;

/// Observer hooks fired by the resolver.
pub trait Tracer {
    /// A goal is about to be driven for its first solution.
    fn enter(&self, goal: &Goal, bindings: &Bindings);
    /// A goal yielded a solution.
    fn exit(&self, goal: &Goal, bindings: &Bindings);
    /// A free-form diagnostic, eg. a consumed unification failure.
    fn message(&self, text: &str);
}

// A reference to an observer is itself an observer, so a borrowed
// tracer can live behind the same Box as an owned one.
impl<T: Tracer + ?Sized> Tracer for &T {
    fn enter(&self, goal: &Goal, bindings: &Bindings) {
        (**self).enter(goal, bindings);
    }
    fn exit(&self, goal: &Goal, bindings: &Bindings) {
        (**self).exit(goal, bindings);
    }
    fn message(&self, text: &str) {
        (**self).message(text);
    }
}

/// The default observer. Does nothing.
#[derive(Debug, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    fn enter(&self, _goal: &Goal, _bindings: &Bindings) {}
    fn exit(&self, _goal: &Goal, _bindings: &Bindings) {}
    fn message(&self, _text: &str) {}
}

/// An observer which prints an indented call/return trace.
///
/// # Usage
/// ```
/// use entail::*;
///
/// let kb = test_kb();
/// let universe = Universe::from_kb(kb);
/// let goal = call!("sibling", var!("U"), var!("V"));
/// let options = QueryOptions { debug: true, limit: Some(1), ..Default::default() };
/// let solutions = universe.solve(goal, &options);
/// assert_eq!(1, solutions.len());
/// ```
///
/// Prints something like:
/// <pre>
/// -> sibling(U, V) with ok
///    -> parent(P_1, X_1), parent(P_1, Y_1) with {X_1 = U, Y_1 = V}
///       ...
/// </pre>
#[derive(Debug, Default)]
pub struct VerboseTracer {
    depth: Cell<usize>,
}

impl VerboseTracer {

    pub fn new() -> VerboseTracer {
        VerboseTracer { depth: Cell::new(0) }
    }

    fn indent(&self) -> String {
        "   ".repeat(self.depth.get())
    }

} // impl VerboseTracer

impl Tracer for VerboseTracer {

    fn enter(&self, goal: &Goal, bindings: &Bindings) {
        println!("{}-> {} with {}", self.indent(), goal, bindings);
        self.depth.set(self.depth.get() + 1);
    }

    fn exit(&self, goal: &Goal, bindings: &Bindings) {
        self.depth.set(self.depth.get().saturating_sub(1));
        println!("{}<- {} with {}", self.indent(), goal, bindings);
    }

    fn message(&self, text: &str) {
        println!("{}-- {}", self.indent(), text);
    }

} // impl Tracer for VerboseTracer


// test
