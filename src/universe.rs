//! The embedding surface: a knowledge base plus the query API.
//!
//! A host program creates a [Universe](struct.Universe.html), defines
//! clauses in it, and then asks questions:
//!
//! * [query()](struct.Universe.html#method.query) streams solutions
//! lazily; dropping the iterator abandons the search.
//! * [solve()](struct.Universe.html#method.solve) collects solutions,
//! honoring a limit, a debug tracer and a watchdog timeout.
//! * [ok()](struct.Universe.html#method.ok) asks whether any solution
//! exists at all.
//!
//! The knowledge base is borrowed shared for the lifetime of a query;
//! it cannot be modified while solutions are being streamed.

use std::fmt;
use std::rc::Rc;

use super::bindings::Bindings;
use super::goal::Goal;
use super::knowledge_base::*;
use super::scope::QUERY_SCOPE;
use super::solutions::Solution;
use super::solve::*;
use super::timeout::*;
use super::tracer::*;

/// Options for [Universe::solve()](struct.Universe.html#method.solve).
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Stop after this many solutions.
    pub limit: Option<usize>,
    /// Trace resolution with the verbose tracer.
    pub debug: bool,
    /// Arm the watchdog with this timeout, in milliseconds.
    pub timeout_ms: Option<u64>,
}

/// A knowledge base together with the query entry points.
#[derive(Debug, Default)]
pub struct Universe {
    kb: KnowledgeBase,
}

impl Universe {

    /// Creates an empty universe.
    pub fn new() -> Universe {
        Universe { kb: KnowledgeBase::new() }
    }

    /// Wraps an existing knowledge base.
    pub fn from_kb(kb: KnowledgeBase) -> Universe {
        Universe { kb }
    }

    /// Defines a clause.
    ///
    /// A clause with a fresh signature creates its predicate;
    /// otherwise it is appended after the existing clauses.
    ///
    /// # Usage
    /// ```
    /// use entail::*;
    ///
    /// let mut universe = Universe::new();
    /// universe.define(Clause::fact("parent",
    ///     vec![atom!("alice"), atom!("bob")]));
    /// ```
    pub fn define(&mut self, clause: Clause) {
        add_clause(&mut self.kb, clause);
    }

    /// Looks up a predicate by signature.
    pub fn predicate(&self, signature: &Signature) -> Option<&Predicate> {
        self.kb.get(signature)
    }

    /// The underlying knowledge base.
    pub fn kb(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Streams the solutions of a goal, lazily.
    ///
    /// The goal is renamed into the query scope, then proven against
    /// empty bindings. Work only happens when the iterator is
    /// demanded; dropping it cancels the search for free.
    ///
    /// # Arguments
    /// * `goal`
    /// # Return
    /// * [Solutions](struct.Solutions.html) iterator
    /// # Usage
    /// ```
    /// use entail::*;
    ///
    /// let universe = Universe::from_kb(test_kb());
    /// let goal = call!("sibling", var!("U"), var!("V"));
    /// for solution in universe.query(goal) {
    ///     println!("{}", format_solution(&solution));
    /// }
    /// // Prints 4 solutions, bob/charlie crossed with bob/charlie.
    /// ```
    pub fn query(&self, goal: Goal) -> Solutions<'_> {
        self.query_boxed(goal, Box::new(NoopTracer))
    }

    /// Streams the solutions of a goal, reporting resolution events
    /// to the given observer.
    pub fn query_traced<'a>(&'a self, goal: Goal, tracer: &'a dyn Tracer)
                            -> Solutions<'a> {
        self.query_boxed(goal, Box::new(tracer))
    }

    fn query_boxed<'a>(&'a self, goal: Goal, tracer: Box<dyn Tracer + 'a>)
                       -> Solutions<'a> {
        begin_query();
        let scoped = goal.with_scope(QUERY_SCOPE);
        let root = SolveNode::new(&scoped, Rc::new(Bindings::new()));
        Solutions { kb: &self.kb, tracer, root, done: false }
    } // query_boxed()

    /// Collects the solutions of a goal.
    ///
    /// # Arguments
    /// * `goal`
    /// * `options` - limit, debug flag, watchdog timeout
    /// # Return
    /// * vector of [Solution](../solutions/type.Solution.html)s
    /// # Usage
    /// ```
    /// use entail::*;
    ///
    /// let universe = Universe::from_kb(test_kb());
    /// let goal = call!("sibling", var!("U"), atom!("charlie"));
    /// let solutions = universe.solve(goal, &QueryOptions::default());
    /// assert_eq!(2, solutions.len());
    /// assert_eq!("U = bob", format_solution(&solutions[0]));
    /// assert_eq!("U = charlie", format_solution(&solutions[1]));
    /// ```
    pub fn solve(&self, goal: Goal, options: &QueryOptions) -> Vec<Solution> {

        let timer = options.timeout_ms.map(start_query_timer);

        let tracer: Box<dyn Tracer> = if options.debug {
            Box::new(VerboseTracer::new())
        }
        else {
            Box::new(NoopTracer)
        };

        let iter = self.query_boxed(goal, tracer);
        let solutions = match options.limit {
            Some(limit) => iter.take(limit).collect(),
            None => iter.collect(),
        };

        if let Some(timer) = timer { cancel_timer(timer); }
        solutions

    } // solve()

    /// True if the goal has at least one solution.
    ///
    /// # Usage
    /// ```
    /// use entail::*;
    ///
    /// let universe = Universe::from_kb(test_kb());
    /// assert!(universe.ok(call!("parent", atom!("alice"), atom!("bob"))));
    /// assert!(!universe.ok(call!("parent", atom!("bob"), atom!("alice"))));
    /// ```
    pub fn ok(&self, goal: Goal) -> bool {
        self.query(goal).next().is_some()
    } // ok()

} // impl Universe

// Display trait: a summary line plus the knowledge base.
impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Universe with {} predicates", self.kb.len())?;
        write!(f, "{}", format_kb(&self.kb))
    } // fmt
} // fmt::Display

/// The lazy solution stream returned by
/// [Universe::query()](struct.Universe.html#method.query).
///
/// Each call to `next()` resumes the search exactly where it stopped.
/// Solutions are delivered in strict Prolog order: clauses in
/// definition order, conjunctions and disjunctions left to right.
pub struct Solutions<'a> {
    kb: &'a KnowledgeBase,
    tracer: Box<dyn Tracer + 'a>,
    root: SolveNode,
    done: bool,
}

impl Iterator for Solutions<'_> {

    type Item = Solution;

    fn next(&mut self) -> Option<Solution> {

        if self.done { return None; }
        let ctx = SolveContext { kb: self.kb, tracer: self.tracer.as_ref() };

        loop {
            if query_stopped() {
                self.done = true;
                return None;
            }
            match self.root.next_solution(&ctx) {
                Response::Solution(bindings) => {
                    // Solve and project onto the query variables.
                    match bindings.mgu() {
                        Ok(solved) => { return Some(solved.project()); },
                        Err(failure) => {
                            ctx.tracer.message(&failure.to_string());
                        },
                    }
                },
                Response::Exhausted | Response::Cut => {
                    self.done = true;
                    return None;
                },
            } // match
        } // loop

    } // next()

} // impl Iterator


#[cfg(test)]
mod test {

    use serial_test::serial;
    use crate::*;

    // The family scenario: 4 solutions, in strict order.
    #[test]
    #[serial]
    fn test_query_order() {

        let universe = Universe::from_kb(test_kb());
        let goal = call!("sibling", var!("U"), var!("V"));
        let solutions = universe.solve(goal, &QueryOptions::default());

        let formatted: Vec<String> =
            solutions.iter().map(format_solution).collect();
        assert_eq!(vec!["U = bob, V = bob",
                        "U = bob, V = charlie",
                        "U = charlie, V = bob",
                        "U = charlie, V = charlie"], formatted);

    } // test_query_order()

    #[test]
    #[serial]
    fn test_limit() {
        let universe = Universe::from_kb(test_kb());
        let goal = call!("sibling", var!("U"), var!("V"));
        let options = QueryOptions { limit: Some(2), ..Default::default() };
        let solutions = universe.solve(goal, &options);
        assert_eq!(2, solutions.len());
    } // test_limit()

    // Closed world: an unknown predicate simply has no solutions.
    #[test]
    #[serial]
    fn test_closed_world() {
        let universe = Universe::from_kb(test_kb());
        let goal = call!("undefined", var!("X"));
        assert_eq!(0, universe.solve(goal, &QueryOptions::default()).len());
    } // test_closed_world()

    // A ground query without variables projects to an empty mapping.
    #[test]
    #[serial]
    fn test_ground_query() {
        let universe = Universe::from_kb(test_kb());
        let goal = call!("parent", atom!("alice"), atom!("bob"));
        let solutions = universe.solve(goal, &QueryOptions::default());
        assert_eq!(1, solutions.len());
        assert_eq!("ok", format_solution(&solutions[0]));
    } // test_ground_query()

} // test
