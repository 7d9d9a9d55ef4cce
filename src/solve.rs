//! The resolver. A SolveNode is a node in a proof tree.
//!
//! Each node holds the goal it seeks to prove, the bindings it started
//! from, and whatever state its goal needs between solutions. The
//! method [next_solution()](struct.SolveNode.html#method.next_solution)
//! searches for the next solution and suspends; every node preserves
//! its state, so calling it again continues the search exactly where
//! it stopped. Nothing is computed until a solution is demanded, and
//! abandoning a node abandons the whole subtree with no residual work.
//!
//! The cut is a typed [Response](enum.Response.html): it bubbles out of
//! conjunctions, disjunctions and negations, and is caught by the
//! nearest enclosing predicate-call frame, which stops iterating
//! clauses. Backtracking above that frame continues normally.

use std::rc::Rc;

use log::{debug, trace};

use super::arithmetic::{evaluate, CmpOp};
use super::bindings::Bindings;
use super::errors::Failure;
use super::goal::Goal;
use super::knowledge_base::*;
use super::scope::next_scope_id;
use super::solve_and_or::*;
use super::term::Term;
use super::timeout::query_stopped;
use super::tracer::Tracer;

/// The outcome of demanding one more solution from a node.
#[derive(Debug, Clone)]
pub enum Response {
    /// A solution, with the bindings under which the goal holds.
    Solution(Rc<Bindings>),
    /// No more solutions.
    Exhausted,
    /// The cut signal. Raised by the cut on backtracking; propagates
    /// upward until the enclosing predicate call catches it.
    Cut,
}

/// Everything a node needs besides its own state: the knowledge base
/// and the observer.
pub struct SolveContext<'a> {
    pub kb: &'a KnowledgeBase,
    pub tracer: &'a dyn Tracer,
}

/// A node in a proof tree. See the [module docs](index.html).
pub struct SolveNode {
    goal: Rc<Goal>,
    input: Rc<Bindings>,
    entered: bool,
    state: State,
}

// Per-goal state preserved between solutions.
enum State {
    True { done: bool },
    Fail,
    Unify { left: Term, right: Term, done: bool },
    Eval { target: Term, expr: Term, done: bool },
    Compare { op: CmpOp, left: Term, right: Term, done: bool },
    Not { inner: Box<SolveNode>, done: bool },
    Cut { fired: bool },
    And(AndState),
    Or(OrState),
    Call {
        name: String,
        args: Vec<Term>,
        index: usize,
        child: Option<Box<SolveNode>>,
        done: bool,
    },
}

impl SolveNode {

    /// Creates a solution node for a goal.
    ///
    /// # Arguments
    /// * `goal` - the goal to be proven
    /// * `bindings` - the bindings accumulated so far
    /// # Return
    /// * `SolveNode`
    /// # Usage
    /// ```
    /// use std::rc::Rc;
    /// use entail::*;
    ///
    /// let kb = test_kb();
    /// let goal = call!("sibling", var!("U"), var!("V")).with_scope(QUERY_SCOPE);
    /// let mut node = SolveNode::new(&goal, Rc::new(Bindings::new()));
    ///
    /// let tracer = NoopTracer;
    /// let ctx = SolveContext { kb: &kb, tracer: &tracer };
    /// match node.next_solution(&ctx) {
    ///     Response::Solution(bindings) => {
    ///         println!("{}", format_solution(&bindings.project()));
    ///     },
    ///     _ => println!("No."),
    /// }
    /// // Prints: U = bob, V = bob
    /// ```
    pub fn new(goal: &Goal, bindings: Rc<Bindings>) -> SolveNode {

        let state = match goal {
            Goal::True => State::True { done: false },
            Goal::Fail => State::Fail,
            // An empty conjunction holds vacuously.
            Goal::And(goals) if goals.is_empty() => State::True { done: false },
            Goal::And(goals) => State::And(AndState::new(goals, &bindings)),
            Goal::Or(goals) => State::Or(OrState::new(goals)),
            Goal::Unify(left, right) => {
                State::Unify { left: left.clone(), right: right.clone(),
                               done: false }
            },
            Goal::Eval(target, expr) => {
                State::Eval { target: target.clone(), expr: expr.clone(),
                              done: false }
            },
            Goal::Compare(op, left, right) => {
                State::Compare { op: *op, left: left.clone(),
                                 right: right.clone(), done: false }
            },
            Goal::Not(inner) => {
                let inner = SolveNode::new(inner, Rc::clone(&bindings));
                State::Not { inner: Box::new(inner), done: false }
            },
            Goal::Cut => State::Cut { fired: false },
            Goal::Call { name, args } => {
                State::Call { name: name.clone(), args: args.clone(),
                              index: 0, child: None, done: false }
            },
        };

        SolveNode {
            goal: Rc::new(goal.clone()),
            input: bindings,
            entered: false,
            state,
        }
    } // new()

    /// Finds the first or next solution of this node.
    ///
    /// Returns [Response::Exhausted](enum.Response.html#variant.Exhausted)
    /// when the goal has no (further) solution, and
    /// [Response::Cut](enum.Response.html#variant.Cut) when a cut
    /// signal is propagating.
    pub fn next_solution(&mut self, ctx: &SolveContext) -> Response {

        if !self.entered {
            self.entered = true;
            ctx.tracer.enter(&self.goal, &self.input);
        }

        let input = Rc::clone(&self.input);

        let response = match &mut self.state {

            State::True { done } => {
                if *done { Response::Exhausted }
                else { *done = true; Response::Solution(input) }
            },

            State::Fail => Response::Exhausted,

            State::Cut { fired } => {
                if *fired {
                    ctx.tracer.message("cut");
                    Response::Cut
                }
                else { *fired = true; Response::Solution(input) }
            },

            State::Unify { left, right, done } => {
                if *done { Response::Exhausted }
                else {
                    *done = true;
                    solve_unify(left, right, &input, ctx)
                }
            },

            State::Eval { target, expr, done } => {
                if *done { Response::Exhausted }
                else {
                    *done = true;
                    solve_eval(target, expr, &input, ctx)
                }
            },

            State::Compare { op, left, right, done } => {
                if *done { Response::Exhausted }
                else {
                    *done = true;
                    solve_compare(*op, left, right, &input, ctx)
                }
            },

            State::Not { inner, done } => {
                if *done { Response::Exhausted }
                else {
                    *done = true;
                    match inner.next_solution(ctx) {
                        // At least one solution: the negation fails.
                        Response::Solution(_) => Response::Exhausted,
                        // No solution: succeed without binding anything.
                        Response::Exhausted => Response::Solution(input),
                        Response::Cut => Response::Cut,
                    }
                }
            },

            State::And(state) => next_solution_and(state, ctx),

            State::Or(state) => next_solution_or(state, &input, ctx),

            State::Call { name, args, index, child, done } => {
                solve_call(name, args, index, child, done, &input, ctx)
            },

        }; // match

        if let Response::Solution(bindings) = &response {
            ctx.tracer.exit(&self.goal, bindings);
        }
        response

    } // next_solution()

} // impl SolveNode

/// Proves `left = right`: extends the bindings with the equation and
/// computes the most-general unifier.
fn solve_unify(left: &Term, right: &Term, bindings: &Rc<Bindings>,
               ctx: &SolveContext) -> Response {
    let extended = bindings.with_equation(left.clone(), right.clone());
    match extended.mgu() {
        Ok(solved) => Response::Solution(Rc::new(solved)),
        Err(failure) => {
            trace!("{} = {}: {}", left, right, failure);
            ctx.tracer.message(&failure.to_string());
            Response::Exhausted
        },
    }
} // solve_unify()

/// Proves `target <- expr`: substitutes, folds the arithmetic, then
/// unifies the target with the numeric result.
fn solve_eval(target: &Term, expr: &Term, bindings: &Rc<Bindings>,
              ctx: &SolveContext) -> Response {
    let value = bindings.resolve(expr).and_then(|t| evaluate(&t));
    match value {
        Ok(num) => solve_unify(target, &num.to_term(), bindings, ctx),
        Err(failure) => {
            trace!("{} <- {}: {}", target, expr, failure);
            ctx.tracer.message(&failure.to_string());
            Response::Exhausted
        },
    }
} // solve_eval()

/// Proves a numeric comparison. Yields the input bindings unchanged
/// when the comparison holds.
fn solve_compare(op: CmpOp, left: &Term, right: &Term,
                 bindings: &Rc<Bindings>, ctx: &SolveContext) -> Response {
    let outcome = bindings.resolve(left).and_then(|t| evaluate(&t))
        .and_then(|l| {
            bindings.resolve(right).and_then(|t| evaluate(&t))
                .map(|r| (l, r))
        });
    match outcome {
        Ok((l, r)) => {
            if op.holds(l, r) { Response::Solution(Rc::clone(bindings)) }
            else { Response::Exhausted }
        },
        Err(failure) => {
            trace!("{} {} {}: {}", left, op.symbol(), right, failure);
            ctx.tracer.message(&failure.to_string());
            Response::Exhausted
        },
    }
} // solve_compare()

// Combines a body solution with the caller's bindings, so that the
// surfaced solution is consistent with both.
fn surface(body: &Bindings, caller: &Bindings) -> Result<Bindings, Failure> {
    match body.merge(caller) {
        Some(combined) => combined.mgu(),
        None => Err(Failure::Unification(
            "body solution conflicts with caller bindings".to_string())),
    }
} // surface()

/// Proves a predicate call.
///
/// For each clause of the predicate, in definition order: allocate a
/// fresh scope, rename the clause into it, unify the head arguments
/// with the call arguments, and drive the body. An unknown signature
/// fails silently (closed world); the condition is still reported to
/// the tracer. A cut signal raised out of a clause body is caught
/// here, ending the iteration.
fn solve_call(name: &str, args: &[Term], index: &mut usize,
              child: &mut Option<Box<SolveNode>>, done: &mut bool,
              caller: &Rc<Bindings>, ctx: &SolveContext) -> Response {

    if *done { return Response::Exhausted; }
    let signature = Signature::new(name, args.len());

    loop {

        // Drain the current clause body first.
        if let Some(node) = child.as_mut() {
            match node.next_solution(ctx) {
                Response::Solution(body_bindings) => {
                    match surface(&body_bindings, caller) {
                        Ok(solved) => {
                            return Response::Solution(Rc::new(solved));
                        },
                        Err(failure) => {
                            ctx.tracer.message(&failure.to_string());
                        },
                    }
                },
                Response::Exhausted => { *child = None; },
                Response::Cut => {
                    debug!("cut caught by {}", signature);
                    ctx.tracer.message(&format!("cut caught by {}", signature));
                    *done = true;
                    return Response::Exhausted;
                },
            }
            continue;
        }

        // Select the next clause.
        if query_stopped() {
            *done = true;
            return Response::Exhausted;
        }
        if ctx.kb.get(&signature).is_none() {
            // Closed world: no predicate means the goal is false.
            let failure = Failure::UnknownPredicate(signature.to_string());
            debug!("{}", failure);
            ctx.tracer.message(&failure.to_string());
            *done = true;
            return Response::Exhausted;
        }
        if *index >= count_clauses(ctx.kb, &signature) {
            *done = true;
            return Response::Exhausted;
        }
        let clause = match get_clause(ctx.kb, &signature, *index) {
            Some(clause) => clause.clone(),
            None => { *done = true; return Response::Exhausted; },
        };
        *index += 1;

        // Fresh scope per invocation: recursion at several depths
        // never shares clause variables.
        let sigma = next_scope_id();
        let body = clause.body.with_scope(sigma);

        let mut merged = (**caller).clone();
        for (head_arg, call_arg) in clause.args.iter().zip(args) {
            merged = merged.with_equation(head_arg.with_scope(sigma),
                                          call_arg.clone());
        }

        match merged.mgu() {
            Ok(solved) => {
                trace!("{} clause {} matches", signature, *index - 1);
                *child = Some(Box::new(SolveNode::new(&body, Rc::new(solved))));
            },
            Err(failure) => {
                trace!("{} clause {}: {}", signature, *index - 1, failure);
                ctx.tracer.message(&failure.to_string());
            },
        }

    } // loop

} // solve_call()


// test
