//! Stepping for the conjunction and disjunction goals.
//!
//! These are called from
//! [next_solution()](../solve/struct.SolveNode.html#method.next_solution)
//! in solve.rs. Both work on a head/tail split: the head is the first
//! subgoal's node, the tail covers the remaining subgoals and is built
//! lazily, only when the head produces a solution (conjunction) or is
//! exhausted (disjunction).

use std::rc::Rc;

use super::bindings::Bindings;
use super::goal::Goal;
use super::solve::*;

/// State of a conjunction node.
pub struct AndState {
    head: Box<SolveNode>,
    tail_goals: Vec<Goal>,
    tail: Option<Box<SolveNode>>,
}

impl AndState {

    /// Splits the subgoals into a head node and pending tail goals.
    pub(crate) fn new(goals: &[Goal], bindings: &Rc<Bindings>) -> AndState {
        AndState {
            head: Box::new(SolveNode::new(&goals[0], Rc::clone(bindings))),
            tail_goals: goals[1..].to_vec(),
            tail: None,
        }
    }

} // impl AndState

/// Finds the next solution of a conjunction.
///
/// Every subgoal must succeed. For each solution of the head, the tail
/// is driven with the head's bindings; when the tail is exhausted, the
/// head is asked for another solution and the tail is rebuilt. The
/// enumeration is strictly left to right, depth first.
///
/// A cut signal from either side propagates: the head's remaining
/// alternatives are abandoned.
pub(crate) fn next_solution_and(state: &mut AndState, ctx: &SolveContext)
                                -> Response {

    loop {

        // Check for another tail solution first.
        if let Some(tail) = state.tail.as_mut() {
            match tail.next_solution(ctx) {
                Response::Solution(bindings) => {
                    return Response::Solution(bindings);
                },
                Response::Cut => { return Response::Cut; },
                Response::Exhausted => { state.tail = None; },
            }
        }

        // Ask the head for a (new) solution.
        match state.head.next_solution(ctx) {
            Response::Exhausted => { return Response::Exhausted; },
            Response::Cut => { return Response::Cut; },
            Response::Solution(bindings) => {
                if state.tail_goals.is_empty() {
                    return Response::Solution(bindings);
                }
                let tail_goal = if state.tail_goals.len() == 1 {
                    state.tail_goals[0].clone()
                }
                else {
                    Goal::And(state.tail_goals.clone())
                };
                state.tail = Some(Box::new(SolveNode::new(&tail_goal, bindings)));
            },
        } // match

    } // loop

} // next_solution_and()

/// State of a disjunction node.
pub struct OrState {
    goals: Vec<Goal>,
    index: usize,
    current: Option<Box<SolveNode>>,
}

impl OrState {

    pub(crate) fn new(goals: &[Goal]) -> OrState {
        OrState { goals: goals.to_vec(), index: 0, current: None }
    }

} // impl OrState

/// Finds the next solution of a disjunction.
///
/// Yields every solution of the first subgoal, then every solution of
/// the second, and so on. Each alternative starts from the same input
/// bindings. A cut signal from the current alternative propagates and
/// abandons the remaining alternatives.
pub(crate) fn next_solution_or(state: &mut OrState, bindings: &Rc<Bindings>,
                               ctx: &SolveContext) -> Response {

    loop {

        match state.current.as_mut() {
            Some(node) => {
                match node.next_solution(ctx) {
                    Response::Solution(bindings) => {
                        return Response::Solution(bindings);
                    },
                    Response::Cut => { return Response::Cut; },
                    Response::Exhausted => { state.current = None; },
                }
            },
            None => {
                if state.index >= state.goals.len() {
                    return Response::Exhausted;
                }
                let goal = state.goals[state.index].clone();
                state.index += 1;
                state.current =
                    Some(Box::new(SolveNode::new(&goal, Rc::clone(bindings))));
            },
        } // match

    } // loop

} // next_solution_or()
