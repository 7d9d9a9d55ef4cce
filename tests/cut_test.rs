// Test the cut.
//
// The cut succeeds once; on backtracking it prunes the remaining
// choice points of its clause and the remaining clauses of the
// enclosing predicate. It reaches no further than that predicate.
//
// Lists are encoded as cons cells:
//
// member(X, cons(X, _)).
// member(X, cons(_, T)) :- member(X, T).
// first(X, L) :- member(X, L), !.

use entail::*;

/// Builds cons(a, cons(b, ... nil)).
fn list(items: &[&str]) -> Term {
    match items.split_first() {
        None => atom!("nil"),
        Some((head, tail)) => compound!("cons", atom!(head), list(tail)),
    }
}

fn member_universe() -> Universe {

    let mut universe = Universe::new();

    // member(X, cons(X, _)).
    universe.define(Clause::fact("member",
        vec![var!("X"), compound!("cons", var!("X"), anon!())]));

    // member(X, cons(_, T)) :- member(X, T).
    universe.define(Clause::rule("member",
        vec![var!("X"), compound!("cons", anon!(), var!("T"))],
        call!("member", var!("X"), var!("T"))));

    // first(X, L) :- member(X, L), !.
    universe.define(Clause::rule("first", vec![var!("X"), var!("L")],
        conj!(call!("member", var!("X"), var!("L")), Goal::Cut)));

    universe

} // member_universe()

// Without a cut, member enumerates the whole list in order.
#[test]
fn test_member_enumerates() {

    let universe = member_universe();
    let goal = call!("member", var!("X"), list(&["a", "b", "c"]));
    let solutions = universe.solve(goal, &QueryOptions::default());

    let formatted: Vec<String> = solutions.iter().map(format_solution).collect();
    assert_eq!(vec!["X = a", "X = b", "X = c"], formatted);

} // test_member_enumerates()

// With the cut, only the first member is delivered.
#[test]
fn test_first_commits() {

    let universe = member_universe();
    let goal = call!("first", var!("R"), list(&["a", "b", "c"]));
    let solutions = universe.solve(goal, &QueryOptions::default());

    assert_eq!(1, solutions.len(), "The cut should prune the rest.");
    assert_eq!(atom!("a"), solutions[0]["R"]);

} // test_first_commits()

// p :- a, !, b.
// p :- c.
// Once a succeeds, the second clause is never tried: p has exactly
// the b-solutions of the first clause.
#[test]
fn test_cut_prunes_remaining_clauses() {

    let mut universe = Universe::new();
    universe.define(Clause::fact("a", vec![atom!("yes")]));
    universe.define(Clause::fact("b", vec![atom!("yes")]));
    universe.define(Clause::fact("c", vec![atom!("yes")]));

    universe.define(Clause::rule("p", vec![var!("W")],
        conj!(call!("a", anon!()), Goal::Cut, call!("b", var!("W")))));
    universe.define(Clause::rule("p", vec![var!("W")],
        call!("c", var!("W"))));

    let solutions = universe.solve(call!("p", var!("W")),
                                   &QueryOptions::default());
    assert_eq!(1, solutions.len(), "c must never be tried.");
    assert_eq!(atom!("yes"), solutions[0]["W"]);

} // test_cut_prunes_remaining_clauses()

// When the goal before the cut fails, the cut is never reached and
// the next clause proceeds normally.
#[test]
fn test_cut_not_reached() {

    let mut universe = Universe::new();
    universe.define(Clause::fact("c", vec![atom!("fallback")]));

    universe.define(Clause::rule("p", vec![var!("W")],
        conj!(Goal::Fail, Goal::Cut, call!("b", var!("W")))));
    universe.define(Clause::rule("p", vec![var!("W")],
        call!("c", var!("W"))));

    let solutions = universe.solve(call!("p", var!("W")),
                                   &QueryOptions::default());
    assert_eq!(1, solutions.len());
    assert_eq!(atom!("fallback"), solutions[0]["W"]);

} // test_cut_not_reached()

// The cut is caught by the innermost predicate call. The caller's own
// backtracking above that frame continues normally.
#[test]
fn test_cut_is_local_to_its_predicate() {

    let mut universe = Universe::new();
    universe.define(Clause::fact("choice", vec![Term::Int(1)]));
    universe.define(Clause::fact("choice", vec![Term::Int(2)]));

    // pick(X) :- choice(X), !.
    universe.define(Clause::rule("pick", vec![var!("X")],
        conj!(call!("choice", var!("X")), Goal::Cut)));

    // pair(A, B) :- choice(A), pick(B).
    universe.define(Clause::rule("pair", vec![var!("A"), var!("B")],
        conj!(call!("choice", var!("A")), call!("pick", var!("B")))));

    // The cut inside pick commits B to 1, but choice(A) above the
    // pick frame still backtracks.
    let solutions = universe.solve(call!("pair", var!("A"), var!("B")),
                                   &QueryOptions::default());
    let formatted: Vec<String> = solutions.iter().map(format_solution).collect();
    assert_eq!(vec!["A = 1, B = 1", "A = 2, B = 1"], formatted);

} // test_cut_is_local_to_its_predicate()

// A cut inside one disjunct prunes the sibling alternatives of the
// same clause body.
#[test]
fn test_cut_in_disjunction() {

    let mut universe = Universe::new();

    // q(X) :- (X = 1, ! ; X = 2).
    universe.define(Clause::rule("q", vec![var!("X")],
        disj!(conj!(unify!(var!("X"), Term::Int(1)), Goal::Cut),
              unify!(var!("X"), Term::Int(2)))));

    let solutions = universe.solve(call!("q", var!("X")),
                                   &QueryOptions::default());
    assert_eq!(1, solutions.len());
    assert_eq!(Term::Int(1), solutions[0]["X"]);

} // test_cut_in_disjunction()
