// Test the family scenario.
//
// Define facts and a rule:
//
// parent(alice, bob).
// parent(alice, charlie).
// sibling(X, Y) :- parent(P, X), parent(P, Y).
//
// The query sibling(U, V) must deliver exactly these four solutions,
// in this order:
//
// U = bob, V = bob
// U = bob, V = charlie
// U = charlie, V = bob
// U = charlie, V = charlie

use entail::*;

fn family_universe() -> Universe {

    let mut universe = Universe::new();

    universe.define(Clause::fact("parent",
        vec![atom!("alice"), atom!("bob")]));
    universe.define(Clause::fact("parent",
        vec![atom!("alice"), atom!("charlie")]));

    universe.define(Clause::rule("sibling", vec![var!("X"), var!("Y")],
        conj!(call!("parent", var!("P"), var!("X")),
              call!("parent", var!("P"), var!("Y")))));

    universe

} // family_universe()

#[test]
fn test_sibling_solutions() {

    let universe = family_universe();
    let goal = call!("sibling", var!("U"), var!("V"));
    let solutions = universe.solve(goal, &QueryOptions::default());

    let formatted: Vec<String> = solutions.iter().map(format_solution).collect();
    assert_eq!(vec!["U = bob, V = bob",
                    "U = bob, V = charlie",
                    "U = charlie, V = bob",
                    "U = charlie, V = charlie"], formatted);

} // test_sibling_solutions()

// A bound argument restricts the stream, preserving order.
#[test]
fn test_sibling_of_charlie() {

    let universe = family_universe();
    let goal = call!("sibling", var!("U"), atom!("charlie"));
    let solutions = universe.solve(goal, &QueryOptions::default());

    let formatted: Vec<String> = solutions.iter().map(format_solution).collect();
    assert_eq!(vec!["U = bob", "U = charlie"], formatted);

} // test_sibling_of_charlie()

// The lazy stream can be abandoned at any point.
#[test]
fn test_query_is_lazy() {

    let universe = family_universe();
    let goal = call!("sibling", var!("U"), var!("V"));

    let mut solutions = universe.query(goal);
    let first = solutions.next().unwrap();
    assert_eq!("U = bob, V = bob", format_solution(&first));
    drop(solutions); // no further work happens

} // test_query_is_lazy()

// A predicate with clauses C1, C2 yields exactly the solutions of
// the disjunction C1; C2, in the same order.
#[test]
fn test_disjunction_equals_multi_clause() {

    let mut universe = Universe::new();

    // two_clauses(X) with clauses X = 1 and X = 2.
    universe.define(Clause::rule("two_clauses", vec![var!("X")],
        unify!(var!("X"), Term::Int(1))));
    universe.define(Clause::rule("two_clauses", vec![var!("X")],
        unify!(var!("X"), Term::Int(2))));

    // one_clause(X) with the body (X = 1; X = 2).
    universe.define(Clause::rule("one_clause", vec![var!("X")],
        disj!(unify!(var!("X"), Term::Int(1)),
              unify!(var!("X"), Term::Int(2)))));

    let from_clauses = universe.solve(call!("two_clauses", var!("X")),
                                      &QueryOptions::default());
    let from_disjunction = universe.solve(call!("one_clause", var!("X")),
                                          &QueryOptions::default());

    assert_eq!(from_clauses, from_disjunction);
    assert_eq!(2, from_clauses.len());
    assert_eq!(Term::Int(1), from_clauses[0]["X"]);
    assert_eq!(Term::Int(2), from_clauses[1]["X"]);

} // test_disjunction_equals_multi_clause()
