// Test negation as failure and the closed-world assumption.
//
// not(G) succeeds, binding nothing, exactly when G has no solution.
// A predicate with no clauses at all is simply false.

use entail::*;

fn family_universe() -> Universe {
    let mut universe = Universe::new();
    universe.define(Clause::fact("parent",
        vec![atom!("alice"), atom!("bob")]));
    universe.define(Clause::fact("parent",
        vec![atom!("alice"), atom!("charlie")]));
    universe
}

#[test]
fn test_negation() {
    let universe = family_universe();

    // There is no parent of alice.
    assert!(universe.ok(Goal::not(call!("parent", var!("P"), atom!("alice")))));

    // But bob does have a parent.
    assert!(!universe.ok(Goal::not(call!("parent", var!("P"), atom!("bob")))));
} // test_negation()

// Negation binds no variables: the inner variable stays out of the
// solution mapping.
#[test]
fn test_negation_binds_nothing() {
    let universe = family_universe();
    let goal = Goal::not(call!("parent", var!("P"), atom!("alice")));
    let solutions = universe.solve(goal, &QueryOptions::default());
    assert_eq!(1, solutions.len());
    assert_eq!("ok", format_solution(&solutions[0]));
} // test_negation_binds_nothing()

// not(not(G)) succeeds exactly when G has at least one solution, and
// it too binds nothing.
#[test]
fn test_double_negation() {
    let universe = family_universe();

    let g = call!("parent", atom!("alice"), atom!("bob"));
    assert!(universe.ok(Goal::not(Goal::not(g))));

    let g = call!("parent", atom!("bob"), atom!("alice"));
    assert!(!universe.ok(Goal::not(Goal::not(g))));

    // G binds U when proven directly, but not through double negation.
    let g = call!("parent", atom!("alice"), var!("U"));
    let solutions = universe.solve(Goal::not(Goal::not(g)),
                                   &QueryOptions::default());
    assert_eq!(1, solutions.len());
    assert_eq!("ok", format_solution(&solutions[0]));
} // test_double_negation()

// Closed world: an undefined predicate has no solutions.
#[test]
fn test_closed_world() {
    let universe = family_universe();
    let goal = call!("undefined", var!("X"));
    assert_eq!(0, universe.solve(goal, &QueryOptions::default()).len());

    // And therefore its negation holds.
    assert!(universe.ok(Goal::not(call!("undefined", var!("X")))));
} // test_closed_world()

// Negation filters a stream without disturbing it.
#[test]
fn test_negation_as_filter() {
    let universe = family_universe();

    // parent(alice, C), not(C = bob).
    let goal = conj!(call!("parent", atom!("alice"), var!("C")),
                     Goal::not(unify!(var!("C"), atom!("bob"))));
    let solutions = universe.solve(goal, &QueryOptions::default());

    let formatted: Vec<String> = solutions.iter().map(format_solution).collect();
    assert_eq!(vec!["C = charlie"], formatted);
} // test_negation_as_filter()
