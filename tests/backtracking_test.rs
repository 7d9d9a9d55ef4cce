// Test backtracking through a recursive predicate.
//
// parent(charles, tony).
// parent(bill, audrey).
// parent(maria, bill).
// parent(tony, maria).
//
// An ancestor is a parent, or the parent of an ancestor:
//
// ancestor(X, Y) :- parent(X, Y).
// ancestor(X, Y) :- parent(X, Z), ancestor(Z, Y).
//
// Every recursion depth must rename the clause variables into a fresh
// scope; otherwise the X of one depth would capture the X of another.

use entail::*;

fn ancestor_universe() -> Universe {

    let mut universe = Universe::new();

    universe.define(Clause::fact("parent",
        vec![atom!("charles"), atom!("tony")]));
    universe.define(Clause::fact("parent",
        vec![atom!("bill"), atom!("audrey")]));
    universe.define(Clause::fact("parent",
        vec![atom!("maria"), atom!("bill")]));
    universe.define(Clause::fact("parent",
        vec![atom!("tony"), atom!("maria")]));

    universe.define(Clause::rule("ancestor", vec![var!("X"), var!("Y")],
        call!("parent", var!("X"), var!("Y"))));
    universe.define(Clause::rule("ancestor", vec![var!("X"), var!("Y")],
        conj!(call!("parent", var!("X"), var!("Z")),
              call!("ancestor", var!("Z"), var!("Y")))));

    universe

} // ancestor_universe()

// Charles's descendants, in strict resolution order.
#[test]
fn test_descendants_in_order() {

    let universe = ancestor_universe();
    let goal = call!("ancestor", atom!("charles"), var!("D"));
    let solutions = universe.solve(goal, &QueryOptions::default());

    let formatted: Vec<String> = solutions.iter().map(format_solution).collect();
    assert_eq!(vec!["D = tony", "D = maria", "D = bill", "D = audrey"],
               formatted);

} // test_descendants_in_order()

// Both ends unbound: the full relation, still deterministic.
#[test]
fn test_full_relation_count() {
    let universe = ancestor_universe();
    let goal = call!("ancestor", var!("A"), var!("D"));
    let solutions = universe.solve(goal, &QueryOptions::default());
    // 4 parent pairs, plus tony->bill, tony->audrey, maria->audrey,
    // charles->maria, charles->bill, charles->audrey.
    assert_eq!(10, solutions.len());
} // test_full_relation_count()

// The same query can be asked twice; scopes never leak between runs.
#[test]
fn test_reusable_universe() {
    let universe = ancestor_universe();

    let goal = call!("ancestor", atom!("maria"), var!("D"));
    let first = universe.solve(goal.clone(), &QueryOptions::default());
    let second = universe.solve(goal, &QueryOptions::default());
    assert_eq!(first, second);
    assert_eq!(2, first.len()); // bill, audrey
} // test_reusable_universe()

// A solution limit stops the search early; the engine does no work
// past the demanded solutions.
#[test]
fn test_limit() {
    let universe = ancestor_universe();
    let goal = call!("ancestor", var!("A"), var!("D"));
    let options = QueryOptions { limit: Some(3), ..Default::default() };
    assert_eq!(3, universe.solve(goal, &options).len());
} // test_limit()
