// Benchmarks the resolver with the Fibonacci knowledge base:
//
// fib(0, 1).
// fib(1, 2).
// fib(N, R) :- N > 1, N1 <- N - 1, N2 <- N - 2,
//              fib(N1, R1), fib(N2, R2), R <- R1 + R2.
//
// Every fib(N, R) query runs the whole naive double recursion through
// the engine, so this exercises clause renaming, argument unification
// and arithmetic evaluation together.

use criterion::{criterion_group, criterion_main, Criterion};
use entail::*;

fn fib_universe() -> Universe {
    let mut universe = Universe::new();
    universe.define(Clause::fact("fib", vec![Term::Int(0), Term::Int(1)]));
    universe.define(Clause::fact("fib", vec![Term::Int(1), Term::Int(2)]));
    universe.define(Clause::rule("fib", vec![var!("N"), var!("R")],
        conj!(Goal::gt(var!("N"), Term::Int(1)),
              Goal::eval(var!("N1"), var!("N") - 1),
              Goal::eval(var!("N2"), var!("N") - 2),
              call!("fib", var!("N1"), var!("R1")),
              call!("fib", var!("N2"), var!("R2")),
              Goal::eval(var!("R"), var!("R1") + var!("R2")))));
    universe
}

fn fib_query(universe: &Universe) {
    let goal = call!("fib", Term::Int(10), var!("R"));
    let solutions = universe.solve(goal, &QueryOptions::default());
    assert_eq!(Term::Int(144), solutions[0]["R"]);
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let universe = fib_universe();
    c.bench_function("fib", |b| b.iter(|| fib_query(&universe)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
