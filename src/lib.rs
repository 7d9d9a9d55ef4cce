//! # Entail
//!
//! Entail is an embeddable logic-programming engine in the Prolog
//! family. A host program defines a knowledge base of predicates whose
//! clauses are Horn-style rules over first-order terms, then issues
//! queries and receives a lazy stream of solutions. Resolution is
//! SLD with chronological backtracking; unification is first-order
//! syntactic unification (Martelli–Montanari) with the occurs-check.
//!
//! ## Briefly
//!
//! There is no clause syntax to parse. Terms and goals are built with
//! constructors and macros, so the knowledge base below:
//!
//! <pre>
//! parent(alice, bob).
//! parent(alice, charlie).
//! sibling(X, Y) :- parent(P, X), parent(P, Y).
//! </pre>
//!
//! is written in Rust as:
//!
//! ```
//! use entail::*;
//!
//! let mut universe = Universe::new();
//! universe.define(Clause::fact("parent", vec![atom!("alice"), atom!("bob")]));
//! universe.define(Clause::fact("parent", vec![atom!("alice"), atom!("charlie")]));
//! universe.define(Clause::rule("sibling", vec![var!("X"), var!("Y")],
//!     conj!(call!("parent", var!("P"), var!("X")),
//!           call!("parent", var!("P"), var!("Y")))));
//!
//! // Who is a sibling of whom?
//! for solution in universe.query(call!("sibling", var!("U"), var!("V"))) {
//!     println!("{}", format_solution(&solution));
//! }
//! // Prints 4 solutions:
//! // U = bob, V = bob
//! // U = bob, V = charlie
//! // U = charlie, V = bob
//! // U = charlie, V = charlie
//! ```
//!
//! Solutions are produced on demand: the search only runs while the
//! iterator is polled, and dropping it abandons the query at no cost.
//!
//! Arithmetic expressions are first-class terms. They unify
//! structurally, and are folded to numbers only by the evaluation goal
//! ([Goal::eval](goal/enum.Goal.html#method.eval), the Prolog `is`) and
//! the comparison goals:
//!
//! ```
//! use entail::*;
//!
//! let mut universe = Universe::new();
//! universe.define(Clause::rule("double", vec![var!("N"), var!("D")],
//!     Goal::eval(var!("D"), var!("N") * 2)));
//!
//! let solutions = universe.solve(call!("double", Term::Int(21), var!("D")),
//!                                &QueryOptions::default());
//! assert_eq!("D = 42", format_solution(&solutions[0]));
//! ```
//!
//! The remaining built-in goals are conjunction, disjunction,
//! unification, negation as failure, and the cut. The cut commits to
//! the choices made in the current clause: it prunes the clause's
//! remaining choice points and the remaining clauses of its predicate,
//! and nothing more.
//!
//! ## Crate layout
//!
//! The `query` binary (src/main.rs) is a small REPL over a demo
//! knowledge base. The subfolder /tests holds one scenario per file;
//! /benches holds a Criterion benchmark over the Fibonacci knowledge
//! base, which can be run with `cargo bench`.
//!
//! ## Diagnostics
//!
//! A query can be observed through a [Tracer](tracer/trait.Tracer.html)
//! (the verbose tracer prints an indented call/return trace), and the
//! library logs through the `log` facade; set `RUST_LOG=trace` to see
//! clause selection and consumed failures.

pub mod term;
pub mod scope;
pub mod errors;
pub mod bindings;
pub mod unify;
pub mod arithmetic;
pub mod goal;
pub mod knowledge_base;
pub mod tracer;
pub mod solve;
pub mod solve_and_or;
pub mod solutions;
pub mod universe;
pub mod timeout;

#[macro_use]
pub mod macros;

pub use term::*;
pub use scope::*;
pub use errors::*;
pub use bindings::*;
pub use unify::*;
pub use arithmetic::*;
pub use goal::*;
pub use knowledge_base::*;
pub use tracer::*;
pub use solve::*;
pub use solve_and_or::*;
pub use solutions::*;
pub use universe::*;
pub use timeout::*;
