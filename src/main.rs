//! This crate demonstrates the use of the Entail library crate.
//!
//! Entail implements a knowledge base and a resolution engine; clauses
//! are built in Rust code, not parsed from source text. This binary
//! loads a small demo knowledge base and prompts for queries.
//!
use std::io;
use std::io::{stdout, Write};

use entail::*;

const QUERY_TIMEOUT: u64 = 1000; // milliseconds

/// The `query` binary prompts for queries against a demo knowledge base.
///
/// # Usage
/// ```text
/// cargo run
/// ```
/// The program will prompt for a query:
/// ```text
/// ?- sibling(U, V).
/// ```
/// It answers with the first solution. Press `;` and Enter for the
/// next solution; `.` or Enter alone stops:
/// ```text
/// U = bob, V = bob ;
/// U = bob, V = charlie ;
/// U = charlie, V = bob ;
/// U = charlie, V = charlie ;
/// No more.
/// ?-
/// ```
///
/// Identifiers starting with an upper-case letter or an underscore are
/// variables; everything else is an atom. Integers, floats and
/// double-quoted strings are constants. An empty query line exits.
fn main() {

    env_logger::init();

    let universe = demo_universe();

    println!("\nEntail - an embeddable resolution engine.\n");
    println!("The demo knowledge base defines:");
    println!("{}\n", format_kb(universe.kb()));
    println!("Example queries:");
    println!("   sibling(U, V).");
    println!("   ancestor(alice, D).");
    println!("   fib(10, R).\n");

    loop {

        // Get a query from stdin.
        print!("?- ");
        let _ = stdout().flush();
        let mut input = String::new();
        io::stdin().read_line(&mut input).expect("Enter a query.");

        let input = input.trim().to_string();
        if input.is_empty() { break; }

        match parse_query(&input) {
            Ok(goal) => { run_query(&universe, goal); },
            Err(err) => { println!("{}", err); },
        } // match

    } // loop

} // main()

/// Streams solutions one at a time; `;` demands the next.
fn run_query(universe: &Universe, goal: Goal) {

    let mut solutions = universe.query(goal);

    loop {

        let timer = start_query_timer(QUERY_TIMEOUT);
        let solution = solutions.next();
        cancel_timer(timer);

        if query_stopped() {
            println!("Query timed out after {} milliseconds.", QUERY_TIMEOUT);
            return;
        }

        match solution {
            Some(solution) => {
                print!("{} ", format_solution(&solution));
                let _ = stdout().flush();
                let mut input = String::new();
                io::stdin().read_line(&mut input).expect("");
                if input.trim() != ";" { return; }
            },
            None => {
                println!("No more.");
                return;
            },
        } // match

    } // loop

} // run_query()

/// Builds the demo knowledge base: the family program and Fibonacci.
fn demo_universe() -> Universe {

    let mut universe = Universe::new();

    universe.define(Clause::fact("parent", vec![atom!("alice"), atom!("bob")]));
    universe.define(Clause::fact("parent", vec![atom!("alice"), atom!("charlie")]));
    universe.define(Clause::fact("parent", vec![atom!("bob"), atom!("dora")]));

    // sibling(X, Y) :- parent(P, X), parent(P, Y).
    universe.define(Clause::rule("sibling", vec![var!("X"), var!("Y")],
        conj!(call!("parent", var!("P"), var!("X")),
              call!("parent", var!("P"), var!("Y")))));

    // ancestor(X, Y) :- parent(X, Y).
    // ancestor(X, Y) :- parent(X, Z), ancestor(Z, Y).
    universe.define(Clause::rule("ancestor", vec![var!("X"), var!("Y")],
        call!("parent", var!("X"), var!("Y"))));
    universe.define(Clause::rule("ancestor", vec![var!("X"), var!("Y")],
        conj!(call!("parent", var!("X"), var!("Z")),
              call!("ancestor", var!("Z"), var!("Y")))));

    // fib(0, 1). fib(1, 2).
    // fib(N, R) :- N > 1, N1 <- N - 1, N2 <- N - 2,
    //              fib(N1, R1), fib(N2, R2), R <- R1 + R2.
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

} // demo_universe()


// ---------------------------------------------------------------
// A minimal reader for query expressions. Clause surface syntax is
// out of scope for the library; this covers just enough to type
// queries at the prompt: comma-separated calls over atoms,
// variables, numbers and nested compounds.
// ---------------------------------------------------------------

struct Reader {
    chars: Vec<char>,
    pos: usize,
}

impl Reader {

    fn new(text: &str) -> Reader {
        Reader { chars: text.chars().collect(), pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() { self.pos += 1; }
        ch
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() { self.pos += 1; }
            else { break; }
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), String> {
        self.skip_whitespace();
        match self.advance() {
            Some(ch) if ch == expected => Ok(()),
            Some(ch) => Err(format!("Expected '{}', found '{}'.", expected, ch)),
            None => Err(format!("Expected '{}', found end of input.", expected)),
        }
    }

    fn read_name(&mut self) -> Result<String, String> {
        self.skip_whitespace();
        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                name.push(ch);
                self.pos += 1;
            }
            else { break; }
        }
        if name.is_empty() {
            Err("Expected a name.".to_string())
        }
        else { Ok(name) }
    } // read_name()

    fn read_number(&mut self) -> Result<Term, String> {
        self.skip_whitespace();
        let mut text = String::new();
        if self.peek() == Some('-') {
            text.push('-');
            self.pos += 1;
        }
        let mut is_float = false;
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() { text.push(ch); self.pos += 1; }
            else if ch == '.' && !is_float
                 && matches!(self.chars.get(self.pos + 1),
                             Some(d) if d.is_ascii_digit()) {
                is_float = true;
                text.push(ch);
                self.pos += 1;
            }
            else { break; }
        }
        if is_float {
            text.parse::<f64>().map(Term::Float)
                .map_err(|_| format!("Bad number: {}", text))
        }
        else {
            text.parse::<i64>().map(Term::Int)
                .map_err(|_| format!("Bad number: {}", text))
        }
    } // read_number()

    fn read_term(&mut self) -> Result<Term, String> {
        self.skip_whitespace();
        match self.peek() {
            None => Err("Expected a term.".to_string()),
            Some('"') => {
                self.pos += 1;
                let mut text = String::new();
                loop {
                    match self.advance() {
                        Some('"') => return Ok(Term::Str(text)),
                        Some(ch) => text.push(ch),
                        None => return Err("Unterminated string.".to_string()),
                    }
                }
            },
            Some(ch) if ch.is_ascii_digit() || ch == '-' => self.read_number(),
            _ => {
                let name = self.read_name()?;
                self.skip_whitespace();
                if self.peek() == Some('(') {
                    let args = self.read_args()?;
                    return Ok(Term::compound(&name, args));
                }
                if name == "_" { return Ok(Term::Anonymous); }
                let first = name.chars().next().unwrap_or('a');
                if first.is_uppercase() || first == '_' {
                    Ok(Term::var(&name))
                }
                else {
                    Ok(Term::Atom(name))
                }
            },
        }
    } // read_term()

    fn read_args(&mut self) -> Result<Vec<Term>, String> {
        self.expect('(')?;
        let mut args = vec![self.read_term()?];
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(',') => { self.pos += 1; args.push(self.read_term()?); },
                Some(')') => { self.pos += 1; return Ok(args); },
                _ => return Err("Expected ',' or ')'.".to_string()),
            }
        }
    } // read_args()

    fn read_call(&mut self) -> Result<Goal, String> {
        let name = self.read_name()?;
        self.skip_whitespace();
        if self.peek() == Some('(') {
            let args = self.read_args()?;
            Ok(Goal::Call { name, args })
        }
        else {
            Ok(Goal::Call { name, args: vec![] })
        }
    } // read_call()

} // impl Reader

/// Parses a query: one or more predicate calls separated by commas,
/// with an optional final period.
fn parse_query(text: &str) -> Result<Goal, String> {

    let mut reader = Reader::new(text);
    let mut goals = vec![reader.read_call()?];

    loop {
        reader.skip_whitespace();
        match reader.peek() {
            Some(',') => { reader.pos += 1; goals.push(reader.read_call()?); },
            Some('.') => { reader.pos += 1; },
            None => { break; },
            Some(ch) => { return Err(format!("Unexpected '{}'.", ch)); },
        }
    }

    if goals.len() == 1 { Ok(goals.remove(0)) }
    else { Ok(Goal::And(goals)) }

} // parse_query()
