//! Predicates, clauses and the knowledge base.
//!
//! A predicate is identified by its [Signature](struct.Signature.html):
//! functor name plus arity. For the rule
//! <blockquote>
//! sibling(X, Y) :- parent(P, X), parent(P, Y).
//! </blockquote>
//! the signature is `sibling/2`.
//!
//! The knowledge base maps signatures to predicates. Each predicate
//! keeps its clauses in definition order, which is also the
//! backtracking order. No clause is ever removed while a query runs.

use std::collections::HashMap;
use std::fmt;

use log::debug;

use super::goal::Goal;
use super::term::Term;
use super::timeout::query_stopped;

/// A predicate identifier: functor name and arity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    pub name: String,
    pub arity: usize,
}

impl Signature {
    /// Makes a signature.
    pub fn new(name: &str, arity: usize) -> Signature {
        Signature { name: name.to_string(), arity }
    }
}

// Display trait: `sibling/2`.
impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
} // fmt::Display

/// A fact or rule: head arguments and a body goal.
///
/// Facts are clauses whose body is [Goal::True](../goal/enum.Goal.html#variant.True).
/// Variables in a stored clause are unscoped; they are stamped with a
/// fresh scope on every invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub signature: Signature,
    pub args: Vec<Term>,
    pub body: Goal,
}

impl Clause {

    /// Makes a fact. The body defaults to `true`.
    ///
    /// # Usage
    /// ```
    /// use entail::*;
    ///
    /// let fact = Clause::fact("parent", vec![atom!("alice"), atom!("bob")]);
    /// assert_eq!("parent(alice, bob).", fact.to_string());
    /// ```
    pub fn fact(name: &str, args: Vec<Term>) -> Clause {
        let signature = Signature::new(name, args.len());
        Clause { signature, args, body: Goal::True }
    }

    /// Makes a rule.
    ///
    /// # Usage
    /// ```
    /// use entail::*;
    ///
    /// let rule = Clause::rule("sibling", vec![var!("X"), var!("Y")],
    ///     conj!(call!("parent", var!("P"), var!("X")),
    ///           call!("parent", var!("P"), var!("Y"))));
    /// assert_eq!("sibling(X, Y) :- parent(P, X), parent(P, Y).",
    ///            rule.to_string());
    /// ```
    pub fn rule(name: &str, args: Vec<Term>, body: Goal) -> Clause {
        let signature = Signature::new(name, args.len());
        Clause { signature, args, body }
    }

} // impl Clause

// Display trait, to display facts and rules.
impl fmt::Display for Clause {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let head = if self.args.is_empty() {
            self.signature.name.clone()
        }
        else {
            let parts: Vec<String> =
                self.args.iter().map(|t| t.to_string()).collect();
            format!("{}({})", self.signature.name, parts.join(", "))
        };
        if self.body == Goal::True {
            write!(f, "{}.", head)
        }
        else {
            write!(f, "{} :- {}.", head, self.body)
        }
    } // fmt

} // fmt::Display

/// A signature together with its ordered clauses.
#[derive(Debug, Clone)]
pub struct Predicate {
    pub signature: Signature,
    pub clauses: Vec<Clause>,
}

pub type KnowledgeBase = HashMap<Signature, Predicate>;

/// Adds a clause to a knowledge base.
///
/// A clause with a fresh signature creates the predicate; otherwise it
/// is appended to the existing ordered list.
///
/// # Arguments
/// * `kb` - Knowledge Base
/// * `clause`
/// # Usage
/// ```
/// use entail::*;
///
/// let mut kb = KnowledgeBase::new();
/// add_clause(&mut kb, Clause::fact("vehicle", vec![atom!("car")]));
/// add_clause(&mut kb, Clause::fact("vehicle", vec![atom!("train")]));
/// assert_eq!(2, count_clauses(&kb, &Signature::new("vehicle", 1)));
/// ```
pub fn add_clause(kb: &mut KnowledgeBase, clause: Clause) {
    debug!("define {}", clause);
    let signature = clause.signature.clone();
    match kb.get_mut(&signature) {
        Some(predicate) => { predicate.clauses.push(clause); },
        None => {
            kb.insert(signature.clone(),
                      Predicate { signature, clauses: vec![clause] });
        },
    } // match
} // add_clause()

/// Counts the clauses of the given predicate.
///
/// When the query watchdog has tripped, this function returns 0, which
/// lets the resolver back out of the search.
///
/// # Arguments
/// * `kb` - Knowledge Base
/// * `signature`
/// # Return
/// * number of clauses
pub fn count_clauses(kb: &KnowledgeBase, signature: &Signature) -> usize {

    if query_stopped() { return 0; }

    match kb.get(signature) {
        Some(predicate) => predicate.clauses.len(),
        None => 0,
    }

} // count_clauses()

/// Fetches a clause by signature and index.
///
/// The returned clause still holds unscoped variables; the caller is
/// responsible for renaming it into a fresh scope before use.
///
/// # Arguments
/// * `kb` - Knowledge Base
/// * `signature`
/// * `index`
/// # Return
/// * `Option` - Some(&Clause) or None
pub fn get_clause<'a>(kb: &'a KnowledgeBase, signature: &Signature,
                      index: usize) -> Option<&'a Clause> {
    match kb.get(signature) {
        Some(predicate) => predicate.clauses.get(index),
        None => None,
    }
} // get_clause()

/// Formats the knowledge base for display. Use for debugging.
///
/// # Note
/// * The signatures are sorted.
/// * KnowledgeBase is a type alias, so the Display trait cannot be
///   implemented for it.
/// # Arguments
/// * `kb` - Knowledge Base
/// # Return
/// * `String`
/// # Usage
/// ```
/// use entail::*;
///
/// let kb = test_kb();
/// println!("{}", format_kb(&kb));
/// ```
/// The above will print:
/// <pre>
/// _____ Contents of Knowledge Base _____
/// parent/2
/// 	parent(alice, bob).
/// 	parent(alice, charlie).
/// sibling/2
/// 	sibling(X, Y) :- parent(P, X), parent(P, Y).
/// ______________________________________
/// </pre>
pub fn format_kb(kb: &KnowledgeBase) -> String {

    let mut out = "_____ Contents of Knowledge Base _____\n".to_string();

    let mut signatures: Vec<&Signature> = kb.keys().collect();
    signatures.sort_by_key(|s| (s.name.clone(), s.arity));

    for signature in signatures {
        out += &format!("{}\n", signature);
        let predicate = &kb[signature];
        for clause in &predicate.clauses {
            out += &format!("\t{}\n", clause);
        }
    }

    out += "______________________________________";
    out

} // format_kb()

/// Prints a formatted knowledge base. Use for debugging.
pub fn print_kb(kb: &KnowledgeBase) {
    println!("{}", format_kb(kb));
} // print_kb()


/// Creates a knowledge base with a few facts and a rule for testing.
///
/// <blockquote>
/// parent(alice, bob).<br>
/// parent(alice, charlie).<br>
/// sibling(X, Y) :- parent(P, X), parent(P, Y).<br>
/// </blockquote>
///
/// # Usage
/// ```
/// use entail::*;
///
/// let kb = test_kb();
/// ```
pub fn test_kb() -> KnowledgeBase {

    let mut kb = KnowledgeBase::new();

    add_clause(&mut kb, Clause::fact("parent",
        vec![Term::atom("alice"), Term::atom("bob")]));
    add_clause(&mut kb, Clause::fact("parent",
        vec![Term::atom("alice"), Term::atom("charlie")]));

    // sibling(X, Y) :- parent(P, X), parent(P, Y).
    let body = Goal::And(vec![
        Goal::call("parent", vec![Term::var("P"), Term::var("X")]),
        Goal::call("parent", vec![Term::var("P"), Term::var("Y")]),
    ]);
    add_clause(&mut kb, Clause::rule("sibling",
        vec![Term::var("X"), Term::var("Y")], body));

    kb

} // test_kb()


// test
