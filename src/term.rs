//! First-order terms: atoms, compounds, variables and constants.
//!
//! * Terms are immutable finite trees. Rebinding never mutates a term;
//! the engine records equations between terms in a
//! [Bindings](../bindings/struct.Bindings.html) set instead.
//! * A [Variable](../term/struct.Variable.html) is equal to another
//! variable only when both the name and the scope match. Clauses store
//! unscoped variables; scoping happens per invocation
//! (see [with_scope()](../term/enum.Term.html#method.with_scope)).

use std::fmt;

use super::arithmetic::ArithOp;
use super::scope::*;

/// A named logic variable with an optional scope tag.
///
/// `scope == None` means the variable has not been captured by any
/// clause invocation or query yet. This is the state of variables
/// inside knowledge-base clauses. `Some(0)` is the query scope; any
/// other value identifies one clause invocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    pub name: String,
    pub scope: Option<u64>,
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.scope {
            None | Some(QUERY_SCOPE) => write!(f, "{}", self.name),
            Some(scope) => {
                if self.name == "_" { write!(f, "_") }
                else { write!(f, "{}_{}", self.name, scope) }
            },
        }
    } // fmt
} // fmt::Display

/// A first-order term.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// A nullary symbol. Use [atom!](../macro.atom.html) to construct.
    Atom(String),
    /// 64-bit integer constant.
    Int(i64),
    /// 64-bit floating point constant.
    Float(f64),
    /// String constant. Unlike an [Atom](enum.Term.html#variant.Atom),
    /// this is foreign data, not a symbol.
    Str(String),
    /// A logic variable. Use [var!](../macro.var.html) to construct.
    Var(Variable),
    /// The anonymous variable. Every occurrence becomes a distinct
    /// fresh-scoped variable when it is scoped, so two anonymous
    /// variables never unify with each other.
    /// Use [anon!](../macro.anon.html) to construct.
    Anonymous,
    /// A functor with one or more children, eg. `parent(alice, bob)`.
    /// Use [compound!](../macro.compound.html) to construct.
    Compound { name: String, args: Vec<Term> },
    /// A compound carrying an arithmetic operator of matching arity.
    /// It unifies structurally like a plain compound whose functor is
    /// the operator symbol, but the evaluation and comparison goals
    /// recognize it and fold it to a number.
    EvalCompound { op: ArithOp, args: Vec<Term> },
}

impl Term {

    /// Makes an atom from a string slice.
    pub fn atom(name: &str) -> Term {
        Term::Atom(name.to_string())
    }

    /// Makes an unscoped logic variable.
    ///
    /// Unscoped variables are what clauses are written with. They are
    /// stamped with a scope when a clause is invoked or a query starts.
    pub fn var(name: &str) -> Term {
        Term::Var(Variable { name: name.to_string(), scope: None })
    }

    /// Makes a logic variable with an explicit scope.
    pub fn var_in(name: &str, scope: u64) -> Term {
        Term::Var(Variable { name: name.to_string(), scope: Some(scope) })
    }

    /// Makes a string constant.
    pub fn text(s: &str) -> Term {
        Term::Str(s.to_string())
    }

    /// Makes a compound term.
    ///
    /// # Panics
    /// * If `args` is empty. A compound has at least one child;
    /// a childless symbol is an [Atom](enum.Term.html#variant.Atom).
    /// # Usage
    /// ```
    /// use entail::*;
    ///
    /// let c = Term::compound("parent", vec![atom!("alice"), atom!("bob")]);
    /// assert_eq!("parent(alice, bob)", c.to_string());
    /// ```
    pub fn compound(name: &str, args: Vec<Term>) -> Term {
        if args.is_empty() {
            panic!("Term::compound() - A compound needs at least 1 child: {}", name);
        }
        Term::Compound { name: name.to_string(), args }
    }

    /// True if the term contains no variables, anonymous or named.
    ///
    /// # Usage
    /// ```
    /// use entail::*;
    ///
    /// let c = compound!("parent", atom!("alice"), var!("X"));
    /// assert!(!c.is_ground());
    /// let c = compound!("parent", atom!("alice"), atom!("bob"));
    /// assert!(c.is_ground());
    /// ```
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Var(_) | Term::Anonymous => false,
            Term::Compound { name: _, args } |
            Term::EvalCompound { op: _, args } => {
                args.iter().all(|t| t.is_ground())
            },
            _ => true,
        }
    } // is_ground()

    /// True if the given variable occurs anywhere in this term.
    ///
    /// This is the occurs-check used by
    /// [unification](../unify/index.html): a variable must not be bound
    /// to a term which properly contains it, otherwise terms would stop
    /// being finite trees.
    pub fn occurs(&self, var: &Variable) -> bool {
        match self {
            Term::Var(v) => v == var,
            Term::Compound { name: _, args } |
            Term::EvalCompound { op: _, args } => {
                args.iter().any(|t| t.occurs(var))
            },
            _ => false,
        }
    } // occurs()

    /// Rewrites the term into the given scope.
    ///
    /// * Unscoped variables receive `scope`.
    /// * Variables which already bear a scope are left alone, which
    /// makes the operation idempotent and preserves captured query
    /// variables.
    /// * Every occurrence of the anonymous variable becomes a distinct
    /// variable in a freshly allocated scope of its own.
    /// * Atoms and constants are unaffected.
    ///
    /// # Arguments
    /// * `scope` - scope id, from [next_scope_id()](../scope/fn.next_scope_id.html)
    /// or [QUERY_SCOPE](../scope/constant.QUERY_SCOPE.html)
    /// # Return
    /// * `new term`
    /// # Usage
    /// ```
    /// use entail::*;
    ///
    /// let c = compound!("parent", var!("X"), atom!("bob"));
    /// let c7 = c.with_scope(7);
    /// assert_eq!("parent(X_7, bob)", c7.to_string());
    /// // Re-scoping is a no-op.
    /// assert_eq!(c7, c7.with_scope(8));
    /// ```
    pub fn with_scope(&self, scope: u64) -> Term {
        match self {
            Term::Var(v) => {
                match v.scope {
                    Some(_) => self.clone(),
                    None => Term::Var(Variable { name: v.name.clone(),
                                                 scope: Some(scope) }),
                }
            },
            Term::Anonymous => {
                // Each occurrence gets a scope of its own, so that
                // f(_, _) never forces the two holes to agree.
                Term::Var(Variable { name: "_".to_string(),
                                     scope: Some(next_scope_id()) })
            },
            Term::Compound { name, args } => {
                let args = args.iter().map(|t| t.with_scope(scope)).collect();
                Term::Compound { name: name.clone(), args }
            },
            Term::EvalCompound { op, args } => {
                let args = args.iter().map(|t| t.with_scope(scope)).collect();
                Term::EvalCompound { op: *op, args }
            },
            _ => self.clone(),
        }
    } // with_scope()

    /// Replaces every occurrence of a variable with the given term.
    ///
    /// This is the substitution step of
    /// [Martelli–Montanari](../unify/fn.martelli_montanari.html).
    ///
    /// # Arguments
    /// * `var` - the variable to replace
    /// * `replacement`
    /// # Return
    /// * `new term`
    pub fn substitute(&self, var: &Variable, replacement: &Term) -> Term {
        match self {
            Term::Var(v) => {
                if v == var { replacement.clone() } else { self.clone() }
            },
            Term::Compound { name, args } => {
                let args = args.iter()
                               .map(|t| t.substitute(var, replacement))
                               .collect();
                Term::Compound { name: name.clone(), args }
            },
            Term::EvalCompound { op, args } => {
                let args = args.iter()
                               .map(|t| t.substitute(var, replacement))
                               .collect();
                Term::EvalCompound { op: *op, args }
            },
            _ => self.clone(),
        }
    } // substitute()

} // impl Term

impl From<i64> for Term {
    fn from(i: i64) -> Term { Term::Int(i) }
}

impl From<f64> for Term {
    fn from(f: f64) -> Term { Term::Float(f) }
}

// Display trait, to display terms.
impl fmt::Display for Term {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self {
            Term::Atom(s) => { write!(f, "{}", s) },
            Term::Int(i) => { write!(f, "{}", i) },
            Term::Float(fl) => { write!(f, "{}", fl) },
            Term::Str(s) => { write!(f, "\"{}\"", s) },
            Term::Var(v) => { write!(f, "{}", v) },
            Term::Anonymous => { write!(f, "_") },
            Term::Compound { name, args } => {
                let mut out = format!("{}(", name);
                let mut comma = false;
                for arg in args {
                    if comma { out += ", "; }
                    else { comma = true; }
                    out += &arg.to_string();
                }
                write!(f, "{})", out)
            },
            Term::EvalCompound { op, args } => {
                if args.len() == 1 {
                    write!(f, "{}{}", op.symbol(), args[0])
                }
                else {
                    let parts: Vec<String> =
                        args.iter().map(|t| t.to_string()).collect();
                    write!(f, "({})", parts.join(&format!(" {} ", op.symbol())))
                }
            },
        } // match
    } // fmt
} // fmt::Display


// test
