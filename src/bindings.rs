//! An immutable set of equations between terms, with a cached
//! variable-to-term map.
//!
//! As the engine proves a goal, it accumulates equalities. A `Bindings`
//! value is such an accumulation: a solution, or partial solution, for
//! a goal. Computing the most-general unifier
//! ([mgu()](struct.Bindings.html#method.mgu)) brings the set into
//! solved form, where each left-hand side is a distinct variable.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use super::errors::Failure;
use super::solutions::Solution;
use super::term::{Term, Variable};
use super::unify::martelli_montanari;

/// An equation set with a cached lookup map.
///
/// The equations are the source of truth; the map caches equations
/// whose left-hand side is a variable, for fast lookup and for the
/// merge fast path. All operations return new values; a `Bindings` is
/// never mutated once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    equations: Vec<(Term, Term)>,
    map: HashMap<Variable, Term>,
}

impl Bindings {

    /// Creates an empty binding set.
    pub fn new() -> Bindings {
        Bindings { equations: vec![], map: HashMap::new() }
    }

    /// Builds a binding set from equations, deduplicating and caching
    /// variable left-hand sides.
    pub fn from_equations(eqs: Vec<(Term, Term)>) -> Bindings {
        let mut bindings = Bindings::new();
        for (left, right) in eqs {
            bindings.push_equation(left, right);
        }
        bindings
    }

    // Equation sets are sets: a duplicate equation is not recorded
    // twice. If a variable has several equations, the cache keeps the
    // first; mgu() is the authority on what the variable means.
    fn push_equation(&mut self, left: Term, right: Term) {
        let pair = (left, right);
        if self.equations.contains(&pair) { return; }
        if let Term::Var(v) = &pair.0 {
            if !self.map.contains_key(v) {
                self.map.insert(v.clone(), pair.1.clone());
            }
        }
        self.equations.push(pair);
    }

    /// The number of equations.
    pub fn len(&self) -> usize { self.equations.len() }

    /// True if there are no equations.
    pub fn is_empty(&self) -> bool { self.equations.is_empty() }

    /// The equations themselves.
    pub fn equations(&self) -> &[(Term, Term)] { &self.equations }

    /// Returns a new set extended with one equation.
    ///
    /// # Usage
    /// ```
    /// use entail::*;
    ///
    /// let b = Bindings::new().with_equation(var!("X"), Term::Int(7));
    /// assert_eq!(1, b.len());
    /// ```
    pub fn with_equation(&self, left: Term, right: Term) -> Bindings {
        let mut out = self.clone();
        out.push_equation(left, right);
        out
    }

    /// Set union of two binding sets.
    ///
    /// Fast path: if the cached maps bind a shared variable to two
    /// *ground* terms which are not equal, the union cannot possibly
    /// unify and None (the canonical failure value) is returned without
    /// running unification. Disagreements involving variables are left
    /// for [mgu()](struct.Bindings.html#method.mgu) to decide.
    ///
    /// # Arguments
    /// * `other`
    /// # Return
    /// * `Option` - Some(Bindings) or None
    pub fn merge(&self, other: &Bindings) -> Option<Bindings> {
        for (var, term) in &other.map {
            if let Some(known) = self.map.get(var) {
                if known != term && known.is_ground() && term.is_ground() {
                    return None;
                }
            }
        }
        let mut out = self.clone();
        for (left, right) in &other.equations {
            out.push_equation(left.clone(), right.clone());
        }
        Some(out)
    } // merge()

    /// Computes the most-general unifier of the equation set.
    ///
    /// Runs [Martelli–Montanari](../unify/fn.martelli_montanari.html)
    /// and returns a new set in solved form.
    ///
    /// # Return
    /// * `Result` - Ok(Bindings) or
    /// Err([Failure::Unification](../errors/enum.Failure.html#variant.Unification))
    /// # Usage
    /// ```
    /// use entail::*;
    ///
    /// let b = Bindings::new()
    ///     .with_equation(compound!("f", var!("X")), compound!("f", atom!("a")));
    /// let solved = b.mgu().unwrap();
    /// let x = Variable { name: "X".to_string(), scope: None };
    /// assert_eq!(&atom!("a"), solved.lookup(&x).unwrap());
    /// ```
    pub fn mgu(&self) -> Result<Bindings, Failure> {
        let solved = martelli_montanari(self.equations.clone())?;
        Ok(Bindings::from_equations(solved))
    } // mgu()

    /// Looks up the term a variable is bound to.
    ///
    /// # Arguments
    /// * `var`
    /// # Return
    /// * `Result` - Ok(&Term) or
    /// Err([Failure::Uninstantiated](../errors/enum.Failure.html#variant.Uninstantiated))
    pub fn lookup(&self, var: &Variable) -> Result<&Term, Failure> {
        match self.map.get(var) {
            Some(term) => Ok(term),
            None => Err(Failure::Uninstantiated(var.name.clone())),
        }
    } // lookup()

    /// Substitutes bound variables throughout a term, strictly.
    ///
    /// Every variable in the term must resolve to a bound term,
    /// recursively; an unbound variable is an error. This is the
    /// substitution used by arithmetic evaluation and comparison.
    ///
    /// # Arguments
    /// * `term`
    /// # Return
    /// * `Result` - Ok(new term) or
    /// Err([Failure::Uninstantiated](../errors/enum.Failure.html#variant.Uninstantiated))
    pub fn resolve(&self, term: &Term) -> Result<Term, Failure> {
        match term {
            Term::Var(v) => {
                let bound = self.lookup(v)?.clone();
                self.resolve(&bound)
            },
            Term::Anonymous => {
                Err(Failure::Uninstantiated("_".to_string()))
            },
            Term::Compound { name, args } => {
                let mut resolved = Vec::with_capacity(args.len());
                for arg in args { resolved.push(self.resolve(arg)?); }
                Ok(Term::Compound { name: name.clone(), args: resolved })
            },
            Term::EvalCompound { op, args } => {
                let mut resolved = Vec::with_capacity(args.len());
                for arg in args { resolved.push(self.resolve(arg)?); }
                Ok(Term::EvalCompound { op: *op, args: resolved })
            },
            _ => Ok(term.clone()),
        }
    } // resolve()

    /// Substitutes bound variables throughout a term, leniently.
    ///
    /// Unbound variables are left in place. Useful for displaying
    /// partial solutions.
    ///
    /// # Arguments
    /// * `term`
    /// # Return
    /// * `new term`
    pub fn apply(&self, term: &Term) -> Term {
        match term {
            Term::Var(v) => {
                match self.map.get(v) {
                    Some(bound) => self.apply(bound),
                    None => term.clone(),
                }
            },
            Term::Compound { name, args } => {
                let args = args.iter().map(|t| self.apply(t)).collect();
                Term::Compound { name: name.clone(), args }
            },
            Term::EvalCompound { op, args } => {
                let args = args.iter().map(|t| self.apply(t)).collect();
                Term::EvalCompound { op: *op, args }
            },
            _ => term.clone(),
        }
    } // apply()

    /// Projects the bindings onto the query scope.
    ///
    /// Produces the user-visible mapping, keyed by variable name,
    /// restricted to variables whose scope is 0. Clause-local variables
    /// and scoped anonymous variables never appear in it.
    ///
    /// # Return
    /// * [Solution](../solutions/type.Solution.html)
    pub fn project(&self) -> Solution {
        let mut out = BTreeMap::new();
        for (var, term) in &self.map {
            if var.scope == Some(crate::scope::QUERY_SCOPE) {
                out.insert(var.name.clone(), self.apply(term));
            }
        }
        out
    } // project()

} // impl Bindings

// Display trait. An empty binding set displays as "ok".
impl fmt::Display for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.equations.is_empty() { return write!(f, "ok"); }
        let parts: Vec<String> = self.equations.iter()
            .map(|(l, r)| format!("{} = {}", l, r))
            .collect();
        write!(f, "{{{}}}", parts.join(", "))
    } // fmt
} // fmt::Display


// test
