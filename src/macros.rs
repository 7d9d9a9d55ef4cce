//! Utilities for creating terms and goals.
//!
//! [atom!](../macro.atom.html) - Makes an atom from a string slice.<br>
//! [var!](../macro.var.html) - Creates a logic variable.<br>
//! [anon!](../macro.anon.html) - Creates an anonymous variable.<br>
//! [compound!](../macro.compound.html) - Creates a compound term.<br>
//! [conj!](../macro.conj.html) - Creates a conjunction of goals.<br>
//! [disj!](../macro.disj.html) - Creates a disjunction of goals.<br>
//! [unify!](../macro.unify.html) - Creates a unification goal.<br>
//! [call!](../macro.call.html) - Creates a predicate-call goal.

/// Makes an atom from a string slice.
///
/// Atoms are nullary symbols. In the fact `parent(alice, bob)`, the
/// terms `alice` and `bob` are atoms (and `parent` is the functor).
///
/// # Usage
/// ```
/// use entail::*;
///
/// let who = atom!("alice");
/// ```
#[macro_export]
macro_rules! atom {
    ($name:expr) => {
        $crate::term::Term::Atom($name.to_string())
    };
}

/// Creates a logic variable from a string slice, with an optional
/// scope.
///
/// Without a scope argument, the variable is unscoped, which is the
/// right state for variables written into clauses and queries; the
/// engine stamps scopes at invocation time.
///
/// # Usage
/// ```
/// use entail::*;
///
/// let x = var!("X");          // unscoped
/// let y = var!("Y", 3);       // scope 3
/// ```
#[macro_export]
macro_rules! var {
    ($name:expr) => {
        $crate::term::Term::var($name)
    };
    ($name:expr, $scope:expr) => {
        $crate::term::Term::var_in($name, $scope)
    };
}

/// Creates an anonymous variable.
///
/// Every textual occurrence scopes to a distinct variable, so
/// `f(_, _)` unifies with `f(a, b)`.
///
/// # Usage
/// ```
/// use entail::*;
///
/// let dont_care = anon!();
/// ```
#[macro_export]
macro_rules! anon {
    () => { $crate::term::Term::Anonymous };
}

/// Creates a compound term: a functor with at least one child.
///
/// # Usage
/// ```
/// use entail::*;
///
/// let c = compound!("parent", atom!("alice"), var!("X"));
/// assert_eq!("parent(alice, X)", c.to_string());
/// ```
#[macro_export]
macro_rules! compound {
    ($name:expr, $($term:expr),+ $(,)?) => {
        $crate::term::Term::compound($name, vec!($($term),+))
    };
}

/// Creates a conjunction from a list of goals.
///
/// # Usage
/// ```
/// use entail::*;
///
/// // parent(P, X), parent(P, Y)
/// let and = conj!(call!("parent", var!("P"), var!("X")),
///                 call!("parent", var!("P"), var!("Y")));
/// ```
#[macro_export]
macro_rules! conj {
    ($($goal:expr),* $(,)?) => {
        $crate::goal::Goal::And(vec!($($goal),*))
    };
}

/// Creates a disjunction from a list of goals.
///
/// # Usage
/// ```
/// use entail::*;
///
/// // mother(X, Y); father(X, Y)
/// let or = disj!(call!("mother", var!("X"), var!("Y")),
///                call!("father", var!("X"), var!("Y")));
/// ```
#[macro_export]
macro_rules! disj {
    ($($goal:expr),* $(,)?) => {
        $crate::goal::Goal::Or(vec!($($goal),*))
    };
}

/// Creates a unification goal.
///
/// `unify!(x, 7)` proves when its two terms unify, binding as needed.
///
/// # Usage
/// ```
/// use entail::*;
///
/// let goal = unify!(var!("X"), Term::Int(7));
/// assert_eq!("X = 7", goal.to_string());
/// ```
#[macro_export]
macro_rules! unify {
    ($left:expr, $right:expr) => {
        $crate::goal::Goal::Unify($left, $right)
    };
}

/// Creates a predicate-call goal.
///
/// # Usage
/// ```
/// use entail::*;
///
/// let goal = call!("parent", atom!("alice"), var!("X"));
/// assert_eq!("parent(alice, X)", goal.to_string());
///
/// // Zero-arity calls are allowed.
/// let goal = call!("halt");
/// assert_eq!("halt", goal.to_string());
/// ```
#[macro_export]
macro_rules! call {
    ($name:expr) => {
        $crate::goal::Goal::Call { name: $name.to_string(), args: vec![] }
    };
    ($name:expr, $($term:expr),+ $(,)?) => {
        $crate::goal::Goal::Call { name: $name.to_string(),
                                   args: vec!($($term),+) }
    };
}
