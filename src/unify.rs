//! Martelli–Montanari unification over an equation set.
//!
//! The algorithm rewrites a set of equations `(A, B)` until every
//! equation has been tried without further change. The surviving set is
//! in solved form: each left-hand side is a distinct variable, and no
//! left-hand variable appears in any right-hand side. Failure to unify
//! reports [Failure::Unification](../errors/enum.Failure.html#variant.Unification).
//!
//! The occurs-check is mandatory; term graphs never contain cycles.

use super::errors::Failure;
use super::term::Term;

/// A uniform (functor, children) view over atoms, compounds and
/// eval-compounds. The functor of an eval-compound is its operator
/// symbol, so arithmetic terms unify structurally.
fn functor_view(term: &Term) -> Option<(&str, &[Term])> {
    match term {
        Term::Atom(name) => Some((name, &[])),
        Term::Compound { name, args } => Some((name, args)),
        Term::EvalCompound { op, args } => Some((op.symbol(), args)),
        _ => None,
    }
} // functor_view()

/// Value equality of foreign constants.
///
/// Returns None unless both terms are constants. Numbers compare by
/// value, with integer-to-float promotion: `1` and `1.0` are equal.
fn constants_equal(a: &Term, b: &Term) -> Option<bool> {
    use Term::{Float, Int, Str};
    match (a, b) {
        (Int(x), Int(y)) => Some(x == y),
        (Float(x), Float(y)) => Some(x == y),
        (Int(x), Float(y)) | (Float(y), Int(x)) => Some(*x as f64 == *y),
        (Str(x), Str(y)) => Some(x == y),
        (Int(_) | Float(_) | Str(_), Int(_) | Float(_) | Str(_)) => Some(false),
        _ => None,
    }
} // constants_equal()

/// Rewrites an equation set into solved form.
///
/// Rules, applied to any equation not yet tried:
///
/// 1. **Delete.** Syntactically equal sides, or an anonymous variable
/// on either side: discard the equation.
/// 2. **Swap.** A non-variable on the left of a variable: flip.
/// 3. **Eliminate.** A variable on the left: occurs-check, then
/// substitute it throughout the rest of the set, keeping the equation.
/// 4. **Decompose.** Two compounds (or atoms) with the same functor and
/// arity: replace with the zipped equations of their children;
/// different functor or arity is a conflict.
/// 5. **Constants.** Two foreign constants: equal values delete,
/// unequal values conflict. A constant against a compound or atom is
/// a conflict as well.
///
/// # Arguments
/// * `eqs` - equations
/// # Return
/// * `Result` - Ok(solved equations) or
/// Err([Failure::Unification](../errors/enum.Failure.html#variant.Unification))
/// # Usage
/// ```
/// use entail::*;
///
/// // f(X, b) = f(a, b)
/// let left  = compound!("f", Term::var_in("X", 1), atom!("b"));
/// let right = compound!("f", atom!("a"), atom!("b"));
/// let solved = martelli_montanari(vec![(left, right)]).unwrap();
/// assert_eq!(1, solved.len());
/// assert_eq!("X_1", solved[0].0.to_string());
/// assert_eq!("a", solved[0].1.to_string());
/// ```
pub fn martelli_montanari(mut eqs: Vec<(Term, Term)>)
                          -> Result<Vec<(Term, Term)>, Failure> {

    // `tried` counts consecutive equations which changed nothing.
    // Once it reaches the set size, the set is in solved form.
    let mut tried = 0;
    let mut idx = 0;

    while !eqs.is_empty() && tried < eqs.len() {

        if idx >= eqs.len() { idx = 0; }
        let (a, b) = eqs[idx].clone();

        // Delete.
        if a == Term::Anonymous || b == Term::Anonymous || a == b {
            eqs.remove(idx);
            tried = 0;
            continue;
        }

        // Swap.
        if !matches!(a, Term::Var(_)) && matches!(b, Term::Var(_)) {
            eqs[idx] = (b, a);
            tried = 0;
            continue;
        }

        // Eliminate (substitute).
        if let Term::Var(v) = &a {
            if b.occurs(v) {
                return Err(Failure::occurs_check(&a, &b));
            }
            let mut changed = false;
            for (i, (left, right)) in eqs.iter_mut().enumerate() {
                if i == idx { continue; }
                let new_left = left.substitute(v, &b);
                let new_right = right.substitute(v, &b);
                if new_left != *left { *left = new_left; changed = true; }
                if new_right != *right { *right = new_right; changed = true; }
            }
            if changed { tried = 0; } else { tried += 1; }
            idx += 1;
            continue;
        }

        // Decompose (peel).
        if let (Some((name_a, kids_a)), Some((name_b, kids_b))) =
               (functor_view(&a), functor_view(&b)) {
            if name_a == name_b && kids_a.len() == kids_b.len() {
                let children: Vec<(Term, Term)> =
                    kids_a.iter().cloned()
                          .zip(kids_b.iter().cloned())
                          .collect();
                eqs.remove(idx);
                eqs.extend(children);
                tried = 0;
                continue;
            }
            return Err(Failure::conflict(&a, &b));
        }

        // Foreign constants.
        if let Some(equal) = constants_equal(&a, &b) {
            if equal {
                eqs.remove(idx);
                tried = 0;
                continue;
            }
            return Err(Failure::conflict(&a, &b));
        }

        // A structured term against a constant cannot unify.
        return Err(Failure::conflict(&a, &b));

    } // while

    Ok(eqs)

} // martelli_montanari()


#[cfg(test)]
mod test {

    use crate::*;

    fn x() -> Term { Term::var_in("X", 1) }
    fn y() -> Term { Term::var_in("Y", 2) }

    // Equal sides are deleted.
    #[test]
    fn test_delete() {
        let eqs = vec![(atom!("a"), atom!("a")), (x(), x())];
        let solved = martelli_montanari(eqs).unwrap();
        assert!(solved.is_empty());
    }

    // A variable always moves to the left.
    #[test]
    fn test_swap() {
        let eqs = vec![(atom!("a"), x())];
        let solved = martelli_montanari(eqs).unwrap();
        assert_eq!((x(), atom!("a")), solved[0]);
    }

    // f(X, b) = f(a, Y) decomposes and solves both variables.
    #[test]
    fn test_decompose() {
        let left = compound!("f", x(), atom!("b"));
        let right = compound!("f", atom!("a"), y());
        let solved = martelli_montanari(vec![(left, right)]).unwrap();
        assert_eq!(2, solved.len());
        assert!(solved.contains(&(x(), atom!("a"))));
        assert!(solved.contains(&(y(), atom!("b"))));
    }

    // Different functors or arities conflict.
    #[test]
    fn test_decompose_conflict() {
        let left = compound!("f", atom!("a"));
        let right = compound!("g", atom!("a"));
        assert!(martelli_montanari(vec![(left, right)]).is_err());

        let left = compound!("f", atom!("a"));
        let right = compound!("f", atom!("a"), atom!("b"));
        assert!(martelli_montanari(vec![(left, right)]).is_err());
    }

    // Substitution resolves chains: X = Y, Y = 3.
    #[test]
    fn test_eliminate_chain() {
        let eqs = vec![(x(), y()), (y(), Term::Int(3))];
        let solved = martelli_montanari(eqs).unwrap();
        assert_eq!(2, solved.len());
        assert!(solved.contains(&(x(), Term::Int(3))));
        assert!(solved.contains(&(y(), Term::Int(3))));
    }

    // X = f(X) must fail the occurs-check.
    #[test]
    fn test_occurs_check() {
        let eqs = vec![(x(), compound!("f", x()))];
        match martelli_montanari(eqs) {
            Err(Failure::Unification(msg)) => {
                assert!(msg.contains("occurs"));
            },
            other => panic!("Expected occurs-check failure, got {:?}", other),
        }
    }

    // Constants compare by value, with numeric promotion.
    #[test]
    fn test_constants() {
        let eqs = vec![(Term::Int(1), Term::Float(1.0))];
        assert!(martelli_montanari(eqs).unwrap().is_empty());

        let eqs = vec![(Term::Int(1), Term::Int(2))];
        assert!(martelli_montanari(eqs).is_err());

        let eqs = vec![(Term::text("a"), Term::text("a"))];
        assert!(martelli_montanari(eqs).unwrap().is_empty());

        // A number is not an atom.
        let eqs = vec![(Term::Int(1), atom!("1"))];
        assert!(martelli_montanari(eqs).is_err());
    }

    // The anonymous variable unifies with anything, without binding.
    #[test]
    fn test_anonymous() {
        let eqs = vec![(Term::Anonymous, compound!("f", atom!("a")))];
        assert!(martelli_montanari(eqs).unwrap().is_empty());
    }

    // Arithmetic terms unify structurally, by operator symbol and arity.
    #[test]
    fn test_eval_compound_unification() {
        let left = x() + 1;
        let right = atom!("b") + 1;
        let solved = martelli_montanari(vec![(left, right)]).unwrap();
        assert_eq!(vec![(x(), atom!("b"))], solved);

        // Different operators conflict.
        let left = x() + 1;
        let right = x() * 1;
        assert!(martelli_montanari(vec![(left, right)]).is_err());
    }

} // test
