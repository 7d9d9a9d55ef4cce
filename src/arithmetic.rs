//! Arithmetic and comparison over terms.
//!
//! Arithmetic expressions are first-class terms: an
//! [EvalCompound](../term/enum.Term.html#variant.EvalCompound) carries
//! an [ArithOp](../arithmetic/enum.ArithOp.html) and unifies
//! structurally like any other compound. Only the evaluation and
//! comparison goals fold such terms into numbers.
//!
//! If all operands of an operator are integers, the result stays an
//! integer (except for `/`, which is true division and always produces
//! a float). One float operand promotes the whole operation to floats.

use std::fmt;

use super::errors::Failure;
use super::term::Term;

/// The arithmetic operators recognized by the evaluator.
///
/// Unary: `+` `-`. Binary: `+` `-` `*` `/` `//` `%` `@` `**` `<<` `>>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    /// Unary plus.
    Pos,
    /// Unary minus.
    Neg,
    Add,
    Sub,
    Mul,
    /// True division. Always produces a float.
    Div,
    /// Floor division. Integral for integer operands.
    FloorDiv,
    /// Remainder, with the sign convention of floor division.
    Rem,
    /// Matrix multiplication. Defined for no numeric operands; kept so
    /// the operator set is complete, it always fails to evaluate.
    MatMul,
    /// Power.
    Pow,
    /// Left shift (integers only).
    Shl,
    /// Arithmetic right shift (integers only).
    Shr,
}

impl ArithOp {

    /// The operator's symbol, which also acts as the functor name
    /// during unification.
    pub fn symbol(&self) -> &'static str {
        match self {
            ArithOp::Pos => "+",
            ArithOp::Neg => "-",
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::FloorDiv => "//",
            ArithOp::Rem => "%",
            ArithOp::MatMul => "@",
            ArithOp::Pow => "**",
            ArithOp::Shl => "<<",
            ArithOp::Shr => ">>",
        }
    } // symbol()

    /// The number of operands the operator takes.
    pub fn arity(&self) -> usize {
        match self {
            ArithOp::Pos | ArithOp::Neg => 1,
            _ => 2,
        }
    } // arity()

    /// Applies the operator to evaluated operands.
    ///
    /// # Arguments
    /// * `args` - operand values
    /// # Return
    /// * `Result` - Ok([Num](../arithmetic/enum.Num.html))
    /// or Err([Failure::Eval](../errors/enum.Failure.html#variant.Eval))
    pub fn apply(&self, args: &[Num]) -> Result<Num, Failure> {

        if args.len() != self.arity() {
            return Err(Failure::Eval(format!(
                "operator {} takes {} operand(s), got {}",
                self.symbol(), self.arity(), args.len())));
        }

        match self {
            ArithOp::Pos => Ok(args[0]),
            ArithOp::Neg => {
                match args[0] {
                    Num::Int(i) => {
                        match i.checked_neg() {
                            Some(n) => Ok(Num::Int(n)),
                            None => Err(overflow(self)),
                        }
                    },
                    Num::Float(f) => Ok(Num::Float(-f)),
                }
            },
            ArithOp::Add => {
                match (args[0], args[1]) {
                    (Num::Int(a), Num::Int(b)) => {
                        a.checked_add(b).map(Num::Int).ok_or_else(|| overflow(self))
                    },
                    (a, b) => Ok(Num::Float(a.as_f64() + b.as_f64())),
                }
            },
            ArithOp::Sub => {
                match (args[0], args[1]) {
                    (Num::Int(a), Num::Int(b)) => {
                        a.checked_sub(b).map(Num::Int).ok_or_else(|| overflow(self))
                    },
                    (a, b) => Ok(Num::Float(a.as_f64() - b.as_f64())),
                }
            },
            ArithOp::Mul => {
                match (args[0], args[1]) {
                    (Num::Int(a), Num::Int(b)) => {
                        a.checked_mul(b).map(Num::Int).ok_or_else(|| overflow(self))
                    },
                    (a, b) => Ok(Num::Float(a.as_f64() * b.as_f64())),
                }
            },
            ArithOp::Div => {
                let divisor = args[1].as_f64();
                if divisor == 0.0 { return Err(zero_division(self)); }
                Ok(Num::Float(args[0].as_f64() / divisor))
            },
            ArithOp::FloorDiv => {
                match (args[0], args[1]) {
                    (Num::Int(_), Num::Int(0)) => Err(zero_division(self)),
                    (Num::Int(a), Num::Int(b)) => {
                        match a.checked_div(b) {
                            Some(q) => {
                                // `/` truncates toward zero; floor steps
                                // down when the signs differ and the
                                // division is inexact.
                                let q = if a % b != 0 && (a < 0) != (b < 0) {
                                    q - 1
                                } else { q };
                                Ok(Num::Int(q))
                            },
                            None => Err(overflow(self)),
                        }
                    },
                    (a, b) => {
                        let divisor = b.as_f64();
                        if divisor == 0.0 { return Err(zero_division(self)); }
                        Ok(Num::Float((a.as_f64() / divisor).floor()))
                    },
                }
            },
            ArithOp::Rem => {
                match (args[0], args[1]) {
                    (Num::Int(_), Num::Int(0)) => Err(zero_division(self)),
                    (Num::Int(a), Num::Int(b)) => {
                        match a.checked_rem(b) {
                            Some(r) => {
                                // Shift the truncated remainder into the
                                // divisor's sign range, matching floor
                                // division: 7 % -2 is -1, -7 % 2 is 1.
                                let r = if r != 0 && (r < 0) != (b < 0) {
                                    r + b
                                } else { r };
                                Ok(Num::Int(r))
                            },
                            None => Err(overflow(self)),
                        }
                    },
                    (a, b) => {
                        let divisor = b.as_f64();
                        if divisor == 0.0 { return Err(zero_division(self)); }
                        let value = a.as_f64();
                        Ok(Num::Float(value - divisor * (value / divisor).floor()))
                    },
                }
            },
            ArithOp::MatMul => {
                Err(Failure::Eval("operator @ is not defined for numbers"
                                  .to_string()))
            },
            ArithOp::Pow => {
                match (args[0], args[1]) {
                    (Num::Int(a), Num::Int(b)) if b >= 0 => {
                        if b > u32::MAX as i64 { return Err(overflow(self)); }
                        a.checked_pow(b as u32).map(Num::Int)
                                               .ok_or_else(|| overflow(self))
                    },
                    (a, b) => Ok(Num::Float(a.as_f64().powf(b.as_f64()))),
                }
            },
            ArithOp::Shl | ArithOp::Shr => {
                match (args[0], args[1]) {
                    (Num::Int(a), Num::Int(b)) => {
                        if !(0..64).contains(&b) {
                            return Err(Failure::Eval(format!(
                                "shift amount out of range: {}", b)));
                        }
                        if *self == ArithOp::Shl { Ok(Num::Int(a << b)) }
                        else { Ok(Num::Int(a >> b)) }
                    },
                    _ => Err(Failure::Eval(format!(
                        "operator {} takes integer operands", self.symbol()))),
                }
            },
        } // match
    } // apply()

} // impl ArithOp

fn zero_division(op: &ArithOp) -> Failure {
    Failure::Eval(format!("division by zero in {}", op.symbol()))
}

fn overflow(op: &ArithOp) -> Failure {
    Failure::Eval(format!("integer overflow in {}", op.symbol()))
}

/// A numeric value: a 64-bit integer or a 64-bit float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Num {
    Int(i64),
    Float(f64),
}

impl Num {

    /// The value as a float, promoting integers.
    pub fn as_f64(&self) -> f64 {
        match self {
            Num::Int(i) => *i as f64,
            Num::Float(f) => *f,
        }
    }

    /// The value as a term.
    pub fn to_term(self) -> Term {
        match self {
            Num::Int(i) => Term::Int(i),
            Num::Float(f) => Term::Float(f),
        }
    }

} // impl Num

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Num::Int(i) => write!(f, "{}", i),
            Num::Float(fl) => write!(f, "{}", fl),
        }
    }
} // fmt::Display

/// Folds a variable-free term into a number.
///
/// The caller is expected to have substituted all variables first (see
/// [Bindings::resolve()](../bindings/struct.Bindings.html#method.resolve));
/// a variable reaching the evaluator reports
/// [Failure::Uninstantiated](../errors/enum.Failure.html#variant.Uninstantiated).
/// Non-numeric leaves are a type mismatch.
///
/// # Arguments
/// * `term`
/// # Return
/// * `Result` - Ok([Num](../arithmetic/enum.Num.html)) or Err([Failure](../errors/enum.Failure.html))
/// # Usage
/// ```
/// use entail::*;
///
/// // (3 + 4) * 2
/// let expr = (Term::Int(3) + 4) * 2;
/// assert_eq!(Ok(Num::Int(14)), evaluate(&expr));
/// ```
pub fn evaluate(term: &Term) -> Result<Num, Failure> {
    match term {
        Term::Int(i) => Ok(Num::Int(*i)),
        Term::Float(f) => Ok(Num::Float(*f)),
        Term::EvalCompound { op, args } => {
            let mut values: Vec<Num> = Vec::with_capacity(args.len());
            for arg in args {
                values.push(evaluate(arg)?);
            }
            op.apply(&values)
        },
        Term::Var(v) => Err(Failure::Uninstantiated(v.name.clone())),
        Term::Anonymous => Err(Failure::Uninstantiated("_".to_string())),
        other => Err(Failure::Eval(format!("{} is not numeric", other))),
    }
} // evaluate()

/// The comparison operators of the comparison goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Lt,
    Le,
    Gt,
    Ge,
}

impl CmpOp {

    /// The operator's symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            CmpOp::Lt => "<",
            CmpOp::Le => "<=",
            CmpOp::Gt => ">",
            CmpOp::Ge => ">=",
        }
    }

    /// Compares two numbers, promoting integers to floats for mixed
    /// operands.
    pub fn holds(&self, left: Num, right: Num) -> bool {
        match (left, right) {
            (Num::Int(a), Num::Int(b)) => {
                match self {
                    CmpOp::Lt => a < b,
                    CmpOp::Le => a <= b,
                    CmpOp::Gt => a > b,
                    CmpOp::Ge => a >= b,
                }
            },
            (a, b) => {
                let (a, b) = (a.as_f64(), b.as_f64());
                match self {
                    CmpOp::Lt => a < b,
                    CmpOp::Le => a <= b,
                    CmpOp::Gt => a > b,
                    CmpOp::Ge => a >= b,
                }
            },
        }
    } // holds()

} // impl CmpOp

// Operator overloads, so that a host can write `var!("N") - 1` instead
// of spelling out the EvalCompound. Comparison goals have no overload;
// use Goal::lt() and friends.

fn binary(op: ArithOp, left: Term, right: Term) -> Term {
    Term::EvalCompound { op, args: vec![left, right] }
}

impl<T: Into<Term>> std::ops::Add<T> for Term {
    type Output = Term;
    fn add(self, other: T) -> Term { binary(ArithOp::Add, self, other.into()) }
}

impl<T: Into<Term>> std::ops::Sub<T> for Term {
    type Output = Term;
    fn sub(self, other: T) -> Term { binary(ArithOp::Sub, self, other.into()) }
}

impl<T: Into<Term>> std::ops::Mul<T> for Term {
    type Output = Term;
    fn mul(self, other: T) -> Term { binary(ArithOp::Mul, self, other.into()) }
}

impl<T: Into<Term>> std::ops::Div<T> for Term {
    type Output = Term;
    fn div(self, other: T) -> Term { binary(ArithOp::Div, self, other.into()) }
}

impl<T: Into<Term>> std::ops::Rem<T> for Term {
    type Output = Term;
    fn rem(self, other: T) -> Term { binary(ArithOp::Rem, self, other.into()) }
}

impl<T: Into<Term>> std::ops::Shl<T> for Term {
    type Output = Term;
    fn shl(self, other: T) -> Term { binary(ArithOp::Shl, self, other.into()) }
}

impl<T: Into<Term>> std::ops::Shr<T> for Term {
    type Output = Term;
    fn shr(self, other: T) -> Term { binary(ArithOp::Shr, self, other.into()) }
}

impl std::ops::Neg for Term {
    type Output = Term;
    fn neg(self) -> Term {
        Term::EvalCompound { op: ArithOp::Neg, args: vec![self] }
    }
}

impl Term {

    /// Builds a floor-division term: `self // other`.
    pub fn floor_div<T: Into<Term>>(self, other: T) -> Term {
        binary(ArithOp::FloorDiv, self, other.into())
    }

    /// Builds a power term: `self ** other`.
    pub fn pow<T: Into<Term>>(self, other: T) -> Term {
        binary(ArithOp::Pow, self, other.into())
    }

    /// Builds a matrix-multiplication term: `self @ other`.
    pub fn matmul<T: Into<Term>>(self, other: T) -> Term {
        binary(ArithOp::MatMul, self, other.into())
    }

    /// Builds a unary-plus term: `+self`.
    pub fn positive(self) -> Term {
        Term::EvalCompound { op: ArithOp::Pos, args: vec![self] }
    }

} // impl Term


#[cfg(test)]
mod test {

    use crate::*;

    #[test]
    fn test_integer_arithmetic() {
        let e = (Term::Int(7) + 3) * 2;
        assert_eq!(Ok(Num::Int(20)), evaluate(&e));

        let e = Term::Int(7) - 10;
        assert_eq!(Ok(Num::Int(-3)), evaluate(&e));

        // Floor division and remainder use the floor convention.
        let e = Term::Int(-7).floor_div(2);
        assert_eq!(Ok(Num::Int(-4)), evaluate(&e));
        let e = Term::Int(-7) % 2;
        assert_eq!(Ok(Num::Int(1)), evaluate(&e));

        // A negative divisor flips the sign of the remainder: the
        // quotient floors, it does not truncate.
        let e = Term::Int(7).floor_div(-2);
        assert_eq!(Ok(Num::Int(-4)), evaluate(&e));
        let e = Term::Int(7) % -2;
        assert_eq!(Ok(Num::Int(-1)), evaluate(&e));
        let e = Term::Int(-7).floor_div(-2);
        assert_eq!(Ok(Num::Int(3)), evaluate(&e));
        let e = Term::Int(-7) % -2;
        assert_eq!(Ok(Num::Int(-1)), evaluate(&e));
        let e = Term::Int(6).floor_div(-2);
        assert_eq!(Ok(Num::Int(-3)), evaluate(&e));

        let e = Term::Int(2).pow(10);
        assert_eq!(Ok(Num::Int(1024)), evaluate(&e));

        let e = Term::Int(1) << 4;
        assert_eq!(Ok(Num::Int(16)), evaluate(&e));
        let e = Term::Int(-16) >> 2;
        assert_eq!(Ok(Num::Int(-4)), evaluate(&e));

        let e = -(Term::Int(3) + 4);
        assert_eq!(Ok(Num::Int(-7)), evaluate(&e));
    } // test_integer_arithmetic()

    #[test]
    fn test_float_promotion() {
        // One float operand promotes the whole operation.
        let e = Term::Int(1) + 0.5;
        assert_eq!(Ok(Num::Float(1.5)), evaluate(&e));

        // True division always produces a float.
        let e = Term::Int(7) / 2;
        assert_eq!(Ok(Num::Float(3.5)), evaluate(&e));

        // The float remainder also follows the divisor's sign.
        let e = Term::Float(7.0) % -2;
        assert_eq!(Ok(Num::Float(-1.0)), evaluate(&e));
        let e = Term::Float(-7.5) % 2;
        assert_eq!(Ok(Num::Float(0.5)), evaluate(&e));
    } // test_float_promotion()

    #[test]
    fn test_evaluation_failures() {
        // Division by zero.
        let e = Term::Int(1) / 0;
        assert!(matches!(evaluate(&e), Err(Failure::Eval(_))));
        let e = Term::Int(1) % 0;
        assert!(matches!(evaluate(&e), Err(Failure::Eval(_))));

        // Shifting a float.
        let e = Term::Float(1.0) << 2;
        assert!(matches!(evaluate(&e), Err(Failure::Eval(_))));

        // Matrix multiplication of scalars.
        let e = Term::Int(2).matmul(3);
        assert!(matches!(evaluate(&e), Err(Failure::Eval(_))));

        // An atom is not a number.
        let e = atom!("pi") + 1;
        assert!(matches!(evaluate(&e), Err(Failure::Eval(_))));

        // A variable must be substituted before evaluation.
        let e = var!("X") + 1;
        assert_eq!(Err(Failure::Uninstantiated("X".to_string())), evaluate(&e));
    } // test_evaluation_failures()

    #[test]
    fn test_comparisons() {
        assert!(CmpOp::Lt.holds(Num::Int(1), Num::Int(2)));
        assert!(!CmpOp::Lt.holds(Num::Int(2), Num::Int(1)));
        assert!(CmpOp::Le.holds(Num::Int(3), Num::Float(3.0)));
        assert!(CmpOp::Gt.holds(Num::Float(2.5), Num::Int(2)));
        assert!(CmpOp::Ge.holds(Num::Int(2), Num::Int(2)));
    } // test_comparisons()

} // test
