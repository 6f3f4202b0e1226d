//! Binary operations on IEEE-754 doubles

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A single numeric input. Non-finite values are valid operands.
pub type Operand = f64;

/// A short list of operands, stored inline for the common cases
pub type Operands = SmallVec<[Operand; 4]>;

/// Add two numbers.
///
/// Total over every `f64`: NaN propagates and `inf + -inf` is NaN.
#[inline]
pub fn add(a: Operand, b: Operand) -> Operand {
    a + b
}

/// Left fold of `add` starting from zero. An empty list sums to `0`.
pub fn sum(operands: &[Operand]) -> Operand {
    operands.iter().fold(0.0, |state, &next| add(state, next))
}

/// A binary arithmetic operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[default]
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Apply the operation. Never fails; division by zero yields an
    /// infinity or NaN.
    pub fn apply(self, a: Operand, b: Operand) -> Operand {
        match self {
            Operation::Add => add(a, b),
            Operation::Subtract => a - b,
            Operation::Multiply => a * b,
            Operation::Divide => a / b,
        }
    }

    /// Infix symbol used in log lines
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 9] = [0.0, -0.0, 1.0, -1.0, 0.1, 2.5, -1234.5678, 1e300, f64::MIN_POSITIVE];

    #[test]
    fn test_add_basic() {
        assert_eq!(add(2.0, 2.0), 4.0);
        assert_eq!(add(-5.0, 3.5), -1.5);
        assert_eq!(add(0.1, 0.2), 0.1 + 0.2);
    }

    #[test]
    fn test_add_matches_operator() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                assert_eq!(add(a, b).to_bits(), (a + b).to_bits());
            }
        }
    }

    #[test]
    fn test_add_commutative() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                assert_eq!(add(a, b).to_bits(), add(b, a).to_bits());
            }
        }
    }

    #[test]
    fn test_add_identity() {
        for &a in &SAMPLES {
            assert_eq!(add(a, 0.0), a);
        }
    }

    #[test]
    fn test_nan_propagates() {
        for &x in SAMPLES.iter().chain(&[f64::INFINITY, f64::NEG_INFINITY, f64::NAN]) {
            assert!(add(f64::NAN, x).is_nan());
            assert!(add(x, f64::NAN).is_nan());
        }
    }

    #[test]
    fn test_infinities() {
        assert!(add(f64::INFINITY, f64::NEG_INFINITY).is_nan());
        assert_eq!(add(f64::INFINITY, 1.0), f64::INFINITY);
        assert_eq!(add(f64::MAX, f64::MAX), f64::INFINITY);
    }

    #[test]
    fn test_sum() {
        assert_eq!(sum(&[]), 0.0);
        assert_eq!(sum(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]), 45.0);
        assert!(sum(&[-0.0, -0.0]).is_sign_positive());
        assert!(sum(&[1.0, f64::NAN, 2.0]).is_nan());
    }

    #[test]
    fn test_operations() {
        assert_eq!(Operation::Add.apply(2.0, 7.0), 9.0);
        assert_eq!(Operation::Subtract.apply(17.0, 3.0), 14.0);
        assert_eq!(Operation::Multiply.apply(2.0, 7.0), 14.0);
        assert_eq!(Operation::Divide.apply(32.0, 4.0), 8.0);
        assert_eq!(Operation::Divide.apply(1.0, 0.0), f64::INFINITY);
        assert!(Operation::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_operation_serde() {
        let op: Operation = serde_json::from_str("\"multiply\"").unwrap();
        assert_eq!(op, Operation::Multiply);
        assert_eq!(Operation::default(), Operation::Add);
        assert_eq!(Operation::Divide.symbol(), '/');
    }
}
