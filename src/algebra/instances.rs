//! Named algebra instances.
//!
//! | Name              | Element | plus | times | nil  | one  |
//! |-------------------|---------|------|-------|------|------|
//! | `BOOLEAN_ALGEBRA` | `bool`  | OR   | AND   | false| true |
//! | `XOR_ALGEBRA`     | `bool`  | XOR  | AND   | false| true |
//! | `INTEGER_FIELD`   | `i64`   | +    | ×     | 0    | 1    |
//! | `DOUBLE_FIELD`    | `f64`   | +    | ×     | 0.0  | 1.0  |
//! | `MINPLUS_ALGEBRA` | `f64`   | min  | +     | +∞   | 0.0  |
//! | `MAXPLUS_ALGEBRA` | `f64`   | max  | +     | -∞   | 0.0  |
//! | `GF2_FIELD`       | `u8`    | +mod2| ×mod2 | 0    | 1    |

use super::{Field, Ring};
use crate::error::{Error, Result};

/// Boolean semiring (OR, AND): reachability, transitive closure
pub const BOOLEAN_ALGEBRA: Ring<bool> = Ring::new("boolean", false, true, bool_or, bool_and);

/// Boolean ring (XOR, AND)
pub const XOR_ALGEBRA: Ring<bool> = Ring::new("xor", false, true, bool_xor, bool_and);

/// Integers with the usual arithmetic. Division always fails.
pub const INTEGER_FIELD: Field<i64> = Field::new(
    Ring::new("integer", 0, 1, int_plus, int_times),
    int_minus,
    int_div,
);

/// Real numbers as IEEE doubles
pub const DOUBLE_FIELD: Field<f64> = Field::new(
    Ring::new("double", 0.0, 1.0, f64_plus, f64_times),
    f64_minus,
    f64_div,
);

/// Tropical (min, +) semiring: shortest paths
pub const MINPLUS_ALGEBRA: Ring<f64> = Ring::new("min-plus", f64::INFINITY, 0.0, f64::min, f64_plus);

/// Tropical (max, +) semiring: longest paths, scheduling
pub const MAXPLUS_ALGEBRA: Ring<f64> =
    Ring::new("max-plus", f64::NEG_INFINITY, 0.0, f64::max, f64_plus);

/// The two-element field over `{0, 1}`
pub const GF2_FIELD: Field<u8> = Field::new(
    Ring::new("gf2", 0, 1, gf2_plus, gf2_times),
    gf2_plus,
    gf2_div,
);

fn bool_or(a: bool, b: bool) -> bool {
    a || b
}

fn bool_and(a: bool, b: bool) -> bool {
    a && b
}

fn bool_xor(a: bool, b: bool) -> bool {
    a ^ b
}

fn int_plus(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

fn int_times(a: i64, b: i64) -> i64 {
    a.wrapping_mul(b)
}

fn int_minus(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

fn int_div(_: i64, _: i64) -> Result<i64> {
    Err(Error::unsupported(
        "div",
        "integer",
        "Division is undefined over the integers",
    ))
}

fn f64_plus(a: f64, b: f64) -> f64 {
    a + b
}

fn f64_times(a: f64, b: f64) -> f64 {
    a * b
}

fn f64_minus(a: f64, b: f64) -> f64 {
    a - b
}

fn f64_div(a: f64, b: f64) -> Result<f64> {
    Ok(a / b)
}

// Inputs outside {0, 1} are reduced first
fn gf2_plus(a: u8, b: u8) -> u8 {
    (a ^ b) & 1
}

fn gf2_times(a: u8, b: u8) -> u8 {
    a & b & 1
}

fn gf2_div(a: u8, b: u8) -> Result<u8> {
    if b & 1 == 0 {
        return Err(Error::unsupported("div", "gf2", "Division by zero in GF(2)"));
    }
    Ok(a & 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_algebra() {
        assert!(BOOLEAN_ALGEBRA.plus(true, false));
        assert!(!BOOLEAN_ALGEBRA.times(true, false));
        assert!(!BOOLEAN_ALGEBRA.nil());
        assert!(BOOLEAN_ALGEBRA.one());
    }

    #[test]
    fn test_xor_algebra() {
        assert!(!XOR_ALGEBRA.plus(true, true));
        assert!(XOR_ALGEBRA.plus(true, false));
    }

    #[test]
    fn test_min_plus() {
        // plus is min, times is addition
        assert_eq!(MINPLUS_ALGEBRA.plus(3.0, 5.0), 3.0);
        assert_eq!(MINPLUS_ALGEBRA.times(3.0, 5.0), 8.0);
        assert_eq!(MINPLUS_ALGEBRA.plus(MINPLUS_ALGEBRA.nil(), 7.0), 7.0);
        assert_eq!(MINPLUS_ALGEBRA.times(MINPLUS_ALGEBRA.one(), 7.0), 7.0);
    }

    #[test]
    fn test_max_plus() {
        assert_eq!(MAXPLUS_ALGEBRA.plus(3.0, 5.0), 5.0);
        assert_eq!(MAXPLUS_ALGEBRA.plus(MAXPLUS_ALGEBRA.nil(), -7.0), -7.0);
    }

    #[test]
    fn test_integer_division_fails() {
        let err = INTEGER_FIELD.div(4, 2).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedOperation {
                op: "div",
                algebra: "integer",
                ..
            }
        ));
        assert_eq!(INTEGER_FIELD.minus(4, 6), -2);
    }

    #[test]
    fn test_gf2_field() {
        let ring = GF2_FIELD.ring();
        assert_eq!(ring.plus(1, 1), 0);
        assert_eq!(ring.times(1, 1), 1);
        assert_eq!(GF2_FIELD.minus(0, 1), 1);
        assert_eq!(GF2_FIELD.div(1, 1).unwrap(), 1);
        assert!(GF2_FIELD.div(1, 0).is_err());
    }

    #[test]
    fn test_double_field() {
        assert_eq!(DOUBLE_FIELD.div(1.0, 4.0).unwrap(), 0.25);
        assert_eq!(DOUBLE_FIELD.minus(1.0, 4.0), -3.0);
        assert_eq!(DOUBLE_FIELD.name(), "double");
    }
}
