//! Keypad operation table
//!
//! This module defines the fixed set of operations the keypad can
//! produce and resolves operation symbols to them. It's completely pure
//! and testable without any terminal or display concerns.

use std::f64::consts::{E, PI};

/// A calculator operation resolved from a keypad symbol
///
/// Unary and binary arithmetic are plain `fn` pointers, so the whole
/// table stays `Copy` and allocation-free.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Named constant such as π or e
    Constant(f64),
    /// One-operand function applied to the accumulated value in place
    Unary(fn(f64) -> f64),
    /// Two-operand function buffered until the second operand arrives
    Binary(fn(f64, f64) -> f64),
    /// Resolves the pending binary operation
    Equals,
}

/// Every operation symbol the keypad produces, in keypad order
pub const SYMBOLS: &[&str] = &["π", "e", "√", "cos", "±", "×", "÷", "+", "-", "="];

/// Resolves an operation symbol to its operation
///
/// # Arguments
/// * `symbol` - Symbol as printed on the keypad (e.g. `"×"`, `"cos"`)
///
/// # Returns
/// The operation, or `None` for symbols outside the fixed table.
/// Callers treat an unknown symbol as a no-op, not an error.
pub fn lookup(symbol: &str) -> Option<Operation> {
    let operation = match symbol {
        "π" => Operation::Constant(PI),
        "e" => Operation::Constant(E),
        "√" => Operation::Unary(f64::sqrt),
        "cos" => Operation::Unary(f64::cos),
        "±" => Operation::Unary(|value| -value),
        "×" => Operation::Binary(|lhs, rhs| lhs * rhs),
        "÷" => Operation::Binary(|lhs, rhs| lhs / rhs),
        "+" => Operation::Binary(|lhs, rhs| lhs + rhs),
        "-" => Operation::Binary(|lhs, rhs| lhs - rhs),
        "=" => Operation::Equals,
        _ => return None,
    };

    Some(operation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_symbol_resolves() {
        for symbol in SYMBOLS {
            assert!(lookup(symbol).is_some(), "symbol {:?} missing", symbol);
        }
    }

    #[test]
    fn unknown_symbols_resolve_to_none() {
        assert!(lookup("%").is_none());
        assert!(lookup("sin").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("1").is_none()); // Digits are not operations
    }

    #[test]
    fn constants_carry_their_values() {
        match lookup("π") {
            Some(Operation::Constant(value)) => assert_eq!(value, PI),
            other => panic!("expected constant, got {:?}", other),
        }
        match lookup("e") {
            Some(Operation::Constant(value)) => assert_eq!(value, E),
            other => panic!("expected constant, got {:?}", other),
        }
    }

    #[test]
    fn unary_functions_compute() {
        let Some(Operation::Unary(sqrt)) = lookup("√") else {
            panic!("√ must be unary");
        };
        assert_eq!(sqrt(9.0), 3.0);

        let Some(Operation::Unary(cos)) = lookup("cos") else {
            panic!("cos must be unary");
        };
        assert_eq!(cos(0.0), 1.0);

        let Some(Operation::Unary(negate)) = lookup("±") else {
            panic!("± must be unary");
        };
        assert_eq!(negate(5.0), -5.0);
        assert_eq!(negate(-5.0), 5.0);
    }

    #[test]
    fn binary_functions_compute() {
        let cases: &[(&str, f64)] = &[("×", 12.0), ("÷", 0.75), ("+", 7.0), ("-", -1.0)];
        for (symbol, expected) in cases {
            let Some(Operation::Binary(function)) = lookup(symbol) else {
                panic!("{} must be binary", symbol);
            };
            assert_eq!(function(3.0, 4.0), *expected);
        }
    }

    #[test]
    fn equals_is_its_own_kind() {
        assert!(matches!(lookup("="), Some(Operation::Equals)));
    }
}
