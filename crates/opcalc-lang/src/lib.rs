//! opcalc: extensible calculator over an operation registry.
//!
//! Operations implement [Operation] and are registered into an [OperationRegistry];
//! a [Calculator] resolves a symbol through the registry and applies it. New
//! operations are added by registration alone.
//!
//! ```
//! use std::sync::Arc;
//! use opcalc_lang::{Calculator, OperationRegistry, Power};
//!
//! let registry = Arc::new(OperationRegistry::with_defaults());
//! let calc = Calculator::new(Arc::clone(&registry));
//! assert_eq!(calc.calculate("+", 2.0, 3.0).unwrap(), 5.0);
//!
//! registry.register_op(Power).unwrap();
//! assert_eq!(calc.evaluate("2 ^ 10").unwrap(), 1024.0);
//! ```

pub mod calculator;
pub mod error;
pub mod lexer;
pub mod operation;
pub mod parser;
pub mod registry;

pub use calculator::Calculator;
pub use error::{CalcError, ParseError};
pub use operation::{Add, Divide, Multiply, Operation, Power, Subtract};
pub use parser::{parse, Infix};
pub use registry::OperationRegistry;

/// Calculator over the default registry (`+ - * /`) extended with Power (`^`).
pub fn default_calculator() -> Calculator {
    let registry = OperationRegistry::with_defaults();
    registry
        .register_op(Power)
        .expect("'^' is not among the default symbols");
    Calculator::new(std::sync::Arc::new(registry))
}

/// Evaluate one infix line with [default_calculator].
pub fn run(input: &str) -> Result<f64, CalcError> {
    default_calculator().evaluate(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_basic() {
        assert_eq!(run("2 + 3").unwrap(), 5.0);
        assert_eq!(run("10 - 4").unwrap(), 6.0);
        assert_eq!(run("7 * 6").unwrap(), 42.0);
        assert_eq!(run("8 / 2").unwrap(), 4.0);
        assert_eq!(run("2 ^ 10").unwrap(), 1024.0);
    }

    #[test]
    fn run_errors() {
        assert_eq!(run("1 / 0"), Err(CalcError::DivisionByZero));
        assert!(matches!(run("1 +"), Err(CalcError::Parse(_))));
        assert!(matches!(run("1 % 2"), Err(CalcError::NotFound { .. })));
    }

    #[test]
    fn default_calculator_symbols() {
        assert_eq!(
            default_calculator().registry().list_symbols(),
            vec!["*", "+", "-", "/", "^"]
        );
    }
}
