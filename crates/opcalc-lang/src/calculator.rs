//! Calculator: resolves a symbol through the registry and applies the operation.

use crate::error::CalcError;
use crate::parser::parse;
use crate::registry::OperationRegistry;
use std::sync::Arc;
use tracing::debug;

/// Façade over a shared [OperationRegistry].
///
/// Holds no state besides the registry handle. Operand checks belong to the
/// operations, so new operations never require changes here.
#[derive(Debug, Clone)]
pub struct Calculator {
    registry: Arc<OperationRegistry>,
}

impl Calculator {
    pub fn new(registry: Arc<OperationRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<OperationRegistry> {
        &self.registry
    }

    /// Look up `symbol` and apply it to `a` and `b`. Registry and operation errors pass through unchanged.
    pub fn calculate(&self, symbol: &str, a: f64, b: f64) -> Result<f64, CalcError> {
        let op = self.registry.get(symbol)?;
        debug!(symbol, a, b, "calculating");
        op.execute(a, b)
    }

    /// Parse an infix line such as `2 ^ 10` and calculate it.
    pub fn evaluate(&self, input: &str) -> Result<f64, CalcError> {
        let expr = parse(input)?;
        self.calculate(&expr.symbol, expr.left, expr.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::{Operation, Power};
    use proptest::prelude::*;

    fn default_calculator() -> Calculator {
        Calculator::new(Arc::new(OperationRegistry::with_defaults()))
    }

    #[test]
    fn base_operations() {
        let calc = default_calculator();
        assert_eq!(calc.calculate("+", 2.0, 3.0).unwrap(), 5.0);
        assert_eq!(calc.calculate("-", 10.0, 4.0).unwrap(), 6.0);
        assert_eq!(calc.calculate("*", 7.0, 6.0).unwrap(), 42.0);
        assert_eq!(calc.calculate("/", 8.0, 2.0).unwrap(), 4.0);
    }

    #[test]
    fn division_by_zero_propagates() {
        let calc = default_calculator();
        assert_eq!(calc.calculate("/", 1.0, 0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn unknown_symbol_propagates_not_found() {
        let calc = default_calculator();
        let e = calc.calculate("^", 2.0, 10.0).unwrap_err();
        assert!(matches!(e, CalcError::NotFound { ref symbol, .. } if symbol == "^"));
    }

    #[test]
    fn registration_after_construction_is_visible() {
        let calc = default_calculator();
        calc.registry().register_op(Power).unwrap();
        assert_eq!(calc.calculate("^", 2.0, 10.0).unwrap(), 1024.0);
        // Existing operations are unaffected by the extension.
        assert_eq!(calc.calculate("+", 2.0, 3.0).unwrap(), 5.0);
        assert_eq!(calc.calculate("-", 10.0, 4.0).unwrap(), 6.0);
        assert_eq!(calc.calculate("*", 7.0, 6.0).unwrap(), 42.0);
        assert_eq!(calc.calculate("/", 8.0, 2.0).unwrap(), 4.0);
        assert_eq!(calc.calculate("/", 1.0, 0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn calculators_share_one_registry() {
        let registry = Arc::new(OperationRegistry::with_defaults());
        let first = Calculator::new(Arc::clone(&registry));
        let second = Calculator::new(Arc::clone(&registry));
        first.registry().register_op(Power).unwrap();
        assert_eq!(second.calculate("^", 3.0, 2.0).unwrap(), 9.0);
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn evaluate_infix() {
        let calc = default_calculator();
        assert_eq!(calc.evaluate("2 + 3").unwrap(), 5.0);
        assert_eq!(calc.evaluate("-1.5 * 4").unwrap(), -6.0);
        assert_eq!(calc.evaluate("8/2").unwrap(), 4.0);
        calc.registry().register_op(Power).unwrap();
        assert_eq!(calc.evaluate("2^10").unwrap(), 1024.0);
    }

    #[test]
    fn evaluate_signed_operand_after_symbol() {
        let calc = default_calculator();
        assert_eq!(calc.evaluate("2*-3").unwrap(), -6.0);
        assert_eq!(calc.evaluate("2--3").unwrap(), 5.0);
        calc.registry().register_op(Power).unwrap();
        assert_eq!(calc.evaluate("2^-1").unwrap(), 0.5);
    }

    /// Base-2 logarithm of `a`; ignores `b`.
    #[derive(Debug)]
    struct Log2 {
        symbol: String,
    }

    impl Operation for Log2 {
        fn symbol(&self) -> &str {
            &self.symbol
        }

        fn execute(&self, a: f64, _b: f64) -> Result<f64, CalcError> {
            Ok(a.log2())
        }
    }

    fn log2(symbol: &str) -> Log2 {
        Log2 {
            symbol: symbol.to_string(),
        }
    }

    #[test]
    fn symbol_with_digit_cannot_be_registered() {
        let calc = default_calculator();
        assert_eq!(
            calc.registry().register_op(log2("log2")),
            Err(CalcError::InvalidSymbol("log2".to_string()))
        );
        calc.registry().register_op(log2("lg")).unwrap();
        assert_eq!(calc.calculate("lg", 8.0, 0.0).unwrap(), 3.0);
        assert_eq!(calc.evaluate("8 lg 0").unwrap(), 3.0);
    }

    proptest! {
        #[test]
        fn registered_symbol_reachable_from_infix(symbol in "[^\\s*+/.0-9-]{1,6}", a in 1f64..1e6) {
            let calc = default_calculator();
            calc.registry().register_op(log2(&symbol)).unwrap();
            let input = format!("{a} {symbol} 0");
            prop_assert_eq!(calc.evaluate(&input).unwrap(), a.log2());
        }
    }

    #[test]
    fn evaluate_errors() {
        let calc = default_calculator();
        assert!(matches!(calc.evaluate(""), Err(CalcError::Parse(_))));
        assert!(matches!(calc.evaluate("2 +"), Err(CalcError::Parse(_))));
        assert!(matches!(calc.evaluate("2 % 3"), Err(CalcError::NotFound { .. })));
        assert_eq!(calc.evaluate("1 / 0"), Err(CalcError::DivisionByZero));
    }
}
