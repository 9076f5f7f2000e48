//! Operation registry: symbol → operation, with unique symbols.
//! The map sits behind one lock so registration can happen while calculators hold the registry.

use crate::error::CalcError;
use crate::lexer::is_symbol_token;
use crate::operation::{Add, Divide, Multiply, Operation, Subtract};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Registry mapping operation symbols to operations.
///
/// Symbols are unique: a second registration under the same symbol fails and
/// leaves the existing entry in place. There is no removal. Lookups return the
/// registered instance itself (shared via [Arc]).
#[derive(Debug, Default)]
pub struct OperationRegistry {
    ops: RwLock<HashMap<String, Arc<dyn Operation>>>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the four base operations: `+`, `-`, `*`, `/`.
    pub fn with_defaults() -> Self {
        let defaults: [Arc<dyn Operation>; 4] = [
            Arc::new(Add),
            Arc::new(Subtract),
            Arc::new(Multiply),
            Arc::new(Divide),
        ];
        let ops = defaults
            .into_iter()
            .map(|op| (op.symbol().to_string(), op))
            .collect();
        Self {
            ops: RwLock::new(ops),
        }
    }

    /// Register `op` under its symbol.
    ///
    /// Fails with [CalcError::DuplicateSymbol] if the symbol is taken and with
    /// [CalcError::InvalidSymbol] if it could not be typed as one infix token
    /// (empty, whitespace, or containing a digit or `.digit`).
    pub fn register(&self, op: Arc<dyn Operation>) -> Result<(), CalcError> {
        let symbol = op.symbol();
        if !is_symbol_token(symbol) {
            warn!(symbol, "rejected operation with invalid symbol");
            return Err(CalcError::InvalidSymbol(symbol.to_string()));
        }
        let mut ops = self.ops.write();
        if ops.contains_key(symbol) {
            warn!(symbol, "rejected duplicate operation symbol");
            return Err(CalcError::DuplicateSymbol(symbol.to_string()));
        }
        debug!(symbol, ?op, "registered operation");
        let key = symbol.to_string();
        ops.insert(key, op);
        Ok(())
    }

    /// Like [OperationRegistry::register], taking the operation by value.
    pub fn register_op<O: Operation + 'static>(&self, op: O) -> Result<(), CalcError> {
        self.register(Arc::new(op))
    }

    /// Return the operation registered under `symbol`.
    /// Missing symbols give [CalcError::NotFound] carrying the sorted registered symbols.
    pub fn get(&self, symbol: &str) -> Result<Arc<dyn Operation>, CalcError> {
        let ops = self.ops.read();
        match ops.get(symbol) {
            Some(op) => Ok(Arc::clone(op)),
            None => Err(CalcError::NotFound {
                symbol: symbol.to_string(),
                available: sorted_symbols(&ops),
            }),
        }
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.ops.read().contains_key(symbol)
    }

    /// All registered symbols in ascending order.
    pub fn list_symbols(&self) -> Vec<String> {
        sorted_symbols(&self.ops.read())
    }

    pub fn len(&self) -> usize {
        self.ops.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.read().is_empty()
    }
}

fn sorted_symbols(ops: &HashMap<String, Arc<dyn Operation>>) -> Vec<String> {
    let mut symbols: Vec<String> = ops.keys().cloned().collect();
    symbols.sort();
    symbols
}
