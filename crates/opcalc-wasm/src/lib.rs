use opcalc_lang::run;
use wasm_bindgen::prelude::*;

/// Evaluate an infix line such as "2 ^ 10"; returns the result or the error message.
#[wasm_bindgen]
pub fn evaluate(input: &str) -> String {
    run(input)
        .map(|n| n.to_string())
        .unwrap_or_else(|e| e.to_string())
}
