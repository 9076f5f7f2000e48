use std::sync::Arc;

use anyhow::{ensure, Result};
use clap::Parser;
use opcalc_lang::{CalcError, Calculator, OperationRegistry, Power};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Evaluate `<a> <symbol> <b>` with a registry of binary operations.
#[derive(Parser, Debug)]
#[command(name = "opcalc", version, about)]
struct Cli {
    /// Print the registered operation symbols and exit.
    #[arg(long)]
    list: bool,

    /// Leave the power operation (`^`) out of the registry.
    #[arg(long)]
    no_power: bool,

    /// Run the walkthrough: base operations, adding power, division by zero.
    #[arg(long, conflicts_with_all = ["list", "no_power", "expression"])]
    demo: bool,

    /// Infix expression, e.g. `2 + 3` or "2^10".
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.demo {
        return demo();
    }

    let registry = Arc::new(OperationRegistry::with_defaults());
    if !cli.no_power {
        registry.register_op(Power)?;
    }

    if cli.list {
        println!("{}", registry.list_symbols().join(", "));
        return Ok(());
    }

    let expression = cli.expression.join(" ").trim().to_string();
    ensure!(
        !expression.is_empty(),
        "usage: opcalc <a> <symbol> <b>\n  e.g. opcalc \"2 ^ 10\"\n  symbols: {}",
        registry.list_symbols().join(", ")
    );

    debug!(%expression, "evaluating");
    let calc = Calculator::new(registry);
    let result = calc.evaluate(&expression)?;
    println!("{result}");
    Ok(())
}

fn demo() -> Result<()> {
    let registry = Arc::new(OperationRegistry::with_defaults());
    let calc = Calculator::new(Arc::clone(&registry));

    println!("operations: {}", registry.list_symbols().join(", "));
    for (symbol, a, b, expected) in [
        ("+", 2.0, 3.0, 5.0),
        ("-", 10.0, 4.0, 6.0),
        ("*", 7.0, 6.0, 42.0),
        ("/", 8.0, 2.0, 4.0),
    ] {
        let got = calc.calculate(symbol, a, b)?;
        ensure!(got == expected, "{a} {symbol} {b}: expected {expected}, got {got}");
        println!("{a} {symbol} {b} = {got}");
    }

    // Extension by registration only; the calculator built above sees it.
    registry.register_op(Power)?;
    println!("operations after adding power: {}", registry.list_symbols().join(", "));
    let got = calc.calculate("^", 2.0, 10.0)?;
    ensure!(got == 1024.0, "2 ^ 10: expected 1024, got {got}");
    println!("2 ^ 10 = {got}");

    match calc.calculate("/", 1.0, 0.0) {
        Err(e @ CalcError::DivisionByZero) => println!("1 / 0 rejected: {e}"),
        other => anyhow::bail!("1 / 0: expected division by zero, got {other:?}"),
    }
    Ok(())
}
