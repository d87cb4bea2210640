//! Runs Deutsch's algorithm for all four 1-bit functions and prints each step.
//!
//! Set `RUST_LOG=deutsch=debug` to see the simulator and sampler events.

use deutsch::{
    DecisionRule, DeutschConfig, DeutschError, DeutschRunner, OracleTag, deutsch_circuit,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), DeutschError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = DeutschConfig::new().with_trials(10).with_seed(Some(42));
    let runner = DeutschRunner::new(config);

    println!("Deutsch's algorithm");
    println!("{}", "=".repeat(60));

    for oracle in OracleTag::ALL {
        println!("\n{}", deutsch_circuit(oracle));
        let report = runner.run_oracle(oracle)?;
        println!("{}", report);
        println!("  Expected: {}", oracle.expected_classification());
    }

    // The stricter threshold reaches the same verdicts on noiseless runs
    let strict = DeutschRunner::new(
        runner.config().clone().with_decision_rule(DecisionRule::Supermajority),
    );
    let report = strict.run(true, false)?;
    println!("Supermajority rule on f(x) = NOT x: {}", report.classification());

    Ok(())
}
