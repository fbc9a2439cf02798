use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cnf_trio::sat::{self, config::defaults, dimacs, Formula, SatError, SolverConfig};

/// Used when no input file is given.
const SAMPLE: &str = "
    p cnf 3 3
    1 2 0
    -1 3 0
    -2 -3 0
";

#[derive(Parser)]
#[command(name = "cnf_trio", version, about = "DP, resolution and DPLL satisfiability checks")]
struct Cli {
    /// DIMACS CNF file, the built-in sample formula when absent
    input: Option<PathBuf>,

    /// dp, dpll or resolution
    #[arg(short, long, default_value_t = defaults::METHOD.to_string())]
    method: String,

    /// first, random, most_frequent or least_frequent (dp only)
    #[arg(short, long, default_value_t = defaults::STRATEGY.to_string())]
    strategy: String,

    /// Round bound for resolution
    #[arg(long, default_value_t = defaults::MAX_ROUNDS)]
    max_rounds: usize,

    /// Seed for the random strategy
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn config(&self) -> Result<SolverConfig, SatError> {
        Ok(SolverConfig {
            method: self.method.parse()?,
            strategy: self.strategy.parse()?,
            max_rounds: self.max_rounds,
            seed: self.seed,
        })
    }

    fn formula(&self) -> Result<Formula, SatError> {
        match &self.input {
            Some(path) => dimacs::read_formula(path),
            None => dimacs::parse_formula_from_dimacs_str(SAMPLE),
        }
    }
}

fn run(cli: &Cli) -> Result<(), SatError> {
    let config = cli.config()?;
    let formula = cli.formula()?;
    println!("Parsed {} clauses.", formula.len());
    println!("Method: {}", config.method);
    println!("Strategy: {}", config.strategy);

    let start = Instant::now();
    let result = sat::solve(formula, &config)?;
    let elapsed = start.elapsed();

    println!("Result: {}", if result { "SAT" } else { "UNSAT" });
    println!("Time: {:.5} seconds", elapsed.as_secs_f64());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
