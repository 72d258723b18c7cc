//! Amplitude-amplification bookkeeping demo.
//!
//! Marks the low-cost selections of a portfolio instance as the good
//! states of an oracle and walks through the closed-form Grover numbers:
//! iteration count, success probability, and the mass a uniform guess
//! places on the good states.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use falk_demos::{print_header, print_result, print_section, print_success};
use falk_ising::exact::solve_exact;
use falk_ising::{GoodState, Oracle, Portfolio};
use falk_select::Distribution;

#[derive(Parser, Debug)]
#[command(name = "demo-search")]
#[command(about = "Grover iteration arithmetic over a portfolio oracle")]
struct Args {
    /// Number of assets
    #[arg(short = 'n', long, default_value = "4")]
    assets: usize,

    /// Number of assets to pick
    #[arg(short, long, default_value = "2")]
    budget: usize,

    /// Instance seed
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Mark selections within this margin of the optimum
    #[arg(short, long, default_value = "0.05")]
    margin: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let portfolio = Portfolio::random(args.assets, args.budget, args.seed)?;
    let ground = solve_exact(&portfolio)?;
    let threshold = ground.energy + args.margin;

    // Good states: every selection within the margin of the optimum.
    let oracle = Oracle::new(
        GoodState::Predicate(Box::new(move |bv| portfolio.cost(bv) <= threshold)),
        args.assets,
    )?;

    print_header("Amplitude Amplification Demo");

    print_section("Oracle");
    print_result("Search space", 1u64 << args.assets);
    print_result("Marked states", oracle.n_marked());
    print_result("Cost threshold", format!("{:.6}", threshold));

    print_section("Grover numbers");
    let uniform = Distribution::uniform(args.assets)?;
    let iterations = oracle.optimal_iterations()?;
    print_result(
        "Uniform-guess success",
        format!("{:.1}%", oracle.good_mass(&uniform)? * 100.0),
    );
    print_result("Optimal iterations", iterations);
    print_result(
        "Amplified success",
        format!("{:.1}%", oracle.success_probability(iterations) * 100.0),
    );

    println!();
    print_success("Search demo complete!");
    Ok(())
}
