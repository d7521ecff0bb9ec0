//! Run adequacy projections for an entire cohort CSV
//!
//! Outputs one result row per plan for downstream comparison

use anyhow::{anyhow, Result};
use clap::Parser;
use pension_adequacy::plan::load_cohort;
use pension_adequacy::{ProjectionError, ProjectionResult, ScenarioRunner};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// Batch adequacy run over a cohort of plans
#[derive(Debug, Parser)]
#[command(name = "run_cohort", version)]
struct Args {
    /// Cohort CSV file (PlanID, Gender, ages, salary, rates, target)
    plans: PathBuf,

    /// Directory holding the mortality CSV files
    #[arg(long, default_value = "data/mortality")]
    data_dir: PathBuf,

    /// Output CSV path
    #[arg(long, default_value = "cohort_results.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading plans from {}...", args.plans.display());

    let plans = load_cohort(&args.plans)
        .map_err(|err| anyhow!("failed to load cohort: {}", err))?;
    println!("Loaded {} plans in {:?}", plans.len(), start.elapsed());

    let runner = ScenarioRunner::load_or_synthetic(&args.data_dir);
    println!("Mortality basis: {}", runner.source().describe());

    println!("Running projections...");
    let proj_start = Instant::now();

    // Each plan is independent; the mortality basis is shared read-only.
    let results: Vec<(u32, Result<ProjectionResult, ProjectionError>)> = plans
        .par_iter()
        .map(|plan| (plan.plan_id, runner.run(&plan.inputs)))
        .collect();

    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut file = File::create(&args.output)?;
    writeln!(
        file,
        "PlanID,Status,YearsToGo,AnnuityFactor,FutureMonthlyTarget,NestEggNeeded,ProjectedBalance,Shortfall,ExtraMonthlyNeeded"
    )?;

    let mut funded = 0usize;
    let mut underfunded = 0usize;
    let mut already_retired = 0usize;

    for (plan_id, outcome) in &results {
        match outcome {
            Ok(result) => {
                if result.is_funded() {
                    funded += 1;
                } else {
                    underfunded += 1;
                }
                writeln!(
                    file,
                    "{},{},{},{:.6},{:.2},{:.2},{:.2},{:.2},{:.2}",
                    plan_id,
                    if result.is_funded() { "Funded" } else { "Shortfall" },
                    result.years_to_go,
                    result.annuity_factor,
                    result.future_monthly_target,
                    result.nest_egg_needed,
                    result.projected_balance,
                    result.shortfall,
                    result.extra_monthly_needed,
                )?;
            }
            Err(err) => {
                already_retired += 1;
                writeln!(file, "{},{},,,,,,,", plan_id, err)?;
            }
        }
    }

    println!("Output written to {}", args.output.display());

    println!("\nCohort Summary:");
    println!("  Plans:           {}", results.len());
    println!("  Funded:          {}", funded);
    println!("  Shortfall:       {}", underfunded);
    println!("  Already retired: {}", already_retired);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
