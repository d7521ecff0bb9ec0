//! Pension Adequacy CLI
//!
//! Command-line shell for running a single retirement adequacy projection

use anyhow::Result;
use clap::{Parser, ValueEnum};
use pension_adequacy::format::format_idr;
use pension_adequacy::{Gender, PlanInputs, ScenarioRunner, TableSource};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum SalaryBasis {
    Monthly,
    Yearly,
}

/// Is your pension enough? Retirement adequacy projection over Indonesian
/// mortality tables, with a synthetic fallback basis when the CSV tables
/// are not on disk.
#[derive(Debug, Parser)]
#[command(name = "pension_adequacy", version)]
struct Args {
    /// Sex category for mortality table selection
    #[arg(long, value_enum)]
    gender: GenderArg,

    /// Current age in whole years
    #[arg(long)]
    current_age: u8,

    /// Target retirement age in whole years
    #[arg(long, default_value_t = 65)]
    retirement_age: u8,

    /// Current gross salary, interpreted per --salary-basis
    #[arg(long)]
    salary: f64,

    /// Whether --salary is a monthly or yearly amount
    #[arg(long, value_enum, default_value = "monthly")]
    salary_basis: SalaryBasis,

    /// Desired monthly retirement income in today's purchasing power
    #[arg(long)]
    target_monthly_income: f64,

    /// Employer contribution rate, fraction of salary
    #[arg(long, default_value_t = 0.05)]
    employer_rate: f64,

    /// Personal contribution rate, fraction of salary
    #[arg(long, default_value_t = 0.05)]
    personal_rate: f64,

    /// Expected annual investment return
    #[arg(long, default_value_t = 0.07)]
    investment_return: f64,

    /// Expected annual salary growth
    #[arg(long, default_value_t = 0.03)]
    salary_growth: f64,

    /// Expected annual inflation
    #[arg(long, default_value_t = 0.025)]
    inflation: f64,

    /// Directory holding the mortality CSV files
    #[arg(long, default_value = "data/mortality")]
    data_dir: PathBuf,

    /// Emit the full result as JSON instead of the report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let runner = ScenarioRunner::load_or_synthetic(&args.data_dir);

    // Monthly salaries are annualized at the shell boundary; the engine
    // only ever sees annual amounts.
    let annual_salary = match args.salary_basis {
        SalaryBasis::Monthly => args.salary * 12.0,
        SalaryBasis::Yearly => args.salary,
    };

    let plan = PlanInputs {
        gender: args.gender.into(),
        current_age: args.current_age,
        retirement_age: args.retirement_age,
        annual_salary,
        salary_growth: args.salary_growth,
        investment_return: args.investment_return,
        inflation: args.inflation,
        employer_rate: args.employer_rate,
        personal_rate: args.personal_rate,
        target_monthly_income: args.target_monthly_income,
    };

    let result = runner.run(&plan)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Pension Adequacy v0.1.0");
    println!("=======================\n");

    match runner.source() {
        TableSource::Csv { name } => println!("Mortality basis: {}", name),
        TableSource::Synthetic { reason } => {
            println!("Note: using synthetic mortality data ({})", reason)
        }
    }
    println!();

    if result.is_funded() {
        println!(
            "On track: the plan exceeds its goal by {}.",
            format_idr(result.surplus())
        );
    } else {
        println!("Projected gap of {}.", format_idr(result.shortfall));
    }
    println!();

    println!("  Years to retirement:      {}", result.years_to_go);
    println!("  Annuity factor:           {:.4}", result.annuity_factor);
    println!(
        "  Future monthly target:    {}",
        format_idr(result.future_monthly_target)
    );
    println!(
        "  Total fund needed:        {}",
        format_idr(result.nest_egg_needed)
    );
    println!(
        "  Projected fund balance:   {}",
        format_idr(result.projected_balance)
    );
    if !result.is_funded() {
        println!(
            "  Extra monthly needed:     {}",
            format_idr(result.extra_monthly_needed)
        );
    }

    // Accumulation path, first years plus milestones
    println!("\nAccumulation path:");
    println!(
        "{:>5} {:>4} {:>18} {:>16} {:>20}",
        "Year", "Age", "Salary", "Contribution", "EOY Balance"
    );
    println!("{}", "-".repeat(68));

    for row in result.rows.iter().take(10) {
        println!(
            "{:>5} {:>4} {:>18} {:>16} {:>20}",
            row.year,
            row.attained_age,
            format_idr(row.salary),
            format_idr(row.contribution),
            format_idr(row.eoy_balance),
        );
    }
    if result.rows.len() > 10 {
        println!("... ({} more years)", result.rows.len() - 10);
        if let Some(last) = result.rows.last() {
            println!(
                "{:>5} {:>4} {:>18} {:>16} {:>20}",
                last.year,
                last.attained_age,
                format_idr(last.salary),
                format_idr(last.contribution),
                format_idr(last.eoy_balance),
            );
        }
    }

    Ok(())
}
