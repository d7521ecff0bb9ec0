//! Golden-value scenarios against the synthetic mortality basis
//!
//! The synthetic generator is fully specified, so these results are
//! reproducible on any machine without the CSV tables on disk.

use approx::assert_relative_eq;
use pension_adequacy::{Gender, MortalityBasis, PlanInputs, ProjectionEngine, ProjectionError};

fn engine() -> ProjectionEngine {
    ProjectionEngine::new(MortalityBasis::synthetic())
}

/// Reference scenario: male, 30 to 65, 60M salary, 10% combined
/// contributions, 3M monthly target. Runs a surplus on the synthetic basis.
fn reference_plan() -> PlanInputs {
    PlanInputs {
        gender: Gender::Male,
        current_age: 30,
        retirement_age: 65,
        annual_salary: 60_000_000.0,
        salary_growth: 0.03,
        investment_return: 0.07,
        inflation: 0.025,
        employer_rate: 0.05,
        personal_rate: 0.05,
        target_monthly_income: 3_000_000.0,
    }
}

#[test]
fn reference_scenario_golden_values() {
    let result = engine().project(&reference_plan()).expect("reference plan must project");

    assert_eq!(result.years_to_go, 35);
    assert_relative_eq!(result.annuity_factor, 13.290661889311691, max_relative = 1e-9);
    assert_relative_eq!(
        result.future_monthly_target,
        3_000_000.0 * 1.025_f64.powi(35),
        max_relative = 1e-9
    );
    assert_relative_eq!(result.future_monthly_target, 7_119_615.558198712, max_relative = 1e-9);
    assert_relative_eq!(result.nest_egg_needed, 1_135_492_837.9908264, max_relative = 1e-9);
    assert_relative_eq!(result.projected_balance, 1_261_966_404.3541489, max_relative = 1e-9);
    assert_relative_eq!(result.shortfall, -126_473_566.3633225, max_relative = 1e-6);

    // Surplus: nothing extra to contribute.
    assert!(result.is_funded());
    assert_eq!(result.extra_monthly_needed, 0.0);
}

#[test]
fn shortfall_scenario_golden_values() {
    // Female, 40 to 60, high target relative to contributions: underfunded.
    let plan = PlanInputs {
        gender: Gender::Female,
        current_age: 40,
        retirement_age: 60,
        annual_salary: 96_000_000.0,
        salary_growth: 0.02,
        investment_return: 0.06,
        inflation: 0.03,
        employer_rate: 0.05,
        personal_rate: 0.08,
        target_monthly_income: 10_000_000.0,
    };

    let result = engine().project(&plan).expect("shortfall plan must project");

    assert_eq!(result.years_to_go, 20);
    assert_relative_eq!(result.annuity_factor, 16.513488223095344, max_relative = 1e-9);
    assert_relative_eq!(result.future_monthly_target, 18_061_112.34669415, max_relative = 1e-9);
    assert_relative_eq!(result.nest_egg_needed, 3_579_023_592.397629, max_relative = 1e-9);
    assert_relative_eq!(result.projected_balance, 569_231_320.5722712, max_relative = 1e-9);
    assert_relative_eq!(result.shortfall, 3_009_792_271.8253574, max_relative = 1e-9);
    assert_relative_eq!(result.extra_monthly_needed, 6_818_322.458493621, max_relative = 1e-9);
}

#[test]
fn already_retired_boundary() {
    let engine = engine();

    for (current, retirement) in [(65_u8, 65_u8), (66, 65), (80, 60)] {
        let plan = PlanInputs {
            current_age: current,
            retirement_age: retirement,
            ..reference_plan()
        };
        assert_eq!(engine.project(&plan), Err(ProjectionError::AlreadyRetired));
    }

    // One year out is still a valid projection.
    let plan = PlanInputs {
        current_age: 64,
        retirement_age: 65,
        ..reference_plan()
    };
    assert!(engine.project(&plan).is_ok());
}

#[test]
fn projection_is_pure_over_shared_basis() {
    let engine = engine();
    let plan = reference_plan();

    let first = engine.project(&plan).unwrap();
    let second = engine.project(&plan).unwrap();
    assert_eq!(first, second);
}
