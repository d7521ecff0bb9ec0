//! Load a cohort of plans from a CSV file for batch runs

use super::{Gender, PlanInputs};
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// A plan row paired with its cohort identifier
#[derive(Debug, Clone)]
pub struct CohortPlan {
    pub plan_id: u32,
    pub inputs: PlanInputs,
}

/// Raw CSV row matching the cohort file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "PlanID")]
    plan_id: u32,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "CurrentAge")]
    current_age: u8,
    #[serde(rename = "RetirementAge")]
    retirement_age: u8,
    #[serde(rename = "Salary")]
    salary: f64,
    #[serde(rename = "SalaryBasis")]
    salary_basis: String,
    #[serde(rename = "SalaryGrowth")]
    salary_growth: f64,
    #[serde(rename = "InvestmentReturn")]
    investment_return: f64,
    #[serde(rename = "Inflation")]
    inflation: f64,
    #[serde(rename = "EmployerRate")]
    employer_rate: f64,
    #[serde(rename = "PersonalRate")]
    personal_rate: f64,
    #[serde(rename = "TargetMonthlyIncome")]
    target_monthly_income: f64,
}

impl CsvRow {
    fn to_plan(self) -> Result<CohortPlan, Box<dyn Error>> {
        let gender = match self.gender.as_str() {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            other => return Err(format!("Unknown Gender: {}", other).into()),
        };

        // Monthly salaries are annualized here, at the data boundary;
        // the engine only ever sees annual amounts.
        let annual_salary = match self.salary_basis.as_str() {
            "Yearly" => self.salary,
            "Monthly" => self.salary * 12.0,
            other => return Err(format!("Unknown SalaryBasis: {}", other).into()),
        };

        Ok(CohortPlan {
            plan_id: self.plan_id,
            inputs: PlanInputs {
                gender,
                current_age: self.current_age,
                retirement_age: self.retirement_age,
                annual_salary,
                salary_growth: self.salary_growth,
                investment_return: self.investment_return,
                inflation: self.inflation,
                employer_rate: self.employer_rate,
                personal_rate: self.personal_rate,
                target_monthly_income: self.target_monthly_income,
            },
        })
    }
}

/// Load all plans from a CSV file
pub fn load_cohort<P: AsRef<Path>>(path: P) -> Result<Vec<CohortPlan>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut plans = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        plans.push(row.to_plan()?);
    }

    Ok(plans)
}

/// Load plans from any reader (e.g. a string buffer)
pub fn load_cohort_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<CohortPlan>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut plans = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        plans.push(row.to_plan()?);
    }

    Ok(plans)
}
