//! Compare insurance strategies across an income-growth grid
//!
//! Runs the full staged pipeline for every (insurance type, income growth)
//! cell and writes the reduced outcomes to CSV for side-by-side review.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use serde::Serialize;

use health_strategy::profile::{Gender, HealthStatus};
use health_strategy::scenario::{ScenarioRunner, StrategyScenario};
use health_strategy::{CarePreferences, FinancialInputs, InsurancePlan, InsuranceType, Profile};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HealthArg {
    Healthy,
    Chronic,
    HighRisk,
}

impl From<HealthArg> for HealthStatus {
    fn from(arg: HealthArg) -> Self {
        match arg {
            HealthArg::Healthy => HealthStatus::Healthy,
            HealthArg::Chronic => HealthStatus::Chronic,
            HealthArg::HighRisk => HealthStatus::HighRisk,
        }
    }
}

/// Compare insurance strategies for a single profile
#[derive(Debug, Parser)]
#[command(name = "compare_strategies")]
struct Args {
    /// Profile age
    #[arg(long, default_value_t = 30)]
    age: u8,

    /// Health status
    #[arg(long, value_enum, default_value = "healthy")]
    health: HealthArg,

    /// Monthly gross income
    #[arg(long, default_value_t = 5000.0)]
    monthly_income: f64,

    /// Annual premium growth applied to every plan
    #[arg(long, default_value_t = 0.05)]
    premium_inflation: f64,

    /// Output CSV path
    #[arg(long, default_value = "strategy_comparison.csv")]
    output: String,
}

/// One CSV row per scenario cell
#[derive(Debug, Serialize)]
struct OutcomeRow {
    scenario: String,
    lifetime_healthcare_cost: f64,
    peak_annual_cost: f64,
    final_surplus: f64,
    total_shortfall: f64,
    first_deficit_age: Option<u8>,
    advisories: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let profile = Profile::single(args.age, Gender::Male, args.health.into());
    health_strategy::profile::validate::validate_profile(&profile).context("profile inputs")?;

    let care_prefs = CarePreferences {
        primary: true,
        preventive: true,
        ..Default::default()
    };

    // One cell per (insurance type, income growth)
    let insurance_types = [
        InsuranceType::EmployerBased,
        InsuranceType::Marketplace,
        InsuranceType::Uninsured,
    ];
    let growth_rates = [0.0, 0.02, 0.04];

    let scenarios: Vec<StrategyScenario> = insurance_types
        .iter()
        .flat_map(|&insurance_type| {
            growth_rates.iter().map(move |&income_growth| StrategyScenario {
                label: format!("{} @ {:.0}% growth", insurance_type.as_str(), income_growth * 100.0),
                plan: InsurancePlan::national_average(insurance_type, args.premium_inflation),
                financial: FinancialInputs {
                    monthly_income: args.monthly_income,
                    income_growth,
                    ..Default::default()
                },
                capital_plan: None,
            })
        })
        .collect();

    println!("Running {} scenario cells...", scenarios.len());

    // Cells are independent full-pipeline runs
    let runner = ScenarioRunner::new();
    let outcomes = scenarios
        .par_iter()
        .map(|scenario| runner.run(&profile, &care_prefs, scenario))
        .collect::<Result<Vec<_>, _>>()
        .context("scenario run")?;

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("unable to create {}", args.output))?;
    for outcome in &outcomes {
        writer.serialize(OutcomeRow {
            scenario: outcome.label.clone(),
            lifetime_healthcare_cost: outcome.lifetime_healthcare_cost,
            peak_annual_cost: outcome.peak_annual_cost,
            final_surplus: outcome.final_surplus,
            total_shortfall: outcome.total_shortfall,
            first_deficit_age: outcome.first_deficit_age,
            advisories: outcome.recommendations.len(),
        })?;
    }
    writer.flush()?;

    println!("\n{:<28} {:>16} {:>14} {:>14}", "Scenario", "Lifetime Cost", "Final Surplus", "Shortfall");
    println!("{}", "-".repeat(76));
    for outcome in &outcomes {
        println!(
            "{:<28} {:>16.0} {:>14.0} {:>14.0}",
            outcome.label,
            outcome.lifetime_healthcare_cost,
            outcome.final_surplus,
            outcome.total_shortfall,
        );
    }

    println!("\nResults written to: {}", args.output);

    Ok(())
}
