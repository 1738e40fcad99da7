//! Health Strategy System CLI
//!
//! Runs the full staged planning pipeline for a sample household and writes
//! the expense comparison to CSV

use anyhow::Context;
use health_strategy::capital::{CapitalAllocation, CapitalPlan, FundSource};
use health_strategy::profile::{validate, Gender, HealthStatus};
use health_strategy::{
    Assumptions, CarePreferences, FinancialInputs, InsurancePlan, InsuranceType, Profile, Session,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Health Strategy System v0.1.0");
    println!("=============================\n");

    // Sample household: age 35, family of four, employer coverage
    let profile = Profile::family(
        35,
        Gender::Female,
        HealthStatus::Healthy,
        2,
        vec![4, 7],
        36,
        HealthStatus::Chronic,
    );
    let care_prefs = CarePreferences {
        primary: true,
        preventive: true,
        surgical: true,
        pediatric: true,
        ..Default::default()
    };
    let plan = InsurancePlan::national_average(InsuranceType::EmployerBased, 0.05);

    validate::validate_profile(&profile)?;
    validate::validate_insurance(&plan)?;

    println!("Profile: age {}, {:?}, {:?}", profile.age, profile.health_status, profile.family_status);
    println!("  Dependents: {}", profile.num_dependents);
    println!("  Insurance: {}", plan.insurance_type.as_str());
    println!("  Annual premium: ${:.0}", plan.total_annual_premium());
    println!("  OOP share: {:.0}%", plan.oop_pct * 100.0);
    println!();

    let mut session = Session::new(Assumptions::default_planning());

    // Stage 1: profile, costs, insurance economics, risk trajectory
    let stage = session.submit_profile(profile, care_prefs, plan);
    let summary = stage.costs.summary();
    println!("Year 1 cost breakdown:");
    println!("  Premiums:       ${:>10.0}", summary.first_year_premiums);
    println!("  Out-of-pocket:  ${:>10.0}", summary.first_year_oop);
    println!("  Total:          ${:>10.0}", summary.first_year_total);
    println!();

    // Stage 2: financial capacity
    let inputs = FinancialInputs::default();
    validate::validate_financial(&inputs)?;
    session
        .submit_financial(inputs.clone())
        .context("financial stage")?;

    // Stage 3: expense vs income
    session.submit_reconciliation().context("reconciliation stage")?;

    // Stage 4: capital plan + recommendations
    let capital = CapitalPlan {
        source: FundSource::MonthlyIncome {
            contribution: 200.0,
        },
        allocation: CapitalAllocation::from_percentages(10.0, 20.0),
    };
    if let Some(costs) = session.cost_series() {
        if capital.exceeds_free_cash(&inputs, costs) {
            println!("Warning: planned capital contribution exceeds estimated free monthly cash");
        }
    }
    session
        .submit_recommendation(Some(capital))
        .context("recommendation stage")?;

    // Print the first years of the comparison table
    let comparison = session.expense_comparison().expect("stage 3 committed");
    println!(
        "{:>4} {:>12} {:>10} {:>10} {:>12} {:>14} {:>12}",
        "Age", "Household", "Debt", "OOP", "Healthcare", "Income+Svgs", "Surplus"
    );
    println!("{}", "-".repeat(80));
    for row in comparison.rows.iter().take(15) {
        println!(
            "{:>4} {:>12.0} {:>10.0} {:>10.0} {:>12.0} {:>14.0} {:>12.0}",
            row.age,
            row.household,
            row.debt,
            row.oop,
            row.total_healthcare,
            row.income_plus_savings,
            row.surplus,
        );
    }
    if comparison.len() > 15 {
        println!("... ({} more years)", comparison.len() - 15);
    }

    // Write the full comparison to CSV
    let csv_path = "expense_comparison.csv";
    let mut writer = csv::Writer::from_path(csv_path)
        .with_context(|| format!("unable to create {csv_path}"))?;
    for row in &comparison.rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    println!("\nFull comparison written to: {csv_path}");

    // Recommendations
    println!("\nRecommendations:");
    for rec in session.recommendations().expect("stage 4 committed") {
        println!("  - {rec}");
    }

    // Risk milestones
    let risk = session.risk_trajectory().expect("stage 1 committed");
    println!("\nRisk trajectory:");
    println!("  Years projected: {}", risk.len());
    println!("  Peak score: {:.2}", risk.max_score());
    match risk.critical_age() {
        Some(age) => println!("  Critical from age: {age}"),
        None => println!("  Never reaches the high-risk zone"),
    }

    Ok(())
}
