use serde::Serialize;

use crate::core::appliance::ApplianceInput;
use crate::core::consumption::{
    aggregate, breakdown, estimate_monthly_units, evaluate_appliance, ApplianceResult,
    BillProfile, ConsumptionBreakdown, SavingsSummary,
};
use crate::core::policy::EnginePolicy;
use crate::core::solar::{
    check_rooftop_area, compare_with_consumption, simulate, InvalidRooftopArea, SolarComparison,
    SolarPlan,
};
use crate::core::units::round_energy;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HouseholdReport {
    pub bill: BillProfile,
    pub monthly_units: f64,
    pub appliances: Vec<ApplianceResult>,
    pub summary: SavingsSummary,
    pub breakdown: ConsumptionBreakdown,
    pub solar: Option<SolarReport>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SolarReport {
    pub rooftop_area_sqm: f64,
    pub plan: SolarPlan,
    pub comparison: SolarComparison,
}

/// Estimate consumption and savings for a household, and simulate solar when a rooftop is given.
pub fn assess_household(
    bill: &BillProfile,
    appliances: &[ApplianceInput],
    rooftop_area_sqm: Option<f64>,
    policy: &EnginePolicy,
) -> Result<HouseholdReport, InvalidRooftopArea> {
    let monthly_units = estimate_monthly_units(bill);

    let results = appliances
        .iter()
        .map(|appliance| evaluate_appliance(appliance, monthly_units))
        .collect::<Vec<_>>();
    let summary = aggregate(&results, bill.price_per_unit, policy);
    let breakdown = breakdown(appliances, monthly_units, policy);

    let solar = rooftop_area_sqm
        .map(|area| -> Result<SolarReport, InvalidRooftopArea> {
            let rooftop_area_sqm = check_rooftop_area(area)?;
            let plan = simulate(rooftop_area_sqm, bill.price_per_unit, &policy.solar);
            Ok(SolarReport {
                rooftop_area_sqm,
                plan,
                comparison: compare_with_consumption(&plan, monthly_units),
            })
        })
        .transpose()?;

    Ok(HouseholdReport {
        bill: *bill,
        monthly_units: round_energy(monthly_units),
        appliances: results,
        summary,
        breakdown,
        solar,
    })
}
