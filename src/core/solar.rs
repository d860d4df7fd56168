use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::consumption::compute_bill_share;
use crate::core::policy::SolarAssumptions;
use crate::core::units::{
    round_energy, round_money, round_percent, round_to_places, DAYS_PER_MONTH, DAYS_PER_YEAR,
    ENERGY_DECIMAL_PLACES, MONEY_DECIMAL_PLACES,
};

/// Rooftop solar installation sized to an available area, with its running costs and payback.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SolarPlan {
    pub system_size_kw: f64,
    pub installation_cost: f64,
    pub annual_maintenance_cost: f64,
    pub daily_generation_kwh: f64,
    pub monthly_generation_kwh: f64,
    pub annual_generation_kwh: f64,
    pub annual_savings_money: f64,
    pub net_annual_savings: f64,
    /// Years to recover the installation cost; infinite when savings never exceed maintenance
    pub payback_years: f64,
}

impl SolarPlan {
    pub fn pays_back(&self) -> bool {
        self.payback_years.is_finite()
    }
}

/// How much of the household's monthly consumption the installation would cover.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SolarComparison {
    pub monthly_units: f64,
    pub monthly_generation_kwh: f64,
    pub coverage_percent: f64,
}

#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[error("Rooftop area of {0}m2 is invalid; it must be a finite, non-negative number")]
pub struct InvalidRooftopArea(pub f64);

pub fn check_rooftop_area(rooftop_area_sqm: f64) -> Result<f64, InvalidRooftopArea> {
    if rooftop_area_sqm.is_finite() && rooftop_area_sqm >= 0. {
        Ok(rooftop_area_sqm)
    } else {
        Err(InvalidRooftopArea(rooftop_area_sqm))
    }
}

/// Size a solar installation to the rooftop and work out its return.
///
/// Arguments:
/// * `rooftop_area_sqm` - usable rooftop area, in m2
/// * `price_per_unit` - price paid per kWh imported, which generation offsets
/// * `assumptions` - yield and cost figures per kW installed
pub fn simulate(
    rooftop_area_sqm: f64,
    price_per_unit: f64,
    assumptions: &SolarAssumptions,
) -> SolarPlan {
    // downstream figures are based on the displayed system size
    let system_size_kw = round_to_places(
        rooftop_area_sqm / assumptions.area_per_kw_sqm,
        MONEY_DECIMAL_PLACES,
    );

    let installation_cost = system_size_kw * assumptions.installation_cost_per_kw;
    let annual_maintenance_cost = system_size_kw * assumptions.maintenance_cost_per_kw_per_year;

    let daily_generation_kwh = system_size_kw * assumptions.daily_yield_kwh_per_kw;
    let monthly_generation_kwh = daily_generation_kwh * DAYS_PER_MONTH as f64;
    let annual_generation_kwh = daily_generation_kwh * DAYS_PER_YEAR as f64;

    let annual_savings_money = annual_generation_kwh * price_per_unit;
    let net_annual_savings = annual_savings_money - annual_maintenance_cost;

    let payback_years = if annual_savings_money > annual_maintenance_cost {
        installation_cost / net_annual_savings
    } else {
        warn!(
            system_size_kw,
            annual_savings_money,
            annual_maintenance_cost,
            "Solar installation does not cover its maintenance cost and never pays back"
        );
        f64::INFINITY
    };

    debug!(
        rooftop_area_sqm,
        system_size_kw, annual_generation_kwh, payback_years, "simulated solar installation"
    );

    SolarPlan {
        system_size_kw,
        installation_cost: round_money(installation_cost),
        annual_maintenance_cost: round_money(annual_maintenance_cost),
        daily_generation_kwh: round_energy(daily_generation_kwh),
        monthly_generation_kwh: round_energy(monthly_generation_kwh),
        annual_generation_kwh: round_energy(annual_generation_kwh),
        annual_savings_money: round_money(annual_savings_money),
        net_annual_savings: round_money(net_annual_savings),
        payback_years: round_to_places(payback_years, ENERGY_DECIMAL_PLACES),
    }
}

pub fn compare_with_consumption(plan: &SolarPlan, monthly_units: f64) -> SolarComparison {
    SolarComparison {
        monthly_units: round_energy(monthly_units),
        monthly_generation_kwh: plan.monthly_generation_kwh,
        coverage_percent: round_percent(compute_bill_share(
            plan.monthly_generation_kwh,
            monthly_units,
        )),
    }
}
