use serde::Serialize;
use tracing::{debug, warn};

use crate::core::advisory::tips_for;
use crate::core::appliance::ApplianceInput;
use crate::core::policy::EnginePolicy;
use crate::core::units::{
    round_energy, round_money, round_percent, round_to_places, DAYS_PER_MONTH, MONEY_DECIMAL_PLACES,
    MONTHS_PER_YEAR, PERCENT, WATTS_PER_KILOWATT,
};

/// A household's monthly bill and the unit price it was charged at.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BillProfile {
    pub monthly_bill_amount: f64,
    pub price_per_unit: f64,
}

impl BillProfile {
    pub fn new(monthly_bill_amount: f64, price_per_unit: f64) -> Self {
        Self {
            monthly_bill_amount,
            price_per_unit,
        }
    }
}

/// Consumption and advice for one appliance, rounded for display.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ApplianceResult {
    pub name: String,
    pub power_watts: f64,
    pub daily_hours: f64,
    pub monthly_energy_kwh: f64,
    pub percent_of_bill: f64,
    pub tips: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct SavingsSummary {
    pub total_monthly_energy_kwh: f64,
    pub estimated_monthly_savings_kwh: f64,
    pub estimated_monthly_savings_money: f64,
    pub estimated_annual_savings_kwh: f64,
    pub estimated_annual_savings_money: f64,
}

/// Chart oriented view of how appliance consumption relates to the bill.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ConsumptionBreakdown {
    pub total_appliance_kwh: f64,
    pub total_units: f64,
    pub percent_of_bill_from_appliances: f64,
    /// Per appliance kWh saved each month if the savings fraction is achieved, in input order
    pub reduced_kwh: Vec<f64>,
}

/// kWh per month implied by the bill, or 0 when no unit price is known.
pub fn estimate_monthly_units(bill: &BillProfile) -> f64 {
    if bill.price_per_unit == 0. {
        warn!("No price per unit given; treating monthly consumption as unknown");
        return 0.;
    }

    bill.monthly_bill_amount / bill.price_per_unit
}

/// Energy used by an appliance over a 30 day month, in kWh.
pub fn compute_appliance_usage(input: &ApplianceInput) -> f64 {
    input.power_watts() * input.daily_hours() * DAYS_PER_MONTH as f64 / WATTS_PER_KILOWATT as f64
}

/// Share of the monthly units taken by an appliance, as a percentage; 0 when units are unknown.
pub fn compute_bill_share(appliance_kwh: f64, monthly_units: f64) -> f64 {
    if monthly_units > 0. {
        appliance_kwh / monthly_units * PERCENT
    } else {
        0.
    }
}

pub fn evaluate_appliance(input: &ApplianceInput, monthly_units: f64) -> ApplianceResult {
    let monthly_energy_kwh = compute_appliance_usage(input);
    let percent_of_bill = compute_bill_share(monthly_energy_kwh, monthly_units);
    let tips = tips_for(input);

    debug!(
        appliance = input.name(),
        monthly_energy_kwh,
        percent_of_bill,
        tips = tips.len(),
        "evaluated appliance"
    );

    ApplianceResult {
        name: input.name().to_string(),
        power_watts: input.power_watts(),
        daily_hours: input.daily_hours(),
        monthly_energy_kwh: round_energy(monthly_energy_kwh),
        percent_of_bill: round_percent(percent_of_bill),
        tips,
    }
}

/// Total consumption across the appliances and the savings expected from following the advice.
///
/// Totals are taken over the displayed (rounded) appliance figures, so the summary agrees with what
/// is shown per appliance.
pub fn aggregate(
    results: &[ApplianceResult],
    price_per_unit: f64,
    policy: &EnginePolicy,
) -> SavingsSummary {
    let total_monthly_energy_kwh = results
        .iter()
        .map(|result| result.monthly_energy_kwh)
        .sum::<f64>();
    let monthly_savings_kwh = total_monthly_energy_kwh * policy.savings_fraction;
    let monthly_savings_money = monthly_savings_kwh * price_per_unit;

    SavingsSummary {
        total_monthly_energy_kwh: round_energy(total_monthly_energy_kwh),
        estimated_monthly_savings_kwh: round_energy(monthly_savings_kwh),
        estimated_monthly_savings_money: round_money(monthly_savings_money),
        estimated_annual_savings_kwh: round_energy(monthly_savings_kwh * MONTHS_PER_YEAR as f64),
        estimated_annual_savings_money: round_money(monthly_savings_money * MONTHS_PER_YEAR as f64),
    }
}

pub fn breakdown(
    inputs: &[ApplianceInput],
    monthly_units: f64,
    policy: &EnginePolicy,
) -> ConsumptionBreakdown {
    let monthly_kwh = inputs.iter().map(compute_appliance_usage).collect::<Vec<_>>();
    let total_appliance_kwh = monthly_kwh.iter().sum::<f64>();

    if monthly_units > 0. && total_appliance_kwh > monthly_units {
        warn!(
            total_appliance_kwh,
            monthly_units,
            "Appliance consumption exceeds what the bill implies; check usage hours and unit price"
        );
    }

    ConsumptionBreakdown {
        total_appliance_kwh: round_to_places(total_appliance_kwh, MONEY_DECIMAL_PLACES),
        total_units: round_to_places(monthly_units, MONEY_DECIMAL_PLACES),
        percent_of_bill_from_appliances: round_to_places(
            compute_bill_share(total_appliance_kwh, monthly_units),
            MONEY_DECIMAL_PLACES,
        ),
        reduced_kwh: monthly_kwh
            .iter()
            .map(|kwh| round_to_places(kwh * policy.savings_fraction, MONEY_DECIMAL_PLACES))
            .collect(),
    }
}
