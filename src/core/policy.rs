use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Domain policy constants used by the calculations.
///
/// Every field has a default, so a request only needs to name the values it overrides.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct EnginePolicy {
    /// Share of appliance consumption assumed saveable by following the advice
    #[validate(minimum = 0.)]
    #[validate(maximum = 1.)]
    pub savings_fraction: f64,
    #[validate]
    pub solar: SolarAssumptions,
}

impl Default for EnginePolicy {
    fn default() -> Self {
        Self {
            savings_fraction: DEFAULT_SAVINGS_FRACTION,
            solar: Default::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct SolarAssumptions {
    /// Rooftop area needed per kW of installed capacity, in m2
    #[validate(exclusive_minimum = 0.)]
    pub area_per_kw_sqm: f64,
    /// Generation per kW of installed capacity per day, in kWh
    #[validate(minimum = 0.)]
    pub daily_yield_kwh_per_kw: f64,
    #[validate(minimum = 0.)]
    pub installation_cost_per_kw: f64,
    #[validate(minimum = 0.)]
    pub maintenance_cost_per_kw_per_year: f64,
}

impl Default for SolarAssumptions {
    fn default() -> Self {
        Self {
            area_per_kw_sqm: DEFAULT_AREA_PER_KW_SQM,
            daily_yield_kwh_per_kw: DEFAULT_DAILY_YIELD_KWH_PER_KW,
            installation_cost_per_kw: DEFAULT_INSTALLATION_COST_PER_KW,
            maintenance_cost_per_kw_per_year: DEFAULT_MAINTENANCE_COST_PER_KW_PER_YEAR,
        }
    }
}

pub const DEFAULT_SAVINGS_FRACTION: f64 = 0.10;
pub const DEFAULT_AREA_PER_KW_SQM: f64 = 9.;
pub const DEFAULT_DAILY_YIELD_KWH_PER_KW: f64 = 4.5;
pub const DEFAULT_INSTALLATION_COST_PER_KW: f64 = 50_000.;
pub const DEFAULT_MAINTENANCE_COST_PER_KW_PER_YEAR: f64 = 2_000.;
