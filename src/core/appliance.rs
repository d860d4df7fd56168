use indexmap::IndexMap;
use serde::Serialize;
use std::str::FromStr;
use std::sync::LazyLock;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::core::units::HOURS_PER_DAY;

/// Appliance categories known to the catalog and to the advisory rules.
///
/// Parsing is an exact, ASCII case-insensitive match against the canonical name, so
/// "air conditioner" and "AIR CONDITIONER" resolve but "Air-Conditioner" does not.
#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, PartialEq, Serialize)]
#[strum(ascii_case_insensitive)]
pub enum ApplianceCategory {
    #[strum(serialize = "Air Conditioner")]
    #[serde(rename = "Air Conditioner")]
    AirConditioner,
    Geyser,
    Refrigerator,
    #[strum(serialize = "Washing Machine")]
    #[serde(rename = "Washing Machine")]
    WashingMachine,
    Microwave,
    #[strum(serialize = "Ceiling Fan")]
    #[serde(rename = "Ceiling Fan")]
    CeilingFan,
    #[strum(serialize = "LED Bulb")]
    #[serde(rename = "LED Bulb")]
    LedBulb,
    Television,
    Computer,
}

impl ApplianceCategory {
    /// Typical rated power of an appliance of this category, in W.
    pub fn typical_wattage(&self) -> f64 {
        match self {
            ApplianceCategory::AirConditioner => 1500.,
            ApplianceCategory::Geyser => 2000.,
            ApplianceCategory::Refrigerator => 150.,
            ApplianceCategory::WashingMachine => 500.,
            ApplianceCategory::Microwave => 1200.,
            ApplianceCategory::CeilingFan => 75.,
            ApplianceCategory::LedBulb => 10.,
            ApplianceCategory::Television => 120.,
            ApplianceCategory::Computer => 200.,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_str(name).ok()
    }
}

/// Read-only catalog of typical wattages, in the order appliances are offered to users.
pub static APPLIANCE_CATALOG: LazyLock<IndexMap<ApplianceCategory, f64>> = LazyLock::new(|| {
    ApplianceCategory::iter()
        .map(|category| (category, category.typical_wattage()))
        .collect()
});

pub fn catalog_wattage(name: &str) -> Option<f64> {
    ApplianceCategory::from_name(name).map(|category| APPLIANCE_CATALOG[&category])
}

/// A single appliance as supplied by the caller: its name, rated power in W and hours of use per day.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ApplianceInput {
    name: String,
    power_watts: f64,
    daily_hours: f64,
}

impl ApplianceInput {
    /// Construct an appliance input, checking that the figures are usable.
    ///
    /// Arguments:
    /// * `name` - free text or a catalog name
    /// * `power_watts` - rated power, in W; must be finite and non-negative
    /// * `daily_hours` - hours of use per day; must lie within [0, 24]
    pub fn new(
        name: impl Into<String>,
        power_watts: f64,
        daily_hours: f64,
    ) -> Result<Self, InvalidApplianceInput> {
        let name = name.into();

        if !power_watts.is_finite() || power_watts < 0. {
            return Err(InvalidApplianceInput::PowerOutOfRange { name, power_watts });
        }
        if !daily_hours.is_finite() || !(0. ..=HOURS_PER_DAY as f64).contains(&daily_hours) {
            return Err(InvalidApplianceInput::HoursOutOfRange { name, daily_hours });
        }

        Ok(Self {
            name,
            power_watts,
            daily_hours,
        })
    }

    /// Construct an appliance input using the catalog wattage for the given name.
    pub fn from_catalog(
        name: impl Into<String>,
        daily_hours: f64,
    ) -> Result<Self, ApplianceLookupError> {
        let name = name.into();
        let power_watts = catalog_wattage(&name).ok_or_else(|| UnknownAppliance(name.clone()))?;

        Ok(Self::new(name, power_watts, daily_hours)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn power_watts(&self) -> f64 {
        self.power_watts
    }

    pub fn daily_hours(&self) -> f64 {
        self.daily_hours
    }

    pub fn category(&self) -> Option<ApplianceCategory> {
        ApplianceCategory::from_name(&self.name)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum InvalidApplianceInput {
    #[error("Appliance '{name}' has a power rating of {power_watts}W; it must be a finite, non-negative number")]
    PowerOutOfRange { name: String, power_watts: f64 },
    #[error("Appliance '{name}' is used for {daily_hours} hours/day; usage must be between 0 and 24 hours")]
    HoursOutOfRange { name: String, daily_hours: f64 },
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("Appliance '{0}' is not in the catalog, so a power rating must be given")]
pub struct UnknownAppliance(pub String);

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApplianceLookupError {
    #[error(transparent)]
    Unknown(#[from] UnknownAppliance),
    #[error(transparent)]
    Invalid(#[from] InvalidApplianceInput),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn catalog_should_list_nine_appliances_in_menu_order() {
        let names = APPLIANCE_CATALOG
            .keys()
            .map(|category| category.to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                "Air Conditioner",
                "Geyser",
                "Refrigerator",
                "Washing Machine",
                "Microwave",
                "Ceiling Fan",
                "LED Bulb",
                "Television",
                "Computer"
            ]
        );
    }

    #[rstest]
    #[case("Air Conditioner", Some(1500.))]
    #[case("air conditioner", Some(1500.))]
    #[case("GEYSER", Some(2000.))]
    #[case("led bulb", Some(10.))]
    #[case("LED TV", None)]
    #[case(" Refrigerator", None)]
    fn should_look_up_catalog_wattage_case_insensitively(
        #[case] name: &str,
        #[case] expected: Option<f64>,
    ) {
        assert_eq!(catalog_wattage(name), expected);
    }

    #[rstest]
    fn should_accept_boundary_values() {
        assert!(ApplianceInput::new("Clock", 0., 0.).is_ok());
        assert!(ApplianceInput::new("Router", 10., 24.).is_ok());
    }

    #[rstest]
    #[case(-1., 1.)]
    #[case(f64::NAN, 1.)]
    #[case(f64::INFINITY, 1.)]
    fn should_reject_bad_power(#[case] power_watts: f64, #[case] daily_hours: f64) {
        assert!(matches!(
            ApplianceInput::new("Heater", power_watts, daily_hours),
            Err(InvalidApplianceInput::PowerOutOfRange { .. })
        ));
    }

    #[rstest]
    #[case(-0.5)]
    #[case(24.5)]
    #[case(f64::NAN)]
    fn should_reject_bad_hours(#[case] daily_hours: f64) {
        assert!(matches!(
            ApplianceInput::new("Heater", 1000., daily_hours),
            Err(InvalidApplianceInput::HoursOutOfRange { .. })
        ));
    }

    #[rstest]
    fn should_build_from_catalog_and_keep_given_name() {
        let appliance = ApplianceInput::from_catalog("ceiling fan", 10.).unwrap();
        assert_eq!(appliance.name(), "ceiling fan");
        assert_eq!(appliance.power_watts(), 75.);
        assert_eq!(appliance.category(), Some(ApplianceCategory::CeilingFan));
    }

    #[rstest]
    fn should_fail_catalog_lookup_for_unknown_name() {
        assert_eq!(
            ApplianceInput::from_catalog("Iron", 1.),
            Err(ApplianceLookupError::Unknown(UnknownAppliance(
                "Iron".to_string()
            )))
        );
    }
}
