use crate::core::appliance::{ApplianceInput, ApplianceLookupError};
use crate::core::consumption::BillProfile;
use crate::core::policy::EnginePolicy;
use anyhow::bail;
use serde::Deserialize;
use serde_valid::Validate;
use std::io::{BufReader, Read};

pub fn ingest_for_processing(json: impl Read) -> Result<InputForProcessing, anyhow::Error> {
    InputForProcessing::init_with_json(json)
}

/// A household request: the bill, the appliances in use and optionally a rooftop to consider for solar.
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct Input {
    /// Monthly electricity bill, in currency units
    #[validate(minimum = 0.)]
    pub bill_amount: f64,
    /// Price per kWh; 0 means unknown
    #[validate(minimum = 0.)]
    pub price_per_unit: f64,
    #[serde(default)]
    pub appliances: Vec<ApplianceDetails>,
    /// Usable rooftop area, in m2
    #[validate(minimum = 0.)]
    pub rooftop_area: Option<f64>,
    #[serde(default)]
    #[validate]
    pub policy: EnginePolicy,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplianceDetails {
    pub name: String,
    /// Rated power, in W; looked up in the appliance catalog when absent
    pub power_watts: Option<f64>,
    pub daily_hours: f64,
}

impl ApplianceDetails {
    fn to_appliance_input(&self) -> Result<ApplianceInput, ApplianceLookupError> {
        match self.power_watts {
            Some(power_watts) => Ok(ApplianceInput::new(
                self.name.clone(),
                power_watts,
                self.daily_hours,
            )?),
            None => ApplianceInput::from_catalog(self.name.clone(), self.daily_hours),
        }
    }
}

impl Input {
    pub fn bill(&self) -> BillProfile {
        BillProfile::new(self.bill_amount, self.price_per_unit)
    }
}

#[derive(Debug)]
pub struct InputForProcessing {
    input: Input,
}

impl InputForProcessing {
    pub fn init_with_json(json: impl Read) -> Result<Self, anyhow::Error> {
        let reader = BufReader::new(json);

        let input: Input = serde_json::from_reader(reader)?;

        if let Err(errors) = input.validate() {
            bail!("Invalid request: {errors}");
        }

        Ok(Self { input })
    }

    /// Resolve every appliance to a checked input, filling in catalog wattages where none was given.
    pub fn appliance_inputs(&self) -> Result<Vec<ApplianceInput>, ApplianceLookupError> {
        self.input
            .appliances
            .iter()
            .map(ApplianceDetails::to_appliance_input)
            .collect()
    }

    pub fn without_rooftop(&mut self) -> &Self {
        self.input.rooftop_area = None;
        self
    }

    pub fn finalize(self) -> Input {
        self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    const REQUEST: &str = r#"{
        "bill_amount": 5000,
        "price_per_unit": 8,
        "appliances": [
            {"name": "Refrigerator", "power_watts": 150, "daily_hours": 24},
            {"name": "geyser", "daily_hours": 0.5}
        ],
        "rooftop_area": 100
    }"#;

    #[rstest]
    fn should_ingest_request() {
        let input = ingest_for_processing(REQUEST.as_bytes()).unwrap();
        let appliances = input.appliance_inputs().unwrap();

        assert_eq!(appliances.len(), 2);
        assert_eq!(appliances[1].name(), "geyser");
        assert_eq!(appliances[1].power_watts(), 2000.);

        let input = input.finalize();
        assert_eq!(input.bill(), BillProfile::new(5000., 8.));
        assert_eq!(input.rooftop_area, Some(100.));
        assert_eq!(input.policy, EnginePolicy::default());
    }

    #[rstest]
    fn should_default_to_no_appliances_and_no_rooftop() {
        let input = ingest_for_processing(r#"{"bill_amount": 0, "price_per_unit": 0}"#.as_bytes())
            .unwrap()
            .finalize();

        assert!(input.appliances.is_empty());
        assert_eq!(input.rooftop_area, None);
    }

    #[rstest]
    fn should_drop_rooftop_on_request() {
        let mut input = ingest_for_processing(REQUEST.as_bytes()).unwrap();
        input.without_rooftop();
        assert_eq!(input.finalize().rooftop_area, None);
    }

    #[rstest]
    #[case(r#"{"bill_amount": -1, "price_per_unit": 8}"#)]
    #[case(r#"{"bill_amount": 100, "price_per_unit": -8}"#)]
    #[case(r#"{"bill_amount": 100, "price_per_unit": 8, "rooftop_area": -5}"#)]
    #[case(r#"{"bill_amount": 100, "price_per_unit": 8, "policy": {"savings_fraction": 2}}"#)]
    #[case(r#"{"bill_amount": 100, "price_per_unit": 8, "currency": "INR"}"#)]
    #[case(r#"{"bill_amount": 100}"#)]
    fn should_reject_invalid_requests(#[case] json: &str) {
        assert!(ingest_for_processing(json.as_bytes()).is_err());
    }

    #[rstest]
    fn should_reject_unknown_appliance_without_wattage() {
        let input = ingest_for_processing(
            r#"{"bill_amount": 100, "price_per_unit": 8, "appliances": [{"name": "Iron", "daily_hours": 1}]}"#
                .as_bytes(),
        )
        .unwrap();

        let err = input.appliance_inputs().unwrap_err();
        assert!(matches!(err, ApplianceLookupError::Unknown(_)));
        assert!(err.to_string().contains("Iron"));
    }

    #[rstest]
    fn should_reject_appliance_used_over_a_day() {
        let input = ingest_for_processing(
            r#"{"bill_amount": 100, "price_per_unit": 8, "appliances": [{"name": "Fan", "power_watts": 75, "daily_hours": 25}]}"#
                .as_bytes(),
        )
        .unwrap();

        assert!(matches!(
            input.appliance_inputs(),
            Err(ApplianceLookupError::Invalid(_))
        ));
    }
}
