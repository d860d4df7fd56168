//! Rule table mapping an appliance to energy saving advice.
//!
//! Advice is produced in two passes: a category pass, where the first rule whose category matches
//! the appliance name contributes its tips, and a high power pass that suggests a more efficient
//! replacement for any appliance over [`HIGH_POWER_THRESHOLD_WATTS`] whose category does not already
//! carry power specific advice.

use crate::core::appliance::{ApplianceCategory, ApplianceInput};

/// Rated power above which an appliance counts as high power, in W.
pub const HIGH_POWER_THRESHOLD_WATTS: f64 = 1000.;

type Condition = fn(&ApplianceInput) -> bool;

struct ConditionalTip {
    when: Condition,
    tip: &'static str,
}

struct AdvisoryRule {
    category: ApplianceCategory,
    /// The rule contributes nothing unless this holds.
    applies_when: Condition,
    /// Tip placed ahead of the fixed tips when its condition holds.
    leading_tip: Option<ConditionalTip>,
    tips: &'static [&'static str],
    exempt_from_high_power_tip: bool,
}

fn always(_: &ApplianceInput) -> bool {
    true
}

fn geyser_used_over_half_an_hour(appliance: &ApplianceInput) -> bool {
    appliance.daily_hours() > 0.5
}

fn air_conditioner_used_over_four_hours(appliance: &ApplianceInput) -> bool {
    appliance.daily_hours() > 4.
}

fn bulb_over_twenty_watts(appliance: &ApplianceInput) -> bool {
    appliance.power_watts() > 20.
}

static ADVISORY_RULES: [AdvisoryRule; 9] = [
    AdvisoryRule {
        category: ApplianceCategory::Geyser,
        applies_when: always,
        leading_tip: Some(ConditionalTip {
            when: geyser_used_over_half_an_hour,
            tip: "Reduce geyser usage to under 30 mins/day.",
        }),
        tips: &[
            "Use a timer or smart plug to prevent overuse.",
            "Set thermostat to 50–55°C.",
            "👉 Example: Racold 5-Star 15L Storage Geyser (₹8,500)",
        ],
        exempt_from_high_power_tip: true,
    },
    AdvisoryRule {
        category: ApplianceCategory::AirConditioner,
        applies_when: always,
        leading_tip: Some(ConditionalTip {
            when: air_conditioner_used_over_four_hours,
            tip: "Try reducing A/C use by 1 hour/day or use sleep mode.",
        }),
        tips: &[
            "Set thermostat to 24–25°C for optimal efficiency.",
            "Clean air filters every 2 weeks.",
            "Upgrade to a BEE 5-star inverter AC.",
            "👉 Example: LG 1.5 Ton 5-Star Inverter Split AC (₹45,000)",
        ],
        exempt_from_high_power_tip: true,
    },
    AdvisoryRule {
        category: ApplianceCategory::Refrigerator,
        applies_when: always,
        leading_tip: None,
        tips: &[
            "Keep fridge 2-3 inches from wall for ventilation.",
            "Avoid frequent door opening.",
            "👉 Example: Samsung 253L 3-Star Inverter (₹24,000)",
        ],
        exempt_from_high_power_tip: false,
    },
    AdvisoryRule {
        category: ApplianceCategory::WashingMachine,
        applies_when: always,
        leading_tip: None,
        tips: &[
            "Wash only full loads or use eco/half-load mode.",
            "Use cold water cycles.",
            "👉 Example: Bosch 7kg Front Load 5-Star (₹28,000)",
        ],
        exempt_from_high_power_tip: false,
    },
    AdvisoryRule {
        category: ApplianceCategory::Microwave,
        applies_when: always,
        leading_tip: None,
        tips: &[
            "Avoid preheating unless necessary.",
            "Use auto-cook presets for optimized energy use.",
        ],
        exempt_from_high_power_tip: true,
    },
    AdvisoryRule {
        category: ApplianceCategory::CeilingFan,
        applies_when: always,
        leading_tip: None,
        tips: &[
            "Clean blades for efficient airflow.",
            "Use BLDC fans for 65% savings.",
            "👉 Example: Atomberg Renesa BLDC Fan (₹3,000)",
        ],
        exempt_from_high_power_tip: false,
    },
    AdvisoryRule {
        category: ApplianceCategory::LedBulb,
        applies_when: bulb_over_twenty_watts,
        leading_tip: None,
        tips: &[
            "Switch to certified 9W LED bulbs.",
            "👉 Example: Philips 9W B22 LED Bulb (₹80)",
        ],
        exempt_from_high_power_tip: false,
    },
    AdvisoryRule {
        category: ApplianceCategory::Television,
        applies_when: always,
        leading_tip: None,
        tips: &["Use low brightness mode and power off when not in use."],
        exempt_from_high_power_tip: false,
    },
    AdvisoryRule {
        category: ApplianceCategory::Computer,
        applies_when: always,
        leading_tip: None,
        tips: &[
            "Use energy saver/sleep mode.",
            "Switch off monitor if idle for long.",
        ],
        exempt_from_high_power_tip: false,
    },
];

fn rule_for(category: ApplianceCategory) -> Option<&'static AdvisoryRule> {
    ADVISORY_RULES.iter().find(|rule| rule.category == category)
}

fn category_tips(appliance: &ApplianceInput, rule: &AdvisoryRule) -> Vec<String> {
    if !(rule.applies_when)(appliance) {
        return vec![];
    }

    rule.leading_tip
        .iter()
        .filter(|leading| (leading.when)(appliance))
        .map(|leading| leading.tip)
        .chain(rule.tips.iter().copied())
        .map(String::from)
        .collect()
}

fn high_power_tip(appliance: &ApplianceInput, rule: Option<&AdvisoryRule>) -> Option<String> {
    let exempt = rule.is_some_and(|rule| rule.exempt_from_high_power_tip);

    (appliance.power_watts() > HIGH_POWER_THRESHOLD_WATTS && !exempt).then(|| {
        format!(
            "Consider replacing {} with a more efficient model.",
            appliance.name()
        )
    })
}

/// Ordered energy saving tips for an appliance.
///
/// The result depends only on the appliance's name, power and daily hours, so the same input
/// always yields the same sequence.
pub fn tips_for(appliance: &ApplianceInput) -> Vec<String> {
    let rule = appliance.category().and_then(rule_for);

    let mut tips = rule
        .map(|rule| category_tips(appliance, rule))
        .unwrap_or_default();
    tips.extend(high_power_tip(appliance, rule));

    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn appliance(name: &str, power_watts: f64, daily_hours: f64) -> ApplianceInput {
        ApplianceInput::new(name, power_watts, daily_hours).unwrap()
    }

    const HIGH_POWER_SUFFIX: &str = "with a more efficient model.";

    fn has_high_power_tip(tips: &[String]) -> bool {
        tips.iter().any(|tip| tip.ends_with(HIGH_POWER_SUFFIX))
    }

    #[rstest]
    fn every_category_should_have_exactly_one_rule() {
        use strum::IntoEnumIterator;

        for category in ApplianceCategory::iter() {
            assert_eq!(
                ADVISORY_RULES
                    .iter()
                    .filter(|rule| rule.category == category)
                    .count(),
                1,
                "expected one rule for {category}"
            );
        }
    }

    #[rstest]
    fn geyser_used_for_long_gets_reduction_tip_first() {
        let tips = tips_for(&appliance("Geyser", 2000., 1.));
        assert_eq!(
            tips,
            [
                "Reduce geyser usage to under 30 mins/day.",
                "Use a timer or smart plug to prevent overuse.",
                "Set thermostat to 50–55°C.",
                "👉 Example: Racold 5-Star 15L Storage Geyser (₹8,500)",
            ]
        );
    }

    #[rstest]
    fn geyser_used_briefly_still_gets_fixed_tips() {
        let tips = tips_for(&appliance("geyser", 2000., 0.5));
        assert_eq!(tips.len(), 3);
        assert_eq!(tips[0], "Use a timer or smart plug to prevent overuse.");
    }

    #[rstest]
    #[case(5., 5)]
    #[case(4., 4)]
    fn air_conditioner_tips_depend_on_hours(
        #[case] daily_hours: f64,
        #[case] expected_count: usize,
    ) {
        let tips = tips_for(&appliance("AIR CONDITIONER", 1500., daily_hours));
        assert_eq!(tips.len(), expected_count);
        assert_eq!(
            tips.last().unwrap(),
            "👉 Example: LG 1.5 Ton 5-Star Inverter Split AC (₹45,000)"
        );
    }

    #[rstest]
    fn air_conditioner_never_gets_high_power_tip() {
        assert!(!has_high_power_tip(&tips_for(&appliance("Air Conditioner", 1200., 8.))));
    }

    #[rstest]
    #[case("Geyser", 3000.)]
    #[case("Microwave", 1200.)]
    fn exempt_categories_never_get_high_power_tip(#[case] name: &str, #[case] power_watts: f64) {
        assert!(!has_high_power_tip(&tips_for(&appliance(name, power_watts, 1.))));
    }

    #[rstest]
    fn high_power_uncatalogued_appliance_gets_replacement_tip() {
        assert_eq!(
            tips_for(&appliance("Iron", 1200., 1.)),
            ["Consider replacing Iron with a more efficient model."]
        );
    }

    #[rstest]
    fn high_power_tip_follows_category_tips() {
        let tips = tips_for(&appliance("Washing Machine", 2100., 1.));
        assert_eq!(tips.len(), 4);
        assert_eq!(
            tips[3],
            "Consider replacing Washing Machine with a more efficient model."
        );
    }

    #[rstest]
    fn exactly_1000_watts_is_not_high_power() {
        assert!(tips_for(&appliance("Kettle", 1000., 0.2)).is_empty());
    }

    #[rstest]
    fn dim_led_bulb_gets_no_tips() {
        assert!(tips_for(&appliance("LED Bulb", 15., 6.)).is_empty());
    }

    #[rstest]
    fn bright_led_bulb_gets_led_tips() {
        assert_eq!(
            tips_for(&appliance("LED Bulb", 25., 6.)),
            [
                "Switch to certified 9W LED bulbs.",
                "👉 Example: Philips 9W B22 LED Bulb (₹80)",
            ]
        );
    }

    #[rstest]
    fn very_high_power_led_bulb_is_not_exempt() {
        let tips = tips_for(&appliance("led bulb", 1500., 1.));
        assert_eq!(tips.len(), 3);
        assert!(has_high_power_tip(&tips));
    }

    #[rstest]
    #[case("Refrigerator", 3)]
    #[case("washing machine", 3)]
    #[case("Microwave", 2)]
    #[case("Ceiling Fan", 3)]
    #[case("Television", 1)]
    #[case("computer", 2)]
    #[case("LED TV", 0)]
    fn should_give_fixed_tip_count_for_everyday_use(#[case] name: &str, #[case] expected: usize) {
        assert_eq!(tips_for(&appliance(name, 100., 2.)).len(), expected);
    }

    #[rstest]
    fn should_be_deterministic() {
        let fridge = appliance("Refrigerator", 150., 24.);
        assert_eq!(tips_for(&fridge), tips_for(&fridge));
    }
}
