pub mod core;
pub mod errors;
pub mod input;
pub mod output;

use crate::core::report::{assess_household, HouseholdReport};
use crate::errors::{OutputError, WattwiseError};
use crate::input::ingest_for_processing;
use crate::output::Output;
use bitflags::bitflags;
use csv::WriterBuilder;
use std::io::{Read, Write};
use tracing::info;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct ProjectFlags: u8 {
        /// Validate the request without calculating or writing anything.
        const PREPROCESS_ONLY = 0b1;
        /// Ignore any rooftop area given in the request.
        const SKIP_SOLAR = 0b10;
    }
}

/// Assess a household request read as JSON, writing the appliance breakdown and full report to the output.
///
/// Returns `None` when only preprocessing was requested.
pub fn run_project(
    input: impl Read,
    output: impl Output,
    flags: &ProjectFlags,
) -> Result<Option<HouseholdReport>, WattwiseError> {
    let mut input_for_processing = ingest_for_processing(input)?;

    if flags.contains(ProjectFlags::SKIP_SOLAR) {
        input_for_processing.without_rooftop();
    }

    let appliances = input_for_processing.appliance_inputs()?;

    if flags.contains(ProjectFlags::PREPROCESS_ONLY) {
        info!(appliances = appliances.len(), "request is valid");
        return Ok(None);
    }

    let input = input_for_processing.finalize();

    let report = assess_household(
        &input.bill(),
        &appliances,
        input.rooftop_area,
        &input.policy,
    )?;

    if !output.is_noop() {
        write_appliance_file(&output, &report)
            .and_then(|_| write_report_file(&output, &report))
            .map_err(|err| WattwiseError::ErrorInOutput(OutputError::new(err)))?;
    }

    Ok(Some(report))
}

const APPLIANCE_HEADINGS: [&str; 7] = [
    "Appliance",
    "Power",
    "Daily use",
    "Monthly energy",
    "Share of bill",
    "Reduced energy",
    "Tips",
];
const APPLIANCE_UNITS: [&str; 7] = ["", "[W]", "[h/day]", "[kWh]", "[%]", "[kWh]", ""];
const TIP_SEPARATOR: &str = " | ";

fn write_appliance_file(output: &impl Output, report: &HouseholdReport) -> anyhow::Result<()> {
    let location_key = "appliances";
    info!("writing out to {location_key}");
    let writer = output.writer_for_location_key(location_key, "csv")?;
    let mut writer = WriterBuilder::new().flexible(true).from_writer(writer);

    writer.write_record(APPLIANCE_HEADINGS)?;
    writer.write_record(APPLIANCE_UNITS)?;

    for (appliance, reduced_kwh) in report
        .appliances
        .iter()
        .zip(report.breakdown.reduced_kwh.iter())
    {
        writer.write_record([
            appliance.name.clone(),
            appliance.power_watts.to_string(),
            appliance.daily_hours.to_string(),
            appliance.monthly_energy_kwh.to_string(),
            appliance.percent_of_bill.to_string(),
            reduced_kwh.to_string(),
            appliance.tips.join(TIP_SEPARATOR),
        ])?;
    }

    writer.write_record([
        "Total".to_string(),
        String::new(),
        String::new(),
        report.summary.total_monthly_energy_kwh.to_string(),
        report.breakdown.percent_of_bill_from_appliances.to_string(),
        report.summary.estimated_monthly_savings_kwh.to_string(),
    ])?;

    writer.flush()?;

    Ok(())
}

fn write_report_file(output: &impl Output, report: &HouseholdReport) -> anyhow::Result<()> {
    let location_key = "report";
    info!("writing out to {location_key}");
    let mut writer = output.writer_for_location_key(location_key, "json")?;

    // non-finite numbers such as a never-reached payback are written as null
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;

    Ok(())
}
