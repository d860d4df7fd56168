extern crate wattwise;

use clap::Parser;
use std::ffi::OsStr;
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;
use wattwise::output::FileOutput;
use wattwise::{run_project, ProjectFlags};

#[derive(Parser, Default, Debug)]
#[clap(author, version, about, long_about = None)]
struct WattwiseArgs {
    input_file: String,
    #[arg(
        long,
        short,
        help = "Directory to write results to; defaults to the input file's directory"
    )]
    output_dir: Option<PathBuf>,
    #[arg(
        long,
        short,
        default_value_t = false,
        help = "Validate the request without calculating"
    )]
    preprocess_only: bool,
    #[arg(
        long,
        default_value_t = false,
        help = "Ignore any rooftop area and skip the solar simulation"
    )]
    skip_solar: bool,
    #[arg(long, short, default_value_t = false, help = "Log each appliance evaluated")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = WattwiseArgs::parse();

    let subscriber = tracing_subscriber::fmt::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting tracing subscriber failed");

    let input_file = Path::new(args.input_file.as_str());
    let input_file_name = input_file
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("household");

    let output_path = match args.output_dir {
        Some(dir) => dir,
        None => input_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };
    fs::create_dir_all(&output_path)?;

    let file_output = FileOutput::new(output_path, format!("{input_file_name}__{{}}.{{}}"));

    let mut flags = ProjectFlags::empty();
    flags.set(ProjectFlags::PREPROCESS_ONLY, args.preprocess_only);
    flags.set(ProjectFlags::SKIP_SOLAR, args.skip_solar);

    let report = run_project(BufReader::new(File::open(input_file)?), &file_output, &flags)?;

    match report {
        Some(report) => {
            info!(
                monthly_units = report.monthly_units,
                total_appliance_kwh = report.summary.total_monthly_energy_kwh,
                monthly_savings = report.summary.estimated_monthly_savings_money,
                "assessment complete"
            );
            if let Some(solar) = report.solar {
                info!(
                    system_size_kw = solar.plan.system_size_kw,
                    payback_years = solar.plan.payback_years,
                    "solar simulation complete"
                );
            }
        }
        None => info!("preprocessing complete"),
    }

    Ok(())
}
