use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, trace, warn};

use case_cli::logging::redact_value;
use case_cli::summary::{print_details, print_results};
use case_client::CaseClient;
use case_export::{ExportOutcome, ExportReport, NO_DATA_MESSAGE, today_utc, write_export};
use case_model::{Record, parse_records};

use crate::cli::{ExportArgs, ExportFormatArg, OutputArgs, SearchArgs, ShowArgs};

pub fn run_search(args: &SearchArgs) -> Result<()> {
    let filter = args.filter.to_filter();
    let search_span = info_span!("search", endpoint = %args.endpoint);
    let _search_guard = search_span.enter();

    let client = CaseClient::new(&args.endpoint).context("configure case client")?;
    for (name, value) in filter.query_pairs() {
        trace!(filter = name, value = redact_value(&value), "search filter");
    }
    let started = Instant::now();
    let cases = client
        .search(&filter)
        .inspect_err(|error| warn!(reason = error.user_message(), "search failed"))
        .context("Error fetching cases")?;
    info!(
        count = cases.len(),
        duration_ms = started.elapsed().as_millis(),
        "search complete"
    );

    present_results(&cases, args)?;
    Ok(())
}

/// List the results, then show details and write exports when requested.
///
/// A requested export still runs on an empty result so the "no data"
/// notice is printed.
fn present_results(
    cases: &[Record],
    args: &SearchArgs,
) -> Result<Vec<ExportOutcome<ExportReport>>> {
    if cases.is_empty() {
        println!("No cases found");
    } else {
        print_results(cases);
        if let Some(index) = args.details {
            show_case(cases, index)?;
        }
    }
    match args.export {
        Some(format) => export_records(cases, format, &args.output),
        None => Ok(Vec::new()),
    }
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let records = load_records(&args.input)?;
    info!(
        input = %args.input.display(),
        count = records.len(),
        "loaded cases"
    );
    export_records(&records, args.format, &args.output)?;
    Ok(())
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let records = load_records(&args.input)?;
    show_case(&records, args.index)
}

fn load_records(path: &Path) -> Result<Vec<Record>> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_records(&text).with_context(|| format!("parse cases from {}", path.display()))
}

fn show_case(records: &[Record], index: usize) -> Result<()> {
    let Some(record) = records.get(index) else {
        bail!(
            "no case at index {index} ({} case{} available)",
            records.len(),
            if records.len() == 1 { "" } else { "s" }
        );
    };
    print_details(record);
    Ok(())
}

fn export_records(
    records: &[Record],
    format: ExportFormatArg,
    output: &OutputArgs,
) -> Result<Vec<ExportOutcome<ExportReport>>> {
    let policy = output.cell_policy();
    let date = today_utc();
    let mut outcomes = Vec::with_capacity(format.formats().len());
    for &export_format in format.formats() {
        let outcome = write_export(&output.output_dir, export_format, records, policy, date)
            .with_context(|| format!("export {}", export_format.extension()))?;
        match &outcome {
            ExportOutcome::Ready(report) => {
                println!(
                    "{} {}",
                    export_format.success_message(),
                    report.path.display()
                );
            }
            ExportOutcome::NothingToExport => eprintln!("{NO_DATA_MESSAGE}"),
        }
        outcomes.push(outcome);
    }
    Ok(outcomes)
}
