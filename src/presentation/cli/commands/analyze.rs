use anyhow::Context;
use colored::Colorize;

use crate::application::services::analysis::{AnalysisReport, AnalysisService};
use crate::domain::ports::store::{BuildingStore, ReadingStore};
use crate::presentation::cli::formatters::report_fmt::{
    format_kwh, format_money, print_section_header, severity_label,
};

/// Run a full analysis of one building's stored history and print the report.
///
/// The store is the single source of readings here: whatever was staged into
/// it comes back as a sorted snapshot, which is the ordering invariant the
/// engine assumes.
///
/// # Errors
///
/// Returns an error if the building is not registered, a store read fails, or
/// JSON serialization fails.
pub fn run_analyze<S>(
    service: &AnalysisService,
    store: &S,
    building_id: &str,
    json: bool,
) -> anyhow::Result<()>
where
    S: BuildingStore + ReadingStore,
{
    let building = store
        .get_building(building_id)?
        .with_context(|| format!("unknown building: {building_id}"))?;
    let readings = store.get_readings(building_id)?;
    let report = service.analyze(&building, &readings);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report_human(&report, readings.len());
    }
    Ok(())
}

fn print_report_human(report: &AnalysisReport, reading_count: usize) {
    println!();
    print_section_header(&format!(
        "{} — {} ({reading_count} readings)",
        report.building.name, report.building.building_type
    ));

    if report.anomalies.is_empty() {
        println!("{}", "No anomalies detected.".green());
        return;
    }

    println!();
    print_section_header("Anomalies");
    for anomaly in &report.anomalies {
        println!(
            "  [{}] {} {}  {}",
            severity_label(anomaly.severity),
            anomaly.kind,
            anomaly.timestamp.format("%Y-%m-%d %H:%M"),
            anomaly.description,
        );
    }

    if !report.recommendations.is_empty() {
        println!();
        print_section_header("Recommendations");
        for rec in &report.recommendations {
            println!("  {} {}", rec.id.dimmed(), rec.title.bold());
            println!("    {}", rec.description);
            println!("    Action  : {}", rec.action);
            println!("    Impact  : {}", rec.impact);
            println!("    Urgency : {}", rec.urgency);
        }
    }

    println!();
    print_section_header("Estimated savings");
    println!("  Energy : {}", format_kwh(report.savings.energy_kwh));
    println!("  Cost   : {}", format_money(report.savings.cost));
    println!("  Carbon : {:.1} kg CO2", report.savings.carbon_kg);
}
