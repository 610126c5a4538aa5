use colored::{ColoredString, Colorize};

use crate::domain::value_objects::severity::Severity;

pub fn print_section_header(title: &str) {
    println!("{}", title.bold().cyan());
    let display_width = title.chars().count();
    println!("{}", "─".repeat(display_width).cyan());
}

#[must_use]
pub fn severity_label(severity: Severity) -> ColoredString {
    let text = severity.to_string();
    match severity {
        Severity::High => text.red().bold(),
        Severity::Medium => text.yellow(),
        Severity::Low => text.blue(),
    }
}

/// Format a signed kWh figure, one decimal.
#[must_use]
pub fn format_kwh(value: f64) -> String {
    format!("{value:.1} kWh")
}

/// Format a dollar amount, two decimals, sign in front of the symbol.
#[must_use]
pub fn format_money(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", value.abs())
    } else {
        format!("${value:.2}")
    }
}
