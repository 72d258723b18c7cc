//! Falk demo suite.
//!
//! Presentation layer for the `falk-select` / `falk-ising` stack: console
//! styling helpers and the ranked-selection table renderer.  The library
//! crates never print; everything user-facing lives here.

use console::style;

use falk_select::Report;

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Render the top `k` rows of a report as a fixed-width table.
///
/// One row per candidate selection, most probable first, matching the
/// report order exactly.
pub fn format_report_table(report: &Report, k: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>6}  {:<width$}  {:>12}  {:>12}\n",
        "rank",
        "selection",
        "value",
        "probability",
        width = report.n_vars().max("selection".len())
    ));
    for (rank, entry) in report.top(k).iter().enumerate() {
        out.push_str(&format!(
            "{:>6}  {:<width$}  {:>12.6}  {:>12.6}\n",
            rank + 1,
            entry.bitvec.to_string(),
            entry.score,
            entry.probability,
            width = report.n_vars().max("selection".len())
        ));
    }
    out
}

/// Print a report table with a dimmed header rule.
pub fn print_report_table(report: &Report, k: usize) {
    for (i, line) in format_report_table(report, k).lines().enumerate() {
        if i == 0 {
            println!("  {}", style(line).dim());
        } else {
            println!("  {line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use falk_select::Distribution;

    #[test]
    fn table_has_header_and_k_rows() {
        let dist = Distribution::from_probabilities(2, vec![0.1, 0.2, 0.3, 0.4]).unwrap();
        let report = Report::build(&dist, |bv| bv.count_ones() as f64);
        let table = format_report_table(&report, 3);
        assert_eq!(table.lines().count(), 4);
        assert!(table.lines().nth(1).unwrap().contains("11"));
    }

    #[test]
    fn table_clamps_k() {
        let dist = Distribution::uniform(2).unwrap();
        let report = Report::build(&dist, |_| 0.0);
        let table = format_report_table(&report, 100);
        assert_eq!(table.lines().count(), 5);
    }
}
