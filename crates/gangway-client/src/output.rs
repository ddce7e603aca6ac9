use gangway_core::orchestrator::BootReport;
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

/// Human rendering of a boot report: the ranked sample table (trace mode
/// only) followed by a one-line summary.
pub fn print_report(report: &BootReport) {
    if !report.samples.is_empty() {
        let name_width = report
            .samples
            .iter()
            .map(|s| s.name.len())
            .max()
            .unwrap_or(0)
            .max("initializer".len());

        println!("{:name_width$}  duration (ms)", "initializer");
        println!("{}  {}", "-".repeat(name_width), "-".repeat(13));
        for sample in &report.samples {
            println!("{:name_width$}  {:>13.3}", sample.name, sample.duration_ms);
        }
    }

    println!(
        "booted {} initializers in {:.3}ms",
        report.count, report.total_ms
    );
    if let Some(line) = report.slow_line() {
        println!("warning: {line}");
    }
}
