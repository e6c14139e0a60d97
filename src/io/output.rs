//! Report writers: JSON for machines, markdown for documents, colored
//! terminal output (with comfy-table for the record table) for humans.
//! Writers display report values verbatim; nothing is computed here.

use crate::core::{DashboardReport, Series};
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use std::io::Write;

#[derive(Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &DashboardReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &DashboardReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &DashboardReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_metrics(report)?;
        self.write_series("Gender", &report.gender_breakdown, "Count")?;
        self.write_series("BMI Category", &report.bmi_breakdown, "Count")?;
        self.write_series("Blood Pressure", &report.blood_pressure_funnel, "Count")?;
        self.write_series("Occupation", &report.occupation_treemap, "Count")?;
        for panel in &report.average_panels {
            self.write_series(&panel.title, &panel.series, "Mean")?;
        }
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &DashboardReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Sleep Health Dashboard")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Source: {}", report.source.display())?;
        writeln!(
            self.writer,
            "Selection: {} ({} of {} subjects)",
            report.filter.join(", "),
            report.selected,
            report.population
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_metrics(&mut self, report: &DashboardReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Metrics")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value | Note |")?;
        writeln!(self.writer, "|--------|-------|------|")?;
        for metric in &report.metrics {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                metric.title, metric.content, metric.trend
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_series(&mut self, title: &str, series: &Series, value_header: &str) -> anyhow::Result<()> {
        if series.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## {title}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Category | {value_header} |")?;
        writeln!(self.writer, "|----------|------|")?;
        for point in series.iter() {
            writeln!(self.writer, "| {} | {:.1} |", point.label, point.value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_report(&mut self, report: &DashboardReport) -> anyhow::Result<()> {
        print_header(report);
        print_metrics(report);
        print_breakdowns(report);
        print_table(report);
        Ok(())
    }
}

fn print_header(report: &DashboardReport) {
    println!("{}", "Sleep Health Dashboard".bold().blue());
    println!("{}", "======================".blue());
    println!(
        "Selection: {} ({} of {} subjects)",
        report.filter.join(", ").cyan(),
        report.selected,
        report.population
    );
    println!();
}

fn print_metrics(report: &DashboardReport) {
    for metric in &report.metrics {
        println!(
            "  {:<22} {:>12}   {}",
            metric.title.bold(),
            metric.content.to_string().green(),
            metric.trend.dimmed()
        );
    }
    println!();
}

fn print_breakdowns(report: &DashboardReport) {
    print_series("Gender", &report.gender_breakdown);
    print_series("BMI", &report.bmi_breakdown);
    print_series("Blood Pressure", &report.blood_pressure_funnel);
    print_series("Occupation", &report.occupation_treemap);
    for panel in &report.average_panels {
        print_series(&panel.title, &panel.series);
    }
}

fn print_series(title: &str, series: &Series) {
    if series.is_empty() {
        return;
    }
    println!("{}", title.bold());
    let max = series
        .iter()
        .map(|p| p.value)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0);
    for point in series.iter() {
        let width = ((point.value / max) * 30.0).round() as usize;
        println!(
            "  {:<22} {:>8.1} {}",
            point.label,
            point.value,
            "█".repeat(width).cyan()
        );
    }
    println!();
}

fn print_table(report: &DashboardReport) {
    if report.table.is_empty() {
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Gender",
            "Occupation",
            "Disorder",
            "BMI",
            "Quality",
            "Stress",
            "Steps",
            "Sleep (h)",
        ]);
    // Terminal output caps the row dump; full rows live in the JSON report.
    for row in report.table.iter().take(15) {
        table.add_row(vec![
            Cell::new(row.gender.label()),
            Cell::new(&row.occupation),
            Cell::new(if row.has_disorder { "yes" } else { "no" }),
            Cell::new(row.bmi_category.label()),
            Cell::new(format!("{:.0}/10", row.quality_of_sleep)),
            Cell::new(format!("{:.0}/10", row.stress_level)),
            Cell::new(format!("{:.0}", row.daily_steps)),
            Cell::new(format!("{:.1}", row.sleep_duration)),
        ]);
    }
    println!("{table}");
    if report.table.len() > 15 {
        println!("  ... and {} more rows", report.table.len() - 15);
    }
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}
