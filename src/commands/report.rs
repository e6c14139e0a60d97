use crate::cli::OutputFormat;
use crate::io::output::{JsonWriter, MarkdownWriter, OutputWriter};
use crate::io::{create_writer, load_dataset};
use crate::report::build_report;
use anyhow::Result;
use std::fs::File;
use std::path::PathBuf;

pub struct ReportConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub disorders: Option<Vec<String>>,
    pub config: Option<PathBuf>,
}

pub fn handle_report(config: ReportConfig) -> Result<()> {
    let dashboard_config = super::load_config(config.config.as_ref())?;
    let filter = super::build_filter(config.disorders.as_ref())?;
    let dataset = load_dataset(&config.path)?;
    let report = build_report(&config.path, &dataset, &filter, &dashboard_config)?;

    match config.output {
        Some(path) => {
            let file = File::create(&path)?;
            let mut writer: Box<dyn OutputWriter> = match config.format {
                OutputFormat::Json => Box::new(JsonWriter::new(file)),
                OutputFormat::Markdown => Box::new(MarkdownWriter::new(file)),
                // Colored terminal output makes no sense in a file; fall
                // back to markdown.
                OutputFormat::Terminal => Box::new(MarkdownWriter::new(file)),
            };
            writer.write_report(&report)?;
            log::info!("report written to {}", path.display());
        }
        None => {
            create_writer(config.format.into()).write_report(&report)?;
        }
    }
    Ok(())
}
