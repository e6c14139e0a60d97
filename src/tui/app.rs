//! Dashboard application state.
//!
//! The full dataset is loaded once; every filter toggle recomputes the
//! whole report from scratch. There is no caching between selections, so
//! the display always reflects exactly the current subset.

use crate::config::DashboardConfig;
use crate::core::{DashboardReport, Dataset, SleepDisorder};
use crate::errors::Result;
use crate::filter::DisorderFilter;
use crate::report::build_report;
use std::path::PathBuf;

pub struct App {
    source: PathBuf,
    dataset: Dataset,
    config: DashboardConfig,
    pub filter: DisorderFilter,
    pub report: DashboardReport,
    /// Cursor position in the disorder filter pane.
    pub cursor: usize,
    /// First visible row of the record table.
    pub table_offset: usize,
    should_quit: bool,
}

impl App {
    pub fn new(
        source: PathBuf,
        dataset: Dataset,
        filter: DisorderFilter,
        config: DashboardConfig,
    ) -> Result<Self> {
        let report = build_report(&source, &dataset, &filter, &config)?;
        Ok(Self {
            source,
            dataset,
            config,
            filter,
            report,
            cursor: 0,
            table_offset: 0,
            should_quit: false,
        })
    }

    pub fn population(&self) -> usize {
        self.dataset.len()
    }

    /// Toggle the disorder under the cursor and recompute the report.
    pub fn toggle_selected(&mut self) -> Result<()> {
        let disorder = SleepDisorder::ALL[self.cursor];
        self.filter.toggle(disorder);
        self.table_offset = 0;
        self.recompute()
    }

    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < SleepDisorder::ALL.len() {
            self.cursor += 1;
        }
    }

    pub fn scroll_table_down(&mut self) {
        if self.table_offset + 1 < self.report.table.len() {
            self.table_offset += 1;
        }
    }

    pub fn scroll_table_up(&mut self) {
        self.table_offset = self.table_offset.saturating_sub(1);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn recompute(&mut self) -> Result<()> {
        self.report = build_report(&self.source, &self.dataset, &self.filter, &self.config)?;
        Ok(())
    }
}
