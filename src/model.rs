use std::fs;

use arboard::Clipboard;
use tracing::{debug, error, info, trace};

use crate::data::{
    ACCOUNT_TYPES, AGE_BANDS, Band, DashboardMetrics, RISK_BANDS, TENURE_BANDS,
    dashboard_metrics, retention_customers, retention_schema,
};
use crate::domain::{BoardConfig, BoardError, Message, Page};
use crate::prompt::{Prompt, PromptResult};
use crate::schema::{Record, Value};
use crate::view::{ExportOptions, Predicate, TabularDataView};

// Columns of the retention table, in display order. The column cursor and
// the sort key range over these.
pub const DISPLAY_COLUMNS: &[&str] = &[
    "name",
    "account_type",
    "balance",
    "churn_probability",
    "tenure",
    "risk_score",
];

// Columns written by the CSV export, in a fixed order.
pub const EXPORT_COLUMNS: &[&str] = &[
    "id",
    "name",
    "account_type",
    "balance",
    "churn_probability",
    "tenure",
    "age",
    "risk_score",
    "last_activity",
];

const TOP_RISK_ROWS: usize = 5;

#[derive(Debug, PartialEq)]
pub enum Status {
    Ready,
    Quitting,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PromptTarget {
    RetentionSearch,
    LookupSearch,
}

// Cycle positions of the band filters; 0 means off, i means the (i-1)th entry.
#[derive(Debug, Default, Clone, Copy)]
struct FilterCycles {
    account: usize,
    age: usize,
    tenure: usize,
    risk: usize,
}

pub struct Model {
    config: BoardConfig,
    pub status: Status,
    page: Page,
    show_help: bool,
    retention: TabularDataView,
    lookup: TabularDataView,
    top_risk: Vec<Record>,
    metrics: DashboardMetrics,
    cursor_row: usize,
    cursor_col: usize,
    cycles: FilterCycles,
    prompt: Prompt,
    prompt_target: Option<PromptTarget>,
    clipboard: Option<Clipboard>,
    status_message: String,
}

impl Model {
    pub fn init(config: &BoardConfig) -> Result<Self, BoardError> {
        let retention =
            TabularDataView::new(retention_schema(), retention_customers(), "churn_probability")?;
        let lookup =
            TabularDataView::new(retention_schema(), retention_customers(), "churn_probability")?;

        // The dashboard table is a fixed top-N by risk score, independent of
        // the retention screen's filters.
        let ranking =
            TabularDataView::new(retention_schema(), retention_customers(), "risk_score")?;
        let top_risk: Vec<Record> =
            ranking.visible_records().take(TOP_RISK_ROWS).cloned().collect();

        let model = Model {
            config: config.clone(),
            status: Status::Ready,
            page: config.start_page,
            show_help: false,
            retention,
            lookup,
            top_risk,
            metrics: dashboard_metrics(),
            cursor_row: 0,
            cursor_col: 3, // churn_probability, the default sort key
            cycles: FilterCycles::default(),
            prompt: Prompt::default(),
            prompt_target: None,
            clipboard: None,
            status_message: "Started churnboard".to_string(),
        };
        info!("Model initialized with {} customers", model.retention.source_len());
        Ok(model)
    }

    pub fn update(&mut self, message: Message) -> Result<(), BoardError> {
        trace!("Update: page {:?}, message {:?}", self.page, message);
        if let Message::RawKey(key) = message {
            self.prompt_input(key);
            return Ok(());
        }
        match message {
            Message::Quit => self.status = Status::Quitting,
            Message::Help => self.show_help = !self.show_help,
            Message::Exit => self.exit(),
            Message::ShowPage(page) => {
                self.page = page;
                self.show_help = false;
            }
            Message::Search => self.open_prompt(),
            _ => {
                if self.page == Page::Retention {
                    self.update_retention(message)?;
                }
            }
        }
        Ok(())
    }

    fn update_retention(&mut self, message: Message) -> Result<(), BoardError> {
        match message {
            Message::MoveUp => self.cursor_row = self.cursor_row.saturating_sub(1),
            Message::MoveDown => self.cursor_row += 1,
            Message::MoveLeft => self.cursor_col = self.cursor_col.saturating_sub(1),
            Message::MoveRight => {
                self.cursor_col = std::cmp::min(self.cursor_col + 1, DISPLAY_COLUMNS.len() - 1)
            }
            Message::SortByCursor => {
                let field = DISPLAY_COLUMNS[self.cursor_col];
                self.retention.set_sort(field)?;
                self.set_status_message(format!(
                    "Sorted by {} ({})",
                    field,
                    self.retention.state().direction().label()
                ));
            }
            Message::ToggleSelect => {
                if let Some(id) =
                    self.retention.visible_record(self.cursor_row).map(|r| r.id().to_string())
                {
                    self.retention.toggle_select(&id);
                }
            }
            Message::ToggleSelectAll => {
                self.retention.select_all_visible();
                self.set_status_message(format!(
                    "{} selected",
                    self.retention.state().selection().len()
                ));
            }
            Message::CycleAccountType => {
                self.cycles.account = (self.cycles.account + 1) % (ACCOUNT_TYPES.len() + 1);
                let predicate = match self.cycles.account {
                    0 => None,
                    i => Some(Predicate::Equals(Value::Text(ACCOUNT_TYPES[i - 1].to_string()))),
                };
                self.retention.set_field_filter("account_type", predicate)?;
                self.set_filter_status();
            }
            Message::CycleAgeBand => {
                self.cycles.age = (self.cycles.age + 1) % (AGE_BANDS.len() + 1);
                let predicate = band_predicate(AGE_BANDS, self.cycles.age);
                self.retention.set_field_filter("age", predicate)?;
                self.set_filter_status();
            }
            Message::CycleTenureBand => {
                self.cycles.tenure = (self.cycles.tenure + 1) % (TENURE_BANDS.len() + 1);
                let predicate = band_predicate(TENURE_BANDS, self.cycles.tenure);
                self.retention.set_field_filter("tenure", predicate)?;
                self.set_filter_status();
            }
            Message::CycleRiskBand => {
                self.cycles.risk = (self.cycles.risk + 1) % (RISK_BANDS.len() + 1);
                let predicate = band_predicate(RISK_BANDS, self.cycles.risk);
                self.retention.set_field_filter("churn_probability", predicate)?;
                self.set_filter_status();
            }
            Message::ClearFilters => {
                self.retention.clear_all_filters();
                self.cycles = FilterCycles::default();
                self.set_status_message("Filters cleared".to_string());
            }
            Message::CopyExport => self.copy_export(),
            Message::WriteExport => match self.write_export() {
                Ok((rows, path)) => {
                    self.set_status_message(format!("Wrote {} rows to {}", rows, path))
                }
                Err(e) => {
                    error!("Export failed: {:?}", e);
                    self.set_status_message(format!("Export failed: {:?}", e));
                }
            },
            _ => (),
        }
        self.clamp_cursor();
        Ok(())
    }

    fn exit(&mut self) {
        if self.show_help {
            self.show_help = false;
        } else if self.prompt_target.is_some() {
            self.prompt_target = None;
            self.prompt.clear();
        } else {
            // Esc on a page clears its search
            match self.page {
                Page::Retention => self.retention.set_search_text(""),
                Page::Lookup => self.lookup.set_search_text(""),
                Page::Dashboard | Page::Reports => {}
            }
            self.clamp_cursor();
        }
    }

    fn open_prompt(&mut self) {
        let (target, seed) = match self.page {
            Page::Lookup => (PromptTarget::LookupSearch, self.lookup.state().search_text()),
            // Search from a non-search page jumps to the lookup page
            Page::Dashboard | Page::Reports => {
                self.page = Page::Lookup;
                (PromptTarget::LookupSearch, self.lookup.state().search_text())
            }
            Page::Retention => {
                (PromptTarget::RetentionSearch, self.retention.state().search_text())
            }
        };
        let seed = seed.to_string();
        self.prompt.seed(&seed);
        self.prompt_target = Some(target);
    }

    fn prompt_input(&mut self, key: ratatui::crossterm::event::KeyEvent) {
        let Some(target) = self.prompt_target else {
            return;
        };
        let result = self.prompt.read(key);
        if !result.finished {
            return;
        }
        self.prompt_target = None;
        self.prompt.clear();
        if result.canceled {
            return;
        }
        match target {
            PromptTarget::RetentionSearch => {
                self.retention.set_search_text(&result.input);
                self.set_status_message(format!(
                    "Showing {} of {} at-risk customers",
                    self.retention.visible_len(),
                    self.retention.source_len()
                ));
                self.clamp_cursor();
            }
            PromptTarget::LookupSearch => {
                self.lookup.set_search_text(&result.input);
                match self.lookup.visible_record(0) {
                    Some(r) => {
                        let name = r.get("name").map(|v| v.render()).unwrap_or_default();
                        self.set_status_message(format!("Found {}", name));
                    }
                    None => self.set_status_message("No customer matched".to_string()),
                }
            }
        }
    }

    fn copy_export(&mut self) {
        let csv = match self.export_csv() {
            Ok(csv) => csv,
            Err(e) => {
                error!("Export failed: {:?}", e);
                self.set_status_message(format!("Export failed: {:?}", e));
                return;
            }
        };
        if self.clipboard.is_none() {
            self.clipboard = match Clipboard::new() {
                Ok(c) => Some(c),
                Err(e) => {
                    debug!("No clipboard available: {:?}", e);
                    None
                }
            };
        }
        let rows = self.retention.visible_len();
        match self.clipboard.as_mut().map(|c| c.set_text(csv)) {
            Some(Ok(())) => {
                self.set_status_message(format!("Copied {} rows as CSV to the clipboard", rows))
            }
            Some(Err(e)) => {
                error!("Error copying to clipboard: {:?}", e);
                self.set_status_message("Clipboard copy failed".to_string());
            }
            None => self.set_status_message("No clipboard available".to_string()),
        }
    }

    fn write_export(&self) -> Result<(usize, String), BoardError> {
        let csv = self.export_csv()?;
        let path = shellexpand::full(&self.config.export_path)
            .map_err(|e| BoardError::BadPath(e.to_string()))?
            .to_string();
        fs::write(&path, csv)?;
        info!("Wrote retention CSV to {}", path);
        Ok((self.retention.visible_len(), path))
    }

    pub fn export_csv(&self) -> Result<String, BoardError> {
        let opts = ExportOptions::default().with_delimiter(self.config.delimiter);
        Ok(self.retention.export_visible(EXPORT_COLUMNS, &opts)?)
    }

    fn clamp_cursor(&mut self) {
        let max = self.retention.visible_len().saturating_sub(1);
        self.cursor_row = std::cmp::min(self.cursor_row, max);
    }

    fn set_filter_status(&mut self) {
        let summary = self.filter_summary();
        self.set_status_message(format!(
            "Showing {} of {} at-risk customers ({})",
            self.retention.visible_len(),
            self.retention.source_len(),
            summary
        ));
    }

    pub fn filter_summary(&self) -> String {
        let mut parts = Vec::new();
        if self.cycles.account > 0 {
            parts.push(format!("account: {}", ACCOUNT_TYPES[self.cycles.account - 1]));
        }
        if self.cycles.age > 0 {
            parts.push(format!("age: {}", AGE_BANDS[self.cycles.age - 1].label));
        }
        if self.cycles.tenure > 0 {
            parts.push(format!("tenure: {}", TENURE_BANDS[self.cycles.tenure - 1].label));
        }
        if self.cycles.risk > 0 {
            parts.push(format!("risk: {}", RISK_BANDS[self.cycles.risk - 1].label));
        }
        let search = self.retention.state().search_text();
        if !search.is_empty() {
            parts.push(format!("search: \"{}\"", search));
        }
        if parts.is_empty() {
            "no filters".to_string()
        } else {
            parts.join(" | ")
        }
    }

    fn set_status_message(&mut self, message: String) {
        self.status_message = message;
    }

    pub fn raw_keyevents(&self) -> bool {
        self.prompt_target.is_some()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn help_visible(&self) -> bool {
        self.show_help
    }

    pub fn retention(&self) -> &TabularDataView {
        &self.retention
    }

    pub fn lookup(&self) -> &TabularDataView {
        &self.lookup
    }

    pub fn top_risk(&self) -> &[Record] {
        &self.top_risk
    }

    pub fn metrics(&self) -> &DashboardMetrics {
        &self.metrics
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn prompt_view(&self) -> Option<(PromptTarget, PromptResult)> {
        self.prompt_target.map(|t| (t, self.prompt.result()))
    }
}

fn band_predicate(bands: &[Band], cycle: usize) -> Option<Predicate> {
    match cycle {
        0 => None,
        i => {
            let band = &bands[i - 1];
            Some(Predicate::Range { low: band.low, high: band.high })
        }
    }
}
