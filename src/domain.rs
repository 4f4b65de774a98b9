use std::io::Error;

use derive_setters::Setters;
use ratatui::crossterm::event::KeyEvent;

use crate::view::ViewError;

#[derive(Debug)]
pub enum BoardError {
    IoError(Error),
    View(ViewError),
    BadPath(String),
}

impl From<Error> for BoardError {
    fn from(err: Error) -> Self {
        BoardError::IoError(err)
    }
}

impl From<ViewError> for BoardError {
    fn from(err: ViewError) -> Self {
        BoardError::View(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Retention,
    Lookup,
    Reports,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Retention => "Retention List",
            Page::Lookup => "Customer Lookup",
            Page::Reports => "Reports",
        }
    }
}

impl std::str::FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dashboard" => Ok(Page::Dashboard),
            "retention" => Ok(Page::Retention),
            "lookup" => Ok(Page::Lookup),
            "reports" => Ok(Page::Reports),
            other => Err(format!(
                "unknown page \"{other}\" (expected dashboard, retention, lookup or reports)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Quit,
    Help,
    Exit,
    ShowPage(Page),
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    SortByCursor,
    ToggleSelect,
    ToggleSelectAll,
    CycleAccountType,
    CycleAgeBand,
    CycleTenureBand,
    CycleRiskBand,
    ClearFilters,
    Search,
    CopyExport,
    WriteExport,
    RawKey(KeyEvent),
}

#[derive(Debug, Clone, Setters)]
#[setters(prefix = "with_", into)]
pub struct BoardConfig {
    pub event_poll_ms: u64,
    pub export_path: String,
    pub delimiter: char,
    pub start_page: Page,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            event_poll_ms: 100,
            export_path: "~/retention-list.csv".to_string(),
            delimiter: ',',
            start_page: Page::Dashboard,
        }
    }
}

pub const HELP_TEXT: &str = "\
churnboard keys

  1 / 2 / 3 / 4  Dashboard / Retention / Lookup / Reports
  ?              Toggle this help
  q              Quit
  Esc            Close help or prompt, clear search

Retention list
  Up/Down  j/k   Move the row cursor
  Left/Right h/l Move the column cursor
  s              Sort by the cursored column (again: flip direction)
  Space          Select / deselect the cursored row
  A              Select all visible (again: deselect)
  /              Search by name or id
  a              Cycle account type filter
  g              Cycle age group filter
  t              Cycle tenure filter
  r              Cycle risk level filter
  c              Clear all filters
  e              Copy visible rows as CSV to the clipboard
  w              Write visible rows as CSV to the export file

Customer lookup
  /              Search, first match is shown
";
