use std::fs;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod charts;
mod controller;
mod data;
mod domain;
mod format;
mod model;
mod prompt;
mod schema;
mod ui;
mod view;

use controller::Controller;
use domain::{BoardConfig, BoardError, Page};
use model::{Model, Status};

#[derive(Parser, Debug)]
#[command(name = "churnboard", version, about = "Bank churn analytics dashboard")]
struct Cli {
    /// Page to open on start (dashboard, retention, lookup, reports)
    #[arg(short, long, default_value = "dashboard")]
    page: Page,

    /// Destination for the `w` export key
    #[arg(short, long, default_value = "~/retention-list.csv")]
    out: String,

    /// CSV delimiter used by exports
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Write the full retention list as CSV to PATH and exit
    #[arg(long, value_name = "PATH")]
    export: Option<String>,

    /// Append logs to this file (filtered by RUST_LOG when set)
    #[arg(long, value_name = "PATH")]
    log_file: Option<String>,

    /// Log verbosity when RUST_LOG is unset (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file
        && let Err(e) = init_tracing(path, cli.verbose)
    {
        eprintln!("Error: {:?}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Err(e) => {
            ratatui::restore();
            eprintln!("Error: {:?}", e);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
    }
}

// The terminal belongs to the tui, so logs only go to a file and only when
// one was asked for.
fn init_tracing(path: &str, verbose: u8) -> Result<(), BoardError> {
    let path = shellexpand::full(path)
        .map_err(|e| BoardError::BadPath(e.to_string()))?
        .into_owned();
    let file = fs::OpenOptions::new().create(true).append(true).open(path)?;
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false),
        )
        .with(ErrorLayer::default())
        .init();
    Ok(())
}

fn run(cli: Cli) -> Result<(), BoardError> {
    let cfg = BoardConfig::default()
        .with_start_page(cli.page)
        .with_export_path(cli.out)
        .with_delimiter(cli.delimiter);

    let mut model = Model::init(&cfg)?;

    // Headless export, no terminal takeover.
    if let Some(path) = cli.export {
        let path = shellexpand::full(&path)
            .map_err(|e| BoardError::BadPath(e.to_string()))?
            .into_owned();
        let csv = model.export_csv()?;
        fs::write(&path, &csv)?;
        println!("Wrote {} ({} rows)", path, model.retention().visible_len());
        return Ok(());
    }

    info!("starting churnboard");
    let controller = Controller::new(&cfg);
    let mut terminal = ratatui::init();

    while model.status != Status::Quitting {
        terminal.draw(|f| ui::draw(&model, f))?;

        if let Some(message) = controller.handle_event(&model)? {
            model.update(message)?;
        }
    }

    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["churnboard"]);
        assert_eq!(cli.page, Page::Dashboard);
        assert_eq!(cli.out, "~/retention-list.csv");
        assert_eq!(cli.delimiter, ',');
        assert!(cli.export.is_none());
    }

    #[test]
    fn cli_page_names_are_case_insensitive() {
        let cli = Cli::parse_from(["churnboard", "--page", "Retention"]);
        assert_eq!(cli.page, Page::Retention);
        assert!(Cli::try_parse_from(["churnboard", "--page", "settings"]).is_err());
    }
}
