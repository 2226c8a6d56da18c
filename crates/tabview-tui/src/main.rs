//! tabview - browse a query result in the terminal
//!
//! Loads a result JSON file and shows it as a sortable, paginated table with
//! clickable cells and a record detail view. `--print` renders one page to
//! stdout instead.

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::backend::CrosstermBackend;
use std::io::{self, stdout};
use std::process::ExitCode;

use clap::Parser;
use tabview_core::error::DataError;
use tabview_core::prelude::*;

mod action;
mod app;
mod cli;
mod components;
mod error;
mod event;
mod layout;
mod logging;

use app::App;
use cli::Cli;
use error::{TuiError, TuiResult};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("Error: {}", err);
            if let Some(hint) = err.hint() {
                eprintln!("Hint: {}", hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> TuiResult<()> {
    init_logging(&cli)?;

    let view = build_view(&cli)?;
    let detail = match &cli.detail {
        Some(pk) => Some(find_record(&view, pk)?),
        None => None,
    };

    if cli.print {
        let display = TableDisplay::new().with_colors(!cli.no_color);
        let output = match &detail {
            Some(detail) => display.render_detail(&view, detail)?,
            None => render_page(view, &cli, &display)?,
        };
        println!("{}", output);
        Ok(())
    } else {
        let mut app = App::new(view);
        if let Some(detail) = detail {
            app.open_detail(detail);
        }
        run_tui(app)
    }
}

/// An explicit `--log-file` must be writable. Otherwise `--print` runs without
/// a file logger and the TUI falls back to none when the default path fails.
fn init_logging(cli: &Cli) -> TuiResult<()> {
    if let Some(path) = &cli.log_file {
        return logging::init_logging(path, cli.verbose);
    }
    if cli.print {
        return Ok(());
    }
    if let Err(err) = logging::init_logging(&logging::default_log_path(), cli.verbose) {
        eprintln!("Warning: logging disabled: {}", err);
    }
    Ok(())
}

/// Load the result and settings, and apply the initial sort.
fn build_view(cli: &Cli) -> TuiResult<TabularResultView> {
    let dataset = Dataset::load(&cli.file)?;
    let settings = TableSettings::load(cli.settings.clone())?;
    let card = match cli.limit {
        Some(limit) => Card::with_limit(Some(limit)),
        None => dataset.card(),
    };
    let card = match cli.file.file_stem() {
        Some(stem) => card.with_name(stem.to_string_lossy()),
        None => card,
    };

    let sort_column = match &cli.sort {
        Some(name) => Some(dataset.data.column_index(name).ok_or_else(|| {
            AppError::from(DataError::UnknownColumn { name: name.clone() })
        })?),
        None => None,
    };

    let mut view = TabularResultView::new(dataset, card, settings);
    if let Some(index) = sort_column {
        view.set_sort(index);
        if cli.desc {
            view.set_sort(index);
        }
    }
    Ok(view)
}

/// Record with primary key `pk`, browsable in the view's row order.
fn find_record(view: &TabularResultView, pk: &str) -> TuiResult<ObjectDetail> {
    ObjectDetail::for_pk(
        view.data(),
        view.sorted_row_order(),
        &serde_json::Value::String(pk.to_string()),
    )
    .ok_or_else(|| AppError::from(DataError::RecordNotFound { pk: pk.to_string() }).into())
}

fn render_page(
    mut view: TabularResultView,
    cli: &Cli,
    display: &TableDisplay,
) -> TuiResult<String> {
    let rows = cli.page_size.unwrap_or_else(|| view.row_count()).max(1);
    view.apply_layout(&LayoutMetrics::measured(rows as u32, 0, 0, 1).with_row_spacing(0));

    for _ in 0..cli.page {
        if !view.next_page() {
            return Err(TuiError::Config(format!(
                "page {} is past the last page ({})",
                cli.page,
                view.state().page
            )));
        }
    }

    Ok(display.render_page(&view)?)
}

fn run_tui(mut app: App) -> TuiResult<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let result = app.run(&mut terminal);

    restore_terminal()?;
    result.map_err(TuiError::from)
}

/// Restore terminal to normal state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
