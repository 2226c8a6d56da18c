use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tabview")]
#[command(about = "Browse a query result as a sortable, paginated table")]
#[command(version)]
#[command(after_help = "Examples:
  tabview result.json                       # Interactive table
  tabview result.json --sort TOTAL --desc   # Start sorted by TOTAL, descending
  tabview result.json --print --page-size 20 --page 2
  tabview result.json --settings ./columns.toml
  tabview result.json --detail 10874 --print  # One record by primary key

Keys:
  ↑↓/jk move  ←→/hl column  s sort  n/p page  Enter click cell
  [ ] previous/next record in detail view  Esc close  q quit

Environment Variables:
  TABVIEW_SETTINGS   Path to the column settings TOML file")]
pub struct Cli {
    /// Query result JSON file (`{ \"data\": { \"cols\": [...], \"rows\": [...] } }`)
    pub file: PathBuf,

    /// Column settings TOML file
    #[arg(long, env = "TABVIEW_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Row limit the query explicitly requested (overrides the result's own query)
    #[arg(long)]
    pub limit: Option<u64>,

    /// Initial sort column (name or display name)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Print one page as a plain table instead of starting the TUI
    #[arg(long)]
    pub print: bool,

    /// Page to print (0-based, with --print)
    #[arg(long, default_value_t = 0, requires = "print")]
    pub page: usize,

    /// Rows per printed page (with --print; default: all rows)
    #[arg(long, requires = "print")]
    pub page_size: Option<usize>,

    /// Open the record whose primary key is PK (prints it with --print)
    #[arg(long, value_name = "PK", conflicts_with_all = ["page", "page_size"])]
    pub detail: Option<String>,

    /// Disable colors in --print output
    #[arg(long)]
    pub no_color: bool,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
