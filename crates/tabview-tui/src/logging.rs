//! File logging setup.
//!
//! The terminal belongs to the TUI, so log records go to a file.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::{TuiError, TuiResult};

const LOG_FILE_NAME: &str = "tabview.log";

/// Default log location: `<data_local_dir>/tabview/tabview.log`, or the
/// working directory when no data dir exists.
pub fn default_log_path() -> PathBuf {
    match dirs::data_local_dir() {
        Some(dir) => dir.join("tabview").join(LOG_FILE_NAME),
        None => PathBuf::from(LOG_FILE_NAME),
    }
}

pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the global file logger.
pub fn init_logging(path: &Path, verbose: bool) -> TuiResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let log_file = File::create(path)?;
    WriteLogger::init(level_for(verbose), Config::default(), log_file)
        .map_err(|e| TuiError::Config(format!("logger already initialized: {}", e)))?;
    log::info!("Logging to {}", path.display());
    Ok(())
}
