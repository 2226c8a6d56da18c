use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("DataError: {0}")]
    Data(#[from] DataError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
}

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Result file not found: {path}")]
    FileNotFound { path: String },
    #[error("Invalid result JSON in {path}: {message}")]
    InvalidJson { path: String, message: String },
    #[error("Unknown column '{name}'")]
    UnknownColumn { name: String },
    #[error("Record {pk} couldn't be found")]
    RecordNotFound { pk: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Settings parse error: {message}")]
    SettingsParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Table formatting failed: {0}")]
    TableFormat(String),
}

impl AppError {
    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Data(DataError::InvalidJson { .. }) => Some(
                "Expected a query response with a `data` object holding `cols` and `rows`"
                    .to_string(),
            ),
            AppError::Storage(StorageError::SettingsParseError { .. }) => {
                Some("Check the settings file against the [columns.<name>] layout".to_string())
            }
            AppError::Data(DataError::RecordNotFound { .. }) => Some(
                "The result has no row with that primary key; it may be filtered out".to_string(),
            ),
            AppError::Config(ConfigError::InvalidValue { reason, .. }) => Some(reason.clone()),
            _ => None,
        }
    }
}
