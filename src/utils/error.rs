use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZabbixError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status}: {body}")]
    StatusError {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("API error {code}: {message} {data}")]
    ApiError {
        code: i64,
        message: String,
        data: String,
    },

    #[error("Response contains neither a result nor an error")]
    MissingResultError,

    #[error("No results were found matching the given search parameters")]
    NotFound,

    #[error("Error mapping Item {index} in response: {source}")]
    MappingError {
        index: usize,
        #[source]
        source: Box<ZabbixError>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl ZabbixError {
    /// True when a query succeeded but matched nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ZabbixError::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, ZabbixError>;
