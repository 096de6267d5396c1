use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("ValidationError: {0}")]
    Validation(#[from] ValidationError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    InvalidArguments(String),
}

/// Failures of the product search endpoint, one variant per classified outcome.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request. Check your parameters.")]
    BadRequest { endpoint: String },
    #[error("Resource not found.")]
    NotFound { endpoint: String },
    #[error("Rate limit exceeded. Please wait before retrying.")]
    RateLimited { endpoint: String },
    #[error("Service unavailable. One or more Klarna services are down.")]
    ServiceUnavailable { endpoint: String },
    #[error("API Error ({status}): {message}")]
    Http {
        status: u16,
        endpoint: String,
        message: String,
    },
    #[error("No response from Klarna API. Check your internet connection.")]
    NoResponse {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to parse response from {endpoint}: {message}")]
    InvalidBody { endpoint: String, message: String },
    /// The request could not be built or sent at all.
    #[error(transparent)]
    Request(reqwest::Error),
}

impl ApiError {
    /// Endpoint the failed request targeted; `None` when it was never built.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            ApiError::BadRequest { endpoint }
            | ApiError::NotFound { endpoint }
            | ApiError::RateLimited { endpoint }
            | ApiError::ServiceUnavailable { endpoint }
            | ApiError::Http { endpoint, .. }
            | ApiError::NoResponse { endpoint, .. }
            | ApiError::InvalidBody { endpoint, .. } => Some(endpoint),
            ApiError::Request(_) => None,
        }
    }

    /// HTTP status that produced this error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::BadRequest { .. } => Some(400),
            ApiError::NotFound { .. } => Some(404),
            ApiError::RateLimited { .. } => Some(429),
            ApiError::ServiceUnavailable { .. } => Some(503),
            ApiError::Http { status, .. } => Some(*status),
            ApiError::NoResponse { .. } | ApiError::InvalidBody { .. } => None,
            ApiError::Request(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Query parameter is required")]
    MissingQuery,
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("JSON serialization failed: {0}")]
    Serialization(String),
}

impl AppError {
    /// Single-line message shown to the user, without the layer prefix.
    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Cli(e) => e.to_string(),
            AppError::Api(e) => e.to_string(),
            AppError::Validation(e) => e.to_string(),
            AppError::Storage(e) => e.to_string(),
            AppError::Display(e) => e.to_string(),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Api(ApiError::NoResponse { .. }) => Some(
                "Check your network connection or the --base-url / KLARNAAI_BASE_URL value"
                    .to_string(),
            ),
            AppError::Api(ApiError::RateLimited { .. }) => {
                Some("The public endpoint throttles requests; try again shortly".to_string())
            }
            AppError::Storage(StorageError::ConfigParseError { .. }) => Some(
                "Fix or remove the config file, then run 'klarnaai config set --api-key <key>'"
                    .to_string(),
            ),
            _ => None,
        }
    }
}
