use thiserror::Error;

/// Failure of a single request against the demand API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Request failed: {0}")]
    Network(String),

    /// Non-2xx status without a readable error body
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Non-2xx status carrying the server's error message
    #[error("HTTP error! status: {status} ({message})")]
    Server { status: u16, message: String },

    /// The request body could not be serialized
    #[error("Failed to serialize request: {0}")]
    Encode(String),

    /// The body did not have the expected shape
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// No response within the configured timeout
    #[error("Request timed out after {0} ms")]
    Timeout(u32),
}

impl ApiError {
    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status(status) | ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error types surfaced by the dashboard to the user
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// Fetching `/api/data` failed; nothing was stored
    #[error("Failed to load data: {0}. Please check the server and try again.")]
    DataLoad(ApiError),

    /// Fetching `/api/insights` failed
    #[error(
        "Failed to generate insights: {0}. Please ensure your GEMINI_API_KEY is set correctly on the server."
    )]
    Insights(ApiError),

    /// Insights were requested before any dataset was loaded
    #[error("No data available to generate insights. Please refresh the page.")]
    Precondition,
}

/// Type alias for Result with DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;
