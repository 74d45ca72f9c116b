//! Common transport-layer types shared between the demand API server and the dashboard.
//! These structs mirror the server's JSON payloads so the frontend can deserialize
//! responses and post the cached dataset back without duplicating shapes.

mod demand;

pub use demand::{DemandDataset, DemandPeriod, PricePoint, RouteDemand};

use serde::{Deserialize, Serialize};

/// Response body of `POST /api/insights`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsightsResponse {
    /// Free text, paragraphs separated by newlines
    pub insights: String,
}

impl InsightsResponse {
    /// Splits the insights text into display lines.
    ///
    /// Both `\n` and `\r\n` separators are accepted; empty lines are kept so
    /// paragraph spacing survives.
    pub fn lines(&self) -> Vec<String> {
        self.insights.lines().map(str::to_string).collect()
    }
}

/// Error body returned by the server on client errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}
