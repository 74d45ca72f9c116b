use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate demand payload returned by `GET /api/data`.
///
/// The same shape is posted back to `POST /api/insights`, so decimals are
/// (de)serialized as JSON numbers rather than strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DemandDataset {
    #[serde(default)]
    pub popular_routes: Vec<RouteDemand>,
    #[serde(default)]
    pub high_demand_periods: Vec<DemandPeriod>,
    #[serde(default)]
    pub price_trends: Vec<PricePoint>,
}

/// Booking demand for a single route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteDemand {
    /// Route identifier, e.g. "Sydney-Melbourne"
    pub route: String,
    pub demand: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub avg_price: Decimal,
}

/// A period in which demand at a location is expected to be elevated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemandPeriod {
    pub period: String,
    pub location: String,
    /// Multiplier over baseline demand, typically >= 1.0
    #[serde(with = "rust_decimal::serde::float")]
    pub demand_factor: Decimal,
    #[serde(default)]
    pub notes: String,
}

/// Observed price of a route on a given day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub route: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl DemandDataset {
    /// True when all three sequences are empty.
    pub fn is_empty(&self) -> bool {
        self.popular_routes.is_empty()
            && self.high_demand_periods.is_empty()
            && self.price_trends.is_empty()
    }

    /// Distinct dates present in `price_trends`, ascending.
    pub fn trend_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.price_trends.iter().map(|p| p.date).collect();
        dates.sort_unstable();
        dates.dedup();
        dates
    }

    /// Distinct route identifiers present in `price_trends`, in first-encountered order.
    pub fn trend_routes(&self) -> Vec<&str> {
        let mut routes: Vec<&str> = Vec::new();
        for point in &self.price_trends {
            if !routes.contains(&point.route.as_str()) {
                routes.push(&point.route);
            }
        }
        routes
    }
}
