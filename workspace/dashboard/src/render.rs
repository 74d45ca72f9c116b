//! View models for the dashboard tables and the price trend chart.
//!
//! Every render builds the views from scratch out of a single dataset, so
//! nothing from a previous dataset can leak into the new tables or chart.

use chrono::NaiveDate;
use common::{DemandDataset, DemandPeriod, RouteDemand};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;
use tracing::debug;

pub const CHART_TITLE: &str = "Flight Price Trends for Popular Routes";

/// Supplies a line color for each chart series.
pub trait ColorSource {
    fn next_color(&mut self) -> String;
}

impl<F> ColorSource for F
where
    F: FnMut() -> String,
{
    fn next_color(&mut self) -> String {
        self()
    }
}

/// Formats a 24-bit RGB value as `#RRGGBB`.
pub fn hex_color(rgb: u32) -> String {
    format!("#{:06X}", rgb & 0x00FF_FFFF)
}

/// Rounds half away from zero to two places, like JavaScript's `toFixed(2)`.
fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn format_price(price: Decimal) -> String {
    format!("${:.2}", round_cents(price))
}

pub fn format_demand_factor(factor: Decimal) -> String {
    format!("{:.2}x", round_cents(factor))
}

/// One row of the popular routes table, already formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRow {
    pub route: String,
    pub demand: String,
    pub avg_price: String,
}

impl From<&RouteDemand> for RouteRow {
    fn from(route: &RouteDemand) -> Self {
        Self {
            route: route.route.clone(),
            demand: route.demand.to_string(),
            avg_price: format_price(route.avg_price),
        }
    }
}

/// One row of the high demand periods table.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodRow {
    pub period: String,
    pub location: String,
    pub demand_factor: String,
    pub notes: String,
}

impl From<&DemandPeriod> for PeriodRow {
    fn from(period: &DemandPeriod) -> Self {
        Self {
            period: period.period.clone(),
            location: period.location.clone(),
            demand_factor: format_demand_factor(period.demand_factor),
            notes: period.notes.clone(),
        }
    }
}

/// Prices of one route aligned to the chart's date axis.
///
/// `None` marks a date with no observation for this route; it is drawn as a
/// gap, never as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub route: String,
    pub color: String,
    pub prices: Vec<Option<Decimal>>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendChart {
    pub dates: Vec<NaiveDate>,
    pub series: Vec<TrendSeries>,
}

impl TrendChart {
    /// Builds the chart model from `price_trends`.
    ///
    /// X categories are the distinct dates ascending; series follow the order
    /// in which routes first appear. If a `(date, route)` pair occurs more than
    /// once the first occurrence is used.
    pub fn from_dataset(dataset: &DemandDataset, colors: &mut impl ColorSource) -> Self {
        let dates = dataset.trend_dates();

        let mut lookup: HashMap<(NaiveDate, &str), Decimal> = HashMap::new();
        for point in &dataset.price_trends {
            lookup
                .entry((point.date, point.route.as_str()))
                .or_insert(point.price);
        }

        let series: Vec<TrendSeries> = dataset
            .trend_routes()
            .into_iter()
            .map(|route| TrendSeries {
                route: route.to_string(),
                color: colors.next_color(),
                prices: dates
                    .iter()
                    .map(|date| lookup.get(&(*date, route)).copied())
                    .collect(),
            })
            .collect();

        Self { dates, series }
    }

    /// Axis labels in `YYYY-MM-DD` form.
    pub fn date_labels(&self) -> Vec<String> {
        self.dates.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Everything the dashboard shows for one dataset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardView {
    pub route_rows: Vec<RouteRow>,
    pub period_rows: Vec<PeriodRow>,
    pub trend_chart: TrendChart,
}

/// Turns a dataset into the three dashboard views.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, dataset: &DemandDataset, colors: &mut impl ColorSource) -> DashboardView {
        let view = DashboardView {
            route_rows: dataset.popular_routes.iter().map(RouteRow::from).collect(),
            period_rows: dataset.high_demand_periods.iter().map(PeriodRow::from).collect(),
            trend_chart: TrendChart::from_dataset(dataset, colors),
        };

        debug!(
            route_rows = view.route_rows.len(),
            period_rows = view.period_rows.len(),
            chart_dates = view.trend_chart.dates.len(),
            chart_series = view.trend_chart.series.len(),
            "Rendered dashboard view"
        );

        view
    }
}
