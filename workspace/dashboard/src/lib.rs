//! Controller logic of the airline demand dashboard.
//!
//! Independent of the browser: the frontend plugs in an HTTP [`DemandApi`], a
//! random [`ColorSource`] and a Plotly [`ChartSurface`], and applies the
//! resulting [`DashboardAction`]s to its [`DashboardState`].

pub mod api;
pub mod chart;
pub mod controller;
pub mod error;
pub mod insights;
pub mod loader;
pub mod render;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use api::DemandApi;
pub use chart::{ChartSlot, ChartSurface};
pub use controller::DashboardController;
pub use error::{ApiError, DashboardError, Result};
pub use insights::{InFlightGuard, InsightsRequester};
pub use loader::DataLoader;
pub use render::{
    CHART_TITLE, ColorSource, DashboardView, PeriodRow, Renderer, RouteRow, TrendChart,
    TrendSeries, hex_color,
};
pub use state::{DashboardAction, DashboardState, InsightsOutput};
