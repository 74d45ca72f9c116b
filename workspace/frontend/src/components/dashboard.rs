mod insights;
mod tables;
mod trend_chart;
mod view;

pub use view::Dashboard;
