use yew::prelude::*;

use super::insights::InsightsPanel;
use super::tables::{PeriodsTable, RoutesTable};
use super::trend_chart::TrendChartView;
use crate::common::error::ErrorDisplay;
use crate::common::loading::Loading;
use crate::components::layout::layout::Layout;
use crate::hooks::use_dashboard;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let handle = use_dashboard();
    let state = &handle.state;

    let status = handle
        .loaded_at
        .as_ref()
        .map(|time| format!("Updated {}", time));

    let content = match &state.view {
        Some(view) => html! {
            <>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{"Popular Routes"}</h2>
                            <RoutesTable rows={view.route_rows.clone()} />
                        </div>
                    </div>
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{"High Demand Periods"}</h2>
                            <PeriodsTable rows={view.period_rows.clone()} />
                        </div>
                    </div>
                </div>
                <div class="card bg-base-100 shadow mt-6">
                    <div class="card-body">
                        <h2 class="card-title">{"Price Trends"}</h2>
                        <TrendChartView chart={view.trend_chart.clone()} />
                    </div>
                </div>
            </>
        },
        None if state.loading => html! {
            <Loading text={Some("Loading demand data...".to_string())} />
        },
        None => html! {},
    };

    html! {
        <Layout
            title="Airline Demand Dashboard"
            {status}
            on_refresh={Some(handle.reload.clone())}
            refreshing={state.loading}
        >
            if let Some(error) = &state.load_error {
                <ErrorDisplay
                    title="Failed to load data"
                    message={error.clone()}
                    on_retry={state.can_reload().then(|| handle.reload.clone())}
                />
            }
            {content}
            <InsightsPanel
                output={state.insights.clone()}
                busy={state.insights_busy}
                on_generate={handle.generate_insights.clone()}
            />
        </Layout>
    }
}
