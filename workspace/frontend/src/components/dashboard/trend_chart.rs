use dashboard::{ChartSlot, ChartSurface, TrendChart, CHART_TITLE};
use plotly::common::{Line, Marker, Mode, Title};
use plotly::layout::{Axis, Legend, RangeMode};
use plotly::{Layout, Scatter};
use rust_decimal::prelude::ToPrimitive;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

const CHART_DIV_ID: &str = "price-trends-chart";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);

    #[wasm_bindgen(js_namespace = Plotly)]
    fn purge(div_id: &str);
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, String> {
    let json = serde_json::to_string(value).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&json).map_err(|e| format!("{:?}", e))
}

fn build_traces(chart: &TrendChart) -> Result<js_sys::Array, String> {
    let labels = chart.date_labels();
    let traces = js_sys::Array::new();

    for series in &chart.series {
        // None serializes as null, which Plotly draws as a gap
        let prices: Vec<Option<f64>> = series
            .prices
            .iter()
            .map(|price| price.and_then(|p| p.to_f64()))
            .collect();

        let trace = Scatter::new(labels.clone(), prices)
            .mode(Mode::LinesMarkers)
            .name(series.route.as_str())
            .connect_gaps(false)
            .line(Line::new().color(series.color.clone()).width(2.0))
            .marker(Marker::new().color(series.color.clone()).size(6));

        traces.push(&to_js(&trace)?);
    }

    Ok(traces)
}

fn build_layout() -> Layout {
    Layout::new()
        .title(Title::with_text(CHART_TITLE))
        .x_axis(Axis::new().title(Title::with_text("Date")))
        .y_axis(
            Axis::new()
                .title(Title::with_text("Price ($)"))
                .range_mode(RangeMode::Normal),
        )
        .legend(Legend::new().y(1.15).x(0.0))
        .height(400)
}

/// Plotly `<div>` the trend chart is drawn into.
struct PlotlySurface {
    div_id: &'static str,
}

impl ChartSurface for PlotlySurface {
    type Handle = &'static str;

    fn draw(&mut self, chart: &TrendChart) -> Self::Handle {
        let drawn = build_traces(chart).and_then(|traces| {
            let layout = to_js(&build_layout())?;
            let config = to_js(&serde_json::json!({"responsive": true, "displayModeBar": false}))?;
            newPlot(self.div_id, traces.into(), layout, config);
            Ok(())
        });

        if let Err(e) = drawn {
            log::error!("Failed to draw price trend chart: {}", e);
        }
        self.div_id
    }

    fn destroy(&mut self, handle: Self::Handle) {
        purge(handle);
    }
}

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    pub chart: TrendChart,
}

/// Line chart of route prices over time.
///
/// The slot keeps at most one Plotly instance alive; a new chart purges the
/// previous one and unmounting purges the last.
#[function_component(TrendChartView)]
pub fn trend_chart_view(props: &TrendChartProps) -> Html {
    let slot = use_mut_ref(|| ChartSlot::new(PlotlySurface { div_id: CHART_DIV_ID }));

    use_effect_with(props.chart.clone(), move |chart| {
        if chart.is_empty() {
            slot.borrow_mut().clear();
        } else {
            log::debug!(
                "Drawing price trends: {} dates, {} routes",
                chart.dates.len(),
                chart.series.len()
            );
            slot.borrow_mut().show(chart);
        }
        || ()
    });

    html! {
        <>
            <div id={CHART_DIV_ID} style="width:100%; height:400px;"></div>
            if props.chart.is_empty() {
                <div class="text-center py-8 text-gray-500">
                    <i class="fas fa-chart-line text-4xl mb-4 opacity-50"></i>
                    <p>{"No price trend data available."}</p>
                </div>
            }
        </>
    }
}
