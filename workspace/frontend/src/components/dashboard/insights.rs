use dashboard::InsightsOutput;
use yew::prelude::*;

use crate::common::loading::BusyIndicator;

#[derive(Properties, PartialEq)]
pub struct InsightsPanelProps {
    pub output: InsightsOutput,
    pub busy: bool,
    pub on_generate: Callback<()>,
}

/// Button that asks the server for AI insights, and the text it returned.
#[function_component(InsightsPanel)]
pub fn insights_panel(props: &InsightsPanelProps) -> Html {
    let onclick = {
        let on_generate = props.on_generate.clone();
        Callback::from(move |_| on_generate.emit(()))
    };

    html! {
        <div class="card bg-base-100 shadow mt-6">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h2 class="card-title">{"AI Market Insights"}</h2>
                    <div class="flex items-center gap-3">
                        <BusyIndicator visible={props.busy} />
                        <button
                            id="generate-insights-btn"
                            class="btn btn-primary btn-sm"
                            disabled={props.busy}
                            {onclick}
                        >
                            <i class="fas fa-lightbulb"></i>
                            {" Generate Insights"}
                        </button>
                    </div>
                </div>
                <div id="ai-insights-output" class="mt-4 text-sm leading-relaxed">
                    { match &props.output {
                        InsightsOutput::Empty => html! {},
                        InsightsOutput::Lines(lines) => render_lines(lines),
                        InsightsOutput::Error(message) => html! {
                            <p class="text-error">{message}</p>
                        },
                    }}
                </div>
            </div>
        </div>
    }
}

fn render_lines(lines: &[String]) -> Html {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            html! {
                <>
                    if i > 0 {
                        <br />
                    }
                    {line}
                </>
            }
        })
        .collect()
}
