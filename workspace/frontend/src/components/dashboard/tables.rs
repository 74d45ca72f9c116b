use dashboard::{PeriodRow, RouteRow};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RoutesTableProps {
    pub rows: Vec<RouteRow>,
}

/// Popular routes, one row per route in the order the server sent them.
#[function_component(RoutesTable)]
pub fn routes_table(props: &RoutesTableProps) -> Html {
    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        <th>{"Route"}</th>
                        <th class="text-right">{"Demand"}</th>
                        <th class="text-right">{"Avg. Price"}</th>
                    </tr>
                </thead>
                <tbody id="popular-routes-table">
                    { for props.rows.iter().map(|row| html! {
                        <tr class="hover">
                            <td class="font-medium">{&row.route}</td>
                            <td class="text-right">{&row.demand}</td>
                            <td class="text-right font-mono">{&row.avg_price}</td>
                        </tr>
                    })}
                </tbody>
            </table>
            if props.rows.is_empty() {
                <div class="text-center py-4 text-gray-500">{"No route data available"}</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PeriodsTableProps {
    pub rows: Vec<PeriodRow>,
}

#[function_component(PeriodsTable)]
pub fn periods_table(props: &PeriodsTableProps) -> Html {
    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        <th>{"Period"}</th>
                        <th>{"Location"}</th>
                        <th class="text-right">{"Demand Factor"}</th>
                        <th>{"Notes"}</th>
                    </tr>
                </thead>
                <tbody id="high-demand-periods-table">
                    { for props.rows.iter().map(|row| html! {
                        <tr class="hover">
                            <td class="font-medium">{&row.period}</td>
                            <td>{&row.location}</td>
                            <td class="text-right font-mono">{&row.demand_factor}</td>
                            <td class="text-sm text-gray-500">{&row.notes}</td>
                        </tr>
                    })}
                </tbody>
            </table>
            if props.rows.is_empty() {
                <div class="text-center py-4 text-gray-500">{"No high demand periods reported"}</div>
            }
        </div>
    }
}
