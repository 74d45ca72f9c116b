use common::DemandDataset;
use std::rc::Rc;
use tracing::debug;

use crate::api::DemandApi;
use crate::insights::InsightsRequester;
use crate::loader::DataLoader;
use crate::render::{ColorSource, Renderer};
use crate::state::DashboardAction;

/// Sequences loading, rendering and insights requests over one API client.
///
/// Each operation resolves to the [`DashboardAction`] the page should apply to
/// its [`crate::DashboardState`], so the state itself never crosses an await.
pub struct DashboardController<A> {
    loader: DataLoader<A>,
    insights: InsightsRequester<A>,
    renderer: Rc<Renderer>,
}

impl<A> Clone for DashboardController<A> {
    fn clone(&self) -> Self {
        Self {
            loader: self.loader.clone(),
            insights: self.insights.clone(),
            renderer: Rc::clone(&self.renderer),
        }
    }
}

impl<A: DemandApi> DashboardController<A> {
    pub fn new(api: A) -> Self {
        let api = Rc::new(api);
        Self {
            loader: DataLoader::new(Rc::clone(&api)),
            insights: InsightsRequester::new(api),
            renderer: Rc::new(Renderer::new()),
        }
    }

    /// Loads the dataset and renders it.
    ///
    /// On success the dataset and its view travel together in
    /// [`DashboardAction::Loaded`]; on failure nothing is rendered.
    pub async fn reload(&self, colors: &mut impl ColorSource) -> DashboardAction {
        match self.loader.load().await {
            Ok(dataset) => {
                let view = self.renderer.render(&dataset, colors);
                DashboardAction::Loaded(Rc::new(dataset), Rc::new(view))
            }
            Err(e) => DashboardAction::LoadFailed(e.to_string()),
        }
    }

    pub async fn insights<F>(&self, cached: Option<&DemandDataset>, busy: F) -> DashboardAction
    where
        F: FnMut(bool),
    {
        match self.insights.request(cached, busy).await {
            Ok(lines) => DashboardAction::InsightsReady(lines),
            Err(e) => {
                debug!(error = %e, "Insights request ended with error");
                DashboardAction::InsightsFailed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::state::{DashboardState, InsightsOutput};
    use crate::testing::{MockDemandApi, init_test_logging, sample_dataset, sequential_colors};
    use std::cell::RefCell;

    fn setup() -> (Rc<MockDemandApi>, DashboardController<Rc<MockDemandApi>>) {
        init_test_logging();
        let api = Rc::new(MockDemandApi::new());
        (Rc::clone(&api), DashboardController::new(api))
    }

    #[tokio::test]
    async fn test_reload_renders_loaded_dataset() {
        let (api, controller) = setup();
        api.push_dataset(Ok(sample_dataset()));

        let state = DashboardState::default()
            .apply(controller.reload(&mut sequential_colors()).await);

        assert_eq!(state.dataset.as_deref(), Some(&sample_dataset()));
        let view = state.view.expect("view should be rendered");
        assert_eq!(view.route_rows.len(), 3);
        assert_eq!(view.trend_chart.series.len(), 2);
    }

    #[tokio::test]
    async fn test_server_error_leaves_previous_views() {
        let (api, controller) = setup();
        api.push_dataset(Ok(sample_dataset()));
        api.push_dataset(Err(ApiError::Status(500)));

        let loaded = DashboardState::default()
            .apply(controller.reload(&mut sequential_colors()).await);
        let after_failure = loaded.apply(controller.reload(&mut sequential_colors()).await);

        assert_eq!(after_failure.view, loaded.view);
        assert_eq!(after_failure.dataset, loaded.dataset);
        let message = after_failure.load_error.expect("error should be surfaced");
        assert!(message.contains("status: 500"));
    }

    #[tokio::test]
    async fn test_insights_before_load_reports_precondition() {
        let (api, controller) = setup();
        let state = DashboardState::default();

        let action = controller
            .insights(state.dataset.as_deref(), |_busy| {})
            .await;
        let state = state.apply(action);

        assert_eq!(
            state.insights,
            InsightsOutput::Error(
                "No data available to generate insights. Please refresh the page.".into()
            )
        );
        assert_eq!(api.insights_calls(), 0);
    }

    #[tokio::test]
    async fn test_insights_flow_after_load() {
        let (api, controller) = setup();
        api.push_dataset(Ok(sample_dataset()));
        api.push_insights(Ok("Line1\nLine2".into()));

        let state = DashboardState::default()
            .apply(controller.reload(&mut sequential_colors()).await);

        let pending = RefCell::new(Vec::new());
        let action = controller
            .insights(state.dataset.as_deref(), |busy| {
                pending.borrow_mut().push(DashboardAction::InsightsBusy(busy))
            })
            .await;

        let state = pending
            .into_inner()
            .into_iter()
            .fold(state, |s, a| s.apply(a))
            .apply(action);

        assert!(state.can_request_insights());
        assert_eq!(
            state.insights,
            InsightsOutput::Lines(vec!["Line1".into(), "Line2".into()])
        );
        assert_eq!(api.last_insights_body(), Some(sample_dataset()));
    }
}
