use chrono::Local;
use dashboard::{hex_color, DashboardAction, DashboardController, DashboardState, InFlightGuard};
use std::rc::Rc;
use yew::prelude::*;

use crate::api_client::demand::HttpDemandApi;
use crate::common::toast::ToastContext;

/// Dashboard state as a Yew reducer.
#[derive(Debug, Default, PartialEq)]
pub struct DashboardStore {
    pub state: DashboardState,
}

impl Reducible for DashboardStore {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::trace!("Dashboard action: {:?}", action);
        Rc::new(Self {
            state: self.state.apply(action),
        })
    }
}

/// Random `#RRGGBB` line color for a chart series.
pub fn random_color() -> String {
    hex_color((js_sys::Math::random() * 16_777_216.0) as u32)
}

/// Everything the dashboard page needs to render and react to user input.
#[derive(Clone, PartialEq)]
pub struct DashboardHandle {
    pub state: DashboardState,
    /// Local time of the last successful load, `HH:MM:SS`
    pub loaded_at: Option<String>,
    pub reload: Callback<()>,
    pub generate_insights: Callback<()>,
}

/// Owns the dashboard state, loads data on mount and exposes the user actions.
#[hook]
pub fn use_dashboard() -> DashboardHandle {
    let store = use_reducer(DashboardStore::default);
    let loaded_at = use_state(|| None::<String>);
    let toast_ctx = use_context::<ToastContext>();
    let controller = use_memo((), |_| DashboardController::new(HttpDemandApi));
    // Read by the reload callback, which would otherwise see a stale `loading`
    let reloading = use_mut_ref(|| false);

    let reload = {
        let dispatcher = store.dispatcher();
        let controller = controller.clone();
        let loaded_at = loaded_at.clone();

        use_callback(toast_ctx.clone(), move |_: (), toast_ctx| {
            if *reloading.borrow() {
                log::debug!("Reload already in flight, ignoring");
                return;
            }

            let dispatcher = dispatcher.clone();
            let controller = controller.clone();
            let loaded_at = loaded_at.clone();
            let toast_ctx = toast_ctx.clone();
            let guard = {
                let reloading = reloading.clone();
                InFlightGuard::engage(move |busy| *reloading.borrow_mut() = busy)
            };

            log::debug!("Reloading demand data");
            dispatcher.dispatch(DashboardAction::LoadStarted);

            wasm_bindgen_futures::spawn_local(async move {
                let _guard = guard;
                let action = controller.reload(&mut random_color).await;
                match &action {
                    DashboardAction::Loaded(..) => {
                        loaded_at.set(Some(Local::now().format("%H:%M:%S").to_string()));
                    }
                    DashboardAction::LoadFailed(message) => {
                        if let Some(toast_ctx) = &toast_ctx {
                            toast_ctx.show_error(message.clone());
                        }
                    }
                    _ => {}
                }
                dispatcher.dispatch(action);
            });
        })
    };

    let generate_insights = {
        let dispatcher = store.dispatcher();
        let controller = controller.clone();

        use_callback((store.state.dataset.clone(), toast_ctx), move |_: (), (dataset, toast_ctx)| {
            let dispatcher = dispatcher.clone();
            let controller = controller.clone();
            let dataset = dataset.clone();
            let toast_ctx = toast_ctx.clone();

            log::debug!("User requested insights");
            wasm_bindgen_futures::spawn_local(async move {
                let busy = {
                    let dispatcher = dispatcher.clone();
                    move |busy| dispatcher.dispatch(DashboardAction::InsightsBusy(busy))
                };
                let action = controller.insights(dataset.as_deref(), busy).await;
                if let (DashboardAction::InsightsReady(_), Some(toast_ctx)) = (&action, &toast_ctx) {
                    toast_ctx.show_success("Insights generated".to_string());
                }
                dispatcher.dispatch(action);
            });
        })
    };

    // Fetch on mount
    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    DashboardHandle {
        state: store.state.clone(),
        loaded_at: (*loaded_at).clone(),
        reload,
        generate_insights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard::InsightsOutput;

    #[test]
    fn test_store_reduces_through_dashboard_state() {
        let store = Rc::new(DashboardStore::default())
            .reduce(DashboardAction::InsightsBusy(true));
        assert!(store.state.insights_busy);

        let store = store
            .reduce(DashboardAction::InsightsBusy(false))
            .reduce(DashboardAction::InsightsFailed("boom".to_string()));
        assert!(!store.state.insights_busy);
        assert_eq!(store.state.insights, InsightsOutput::Error("boom".to_string()));
    }

    #[test]
    fn test_failed_load_keeps_store_without_view() {
        let store = Rc::new(DashboardStore::default())
            .reduce(DashboardAction::LoadStarted)
            .reduce(DashboardAction::LoadFailed("HTTP error! status: 500".to_string()));
        assert!(store.state.view.is_none());
        assert!(!store.state.loading);
        assert_eq!(store.state.load_error.as_deref(), Some("HTTP error! status: 500"));
    }

    #[test]
    fn test_retry_clears_error_banner_until_load_settles() {
        let store = Rc::new(DashboardStore::default())
            .reduce(DashboardAction::LoadFailed("HTTP error! status: 500".to_string()))
            .reduce(DashboardAction::LoadStarted);
        assert!(store.state.load_error.is_none());
        assert!(!store.state.can_reload());
    }
}
