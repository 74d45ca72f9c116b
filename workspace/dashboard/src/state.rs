use common::DemandDataset;
use std::rc::Rc;

use crate::render::DashboardView;

/// What the insights panel currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InsightsOutput {
    #[default]
    Empty,
    Lines(Vec<String>),
    Error(String),
}

/// Application state owned by the dashboard page.
///
/// Created empty at startup. A successful load replaces `dataset` and `view`
/// in one step; failures never touch them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub dataset: Option<Rc<DemandDataset>>,
    pub view: Option<Rc<DashboardView>>,
    pub loading: bool,
    pub load_error: Option<String>,
    pub insights_busy: bool,
    pub insights: InsightsOutput,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    LoadStarted,
    Loaded(Rc<DemandDataset>, Rc<DashboardView>),
    LoadFailed(String),
    /// `true` starts a new insights attempt and clears the previous output
    InsightsBusy(bool),
    InsightsReady(Vec<String>),
    InsightsFailed(String),
}

impl DashboardState {
    pub fn apply(&self, action: DashboardAction) -> Self {
        let mut next = self.clone();
        match action {
            DashboardAction::LoadStarted => {
                next.loading = true;
                next.load_error = None;
            }
            DashboardAction::Loaded(dataset, view) => {
                next.dataset = Some(dataset);
                next.view = Some(view);
                next.loading = false;
                next.load_error = None;
            }
            DashboardAction::LoadFailed(message) => {
                next.loading = false;
                next.load_error = Some(message);
            }
            DashboardAction::InsightsBusy(busy) => {
                next.insights_busy = busy;
                if busy {
                    next.insights = InsightsOutput::Empty;
                }
            }
            DashboardAction::InsightsReady(lines) => {
                next.insights = InsightsOutput::Lines(lines);
            }
            DashboardAction::InsightsFailed(message) => {
                next.insights = InsightsOutput::Error(message);
            }
        }
        next
    }

    pub fn has_dataset(&self) -> bool {
        self.dataset.is_some()
    }

    /// Reload triggers are ignored while a load is still in flight.
    pub fn can_reload(&self) -> bool {
        !self.loading
    }

    /// The insights trigger is disabled while a request is in flight.
    pub fn can_request_insights(&self) -> bool {
        !self.insights_busy
    }
}
