use common::DemandDataset;
use std::rc::Rc;
use tracing::{error, info, instrument, warn};

use crate::api::DemandApi;
use crate::error::{DashboardError, Result};

/// Signals "busy" for as long as it is alive.
///
/// Calls `notify(true)` when engaged and `notify(false)` when dropped, so the
/// trigger is re-enabled on success, failure and early return alike.
pub struct InFlightGuard<F: FnMut(bool)> {
    notify: F,
}

impl<F: FnMut(bool)> InFlightGuard<F> {
    pub fn engage(mut notify: F) -> Self {
        notify(true);
        Self { notify }
    }
}

impl<F: FnMut(bool)> Drop for InFlightGuard<F> {
    fn drop(&mut self) {
        (self.notify)(false);
    }
}

/// Sends the cached dataset to the insights endpoint.
pub struct InsightsRequester<A> {
    api: Rc<A>,
}

impl<A> Clone for InsightsRequester<A> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
        }
    }
}

impl<A: DemandApi> InsightsRequester<A> {
    pub fn new(api: Rc<A>) -> Self {
        Self { api }
    }

    /// Requests insights for `cached` and returns them split into lines.
    ///
    /// Without a cached dataset this fails with [`DashboardError::Precondition`]
    /// before any request is made and without touching `busy`.
    #[instrument(skip_all)]
    pub async fn request<F>(&self, cached: Option<&DemandDataset>, busy: F) -> Result<Vec<String>>
    where
        F: FnMut(bool),
    {
        let Some(dataset) = cached else {
            warn!("Insights requested before any dataset was loaded");
            return Err(DashboardError::Precondition);
        };

        let _guard = InFlightGuard::engage(busy);
        info!(routes = dataset.popular_routes.len(), "Requesting insights");

        let response = self.api.fetch_insights(dataset).await.map_err(|e| {
            error!(error = %e, "Failed to generate insights");
            DashboardError::Insights(e)
        })?;

        let lines = response.lines();
        info!(lines = lines.len(), "Insights received");
        Ok(lines)
    }
}
