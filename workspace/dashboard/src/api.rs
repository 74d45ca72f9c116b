use async_trait::async_trait;
use common::{DemandDataset, InsightsResponse};

use crate::error::ApiError;

/// Transport seam between the dashboard controller and the demand API server.
///
/// The browser build implements this over HTTP; the controller only ever sees
/// parsed payloads or an [`ApiError`]. Futures are not `Send` since everything
/// runs on the single browser event loop.
#[async_trait(?Send)]
pub trait DemandApi {
    /// `GET /api/data`
    async fn fetch_dataset(&self) -> Result<DemandDataset, ApiError>;

    /// `POST /api/insights` with the whole dataset as body
    async fn fetch_insights(&self, dataset: &DemandDataset) -> Result<InsightsResponse, ApiError>;
}

#[async_trait(?Send)]
impl<T: DemandApi + ?Sized> DemandApi for std::rc::Rc<T> {
    async fn fetch_dataset(&self) -> Result<DemandDataset, ApiError> {
        (**self).fetch_dataset().await
    }

    async fn fetch_insights(&self, dataset: &DemandDataset) -> Result<InsightsResponse, ApiError> {
        (**self).fetch_insights(dataset).await
    }
}
