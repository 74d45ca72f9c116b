use async_trait::async_trait;
use common::{DemandDataset, InsightsResponse};
use dashboard::{ApiError, DemandApi};

use crate::api_client;

/// [`DemandApi`] backed by the demand server's HTTP endpoints.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct HttpDemandApi;

#[async_trait(?Send)]
impl DemandApi for HttpDemandApi {
    async fn fetch_dataset(&self) -> Result<DemandDataset, ApiError> {
        log::trace!("Fetching demand dataset");
        let result = api_client::get::<DemandDataset>("/data").await;

        if let Err(ref e) = result {
            log::error!("Failed to fetch demand dataset: {}", e);
        } else {
            log::info!("Successfully fetched demand dataset");
        }

        result
    }

    async fn fetch_insights(&self, dataset: &DemandDataset) -> Result<InsightsResponse, ApiError> {
        log::trace!(
            "Requesting insights for {} routes, {} trend points",
            dataset.popular_routes.len(),
            dataset.price_trends.len()
        );
        let result = api_client::post::<InsightsResponse, _>("/insights", dataset).await;

        if let Err(ref e) = result {
            log::error!("Failed to fetch insights: {}", e);
        } else {
            log::info!("Successfully fetched insights");
        }

        result
    }
}
