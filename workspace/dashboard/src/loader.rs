use common::DemandDataset;
use std::rc::Rc;
use tracing::{error, info, instrument};

use crate::api::DemandApi;
use crate::error::{DashboardError, Result};

/// Fetches the aggregate demand dataset.
///
/// Loading has no side effects of its own: the caller commits the returned
/// dataset, so a failed load never touches what is already displayed.
pub struct DataLoader<A> {
    api: Rc<A>,
}

impl<A> Clone for DataLoader<A> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
        }
    }
}

impl<A: DemandApi> DataLoader<A> {
    pub fn new(api: Rc<A>) -> Self {
        Self { api }
    }

    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<DemandDataset> {
        info!("Loading demand dataset");

        let dataset = self.api.fetch_dataset().await.map_err(|e| {
            error!(error = %e, status = ?e.status(), "Failed to load demand dataset");
            DashboardError::DataLoad(e)
        })?;

        info!(
            routes = dataset.popular_routes.len(),
            periods = dataset.high_demand_periods.len(),
            trend_points = dataset.price_trends.len(),
            "Demand dataset loaded"
        );
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::testing::{MockDemandApi, sample_dataset};

    #[tokio::test]
    async fn test_load_returns_dataset() {
        let api = Rc::new(MockDemandApi::new());
        api.push_dataset(Ok(sample_dataset()));

        let loader = DataLoader::new(api.clone());
        let dataset = loader.load().await.expect("load should succeed");

        assert_eq!(dataset, sample_dataset());
        assert_eq!(api.dataset_calls(), 1);
    }

    #[tokio::test]
    async fn test_load_failure_carries_status() {
        let api = Rc::new(MockDemandApi::new());
        api.push_dataset(Err(ApiError::Status(500)));

        let err = DataLoader::new(api).load().await.unwrap_err();
        assert_eq!(err, DashboardError::DataLoad(ApiError::Status(500)));
    }

    #[tokio::test]
    async fn test_load_is_repeatable() {
        let api = Rc::new(MockDemandApi::new());
        api.push_dataset(Ok(sample_dataset()));
        api.push_dataset(Ok(DemandDataset::default()));

        let loader = DataLoader::new(api.clone());
        assert_eq!(loader.load().await.unwrap(), sample_dataset());
        assert!(loader.load().await.unwrap().is_empty());
        assert_eq!(api.dataset_calls(), 2);
    }
}
