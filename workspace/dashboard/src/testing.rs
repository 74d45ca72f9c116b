//! Test fixtures: an in-memory API, a recording chart surface and sample data.

use async_trait::async_trait;
use chrono::NaiveDate;
use common::{DemandDataset, DemandPeriod, InsightsResponse, PricePoint, RouteDemand};
use rust_decimal::Decimal;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::api::DemandApi;
use crate::chart::ChartSurface;
use crate::error::ApiError;
use crate::render::{TrendChart, hex_color};

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Colors `#000001`, `#000002`, ... in call order.
pub fn sequential_colors() -> impl FnMut() -> String {
    let mut next = 0u32;
    move || {
        next += 1;
        hex_color(next)
    }
}

/// Three routes, two periods and a price trend with one missing day.
pub fn sample_dataset() -> DemandDataset {
    DemandDataset {
        popular_routes: vec![
            RouteDemand {
                route: "Sydney-Melbourne".into(),
                demand: 2410,
                avg_price: Decimal::new(28950, 2),
            },
            RouteDemand {
                route: "Brisbane-Perth".into(),
                demand: 1875,
                avg_price: Decimal::new(51200, 2),
            },
            RouteDemand {
                route: "Adelaide-Gold Coast".into(),
                demand: 930,
                avg_price: Decimal::new(17315, 2),
            },
        ],
        high_demand_periods: vec![
            DemandPeriod {
                period: "Christmas Holidays".into(),
                location: "Sydney".into(),
                demand_factor: Decimal::new(18, 1),
                notes: "Expect 80% higher demand in Sydney during Christmas Holidays.".into(),
            },
            DemandPeriod {
                period: "Easter Break".into(),
                location: "Gold Coast".into(),
                demand_factor: Decimal::new(15, 1),
                notes: String::new(),
            },
        ],
        price_trends: vec![
            PricePoint {
                date: date(2024, 1, 1),
                route: "Sydney-Melbourne".into(),
                price: Decimal::new(27500, 2),
            },
            PricePoint {
                date: date(2024, 1, 2),
                route: "Sydney-Melbourne".into(),
                price: Decimal::new(31020, 2),
            },
            PricePoint {
                date: date(2024, 1, 1),
                route: "Brisbane-Perth".into(),
                price: Decimal::new(50010, 2),
            },
        ],
    }
}

/// Replays queued responses and counts calls.
#[derive(Default)]
pub struct MockDemandApi {
    datasets: RefCell<VecDeque<Result<DemandDataset, ApiError>>>,
    insights: RefCell<VecDeque<Result<String, ApiError>>>,
    dataset_calls: Cell<usize>,
    insights_calls: Cell<usize>,
    last_insights_body: RefCell<Option<DemandDataset>>,
}

impl MockDemandApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_dataset(&self, response: Result<DemandDataset, ApiError>) {
        self.datasets.borrow_mut().push_back(response);
    }

    pub fn push_insights(&self, response: Result<String, ApiError>) {
        self.insights.borrow_mut().push_back(response);
    }

    pub fn dataset_calls(&self) -> usize {
        self.dataset_calls.get()
    }

    pub fn insights_calls(&self) -> usize {
        self.insights_calls.get()
    }

    pub fn last_insights_body(&self) -> Option<DemandDataset> {
        self.last_insights_body.borrow().clone()
    }
}

#[async_trait(?Send)]
impl DemandApi for MockDemandApi {
    async fn fetch_dataset(&self) -> Result<DemandDataset, ApiError> {
        self.dataset_calls.set(self.dataset_calls.get() + 1);
        self.datasets
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no queued dataset".into())))
    }

    async fn fetch_insights(&self, dataset: &DemandDataset) -> Result<InsightsResponse, ApiError> {
        self.insights_calls.set(self.insights_calls.get() + 1);
        *self.last_insights_body.borrow_mut() = Some(dataset.clone());
        self.insights
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no queued insights".into())))
            .map(|insights| InsightsResponse { insights })
    }
}

/// Chart surface that hands out sequential handles and records teardown.
#[derive(Default)]
pub struct RecordingSurface {
    pub drawn: usize,
    pub destroyed: Vec<usize>,
    pub on_destroy: Option<Rc<Cell<usize>>>,
}

impl RecordingSurface {
    pub fn live(&self) -> usize {
        self.drawn - self.destroyed.len()
    }
}

impl ChartSurface for RecordingSurface {
    type Handle = usize;

    fn draw(&mut self, _chart: &TrendChart) -> usize {
        self.drawn += 1;
        self.drawn - 1
    }

    fn destroy(&mut self, handle: usize) {
        self.destroyed.push(handle);
        if let Some(counter) = &self.on_destroy {
            counter.set(counter.get() + 1);
        }
    }
}
