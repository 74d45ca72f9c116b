use tracing::trace;

use crate::render::TrendChart;

/// A place a trend chart can be drawn onto, e.g. a Plotly `<div>`.
pub trait ChartSurface {
    /// Token identifying a drawn chart, needed to tear it down again
    type Handle;

    fn draw(&mut self, chart: &TrendChart) -> Self::Handle;

    fn destroy(&mut self, handle: Self::Handle);
}

/// Owns at most one live chart on a surface.
///
/// Showing a new chart destroys the previous one first, and dropping the slot
/// destroys whatever is still drawn.
pub struct ChartSlot<S: ChartSurface> {
    surface: S,
    current: Option<S::Handle>,
}

impl<S: ChartSurface> ChartSlot<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            current: None,
        }
    }

    pub fn show(&mut self, chart: &TrendChart) {
        self.clear();
        trace!(series = chart.series.len(), "Drawing trend chart");
        self.current = Some(self.surface.draw(chart));
    }

    pub fn clear(&mut self) {
        if let Some(handle) = self.current.take() {
            trace!("Destroying previous trend chart");
            self.surface.destroy(handle);
        }
    }

    pub fn is_drawn(&self) -> bool {
        self.current.is_some()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: ChartSurface> Drop for ChartSlot<S> {
    fn drop(&mut self) {
        self.clear();
    }
}
