//! Chart refresh collaborator boundary.
//!
//! The submission layer calls [`ChartRefreshNotifier::notify`] exactly once per
//! successful submission. Chart generation itself happens elsewhere; all the
//! notifier does is force the three visual artifacts to reload.

use std::sync::Arc;

use crate::fields::FieldId;
use crate::surface::UiSurface;

/// Told once per successful submission; reloads the sleep, water and mood
/// charts. `token` is a uniqueness value for cache invalidation.
pub trait ChartRefreshNotifier: Send + Sync {
    fn notify(&self, token: i64);
}

/// Repoints each chart slot at its endpoint with a cache-busting token,
/// issuing three independent refreshes.
pub struct SurfaceChartRefresher {
    surface: Arc<dyn UiSurface>,
}

impl SurfaceChartRefresher {
    pub fn new(surface: Arc<dyn UiSurface>) -> Self {
        Self { surface }
    }
}

impl ChartRefreshNotifier for SurfaceChartRefresher {
    fn notify(&self, token: i64) {
        for field in FieldId::ALL {
            let url = format!("/chart/{}?t={}", field.chart_slug(), token);
            self.surface.set_chart_source(field, &url);
        }
    }
}
