use poem_openapi::Object;

use business::domain::metrics::model::DashboardMetrics;

#[derive(Debug, Clone, Object)]
pub struct DashboardMetricsResponse {
    /// Number of recorded sales
    pub total_sales: u64,
    /// Sales not yet fulfilled
    pub pending_sales: u64,
    /// Sum of sale totals in minor units
    pub total_revenue: i64,
    /// Revenue minus product cost of every sold unit, in minor units
    pub total_profit: i64,
    /// Units sold across all sales
    pub total_units: i64,
}

impl From<DashboardMetrics> for DashboardMetricsResponse {
    fn from(metrics: DashboardMetrics) -> Self {
        Self {
            total_sales: metrics.total_sales,
            pending_sales: metrics.pending_sales,
            total_revenue: metrics.total_revenue.minor_units(),
            total_profit: metrics.total_profit.minor_units(),
            total_units: metrics.total_units,
        }
    }
}
