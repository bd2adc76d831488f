use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::metrics::calculator::compute_metrics;
use crate::domain::metrics::model::DashboardMetrics;
use crate::domain::metrics::use_cases::get_dashboard::GetDashboardMetricsUseCase;
use crate::domain::product::repository::ProductRepository;
use crate::domain::sale::errors::SaleError;
use crate::domain::sale::repository::SaleRepository;

/// Re-reads both snapshots on every call and derives the metrics from them.
pub struct GetDashboardMetricsUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub sale_repository: Arc<dyn SaleRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetDashboardMetricsUseCase for GetDashboardMetricsUseCaseImpl {
    async fn execute(&self) -> Result<DashboardMetrics, SaleError> {
        self.logger.debug("Computing dashboard metrics");

        let products = self.product_repository.get_all().await?;
        let sales = self.sale_repository.get_all(None).await?;
        let metrics = compute_metrics(&products, &sales);

        self.logger.info(&format!(
            "Dashboard: {} sales, revenue {}, profit {}, {} units",
            metrics.total_sales, metrics.total_revenue, metrics.total_profit, metrics.total_units
        ));
        Ok(metrics)
    }
}
