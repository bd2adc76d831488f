use async_trait::async_trait;

use crate::domain::metrics::model::DashboardMetrics;
use crate::domain::sale::errors::SaleError;

#[async_trait]
pub trait GetDashboardMetricsUseCase: Send + Sync {
    async fn execute(&self) -> Result<DashboardMetrics, SaleError>;
}
