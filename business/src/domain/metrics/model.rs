use crate::domain::shared::value_objects::Money;

/// Summary figures shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardMetrics {
    pub total_sales: u64,
    pub pending_sales: u64,
    pub total_revenue: Money,
    pub total_profit: Money,
    pub total_units: i64,
}
