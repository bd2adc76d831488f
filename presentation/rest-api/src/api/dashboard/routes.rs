use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::metrics::use_cases::get_dashboard::GetDashboardMetricsUseCase;

use crate::api::dashboard::dto::DashboardMetricsResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct DashboardApi {
    get_metrics_use_case: Arc<dyn GetDashboardMetricsUseCase>,
}

impl DashboardApi {
    pub fn new(get_metrics_use_case: Arc<dyn GetDashboardMetricsUseCase>) -> Self {
        Self {
            get_metrics_use_case,
        }
    }
}

/// Dashboard API
#[OpenApi]
impl DashboardApi {
    /// Dashboard metrics
    ///
    /// Totals over every recorded sale: count, pending count, revenue, profit
    /// and units sold. Empty store yields zeros.
    #[oai(path = "/dashboard/metrics", method = "get", tag = "ApiTags::Dashboard")]
    async fn get_metrics(&self) -> GetDashboardMetricsResponse {
        match self.get_metrics_use_case.execute().await {
            Ok(metrics) => GetDashboardMetricsResponse::Ok(Json(metrics.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetDashboardMetricsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetDashboardMetricsResponse {
    #[oai(status = 200)]
    Ok(Json<DashboardMetricsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
