use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::cart::model::{Cart, CartEntry};
use business::domain::sale::use_cases::fulfill::{FulfillSaleParams, FulfillSaleUseCase};
use business::domain::sale::use_cases::get_all::{GetAllSalesParams, GetAllSalesUseCase};
use business::domain::sale::use_cases::get_by_id::{GetSaleByIdParams, GetSaleByIdUseCase};
use business::domain::sale::use_cases::submit::{SubmitSaleParams, SubmitSaleUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::sale::dto::{CreateSaleRequest, SaleResponse, SaleStatusDto};
use crate::api::tags::ApiTags;

pub struct SaleApi {
    get_all_use_case: Arc<dyn GetAllSalesUseCase>,
    get_by_id_use_case: Arc<dyn GetSaleByIdUseCase>,
    submit_use_case: Arc<dyn SubmitSaleUseCase>,
    fulfill_use_case: Arc<dyn FulfillSaleUseCase>,
}

impl SaleApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllSalesUseCase>,
        get_by_id_use_case: Arc<dyn GetSaleByIdUseCase>,
        submit_use_case: Arc<dyn SubmitSaleUseCase>,
        fulfill_use_case: Arc<dyn FulfillSaleUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            submit_use_case,
            fulfill_use_case,
        }
    }
}

/// Sales API
///
/// Recording sales and moving them through fulfillment.
#[OpenApi]
impl SaleApi {
    /// List sales
    ///
    /// Returns sales newest first, each with its line items. Pass `status` to
    /// keep only pending (`not_fulfilled`) or `fulfilled` sales.
    #[oai(path = "/sales", method = "get", tag = "ApiTags::Sales")]
    async fn get_all(&self, status: Query<Option<SaleStatusDto>>) -> GetAllSalesResponse {
        let params = GetAllSalesParams {
            status: status.0.map(|s| s.into()),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(sales) => {
                let responses: Vec<SaleResponse> = sales.into_iter().map(|s| s.into()).collect();
                GetAllSalesResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllSalesResponse::InternalError(json)
            }
        }
    }

    /// Get a sale
    #[oai(path = "/sales/:id", method = "get", tag = "ApiTags::Sales")]
    async fn get_by_id(&self, id: Path<String>) -> GetSaleResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return GetSaleResponse::BadRequest(ErrorResponse::validation("sale.invalid_id")),
        };

        match self
            .get_by_id_use_case
            .execute(GetSaleByIdParams { id: uuid })
            .await
        {
            Ok(sale) => GetSaleResponse::Ok(Json(sale.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetSaleResponse::NotFound(json),
                    _ => GetSaleResponse::InternalError(json),
                }
            }
        }
    }

    /// Submit a sale
    ///
    /// Records a sale for the given customer and products in one step. Every
    /// product is priced at its current price and its stock is decremented.
    /// Nothing is recorded if any line fails.
    #[oai(path = "/sales", method = "post", tag = "ApiTags::Sales")]
    async fn submit(&self, body: Json<CreateSaleRequest>) -> SubmitSaleResponse {
        let mut entries = Vec::with_capacity(body.0.items.len());
        for item in body.0.items {
            let product_id = match Uuid::parse_str(&item.product_id) {
                Ok(uuid) => uuid,
                Err(_) => {
                    return SubmitSaleResponse::BadRequest(ErrorResponse::validation(
                        "sale.invalid_product_id",
                    ));
                }
            };
            entries.push(CartEntry {
                product_id,
                quantity: item.quantity,
            });
        }

        let cart = match Cart::from_entries(entries) {
            Ok(cart) => cart,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return SubmitSaleResponse::BadRequest(json);
            }
        };

        let params = SubmitSaleParams {
            customer_name: body.0.customer_name,
            cart,
        };

        match self.submit_use_case.execute(params).await {
            Ok(sale) => SubmitSaleResponse::Created(Json(sale.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SubmitSaleResponse::BadRequest(json),
                    404 => SubmitSaleResponse::NotFound(json),
                    409 => SubmitSaleResponse::Conflict(json),
                    _ => SubmitSaleResponse::InternalError(json),
                }
            }
        }
    }

    /// Fulfill a sale
    ///
    /// Marks a pending sale as fulfilled. Fulfilling twice is rejected.
    #[oai(path = "/sales/:id/fulfill", method = "post", tag = "ApiTags::Sales")]
    async fn fulfill(&self, id: Path<String>) -> FulfillSaleResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return FulfillSaleResponse::BadRequest(ErrorResponse::validation(
                    "sale.invalid_id",
                ));
            }
        };

        match self
            .fulfill_use_case
            .execute(FulfillSaleParams { id: uuid })
            .await
        {
            Ok(sale) => FulfillSaleResponse::Ok(Json(sale.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => FulfillSaleResponse::NotFound(json),
                    409 => FulfillSaleResponse::Conflict(json),
                    _ => FulfillSaleResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllSalesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<SaleResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSaleResponse {
    #[oai(status = 200)]
    Ok(Json<SaleResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmitSaleResponse {
    #[oai(status = 201)]
    Created(Json<SaleResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum FulfillSaleResponse {
    #[oai(status = 200)]
    Ok(Json<SaleResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
