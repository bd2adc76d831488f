use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::use_cases::add_entry::{AddCartEntryParams, AddCartEntryUseCase};
use business::domain::cart::use_cases::checkout::{CheckoutCartParams, CheckoutCartUseCase};
use business::domain::cart::use_cases::create::CreateCartUseCase;
use business::domain::cart::use_cases::get_by_id::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_entry::{
    RemoveCartEntryParams, RemoveCartEntryUseCase,
};

use crate::api::cart::dto::{CartEntryRequest, CartResponse, CheckoutRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::sale::dto::SaleResponse;
use crate::api::tags::ApiTags;

pub struct CartApi {
    create_use_case: Arc<dyn CreateCartUseCase>,
    get_by_id_use_case: Arc<dyn GetCartUseCase>,
    add_entry_use_case: Arc<dyn AddCartEntryUseCase>,
    remove_entry_use_case: Arc<dyn RemoveCartEntryUseCase>,
    checkout_use_case: Arc<dyn CheckoutCartUseCase>,
}

impl CartApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCartUseCase>,
        get_by_id_use_case: Arc<dyn GetCartUseCase>,
        add_entry_use_case: Arc<dyn AddCartEntryUseCase>,
        remove_entry_use_case: Arc<dyn RemoveCartEntryUseCase>,
        checkout_use_case: Arc<dyn CheckoutCartUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_by_id_use_case,
            add_entry_use_case,
            remove_entry_use_case,
            checkout_use_case,
        }
    }
}

fn parse_id(raw: &str, message: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw).map_err(|_| ErrorResponse::validation(message))
}

/// Cart API
///
/// Building up a sale one product at a time before checking it out.
#[OpenApi]
impl CartApi {
    /// Create a cart
    #[oai(path = "/carts", method = "post", tag = "ApiTags::Carts")]
    async fn create(&self) -> CreateCartResponse {
        match self.create_use_case.execute().await {
            Ok(view) => CreateCartResponse::Created(Json(view.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateCartResponse::InternalError(json)
            }
        }
    }

    /// Get a cart
    ///
    /// Returns the cart priced at current product prices.
    #[oai(path = "/carts/:id", method = "get", tag = "ApiTags::Carts")]
    async fn get_by_id(&self, id: Path<String>) -> CartViewResponse {
        let id = match parse_id(&id.0, "cart.invalid_id") {
            Ok(id) => id,
            Err(json) => return CartViewResponse::BadRequest(json),
        };

        match self.get_by_id_use_case.execute(GetCartParams { id }).await {
            Ok(view) => CartViewResponse::Ok(Json(view.into())),
            Err(err) => CartViewResponse::from_error(err.into_error_response()),
        }
    }

    /// Add a product to a cart
    ///
    /// Adding a product already in the cart increases its quantity. The
    /// combined quantity cannot exceed the product's stock.
    #[oai(path = "/carts/:id/entries", method = "post", tag = "ApiTags::Carts")]
    async fn add_entry(&self, id: Path<String>, body: Json<CartEntryRequest>) -> CartViewResponse {
        let cart_id = match parse_id(&id.0, "cart.invalid_id") {
            Ok(id) => id,
            Err(json) => return CartViewResponse::BadRequest(json),
        };
        let product_id = match parse_id(&body.0.product_id, "cart.invalid_product_id") {
            Ok(id) => id,
            Err(json) => return CartViewResponse::BadRequest(json),
        };

        let params = AddCartEntryParams {
            cart_id,
            product_id,
            quantity: body.0.quantity,
        };

        match self.add_entry_use_case.execute(params).await {
            Ok(view) => CartViewResponse::Ok(Json(view.into())),
            Err(err) => CartViewResponse::from_error(err.into_error_response()),
        }
    }

    /// Remove a product from a cart
    #[oai(
        path = "/carts/:id/entries/:product_id",
        method = "delete",
        tag = "ApiTags::Carts"
    )]
    async fn remove_entry(&self, id: Path<String>, product_id: Path<String>) -> CartViewResponse {
        let cart_id = match parse_id(&id.0, "cart.invalid_id") {
            Ok(id) => id,
            Err(json) => return CartViewResponse::BadRequest(json),
        };
        let product_id = match parse_id(&product_id.0, "cart.invalid_product_id") {
            Ok(id) => id,
            Err(json) => return CartViewResponse::BadRequest(json),
        };

        let params = RemoveCartEntryParams {
            cart_id,
            product_id,
        };

        match self.remove_entry_use_case.execute(params).await {
            Ok(view) => CartViewResponse::Ok(Json(view.into())),
            Err(err) => CartViewResponse::from_error(err.into_error_response()),
        }
    }

    /// Check out a cart
    ///
    /// Submits the cart's contents as a sale for the given customer and
    /// empties the cart. On failure the cart is left untouched.
    #[oai(path = "/carts/:id/checkout", method = "post", tag = "ApiTags::Carts")]
    async fn checkout(&self, id: Path<String>, body: Json<CheckoutRequest>) -> CheckoutResponse {
        let cart_id = match parse_id(&id.0, "cart.invalid_id") {
            Ok(id) => id,
            Err(json) => return CheckoutResponse::BadRequest(json),
        };

        let params = CheckoutCartParams {
            cart_id,
            customer_name: body.0.customer_name,
        };

        match self.checkout_use_case.execute(params).await {
            Ok(sale) => CheckoutResponse::Created(Json(sale.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CheckoutResponse::BadRequest(json),
                    404 => CheckoutResponse::NotFound(json),
                    409 => CheckoutResponse::Conflict(json),
                    _ => CheckoutResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCartResponse {
    #[oai(status = 201)]
    Created(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartViewResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartViewResponse {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => CartViewResponse::BadRequest(json),
            404 => CartViewResponse::NotFound(json),
            _ => CartViewResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckoutResponse {
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
