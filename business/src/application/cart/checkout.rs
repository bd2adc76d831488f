use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartEntry;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::checkout::{CheckoutCartParams, CheckoutCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::Sale;
use crate::domain::sale::use_cases::submit::{SubmitSaleParams, SubmitSaleUseCase};

pub struct CheckoutCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub submit_sale: Arc<dyn SubmitSaleUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckoutCartUseCase for CheckoutCartUseCaseImpl {
    async fn execute(&self, params: CheckoutCartParams) -> Result<Sale, SaleError> {
        self.logger
            .info(&format!("Checking out cart: {}", params.cart_id));

        let cart = self
            .repository
            .get_by_id(params.cart_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => SaleError::Cart(CartError::NotFound),
                other => SaleError::Repository(other),
            })?;

        let sold = cart.entries.clone();
        let sale = self
            .submit_sale
            .execute(SubmitSaleParams {
                customer_name: params.customer_name,
                cart,
            })
            .await?;

        // The sale is already recorded at this point, so a failure to settle
        // the cart is logged rather than returned.
        if let Err(e) = self.settle_cart(params.cart_id, &sold).await {
            self.logger.warn(&format!(
                "Sale {} recorded but cart {} could not be cleared: {}",
                sale.id, params.cart_id, e
            ));
        }

        Ok(sale)
    }
}

impl CheckoutCartUseCaseImpl {
    /// Re-reads the cart and takes out what was sold. An emptied cart is
    /// dropped from the store.
    async fn settle_cart(&self, cart_id: Uuid, sold: &[CartEntry]) -> Result<(), RepositoryError> {
        let mut current = match self.repository.get_by_id(cart_id).await {
            Ok(cart) => cart,
            Err(RepositoryError::NotFound) => return Ok(()),
            Err(e) => return Err(e),
        };

        current.discard_sold(sold);
        if current.is_empty() {
            self.repository.delete(cart_id).await
        } else {
            self.repository.save(&current).await
        }
    }
}
