use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::Sale;
use crate::domain::sale::repository::SaleRepository;
use crate::domain::sale::use_cases::submit::{SubmitSaleParams, SubmitSaleUseCase};

pub struct SubmitSaleUseCaseImpl {
    pub repository: Arc<dyn SaleRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubmitSaleUseCase for SubmitSaleUseCaseImpl {
    async fn execute(&self, params: SubmitSaleParams) -> Result<Sale, SaleError> {
        // Validation happens before touching the store
        if params.customer_name.trim().is_empty() {
            return Err(SaleError::CustomerNameEmpty);
        }
        if params.cart.is_empty() {
            return Err(SaleError::EmptyCart);
        }

        self.logger.info(&format!(
            "Submitting sale for {} with {} entries",
            params.customer_name.trim(),
            params.cart.entries.len()
        ));

        let products = self.product_repository.get_all().await?;
        params.cart.check_stock(&products)?;
        let priced = params.cart.price(&products)?;
        let sale = Sale::new(&params.customer_name, priced)?;

        self.repository.create(&sale).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to record sale {}: {}", sale.id, e));
            match e {
                RepositoryError::InsufficientStock => SaleError::InsufficientStock,
                RepositoryError::NotFound => SaleError::Cart(CartError::ProductNotFound),
                other => SaleError::Repository(other),
            }
        })?;

        self.logger.info(&format!(
            "Sale recorded: {} total {}",
            sale.id, sale.total_amount
        ));
        Ok(sale)
    }
}
