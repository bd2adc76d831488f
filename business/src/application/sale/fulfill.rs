use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::Sale;
use crate::domain::sale::repository::SaleRepository;
use crate::domain::sale::use_cases::fulfill::{FulfillSaleParams, FulfillSaleUseCase};

pub struct FulfillSaleUseCaseImpl {
    pub repository: Arc<dyn SaleRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FulfillSaleUseCase for FulfillSaleUseCaseImpl {
    async fn execute(&self, params: FulfillSaleParams) -> Result<Sale, SaleError> {
        self.logger.info(&format!("Fulfilling sale: {}", params.id));

        let mut sale = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => SaleError::NotFound,
                other => SaleError::Repository(other),
            })?;

        sale.fulfill()?;

        // The update only matches pending rows; losing a race to another
        // fulfillment shows up as NotFound here.
        self.repository
            .mark_fulfilled(sale.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => SaleError::AlreadyFulfilled,
                other => SaleError::Repository(other),
            })?;

        self.logger.info(&format!("Sale fulfilled: {}", sale.id));
        Ok(sale)
    }
}
