use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::Sale;
use crate::domain::sale::repository::SaleRepository;
use crate::domain::sale::use_cases::get_all::{GetAllSalesParams, GetAllSalesUseCase};

pub struct GetAllSalesUseCaseImpl {
    pub repository: Arc<dyn SaleRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllSalesUseCase for GetAllSalesUseCaseImpl {
    async fn execute(&self, params: GetAllSalesParams) -> Result<Vec<Sale>, SaleError> {
        match params.status {
            Some(status) => self
                .logger
                .info(&format!("Fetching sales with status {}", status)),
            None => self.logger.info("Fetching all sales"),
        }
        let sales = self.repository.get_all(params.status).await?;
        self.logger.info(&format!("Found {} sales", sales.len()));
        Ok(sales)
    }
}
