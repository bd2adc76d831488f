use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::Sale;
use crate::domain::sale::repository::SaleRepository;
use crate::domain::sale::use_cases::get_by_id::{GetSaleByIdParams, GetSaleByIdUseCase};

pub struct GetSaleByIdUseCaseImpl {
    pub repository: Arc<dyn SaleRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSaleByIdUseCase for GetSaleByIdUseCaseImpl {
    async fn execute(&self, params: GetSaleByIdParams) -> Result<Sale, SaleError> {
        self.logger.info(&format!("Fetching sale: {}", params.id));
        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => SaleError::NotFound,
                other => SaleError::Repository(other),
            })
    }
}
