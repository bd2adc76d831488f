use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartView;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_entry::{
    RemoveCartEntryParams, RemoveCartEntryUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct RemoveCartEntryUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartEntryUseCase for RemoveCartEntryUseCaseImpl {
    async fn execute(&self, params: RemoveCartEntryParams) -> Result<CartView, CartError> {
        self.logger.info(&format!(
            "Removing {} from cart {}",
            params.product_id, params.cart_id
        ));

        let mut cart = self
            .repository
            .get_by_id(params.cart_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;

        cart.remove(params.product_id)?;

        let products = self.product_repository.get_all().await?;
        let view = cart.into_view(&products);
        self.repository.save(&view.cart).await?;

        Ok(view)
    }
}
