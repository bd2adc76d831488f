use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartView;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_entry::{AddCartEntryParams, AddCartEntryUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddCartEntryUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartEntryUseCase for AddCartEntryUseCaseImpl {
    async fn execute(&self, params: AddCartEntryParams) -> Result<CartView, CartError> {
        if params.quantity <= 0 {
            return Err(CartError::InvalidQuantity);
        }

        self.logger.info(&format!(
            "Adding {} x {} to cart {}",
            params.quantity, params.product_id, params.cart_id
        ));

        let mut cart = self
            .repository
            .get_by_id(params.cart_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;

        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        if let Err(e) = cart.add(&product, params.quantity) {
            self.logger.warn(&format!(
                "Rejected cart add for {} ({} in stock): {}",
                product.name, product.stock, e
            ));
            return Err(e);
        }

        // Nothing is stored until the reply is ready
        let products = self.product_repository.get_all().await?;
        let view = cart.into_view(&products);
        self.repository.save(&view.cart).await?;

        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::Cart;
    use crate::domain::product::model::Product;
    use crate::domain::shared::value_objects::Money;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<Cart, RepositoryError>;
            async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn create_test_product(name: &str, price: i64, stock: i32) -> Product {
        Product::from_repository(
            Uuid::new_v4(),
            name.to_string(),
            Money::new(price),
            Money::new(price / 2),
            stock,
            Utc::now(),
        )
    }

    fn use_case_for(cart: Cart, product: Product, expect_save: bool) -> AddCartEntryUseCaseImpl {
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_get_by_id()
            .returning(move |_| Ok(cart.clone()));
        if expect_save {
            cart_repo.expect_save().times(1).returning(|_| Ok(()));
        } else {
            cart_repo.expect_save().never();
        }

        let mut product_repo = MockProductRepo::new();
        let single = product.clone();
        product_repo
            .expect_get_by_id()
            .returning(move |_| Ok(single.clone()));
        product_repo
            .expect_get_all()
            .returning(move || Ok(vec![product.clone()]));

        AddCartEntryUseCaseImpl {
            repository: Arc::new(cart_repo),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_merge_with_existing_entry() {
        let product = create_test_product("Sourdough", 500, 5);
        let mut cart = Cart::new();
        cart.add(&product, 3).unwrap();
        let cart_id = cart.id;
        let product_id = product.id;

        let use_case = use_case_for(cart, product, true);

        let view = use_case
            .execute(AddCartEntryParams {
                cart_id,
                product_id,
                quantity: 2,
            })
            .await
            .unwrap();

        assert_eq!(view.cart.entries.len(), 1);
        assert_eq!(view.cart.quantity_of(product_id), 5);
        assert_eq!(view.priced.total, Money::new(2500));
    }

    #[tokio::test]
    async fn should_add_to_cart_holding_removed_product() {
        let removed = create_test_product("Rye Bread", 400, 5);
        let tea = create_test_product("Tea", 300, 10);
        let mut cart = Cart::new();
        cart.add(&removed, 1).unwrap();
        let cart_id = cart.id;
        let removed_id = removed.id;
        let tea_id = tea.id;

        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_get_by_id()
            .returning(move |_| Ok(cart.clone()));
        cart_repo
            .expect_save()
            .withf(move |cart: &Cart| cart.quantity_of(tea_id) == 2)
            .times(1)
            .returning(|_| Ok(()));
        let mut product_repo = MockProductRepo::new();
        let single = tea.clone();
        product_repo
            .expect_get_by_id()
            .returning(move |_| Ok(single.clone()));
        product_repo
            .expect_get_all()
            .returning(move || Ok(vec![tea.clone()]));

        let use_case = AddCartEntryUseCaseImpl {
            repository: Arc::new(cart_repo),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        };

        let view = use_case
            .execute(AddCartEntryParams {
                cart_id,
                product_id: tea_id,
                quantity: 2,
            })
            .await
            .unwrap();

        assert_eq!(view.unavailable, vec![removed_id]);
        assert_eq!(view.priced.total, Money::new(600));
    }

    #[tokio::test]
    async fn should_not_save_when_catalogue_cannot_be_read() {
        let tea = create_test_product("Tea", 300, 10);
        let tea_id = tea.id;

        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_get_by_id()
            .returning(|_| Ok(Cart::new()));
        cart_repo.expect_save().never();
        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(move |_| Ok(tea.clone()));
        product_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = AddCartEntryUseCaseImpl {
            repository: Arc::new(cart_repo),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartEntryParams {
                cart_id: Uuid::new_v4(),
                product_id: tea_id,
                quantity: 1,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::Repository(_)));
    }

    #[tokio::test]
    async fn should_reject_zero_quantity_before_any_call() {
        let use_case = AddCartEntryUseCaseImpl {
            repository: Arc::new(MockCartRepo::new()),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartEntryParams {
                cart_id: Uuid::new_v4(),
                product_id: Uuid::new_v4(),
                quantity: 0,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
    }

    #[tokio::test]
    async fn should_reject_quantity_over_stock_without_saving() {
        let product = create_test_product("Sourdough", 500, 5);
        let cart = Cart::new();
        let cart_id = cart.id;
        let product_id = product.id;

        let use_case = use_case_for(cart, product, false);

        let result = use_case
            .execute(AddCartEntryParams {
                cart_id,
                product_id,
                quantity: 6,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ExceedsStock));
    }

    #[tokio::test]
    async fn should_return_product_not_found_for_unknown_product() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_get_by_id()
            .returning(|_| Ok(Cart::new()));
        cart_repo.expect_save().never();
        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = AddCartEntryUseCaseImpl {
            repository: Arc::new(cart_repo),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartEntryParams {
                cart_id: Uuid::new_v4(),
                product_id: Uuid::new_v4(),
                quantity: 1,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotFound));
    }
}
