use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

const DEFAULT_IDLE_TIMEOUT_HOURS: i64 = 12;

/// Process-local cart store. Carts live only as long as the server process.
///
/// Carts untouched for longer than the idle timeout are evicted on the next
/// write, so abandoned carts do not pile up.
pub struct CartRepositoryInMemory {
    carts: RwLock<HashMap<Uuid, Cart>>,
    idle_timeout: Duration,
}

impl Default for CartRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl CartRepositoryInMemory {
    pub fn new() -> Self {
        Self::with_idle_timeout(Duration::hours(DEFAULT_IDLE_TIMEOUT_HOURS))
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            carts: RwLock::new(HashMap::new()),
            idle_timeout,
        }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryInMemory {
    async fn get_by_id(&self, id: Uuid) -> Result<Cart, RepositoryError> {
        self.carts
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let cutoff = Utc::now() - self.idle_timeout;
        let mut carts = self.carts.write().await;
        let before = carts.len();
        carts.retain(|_, c| c.updated_at >= cutoff);
        if carts.len() < before {
            tracing::debug!("Evicted {} idle carts", before - carts.len());
        }
        carts.insert(cart.id, cart.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.carts.write().await.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::model::CartEntry;

    fn cart_with_entry() -> Cart {
        Cart::from_entries(vec![CartEntry {
            product_id: Uuid::new_v4(),
            quantity: 2,
        }])
        .unwrap()
    }

    #[tokio::test]
    async fn should_return_saved_cart() {
        let repo = CartRepositoryInMemory::new();
        let cart = cart_with_entry();

        repo.save(&cart).await.unwrap();
        let loaded = repo.get_by_id(cart.id).await.unwrap();

        assert_eq!(loaded.id, cart.id);
        assert_eq!(loaded.entries, cart.entries);
    }

    #[tokio::test]
    async fn should_overwrite_cart_on_save() {
        let repo = CartRepositoryInMemory::new();
        let mut cart = cart_with_entry();
        repo.save(&cart).await.unwrap();

        let sold = cart.entries.clone();
        cart.discard_sold(&sold);
        repo.save(&cart).await.unwrap();

        assert!(repo.get_by_id(cart.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_forget_deleted_cart() {
        let repo = CartRepositoryInMemory::new();
        let cart = cart_with_entry();
        repo.save(&cart).await.unwrap();

        repo.delete(cart.id).await.unwrap();

        assert!(matches!(
            repo.get_by_id(cart.id).await,
            Err(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn should_ignore_delete_of_unknown_cart() {
        let repo = CartRepositoryInMemory::new();

        assert!(repo.delete(Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn should_evict_idle_carts_on_write() {
        let repo = CartRepositoryInMemory::with_idle_timeout(Duration::hours(1));
        let mut stale = cart_with_entry();
        stale.updated_at = Utc::now() - Duration::hours(2);
        repo.save(&stale).await.unwrap();

        let fresh = cart_with_entry();
        repo.save(&fresh).await.unwrap();

        assert!(matches!(
            repo.get_by_id(stale.id).await,
            Err(RepositoryError::NotFound)
        ));
        assert!(repo.get_by_id(fresh.id).await.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_cart() {
        let repo = CartRepositoryInMemory::new();

        let result = repo.get_by_id(Uuid::new_v4()).await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }
}
