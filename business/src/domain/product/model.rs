use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::shared::value_objects::Money;

/// A sellable item with its current price, cost and stock level.
///
/// Stock never goes below zero; it only decreases as a side effect of a
/// sale line item being recorded.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: Money,
    pub cost: Money,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        price: Money,
        cost: Money,
        stock: i32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            cost,
            stock,
            created_at,
        }
    }

    /// Returns true if `quantity` units can be taken from the current stock.
    pub fn has_stock_for(&self, quantity: i32) -> bool {
        quantity <= self.stock
    }

    /// Margin earned per unit sold at `unit_price` given the current cost.
    pub fn unit_margin(&self, unit_price: Money) -> Money {
        unit_price - self.cost
    }
}
