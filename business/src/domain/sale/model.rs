use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::SaleError;
use super::value_objects::SaleStatus;
use crate::domain::cart::model::PricedCart;
use crate::domain::shared::value_objects::Money;

/// One product/quantity/price row of a sale. Immutable once recorded.
///
/// `unit_price` is the price at the time of sale and does not follow later
/// product price changes. `product_name` is filled in when reading.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleLineItem {
    pub id: Uuid,
    pub sale_id: Uuid,
    pub product_id: Uuid,
    pub product_name: Option<String>,
    pub quantity: i32,
    pub unit_price: Money,
    pub subtotal: Money,
}

#[derive(Debug, Clone)]
pub struct Sale {
    pub id: Uuid,
    pub customer_name: String,
    pub status: SaleStatus,
    pub total_amount: Money,
    pub created_at: DateTime<Utc>,
    pub items: Vec<SaleLineItem>,
}

impl Sale {
    /// Records a new sale from a priced cart.
    ///
    /// The customer name is trimmed and must not be empty; the cart must have
    /// at least one line. The total is the cart total.
    pub fn new(customer_name: &str, cart: PricedCart) -> Result<Self, SaleError> {
        let customer_name = customer_name.trim();
        if customer_name.is_empty() {
            return Err(SaleError::CustomerNameEmpty);
        }
        if cart.lines.is_empty() {
            return Err(SaleError::EmptyCart);
        }

        let id = Uuid::new_v4();
        let items = cart
            .lines
            .into_iter()
            .map(|line| SaleLineItem {
                id: Uuid::new_v4(),
                sale_id: id,
                product_id: line.product_id,
                product_name: Some(line.product_name),
                quantity: line.quantity,
                unit_price: line.unit_price,
                subtotal: line.unit_price.times(line.quantity),
            })
            .collect();

        Ok(Self {
            id,
            customer_name: customer_name.to_string(),
            status: SaleStatus::NotFulfilled,
            total_amount: cart.total,
            created_at: Utc::now(),
            items,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        customer_name: String,
        status: SaleStatus,
        total_amount: Money,
        created_at: DateTime<Utc>,
        items: Vec<SaleLineItem>,
    ) -> Self {
        Self {
            id,
            customer_name,
            status,
            total_amount,
            created_at,
            items,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == SaleStatus::NotFulfilled
    }

    /// Marks the sale as fulfilled. Fulfilled sales never go back.
    pub fn fulfill(&mut self) -> Result<(), SaleError> {
        if !self.is_pending() {
            return Err(SaleError::AlreadyFulfilled);
        }
        self.status = SaleStatus::Fulfilled;
        Ok(())
    }

    /// Total units across all line items.
    pub fn units(&self) -> i64 {
        self.items.iter().map(|i| i64::from(i.quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartLine;

    fn line(name: &str, price: i64, quantity: i32) -> CartLine {
        CartLine {
            product_id: Uuid::new_v4(),
            product_name: name.to_string(),
            unit_price: Money::new(price),
            quantity,
            subtotal: Money::new(price).times(quantity),
        }
    }

    fn priced(lines: Vec<CartLine>) -> PricedCart {
        let total = lines.iter().map(|l| l.subtotal).sum();
        PricedCart { lines, total }
    }

    #[test]
    fn should_create_sale_from_priced_cart() {
        let cart = priced(vec![line("Product A", 6900, 2), line("Product B", 6900, 1)]);

        let sale = Sale::new("Ana Lopez", cart).unwrap();

        assert_eq!(sale.total_amount, Money::new(20700));
        assert_eq!(sale.status, SaleStatus::NotFulfilled);
        assert_eq!(sale.items.len(), 2);
        assert_eq!(sale.items[0].subtotal, Money::new(13800));
        assert_eq!(sale.items[1].subtotal, Money::new(6900));
        assert!(sale.items.iter().all(|i| i.sale_id == sale.id));
    }

    #[test]
    fn should_trim_customer_name() {
        let sale = Sale::new("  Ana Lopez ", priced(vec![line("Tea", 500, 1)])).unwrap();

        assert_eq!(sale.customer_name, "Ana Lopez");
    }

    #[test]
    fn should_reject_blank_customer_name() {
        let result = Sale::new("   ", priced(vec![line("Tea", 500, 1)]));

        assert!(matches!(result, Err(SaleError::CustomerNameEmpty)));
    }

    #[test]
    fn should_reject_empty_cart() {
        let result = Sale::new("Ana Lopez", priced(vec![]));

        assert!(matches!(result, Err(SaleError::EmptyCart)));
    }

    #[test]
    fn should_fulfill_pending_sale_once() {
        let mut sale = Sale::new("Ana Lopez", priced(vec![line("Tea", 500, 3)])).unwrap();

        assert!(sale.fulfill().is_ok());
        assert_eq!(sale.status, SaleStatus::Fulfilled);
        assert!(!sale.is_pending());
        assert!(matches!(sale.fulfill(), Err(SaleError::AlreadyFulfilled)));
        assert_eq!(sale.status, SaleStatus::Fulfilled);
    }

    #[test]
    fn should_count_units_across_items() {
        let sale = Sale::new(
            "Ana Lopez",
            priced(vec![line("Tea", 500, 3), line("Cake", 900, 2)]),
        )
        .unwrap();

        assert_eq!(sale.units(), 5);
    }
}
