use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::sale::model::{Sale, SaleLineItem};
use business::domain::sale::value_objects::SaleStatus;
use business::domain::shared::value_objects::Money;

#[derive(Debug, FromRow)]
pub struct SaleEntity {
    pub id: Uuid,
    pub customer_name: String,
    pub status: String,
    pub total_amount: i64,
    pub created_at: DateTime<Utc>,
}

/// A `sale_items` row joined with its product's name.
#[derive(Debug, FromRow)]
pub struct SaleItemEntity {
    pub id: Uuid,
    pub sale_id: Uuid,
    pub product_id: Uuid,
    pub product_name: Option<String>,
    pub quantity: i32,
    pub unit_price: i64,
    pub subtotal: i64,
}

impl SaleItemEntity {
    pub fn into_domain(self) -> SaleLineItem {
        SaleLineItem {
            id: self.id,
            sale_id: self.sale_id,
            product_id: self.product_id,
            product_name: self.product_name,
            quantity: self.quantity,
            unit_price: Money::new(self.unit_price),
            subtotal: Money::new(self.subtotal),
        }
    }
}

impl SaleEntity {
    pub fn into_domain(self, items: Vec<SaleLineItem>) -> Sale {
        Sale::from_repository(
            self.id,
            self.customer_name,
            self.status
                .parse::<SaleStatus>()
                .unwrap_or(SaleStatus::NotFulfilled),
            Money::new(self.total_amount),
            self.created_at,
            items,
        )
    }
}

/// Attaches line items to their sales, keeping the order of `sales` and the
/// order in which items were read.
pub fn assemble_sales(sales: Vec<SaleEntity>, items: Vec<SaleItemEntity>) -> Vec<Sale> {
    let mut by_sale: HashMap<Uuid, Vec<SaleLineItem>> = HashMap::new();
    for item in items {
        by_sale
            .entry(item.sale_id)
            .or_default()
            .push(item.into_domain());
    }

    sales
        .into_iter()
        .map(|sale| {
            let items = by_sale.remove(&sale.id).unwrap_or_default();
            sale.into_domain(items)
        })
        .collect()
}
