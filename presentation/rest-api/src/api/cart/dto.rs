use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::model::{CartLine, CartView};

#[derive(Debug, Clone, Object)]
pub struct CartEntryRequest {
    /// Product to add
    pub product_id: String,
    /// Units to add on top of what the cart already holds
    pub quantity: i32,
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutRequest {
    /// Customer name (cannot be blank)
    pub customer_name: String,
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    pub product_id: String,
    pub product_name: String,
    /// Current unit price in minor units
    pub unit_price: i64,
    pub quantity: i32,
    /// unit_price * quantity, in minor units
    pub subtotal: i64,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            product_id: line.product_id.to_string(),
            product_name: line.product_name,
            unit_price: line.unit_price.minor_units(),
            quantity: line.quantity,
            subtotal: line.subtotal.minor_units(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Cart unique identifier
    pub id: String,
    /// Entries priced at current product prices
    pub lines: Vec<CartLineResponse>,
    /// Sum of all subtotals in minor units
    pub total: i64,
    /// Products still in the cart but no longer for sale; remove them
    /// before checking out
    pub unavailable_product_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CartView> for CartResponse {
    fn from(view: CartView) -> Self {
        Self {
            id: view.cart.id.to_string(),
            lines: view.priced.lines.into_iter().map(|l| l.into()).collect(),
            total: view.priced.total.minor_units(),
            unavailable_product_ids: view.unavailable.iter().map(|id| id.to_string()).collect(),
            created_at: view.cart.created_at,
            updated_at: view.cart.updated_at,
        }
    }
}
