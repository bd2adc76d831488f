use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Current unit price in minor currency units
    pub price: i64,
    /// Current unit cost in minor currency units
    pub cost: i64,
    /// Units currently in stock
    pub stock: i32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            price: product.price.minor_units(),
            cost: product.cost.minor_units(),
            stock: product.stock,
            created_at: product.created_at,
        }
    }
}
