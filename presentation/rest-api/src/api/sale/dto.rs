use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::sale::model::{Sale, SaleLineItem};
use business::domain::sale::value_objects::SaleStatus;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
pub enum SaleStatusDto {
    #[oai(rename = "not_fulfilled")]
    NotFulfilled,
    #[oai(rename = "fulfilled")]
    Fulfilled,
}

impl From<SaleStatus> for SaleStatusDto {
    fn from(status: SaleStatus) -> Self {
        match status {
            SaleStatus::NotFulfilled => SaleStatusDto::NotFulfilled,
            SaleStatus::Fulfilled => SaleStatusDto::Fulfilled,
        }
    }
}

impl From<SaleStatusDto> for SaleStatus {
    fn from(dto: SaleStatusDto) -> Self {
        match dto {
            SaleStatusDto::NotFulfilled => SaleStatus::NotFulfilled,
            SaleStatusDto::Fulfilled => SaleStatus::Fulfilled,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SaleEntryRequest {
    /// Product to sell
    pub product_id: String,
    /// Units to sell (must be positive and within stock)
    pub quantity: i32,
}

#[derive(Debug, Clone, Object)]
pub struct CreateSaleRequest {
    /// Customer name (cannot be blank)
    pub customer_name: String,
    /// Products and quantities; repeated products are merged
    pub items: Vec<SaleEntryRequest>,
}

#[derive(Debug, Clone, Object)]
pub struct SaleLineItemResponse {
    /// Line item unique identifier
    pub id: String,
    /// Sold product
    pub product_id: String,
    /// Name of the sold product, if it still exists
    #[oai(skip_serializing_if_is_none)]
    pub product_name: Option<String>,
    /// Units sold
    pub quantity: i32,
    /// Price per unit at the time of sale, in minor units
    pub unit_price: i64,
    /// unit_price * quantity, in minor units
    pub subtotal: i64,
}

impl From<SaleLineItem> for SaleLineItemResponse {
    fn from(item: SaleLineItem) -> Self {
        Self {
            id: item.id.to_string(),
            product_id: item.product_id.to_string(),
            product_name: item.product_name,
            quantity: item.quantity,
            unit_price: item.unit_price.minor_units(),
            subtotal: item.subtotal.minor_units(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SaleResponse {
    /// Sale unique identifier
    pub id: String,
    /// Customer name
    pub customer_name: String,
    /// Fulfillment status
    pub status: SaleStatusDto,
    /// Sale total in minor units, fixed at submission
    pub total_amount: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Line items in submission order
    pub items: Vec<SaleLineItemResponse>,
}

impl From<Sale> for SaleResponse {
    fn from(sale: Sale) -> Self {
        Self {
            id: sale.id.to_string(),
            customer_name: sale.customer_name,
            status: sale.status.into(),
            total_amount: sale.total_amount.minor_units(),
            created_at: sale.created_at,
            items: sale.items.into_iter().map(|i| i.into()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::value_objects::Money;
    use uuid::Uuid;

    #[test]
    fn should_flatten_sale_with_items() {
        let sale_id = Uuid::new_v4();
        let sale = Sale::from_repository(
            sale_id,
            "Ana Lopez".to_string(),
            SaleStatus::NotFulfilled,
            Money::new(20700),
            Utc::now(),
            vec![SaleLineItem {
                id: Uuid::new_v4(),
                sale_id,
                product_id: Uuid::new_v4(),
                product_name: Some("Product A".to_string()),
                quantity: 3,
                unit_price: Money::new(6900),
                subtotal: Money::new(20700),
            }],
        );

        let response = SaleResponse::from(sale);

        assert_eq!(response.id, sale_id.to_string());
        assert_eq!(response.status, SaleStatusDto::NotFulfilled);
        assert_eq!(response.total_amount, 20700);
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].subtotal, 20700);
        assert_eq!(response.items[0].product_name.as_deref(), Some("Product A"));
    }

    #[test]
    fn should_convert_status_both_ways() {
        assert_eq!(
            SaleStatus::from(SaleStatusDto::Fulfilled),
            SaleStatus::Fulfilled
        );
        assert_eq!(
            SaleStatusDto::from(SaleStatus::NotFulfilled),
            SaleStatusDto::NotFulfilled
        );
    }
}
