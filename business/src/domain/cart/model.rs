use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CartError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::Money;

/// A product selection waiting to be submitted as a sale.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub product_id: Uuid,
    pub quantity: i32,
}

/// Transient shopping cart. Never persisted beyond the running process.
#[derive(Debug, Clone)]
pub struct Cart {
    pub id: Uuid,
    pub entries: Vec<CartEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One cart entry priced at the product's current price.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: Uuid,
    pub product_name: String,
    pub unit_price: Money,
    pub quantity: i32,
    pub subtotal: Money,
}

/// A cart priced against a product snapshot. `total` becomes the sale's
/// total amount on submission.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedCart {
    pub lines: Vec<CartLine>,
    pub total: Money,
}

/// A cart together with its current pricing. Entries whose product has
/// left the catalogue are not priced and are listed in `unavailable`.
#[derive(Debug, Clone)]
pub struct CartView {
    pub cart: Cart,
    pub priced: PricedCart,
    pub unavailable: Vec<Uuid>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            entries: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Builds a cart from a list of entries, merging repeated products.
    /// Quantities are not validated here; `check_stock` does that against a
    /// product snapshot. A merged quantity past `i32::MAX` cannot fit any
    /// stock and is rejected as `ExceedsStock`.
    pub fn from_entries(entries: Vec<CartEntry>) -> Result<Self, CartError> {
        let mut cart = Self::new();
        for entry in entries {
            match cart
                .entries
                .iter_mut()
                .find(|e| e.product_id == entry.product_id)
            {
                Some(existing) => {
                    existing.quantity = existing
                        .quantity
                        .checked_add(entry.quantity)
                        .ok_or(CartError::ExceedsStock)?;
                }
                None => cart.entries.push(entry),
            }
        }
        Ok(cart)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Quantity of `product_id` currently in the cart (0 when absent).
    pub fn quantity_of(&self, product_id: Uuid) -> i32 {
        self.entries
            .iter()
            .find(|e| e.product_id == product_id)
            .map_or(0, |e| e.quantity)
    }

    /// Adds `quantity` units of `product`, merging with an existing entry.
    ///
    /// The quantity must be positive and the merged quantity must fit the
    /// product's current stock. A rejected add leaves the cart unchanged.
    pub fn add(&mut self, product: &Product, quantity: i32) -> Result<(), CartError> {
        if quantity <= 0 {
            return Err(CartError::InvalidQuantity);
        }

        let merged = self
            .quantity_of(product.id)
            .checked_add(quantity)
            .ok_or(CartError::ExceedsStock)?;
        if !product.has_stock_for(merged) {
            return Err(CartError::ExceedsStock);
        }

        match self.entries.iter_mut().find(|e| e.product_id == product.id) {
            Some(entry) => entry.quantity = merged,
            None => self.entries.push(CartEntry {
                product_id: product.id,
                quantity,
            }),
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Removes the entry for `product_id` outright.
    pub fn remove(&mut self, product_id: Uuid) -> Result<(), CartError> {
        let before = self.entries.len();
        self.entries.retain(|e| e.product_id != product_id);
        if self.entries.len() == before {
            return Err(CartError::EntryNotFound);
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Takes the quantities of a submitted sale out of the cart. Entries
    /// added after the sale was taken are kept.
    pub fn discard_sold(&mut self, sold: &[CartEntry]) {
        for item in sold {
            if let Some(entry) = self
                .entries
                .iter_mut()
                .find(|e| e.product_id == item.product_id)
            {
                entry.quantity = entry.quantity.saturating_sub(item.quantity);
            }
        }
        self.entries.retain(|e| e.quantity > 0);
        self.updated_at = Utc::now();
    }

    /// Verifies every entry against the given snapshot: the product must
    /// still exist, the quantity must be positive and within current stock.
    pub fn check_stock(&self, products: &[Product]) -> Result<(), CartError> {
        let by_id = index(products);
        for entry in &self.entries {
            let product = by_id
                .get(&entry.product_id)
                .ok_or(CartError::ProductNotFound)?;
            if entry.quantity <= 0 {
                return Err(CartError::InvalidQuantity);
            }
            if !product.has_stock_for(entry.quantity) {
                return Err(CartError::ExceedsStock);
            }
        }
        Ok(())
    }

    /// Prices every entry at the product's current price.
    pub fn price(&self, products: &[Product]) -> Result<PricedCart, CartError> {
        let by_id = index(products);
        let lines = self
            .entries
            .iter()
            .map(|entry| {
                let product = by_id
                    .get(&entry.product_id)
                    .ok_or(CartError::ProductNotFound)?;
                Ok(CartLine {
                    product_id: product.id,
                    product_name: product.name.clone(),
                    unit_price: product.price,
                    quantity: entry.quantity,
                    subtotal: product.price.times(entry.quantity),
                })
            })
            .collect::<Result<Vec<_>, CartError>>()?;
        let total = lines.iter().map(|l| l.subtotal).sum();

        Ok(PricedCart { lines, total })
    }

    /// Prices the entries whose product is still in `products` and pairs
    /// the cart with that pricing. Never fails, so a cart holding a removed
    /// product can still be shown and edited.
    pub fn into_view(self, products: &[Product]) -> CartView {
        let by_id = index(products);
        let mut lines = Vec::with_capacity(self.entries.len());
        let mut unavailable = Vec::new();
        for entry in &self.entries {
            match by_id.get(&entry.product_id) {
                Some(product) => lines.push(CartLine {
                    product_id: product.id,
                    product_name: product.name.clone(),
                    unit_price: product.price,
                    quantity: entry.quantity,
                    subtotal: product.price.times(entry.quantity),
                }),
                None => unavailable.push(entry.product_id),
            }
        }
        let total = lines.iter().map(|l| l.subtotal).sum();

        CartView {
            cart: self,
            priced: PricedCart { lines, total },
            unavailable,
        }
    }
}

fn index(products: &[Product]) -> HashMap<Uuid, &Product> {
    products.iter().map(|p| (p.id, p)).collect()
}
