use thiserror::Error;

use crate::models::{CartItem, Product};

/// A list of product lines keyed by product id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Cart has invalid quantity for product {product_id}")]
    ZeroQuantity { product_id: i64 },

    #[error("Cart total is too large")]
    TotalOverflow,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from submitted lines, merging repeated product ids into
    /// the first occurrence. The resulting total must fit in a `u64`.
    pub fn from_items(items: impl IntoIterator<Item = CartItem>) -> Result<Self, CartError> {
        let mut cart = Self::new();
        for item in items {
            if item.quantity == 0 {
                return Err(CartError::ZeroQuantity {
                    product_id: item.product.id,
                });
            }
            cart.add_quantity(item.product, item.quantity);
        }
        if cart.total().is_none() {
            return Err(CartError::TotalOverflow);
        }
        Ok(cart)
    }

    pub fn add(&mut self, product: Product) {
        self.add_quantity(product, 1);
    }

    fn add_quantity(&mut self, product: Product, quantity: u32) {
        match self.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(quantity),
            None => self.items.push(CartItem { product, quantity }),
        }
    }

    pub fn remove(&mut self, product_id: i64) -> Option<CartItem> {
        let idx = self.items.iter().position(|i| i.product.id == product_id)?;
        Some(self.items.remove(idx))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of line totals, or `None` if it does not fit in a `u64`.
    pub fn total(&self) -> Option<u64> {
        self.items
            .iter()
            .try_fold(0u64, |sum, item| sum.checked_add(item.line_total()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::tests::product, models::Category};

    fn line(id: i64, price: u64, quantity: u32) -> CartItem {
        CartItem {
            product: product(id, "part", Category::Ram, price),
            quantity,
        }
    }

    #[test]
    fn repeat_add_increments_quantity() {
        let mut cart = Cart::new();
        cart.add(product(1, "ram", Category::Ram, 4000));
        cart.add(product(2, "ssd", Category::Storage, 6000));
        cart.add(product(1, "ram", Category::Ram, 4000));

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), Some(14000));
    }

    #[test]
    fn remove_and_clear() {
        let mut cart = Cart::new();
        cart.add(product(1, "ram", Category::Ram, 4000));
        cart.add(product(2, "ssd", Category::Storage, 6000));

        let removed = cart.remove(1).expect("line for product 1");
        assert_eq!(removed.product.id, 1);
        assert!(cart.remove(1).is_none());
        assert_eq!(cart.total(), Some(6000));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Some(0));
    }

    #[test]
    fn from_items_merges_duplicates() {
        let cart = Cart::from_items(vec![line(1, 100, 2), line(2, 50, 1), line(1, 100, 3)]).unwrap();
        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items()[0].quantity, 5);
        assert_eq!(cart.total(), Some(550));
    }

    #[test]
    fn from_items_rejects_zero_quantity() {
        let err = Cart::from_items(vec![line(1, 100, 1), line(9, 10, 0)]).unwrap_err();
        assert_eq!(err, CartError::ZeroQuantity { product_id: 9 });
    }

    #[test]
    fn from_items_rejects_overflowing_total() {
        let err = Cart::from_items(vec![line(1, 9_223_372_036_854_775_808, 2)]).unwrap_err();
        assert_eq!(err, CartError::TotalOverflow);

        let err = Cart::from_items(vec![line(1, u64::MAX, 1), line(2, 1, 1)]).unwrap_err();
        assert_eq!(err, CartError::TotalOverflow);
    }

    #[test]
    fn add_past_overflow_reports_no_total() {
        let mut cart = Cart::from_items(vec![line(1, u64::MAX / 2, 2)]).unwrap();
        assert_eq!(cart.total(), Some(u64::MAX - 1));

        cart.add(product(1, "part", Category::Ram, u64::MAX / 2));
        assert_eq!(cart.total(), None);
    }
}
