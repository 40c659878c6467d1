//! Cart

use thiserror::Error;

use crate::items::CartItem;

/// Errors related to cart construction or lookups.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// An item has a zero quantity (index).
    #[error("Item {0} has a quantity of zero")]
    InvalidQuantity(usize),

    /// An item's unit price is negative or not finite (index, unit price).
    #[error("Item {0} has an invalid unit price: {1}")]
    InvalidUnitPrice(usize, f64),

    /// An item was not found in the cart.
    #[error("Item {0} not found")]
    ItemNotFound(usize),
}

/// An ordered sequence of cart items priced as one unit.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create a new, empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new cart with the given items.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if an item has a zero quantity or an invalid unit price.
    pub fn with_items(items: impl Into<Vec<CartItem>>) -> Result<Self, CartError> {
        let items = items.into();

        items.iter().enumerate().try_for_each(|(i, item)| {
            if item.quantity() == 0 {
                return Err(CartError::InvalidQuantity(i));
            }

            let price = item.unit_price();

            if price.is_finite() && price >= 0.0 {
                Ok(())
            } else {
                Err(CartError::InvalidUnitPrice(i, price))
            }
        })?;

        Ok(Cart { items })
    }

    /// Sum of every item's base price.
    pub fn total_base_price(&self) -> f64 {
        self.items.iter().map(CartItem::base_price).sum()
    }

    /// Sum of every discount applied to every item.
    pub fn total_discount(&self) -> f64 {
        self.items.iter().map(CartItem::discount_total).sum()
    }

    /// Sum of every item's net price.
    pub fn total_net_price(&self) -> f64 {
        self.items.iter().map(CartItem::net_price).sum()
    }

    /// Get an item from the cart.
    ///
    /// # Errors
    ///
    /// Returns a `CartError::ItemNotFound` if the item is not found.
    pub fn get_item(&self, item: usize) -> Result<&CartItem, CartError> {
        self.items.get(item).ok_or(CartError::ItemNotFound(item))
    }

    /// Iterate over the items in the cart.
    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter()
    }

    /// Iterate mutably over the items in the cart, in cart order.
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut CartItem> {
        self.items.iter_mut()
    }

    /// Get the number of items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the cart, returning its items.
    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }
}
