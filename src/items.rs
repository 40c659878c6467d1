//! Items

use smallvec::SmallVec;

use crate::discounts::DiscountRecord;

/// Discount log for a single item. At most three campaigns touch an item per run.
pub type DiscountLog = SmallVec<[DiscountRecord; 3]>;

/// A cart line item with its append-only discount log.
#[derive(Clone, Debug, PartialEq)]
pub struct CartItem {
    name: String,
    unit_price: f64,
    quantity: u32,
    category: String,
    discount_records: DiscountLog,
}

impl CartItem {
    /// Creates a new item with an empty discount log.
    pub fn new(
        name: impl Into<String>,
        unit_price: f64,
        quantity: u32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
            category: category.into(),
            discount_records: SmallVec::new(),
        }
    }

    /// Returns the item name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price
    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// Returns the quantity
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the item category
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Discounts applied to this item, in application order.
    pub fn discount_records(&self) -> &[DiscountRecord] {
        &self.discount_records
    }

    /// Unit price multiplied by quantity.
    pub fn base_price(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    /// Sum of every discount applied so far.
    pub fn discount_total(&self) -> f64 {
        self.discount_records.iter().map(DiscountRecord::amount).sum()
    }

    /// Base price less all discounts applied so far.
    pub fn net_price(&self) -> f64 {
        self.base_price() - self.discount_total()
    }

    /// Append a discount to the log.
    pub(crate) fn push_discount(&mut self, record: DiscountRecord) {
        self.discount_records.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_price_multiplies_unit_price_by_quantity() {
        let item = CartItem::new("Socks", 50.0, 4, "Clothing");

        assert!((item.base_price() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn new_item_has_no_discounts() {
        let item = CartItem::new("Hat", 250.0, 1, "Accessories");

        assert!(item.discount_records().is_empty());
        assert!(item.discount_total().abs() < f64::EPSILON);
        assert!((item.net_price() - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn net_price_subtracts_every_discount() {
        let mut item = CartItem::new("T-Shirt", 350.0, 1, "Clothing");

        item.push_discount(DiscountRecord::new("first", 50.0));
        item.push_discount(DiscountRecord::new("second", 30.0));

        assert!((item.discount_total() - 80.0).abs() < f64::EPSILON);
        assert!((item.net_price() - 270.0).abs() < f64::EPSILON);

        let sources: Vec<&str> = item
            .discount_records()
            .iter()
            .map(DiscountRecord::source)
            .collect();

        assert_eq!(sources, vec!["first", "second"]);
    }

    #[test]
    fn accessors_return_constructor_values() {
        let item = CartItem::new("Belt", 230.0, 2, "Accessories");

        assert_eq!(item.name(), "Belt");
        assert_eq!(item.quantity(), 2);
        assert_eq!(item.category(), "Accessories");
        assert!((item.unit_price() - 230.0).abs() < f64::EPSILON);
    }
}
