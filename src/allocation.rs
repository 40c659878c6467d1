//! Allocation
//!
//! Proportional distribution of a discount pool across the items of a cart.
//!
//! Both passes are single-pass: when an item's cap truncates its share, the
//! shortfall is not redistributed onto the remaining items.

use smallvec::SmallVec;

use crate::{
    cart::Cart,
    discounts::{DiscountRecord, clamp_discount},
};

/// Spread `pool` across the cart in proportion to each item's base price.
///
/// Each item's share is capped at its remaining undiscounted base price. A record
/// is appended to every item, even when the capped share is zero.
///
/// Returns the amount actually allocated.
pub fn distribute(cart: &mut Cart, source: &str, pool: f64, total_base_price: f64) -> f64 {
    if total_base_price <= 0.0 || pool <= 0.0 {
        return 0.0;
    }

    cart.iter_mut()
        .map(|item| {
            let share = (item.base_price() / total_base_price) * pool;
            let applied = clamp_discount(share, item.net_price());

            item.push_discount(DiscountRecord::new(source, applied));

            applied
        })
        .sum()
}

/// Spread `pool` across the cart in proportion to each item's current net price.
///
/// Net prices serve as both weight and cap, and are captured before any record is
/// appended. No records are appended when `pool` or the remaining subtotal is not
/// positive.
///
/// Returns the amount actually allocated.
pub fn distribute_by_net(cart: &mut Cart, source: &str, pool: f64) -> f64 {
    let net_prices: SmallVec<[f64; 16]> = cart.iter().map(|item| item.net_price()).collect();
    let subtotal_remaining: f64 = net_prices.iter().sum();

    if pool <= 0.0 || subtotal_remaining <= 0.0 {
        return 0.0;
    }

    cart.iter_mut()
        .zip(net_prices)
        .map(|(item, net_price)| {
            let share = (net_price / subtotal_remaining) * pool;
            let applied = clamp_discount(share, net_price);

            item.push_discount(DiscountRecord::new(source, applied));

            applied
        })
        .sum()
}
