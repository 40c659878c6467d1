//! Checkout Pricing
//!
//! Cart discount engine: classifies promotion campaigns, picks the best coupon and
//! allocates every discount across the cart's items with a per-item audit log.

pub mod allocation;
pub mod cart;
pub mod config;
pub mod discounts;
pub mod fixtures;
pub mod items;
pub mod logging;
pub mod processor;
pub mod promotions;
pub mod receipt;
pub mod runner;
