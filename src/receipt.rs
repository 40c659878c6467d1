//! Receipt

use std::{fmt, io};

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    discounts::{DiscountRecord, prices_match},
    items::CartItem,
    processor::PricedCart,
};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error
    #[error("failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

/// Outcome of comparing a receipt total with an expected price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The total matches the expected price within tolerance.
    Correct,

    /// The total differs from the expected price.
    Incorrect,

    /// No expected price was supplied.
    Unchecked,

    /// The campaigns were rejected, but the case expected a price.
    Rejected,
}

impl Verdict {
    /// Whether this verdict counts as a pass.
    pub fn is_pass(self) -> bool {
        matches!(self, Verdict::Correct | Verdict::Unchecked)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct => f.write_str("Correct"),
            Verdict::Incorrect => f.write_str("Incorrect"),
            Verdict::Unchecked => f.write_str("Unchecked"),
            Verdict::Rejected => f.write_str("Rejected"),
        }
    }
}

/// One priced cart item.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine {
    /// Item name
    pub name: String,

    /// Item category
    pub category: String,

    /// Unit price multiplied by quantity
    pub base_price: f64,

    /// Discounts in application order
    pub discounts: SmallVec<[DiscountRecord; 3]>,

    /// Price after every discount
    pub net_price: f64,
}

impl From<&CartItem> for ReceiptLine {
    fn from(item: &CartItem) -> Self {
        Self {
            name: item.name().to_string(),
            category: item.category().to_string(),
            base_price: item.base_price(),
            discounts: item.discount_records().iter().cloned().collect(),
            net_price: item.net_price(),
        }
    }
}

/// Itemized breakdown of a priced cart.
#[derive(Debug, Clone)]
pub struct Receipt {
    lines: Vec<ReceiptLine>,
    subtotal: f64,
    total: f64,
}

impl Receipt {
    /// Build a receipt from a priced cart.
    pub fn from_priced_cart(priced: &PricedCart) -> Self {
        Self {
            lines: priced.cart().iter().map(ReceiptLine::from).collect(),
            subtotal: priced.total_base_price(),
            total: priced.final_price(),
        }
    }

    /// Per-item lines, in cart order.
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Total cost before any discount
    pub fn subtotal(&self) -> f64 {
        self.subtotal
    }

    /// Total amount paid
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Amount saved across the cart.
    pub fn savings(&self) -> f64 {
        self.subtotal - self.total
    }

    /// Savings as percent points of the subtotal; zero for an empty subtotal.
    pub fn savings_percent(&self) -> f64 {
        if self.subtotal <= 0.0 {
            return 0.0;
        }

        self.savings() / self.subtotal * 100.0
    }

    /// Total discount per campaign, keyed by record source.
    pub fn savings_by_source(&self) -> FxHashMap<&str, f64> {
        let mut totals = FxHashMap::default();

        for record in self.lines.iter().flat_map(|line| line.discounts.iter()) {
            *totals.entry(record.source()).or_insert(0.0) += record.amount();
        }

        totals
    }

    /// Compare the total with an expected price.
    pub fn verdict(&self, expected: Option<f64>) -> Verdict {
        match expected {
            Some(expected) if prices_match(self.total, expected) => Verdict::Correct,
            Some(_) => Verdict::Incorrect,
            None => Verdict::Unchecked,
        }
    }

    /// Writes the receipt table and summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record([
            "",
            "Item",
            "Category",
            "Base Price",
            "Discount",
            "Net Price",
            "Campaign",
        ]);

        let mut item_boundary_rows: SmallVec<[usize; 16]> = SmallVec::new();
        let mut current_row = 1;

        for (idx, line) in self.lines.iter().enumerate() {
            item_boundary_rows.push(current_row);
            current_row += append_line_rows(&mut builder, idx, line);
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());
        let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(1, separator);

        for &row in &item_boundary_rows {
            if row > 1 {
                theme.insert_horizontal_line(row, separator);
            }
        }

        table.with(theme);
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(3..6), Alignment::right());

        writeln!(out, "\n{table}")?;

        self.write_summary(&mut out)?;

        Ok(())
    }

    fn write_summary(&self, out: &mut impl io::Write) -> Result<(), ReceiptError> {
        let rows = [
            ("Subtotal:", format!("{:.2}", self.subtotal)),
            ("Total:", format!("{:.2}", self.total)),
            (
                "Savings:",
                format!("({:.2}%) {:.2}", self.savings_percent(), self.savings()),
            ),
        ];

        let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        let value_width = rows.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

        for (label, value) in &rows {
            writeln!(out, " {label:>label_width$}  {value:>value_width$}")?;
        }

        let mut by_source: Vec<(&str, f64)> = self.savings_by_source().into_iter().collect();

        by_source.sort_by(|a, b| a.0.cmp(b.0));

        if !by_source.is_empty() {
            writeln!(out)?;
        }

        for (source, amount) in by_source {
            writeln!(out, " {source}: -{amount:.2}")?;
        }

        writeln!(out)?;

        Ok(())
    }
}

/// Push the rows for one item and return how many were written.
///
/// Undiscounted items take a single row; discounted items get a header row
/// followed by one row per discount, with the net price on the last.
fn append_line_rows(builder: &mut Builder, idx: usize, line: &ReceiptLine) -> usize {
    let position = format!("#{:<3}", idx + 1);

    if line.discounts.is_empty() {
        builder.push_record([
            position,
            line.name.clone(),
            line.category.clone(),
            format!("{:.2}", line.base_price),
            String::new(),
            format!("{:.2}", line.net_price),
            String::new(),
        ]);

        return 1;
    }

    builder.push_record([
        position,
        line.name.clone(),
        line.category.clone(),
        format!("{:.2}", line.base_price),
        String::new(),
        String::new(),
        String::new(),
    ]);

    let last_idx = line.discounts.len() - 1;

    for (record_idx, record) in line.discounts.iter().enumerate() {
        let net_price = if record_idx == last_idx {
            format!("{:.2}", line.net_price)
        } else {
            String::new()
        };

        builder.push_record([
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            format!("-{:.2}", record.amount()),
            net_price,
            record.source().to_string(),
        ]);
    }

    line.discounts.len() + 1
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        cart::Cart,
        processor::DiscountProcessor,
        promotions::definitions::CampaignDefinition,
    };

    use super::*;

    fn priced_cart() -> TestResult<PricedCart> {
        let cart = Cart::with_items([
            CartItem::new("T-Shirt", 350.0, 1, "Clothing"),
            CartItem::new("Hat", 250.0, 1, "Accessories"),
            CartItem::new("Belt", 230.0, 1, "Accessories"),
        ])?;

        let priced = DiscountProcessor::new().calculate_final_price(
            cart,
            &[
                CampaignDefinition::FixedAmount {
                    code: "F1".to_string(),
                    amount: 83.0,
                },
                CampaignDefinition::PercentageCategoryOnTop {
                    code: "C1".to_string(),
                    item_category: "Clothing".to_string(),
                    percentage: 10.0,
                },
            ],
        )?;

        Ok(priced)
    }

    #[test]
    fn totals_come_from_priced_cart() -> TestResult {
        let receipt = Receipt::from_priced_cart(&priced_cart()?);

        // 830 - 83 - 31.5
        assert!((receipt.subtotal() - 830.0).abs() < 1e-9);
        assert!((receipt.total() - 715.5).abs() < 1e-9);
        assert!((receipt.savings() - 114.5).abs() < 1e-9);
        assert_eq!(receipt.lines().len(), 3);

        Ok(())
    }

    #[test]
    fn savings_percent_is_zero_for_empty_subtotal() -> TestResult {
        let priced = DiscountProcessor::new().calculate_final_price(Cart::new(), &[])?;
        let receipt = Receipt::from_priced_cart(&priced);

        assert!(receipt.savings_percent().abs() < f64::EPSILON);

        Ok(())
    }

    #[test]
    fn savings_by_source_sums_each_campaign() -> TestResult {
        let receipt = Receipt::from_priced_cart(&priced_cart()?);
        let totals = receipt.savings_by_source();

        let fixed = totals.get("FixedCoupon(83 Baht)").copied().unwrap_or_default();
        let category = totals
            .get("CategoryOnTop(Clothing,10%)")
            .copied()
            .unwrap_or_default();

        assert!((fixed - 83.0).abs() < 1e-9);
        assert!((category - 31.5).abs() < 1e-9);

        Ok(())
    }

    #[test]
    fn verdict_uses_price_tolerance() -> TestResult {
        let receipt = Receipt::from_priced_cart(&priced_cart()?);

        assert_eq!(receipt.verdict(Some(715.505)), Verdict::Correct);
        assert_eq!(receipt.verdict(Some(716.0)), Verdict::Incorrect);
        assert_eq!(receipt.verdict(None), Verdict::Unchecked);
        assert!(Verdict::Unchecked.is_pass());
        assert!(!Verdict::Incorrect.is_pass());
        assert!(!Verdict::Rejected.is_pass());

        Ok(())
    }

    #[test]
    fn write_to_lists_items_campaigns_and_summary() -> TestResult {
        let receipt = Receipt::from_priced_cart(&priced_cart()?);
        let mut out = Vec::new();

        receipt.write_to(&mut out)?;

        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("T-Shirt"), "missing item name");
        assert!(rendered.contains("CategoryOnTop(Clothing,10%)"), "missing campaign");
        assert!(rendered.contains("715.50"), "missing total");
        assert!(rendered.contains("830.00"), "missing subtotal");
        assert!(
            rendered.contains("FixedCoupon(83 Baht): -83.00"),
            "missing coupon savings"
        );
        assert!(
            rendered.contains("CategoryOnTop(Clothing,10%): -31.50"),
            "missing category savings"
        );

        Ok(())
    }
}
