use crate::error::{GrocifyError, Result};
use std::fmt;
use std::str::FromStr;

/// A non-negative amount of money, held as whole cents.
///
/// Submitted prices are rounded to two decimal places when parsed, so merges
/// add exact values and never drift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    pub fn from_cents(cents: u64) -> Self {
        Price(cents)
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    pub fn checked_add(self, other: Price) -> Option<Price> {
        self.0.checked_add(other.0).map(Price)
    }

    pub fn saturating_add(self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }
}

/// Renders the normalized form: `3.00` is `3`, `3.50` is `3.5`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        let text = if frac == 0 {
            whole.to_string()
        } else if frac % 10 == 0 {
            format!("{}.{}", whole, frac / 10)
        } else {
            format!("{}.{:02}", whole, frac)
        };
        f.pad(&text)
    }
}

impl FromStr for Price {
    type Err = GrocifyError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GrocifyError::Invalid("price is empty".into()));
        }
        if s.starts_with('-') {
            return Err(GrocifyError::Invalid(format!(
                "price must not be negative: {}",
                s
            )));
        }

        let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(GrocifyError::Invalid(format!("not a price: {}", s)));
        }

        let too_large = || GrocifyError::Invalid(format!("price is too large: {}", s));
        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| too_large())?
        };

        // Round half-up to cents.
        let mut digits = frac.bytes().map(|b| u64::from(b - b'0'));
        let tenths = digits.next().unwrap_or(0);
        let hundredths = digits.next().unwrap_or(0);
        let round_up = digits.next().is_some_and(|d| d >= 5);

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths))
            .and_then(|c| c.checked_add(u64::from(round_up)))
            .map(Price)
            .ok_or_else(too_large)
    }
}

/// One grocery entry. The name is the uniqueness key (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub price: Price,
    pub quantity: u64,
}

impl Item {
    pub fn new(name: impl Into<String>, price: Price, quantity: u64) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }
}

/// Aggregates over a list, always derived from the items themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub price: Price,
    pub quantity: u64,
}

impl Totals {
    /// Sums every item. If a sum overflows it is capped at the largest value
    /// and a warning is logged; [`GroceryList::add`](crate::list::GroceryList::add)
    /// refuses items that would get there.
    pub fn of(items: &[Item]) -> Self {
        Self::checked_of(items).unwrap_or_else(|| {
            tracing::warn!(count = items.len(), "list totals overflow; capping");
            items.iter().fold(Self::default(), |acc, item| Totals {
                price: acc.price.saturating_add(item.price),
                quantity: acc.quantity.saturating_add(item.quantity),
            })
        })
    }

    /// Sums every item, or `None` if either sum overflows.
    pub fn checked_of(items: &[Item]) -> Option<Self> {
        items.iter().try_fold(Self::default(), |acc, item| {
            Some(Totals {
                price: acc.price.checked_add(item.price)?,
                quantity: acc.quantity.checked_add(item.quantity)?,
            })
        })
    }
}
