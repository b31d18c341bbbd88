//! # Ledger Format
//!
//! The grocery list is persisted as a fixed-width text table that doubles as a
//! printable receipt:
//!
//! ```text
//! +----------------------------------------------------------------+  ┐
//! |                          GROCERY LIST                          |  │
//! +-----------------------------+----------------+-----------------+  │ header (5 lines)
//! | Item                        | Quantity       | Price           |  │
//! +=============================+================+=================+  ┘
//! | Milk                        | 3              | 4               |  ┐ data rows
//! | Eggs                        | 12             | 3.25            |  ┘
//! +----------------------------------------------------------------+  ┐
//! |                             | Total: 15      | Total: 7.25     |  │ footer (3 lines)
//! +----------------------------------------------------------------+  ┘
//! ```
//!
//! The header is opaque: whatever five lines an existing file starts with are
//! carried over on every rewrite, as are the footer's separator and closing
//! border. The totals row is always regenerated.
//!
//! ## Columns
//!
//! Data rows are read back by character offset (0-indexed, half-open):
//! name `[1, 30)`, quantity `[32, 47)`, price `[49, 65)`. These offsets are
//! the compatibility contract with existing files and must not move.
//!
//! The end of the data section is the first line holding exactly 64 `-`
//! characters. Header lines are never inspected, so a header border may
//! contain dashes freely.
//!
//! This module only transforms text. Where the text lives is the
//! [`crate::store`] layer's business.

use crate::error::{GrocifyError, Result};
use crate::model::{Item, Price, Totals};
use std::ops::Range;

pub const HEADER_LINES: usize = 5;
pub const FOOTER_LINES: usize = 3;
pub const SEPARATOR_DASHES: usize = 64;

pub const NAME_WIDTH: usize = 27;
pub const QUANTITY_WIDTH: usize = 14;
pub const PRICE_WIDTH: usize = 15;
pub const TOTAL_QUANTITY_WIDTH: usize = 7;
pub const TOTAL_PRICE_WIDTH: usize = 8;

/// Longest accepted item name. One more than [`NAME_WIDTH`]: such a row sits
/// one column to the right but still parses, since every slice has a spare
/// leading space.
pub const MAX_NAME_CHARS: usize = 28;

const NAME_COLUMN: Range<usize> = 1..30;
const QUANTITY_COLUMN: Range<usize> = 32..47;
const PRICE_COLUMN: Range<usize> = 49..65;

const TITLE: &str = "GROCERY LIST";
const TOTALS_GUTTER: usize = 29;

/// Parses the data rows of a ledger, in file order.
pub fn parse_items(text: &str) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    let mut last_line = 0;

    for (idx, line) in text.lines().enumerate() {
        last_line = idx + 1;
        if idx < HEADER_LINES {
            continue;
        }
        if is_separator(line) {
            return Ok(items);
        }
        items.push(parse_row(line, idx + 1)?);
    }

    Err(GrocifyError::parse(
        last_line,
        format!(
            "reached end of file without the {}-dash footer separator",
            SEPARATOR_DASHES
        ),
    ))
}

/// Parses one data row. `line_no` is 1-based and only used for errors.
pub fn parse_row(line: &str, line_no: usize) -> Result<Item> {
    let chars: Vec<char> = line.chars().collect();
    let name = column(&chars, NAME_COLUMN);
    let quantity_text = column(&chars, QUANTITY_COLUMN);
    let price_text = column(&chars, PRICE_COLUMN);

    let quantity: u64 = quantity_text.parse().map_err(|_| {
        GrocifyError::parse(
            line_no,
            format!("quantity is not a whole number: {:?}", quantity_text),
        )
    })?;
    let price: Price = price_text.parse().map_err(|_| {
        GrocifyError::parse(line_no, format!("price is not a number: {:?}", price_text))
    })?;

    Ok(Item::new(name, price, quantity))
}

/// True for the footer's top border, which ends the data section.
pub fn is_separator(line: &str) -> bool {
    line.chars().filter(|&c| c == '-').count() == SEPARATOR_DASHES
}

/// Re-renders a ledger: the header and footer borders of `existing` framing
/// fresh data rows and a fresh totals row.
pub fn render(existing: &str, items: &[Item], totals: Totals) -> Result<String> {
    let lines: Vec<&str> = existing.lines().collect();
    if lines.len() < HEADER_LINES + FOOTER_LINES {
        return Err(GrocifyError::parse(
            lines.len(),
            format!(
                "expected at least {} header and footer lines, found {}",
                HEADER_LINES + FOOTER_LINES,
                lines.len()
            ),
        ));
    }

    let separator = lines[lines.len() - 3];
    let border = lines[lines.len() - 1];

    let mut out = String::new();
    for line in &lines[..HEADER_LINES] {
        push_line(&mut out, line);
    }
    for item in items {
        push_line(&mut out, &format_item_row(item));
    }
    push_line(&mut out, separator);
    push_line(&mut out, &format_totals_row(totals));
    push_line(&mut out, border);
    Ok(out)
}

/// The ledger of an empty list.
pub fn blank() -> String {
    let border = format!("+{}+", "-".repeat(SEPARATOR_DASHES));
    let rule = |fill: &str| {
        format!(
            "+{}+{}+{}+",
            fill.repeat(NAME_WIDTH + 2),
            fill.repeat(QUANTITY_WIDTH + 2),
            fill.repeat(PRICE_WIDTH + 2)
        )
    };

    let mut out = String::new();
    push_line(&mut out, &border);
    push_line(&mut out, &format!("|{:^width$}|", TITLE, width = SEPARATOR_DASHES));
    push_line(&mut out, &rule("-"));
    push_line(&mut out, &format_row("Item", "Quantity", "Price"));
    push_line(&mut out, &rule("="));
    push_line(&mut out, &border);
    push_line(&mut out, &format_totals_row(Totals::default()));
    push_line(&mut out, &border);
    out
}

pub fn format_item_row(item: &Item) -> String {
    format_row(
        &item.name,
        &item.quantity.to_string(),
        &item.price.to_string(),
    )
}

pub fn format_row(name: &str, quantity: &str, price: &str) -> String {
    format!(
        "| {} | {} | {} |",
        pad(name, NAME_WIDTH),
        pad(quantity, QUANTITY_WIDTH),
        pad(price, PRICE_WIDTH)
    )
}

pub fn format_totals_row(totals: Totals) -> String {
    let quantity = totals.quantity.to_string();
    let price = totals.price.to_string();
    if quantity.len() > TOTAL_QUANTITY_WIDTH || price.len() > TOTAL_PRICE_WIDTH {
        tracing::warn!(%quantity, %price, "totals overflow their columns; receipt will be misaligned");
    }
    format!(
        "|{}| Total: {} | Total: {} |",
        " ".repeat(TOTALS_GUTTER),
        pad(&quantity, TOTAL_QUANTITY_WIDTH),
        pad(&price, TOTAL_PRICE_WIDTH)
    )
}

/// Checks an item before it is accepted into a list.
pub fn validate_item(item: &Item) -> Result<()> {
    if item.name.trim().is_empty() {
        return Err(GrocifyError::Invalid("item name is required".into()));
    }
    // The loader trims columns, so padded names would not survive a reload.
    if item.name.trim() != item.name {
        return Err(GrocifyError::Invalid(format!(
            "item name may not start or end with whitespace: {:?}",
            item.name
        )));
    }
    let name_chars = item.name.chars().count();
    if name_chars > MAX_NAME_CHARS {
        return Err(GrocifyError::Invalid(format!(
            "item name is {} characters long; the limit is {}",
            name_chars, MAX_NAME_CHARS
        )));
    }
    if item.name.contains(|c: char| c == '|' || c.is_control()) {
        return Err(GrocifyError::Invalid(format!(
            "item name may not contain '|' or control characters: {:?}",
            item.name
        )));
    }
    if item.quantity == 0 {
        return Err(GrocifyError::Invalid("quantity must be at least 1".into()));
    }
    check_fits(item)
}

/// Rejects numbers too wide for their column, which would shift the row off
/// the fixed offsets the loader depends on.
pub fn check_fits(item: &Item) -> Result<()> {
    let quantity = item.quantity.to_string();
    if quantity.len() > QUANTITY_WIDTH {
        return Err(GrocifyError::Invalid(format!(
            "quantity {} for {} does not fit the {}-character column",
            quantity, item.name, QUANTITY_WIDTH
        )));
    }
    let price = item.price.to_string();
    if price.len() > PRICE_WIDTH {
        return Err(GrocifyError::Invalid(format!(
            "price {} for {} does not fit the {}-character column",
            price, item.name, PRICE_WIDTH
        )));
    }
    Ok(())
}

fn column(chars: &[char], range: Range<usize>) -> String {
    let end = range.end.min(chars.len());
    let start = range.start.min(end);
    chars[start..end]
        .iter()
        .collect::<String>()
        .trim_matches(' ')
        .to_string()
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{}{}", value, " ".repeat(width.saturating_sub(len)))
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
