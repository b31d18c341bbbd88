//! # Rendering Module
//!
//! Styled terminal output from minijinja templates. A `style` filter maps the
//! semantic style names used in templates onto the console styles in
//! [`GROCIFY_THEME`]; when colors are off the filter passes text through.
//!
//! Column widths are computed here with `unicode-width`, so names with wide
//! characters still line up.

use super::styles::GROCIFY_THEME;
use super::templates::{LIST_TEMPLATE, MESSAGES_TEMPLATE};
use console::Term;
use grocify::api::{CmdMessage, MessageLevel};
use grocify::error::{GrocifyError, Result};
use grocify::model::{Item, Price, Totals};
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

const NAME_LABEL: &str = "Item";
const QUANTITY_LABEL: &str = "Qty";
const PRICE_LABEL: &str = "Price";
const TOTAL_LABEL: &str = "Total";
const EMPTY_MESSAGE: &str = "Your grocery list is empty.";

#[derive(Serialize)]
struct ItemLine {
    name: String,
    quantity: String,
    price: String,
}

#[derive(Serialize)]
struct ListData {
    empty: bool,
    empty_message: &'static str,
    header: String,
    rule: String,
    items: Vec<ItemLine>,
    total_label: String,
    total_quantity: String,
    total_price: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// Renders the list as an aligned table with a totals line.
pub fn render_list(items: &[Item], totals: Totals, currency: &str) -> Result<String> {
    render_list_internal(items, totals, currency, None)
}

fn render_list_internal(
    items: &[Item],
    totals: Totals,
    currency: &str,
    use_color: Option<bool>,
) -> Result<String> {
    let money = |price: Price| format!("{}{}", currency, price);

    let quantities: Vec<String> = items.iter().map(|i| i.quantity.to_string()).collect();
    let prices: Vec<String> = items.iter().map(|i| money(i.price)).collect();
    let total_quantity = totals.quantity.to_string();
    let total_price = money(totals.price);

    let name_width = column_width(
        items.iter().map(|i| i.name.as_str()),
        &[NAME_LABEL, TOTAL_LABEL],
    );
    let quantity_width = column_width(
        quantities.iter().map(String::as_str),
        &[QUANTITY_LABEL, total_quantity.as_str()],
    );
    let price_width = column_width(
        prices.iter().map(String::as_str),
        &[PRICE_LABEL, total_price.as_str()],
    );

    let lines = items
        .iter()
        .zip(quantities.iter().zip(prices.iter()))
        .map(|(item, (quantity, price))| ItemLine {
            name: pad_right(&item.name, name_width),
            quantity: pad_left(quantity, quantity_width),
            price: pad_left(price, price_width),
        })
        .collect();

    let data = ListData {
        empty: items.is_empty(),
        empty_message: EMPTY_MESSAGE,
        header: format!(
            "{}  {}  {}",
            pad_right(NAME_LABEL, name_width),
            pad_left(QUANTITY_LABEL, quantity_width),
            pad_left(PRICE_LABEL, price_width)
        ),
        rule: "─".repeat(name_width + quantity_width + price_width + 4),
        items: lines,
        total_label: pad_right(TOTAL_LABEL, name_width),
        total_quantity: pad_left(&total_quantity, quantity_width),
        total_price: pad_left(&total_price, price_width),
    };

    render_template(LIST_TEMPLATE, &data, use_color)
}

pub fn render_messages(messages: &[CmdMessage]) -> Result<String> {
    render_messages_internal(messages, None)
}

fn render_messages_internal(
    messages: &[CmdMessage],
    use_color: Option<bool>,
) -> Result<String> {
    let data = MessagesData {
        messages: messages
            .iter()
            .map(|m| MessageData {
                content: m.content.clone(),
                style: match m.level {
                    MessageLevel::Info => "info",
                    MessageLevel::Success => "success",
                    MessageLevel::Warning => "warning",
                    MessageLevel::Error => "error",
                },
            })
            .collect(),
    };
    render_template(MESSAGES_TEMPLATE, &data, use_color)
}

pub fn print_messages(messages: &[CmdMessage]) -> Result<()> {
    print!("{}", render_messages(messages)?);
    Ok(())
}

/// Reports a fatal error on stderr.
pub fn print_error(err: &GrocifyError) {
    let use_color = Term::stderr().features().colors_supported();
    let message = CmdMessage::error(format!("Error: {}", err));
    match render_messages_internal(std::slice::from_ref(&message), Some(use_color)) {
        Ok(output) => eprint!("{}", output),
        Err(_) => eprintln!("{}", message.content),
    }
}

fn render_template<T: Serialize>(
    template: &str,
    data: &T,
    use_color: Option<bool>,
) -> Result<String> {
    let use_color = use_color.unwrap_or_else(|| Term::stdout().features().colors_supported());
    let env = environment(use_color);
    env.render_str(template, data)
        .map_err(|e| GrocifyError::Render(e.to_string()))
}

fn environment(use_color: bool) -> Environment<'static> {
    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        match GROCIFY_THEME.get(name.as_str()) {
            Some(style) if use_color => style
                .clone()
                .force_styling(true)
                .apply_to(text)
                .to_string(),
            _ => text,
        }
    });
    env
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, labels: &[&'a str]) -> usize {
    values
        .chain(labels.iter().copied())
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: &str, quantity: u64) -> Item {
        Item::new(name, price.parse().unwrap(), quantity)
    }

    #[test]
    fn empty_list_renders_a_notice() {
        let output = render_list_internal(&[], Totals::default(), "$", Some(false)).unwrap();
        assert_eq!(output, "Your grocery list is empty.\n");
    }

    #[test]
    fn list_renders_aligned_rows_and_totals() {
        let items = vec![item("Milk", "4", 3), item("Eggs", "3.25", 12)];
        let output = render_list_internal(&items, Totals::of(&items), "$", Some(false))
            .unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Item   Qty  Price");
        assert_eq!(lines[2], "Milk     3     $4");
        assert_eq!(lines[3], "Eggs    12  $3.25");
        assert_eq!(lines[5], "Total   15  $7.25");
        let widths: Vec<usize> = lines.iter().map(|l| l.width()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn wide_characters_keep_columns_aligned() {
        let items = vec![item("豆腐", "2", 1), item("Rice", "10.5", 2)];
        let output = render_list_internal(&items, Totals::of(&items), "€", Some(false))
            .unwrap();
        let widths: Vec<usize> = output.lines().map(|l| l.width()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]), "{output}");
        assert!(output.contains("€12.5"));
    }

    #[test]
    fn colors_apply_only_when_enabled() {
        let items = vec![item("Milk", "4", 3)];
        let plain = render_list_internal(&items, Totals::of(&items), "$", Some(false))
            .unwrap();
        assert!(!plain.contains("\x1b["));
        let colored = render_list_internal(&items, Totals::of(&items), "$", Some(true))
            .unwrap();
        assert!(colored.contains("\x1b["));
    }

    #[test]
    fn messages_render_one_per_line() {
        let messages = vec![
            CmdMessage::success("Milk has been added to your grocery list!"),
            CmdMessage::info("Milk is now 3 for 4"),
        ];
        let output = render_messages_internal(&messages, Some(false)).unwrap();
        assert_eq!(
            output,
            "Milk has been added to your grocery list!\nMilk is now 3 for 4\n"
        );
    }

    #[test]
    fn broken_templates_are_errors() {
        let data = MessagesData { messages: vec![] };
        let result = render_template("{% for %}", &data, Some(false));
        assert!(matches!(result, Err(GrocifyError::Render(_))));
    }
}
