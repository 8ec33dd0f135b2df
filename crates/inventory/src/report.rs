//! Formatted stock report.

use crate::stock::Stock;

/// Render the items report.
///
/// The exact text is part of the external interface (golden output), so it
/// is rendered to a string here and printed separately.
pub fn render(stock: &Stock) -> String {
    let mut out = String::from("\n--- Items Report ---\n");
    if stock.is_empty() {
        out.push_str("Inventory is empty.\n");
    } else {
        for (item, qty) in stock.iter() {
            out.push_str(&format!("{item} -> {qty}\n"));
        }
    }
    out.push_str("--------------------\n\n");
    out
}

/// Write the items report to stdout.
pub fn print(stock: &Stock) {
    print!("{}", render(stock));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stock_renders_empty_notice() {
        let stock = Stock::new();
        assert_eq!(
            render(&stock),
            "\n--- Items Report ---\nInventory is empty.\n--------------------\n\n"
        );
    }

    #[test]
    fn entries_render_one_line_each_in_insertion_order() {
        let mut stock = Stock::new();
        stock.add("apple", 7, None).unwrap();
        stock.add("banana", 20, None).unwrap();

        assert_eq!(
            render(&stock),
            "\n--- Items Report ---\napple -> 7\nbanana -> 20\n--------------------\n\n"
        );
    }
}
