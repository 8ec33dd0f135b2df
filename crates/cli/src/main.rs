//! Demo driver: load the stock file, apply a fixed sequence of mutations and
//! queries, print reports, and save.
//!
//! Every operation's failure is caught and logged; nothing here terminates
//! the process early.

use stockroom_inventory::{DEFAULT_STOCK_FILE, Journal, report, store};

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let mut stock = store::load(DEFAULT_STOCK_FILE);
    println!("Initial data loaded:");
    report::print(&stock);

    let mut journal = Journal::new();

    // Two valid adds, then two invalid ones: a negative quantity and an
    // empty item name. Validation errors are caught and logged.
    for (item, qty) in [("apple", 10), ("banana", 20), ("banana", -2), ("", 10)] {
        if let Err(err) = stock.add(item, qty, Some(&mut journal)) {
            tracing::error!("Failed to add item: {err}");
        }
    }

    // A partial removal, a missing item, and an over-removal. All recovered;
    // each outcome is logged by the stock itself.
    stock.remove("apple", 3);
    stock.remove("orange", 1);
    stock.remove("banana", 25);

    println!("Apple stock: {}", stock.quantity("apple"));
    println!("Banana stock: {}", stock.quantity("banana"));
    println!("Orange stock: {}", stock.quantity("orange"));

    println!("Low items (below 15): {:?}", stock.low_items(15));

    println!("Final data:");
    report::print(&stock);

    store::save(&stock, DEFAULT_STOCK_FILE);
    println!("Data saved.");
    tracing::info!("Demo finished.");

    Ok(())
}
