//! End-to-end test for the full inventory lifecycle.
//!
//! Runs the demo scenario: load → mutate (including invalid and recovered
//! operations) → query → persist → reload, and verifies the observable state
//! at each step.

#[cfg(test)]
mod tests {
    use crate::journal::Journal;
    use crate::report;
    use crate::stock::RemoveOutcome;
    use crate::store;

    #[test]
    fn demo_scenario_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        // First run starts from a missing file.
        let mut stock = store::load(&path);
        assert!(stock.is_empty());

        let mut journal = Journal::new();

        // Adds: two valid, two invalid (caught by the caller).
        stock.add("apple", 10, Some(&mut journal)).unwrap();
        stock.add("banana", 20, Some(&mut journal)).unwrap();
        assert!(stock.add("banana", -2, Some(&mut journal)).is_err());
        assert!(stock.add("", 10, Some(&mut journal)).is_err());

        // Removes: partial, missing item, over-removal.
        assert_eq!(
            stock.remove("apple", 3),
            RemoveOutcome::Decremented { remaining: 7 }
        );
        assert_eq!(stock.remove("orange", 1), RemoveOutcome::NotInStock);
        assert_eq!(stock.remove("banana", 25), RemoveOutcome::RemovedAll);

        // Queries.
        assert_eq!(stock.quantity("apple"), 7);
        assert_eq!(stock.quantity("banana"), 0);
        assert_eq!(stock.quantity("orange"), 0);
        assert_eq!(stock.low_items(15), vec!["apple"]);

        // Final state: apple only, and only the valid adds journaled.
        assert_eq!(stock.len(), 1);
        assert_eq!(journal.len(), 2);
        assert_eq!(
            report::render(&stock),
            "\n--- Items Report ---\napple -> 7\n--------------------\n\n"
        );

        // Persist and reload.
        store::save(&stock, &path);
        let reloaded = store::load(&path);
        assert_eq!(reloaded, stock);
    }
}
