use std::io::Cursor;

use stockroom_console::Session;
use stockroom_infra::{InMemoryInventoryStore, InventoryStore};
use stockroom_inventory::Inventory;
use stockroom_parties::Person;

/// Run a scripted session against `store`; returns the transcript and final inventory.
fn run_script(store: &InMemoryInventoryStore, script: &str) -> (String, Inventory) {
    let mut output = Vec::new();
    let session = Session::start(store, Cursor::new(script.as_bytes()), &mut output).unwrap();
    let inventory = session.run().unwrap();
    (String::from_utf8(output).unwrap(), inventory)
}

#[test]
fn fresh_start_reports_empty_restore() {
    let store = InMemoryInventoryStore::new();
    let (transcript, inventory) = run_script(&store, "q\n");

    assert!(transcript.contains("No saved inventory restored; starting empty."));
    assert!(transcript.contains("Help Menu"));
    assert!(transcript.ends_with("Saving inventory ... Done!\n"));
    assert_eq!(inventory, Inventory::new());
}

#[test]
fn add_then_order_raises_stock_and_persists() {
    let store = InMemoryInventoryStore::new();
    let (transcript, inventory) = run_script(&store, "A Matrix\n3\nO\nI Matrix\nQ\n");

    assert!(transcript.contains("-- A new title (Matrix) with the initial want value of 3 is added!"));
    assert!(transcript.contains("Purchase Order\n==============\n[1] 3 unit(s) of \"Matrix\" ordered."));
    assert!(transcript.contains("[1] 3 currently in stock"));
    assert_eq!(inventory.find_stock_item("Matrix").map(|item| item.have()), Some(3));

    let restored = store.restore().expect("session should have saved");
    assert_eq!(restored, inventory);
}

#[test]
fn sold_out_sales_queue_and_delivery_serves_the_front() {
    let store = InMemoryInventoryStore::new();
    let script = "A Alien\n1\n\
                  S Alien\nEllen\nRipley\n\
                  S Alien\nArthur\nDallas\n\
                  O\n\
                  D Alien\n\
                  C\n\
                  q\n";
    let (transcript, inventory) = run_script(&store, script);

    assert!(transcript.contains("The title is sold out!"));
    assert!(transcript.contains("(position 1)"));
    assert!(transcript.contains("(position 2)"));
    assert!(transcript.contains("-- \"Alien\" is delivered to \"Ellen Ripley\""));
    assert!(!transcript.contains("delivered to \"Arthur Dallas\""));
    assert!(transcript.contains("2 person(s) on the customer list: Arthur Dallas, Ellen Ripley."));

    let alien = inventory.find_stock_item("Alien").unwrap();
    assert_eq!(alien.have(), 0);
    assert_eq!(alien.waiting_list().size(), 1);
    assert_eq!(alien.waiting_list().get(1), Ok(&Person::new("Arthur", "Dallas")));
}

#[test]
fn invalid_want_values_are_handled() {
    let store = InMemoryInventoryStore::new();
    let (transcript, inventory) = run_script(&store, "A Alien\nlots\nM Alien\n-4\nM Alien\n7\nq\n");

    assert!(transcript.contains("** Invalid input: the initial want value is set to zero!"));
    assert!(transcript.contains("The value \"-4\" is not a valid want value!"));
    assert!(transcript.contains("is changed from 0 to 7."));
    assert_eq!(inventory.find_stock_item("Alien").map(|item| item.want()), Some(7));
}

#[test]
fn missing_titles_and_customers_are_reported() {
    let store = InMemoryInventoryStore::new();
    let (transcript, inventory) = run_script(&store, "X Matrix\nI Matrix\nY\nAda\nLovelace\nq\n");

    assert!(transcript.contains("** Title (Matrix) not found!"));
    assert!(transcript.contains("Stock item not found! (title: Matrix)"));
    assert!(transcript.contains("** Customer (Ada Lovelace) not found!"));
    assert_eq!(inventory.catalog().size(), 0);
}

#[test]
fn malformed_commands_do_not_end_the_session() {
    let store = InMemoryInventoryStore::new();
    let (transcript, inventory) = run_script(&store, "\nw\nA\nA Alien\n2\n");

    assert_eq!(transcript.matches("Type 'H' for help.").count(), 3);
    assert_eq!(inventory.catalog().size(), 1);
    // End of input still saves.
    assert!(store.restore().is_some());
}

#[test]
fn delete_all_requires_confirmation() {
    let store = InMemoryInventoryStore::new();
    let (transcript, inventory) = run_script(&store, "A Alien\n1\nZ\nmaybe\nn\nZ\ny\nq\n");

    assert!(transcript.contains("Nothing has been removed."));
    assert!(transcript.contains("All titles and customers have been removed!"));
    assert_eq!(inventory, Inventory::new());
}

#[test]
fn state_survives_across_sessions() {
    let store = InMemoryInventoryStore::new();
    run_script(&store, "A Alien\n2\nS Alien\nEllen\nRipley\nq\n");

    let (transcript, inventory) = run_script(&store, "L\nq\n");

    assert!(!transcript.contains("starting empty"));
    assert!(transcript.contains("Title: Alien"));
    assert!(transcript.contains("1 person(s) on waiting list: Ellen Ripley."));
    assert_eq!(inventory.customers().size(), 1);
}

#[test]
fn corrupt_record_starts_empty() {
    let store = InMemoryInventoryStore::with_record("garbage");
    let (transcript, inventory) = run_script(&store, "q\n");

    assert!(transcript.contains("starting empty"));
    assert_eq!(inventory, Inventory::new());
}

#[test]
fn orders_on_an_empty_catalog_report_no_videos() {
    let store = InMemoryInventoryStore::new();
    let (transcript, inventory) = run_script(&store, "O\nR\nq\n");

    assert!(transcript.contains("No videos have been ordered."));
    assert!(transcript.contains("No videos have been returned."));
    assert!(!transcript.contains("Purchase Order"));
    assert_eq!(inventory.catalog().size(), 0);
}

#[test]
fn input_ending_mid_sale_records_nobody() {
    let store = InMemoryInventoryStore::new();
    let (_, inventory) = run_script(&store, "A Alien\n0\nS Alien\n");

    assert!(inventory.customers().is_empty());
    let alien = inventory.find_stock_item("Alien").unwrap();
    assert!(alien.waiting_list().is_empty());

    let restored = store.restore().expect("end of input still saves");
    assert!(restored.customers().is_empty());
    assert!(restored.find_stock_item("Alien").unwrap().waiting_list().is_empty());
}

#[test]
fn input_ending_mid_customer_delete_changes_nothing() {
    let store = InMemoryInventoryStore::new();
    run_script(&store, "A Alien\n1\nS Alien\nEllen\nRipley\nq\n");

    let (transcript, inventory) = run_script(&store, "Y\nEllen\n");

    assert!(!transcript.contains("not found"));
    assert_eq!(inventory.customers().size(), 1);
}
