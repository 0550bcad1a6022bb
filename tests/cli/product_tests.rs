//! Tests for add, edit, remove, select and bulk-delete

use crate::common::{assert_contains, assert_json_type, TestHome};

// ============================================================================
// ADD
// ============================================================================

#[test]
fn test_add_low_stock_widget() {
    let home = TestHome::new();
    let output = home.run_cli_success(&[
        "add",
        "--name",
        "Widget",
        "--category",
        "Tools",
        "--price",
        "5",
        "--quantity",
        "2",
        "--threshold",
        "5",
    ]);

    assert_contains(&output, "Added Widget (Tools)");
    assert_contains(&output, "Low stock");
    assert_contains(&output, "Widget is predicted to go out of stock soon");
    assert_contains(&output, "Automated reorder initiated for Widget.");
}

#[test]
fn test_add_json_output() {
    let home = TestHome::new();
    let json = home.run_json(&[
        "add",
        "--name",
        "Widget",
        "--category",
        "Tools",
        "--quantity",
        "2",
        "--threshold",
        "5",
    ]);

    assert_json_type(&json, "product_added");
    assert_eq!(json["low_stock"], true);
    assert_eq!(json["product"]["quantity"], 2);
    assert!(json["product"]["lastUpdated"].is_string());
    assert!(json["product"].get("price").is_none());
    assert_eq!(
        json["prediction"]["advisory"],
        "Automated reorder initiated for Widget."
    );
}

#[test]
fn test_add_persists_product() {
    let home = TestHome::new();
    home.add_product("Apple", "Food", Some("0.5"), 40, 10);

    let stored = home.stored_products();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["name"], "Apple");
    assert_eq!(stored[0]["price"], 0.5);
    assert_eq!(stored[0]["selected"], false);
}

#[test]
fn test_add_well_stocked_has_no_prediction() {
    let home = TestHome::new();
    let json = home.run_json(&[
        "add",
        "--name",
        "Bolt",
        "--category",
        "Hardware",
        "--quantity",
        "100",
        "--threshold",
        "10",
    ]);
    assert_eq!(json["low_stock"], false);
    assert!(json["prediction"].is_null());
}

#[test]
fn test_add_rejects_invalid_fields() {
    let home = TestHome::new();
    let (code, _, stderr) = home.run_cli_failure(&[
        "add",
        "--name",
        "Widget",
        "--category",
        "Tools",
        "--quantity",
        "3.5",
        "--threshold",
        "many",
    ]);

    assert_eq!(code, Some(2));
    assert_contains(&stderr, "quantity");
    assert_contains(&stderr, "threshold");
    assert!(!home.store_path().exists(), "Invalid input must not write the store");
}

#[test]
fn test_add_rejects_blank_name() {
    let home = TestHome::new();
    let (code, _, stderr) = home.run_cli_failure(&[
        "add",
        "--name",
        "   ",
        "--category",
        "Tools",
        "--quantity",
        "1",
        "--threshold",
        "1",
    ]);
    assert_eq!(code, Some(2));
    assert_contains(&stderr, "name");
}

#[test]
fn test_add_accepts_negative_quantity() {
    let home = TestHome::new();
    let json = home.run_json(&[
        "add",
        "--name",
        "Ghost",
        "--category",
        "Misc",
        "--quantity",
        "-3",
        "--threshold",
        "0",
    ]);
    assert_eq!(json["product"]["quantity"], -3);
    assert_eq!(json["low_stock"], true);
}

// ============================================================================
// EDIT / REMOVE
// ============================================================================

#[test]
fn test_edit_keeps_id_and_position() {
    let home = TestHome::new();
    home.add_product("First", "A", None, 50, 5);
    let id = home.add_product("Second", "A", None, 50, 5);
    home.add_product("Third", "A", None, 50, 5);

    let json = home.run_json(&[
        "edit",
        &id,
        "--name",
        "Second v2",
        "--category",
        "B",
        "--quantity",
        "1",
        "--threshold",
        "5",
    ]);
    assert_json_type(&json, "product_updated");
    assert_eq!(json["product"]["id"], id.as_str());
    assert_eq!(json["low_stock"], true);

    let names: Vec<String> = home
        .stored_products()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["First", "Second v2", "Third"]);
}

#[test]
fn test_edit_accepts_id_prefix() {
    let home = TestHome::new();
    let id = home.add_product("Widget", "Tools", None, 50, 5);

    let output = home.run_cli_success(&[
        "edit",
        &id[..8],
        "--name",
        "Gadget",
        "--category",
        "Tools",
        "--quantity",
        "50",
        "--threshold",
        "5",
    ]);
    assert_contains(&output, "Updated Gadget");
}

#[test]
fn test_remove_unknown_id() {
    let home = TestHome::new();
    home.add_product("Widget", "Tools", None, 50, 5);

    let (code, _, stderr) = home.run_cli_failure(&["remove", "ffffffff"]);
    assert_eq!(code, Some(4));
    assert_contains(&stderr, "No product matches id 'ffffffff'");
}

#[test]
fn test_remove_product() {
    let home = TestHome::new();
    home.add_product("Keep", "A", None, 50, 5);
    let id = home.add_product("Drop", "A", None, 50, 5);

    let json = home.run_json(&["rm", &id]);
    assert_json_type(&json, "product_removed");
    assert_eq!(json["name"], "Drop");
    assert_eq!(json["remaining"], 1);
    assert_eq!(home.stored_products()[0]["name"], "Keep");
}

// ============================================================================
// SELECT / BULK DELETE
// ============================================================================

#[test]
fn test_select_toggles() {
    let home = TestHome::new();
    let id = home.add_product("Widget", "Tools", None, 50, 5);

    let json = home.run_json(&["select", &id]);
    assert_json_type(&json, "product_selection");
    assert_eq!(json["selected"], true);
    assert_eq!(json["selected_count"], 1);

    let json = home.run_json(&["select", &id]);
    assert_eq!(json["selected"], false);
    assert_eq!(json["selected_count"], 0);
}

#[test]
fn test_bulk_delete_nothing_selected() {
    let home = TestHome::new();
    home.add_product("A", "X", None, 50, 5);
    home.add_product("B", "X", None, 50, 5);

    let (code, _, stderr) = home.run_cli_failure(&["bulk-delete", "--yes"]);
    assert_eq!(code, Some(3));
    assert_contains(&stderr, "No products selected for deletion.");
    assert_eq!(home.stored_products().len(), 2);
}

#[test]
fn test_bulk_delete_with_yes() {
    let home = TestHome::new();
    let a = home.add_product("A", "X", None, 50, 5);
    home.add_product("B", "X", None, 50, 5);
    let c = home.add_product("C", "X", None, 50, 5);
    home.run_cli_success(&["select", &a]);
    home.run_cli_success(&["select", &c]);

    let output = home.run_cli_success(&["bulk-delete", "--yes"]);
    assert_contains(&output, "Deleted 2 selected products.");

    let stored = home.stored_products();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["name"], "B");
}

#[test]
fn test_bulk_delete_without_terminal_is_declined() {
    let home = TestHome::new();
    let a = home.add_product("A", "X", None, 50, 5);
    home.run_cli_success(&["select", &a]);

    let json = home.run_json(&["bulk-delete"]);
    assert_json_type(&json, "bulk_delete");
    assert_eq!(json["cancelled"], true);
    assert_eq!(json["deleted"], 0);
    assert_eq!(home.stored_products().len(), 1);
}

// ============================================================================
// RECORDS STORED WITHOUT IDS
// ============================================================================

const LEGACY_STORE: &str = r#"{"products":"[{\"name\":\"Bolt\",\"category\":\"Hardware\",\"price\":null,\"quantity\":40,\"threshold\":10,\"lastUpdated\":\"2024-01-05T08:00:00.000Z\"},{\"name\":\"Nut\",\"category\":\"Hardware\",\"quantity\":2,\"threshold\":10}]"}"#;

#[test]
fn test_listed_id_of_legacy_record_can_be_removed() {
    let home = TestHome::new();
    home.with_store(LEGACY_STORE);

    let listed = home.run_json(&["list"]);
    let id = listed["view"]["rows"][0]["id"]
        .as_str()
        .expect("row id")
        .to_string();

    let json = home.run_json(&["remove", &id]);
    assert_json_type(&json, "product_removed");
    assert_eq!(json["name"], "Bolt");
    assert_eq!(json["remaining"], 1);
}

#[test]
fn test_legacy_ids_are_stable_across_commands() {
    let home = TestHome::new();
    home.with_store(LEGACY_STORE);

    let first = home.run_json(&["list"]);
    let second = home.run_json(&["list"]);
    assert_eq!(first["view"]["rows"], second["view"]["rows"]);

    let stored = home.stored_products();
    assert_eq!(stored[1]["id"], first["view"]["rows"][1]["id"]);

    let nut = stored[1]["id"].as_str().unwrap().to_string();
    let json = home.run_json(&["select", &nut[..8]]);
    assert_eq!(json["name"], "Nut");
    assert_eq!(json["selected"], true);
}

// ============================================================================
// CHARTS AFTER CHANGES
// ============================================================================

#[test]
fn test_add_with_charts_prints_analytics() {
    let home = TestHome::new();
    let output = home.run_cli_success(&[
        "add",
        "--name",
        "Widget",
        "--category",
        "Tools",
        "--quantity",
        "2",
        "--threshold",
        "5",
        "--charts",
    ]);

    assert_contains(&output, "Added Widget (Tools)");
    assert_contains(&output, "Inventory Overview by Category");
    assert_contains(&output, "Total Products: 1");
}

#[test]
fn test_add_without_charts_has_no_analytics() {
    let home = TestHome::new();
    let json = home.run_json(&[
        "add",
        "--name",
        "Widget",
        "--category",
        "Tools",
        "--quantity",
        "2",
        "--threshold",
        "5",
    ]);
    assert!(json.get("analytics").is_none());

    let output = home.run_cli_success(&[
        "add",
        "--name",
        "Bolt",
        "--category",
        "Hardware",
        "--quantity",
        "50",
        "--threshold",
        "5",
    ]);
    assert!(!output.contains("Summary Statistics"));
}

#[test]
fn test_remove_with_charts_json_reflects_removal() {
    let home = TestHome::new();
    home.add_product("Keep", "A", None, 5, 1);
    let id = home.add_product("Drop", "B", None, 5, 1);

    let json = home.run_json(&["remove", &id, "--charts"]);
    assert_json_type(&json, "product_removed");
    assert_eq!(json["analytics"]["summary"]["total_products"], 1);
    assert_eq!(json["analytics"]["summary"]["category_count"], 1);
    assert_eq!(json["analytics"]["charts"]["trend"]["synthetic"], true);
}
