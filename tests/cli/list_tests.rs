//! Tests for list and categories

use crate::common::{assert_contains, assert_json_type, assert_valid_toon, row_names, TestHome};

// ============================================================================
// LISTING
// ============================================================================

#[test]
fn test_list_empty() {
    let home = TestHome::new();
    let output = home.run_cli_success(&["list"]);
    assert_contains(&output, "No products yet");

    let json = home.run_json(&["list"]);
    assert_json_type(&json, "inventory");
    assert_eq!(json["total_products"], 0);
    assert!(json["view"]["pagination"].is_null());
}

#[test]
fn test_list_shows_low_stock_and_reorder() {
    let home = TestHome::new();
    home.add_product("Widget", "Tools", Some("5"), 2, 5);
    home.add_product("Bolt", "Hardware", None, 100, 10);

    let output = home.run_cli_success(&["list"]);
    let widget = output
        .lines()
        .find(|l| l.contains("Widget"))
        .expect("Widget row");
    assert!(widget.ends_with("LOW"), "row: {}", widget);
    assert_contains(widget, "Price: 5 ");

    let bolt = output.lines().find(|l| l.contains("Bolt")).expect("Bolt row");
    assert!(!bolt.contains("LOW"));
    assert_contains(bolt, "Price: N/A");

    assert_contains(&output, "Automated reorder initiated for Widget.");
    assert!(!output.contains("Page 1 of 1"), "Single page has no pagination");
}

#[test]
fn test_list_second_page_of_fifteen() {
    let home = TestHome::new();
    home.with_numbered_products(15);

    let json = home.run_json(&["list", "--page", "2"]);
    let names = row_names(&json);
    assert_eq!(names, vec!["P11", "P12", "P13", "P14", "P15"]);
    assert_eq!(json["view"]["pagination"]["total_pages"], 2);
    assert_eq!(json["view"]["pagination"]["has_next"], false);
    assert_eq!(json["view"]["pagination"]["has_previous"], true);

    let output = home.run_cli_success(&["list", "--page", "2"]);
    assert_contains(&output, "< Previous  Page 2 of 2  Next > (disabled)");
}

#[test]
fn test_list_page_out_of_range_is_clamped() {
    let home = TestHome::new();
    home.with_numbered_products(15);

    let json = home.run_json(&["list", "--page", "9"]);
    assert_eq!(json["view"]["page"], 2);
    assert_eq!(row_names(&json).len(), 5);
}

#[test]
fn test_list_page_size_flag() {
    let home = TestHome::new();
    home.with_numbered_products(15);

    let json = home.run_json(&["list", "--page-size", "4", "--page", "4"]);
    assert_eq!(row_names(&json), vec!["P13", "P14", "P15"]);
    assert_eq!(json["view"]["pagination"]["total_pages"], 4);
}

#[test]
fn test_list_page_size_from_config() {
    let home = TestHome::new();
    home.with_config("[display]\npage_size = 5\n");
    home.with_numbered_products(12);

    let json = home.run_json(&["list"]);
    assert_eq!(row_names(&json).len(), 5);
    assert_eq!(json["view"]["pagination"]["total_pages"], 3);
}

// ============================================================================
// FILTERS
// ============================================================================

#[test]
fn test_list_search_is_case_insensitive() {
    let home = TestHome::new();
    home.add_product("Red Widget", "Tools", None, 50, 5);
    home.add_product("Bolt", "Hardware", None, 50, 5);
    home.add_product("widget stand", "Furniture", None, 50, 5);

    let json = home.run_json(&["list", "--search", "WIDGET"]);
    assert_eq!(row_names(&json), vec!["Red Widget", "widget stand"]);
    assert_eq!(json["view"]["total_matches"], 2);
}

#[test]
fn test_list_filters_intersect() {
    let home = TestHome::new();
    home.add_product("Widget A", "Tools", None, 1, 5);
    home.add_product("Widget B", "Tools", None, 50, 5);
    home.add_product("Widget C", "Garden", None, 1, 5);
    home.add_product("Hammer", "Tools", None, 1, 5);

    let json = home.run_json(&[
        "list",
        "--search",
        "widget",
        "--category",
        "Tools",
        "--low-stock",
    ]);
    assert_eq!(row_names(&json), vec!["Widget A"]);
}

#[test]
fn test_list_rows_keep_store_positions() {
    let home = TestHome::new();
    home.add_product("Alpha", "A", None, 50, 5);
    home.add_product("Beta", "B", None, 50, 5);
    home.add_product("Gamma", "B", None, 50, 5);

    let json = home.run_json(&["list", "--category", "B"]);
    let rows = json["view"]["rows"].as_array().unwrap();
    assert_eq!(rows[0]["position"], 1);
    assert_eq!(rows[1]["position"], 2);
}

#[test]
fn test_list_no_matches() {
    let home = TestHome::new();
    home.add_product("Widget", "Tools", None, 50, 5);

    let output = home.run_cli_success(&["list", "--search", "zebra"]);
    assert_contains(&output, "No products match the current filter.");
}

#[test]
fn test_list_toon_output() {
    let home = TestHome::new();
    home.add_product("Widget", "Tools", None, 50, 5);

    let output = home.run_cli_success(&["list", "-f", "toon"]);
    assert_valid_toon(&output, "list");
}

// ============================================================================
// CATEGORIES
// ============================================================================

#[test]
fn test_categories_distinct_in_first_seen_order() {
    let home = TestHome::new();
    home.add_product("A", "Tools", None, 50, 5);
    home.add_product("B", "Food", None, 50, 5);
    home.add_product("C", "Tools", None, 50, 5);

    let json = home.run_json(&["categories"]);
    assert_json_type(&json, "categories");
    assert_eq!(json["categories"], serde_json::json!(["Tools", "Food"]));

    let output = home.run_cli_success(&["categories"]);
    assert_contains(&output, "All Categories");
    assert_contains(&output, "  - Food");
}
