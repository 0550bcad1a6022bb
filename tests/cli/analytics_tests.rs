//! Tests for the analytics command

use crate::common::{assert_contains, assert_json_type, TestHome};

#[test]
fn test_analytics_empty() {
    let home = TestHome::new();
    let output = home.run_cli_success(&["analytics"]);
    assert_contains(&output, "No data available for analytics.");

    let json = home.run_json(&["analytics"]);
    assert_json_type(&json, "analytics");
    assert!(json["charts"].is_null());
    assert_eq!(json["summary"]["total_products"], 0);
}

#[test]
fn test_analytics_summary_and_categories() {
    let home = TestHome::new();
    home.add_product("Widget", "Tools", Some("5"), 2, 5);
    home.add_product("Hammer", "Tools", None, 3, 1);
    home.add_product("Apple", "Food", Some("0.5"), 40, 10);

    let json = home.run_json(&["analytics"]);
    let summary = &json["summary"];
    assert_eq!(summary["total_products"], 3);
    assert_eq!(summary["low_stock_count"], 1);
    assert_eq!(summary["category_count"], 2);
    // 2*5 + 3*10 + 40*0.5
    assert_eq!(summary["total_value"], 60.0);

    let categories = json["categories"].as_array().unwrap();
    assert_eq!(categories[0]["category"], "Tools");
    assert_eq!(categories[0]["total_quantity"], 5);
    assert_eq!(categories[0]["low_stock_count"], 1);
    assert_eq!(categories[1]["category"], "Food");
}

#[test]
fn test_analytics_trend_is_marked_synthetic() {
    let home = TestHome::new();
    home.add_product("Widget", "Tools", None, 20, 5);

    let json = home.run_json(&["analytics"]);
    let trend = &json["charts"]["trend"];
    assert_eq!(trend["synthetic"], true);
    let values = trend["values"].as_array().unwrap();
    assert_eq!(values.len(), 7);
    assert!(values.iter().all(|v| v.as_i64().unwrap() >= 0));
    assert_eq!(trend["labels"].as_array().unwrap().len(), 7);

    let output = home.run_cli_success(&["analytics"]);
    assert_contains(&output, "synthetic placeholder");
    assert_contains(&output, "Total Inventory Value: $200.00");
}

#[test]
fn test_analytics_with_maximum_quantities() {
    let home = TestHome::new();
    let csv = home.add_file(
        "in.csv",
        "Name,Category,Price,Quantity,Threshold,Last Updated\nA,X,1,9223372036854775807,1,\nB,X,1,9223372036854775807,1,\n",
    );
    home.run_cli_success(&["import", csv.to_str().unwrap()]);

    let json = home.run_json(&["analytics"]);
    assert_eq!(json["categories"][0]["total_quantity"], i64::MAX);
    assert!(json["charts"]["trend"]["values"]
        .as_array()
        .unwrap()
        .iter()
        .all(|v| v.as_i64().unwrap() > 0));

    let output = home.run_cli_success(&["analytics"]);
    assert_contains(&output, "Total Products: 2");
}
