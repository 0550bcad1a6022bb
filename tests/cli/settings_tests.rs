//! Tests for theme and config commands

use crate::common::{assert_contains, assert_json_type, TestHome};

// ============================================================================
// THEME
// ============================================================================

#[test]
fn test_theme_defaults_to_light() {
    let home = TestHome::new();
    let output = home.run_cli_success(&["theme"]);
    assert_contains(&output, "Theme: light");
}

#[test]
fn test_theme_toggle_persists() {
    let home = TestHome::new();
    let json = home.run_json(&["theme", "toggle"]);
    assert_json_type(&json, "theme");
    assert_eq!(json["dark_mode"], true);
    assert_eq!(json["changed"], true);

    let output = home.run_cli_success(&["theme", "show"]);
    assert_contains(&output, "Theme: dark");

    let store = std::fs::read_to_string(home.store_path()).unwrap();
    let map: serde_json::Value = serde_json::from_str(&store).unwrap();
    assert_eq!(map["darkMode"], "true");
}

#[test]
fn test_theme_survives_product_changes() {
    let home = TestHome::new();
    home.run_cli_success(&["theme", "dark"]);
    home.add_product("Widget", "Tools", None, 50, 5);

    let json = home.run_json(&["theme"]);
    assert_eq!(json["dark_mode"], true);
    assert_eq!(json["changed"], false);
}

#[test]
fn test_malformed_products_value_reads_as_empty() {
    let home = TestHome::new();
    home.with_store(r#"{"products":"not json","darkMode":"true"}"#);

    let json = home.run_json(&["list"]);
    assert_eq!(json["total_products"], 0);
    let theme = home.run_json(&["theme"]);
    assert_eq!(theme["dark_mode"], true);
}

// ============================================================================
// CONFIG
// ============================================================================

#[test]
fn test_config_path_uses_env() {
    let home = TestHome::new();
    let json = home.run_json(&["config", "path"]);
    assert_json_type(&json, "config_path");
    assert_eq!(json["path"], home.config_path().to_string_lossy().as_ref());
    assert_eq!(json["exists"], false);
}

#[test]
fn test_config_init_and_show() {
    let home = TestHome::new();
    home.run_cli_success(&["config", "init"]);
    assert!(home.config_path().exists());

    let output = home.run_cli_success(&["config", "show"]);
    assert_contains(&output, "page_size = 10");
    assert_contains(&output, "stale_days = 7");

    let (code, _, stderr) = home.run_cli_failure(&["config", "init"]);
    assert_eq!(code, Some(1));
    assert_contains(&stderr, "--force");

    home.run_cli_success(&["config", "init", "--force"]);
}

#[test]
fn test_invalid_config_is_reported() {
    let home = TestHome::new();
    home.with_config("[display]\npage_size = 0\n");

    let (code, _, stderr) = home.run_cli_failure(&["list"]);
    assert_eq!(code, Some(1));
    assert_contains(&stderr, "Configuration error");
}

#[test]
fn test_custom_prediction_settings() {
    let home = TestHome::new();
    home.with_config("[prediction]\nstale_days = 0\ntrend_factor = 2.0\n");
    // quantity 8 is above threshold 5 but within 2x
    let csv = home.add_file(
        "in.csv",
        "Name,Category,Price,Quantity,Threshold,Last Updated\nWidget,Tools,,8,5,2020-01-01T00:00:00.000Z\n",
    );
    home.run_cli_success(&["import", csv.to_str().unwrap()]);

    let json = home.run_json(&["list"]);
    let predictions = json["view"]["predictions"].as_array().unwrap();
    assert_eq!(predictions.len(), 1);
    assert_eq!(predictions[0]["reason"], "trending_low_and_stale");
}

#[test]
fn test_record_with_null_quantity_is_dropped_alone() {
    let home = TestHome::new();
    home.with_store(
        r#"{"products":"[{\"id\":\"6f1c2a9e-3b4d-4e5f-8a7b-1c2d3e4f5a6b\",\"name\":\"Blank\",\"category\":\"X\",\"quantity\":null,\"threshold\":1},{\"id\":\"0b8e7d6c-5a4b-4c3d-9e2f-1a0b9c8d7e6f\",\"name\":\"Kept\",\"category\":\"X\",\"quantity\":4,\"threshold\":1}]"}"#,
    );

    let output = home.run_cli(&["list", "-f", "json"]).unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_products"], 1);
    assert_eq!(json["view"]["rows"][0]["product"]["name"], "Kept");
    assert_contains(&String::from_utf8_lossy(&output.stderr), "Blank");
}
