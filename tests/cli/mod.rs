//! CLI command integration tests
//!
//! Every subcommand is exercised through the binary, in text and JSON
//! output formats.

pub mod analytics_tests;
pub mod list_tests;
pub mod product_tests;
pub mod settings_tests;
