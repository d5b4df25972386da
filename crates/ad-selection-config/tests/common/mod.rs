// crates/ad-selection-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config and catalog validation tests.
// Purpose: Reduce duplication across integration tests for ad-selection-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::io::Write;

use ad_selection_config::AdSelectionConfig;
use tempfile::NamedTempFile;

/// Standard result type for config tests.
pub type TestResult = Result<(), String>;

/// Catalog with two candidates in marketplace 2 and one spend record.
pub const SAMPLE_CATALOG: &str = r#"
[[contents]]
content_id = "laptop-ad"
marketplace_id = "2"
renderable_content = "<div>laptops</div>"
click_through_rate = 0.5

[[contents]]
content_id = "music-ad"
marketplace_id = "2"
renderable_content = "<div>music</div>"
click_through_rate = 0.8

[[targeting_groups]]
targeting_group_id = "laptop-buyers"
content_id = "laptop-ad"
click_through_rate = 0.5

[[targeting_groups.predicates]]
kind = "category_spend_value"
category = "COMPUTERS"
comparison = "lt"
value = 1100

[[targeting_groups]]
targeting_group_id = "big-spenders"
content_id = "music-ad"
click_through_rate = 0.8

[[targeting_groups.predicates]]
kind = "category_spend_value"
category = "COMPUTERS"
comparison = "gt"
value = 1100

[[spend]]
customer_id = "1"
category = "COMPUTERS"
number_of_purchases = 1
usd_spent = 1000
"#;

/// Parses a TOML string into an `AdSelectionConfig` for tests.
pub fn config_from_toml(toml_str: &str) -> Result<AdSelectionConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Writes content to a fresh temporary file.
pub fn temp_file(content: &[u8]) -> Result<NamedTempFile, String> {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(content).map_err(|err| err.to_string())?;
    Ok(file)
}

/// Asserts that a result failed with a message containing `needle`.
pub fn assert_error<T, E: std::fmt::Display>(result: Result<T, E>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err(format!("expected an error containing {needle}")),
    }
}
