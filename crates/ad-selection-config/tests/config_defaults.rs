//! Config defaults and core validation tests for ad-selection-config.
// crates/ad-selection-config/tests/config_defaults.rs
// =============================================================================
// Module: Config Defaults and Core Validation Tests
// Description: Validate default behavior and core config invariants.
// Purpose: Ensure minimal config is valid and audit settings are enforced.
// =============================================================================

use std::path::PathBuf;

use ad_selection_config::AdSelectionConfig;
use ad_selection_config::AuditSinkKind;
use ad_selection_core::LogicMode;
use ad_selection_core::SelectionAuditEvent;
use ad_selection_core::SelectionEventKind;
use common::TestResult;
use common::assert_error;
use common::config_from_toml;

mod common;

#[test]
fn empty_config_uses_defaults() -> TestResult {
    let config = config_from_toml("").map_err(|err| err.to_string())?;
    config.validate().map_err(|err| err.to_string())?;
    if config.selection.logic_mode != LogicMode::Strict {
        return Err("logic mode should default to strict".to_string());
    }
    if config.audit.sink != AuditSinkKind::Stderr {
        return Err("audit sink should default to stderr".to_string());
    }
    if config.catalog_path().is_some() {
        return Err("catalog should default to none".to_string());
    }
    Ok(())
}

#[test]
fn file_sink_requires_path() -> TestResult {
    let config = config_from_toml("[audit]\nsink = \"file\"\n").map_err(|err| err.to_string())?;
    assert_error(config.validate(), "audit.path is required when audit.sink=file")?;
    assert_error(config.audit_sink().map(|_| ()), "audit.path is required")
}

#[test]
fn blank_paths_are_rejected() -> TestResult {
    let config = config_from_toml("[audit]\npath = \"  \"\n").map_err(|err| err.to_string())?;
    assert_error(config.validate(), "audit.path must be non-empty")?;
    let config = config_from_toml("[catalog]\npath = \"\"\n").map_err(|err| err.to_string())?;
    assert_error(config.validate(), "catalog.path must be non-empty")
}

#[test]
fn catalog_component_limit_is_enforced() -> TestResult {
    let toml = format!("[catalog]\npath = \"{}\"\n", "c".repeat(256));
    let config = config_from_toml(&toml).map_err(|err| err.to_string())?;
    assert_error(config.validate(), "catalog.path path component too long")
}

#[test]
fn absolute_catalog_path_is_kept() -> TestResult {
    let absolute = std::env::temp_dir().join("catalog.toml");
    let mut config = config_from_toml("").map_err(|err| err.to_string())?;
    config.catalog.path = Some(absolute.to_string_lossy().into_owned());
    config.source_path = Some(PathBuf::from("nested/ad-selection.toml"));
    if config.catalog_path() != Some(absolute) {
        return Err("absolute catalog path should not be rebased".to_string());
    }
    Ok(())
}

#[test]
fn file_sink_writes_events() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let log = dir.path().join("audit.jsonl");
    let toml = format!("[audit]\nsink = \"file\"\npath = '{}'\n", log.display());
    let config = config_from_toml(&toml).map_err(|err| err.to_string())?;
    config.validate().map_err(|err| err.to_string())?;

    let sink = config.audit_sink().map_err(|err| err.to_string())?;
    sink.record(&SelectionAuditEvent::new(
        SelectionEventKind::SelectionEmpty,
        Some("2"),
        false,
        LogicMode::Strict,
    ));
    let written = std::fs::read_to_string(&log).map_err(|err| err.to_string())?;
    if !written.contains("\"event\":\"selection_empty\"") {
        return Err(format!("unexpected audit output: {written}"));
    }
    Ok(())
}

#[test]
fn relative_audit_path_follows_config_directory() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let config_path = dir.path().join("ad-selection.toml");
    std::fs::write(&config_path, "[audit]\nsink = \"file\"\npath = \"audit.jsonl\"\n")
        .map_err(|err| err.to_string())?;
    let config = AdSelectionConfig::load(Some(&config_path)).map_err(|err| err.to_string())?;
    let expected = dir.path().join("audit.jsonl");
    if config.audit_path() != Some(expected.clone()) {
        return Err("relative audit path should resolve next to the config file".to_string());
    }

    let sink = config.audit_sink().map_err(|err| err.to_string())?;
    sink.record(&SelectionAuditEvent::new(
        SelectionEventKind::MarketplaceMissing,
        None,
        false,
        LogicMode::Strict,
    ));
    let written = std::fs::read_to_string(&expected).map_err(|err| err.to_string())?;
    if !written.contains("\"event\":\"marketplace_missing\"") {
        return Err(format!("unexpected audit output: {written}"));
    }
    Ok(())
}
