//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = MosaicConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_gap_too_large() {
    let mut config = MosaicConfig::default();
    config.grid.gap = 40;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("grid.gap"));
}

#[test]
fn catches_zero_minimum_size() {
    let mut config = MosaicConfig::default();
    config.grid.min_w = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("grid.min_w"));
}

#[test]
fn catches_tiny_floating_panel() {
    let mut config = MosaicConfig::default();
    config.floating.height = 50;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("floating.height"));
}

#[test]
fn catches_viewport_out_of_range() {
    let mut config = MosaicConfig::default();
    config.viewport.width = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("viewport.width"));
}

#[test]
fn boundary_values_are_valid() {
    let mut config = MosaicConfig::default();
    config.grid.margin = 64;
    config.grid.gap = 0;
    config.grid.min_w = 12;
    config.grid.min_h = 1;
    config.floating.width = 4096;
    config.viewport.height = 200;
    assert!(validate(&config).is_ok());
}

#[test]
fn collects_multiple_errors() {
    let mut config = MosaicConfig::default();
    config.grid.margin = 100;
    config.grid.min_h = 20;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("grid.margin"));
    assert!(err.contains("grid.min_h"));
    assert!(err.contains("; "));
}
