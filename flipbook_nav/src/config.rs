// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use flipbook_hit::EdgeZoneParams;
use flipbook_timing::Millis;
use flipbook_turn::DEFAULT_TURN_DURATION_MS;
use flipbook_view::{DEFAULT_TOGGLE_ZOOM, DEFAULT_ZOOM_DURATION_MS, ZoomLimits};
use serde::Deserialize;

/// A configuration file was rejected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Not valid JSON for the configuration shape.
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// Parsed, but a value is out of range.
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Proportions of the page-edge zones, as configured.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct HitZoneConfig {
    /// Outer share of the page width eligible for pointer feedback.
    pub outer_fraction: f64,
    /// Top and bottom share of the page height for pointer feedback.
    pub band_fraction: f64,
    /// Outer share of the page width that is clickable.
    pub edge_fraction: f64,
    /// Clickable distance beyond the outer edge.
    pub gap_buffer: f64,
}

impl Default for HitZoneConfig {
    fn default() -> Self {
        let p = EdgeZoneParams::default();
        Self {
            outer_fraction: p.outer_fraction,
            band_fraction: p.band_fraction,
            edge_fraction: p.edge_fraction,
            gap_buffer: p.gap_buffer,
        }
    }
}

impl From<HitZoneConfig> for EdgeZoneParams {
    fn from(c: HitZoneConfig) -> Self {
        Self {
            outer_fraction: c.outer_fraction,
            band_fraction: c.band_fraction,
            edge_fraction: c.edge_fraction,
            gap_buffer: c.gap_buffer,
        }
    }
}

/// Tunables of the [`Navigator`](crate::Navigator).
///
/// Every field has a default, so a configuration file only needs the values
/// it overrides:
///
/// ```rust
/// use flipbook_nav::NavigatorConfig;
///
/// let config = NavigatorConfig::from_json(r#"{ "reducedMotion": true, "zoomMax": 3.0 }"#).unwrap();
/// assert!(config.reduced_motion);
/// assert_eq!(config.zoom_max, 3.0);
/// assert_eq!(config.turn_duration_ms, 1400);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct NavigatorConfig {
    /// Smallest zoom factor.
    pub zoom_min: f64,
    /// Largest zoom factor.
    pub zoom_max: f64,
    /// Zoom button increment.
    pub zoom_step: f64,
    /// Length of zoom animations.
    pub zoom_duration_ms: Millis,
    /// Length of a page turn.
    pub turn_duration_ms: Millis,
    /// Zoom reached by double-click from 1×.
    pub double_click_zoom: f64,
    /// Navigate without turn animations.
    pub reduced_motion: bool,
    /// Page-edge zone proportions.
    pub hit_zones: HitZoneConfig,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        let limits = ZoomLimits::default();
        Self {
            zoom_min: limits.min,
            zoom_max: limits.max,
            zoom_step: limits.step,
            zoom_duration_ms: DEFAULT_ZOOM_DURATION_MS,
            turn_duration_ms: DEFAULT_TURN_DURATION_MS,
            double_click_zoom: DEFAULT_TOGGLE_ZOOM,
            reduced_motion: false,
            hit_zones: HitZoneConfig::default(),
        }
    }
}

impl NavigatorConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.zoom_min) || !positive(self.zoom_max) {
            return Err(ConfigError::Invalid("zoom limits must be positive and finite"));
        }
        if self.zoom_min > 1.0 || self.zoom_max < 1.0 {
            return Err(ConfigError::Invalid("zoom limits must include 1"));
        }
        if !positive(self.zoom_step) {
            return Err(ConfigError::Invalid("zoom step must be positive"));
        }
        let zones = &self.hit_zones;
        let fractions = [zones.outer_fraction, zones.band_fraction, zones.edge_fraction];
        if fractions.iter().any(|f| !(0.0..=1.0).contains(f)) {
            return Err(ConfigError::Invalid("hit zone fractions must lie in [0, 1]"));
        }
        if !zones.gap_buffer.is_finite() || zones.gap_buffer < 0.0 {
            return Err(ConfigError::Invalid("hit zone gap buffer must not be negative"));
        }
        Ok(())
    }

    /// Zoom limits for the viewport.
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        ZoomLimits::new(self.zoom_min, self.zoom_max, self.zoom_step)
    }

    /// Edge zone parameters for hit testing.
    #[must_use]
    pub fn edge_zones(&self) -> EdgeZoneParams {
        self.hit_zones.into()
    }
}
