// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine tuning.

use understory_reorder::ImpactConfig;

/// Tuning for a [`DragEngine`](crate::DragEngine) and its sensors.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DragConfig {
    /// Distance a pointer must travel on either axis before a pending press becomes a drag
    /// (default: 5.0).
    pub sloppy_click_threshold: f64,
    /// Recompute the resting offset on every movement tick, not only at drop (default: false).
    pub preview_resting: bool,
    /// Impact tuning.
    pub impact: ImpactConfig,
}

impl DragConfig {
    /// Default pointer slop.
    pub const DEFAULT_SLOPPY_CLICK_THRESHOLD: f64 = 5.0;
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            sloppy_click_threshold: Self::DEFAULT_SLOPPY_CLICK_THRESHOLD,
            preview_resting: false,
            impact: ImpactConfig::default(),
        }
    }
}
