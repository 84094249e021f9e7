// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tuning for impact resolution.

/// Tuning constants used by [`get_drag_impact`](crate::get_drag_impact).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImpactConfig {
    /// Grouping band divisor.
    ///
    /// In a grouping-enabled container the dragged center merges with an item when it lies
    /// at least `size / divisor` inside both main-axis edges of that item. Must be greater
    /// than two for the band to be non-empty.
    pub grouping_threshold_divisor: f64,
}

impl ImpactConfig {
    /// Default grouping band divisor: the middle half of an item merges.
    pub const DEFAULT_GROUPING_THRESHOLD_DIVISOR: f64 = 4.0;
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            grouping_threshold_divisor: Self::DEFAULT_GROUPING_THRESHOLD_DIVISOR,
        }
    }
}
