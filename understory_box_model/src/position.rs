// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small vector helpers used by placement code.

use kurbo::Vec2;

/// The vector pointing the opposite way.
///
/// Used to undo a displacement that has already been applied to a measured box.
pub fn negate(v: Vec2) -> Vec2 {
    -v
}

/// Exact positional equality.
///
/// Positions are compared exactly; `-0.0` and `0.0` are considered equal.
pub fn is_equal(a: Vec2, b: Vec2) -> bool {
    a.x == b.x && a.y == b.y
}
