// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_box_model --heading-base-level=0

//! Understory Box Model: measured CSS-style boxes and axis math.
//!
//! Understory Box Model is the geometry layer shared by the reorder and drag crates.
//!
//! - [`BoxModel`] carries the four nested boxes of a measured element (margin, border,
//!   padding, content) together with the [`Spacing`] that separates them.
//! - [`Axis`] selects the main and cross coordinates used by list and grid containers.
//! - The [`position`] helpers cover the small vector operations (negation and equality)
//!   that placement code needs.
//!
//! All boxes are [`kurbo::Rect`] values in a single coordinate space (usually page coordinates),
//! so every box exposes its edges and [`center`](kurbo::Rect::center) directly.
//! A measured [`BoxModel`] is never mutated; moving a box produces a new value with
//! [`BoxModel::offset`].
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Point, Rect, Vec2};
//! use understory_box_model::{Axis, BoxModel, Spacing};
//!
//! let item = BoxModel::from_border_box(
//!     Rect::new(0.0, 0.0, 200.0, 40.0),
//!     Spacing::uniform(4.0),
//!     Spacing::ZERO,
//!     Spacing::ZERO,
//! );
//! assert_eq!(item.center(), Point::new(100.0, 20.0));
//! assert_eq!(item.margin_box, Rect::new(-4.0, -4.0, 204.0, 44.0));
//!
//! // Shift the whole model down by one row.
//! let moved = item.offset(Vec2::new(0.0, 48.0));
//! assert_eq!(Axis::Vertical.start(moved.border_box), 48.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod axis;
pub mod box_model;
pub mod position;

pub use axis::Axis;
pub use box_model::{BoxModel, Spacing};

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Rect, Vec2};

    #[test]
    fn offset_then_negate_restores_the_box() {
        let b = BoxModel::from_border_box(
            Rect::new(10.0, 20.0, 110.0, 70.0),
            Spacing::new(1.0, 2.0, 3.0, 4.0),
            Spacing::uniform(1.0),
            Spacing::uniform(5.0),
        );
        let shift = Vec2::new(13.0, -7.0);
        let back = b.offset(shift).offset(position::negate(shift));
        assert_eq!(back, b);
    }

    #[test]
    fn axis_patch_builds_points_on_either_axis() {
        assert_eq!(Axis::Vertical.point(5.0, 9.0), Point::new(9.0, 5.0));
        assert_eq!(Axis::Horizontal.point(5.0, 9.0), Point::new(5.0, 9.0));
    }
}
