// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measured box models: margin, border, padding, and content boxes.

use kurbo::{Point, Rect, Size, Vec2};

/// Edge distances around a box, in the CSS order (top, right, bottom, left).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Spacing {
    /// Distance above the box.
    pub top: f64,
    /// Distance to the right of the box.
    pub right: f64,
    /// Distance below the box.
    pub bottom: f64,
    /// Distance to the left of the box.
    pub left: f64,
}

impl Spacing {
    /// No spacing on any edge.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Create spacing from explicit edge values.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same spacing on all four edges.
    pub const fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    /// Grow `rect` outwards by this spacing.
    pub fn expand(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x0 - self.left,
            rect.y0 - self.top,
            rect.x1 + self.right,
            rect.y1 + self.bottom,
        )
    }

    /// Shrink `rect` inwards by this spacing.
    pub fn shrink(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x0 + self.left,
            rect.y0 + self.top,
            rect.x1 - self.right,
            rect.y1 - self.bottom,
        )
    }
}

/// A measured element: four nested boxes plus the spacing between them.
///
/// The border box is the reference box; the margin box is derived by expanding it with
/// [`margin`](Self::margin), and the padding and content boxes by shrinking it with
/// [`border`](Self::border) and then [`padding`](Self::padding).
///
/// Box models are values. Once measured they are never edited in place; use
/// [`offset`](Self::offset) to derive a shifted copy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxModel {
    /// Border box expanded by the margin.
    pub margin_box: Rect,
    /// The element's border box.
    pub border_box: Rect,
    /// Border box shrunk by the border widths.
    pub padding_box: Rect,
    /// Padding box shrunk by the padding.
    pub content_box: Rect,
    /// Margin around the border box.
    pub margin: Spacing,
    /// Border widths.
    pub border: Spacing,
    /// Padding inside the border.
    pub padding: Spacing,
}

impl BoxModel {
    /// Build a box model from a border box and its surrounding spacing.
    pub fn from_border_box(
        border_box: Rect,
        margin: Spacing,
        border: Spacing,
        padding: Spacing,
    ) -> Self {
        let padding_box = border.shrink(border_box);
        Self {
            margin_box: margin.expand(border_box),
            border_box,
            padding_box,
            content_box: padding.shrink(padding_box),
            margin,
            border,
            padding,
        }
    }

    /// A box model with no margin, border, or padding: all four boxes coincide.
    pub fn from_rect(border_box: Rect) -> Self {
        Self::from_border_box(border_box, Spacing::ZERO, Spacing::ZERO, Spacing::ZERO)
    }

    /// Center of the border box.
    pub fn center(&self) -> Point {
        self.border_box.center()
    }

    /// Size of the border box.
    pub fn size(&self) -> Size {
        self.border_box.size()
    }

    /// Every box shifted by `by`; spacing is unchanged.
    #[must_use]
    pub fn offset(&self, by: Vec2) -> Self {
        Self {
            margin_box: self.margin_box + by,
            border_box: self.border_box + by,
            padding_box: self.padding_box + by,
            content_box: self.content_box + by,
            ..*self
        }
    }
}
