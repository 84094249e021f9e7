// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Main/cross axis selection for list and grid containers.

use kurbo::{Point, Rect, Vec2};

use crate::box_model::Spacing;

/// Direction in which a container lays out its items.
///
/// The *main* axis is the direction items flow in; the *cross* axis is perpendicular to it.
/// A vertical list has `y` as its main coordinate and `x` as its cross coordinate.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Items flow top to bottom.
    #[default]
    Vertical,
    /// Items flow left to right.
    Horizontal,
}

impl Axis {
    /// The perpendicular axis.
    pub const fn cross(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// Main-axis coordinate of a point.
    pub fn main_of(self, p: Point) -> f64 {
        match self {
            Self::Vertical => p.y,
            Self::Horizontal => p.x,
        }
    }

    /// Cross-axis coordinate of a point.
    pub fn cross_of(self, p: Point) -> f64 {
        self.cross().main_of(p)
    }

    /// Leading edge of `r` along this axis.
    pub fn start(self, r: Rect) -> f64 {
        match self {
            Self::Vertical => r.y0,
            Self::Horizontal => r.x0,
        }
    }

    /// Trailing edge of `r` along this axis.
    pub fn end(self, r: Rect) -> f64 {
        match self {
            Self::Vertical => r.y1,
            Self::Horizontal => r.x1,
        }
    }

    /// Extent of `r` along this axis.
    pub fn size(self, r: Rect) -> f64 {
        self.end(r) - self.start(r)
    }

    /// Leading spacing along this axis (top or left).
    pub fn spacing_start(self, s: &Spacing) -> f64 {
        match self {
            Self::Vertical => s.top,
            Self::Horizontal => s.left,
        }
    }

    /// Trailing spacing along this axis (bottom or right).
    pub fn spacing_end(self, s: &Spacing) -> f64 {
        match self {
            Self::Vertical => s.bottom,
            Self::Horizontal => s.right,
        }
    }

    /// Build a point from main and cross coordinates.
    pub fn point(self, main: f64, cross: f64) -> Point {
        match self {
            Self::Vertical => Point::new(cross, main),
            Self::Horizontal => Point::new(main, cross),
        }
    }

    /// Build a vector that only moves along this axis.
    pub fn vec(self, main: f64) -> Vec2 {
        self.point(main, 0.0).to_vec2()
    }
}
