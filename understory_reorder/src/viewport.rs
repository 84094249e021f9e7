// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window scroll bookkeeping for the duration of a drag.

use kurbo::{Point, Rect, Size, Vec2};
use understory_box_model::position::negate;

/// Scroll change since the drag started.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollDiff {
    /// `current - initial`.
    pub value: Vec2,
    /// The negated value: how far page content appears to have moved.
    pub displacement: Vec2,
}

/// Window scroll offsets.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ViewportScroll {
    /// Scroll offset at lift.
    pub initial: Vec2,
    /// Scroll offset now.
    pub current: Vec2,
    /// Largest reachable scroll offset.
    ///
    /// Only changes when the destination container changes; see the scroll coordinator in
    /// `understory_drag`.
    pub max: Vec2,
    /// Change since lift.
    pub diff: ScrollDiff,
}

/// The visible window onto the page.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Visible page area. Its origin is the current scroll offset.
    pub frame: Rect,
    /// Scroll bookkeeping.
    pub scroll: ViewportScroll,
}

impl Viewport {
    /// A viewport of `size` scrolled to `scroll`, with `max` as the furthest reachable scroll.
    pub fn new(size: Size, scroll: Vec2, max: Vec2) -> Self {
        Self {
            frame: Rect::from_origin_size(scroll.to_point(), size),
            scroll: ViewportScroll {
                initial: scroll,
                current: scroll,
                max,
                diff: ScrollDiff::default(),
            },
        }
    }

    /// Visible size, which cannot change during a drag.
    pub fn size(&self) -> Size {
        self.frame.size()
    }

    /// A copy scrolled to `current`; the frame and diff follow.
    #[must_use]
    pub fn scrolled(&self, current: Vec2) -> Self {
        let value = current - self.scroll.initial;
        Self {
            frame: Rect::from_origin_size(current.to_point(), self.size()),
            scroll: ViewportScroll {
                current,
                diff: ScrollDiff {
                    value,
                    displacement: negate(value),
                },
                ..self.scroll
            },
        }
    }

    /// A copy with a new maximum scroll.
    #[must_use]
    pub fn with_max_scroll(&self, max: Vec2) -> Self {
        Self {
            scroll: ViewportScroll { max, ..self.scroll },
            ..*self
        }
    }

    /// Convert a client (window-relative) point to page coordinates.
    pub fn client_to_page(&self, client: Point) -> Point {
        client + self.scroll.current
    }
}
