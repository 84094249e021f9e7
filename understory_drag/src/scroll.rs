// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll coordinator: keeps the window's maximum scroll current during a drag.
//!
//! The document can only grow or shrink mid-drag when the dragged item moves into or out of
//! a droppable, because that is when a placeholder appears or disappears. A window resize
//! would change it too, but a resize cancels the drag. So the maximum scroll is recomputed
//! only after a movement action, only while dragging, and only when the droppable under the
//! item changed.

use kurbo::{Size, Vec2};
use understory_box_model::position::is_equal;
use understory_reorder::DroppableId;

use crate::action::Action;
use crate::state::DragState;

/// Furthest the window can scroll: `scroll_size - frame_size`, never negative.
pub fn get_max_scroll(scroll_size: Size, frame_size: Size) -> Vec2 {
    Vec2::new(
        (scroll_size.width - frame_size.width).max(0.0),
        (scroll_size.height - frame_size.height).max(0.0),
    )
}

/// Whether `action` can change the droppable under the dragged item.
pub fn should_check_on_action(action: &Action) -> bool {
    action.is_movement()
}

/// Whether the droppable under the dragged item differs between two ticks.
///
/// Leaving every droppable or entering one from nowhere both count as a change.
pub fn has_droppable_over_changed(
    previous: Option<DroppableId>,
    current: Option<DroppableId>,
) -> bool {
    previous != current
}

/// What the scroll coordinator needs to remember about the state before an action.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct MovementSnapshot {
    /// Whether movement was allowed.
    pub is_movement_allowed: bool,
    /// Droppable under the dragged item.
    pub droppable_over: Option<DroppableId>,
}

impl MovementSnapshot {
    /// Capture `state`.
    pub fn of(state: &DragState) -> Self {
        Self {
            is_movement_allowed: state.is_movement_allowed(),
            droppable_over: state.impact().and_then(|i| i.droppable_over()),
        }
    }
}

/// The new maximum window scroll after `action` took `previous` to `current`, or `None` when
/// there is nothing to correct.
pub fn get_new_max_scroll(
    previous: &MovementSnapshot,
    current: &DragState,
    action: &Action,
    document_scroll_size: Size,
) -> Option<Vec2> {
    if !should_check_on_action(action) {
        return None;
    }
    if !previous.is_movement_allowed || !current.is_movement_allowed() {
        return None;
    }
    let now = MovementSnapshot::of(current);
    if !has_droppable_over_changed(previous.droppable_over, now.droppable_over) {
        return None;
    }
    let viewport = current.viewport()?;
    let max = get_max_scroll(document_scroll_size, viewport.size());
    if is_equal(max, viewport.scroll.max) {
        return None;
    }
    Some(max)
}
