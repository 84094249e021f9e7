// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-droppable view of the published drag state.

use understory_reorder::{DraggableId, DroppableId, ImpactLocation, Placeholder};

use crate::state::DragState;

/// What one droppable needs to render during a drag.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DroppableView {
    /// The dragged item is over this droppable.
    pub is_dragging_over: bool,
    /// The item over this droppable.
    pub dragging_over_with: Option<DraggableId>,
    /// The item dragged out of this droppable, when it is the home list.
    pub dragging_from_this_with: Option<DraggableId>,
    /// Space to reserve for the dragged item.
    ///
    /// Only foreign lists reserve space: the home list still contains the item's own slot.
    pub placeholder: Option<Placeholder>,
}

/// Project `state` onto `droppable_id`.
///
/// A droppable with drops disabled always gets the default view.
pub fn droppable_view(
    state: &DragState,
    droppable_id: DroppableId,
    is_drop_disabled: bool,
) -> DroppableView {
    if is_drop_disabled {
        return DroppableView::default();
    }
    let (Some(critical), Some(impact), Some(dimensions)) =
        (state.critical(), state.impact(), state.dimensions())
    else {
        return DroppableView::default();
    };
    let dragged = critical.draggable.id;
    let is_home = critical.droppable.id == droppable_id;
    let mut view = DroppableView {
        dragging_from_this_with: is_home.then_some(dragged),
        ..DroppableView::default()
    };
    let Some(at) = impact.at else {
        return view;
    };
    let show_placeholder = match at {
        ImpactLocation::Reorder(location) => {
            if location.droppable_id != droppable_id {
                return view;
            }
            !is_home
        }
        ImpactLocation::Merge(merge) => {
            if merge.grouping_with.droppable_id != droppable_id {
                return view;
            }
            !is_home && !impact.movement.displaced.is_empty()
        }
    };
    view.is_dragging_over = true;
    view.dragging_over_with = Some(dragged);
    if show_placeholder {
        view.placeholder = dimensions.draggable(dragged).map(|d| d.placeholder);
    }
    view
}
