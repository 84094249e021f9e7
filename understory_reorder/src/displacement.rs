// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Displacement calculator: which items are pushed forward, and by how much.
//!
//! ## Live boxes
//!
//! A measured box is never edited. Every item instead has two derived positions:
//!
//! - its *resting* box, where it sits when it is not displaced, and
//! - its *displaced* box, the resting box pushed forward by [`DisplacedBy`].
//!
//! Items that started the drag displaced (see [`OnLift`]) were measured in their displaced
//! position, so for them the measured box is the displaced box and the resting box is the
//! measured box pulled back. For every other item the measured box is the resting box.
//! [`live_box`] picks one of the two for the current tick.
//!
//! ## Boundary rule
//!
//! An item's boundary is the midpoint, along the main axis, between the centers of its
//! resting and displaced boxes. The dragged center being before the boundary means the
//! dragged item has claimed the slot, so the item is displaced. Walking the container in
//! order, the first item whose boundary lies after the dragged center starts the displaced
//! suffix; every item after it is displaced too.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use kurbo::{Point, Rect, Vec2};
use understory_box_model::position::negate;
use understory_box_model::{Axis, BoxModel};

use crate::types::{DraggableDimension, DraggableId, DroppableDimension};
use crate::viewport::Viewport;

/// How far displaced items move to make room for the dragged item.
///
/// Derived once from the dragged item's margin box; constant for a given destination axis.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DisplacedBy {
    /// Distance along the main axis.
    pub value: f64,
    /// The same distance as a vector.
    pub point: Vec2,
}

impl DisplacedBy {
    /// Displacement that makes room for `dragged` along `axis`.
    pub fn new(axis: Axis, dragged: &BoxModel) -> Self {
        let value = axis.size(dragged.margin_box);
        Self {
            value,
            point: axis.vec(value),
        }
    }
}

/// One displaced item.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Displacement {
    /// The displaced item.
    pub draggable_id: DraggableId,
    /// Whether any of the item's live box is visible.
    pub is_visible: bool,
    /// Whether the item became displaced this tick and should animate into place.
    pub should_animate: bool,
}

/// Which items began the drag already displaced.
///
/// When an item is lifted, the items after it in its home container keep their measured
/// position because the lifted item's space is still reserved. They count as displaced from
/// the first tick, and their measured box already includes the displacement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OnLift {
    /// Items displaced at lift.
    pub was_displaced: BTreeSet<DraggableId>,
    /// Displacement in effect at lift, along the home axis.
    pub displaced_by: DisplacedBy,
}

impl OnLift {
    /// Whether `id` started the drag displaced.
    pub fn did_start_displaced(&self, id: DraggableId) -> bool {
        self.was_displaced.contains(&id)
    }
}

/// Where `item` sits when it is not displaced.
pub fn resting_box(item: &DraggableDimension, on_lift: &OnLift) -> BoxModel {
    if on_lift.did_start_displaced(item.id()) {
        item.page.offset(negate(on_lift.displaced_by.point))
    } else {
        item.page
    }
}

/// Where `item` sits when it is displaced by `by`.
pub fn displaced_box(item: &DraggableDimension, on_lift: &OnLift, by: &DisplacedBy) -> BoxModel {
    if on_lift.did_start_displaced(item.id()) {
        item.page
    } else {
        item.page.offset(by.point)
    }
}

/// The box `item` currently occupies.
pub fn live_box(
    item: &DraggableDimension,
    on_lift: &OnLift,
    by: &DisplacedBy,
    is_displaced: bool,
) -> BoxModel {
    if is_displaced {
        displaced_box(item, on_lift, by)
    } else {
        resting_box(item, on_lift)
    }
}

/// Main-axis coordinate the dragged center must be before for `item` to be displaced.
pub fn boundary(axis: Axis, item: &DraggableDimension, on_lift: &OnLift, by: &DisplacedBy) -> f64 {
    let resting = axis.main_of(resting_box(item, on_lift).center());
    let displaced = axis.main_of(displaced_box(item, on_lift, by).center());
    (resting + displaced) / 2.0
}

/// Position in `items` where the displaced suffix starts, or `None` if nothing is displaced.
///
/// `items` must be in container order and must not include the dragged item. `center` is the
/// dragged item's border-box center in the same space as the measured boxes.
pub fn displaced_from(
    center: Point,
    axis: Axis,
    items: &[&DraggableDimension],
    on_lift: &OnLift,
    by: &DisplacedBy,
) -> Option<usize> {
    let main = axis.main_of(center);
    items
        .iter()
        .position(|item| main < boundary(axis, item, on_lift, by))
}

/// Shared inputs for stamping [`Displacement`] values.
#[derive(Copy, Clone, Debug)]
pub struct DisplacementContext<'a> {
    /// Container the items live in.
    pub destination: &'a DroppableDimension,
    /// Lift-time displacement state.
    pub on_lift: &'a OnLift,
    /// Displacement along the destination axis.
    pub displaced_by: DisplacedBy,
    /// Window used for visibility.
    pub viewport: &'a Viewport,
}

/// Displacement entries for every item in `displaced`, in order.
///
/// An entry animates only when it is visible and was not displaced in `previous`.
pub fn get_displacement(
    ctx: &DisplacementContext<'_>,
    displaced: &[&DraggableDimension],
    previous: &[Displacement],
) -> Vec<Displacement> {
    displaced
        .iter()
        .map(|item| {
            let id = item.id();
            let live = displaced_box(item, ctx.on_lift, &ctx.displaced_by);
            let is_visible = is_visible(&live, ctx.destination, ctx.viewport);
            let was_displaced = previous.iter().any(|d| d.draggable_id == id);
            Displacement {
                draggable_id: id,
                is_visible,
                should_animate: is_visible && !was_displaced,
            }
        })
        .collect()
}

/// Whether `live` can currently be seen inside `destination` and the window.
///
/// Boxes touching an edge count as visible.
pub fn is_visible(live: &BoxModel, destination: &DroppableDimension, viewport: &Viewport) -> bool {
    let border_box = live.border_box - destination.scroll_diff();
    let Some(active) = destination.subject.active else {
        return false;
    };
    overlaps(border_box, viewport.frame) && overlaps(border_box, active)
}

fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}
