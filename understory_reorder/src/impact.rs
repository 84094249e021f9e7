// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Impact resolver: where the dragged item would land and which items move to make room.
//!
//! ## Overview
//!
//! [`get_drag_impact`] is called once per movement tick. It resolves the droppable under the
//! dragged center, then either
//!
//! - merges with an item, when the droppable allows grouping and the center sits in the
//!   middle band of an item ([`ImpactLocation::Merge`]), or
//! - reorders, displacing the suffix of items whose boundary lies after the center
//!   ([`ImpactLocation::Reorder`]).
//!
//! The two outcomes are mutually exclusive. When no droppable is under the center the
//! impact has no location and nothing is displaced.
//!
//! [`get_lift_effect`] builds the first impact of a drag together with the [`OnLift`] state
//! that later ticks are resolved against.
//!
//! ## Determinism
//!
//! The impact is a pure function of its [`ImpactArgs`]. Identical arguments produce identical
//! impacts; nothing is cached between calls.

use alloc::vec::Vec;
use kurbo::Point;
use understory_box_model::Axis;

use crate::config::ImpactConfig;
use crate::dimensions::DimensionMap;
use crate::displacement::{
    DisplacedBy, Displacement, DisplacementContext, OnLift, displaced_from, get_displacement,
    is_visible, live_box,
};
use crate::error::DimensionError;
use crate::types::{
    Critical, DraggableDimension, DraggableId, DroppableDimension, DroppableFlags, DroppableId,
};
use crate::viewport::Viewport;

/// A slot in a droppable.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DraggableLocation {
    /// Container of the slot.
    pub droppable_id: DroppableId,
    /// Position within the container once the dragged item is removed from it.
    pub index: usize,
}

/// The item the dragged item would merge with.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupingTarget {
    /// Container holding the target.
    pub droppable_id: DroppableId,
    /// The target item.
    pub draggable_id: DraggableId,
}

/// A merge outcome.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct GroupingImpact {
    /// The item being merged with.
    pub grouping_with: GroupingTarget,
}

/// What a drop would do right now.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ImpactLocation {
    /// Insert the dragged item at a slot.
    Reorder(DraggableLocation),
    /// Merge the dragged item with another item.
    Merge(GroupingImpact),
}

/// Items moved out of the way by the current impact.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DragMovement {
    /// Displaced items in container order. The first entry is the closest displaced item.
    pub displaced: Vec<Displacement>,
}

/// Result of one impact computation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragImpact {
    /// Displaced items.
    pub movement: DragMovement,
    /// How far displaced items move.
    pub displaced_by: DisplacedBy,
    /// Where a drop would go, or `None` when over no droppable.
    pub at: Option<ImpactLocation>,
}

impl DragImpact {
    /// An impact over nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// The reorder slot, if this is a reorder.
    pub fn destination(&self) -> Option<DraggableLocation> {
        match self.at {
            Some(ImpactLocation::Reorder(location)) => Some(location),
            _ => None,
        }
    }

    /// The merge target, if this is a merge.
    pub fn group(&self) -> Option<GroupingTarget> {
        match self.at {
            Some(ImpactLocation::Merge(merge)) => Some(merge.grouping_with),
            _ => None,
        }
    }

    /// The first displaced item.
    pub fn closest_displaced(&self) -> Option<DraggableId> {
        self.movement.displaced.first().map(|d| d.draggable_id)
    }

    /// The droppable the impact is in, for either outcome.
    pub fn droppable_over(&self) -> Option<DroppableId> {
        match self.at? {
            ImpactLocation::Reorder(location) => Some(location.droppable_id),
            ImpactLocation::Merge(merge) => Some(merge.grouping_with.droppable_id),
        }
    }

    /// Whether `id` is displaced.
    pub fn is_displaced(&self, id: DraggableId) -> bool {
        self.movement.displaced.iter().any(|d| d.draggable_id == id)
    }
}

/// State established when a drag begins.
#[derive(Clone, Debug, PartialEq)]
pub struct LiftEffect {
    /// Impact for the first tick.
    pub impact: DragImpact,
    /// Items displaced at lift.
    pub on_lift: OnLift,
}

/// Build the first impact of a drag.
///
/// The dragged item's space is still reserved in its home container, so every item after it
/// starts displaced. None of them animate.
pub fn get_lift_effect(
    critical: &Critical,
    dimensions: &DimensionMap,
    viewport: &Viewport,
) -> Result<LiftEffect, DimensionError> {
    let dragged = dimensions.require_draggable(critical.draggable.id)?;
    let home = dimensions.require_droppable(critical.droppable.id)?;
    let inside = dimensions.inside(home.id());
    let at = inside
        .iter()
        .position(|d| d.id() == dragged.id())
        .ok_or(DimensionError::MissingDraggable(dragged.id()))?;
    let after = &inside[at + 1..];

    let displaced_by = DisplacedBy::new(home.axis, &dragged.page);
    let on_lift = OnLift {
        was_displaced: after.iter().map(|d| d.id()).collect(),
        displaced_by,
    };
    let displaced = after
        .iter()
        .map(|item| Displacement {
            draggable_id: item.id(),
            // Measured boxes of these items are already their displaced boxes.
            is_visible: is_visible(&item.page, home, viewport),
            should_animate: false,
        })
        .collect();

    Ok(LiftEffect {
        impact: DragImpact {
            movement: DragMovement { displaced },
            displaced_by,
            at: Some(ImpactLocation::Reorder(DraggableLocation {
                droppable_id: home.id(),
                index: at,
            })),
        },
        on_lift,
    })
}

/// The droppable that would receive `dragged` with its center at `center`.
///
/// Candidates are enabled droppables of the dragged item's type whose active subject contains
/// the center. When several nest, the smallest wins; equal areas go to the first inserted.
pub fn droppable_over<'a>(
    center: Point,
    dragged: &DraggableDimension,
    dimensions: &'a DimensionMap,
) -> Option<&'a DroppableDimension> {
    dimensions
        .droppables()
        .filter(|d| d.is_enabled() && d.descriptor.type_id == dragged.descriptor.type_id)
        .filter_map(|d| {
            let active = d.subject.active?;
            active.contains(center).then_some((d, active.area()))
        })
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(d, _)| d)
}

/// Inputs to [`get_drag_impact`].
#[derive(Copy, Clone, Debug)]
pub struct ImpactArgs<'a> {
    /// Dragged border-box center in page coordinates.
    pub page_border_box_center: Point,
    /// The dragged item.
    pub draggable_id: DraggableId,
    /// Measurements taken at lift.
    pub dimensions: &'a DimensionMap,
    /// Lift-time displacement state.
    pub on_lift: &'a OnLift,
    /// Impact from the previous tick.
    pub previous: &'a DragImpact,
    /// Current window.
    pub viewport: &'a Viewport,
    /// Tuning.
    pub config: &'a ImpactConfig,
    /// Whether the middle band of an item may produce a merge.
    ///
    /// Step-wise drags pass `false`: each step lands in the middle of the next item.
    pub allow_grouping: bool,
}

/// Compute the impact of the dragged item being at `args.page_border_box_center`.
pub fn get_drag_impact(args: &ImpactArgs<'_>) -> Result<DragImpact, DimensionError> {
    let dragged = args.dimensions.require_draggable(args.draggable_id)?;
    let Some(destination) = droppable_over(args.page_border_box_center, dragged, args.dimensions)
    else {
        tracing::trace!(draggable = ?args.draggable_id, "impact: over no droppable");
        return Ok(DragImpact::none());
    };
    let is_home = destination.id() == dragged.descriptor.droppable_id;
    let axis = destination.axis;
    let displaced_by = if is_home {
        args.on_lift.displaced_by
    } else {
        DisplacedBy::new(axis, &dragged.page)
    };
    // Item boxes were measured before the container scrolled.
    let center = args.page_border_box_center + destination.scroll_diff();
    let items: Vec<&DraggableDimension> = args
        .dimensions
        .inside(destination.id())
        .into_iter()
        .filter(|d| d.id() != dragged.id())
        .collect();

    if args.allow_grouping && destination.flags.contains(DroppableFlags::GROUPING) {
        if let Some(target) = grouping_target(center, axis, &items, destination.id(), displaced_by, args)
        {
            let displaced = if args.previous.droppable_over() == Some(destination.id()) {
                args.previous
                    .movement
                    .displaced
                    .iter()
                    .map(|d| Displacement {
                        should_animate: false,
                        ..*d
                    })
                    .collect()
            } else {
                Vec::new()
            };
            tracing::trace!(
                draggable = ?args.draggable_id,
                with = ?target.draggable_id,
                "impact: merge"
            );
            return Ok(DragImpact {
                movement: DragMovement { displaced },
                displaced_by,
                at: Some(ImpactLocation::Merge(GroupingImpact {
                    grouping_with: target,
                })),
            });
        }
    }

    let start = displaced_from(center, axis, &items, args.on_lift, &displaced_by);
    let suffix = start.map_or(&[][..], |at| &items[at..]);
    let ctx = DisplacementContext {
        destination,
        on_lift: args.on_lift,
        displaced_by,
        viewport: args.viewport,
    };
    let displaced = get_displacement(&ctx, suffix, &args.previous.movement.displaced);
    let index = start.unwrap_or(items.len());
    tracing::trace!(
        draggable = ?args.draggable_id,
        droppable = ?destination.id(),
        index,
        displaced = displaced.len(),
        "impact: reorder"
    );

    Ok(DragImpact {
        movement: DragMovement { displaced },
        displaced_by,
        at: Some(ImpactLocation::Reorder(DraggableLocation {
            droppable_id: destination.id(),
            index,
        })),
    })
}

/// The item whose middle band contains `center`, judged against the previous tick's boxes.
fn grouping_target(
    center: Point,
    axis: Axis,
    items: &[&DraggableDimension],
    droppable: DroppableId,
    displaced_by: DisplacedBy,
    args: &ImpactArgs<'_>,
) -> Option<GroupingTarget> {
    let same_droppable = args.previous.droppable_over() == Some(droppable);
    let divisor = args.config.grouping_threshold_divisor;
    let main = axis.main_of(center);
    let cross = axis.cross_of(center);
    items
        .iter()
        .find(|item| {
            let is_displaced = same_droppable && args.previous.is_displaced(item.id());
            let live = live_box(item, args.on_lift, &displaced_by, is_displaced).border_box;
            let threshold = axis.size(live) / divisor;
            let cross_axis = axis.cross();
            main >= axis.start(live) + threshold
                && main <= axis.end(live) - threshold
                && cross >= cross_axis.start(live)
                && cross <= cross_axis.end(live)
        })
        .map(|item| GroupingTarget {
            droppable_id: droppable,
            draggable_id: item.id(),
        })
}
