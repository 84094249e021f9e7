// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resting-position resolver: where the dragged item settles if dropped now.
//!
//! Placement is flush against margin boxes along the main axis:
//!
//! - [`go_before`] puts the moving item's margin box right before a reference margin box.
//! - [`go_after`] puts it right after.
//! - [`go_into_start`] puts it at the start of a container's content box.
//!
//! On the cross axis the moving item is centered on the reference.

use kurbo::{Point, Vec2};
use understory_box_model::{Axis, BoxModel};

use crate::dimensions::DimensionMap;
use crate::displacement::{OnLift, displaced_box, live_box, resting_box};
use crate::error::DimensionError;
use crate::impact::{DragImpact, ImpactLocation};
use crate::types::DraggableDimension;

/// Center of `moving` when its margin box ends where `reference`'s margin box starts.
pub fn go_before(axis: Axis, moving: &BoxModel, reference: &BoxModel) -> Point {
    let main = axis.start(reference.margin_box)
        - (axis.spacing_end(&moving.margin) + axis.size(moving.border_box) / 2.0);
    axis.point(main, axis.cross_of(reference.center()))
}

/// Center of `moving` when its margin box starts where `reference`'s margin box ends.
pub fn go_after(axis: Axis, moving: &BoxModel, reference: &BoxModel) -> Point {
    let main = axis.end(reference.margin_box)
        + axis.spacing_start(&moving.margin)
        + axis.size(moving.border_box) / 2.0;
    axis.point(main, axis.cross_of(reference.center()))
}

/// Center of `moving` placed at the start of `into`'s content box.
pub fn go_into_start(axis: Axis, moving: &BoxModel, into: &BoxModel) -> Point {
    let main = axis.start(into.content_box)
        + axis.spacing_start(&moving.margin)
        + axis.size(moving.border_box) / 2.0;
    axis.point(main, axis.cross_of(into.content_box.center()))
}

/// Inputs to [`resting_center`] and [`resting_offset`].
#[derive(Copy, Clone, Debug)]
pub struct RestingArgs<'a> {
    /// Current impact.
    pub impact: &'a DragImpact,
    /// The dragged item.
    pub draggable: &'a DraggableDimension,
    /// Measurements taken at lift.
    pub dimensions: &'a DimensionMap,
    /// Lift-time displacement state.
    pub on_lift: &'a OnLift,
}

/// Page-space border-box center the dragged item would settle at.
///
/// Positions inside a scrolled droppable are reported where they currently appear, so the
/// droppable's scroll change is removed from the result.
pub fn resting_center(args: &RestingArgs<'_>) -> Result<Point, DimensionError> {
    let RestingArgs {
        impact,
        draggable,
        dimensions,
        on_lift,
    } = *args;
    let original = draggable.page.center();
    match impact.at {
        None => Ok(original),
        Some(ImpactLocation::Merge(merge)) => {
            let target = merge.grouping_with;
            let destination = dimensions.require_droppable(target.droppable_id)?;
            let item = dimensions.require_draggable(target.draggable_id)?;
            let live = live_box(
                item,
                on_lift,
                &impact.displaced_by,
                impact.is_displaced(item.id()),
            );
            Ok(live.center() - destination.scroll_diff())
        }
        Some(ImpactLocation::Reorder(location)) => {
            let destination = dimensions.require_droppable(location.droppable_id)?;
            let axis = destination.axis;
            let inside = dimensions.inside(destination.id());
            let center = if inside.is_empty() {
                go_into_start(axis, &draggable.page, &destination.page)
            } else if let Some(closest) = impact.closest_displaced() {
                let item = dimensions.require_draggable(closest)?;
                let live = displaced_box(item, on_lift, &impact.displaced_by);
                go_before(axis, &draggable.page, &live)
            } else {
                match inside.last() {
                    Some(last) if last.id() == draggable.id() => original,
                    Some(last) => go_after(axis, &draggable.page, &resting_box(last, on_lift)),
                    None => original,
                }
            };
            Ok(center - destination.scroll_diff())
        }
    }
}

/// Offset from the dragged item's original center to its resting center.
pub fn resting_offset(args: &RestingArgs<'_>) -> Result<Vec2, DimensionError> {
    Ok(resting_center(args)? - args.draggable.page.center())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact::{
        DragMovement, DraggableLocation, GroupingImpact, GroupingTarget, get_lift_effect,
    };
    use crate::types::{
        DraggableDescriptor, DraggableId, DroppableDescriptor, DroppableDimension, DroppableFlags,
        DroppableId, FrameScroll, ScrollFrame, TypeId,
    };
    use crate::viewport::Viewport;
    use kurbo::{Rect, Size};
    use understory_box_model::Spacing;

    fn item(id: u64, index: usize, droppable: u64, rect: Rect, margin: f64) -> DraggableDimension {
        DraggableDimension::new(
            DraggableDescriptor {
                id: DraggableId(id),
                index,
                droppable_id: DroppableId(droppable),
                type_id: TypeId::default(),
            },
            BoxModel::from_border_box(rect, Spacing::uniform(margin), Spacing::ZERO, Spacing::ZERO),
        )
    }

    fn container(id: u64, page: BoxModel, frame: Option<ScrollFrame>) -> DroppableDimension {
        DroppableDimension::new(
            DroppableDescriptor {
                id: DroppableId(id),
                type_id: TypeId::default(),
            },
            Axis::Vertical,
            page,
            frame,
            DroppableFlags::default(),
        )
    }

    #[test]
    fn placement_is_flush_against_margins() {
        let moving = BoxModel::from_border_box(
            Rect::new(0.0, 0.0, 100.0, 40.0),
            Spacing::new(2.0, 0.0, 6.0, 0.0),
            Spacing::ZERO,
            Spacing::ZERO,
        );
        let reference = BoxModel::from_border_box(
            Rect::new(50.0, 100.0, 250.0, 150.0),
            Spacing::uniform(5.0),
            Spacing::ZERO,
            Spacing::ZERO,
        );
        // Reference margin box spans 95..155; moving margin box is 48 tall.
        assert_eq!(go_before(Axis::Vertical, &moving, &reference), Point::new(150.0, 69.0));
        assert_eq!(go_after(Axis::Vertical, &moving, &reference), Point::new(150.0, 177.0));
    }

    #[test]
    fn entry_point_uses_content_box() {
        let moving = BoxModel::from_border_box(
            Rect::new(0.0, 0.0, 40.0, 20.0),
            Spacing::new(0.0, 0.0, 0.0, 3.0),
            Spacing::ZERO,
            Spacing::ZERO,
        );
        let into = BoxModel::from_border_box(
            Rect::new(100.0, 0.0, 300.0, 50.0),
            Spacing::ZERO,
            Spacing::uniform(1.0),
            Spacing::uniform(9.0),
        );
        // Content box is 110..290 x 10..40.
        assert_eq!(
            go_into_start(Axis::Horizontal, &moving, &into),
            Point::new(133.0, 25.0)
        );
    }

    #[test]
    fn merge_rests_on_the_target() {
        let map = DimensionMap::new()
            .with_droppable(container(
                1,
                BoxModel::from_rect(Rect::new(0.0, 0.0, 100.0, 300.0)),
                None,
            ))
            .with_draggable(item(1, 0, 1, Rect::new(0.0, 0.0, 100.0, 50.0), 0.0))
            .with_draggable(item(2, 1, 1, Rect::new(0.0, 50.0, 100.0, 100.0), 0.0));
        let viewport = Viewport::new(Size::new(100.0, 100.0), Vec2::ZERO, Vec2::ZERO);
        let critical = map.critical(DraggableId(1)).unwrap();
        let lift = get_lift_effect(&critical, &map, &viewport).unwrap();
        let impact = DragImpact {
            movement: DragMovement::default(),
            displaced_by: lift.on_lift.displaced_by,
            at: Some(ImpactLocation::Merge(GroupingImpact {
                grouping_with: GroupingTarget {
                    droppable_id: DroppableId(1),
                    draggable_id: DraggableId(2),
                },
            })),
        };
        let args = RestingArgs {
            impact: &impact,
            draggable: map.draggable(DraggableId(1)).unwrap(),
            dimensions: &map,
            on_lift: &lift.on_lift,
        };
        // Item 2 is no longer displaced, so it sits in item 1's old slot.
        assert_eq!(resting_center(&args), Ok(Point::new(50.0, 25.0)));
        assert_eq!(resting_offset(&args), Ok(Vec2::ZERO));
    }

    #[test]
    fn no_location_returns_home() {
        let map = DimensionMap::new()
            .with_draggable(item(1, 0, 1, Rect::new(0.0, 0.0, 100.0, 50.0), 0.0));
        let args = RestingArgs {
            impact: &DragImpact::none(),
            draggable: map.draggable(DraggableId(1)).unwrap(),
            dimensions: &map,
            on_lift: &OnLift::default(),
        };
        assert_eq!(resting_offset(&args), Ok(Vec2::ZERO));
    }

    #[test]
    fn scrolled_destination_reports_visible_position() {
        let frame = ScrollFrame {
            page: BoxModel::from_rect(Rect::new(200.0, 0.0, 300.0, 100.0)),
            scroll: FrameScroll {
                initial: Vec2::ZERO,
                current: Vec2::new(0.0, 30.0),
                max: Vec2::new(0.0, 100.0),
            },
        };
        let map = DimensionMap::new()
            .with_droppable(container(
                2,
                BoxModel::from_rect(Rect::new(200.0, 0.0, 300.0, 200.0)),
                Some(frame),
            ))
            .with_draggable(item(1, 0, 1, Rect::new(0.0, 0.0, 100.0, 50.0), 0.0))
            .with_draggable(item(5, 0, 2, Rect::new(200.0, 0.0, 300.0, 50.0), 0.0));
        let impact = DragImpact {
            at: Some(ImpactLocation::Reorder(DraggableLocation {
                droppable_id: DroppableId(2),
                index: 1,
            })),
            ..DragImpact::none()
        };
        let args = RestingArgs {
            impact: &impact,
            draggable: map.draggable(DraggableId(1)).unwrap(),
            dimensions: &map,
            on_lift: &OnLift::default(),
        };
        // After item 5 (center 75), shifted up by the 30px scroll.
        assert_eq!(resting_center(&args), Ok(Point::new(250.0, 45.0)));
    }

    #[test]
    fn missing_droppable_is_an_error() {
        let map = DimensionMap::new()
            .with_draggable(item(1, 0, 1, Rect::new(0.0, 0.0, 100.0, 50.0), 0.0));
        let impact = DragImpact {
            at: Some(ImpactLocation::Reorder(DraggableLocation {
                droppable_id: DroppableId(9),
                index: 0,
            })),
            ..DragImpact::none()
        };
        let args = RestingArgs {
            impact: &impact,
            draggable: map.draggable(DraggableId(1)).unwrap(),
            dimensions: &map,
            on_lift: &OnLift::default(),
        };
        assert_eq!(
            resting_center(&args),
            Err(DimensionError::MissingDroppable(DroppableId(9)))
        );
    }
}
