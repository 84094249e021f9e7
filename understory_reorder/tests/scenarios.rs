// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reordering a three-item list end to end: lift, move, and resolve the resting position.

use kurbo::{Point, Rect, Size, Vec2};
use understory_box_model::{Axis, BoxModel, Spacing};
use understory_reorder::{
    DimensionMap, DraggableDescriptor, DraggableDimension, DraggableId, DroppableDescriptor,
    DroppableDimension, DroppableFlags, DroppableId, ImpactArgs, ImpactConfig, LiftEffect,
    RestingArgs, TypeId, Viewport, get_drag_impact, get_lift_effect, resting_center,
};

const LIST: DroppableId = DroppableId(7);

/// Three 100px items with 10px margins on the main axis, laid out along `axis`.
fn three_items(axis: Axis) -> DimensionMap {
    let margin = match axis {
        Axis::Vertical => Spacing::new(10.0, 0.0, 10.0, 0.0),
        Axis::Horizontal => Spacing::new(0.0, 10.0, 0.0, 10.0),
    };
    let mut map = DimensionMap::new().with_droppable(DroppableDimension::new(
        DroppableDescriptor {
            id: LIST,
            type_id: TypeId::default(),
        },
        axis,
        BoxModel::from_rect(Rect::from_points(Point::ZERO, axis.point(360.0, 50.0))),
        None,
        DroppableFlags::default(),
    ));
    for i in 0..3 {
        // Margin boxes are 120 long and touch each other.
        let start = 10.0 + 120.0 * i as f64;
        let border_box =
            Rect::from_points(axis.point(start, 0.0), axis.point(start + 100.0, 50.0));
        map.insert_draggable(DraggableDimension::new(
            DraggableDescriptor {
                id: DraggableId(i as u64),
                index: i,
                droppable_id: LIST,
                type_id: TypeId::default(),
            },
            BoxModel::from_border_box(border_box, margin, Spacing::ZERO, Spacing::ZERO),
        ));
    }
    map
}

fn viewport() -> Viewport {
    Viewport::new(Size::new(1000.0, 1000.0), Vec2::ZERO, Vec2::ZERO)
}

fn lift_first(map: &DimensionMap) -> LiftEffect {
    let critical = map.critical(DraggableId(0)).unwrap();
    get_lift_effect(&critical, map, &viewport()).unwrap()
}

fn settle(
    map: &DimensionMap,
    lift: &LiftEffect,
    main: f64,
    axis: Axis,
) -> (Vec<u64>, Option<usize>, Point) {
    let impact = get_drag_impact(&ImpactArgs {
        page_border_box_center: axis.point(main, 25.0),
        draggable_id: DraggableId(0),
        dimensions: map,
        on_lift: &lift.on_lift,
        previous: &lift.impact,
        viewport: &viewport(),
        config: &ImpactConfig::default(),
        allow_grouping: true,
    })
    .unwrap();
    let center = resting_center(&RestingArgs {
        impact: &impact,
        draggable: map.draggable(DraggableId(0)).unwrap(),
        dimensions: map,
        on_lift: &lift.on_lift,
    })
    .unwrap();
    let ids = impact
        .movement
        .displaced
        .iter()
        .map(|d| d.draggable_id.0)
        .collect();
    (ids, impact.destination().map(|d| d.index), center)
}

#[test]
fn dragging_past_the_second_item_takes_its_slot() {
    for axis in [Axis::Vertical, Axis::Horizontal] {
        let map = three_items(axis);
        let lift = lift_first(&map);
        assert_eq!(lift.impact.closest_displaced(), Some(DraggableId(1)));

        // Item 1's center is at 180 and item 2's at 300.
        let (displaced, index, center) = settle(&map, &lift, 230.0, axis);
        assert_eq!(displaced, [2], "only the last item stays shifted on {axis:?}");
        assert_eq!(index, Some(1));
        // Item 1 slides back to 10..110 and the dragged item fills 130..230,
        // immediately before item 2's measured box at 250..350.
        assert_eq!(center, axis.point(180.0, 25.0));
    }
}

#[test]
fn dragging_to_the_end_displaces_nothing() {
    for axis in [Axis::Vertical, Axis::Horizontal] {
        let map = three_items(axis);
        let lift = lift_first(&map);
        let (displaced, index, center) = settle(&map, &lift, 340.0, axis);
        assert!(displaced.is_empty());
        assert_eq!(index, Some(2));
        // Item 2 slides back to 130..230; the dragged item follows it at 250..350.
        assert_eq!(center, axis.point(300.0, 25.0));
    }
}

#[test]
fn staying_put_keeps_everything_in_place() {
    let map = three_items(Axis::Vertical);
    let lift = lift_first(&map);
    let (displaced, index, center) = settle(&map, &lift, 60.0, Axis::Vertical);
    assert_eq!(displaced, [1, 2]);
    assert_eq!(index, Some(0));
    assert_eq!(center, Point::new(25.0, 60.0));
}
