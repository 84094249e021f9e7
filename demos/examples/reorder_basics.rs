// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Impact basics.
//!
//! Lifts the first of four rows and sweeps its center down the list, printing which rows
//! move out of the way, the slot a drop would land in, and where the row would settle.
//!
//! Run:
//! - `cargo run -p understory_demos --example reorder_basics`

use kurbo::{Point, Rect, Size, Vec2};
use understory_box_model::{Axis, BoxModel, Spacing};
use understory_reorder::{
    DimensionMap, DraggableDescriptor, DraggableDimension, DraggableId, DroppableDescriptor,
    DroppableDimension, DroppableFlags, DroppableId, ImpactArgs, ImpactConfig, RestingArgs,
    TypeId, Viewport, get_drag_impact, get_lift_effect, resting_center,
};

fn main() {
    let list = DroppableId(1);
    let mut map = DimensionMap::new().with_droppable(DroppableDimension::new(
        DroppableDescriptor {
            id: list,
            type_id: TypeId::default(),
        },
        Axis::Vertical,
        BoxModel::from_rect(Rect::new(0.0, 0.0, 240.0, 240.0)),
        None,
        DroppableFlags::default(),
    ));
    // Rows are 40px tall with 10px margins above and below.
    for i in 0..4_u64 {
        let y = 10.0 + 60.0 * i as f64;
        map.insert_draggable(DraggableDimension::new(
            DraggableDescriptor {
                id: DraggableId(i),
                index: i as usize,
                droppable_id: list,
                type_id: TypeId::default(),
            },
            BoxModel::from_border_box(
                Rect::new(0.0, y, 240.0, y + 40.0),
                Spacing::new(10.0, 0.0, 10.0, 0.0),
                Spacing::ZERO,
                Spacing::ZERO,
            ),
        ));
    }

    let viewport = Viewport::new(Size::new(800.0, 600.0), Vec2::ZERO, Vec2::ZERO);
    let config = ImpactConfig::default();
    let dragged = DraggableId(0);
    let critical = map.critical(dragged).expect("item 0 and its list are measured");
    let lift = get_lift_effect(&critical, &map, &viewport).expect("lift");
    let mut previous = lift.impact.clone();

    println!("== Sweeping row 0 down the list ==");
    for step in 0..=6 {
        let y = 30.0 + 35.0 * f64::from(step);
        let impact = get_drag_impact(&ImpactArgs {
            page_border_box_center: Point::new(120.0, y),
            draggable_id: dragged,
            dimensions: &map,
            on_lift: &lift.on_lift,
            previous: &previous,
            viewport: &viewport,
            config: &config,
            allow_grouping: true,
        })
        .expect("impact");
        let rest = resting_center(&RestingArgs {
            impact: &impact,
            draggable: map.draggable(dragged).expect("dragged row"),
            dimensions: &map,
            on_lift: &lift.on_lift,
        })
        .expect("resting center");
        let displaced: Vec<u64> = impact
            .movement
            .displaced
            .iter()
            .map(|d| d.draggable_id.0)
            .collect();
        let animating = impact
            .movement
            .displaced
            .iter()
            .filter(|d| d.should_animate)
            .count();
        println!(
            "  center y={y:>5.1}  index={:?}  displaced={displaced:?} ({animating} animating)  rests at y={:.1}",
            impact.destination().map(|d| d.index),
            rest.y,
        );
        previous = impact;
    }
}
