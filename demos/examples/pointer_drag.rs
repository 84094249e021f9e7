// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer drag between two lists.
//!
//! A pointer press on the first list becomes a drag once it passes the sloppy-click
//! threshold, then carries the item into a second list. Each step prints what both lists
//! should render, including the placeholder the foreign list reserves.
//!
//! Run:
//! - `cargo run -p understory_demos --example pointer_drag`

use kurbo::{Point, Rect, Size, Vec2};
use tracing_subscriber::EnvFilter;
use understory_box_model::{Axis, BoxModel};
use understory_drag::{
    Action, DimensionSnapshot, DragConfig, DragEngine, LockManager, PointerSensor,
    StaticDimensions, droppable_view,
};
use understory_reorder::{
    DimensionMap, DraggableDescriptor, DraggableDimension, DraggableId, DroppableDescriptor,
    DroppableDimension, DroppableFlags, DroppableId, TypeId, Viewport,
};

const BACKLOG: DroppableId = DroppableId(1);
const DONE: DroppableId = DroppableId(2);

fn column(id: DroppableId, x: f64, items: &[u64], map: &mut DimensionMap) {
    map.insert_droppable(DroppableDimension::new(
        DroppableDescriptor {
            id,
            type_id: TypeId::default(),
        },
        Axis::Vertical,
        BoxModel::from_rect(Rect::new(x, 0.0, x + 200.0, 400.0)),
        None,
        DroppableFlags::default(),
    ));
    for (index, &item) in items.iter().enumerate() {
        let y = 60.0 * index as f64;
        map.insert_draggable(DraggableDimension::new(
            DraggableDescriptor {
                id: DraggableId(item),
                index,
                droppable_id: id,
                type_id: TypeId::default(),
            },
            BoxModel::from_rect(Rect::new(x, y, x + 200.0, y + 60.0)),
        ));
    }
}

fn report<P: understory_drag::DimensionProvider>(label: &str, engine: &DragEngine<P>) {
    println!("{label}: phase={:?}", engine.phase());
    for (name, id) in [("backlog", BACKLOG), ("done", DONE)] {
        let view = droppable_view(engine.state(), id, false);
        println!(
            "  {name}: over={} with={:?} placeholder={:?}",
            view.is_dragging_over,
            view.dragging_over_with,
            view.placeholder.map(|p| p.border_box_size),
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut dimensions = DimensionMap::new();
    column(BACKLOG, 0.0, &[1, 2, 3], &mut dimensions);
    column(DONE, 300.0, &[4, 5], &mut dimensions);
    let viewport = Viewport::new(Size::new(800.0, 600.0), Vec2::ZERO, Vec2::ZERO);
    let provider = StaticDimensions::new(
        DimensionSnapshot {
            dimensions,
            viewport,
        },
        Size::new(800.0, 600.0),
    );
    let config = DragConfig {
        preview_resting: true,
        ..DragConfig::default()
    };
    let mut engine = DragEngine::new(provider, LockManager::new(), config);
    let mut pointer = PointerSensor::from_config(&config);

    let grab = Point::new(100.0, 30.0);
    pointer
        .on_pointer_down(&mut engine, DraggableId(1), grab)
        .expect("lock is free");
    report("pressed", &engine);

    for client in [
        Point::new(102.0, 31.0),
        Point::new(160.0, 40.0),
        Point::new(400.0, 50.0),
        Point::new(400.0, 100.0),
    ] {
        pointer
            .on_pointer_move(&mut engine, client)
            .expect("move");
        report(&format!("moved to {client:?}"), &engine);
        if let Some(preview) = engine.preview_offset() {
            println!("  would settle at offset {preview:?}");
        }
    }

    pointer.on_pointer_up(&mut engine).expect("drop");
    report("released", &engine);
    if engine.resting_offset().is_some() {
        engine
            .dispatch(Action::DropAnimationFinished)
            .expect("finish animation");
    }

    if let Some(result) = engine.completed() {
        println!(
            "Moved {:?} from {:?} to {:?}",
            result.draggable_id, result.source, result.destination
        );
    }
}
