// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard drag.
//!
//! Drives the engine with a scripted key sequence: lift with space, step with the arrows,
//! drop with space. Set `RUST_LOG=understory_drag=trace` to watch every transition.
//!
//! Run:
//! - `cargo run -p understory_demos --example keyboard_drag`

use kurbo::{Rect, Size, Vec2};
use tracing_subscriber::EnvFilter;
use understory_box_model::{Axis, BoxModel};
use understory_drag::{
    DimensionSnapshot, DragConfig, DragEngine, Key, KeyboardSensor, LockManager,
    StaticDimensions,
};
use understory_reorder::{
    DimensionMap, DraggableDescriptor, DraggableDimension, DraggableId, DroppableDescriptor,
    DroppableDimension, DroppableFlags, DroppableId, TypeId, Viewport,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_target(false)
        .init();

    let list = DroppableId(1);
    let mut dimensions = DimensionMap::new().with_droppable(DroppableDimension::new(
        DroppableDescriptor {
            id: list,
            type_id: TypeId::default(),
        },
        Axis::Vertical,
        BoxModel::from_rect(Rect::new(0.0, 0.0, 300.0, 250.0)),
        None,
        DroppableFlags::default(),
    ));
    for i in 0..5_u64 {
        let y = 50.0 * i as f64;
        dimensions.insert_draggable(DraggableDimension::new(
            DraggableDescriptor {
                id: DraggableId(i),
                index: i as usize,
                droppable_id: list,
                type_id: TypeId::default(),
            },
            BoxModel::from_rect(Rect::new(0.0, y, 300.0, y + 50.0)),
        ));
    }
    let viewport = Viewport::new(Size::new(800.0, 600.0), Vec2::ZERO, Vec2::ZERO);
    let provider = StaticDimensions::new(
        DimensionSnapshot {
            dimensions,
            viewport,
        },
        Size::new(800.0, 600.0),
    );
    let mut engine = DragEngine::new(provider, LockManager::new(), DragConfig::default());
    let mut keyboard = KeyboardSensor::new();

    let focused = DraggableId(1);
    let script = [
        Key::Space,
        Key::ArrowDown,
        Key::ArrowDown,
        Key::ArrowUp,
        Key::ArrowDown,
        Key::Space,
    ];
    println!("== Moving item 1 with the keyboard ==");
    for key in script {
        match keyboard.on_key(&mut engine, focused, key) {
            Ok(consumed) => println!(
                "  {key:?}: consumed={consumed} phase={:?} index={:?}",
                engine.phase(),
                engine
                    .impact()
                    .and_then(|i| i.destination())
                    .map(|d| d.index),
            ),
            Err(err) => println!("  {key:?}: {err}"),
        }
    }

    if let Some(result) = engine.completed() {
        println!(
            "Dropped {:?}: {} -> {:?}",
            result.draggable_id,
            result.source.index,
            result.destination.map(|d| d.index)
        );
    }
}
