// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures: a home list of three 100px rows and a foreign list beside it.

#![allow(
    dead_code,
    unreachable_pub,
    reason = "each test binary uses a different subset of these fixtures"
)]

use kurbo::{Rect, Size, Vec2};
use understory_box_model::{Axis, BoxModel};
use understory_drag::{DimensionSnapshot, DragConfig, DragEngine, LockManager, StaticDimensions};
use understory_reorder::{
    DimensionMap, DraggableDescriptor, DraggableDimension, DraggableId, DroppableDescriptor,
    DroppableDimension, DroppableFlags, DroppableId, TypeId, Viewport,
};

pub const HOME: DroppableId = DroppableId(1);
pub const FOREIGN: DroppableId = DroppableId(2);
pub const WINDOW: Size = Size::new(800.0, 600.0);

pub fn list(id: DroppableId, x: f64) -> DroppableDimension {
    list_with_flags(id, x, DroppableFlags::default())
}

pub fn list_with_flags(id: DroppableId, x: f64, flags: DroppableFlags) -> DroppableDimension {
    DroppableDimension::new(
        DroppableDescriptor {
            id,
            type_id: TypeId::default(),
        },
        Axis::Vertical,
        BoxModel::from_rect(Rect::new(x, 0.0, x + 200.0, 300.0)),
        None,
        flags,
    )
}

pub fn row(
    id: u64,
    index: usize,
    droppable_id: DroppableId,
    slot: usize,
    x: f64,
) -> DraggableDimension {
    let y = slot as f64 * 100.0;
    DraggableDimension::new(
        DraggableDescriptor {
            id: DraggableId(id),
            index,
            droppable_id,
            type_id: TypeId::default(),
        },
        BoxModel::from_rect(Rect::new(x, y, x + 200.0, y + 100.0)),
    )
}

/// Items 0, 1, 2 in the home list at x = 0, and items 10, 11 in the foreign list at x = 300.
pub fn two_lists() -> DimensionMap {
    let mut map = DimensionMap::new()
        .with_droppable(list(HOME, 0.0))
        .with_droppable(list(FOREIGN, 300.0));
    for i in 0..3 {
        map.insert_draggable(row(i as u64, i, HOME, i, 0.0));
    }
    for i in 0..2 {
        map.insert_draggable(row(10 + i as u64, i, FOREIGN, i, 300.0));
    }
    map
}

/// The home list of [`two_lists`] on its own, with grouping enabled.
pub fn grouping_list() -> DimensionMap {
    let mut map = DimensionMap::new().with_droppable(list_with_flags(
        HOME,
        0.0,
        DroppableFlags::ENABLED | DroppableFlags::GROUPING,
    ));
    for i in 0..3 {
        map.insert_draggable(row(i as u64, i, HOME, i, 0.0));
    }
    map
}

pub fn viewport() -> Viewport {
    Viewport::new(WINDOW, Vec2::ZERO, Vec2::ZERO)
}

pub fn provider(dimensions: DimensionMap) -> StaticDimensions {
    StaticDimensions::new(
        DimensionSnapshot {
            dimensions,
            viewport: viewport(),
        },
        WINDOW,
    )
}

pub fn engine_with(dimensions: DimensionMap, config: DragConfig) -> DragEngine<StaticDimensions> {
    DragEngine::new(provider(dimensions), LockManager::new(), config)
}

pub fn engine() -> DragEngine<StaticDimensions> {
    engine_with(two_lists(), DragConfig::default())
}
