// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drag --heading-base-level=0

//! Understory Drag: a deterministic drag state machine for reorderable containers.
//!
//! ## Overview
//!
//! This crate owns the lifecycle of one drag: who may start it, what was measured when it
//! started, where the dragged item is now, and how it ends.
//! Impact math comes from `understory_reorder`; this crate decides when to run it and
//! publishes the results.
//!
//! ## Pieces
//!
//! - [`DragEngine`]: the state machine. Feed it [`Action`]s through
//!   [`dispatch`](DragEngine::dispatch); read back [`Phase`], the current impact, and the
//!   [`DropResult`] of the last drag.
//! - [`LockManager`]: the exclusive drag lock, owned by the engine.
//! - [`DimensionProvider`]: the host's measurement hook, called once per drag.
//! - Sensors: [`PointerSensor`], [`KeyboardSensor`], and [`ProgrammaticSensor`] drive the
//!   engine through the [`SensorApi`] trait.
//! - [`droppable_view`]: what each container should render while a drag is in flight.
//!
//! ## Lifecycle
//!
//! `Idle → Pending → Dragging → DropAnimating → Idle`. A drop that lands exactly where the
//! item already is skips the animation. Releasing the lock returns to `Idle` from anywhere.
//! Any error while applying an action aborts the drag and releases the lock, so a failed
//! transition never leaves a half-updated drag behind.
//!
//! ## Diagnostics
//!
//! The engine logs through `tracing`: phase changes at `debug`, each movement tick at
//! `trace`, non-consecutive indexes at `warn` (debug builds only), and aborts at `error`.
//! It never installs a subscriber.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Rect, Size, Vec2};
//! use understory_box_model::{Axis, BoxModel};
//! use understory_drag::{
//!     DimensionSnapshot, DragConfig, DragEngine, Key, KeyboardSensor, LockManager, Phase,
//!     StaticDimensions,
//! };
//! use understory_reorder::{
//!     DimensionMap, DraggableDescriptor, DraggableDimension, DraggableId, DroppableDescriptor,
//!     DroppableDimension, DroppableFlags, DroppableId, TypeId, Viewport,
//! };
//!
//! let list = DroppableId(1);
//! let mut dimensions = DimensionMap::new().with_droppable(DroppableDimension::new(
//!     DroppableDescriptor { id: list, type_id: TypeId::default() },
//!     Axis::Vertical,
//!     BoxModel::from_rect(Rect::new(0.0, 0.0, 200.0, 300.0)),
//!     None,
//!     DroppableFlags::default(),
//! ));
//! for i in 0..3_u64 {
//!     let y = i as f64 * 100.0;
//!     dimensions.insert_draggable(DraggableDimension::new(
//!         DraggableDescriptor { id: DraggableId(i), index: i as usize, droppable_id: list, type_id: TypeId::default() },
//!         BoxModel::from_rect(Rect::new(0.0, y, 200.0, y + 100.0)),
//!     ));
//! }
//! let viewport = Viewport::new(Size::new(800.0, 600.0), Vec2::ZERO, Vec2::ZERO);
//! let provider = StaticDimensions::new(DimensionSnapshot { dimensions, viewport }, Size::new(800.0, 600.0));
//! let mut engine = DragEngine::new(provider, LockManager::new(), DragConfig::default());
//!
//! // Lift the first item with the keyboard and move it down one slot.
//! let mut keyboard = KeyboardSensor::new();
//! keyboard.on_key(&mut engine, DraggableId(0), Key::Space).unwrap();
//! keyboard.on_key(&mut engine, DraggableId(0), Key::ArrowDown).unwrap();
//! assert_eq!(engine.impact().and_then(|i| i.destination()).map(|d| d.index), Some(1));
//!
//! // A keyboard step lands exactly on the slot, so the drop completes without animating.
//! keyboard.on_key(&mut engine, DraggableId(0), Key::Space).unwrap();
//! assert_eq!(engine.phase(), Phase::DropComplete);
//! assert_eq!(engine.completed().and_then(|r| r.destination).map(|d| d.index), Some(1));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod action;
pub mod config;
pub mod error;
pub mod lock;
pub mod machine;
pub mod provider;
pub mod scroll;
pub mod sensor;
pub mod state;
pub mod validation;
pub mod view;

pub use action::{Action, Direction, MovementMode};
pub use config::DragConfig;
pub use error::DragError;
pub use lock::{DragLock, LockManager, LockToken};
pub use machine::DragEngine;
pub use provider::{DimensionProvider, DimensionSnapshot, StaticDimensions};
pub use scroll::{MovementSnapshot, get_max_scroll, get_new_max_scroll};
pub use sensor::{Key, KeyboardSensor, PointerSensor, ProgrammaticSensor, SensorApi};
pub use state::{
    ClientPositions, DragPositions, DragState, DraggingState, DropPending, DropReason,
    DropResult, PendingState, Phase,
};
pub use validation::{IndexWarning, check_indexes_are_consecutive, validate_dimensions};
pub use view::{DroppableView, droppable_view};
