// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_reorder --heading-base-level=0

//! Understory Reorder: deterministic impact math for reorderable containers.
//!
//! ## Overview
//!
//! This crate answers one question per movement tick of a drag: given where the dragged item
//! is, which items move out of its way and where would it land?
//! It works purely on boxes measured once when the drag starts. It does not measure, render,
//! or animate anything.
//!
//! ## Inputs
//!
//! - A [`DimensionMap`] holding a [`DraggableDimension`] for every item and a
//!   [`DroppableDimension`] for every container.
//! - The dragged item's current border-box center in page coordinates.
//! - The [`Viewport`], the [`OnLift`] state from [`get_lift_effect`], and the previous
//!   [`DragImpact`].
//!
//! ## Outputs
//!
//! - [`get_drag_impact`] returns a [`DragImpact`]: the displaced items plus an
//!   [`ImpactLocation`], either a reorder slot or a merge target.
//! - [`resting_offset`] turns an impact into the vector from the item's original center to
//!   where it would settle, for drop animations and previews.
//!
//! ## Displacement
//!
//! Displaced items always form a suffix of the destination's ordered items. An item is
//! displaced while the dragged center is before its boundary, the midpoint between its resting
//! and displaced positions. See [`displacement`] for the full rule.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect, Size, Vec2};
//! use understory_box_model::{Axis, BoxModel};
//! use understory_reorder::{
//!     DimensionMap, DraggableDescriptor, DraggableDimension, DraggableId, DroppableDescriptor,
//!     DroppableDimension, DroppableFlags, DroppableId, ImpactArgs, ImpactConfig, TypeId,
//!     Viewport, get_drag_impact, get_lift_effect,
//! };
//!
//! let list = DroppableId(1);
//! let mut map = DimensionMap::new().with_droppable(DroppableDimension::new(
//!     DroppableDescriptor { id: list, type_id: TypeId::default() },
//!     Axis::Vertical,
//!     BoxModel::from_rect(Rect::new(0.0, 0.0, 200.0, 300.0)),
//!     None,
//!     DroppableFlags::default(),
//! ));
//! for i in 0..3_u64 {
//!     let y = i as f64 * 100.0;
//!     map.insert_draggable(DraggableDimension::new(
//!         DraggableDescriptor { id: DraggableId(i), index: i as usize, droppable_id: list, type_id: TypeId::default() },
//!         BoxModel::from_rect(Rect::new(0.0, y, 200.0, y + 100.0)),
//!     ));
//! }
//!
//! let viewport = Viewport::new(Size::new(800.0, 600.0), Vec2::ZERO, Vec2::ZERO);
//! let critical = map.critical(DraggableId(0)).unwrap();
//! let lift = get_lift_effect(&critical, &map, &viewport).unwrap();
//!
//! // Drag item 0 down past item 1.
//! let impact = get_drag_impact(&ImpactArgs {
//!     page_border_box_center: Point::new(100.0, 175.0),
//!     draggable_id: DraggableId(0),
//!     dimensions: &map,
//!     on_lift: &lift.on_lift,
//!     previous: &lift.impact,
//!     viewport: &viewport,
//!     config: &ImpactConfig::default(),
//!     allow_grouping: true,
//! })
//! .unwrap();
//! assert_eq!(impact.destination().map(|d| d.index), Some(1));
//! assert_eq!(impact.closest_displaced(), Some(DraggableId(2)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod dimensions;
pub mod displacement;
pub mod error;
pub mod impact;
pub mod resting;
pub mod types;
pub mod viewport;

pub use config::ImpactConfig;
pub use dimensions::DimensionMap;
pub use displacement::{DisplacedBy, Displacement, OnLift};
pub use error::DimensionError;
pub use impact::{
    DragImpact, DragMovement, DraggableLocation, GroupingImpact, GroupingTarget, ImpactArgs,
    ImpactLocation, LiftEffect, droppable_over, get_drag_impact, get_lift_effect,
};
pub use resting::{RestingArgs, resting_center, resting_offset};
pub use types::{
    Critical, DraggableDescriptor, DraggableDimension, DraggableId, DroppableDescriptor,
    DroppableDimension, DroppableFlags, DroppableId, FrameScroll, Placeholder, ScrollFrame,
    Subject, TypeId,
};
pub use viewport::{ScrollDiff, Viewport, ViewportScroll};
