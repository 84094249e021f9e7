// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag phases and the data each phase carries.

use alloc::boxed::Box;
use kurbo::{Point, Vec2};
use understory_reorder::{
    Critical, DimensionMap, DragImpact, DraggableId, DraggableLocation, GroupingTarget, OnLift,
    Viewport,
};

use crate::action::MovementMode;
use crate::lock::DragLock;

/// Coarse phase of the state machine.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Nothing is happening.
    Idle,
    /// A sensor holds the lock but the drag has not started.
    Pending,
    /// The item is moving.
    Dragging,
    /// The item is animating to its resting position.
    DropAnimating,
    /// Idle, holding the result of the last drag.
    DropComplete,
}

/// Why a drag ended.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DropReason {
    /// The user dropped the item.
    Drop,
    /// The drag was cancelled and the item went home.
    Cancel,
}

/// Outcome of a finished drag.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropResult {
    /// The dragged item.
    pub draggable_id: DraggableId,
    /// Where it started.
    pub source: DraggableLocation,
    /// Where it was reordered to, if anywhere.
    pub destination: Option<DraggableLocation>,
    /// What it was merged with, if anything.
    pub grouping_with: Option<GroupingTarget>,
    /// How the drag ended.
    pub reason: DropReason,
}

/// Sensor-side positions in client coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ClientPositions {
    /// Where the sensor is.
    pub selection: Point,
    /// Center of the dragged item's border box.
    pub border_box_center: Point,
    /// How far the item has moved from where it started.
    pub offset: Vec2,
}

/// Initial and current client positions of a drag.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragPositions {
    /// Positions at lift.
    pub initial: ClientPositions,
    /// Positions now.
    pub current: ClientPositions,
}

impl DragPositions {
    /// Positions at rest on `selection` and `border_box_center`.
    pub fn at(selection: Point, border_box_center: Point) -> Self {
        let p = ClientPositions {
            selection,
            border_box_center,
            offset: Vec2::ZERO,
        };
        Self {
            initial: p,
            current: p,
        }
    }

    /// Move so the item has moved `offset` from where it started.
    #[must_use]
    pub fn with_offset(&self, offset: Vec2) -> Self {
        Self {
            initial: self.initial,
            current: ClientPositions {
                selection: self.initial.selection + offset,
                border_box_center: self.initial.border_box_center + offset,
                offset,
            },
        }
    }

    /// Page-space center of the dragged item under `viewport`.
    pub fn page_border_box_center(&self, viewport: &Viewport) -> Point {
        viewport.client_to_page(self.current.border_box_center)
    }
}

/// A lock is held but the drag has not started.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PendingState {
    /// The claim.
    pub lock: DragLock,
}

/// An active drag.
#[derive(Clone, Debug)]
pub struct DraggingState {
    /// The claim.
    pub lock: DragLock,
    /// The lifted pair.
    pub critical: Critical,
    /// Pointer or keyboard.
    pub mode: MovementMode,
    /// Measurements taken at lift.
    pub dimensions: DimensionMap,
    /// Window scroll bookkeeping.
    pub viewport: Viewport,
    /// Items displaced at lift.
    pub on_lift: OnLift,
    /// Client positions.
    pub positions: DragPositions,
    /// Latest impact.
    pub impact: DragImpact,
    /// Resting offset for the latest impact, when previews are enabled.
    pub preview: Option<Vec2>,
}

/// A drop animation in progress.
#[derive(Clone, Debug)]
pub struct DropPending {
    /// The claim, held until the animation finishes.
    pub lock: DragLock,
    /// The lifted pair.
    pub critical: Critical,
    /// Measurements taken at lift.
    pub dimensions: DimensionMap,
    /// Window scroll bookkeeping.
    pub viewport: Viewport,
    /// The impact the drop resolved to.
    pub impact: DragImpact,
    /// Client offset the item animates to.
    pub new_home_client_offset: Vec2,
    /// The result to publish when the animation finishes.
    pub result: DropResult,
}

/// Full state of the drag state machine.
#[derive(Clone, Debug)]
pub enum DragState {
    /// No drag. `completed` holds the last drag's result until the lock is next claimed.
    Idle {
        /// Result of the most recent drag.
        completed: Option<DropResult>,
    },
    /// Lock claimed, waiting for lift.
    Pending(PendingState),
    /// Dragging.
    Dragging(Box<DraggingState>),
    /// Animating a drop.
    DropAnimating(Box<DropPending>),
}

impl Default for DragState {
    fn default() -> Self {
        Self::Idle { completed: None }
    }
}

impl DragState {
    /// Coarse phase.
    pub fn phase(&self) -> Phase {
        match self {
            Self::Idle { completed: None } => Phase::Idle,
            Self::Idle { completed: Some(_) } => Phase::DropComplete,
            Self::Pending(_) => Phase::Pending,
            Self::Dragging(_) => Phase::Dragging,
            Self::DropAnimating(_) => Phase::DropAnimating,
        }
    }

    /// Whether movement actions apply.
    pub fn is_movement_allowed(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// The lock held by this state.
    pub fn lock(&self) -> Option<DragLock> {
        match self {
            Self::Idle { .. } => None,
            Self::Pending(p) => Some(p.lock),
            Self::Dragging(d) => Some(d.lock),
            Self::DropAnimating(d) => Some(d.lock),
        }
    }

    /// The lifted pair, once dragging.
    pub fn critical(&self) -> Option<&Critical> {
        match self {
            Self::Dragging(d) => Some(&d.critical),
            Self::DropAnimating(d) => Some(&d.critical),
            _ => None,
        }
    }

    /// Measurements, once dragging.
    pub fn dimensions(&self) -> Option<&DimensionMap> {
        match self {
            Self::Dragging(d) => Some(&d.dimensions),
            Self::DropAnimating(d) => Some(&d.dimensions),
            _ => None,
        }
    }

    /// The current (or frozen) impact.
    pub fn impact(&self) -> Option<&DragImpact> {
        match self {
            Self::Dragging(d) => Some(&d.impact),
            Self::DropAnimating(d) => Some(&d.impact),
            _ => None,
        }
    }

    /// Window scroll bookkeeping.
    pub fn viewport(&self) -> Option<&Viewport> {
        match self {
            Self::Dragging(d) => Some(&d.viewport),
            Self::DropAnimating(d) => Some(&d.viewport),
            _ => None,
        }
    }

    /// Result of the last finished drag.
    pub fn completed(&self) -> Option<&DropResult> {
        match self {
            Self::Idle { completed } => completed.as_ref(),
            _ => None,
        }
    }
}
