// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised when a computation needs a measurement that was never recorded.

use thiserror::Error;

use crate::types::{DraggableId, DroppableId};

/// A required measurement is missing from the [`DimensionMap`](crate::DimensionMap).
///
/// These are integration errors: the measurement collaborator did not supply a box
/// the engine depends on. They are never recovered from within a drag.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum DimensionError {
    /// No dimension was recorded for the draggable.
    #[error("no dimension recorded for draggable {0:?}")]
    MissingDraggable(DraggableId),
    /// No dimension was recorded for the droppable.
    #[error("no dimension recorded for droppable {0:?}")]
    MissingDroppable(DroppableId),
    /// A scroll update targeted a droppable without a scroll frame.
    #[error("droppable {0:?} has no scroll frame")]
    NotScrollable(DroppableId),
}
