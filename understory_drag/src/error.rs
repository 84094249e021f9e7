// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised by the drag engine.

use thiserror::Error;
use understory_reorder::{DimensionError, DraggableId};

use crate::state::Phase;

/// Why a drag operation was refused or aborted.
///
/// Apart from [`StaleLock`](Self::StaleLock) and [`LockAlreadyClaimed`](Self::LockAlreadyClaimed),
/// which are reported to the caller without touching the current drag, every error returned
/// from [`DragEngine::dispatch`](crate::DragEngine::dispatch) has already aborted the drag
/// and released the lock.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum DragError {
    /// Another sensor holds the lock.
    #[error("the drag lock is already claimed")]
    LockAlreadyClaimed,
    /// The action needs a drag but the engine is idle.
    #[error("no drag is in progress")]
    NoActiveDrag,
    /// The lock handle was released or replaced.
    #[error("the drag lock is no longer held by this handle")]
    StaleLock,
    /// The action does not apply in the current phase.
    #[error("`{action}` is not valid while {phase:?}")]
    InvalidPhase {
        /// Name of the rejected action.
        action: &'static str,
        /// Phase the engine was in.
        phase: Phase,
    },
    /// The dimension provider refused to start a drag for this item.
    #[error("draggable {0:?} cannot start a drag")]
    DraggableDisabled(DraggableId),
    /// A required measurement was missing.
    #[error(transparent)]
    Dimension(#[from] DimensionError),
}
