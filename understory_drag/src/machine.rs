// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag state machine.
//!
//! ## Phases
//!
//! `Idle → Pending → Dragging → DropAnimating → Idle`
//!
//! - A sensor claims the lock: `Idle → Pending`.
//! - [`Action::Lift`] measures everything and computes the first impact: `Pending → Dragging`.
//! - Movement actions recompute the impact: `Dragging → Dragging`.
//! - [`Action::Drop`] or [`Action::Cancel`] freeze the impact and compute where the item
//!   settles: `Dragging → DropAnimating`, or straight to `Idle` when the item is already there.
//! - [`Action::DropAnimationFinished`]: `DropAnimating → Idle`, publishing the [`DropResult`].
//!
//! Releasing the lock returns to `Idle` from any phase.
//!
//! ## Errors
//!
//! Any error while applying an action aborts the drag: the state returns to `Idle`, the lock
//! is released, and the error is logged and returned. A transition either completes or leaves
//! nothing behind.
//!
//! ## Scroll correction
//!
//! After each action the [scroll coordinator](crate::scroll) checks whether the window's
//! maximum scroll changed, and if so applies [`Action::UpdateViewportMaxScroll`] before
//! `dispatch` returns.

use alloc::boxed::Box;
use core::mem;
use kurbo::{Point, Vec2};
use understory_box_model::position::is_equal;
use understory_reorder::{
    Critical, DimensionMap, DragImpact, DraggableDimension, DraggableId, DraggableLocation,
    ImpactArgs, RestingArgs, Viewport, get_drag_impact, get_lift_effect, resting_offset,
};

use crate::action::{Action, Direction, MovementMode};
use crate::config::DragConfig;
use crate::error::DragError;
use crate::lock::{DragLock, LockManager};
use crate::provider::DimensionProvider;
use crate::scroll::{MovementSnapshot, get_new_max_scroll};
use crate::state::{
    DragPositions, DragState, DraggingState, DropPending, DropReason, DropResult, PendingState,
    Phase,
};
use crate::validation::validate_dimensions;

/// Drives one drag at a time over measurements supplied by `P`.
#[derive(Debug)]
pub struct DragEngine<P> {
    provider: P,
    locks: LockManager,
    config: DragConfig,
    state: DragState,
}

impl<P: DimensionProvider> DragEngine<P> {
    /// Create an idle engine.
    pub fn new(provider: P, locks: LockManager, config: DragConfig) -> Self {
        Self {
            provider,
            locks,
            config,
            state: DragState::default(),
        }
    }

    /// Full state.
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Coarse phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// The lifted pair, while dragging or dropping.
    pub fn critical(&self) -> Option<&Critical> {
        self.state.critical()
    }

    /// The current impact, while dragging or dropping.
    pub fn impact(&self) -> Option<&DragImpact> {
        self.state.impact()
    }

    /// Window scroll bookkeeping, while dragging or dropping.
    pub fn viewport(&self) -> Option<&Viewport> {
        self.state.viewport()
    }

    /// Client offset the item is animating to, while dropping.
    pub fn resting_offset(&self) -> Option<Vec2> {
        match &self.state {
            DragState::DropAnimating(d) => Some(d.new_home_client_offset),
            _ => None,
        }
    }

    /// Page-space resting offset for the current impact, when previews are enabled.
    pub fn preview_offset(&self) -> Option<Vec2> {
        match &self.state {
            DragState::Dragging(d) => d.preview,
            _ => None,
        }
    }

    /// Result of the last finished drag, until the next lock is claimed.
    pub fn completed(&self) -> Option<&DropResult> {
        self.state.completed()
    }

    /// Engine tuning.
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// The measurement collaborator.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Mutable access to the measurement collaborator.
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// Claim the lock for `draggable_id`, moving to `Pending`.
    ///
    /// This clears the previous [`completed`](Self::completed) result.
    pub fn claim(&mut self, draggable_id: DraggableId) -> Result<DragLock, DragError> {
        if !self.provider.can_start_drag(draggable_id) {
            return Err(DragError::DraggableDisabled(draggable_id));
        }
        let lock = self.locks.try_claim(draggable_id)?;
        tracing::debug!(draggable = ?draggable_id, "lock claimed");
        self.state = DragState::Pending(PendingState { lock });
        Ok(lock)
    }

    /// Whether any sensor holds the lock.
    pub fn is_lock_claimed(&self) -> bool {
        self.locks.is_claimed()
    }

    /// Whether `lock` is the active claim.
    pub fn is_lock_active(&self, lock: &DragLock) -> bool {
        self.locks.is_active(lock)
    }

    /// Release the lock and return to `Idle`, discarding any drag in progress.
    pub fn release(&mut self) {
        if let Some(lock) = self.locks.force_release() {
            tracing::debug!(draggable = ?lock.draggable_id(), phase = ?self.phase(), "lock released");
        }
        if !matches!(self.state, DragState::Idle { .. }) {
            self.state = DragState::default();
        }
    }

    /// Apply `action` on behalf of the holder of `lock`.
    ///
    /// Stale handles are refused without disturbing the current drag.
    pub fn dispatch_as(&mut self, lock: &DragLock, action: Action) -> Result<(), DragError> {
        if !self.locks.is_active(lock) {
            return Err(DragError::StaleLock);
        }
        self.dispatch(action)
    }

    /// Apply `action`.
    pub fn dispatch(&mut self, action: Action) -> Result<(), DragError> {
        let previous = MovementSnapshot::of(&self.state);
        if let Err(err) = self.reduce(action) {
            self.abort(&action, err);
            return Err(err);
        }
        let document = self.provider.document_scroll_size();
        if let Some(max) = get_new_max_scroll(&previous, &self.state, &action, document) {
            tracing::debug!(?max, "viewport max scroll changed");
            let correction = Action::UpdateViewportMaxScroll { max };
            if let Err(err) = self.reduce(correction) {
                self.abort(&correction, err);
                return Err(err);
            }
        }
        Ok(())
    }

    fn abort(&mut self, action: &Action, err: DragError) {
        tracing::error!(action = action.name(), phase = ?self.phase(), error = %err, "drag aborted");
        self.release();
    }

    fn reduce(&mut self, action: Action) -> Result<(), DragError> {
        match self.phase() {
            Phase::Idle | Phase::DropComplete => Err(DragError::NoActiveDrag),
            Phase::Pending => self.reduce_pending(action),
            Phase::Dragging => self.reduce_dragging(action),
            Phase::DropAnimating => {
                match action {
                    Action::DropAnimationFinished => self.complete(),
                    Action::Cancel => self.release(),
                    // The item is already on its way home; late input has nothing to move.
                    _ => tracing::trace!(action = action.name(), "ignored while drop animating"),
                }
                Ok(())
            }
        }
    }

    fn reduce_pending(&mut self, action: Action) -> Result<(), DragError> {
        match action {
            Action::Lift {
                client_selection,
                mode,
            } => {
                let lock = self.state.lock().ok_or(DragError::NoActiveDrag)?;
                let dragging = self.lift(lock, client_selection, mode)?;
                self.state = DragState::Dragging(Box::new(dragging));
                Ok(())
            }
            // Released before the drag started: a click, not a drag.
            Action::Cancel | Action::Drop => {
                self.release();
                Ok(())
            }
            _ => Err(DragError::InvalidPhase {
                action: action.name(),
                phase: Phase::Pending,
            }),
        }
    }

    fn reduce_dragging(&mut self, action: Action) -> Result<(), DragError> {
        match action {
            Action::Drop => return self.finish(DropReason::Drop),
            Action::Cancel => return self.finish(DropReason::Cancel),
            _ => {}
        }
        let DragState::Dragging(d) = &mut self.state else {
            return Err(DragError::NoActiveDrag);
        };
        let d: &mut DraggingState = d;
        let config = &self.config;
        match action {
            Action::Move { client } => {
                let offset = client - d.positions.initial.selection;
                let positions = d.positions.with_offset(offset);
                let viewport = d.viewport;
                update_impact(d, positions, viewport, config)
            }
            Action::MoveUp | Action::MoveRight | Action::MoveDown | Action::MoveLeft => {
                let Some(direction) = action.direction() else {
                    return Ok(());
                };
                let step = keyboard_step(d, direction)?;
                let positions = d.positions.with_offset(d.positions.current.offset + step);
                let viewport = d.viewport;
                update_impact(d, positions, viewport, config)
            }
            Action::MoveByWindowScroll { scroll } => {
                let positions = d.positions;
                let viewport = d.viewport.scrolled(scroll);
                update_impact(d, positions, viewport, config)
            }
            Action::UpdateDroppableScroll {
                droppable_id,
                scroll,
            } => {
                let mut dimensions = d.dimensions.clone();
                dimensions.update_droppable_scroll(droppable_id, scroll)?;
                let impact = compute_impact(d, &dimensions, &d.positions, &d.viewport, config)?;
                let preview = compute_preview(d, &dimensions, &impact, config)?;
                d.dimensions = dimensions;
                d.impact = impact;
                d.preview = preview;
                Ok(())
            }
            Action::UpdateViewportMaxScroll { max } => {
                d.viewport = d.viewport.with_max_scroll(max);
                Ok(())
            }
            Action::Lift { .. }
            | Action::Drop
            | Action::Cancel
            | Action::DropAnimationFinished => Err(DragError::InvalidPhase {
                action: action.name(),
                phase: Phase::Dragging,
            }),
        }
    }

    fn lift(
        &mut self,
        lock: DragLock,
        client_selection: Option<Point>,
        mode: MovementMode,
    ) -> Result<DraggingState, DragError> {
        let draggable_id = lock.draggable_id();
        let snapshot = self.provider.collect(draggable_id)?;
        let dimensions = snapshot.dimensions;
        let viewport = snapshot.viewport;
        let critical = dimensions.critical(draggable_id)?;
        validate_dimensions(&critical, &dimensions);

        let lift = get_lift_effect(&critical, &dimensions, &viewport)?;
        let dragged = dimensions.require_draggable(draggable_id)?;
        let client_center = dragged.page.center() - viewport.scroll.current;
        let positions = DragPositions::at(client_selection.unwrap_or(client_center), client_center);
        let mut dragging = DraggingState {
            lock,
            critical,
            mode,
            dimensions,
            viewport,
            on_lift: lift.on_lift,
            positions,
            impact: lift.impact,
            preview: None,
        };
        dragging.preview =
            compute_preview(&dragging, &dragging.dimensions, &dragging.impact, &self.config)?;
        tracing::debug!(draggable = ?draggable_id, ?mode, "lifted");
        Ok(dragging)
    }

    /// Freeze the impact and move to `DropAnimating`, or straight to `Idle` if the item is
    /// already where it would settle.
    fn finish(&mut self, reason: DropReason) -> Result<(), DragError> {
        let DragState::Dragging(d) = &self.state else {
            return Err(DragError::NoActiveDrag);
        };
        let impact = match reason {
            DropReason::Drop => d.impact.clone(),
            DropReason::Cancel => get_lift_effect(&d.critical, &d.dimensions, &d.viewport)?.impact,
        };
        let dragged = d.dimensions.require_draggable(d.critical.draggable.id)?;
        let page_offset = match reason {
            DropReason::Drop => resting_offset(&RestingArgs {
                impact: &impact,
                draggable: dragged,
                dimensions: &d.dimensions,
                on_lift: &d.on_lift,
            })?,
            DropReason::Cancel => Vec2::ZERO,
        };
        let new_home_client_offset = page_offset - d.viewport.scroll.diff.value;
        let result = DropResult {
            draggable_id: d.critical.draggable.id,
            source: DraggableLocation {
                droppable_id: d.critical.droppable.id,
                index: d.critical.draggable.index,
            },
            destination: match reason {
                DropReason::Drop => impact.destination(),
                DropReason::Cancel => None,
            },
            grouping_with: match reason {
                DropReason::Drop => impact.group(),
                DropReason::Cancel => None,
            },
            reason,
        };

        if is_equal(new_home_client_offset, d.positions.current.offset) {
            let lock = d.lock;
            tracing::debug!(?result, "dropped in place");
            self.locks.release(&lock);
            self.state = DragState::Idle {
                completed: Some(result),
            };
            return Ok(());
        }

        let DragState::Dragging(d) = mem::take(&mut self.state) else {
            return Err(DragError::NoActiveDrag);
        };
        let DraggingState {
            lock,
            critical,
            dimensions,
            viewport,
            ..
        } = *d;
        tracing::debug!(?result, offset = ?new_home_client_offset, "drop animating");
        self.state = DragState::DropAnimating(Box::new(DropPending {
            lock,
            critical,
            dimensions,
            viewport,
            impact,
            new_home_client_offset,
            result,
        }));
        Ok(())
    }

    fn complete(&mut self) {
        let completed = match &self.state {
            DragState::DropAnimating(d) => {
                self.locks.release(&d.lock);
                Some(d.result)
            }
            _ => None,
        };
        tracing::debug!(result = ?completed, "drop complete");
        self.state = DragState::Idle { completed };
    }
}

/// Distance one keyboard step moves the dragged item: its margin box size along `direction`.
fn keyboard_step(d: &DraggingState, direction: Direction) -> Result<Vec2, DragError> {
    let dragged = d.dimensions.require_draggable(d.critical.draggable.id)?;
    let size = dragged.page.margin_box.size();
    let unit = direction.unit();
    Ok(Vec2::new(unit.x * size.width, unit.y * size.height))
}

fn compute_impact(
    d: &DraggingState,
    dimensions: &DimensionMap,
    positions: &DragPositions,
    viewport: &Viewport,
    config: &DragConfig,
) -> Result<DragImpact, DragError> {
    Ok(get_drag_impact(&ImpactArgs {
        page_border_box_center: positions.page_border_box_center(viewport),
        draggable_id: d.critical.draggable.id,
        dimensions,
        on_lift: &d.on_lift,
        previous: &d.impact,
        viewport,
        config: &config.impact,
        allow_grouping: d.mode == MovementMode::Fluid,
    })?)
}

fn compute_preview(
    d: &DraggingState,
    dimensions: &DimensionMap,
    impact: &DragImpact,
    config: &DragConfig,
) -> Result<Option<Vec2>, DragError> {
    if !config.preview_resting {
        return Ok(None);
    }
    let draggable: &DraggableDimension = dimensions.require_draggable(d.critical.draggable.id)?;
    Ok(Some(resting_offset(&RestingArgs {
        impact,
        draggable,
        dimensions,
        on_lift: &d.on_lift,
    })?))
}

/// Recompute the impact for new positions or a new viewport, committing only on success.
fn update_impact(
    d: &mut DraggingState,
    positions: DragPositions,
    viewport: Viewport,
    config: &DragConfig,
) -> Result<(), DragError> {
    let impact = compute_impact(d, &d.dimensions, &positions, &viewport, config)?;
    let preview = compute_preview(d, &d.dimensions, &impact, config)?;
    tracing::trace!(
        center = ?positions.page_border_box_center(&viewport),
        over = ?impact.droppable_over(),
        "moved"
    );
    d.positions = positions;
    d.viewport = viewport;
    d.impact = impact;
    d.preview = preview;
    Ok(())
}
