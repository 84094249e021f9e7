// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sensors: input sources that drive a drag through the [`SensorApi`].
//!
//! A sensor claims the lock for one draggable, lifts it, reports movement, and finally drops
//! or cancels. Every report carries the sensor's [`DragLock`]; once the lock is released by
//! anyone else the sensor notices on its next event and quietly resets.
//!
//! Three sensors are provided:
//! - [`PointerSensor`]: press, then move past the sloppy-click threshold to start.
//! - [`KeyboardSensor`]: space lifts and drops, arrows step, escape cancels.
//! - [`ProgrammaticSensor`]: explicit calls, for scripted or assistive input.

use kurbo::{Point, Vec2};
use understory_reorder::DraggableId;

use crate::action::{Action, Direction, MovementMode};
use crate::config::DragConfig;
use crate::error::DragError;
use crate::lock::DragLock;
use crate::machine::DragEngine;
use crate::provider::DimensionProvider;

/// What a sensor may ask of the engine.
pub trait SensorApi {
    /// Claim the lock for `draggable_id`.
    ///
    /// Fails without side effects if the lock is held or the item may not be dragged.
    fn try_get_lock(&mut self, draggable_id: DraggableId) -> Result<DragLock, DragError>;

    /// Whether any sensor holds the lock.
    fn is_lock_claimed(&self) -> bool;

    /// Release the lock, abandoning any drag in progress.
    fn try_release_lock(&mut self);

    /// Whether `lock` is still the active claim.
    fn is_lock_active(&self, lock: &DragLock) -> bool;

    /// Start the drag.
    fn lift(
        &mut self,
        lock: &DragLock,
        client_selection: Option<Point>,
        mode: MovementMode,
    ) -> Result<(), DragError>;

    /// The pointer is now at `client`.
    fn report_move(&mut self, lock: &DragLock, client: Point) -> Result<(), DragError>;

    /// One keyboard step.
    fn report_step(&mut self, lock: &DragLock, direction: Direction) -> Result<(), DragError>;

    /// The window scrolled to `scroll`.
    fn report_window_scroll(&mut self, lock: &DragLock, scroll: Vec2) -> Result<(), DragError>;

    /// Drop at the current impact.
    fn report_drop(&mut self, lock: &DragLock) -> Result<(), DragError>;

    /// Cancel the drag.
    fn report_cancel(&mut self, lock: &DragLock) -> Result<(), DragError>;
}

impl<P: DimensionProvider> SensorApi for DragEngine<P> {
    fn try_get_lock(&mut self, draggable_id: DraggableId) -> Result<DragLock, DragError> {
        self.claim(draggable_id)
    }

    fn is_lock_claimed(&self) -> bool {
        DragEngine::is_lock_claimed(self)
    }

    fn try_release_lock(&mut self) {
        self.release();
    }

    fn is_lock_active(&self, lock: &DragLock) -> bool {
        DragEngine::is_lock_active(self, lock)
    }

    fn lift(
        &mut self,
        lock: &DragLock,
        client_selection: Option<Point>,
        mode: MovementMode,
    ) -> Result<(), DragError> {
        self.dispatch_as(
            lock,
            Action::Lift {
                client_selection,
                mode,
            },
        )
    }

    fn report_move(&mut self, lock: &DragLock, client: Point) -> Result<(), DragError> {
        self.dispatch_as(lock, Action::Move { client })
    }

    fn report_step(&mut self, lock: &DragLock, direction: Direction) -> Result<(), DragError> {
        self.dispatch_as(lock, Action::step(direction))
    }

    fn report_window_scroll(&mut self, lock: &DragLock, scroll: Vec2) -> Result<(), DragError> {
        self.dispatch_as(lock, Action::MoveByWindowScroll { scroll })
    }

    fn report_drop(&mut self, lock: &DragLock) -> Result<(), DragError> {
        self.dispatch_as(lock, Action::Drop)
    }

    fn report_cancel(&mut self, lock: &DragLock) -> Result<(), DragError> {
        self.dispatch_as(lock, Action::Cancel)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
enum PointerPhase {
    #[default]
    Idle,
    Pending {
        lock: DragLock,
        origin: Point,
    },
    Dragging {
        lock: DragLock,
    },
}

/// Mouse or touch input.
///
/// A press claims the lock but does not lift: the drag only starts once the pointer has
/// travelled at least the sloppy-click threshold on either axis. Releasing before that is a
/// click, and frees the lock.
#[derive(Clone, Debug)]
pub struct PointerSensor {
    threshold: f64,
    phase: PointerPhase,
}

impl Default for PointerSensor {
    fn default() -> Self {
        Self::new(DragConfig::DEFAULT_SLOPPY_CLICK_THRESHOLD)
    }
}

impl PointerSensor {
    /// A sensor that starts dragging after `threshold` units of travel.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            phase: PointerPhase::Idle,
        }
    }

    /// A sensor using the configured threshold.
    pub fn from_config(config: &DragConfig) -> Self {
        Self::new(config.sloppy_click_threshold)
    }

    /// Whether a press is waiting to become a drag.
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, PointerPhase::Pending { .. })
    }

    /// Whether this sensor is driving a drag.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, PointerPhase::Dragging { .. })
    }

    /// Primary button pressed on `draggable_id` at `client`.
    ///
    /// Returns `Ok(false)` if this sensor is already busy.
    pub fn on_pointer_down(
        &mut self,
        api: &mut impl SensorApi,
        draggable_id: DraggableId,
        client: Point,
    ) -> Result<bool, DragError> {
        self.sync(&*api);
        if self.phase != PointerPhase::Idle {
            return Ok(false);
        }
        let lock = api.try_get_lock(draggable_id)?;
        self.phase = PointerPhase::Pending {
            lock,
            origin: client,
        };
        Ok(true)
    }

    /// Pointer moved to `client`.
    pub fn on_pointer_move(
        &mut self,
        api: &mut impl SensorApi,
        client: Point,
    ) -> Result<(), DragError> {
        self.sync(&*api);
        match self.phase {
            PointerPhase::Idle => Ok(()),
            PointerPhase::Pending { lock, origin } => {
                if !self.exceeds_threshold(origin, client) {
                    return Ok(());
                }
                self.phase = PointerPhase::Dragging { lock };
                let result = api
                    .lift(&lock, Some(origin), MovementMode::Fluid)
                    .and_then(|()| api.report_move(&lock, client));
                self.reset_on_error(result)
            }
            PointerPhase::Dragging { lock } => {
                let result = api.report_move(&lock, client);
                self.reset_on_error(result)
            }
        }
    }

    /// Primary button released.
    pub fn on_pointer_up(&mut self, api: &mut impl SensorApi) -> Result<(), DragError> {
        self.sync(&*api);
        match core::mem::take(&mut self.phase) {
            PointerPhase::Idle => Ok(()),
            PointerPhase::Pending { .. } => {
                api.try_release_lock();
                Ok(())
            }
            PointerPhase::Dragging { lock } => api.report_drop(&lock),
        }
    }

    /// The window scrolled while the pointer is down.
    pub fn on_window_scroll(
        &mut self,
        api: &mut impl SensorApi,
        scroll: Vec2,
    ) -> Result<(), DragError> {
        self.sync(&*api);
        match self.phase {
            PointerPhase::Dragging { lock } => {
                let result = api.report_window_scroll(&lock, scroll);
                self.reset_on_error(result)
            }
            _ => Ok(()),
        }
    }

    /// The host interrupted the interaction, e.g. on escape or window blur.
    pub fn on_cancel(&mut self, api: &mut impl SensorApi) -> Result<(), DragError> {
        self.sync(&*api);
        match core::mem::take(&mut self.phase) {
            PointerPhase::Idle => Ok(()),
            PointerPhase::Pending { .. } => {
                api.try_release_lock();
                Ok(())
            }
            PointerPhase::Dragging { lock } => api.report_cancel(&lock),
        }
    }

    fn exceeds_threshold(&self, origin: Point, client: Point) -> bool {
        let d = client - origin;
        let t = self.threshold;
        d.x >= t || d.x <= -t || d.y >= t || d.y <= -t
    }

    fn sync(&mut self, api: &impl SensorApi) {
        let lock = match self.phase {
            PointerPhase::Idle => return,
            PointerPhase::Pending { lock, .. } | PointerPhase::Dragging { lock } => lock,
        };
        if !api.is_lock_active(&lock) {
            tracing::debug!(draggable = ?lock.draggable_id(), "pointer sensor lost its lock");
            self.phase = PointerPhase::Idle;
        }
    }

    fn reset_on_error(&mut self, result: Result<(), DragError>) -> Result<(), DragError> {
        if result.is_err() {
            self.phase = PointerPhase::Idle;
        }
        result
    }
}

/// Keys the [`KeyboardSensor`] understands.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// Lift or drop.
    Space,
    /// Cancel.
    Escape,
    /// Step up.
    ArrowUp,
    /// Step down.
    ArrowDown,
    /// Step left.
    ArrowLeft,
    /// Step right.
    ArrowRight,
    /// Anything else.
    Other,
}

impl Key {
    fn direction(self) -> Option<Direction> {
        match self {
            Self::ArrowUp => Some(Direction::Up),
            Self::ArrowDown => Some(Direction::Down),
            Self::ArrowLeft => Some(Direction::Left),
            Self::ArrowRight => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Keyboard input in snap mode.
#[derive(Clone, Debug, Default)]
pub struct KeyboardSensor {
    lock: Option<DragLock>,
}

impl KeyboardSensor {
    /// Create an idle sensor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this sensor is driving a drag.
    pub fn is_dragging(&self) -> bool {
        self.lock.is_some()
    }

    /// `key` was pressed while `focused` had focus.
    ///
    /// Returns whether the key was consumed.
    pub fn on_key(
        &mut self,
        api: &mut impl SensorApi,
        focused: DraggableId,
        key: Key,
    ) -> Result<bool, DragError> {
        if let Some(lock) = self.lock
            && !api.is_lock_active(&lock)
        {
            tracing::debug!(draggable = ?lock.draggable_id(), "keyboard sensor lost its lock");
            self.lock = None;
        }

        let Some(lock) = self.lock else {
            if key != Key::Space {
                return Ok(false);
            }
            let lock = api.try_get_lock(focused)?;
            api.lift(&lock, None, MovementMode::Snap)?;
            self.lock = Some(lock);
            return Ok(true);
        };

        let result = match key {
            Key::Space => {
                self.lock = None;
                api.report_drop(&lock)
            }
            Key::Escape => {
                self.lock = None;
                api.report_cancel(&lock)
            }
            Key::Other => return Ok(false),
            arrow => match arrow.direction() {
                Some(direction) => api.report_step(&lock, direction),
                None => return Ok(false),
            },
        };
        if result.is_err() {
            self.lock = None;
        }
        result.map(|()| true)
    }
}

/// Drives a drag from code.
#[derive(Clone, Debug, Default)]
pub struct ProgrammaticSensor {
    lock: Option<DragLock>,
}

impl ProgrammaticSensor {
    /// Create an idle sensor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this sensor still holds an active lock.
    pub fn is_active(&self, api: &impl SensorApi) -> bool {
        self.lock.is_some_and(|lock| api.is_lock_active(&lock))
    }

    /// Claim the lock for `draggable_id`.
    pub fn try_start(
        &mut self,
        api: &mut impl SensorApi,
        draggable_id: DraggableId,
    ) -> Result<(), DragError> {
        if self.is_active(&*api) {
            return Err(DragError::LockAlreadyClaimed);
        }
        self.lock = Some(api.try_get_lock(draggable_id)?);
        Ok(())
    }

    /// Lift the claimed item.
    pub fn lift(
        &mut self,
        api: &mut impl SensorApi,
        client_selection: Option<Point>,
        mode: MovementMode,
    ) -> Result<(), DragError> {
        let lock = self.active_lock(&*api)?;
        let result = api.lift(&lock, client_selection, mode);
        self.forget_on_error(result)
    }

    /// Move the pointer to `client`.
    pub fn move_to(&mut self, api: &mut impl SensorApi, client: Point) -> Result<(), DragError> {
        let lock = self.active_lock(&*api)?;
        let result = api.report_move(&lock, client);
        self.forget_on_error(result)
    }

    /// Take one step.
    pub fn step(
        &mut self,
        api: &mut impl SensorApi,
        direction: Direction,
    ) -> Result<(), DragError> {
        let lock = self.active_lock(&*api)?;
        let result = api.report_step(&lock, direction);
        self.forget_on_error(result)
    }

    /// Drop. The sensor is finished afterwards.
    pub fn drop_item(&mut self, api: &mut impl SensorApi) -> Result<(), DragError> {
        let lock = self.active_lock(&*api)?;
        self.lock = None;
        api.report_drop(&lock)
    }

    /// Cancel. The sensor is finished afterwards.
    pub fn cancel(&mut self, api: &mut impl SensorApi) -> Result<(), DragError> {
        let lock = self.active_lock(&*api)?;
        self.lock = None;
        api.report_cancel(&lock)
    }

    fn active_lock(&mut self, api: &impl SensorApi) -> Result<DragLock, DragError> {
        match self.lock {
            Some(lock) if api.is_lock_active(&lock) => Ok(lock),
            Some(_) => {
                self.lock = None;
                Err(DragError::StaleLock)
            }
            None => Err(DragError::NoActiveDrag),
        }
    }

    fn forget_on_error(&mut self, result: Result<(), DragError>) -> Result<(), DragError> {
        if result.is_err() {
            self.lock = None;
        }
        result
    }
}
