// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Actions accepted by the drag state machine.

use kurbo::{Point, Vec2};
use understory_reorder::DroppableId;

/// Direction of a keyboard step.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Towards smaller `y`.
    Up,
    /// Towards larger `x`.
    Right,
    /// Towards larger `y`.
    Down,
    /// Towards smaller `x`.
    Left,
}

impl Direction {
    /// Unit vector pointing this way.
    pub fn unit(self) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, -1.0),
            Self::Right => Vec2::new(1.0, 0.0),
            Self::Down => Vec2::new(0.0, 1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
        }
    }
}

/// How the dragged item follows its sensor.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovementMode {
    /// Follows a pointer continuously.
    #[default]
    Fluid,
    /// Moves in discrete keyboard steps.
    Snap,
}

/// One input to [`DragEngine::dispatch`](crate::DragEngine::dispatch).
///
/// Client coordinates are relative to the window; the engine converts them to page
/// coordinates with the current window scroll.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Action {
    /// Start dragging the item whose lock is pending.
    ///
    /// `client_selection` is where the pointer grabbed the item. `None` selects the item's
    /// own center, which is what keyboard lifts use.
    Lift {
        /// Grab point.
        client_selection: Option<Point>,
        /// Pointer or keyboard driven.
        mode: MovementMode,
    },
    /// Pointer moved to `client`.
    Move {
        /// New pointer position.
        client: Point,
    },
    /// One keyboard step up.
    MoveUp,
    /// One keyboard step right.
    MoveRight,
    /// One keyboard step down.
    MoveDown,
    /// One keyboard step left.
    MoveLeft,
    /// The window scrolled to `scroll`.
    MoveByWindowScroll {
        /// New window scroll offset.
        scroll: Vec2,
    },
    /// A droppable's scroll container scrolled to `scroll`.
    UpdateDroppableScroll {
        /// The scrolled droppable.
        droppable_id: DroppableId,
        /// New scroll offset.
        scroll: Vec2,
    },
    /// Record a new maximum window scroll.
    UpdateViewportMaxScroll {
        /// New maximum.
        max: Vec2,
    },
    /// Drop at the current impact.
    Drop,
    /// Abandon the drag and return home.
    Cancel,
    /// The drop animation has finished.
    DropAnimationFinished,
}

impl Action {
    /// The keyboard step for a direction.
    pub fn step(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::MoveUp,
            Direction::Right => Self::MoveRight,
            Direction::Down => Self::MoveDown,
            Direction::Left => Self::MoveLeft,
        }
    }

    /// The direction of a keyboard step.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::MoveUp => Some(Direction::Up),
            Self::MoveRight => Some(Direction::Right),
            Self::MoveDown => Some(Direction::Down),
            Self::MoveLeft => Some(Direction::Left),
            _ => None,
        }
    }

    /// Whether this action moves the dragged item.
    ///
    /// Only movement can change the droppable under the item, so only movement can change
    /// the document's scrollable size.
    pub fn is_movement(&self) -> bool {
        matches!(
            self,
            Self::Move { .. }
                | Self::MoveUp
                | Self::MoveRight
                | Self::MoveDown
                | Self::MoveLeft
                | Self::MoveByWindowScroll { .. }
        )
    }

    /// Short name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lift { .. } => "lift",
            Self::Move { .. } => "move",
            Self::MoveUp => "move_up",
            Self::MoveRight => "move_right",
            Self::MoveDown => "move_down",
            Self::MoveLeft => "move_left",
            Self::MoveByWindowScroll { .. } => "move_by_window_scroll",
            Self::UpdateDroppableScroll { .. } => "update_droppable_scroll",
            Self::UpdateViewportMaxScroll { .. } => "update_viewport_max_scroll",
            Self::Drop => "drop",
            Self::Cancel => "cancel",
            Self::DropAnimationFinished => "drop_animation_finished",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_moves_count_as_movement() {
        let moving = [
            Action::Move {
                client: Point::ZERO,
            },
            Action::MoveUp,
            Action::MoveRight,
            Action::MoveDown,
            Action::MoveLeft,
            Action::MoveByWindowScroll { scroll: Vec2::ZERO },
        ];
        assert!(moving.iter().all(Action::is_movement));

        let still = [
            Action::Lift {
                client_selection: None,
                mode: MovementMode::Snap,
            },
            Action::UpdateDroppableScroll {
                droppable_id: DroppableId(1),
                scroll: Vec2::ZERO,
            },
            Action::UpdateViewportMaxScroll { max: Vec2::ZERO },
            Action::Drop,
            Action::Cancel,
            Action::DropAnimationFinished,
        ];
        assert!(!still.iter().any(Action::is_movement));
    }

    #[test]
    fn steps_round_trip_through_direction() {
        for d in [Direction::Up, Direction::Right, Direction::Down, Direction::Left] {
            assert_eq!(Action::step(d).direction(), Some(d));
        }
        assert_eq!(Action::Drop.direction(), None);
    }
}
