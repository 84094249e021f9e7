// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: identifiers, descriptors, flags, and measured dimensions.

use kurbo::{Rect, Size, Vec2};
use understory_box_model::{Axis, BoxModel, Spacing};

/// Identifier of a draggable item.
///
/// Identifiers are chosen by the caller and must be unique within one
/// [`DimensionMap`](crate::DimensionMap).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DraggableId(pub u64);

/// Identifier of a droppable container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DroppableId(pub u64);

/// Kind tag shared by draggables and droppables.
///
/// A draggable can only be dropped into droppables with the same type.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeId(pub u32);

/// Identity and ordering key of a draggable within its container.
///
/// Within one container, indexes are expected to form a zero-based consecutive sequence.
/// This is checked in development builds but never enforced.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DraggableDescriptor {
    /// Identity of the item.
    pub id: DraggableId,
    /// Position of the item within its container.
    pub index: usize,
    /// Container the item lives in.
    pub droppable_id: DroppableId,
    /// Kind tag; must match the destination's type.
    pub type_id: TypeId,
}

/// Identity of a droppable container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DroppableDescriptor {
    /// Identity of the container.
    pub id: DroppableId,
    /// Kind tag accepted by the container.
    pub type_id: TypeId,
}

/// The draggable/droppable pair active when a drag began.
///
/// All impact computation during a drag is relative to this pair.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Critical {
    /// The lifted item.
    pub draggable: DraggableDescriptor,
    /// The container the item was lifted from.
    pub droppable: DroppableDescriptor,
}

/// Space a draggable leaves behind when it is moved to a foreign container.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placeholder {
    /// Size of the draggable's border box.
    pub border_box_size: Size,
    /// Margin around the draggable.
    pub margin: Spacing,
}

impl Placeholder {
    /// Placeholder matching a measured box.
    pub fn from_box(page: &BoxModel) -> Self {
        Self {
            border_box_size: page.size(),
            margin: page.margin,
        }
    }
}

/// Snapshot of a draggable taken once at drag start.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DraggableDimension {
    /// Identity and ordering.
    pub descriptor: DraggableDescriptor,
    /// Measured box in page coordinates, before any displacement.
    pub page: BoxModel,
    /// Space to reserve when the item leaves its home container.
    pub placeholder: Placeholder,
}

impl DraggableDimension {
    /// Build a dimension whose placeholder matches the measured box.
    pub fn new(descriptor: DraggableDescriptor, page: BoxModel) -> Self {
        Self {
            descriptor,
            page,
            placeholder: Placeholder::from_box(&page),
        }
    }

    /// Shorthand for `self.descriptor.id`.
    pub fn id(&self) -> DraggableId {
        self.descriptor.id
    }
}

bitflags::bitflags! {
    /// Droppable flags controlling whether and how a container accepts drops.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DroppableFlags: u8 {
        /// Container accepts drops.
        const ENABLED                   = 0b0000_0001;
        /// Hovering over an item merges with it instead of reordering.
        const GROUPING                  = 0b0000_0010;
        /// The container's visible area is not clipped to its scroll frame.
        const IGNORE_CONTAINER_CLIPPING = 0b0000_0100;
    }
}

impl Default for DroppableFlags {
    fn default() -> Self {
        Self::ENABLED
    }
}

/// Scroll offsets of a scrollable container.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameScroll {
    /// Scroll offset when the drag started.
    pub initial: Vec2,
    /// Scroll offset now.
    pub current: Vec2,
    /// Largest reachable scroll offset.
    pub max: Vec2,
}

impl FrameScroll {
    /// How far the container has scrolled since the drag started.
    pub fn diff(&self) -> Vec2 {
        self.current - self.initial
    }
}

/// The scroll container wrapping a droppable's items.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollFrame {
    /// Measured box of the scroll container.
    pub page: BoxModel,
    /// Scroll bookkeeping.
    pub scroll: FrameScroll,
}

/// The part of a droppable that can currently receive a drag.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Subject {
    /// Measured box of the droppable.
    pub page: BoxModel,
    /// Margin box after container scrolling and clipping, or `None` when fully clipped away.
    pub active: Option<Rect>,
}

impl Subject {
    fn compute(page: &BoxModel, frame: Option<&ScrollFrame>, flags: DroppableFlags) -> Self {
        let Some(frame) = frame else {
            return Self {
                page: *page,
                active: Some(page.margin_box),
            };
        };
        let scrolled = page.margin_box - frame.scroll.diff();
        let active = if flags.contains(DroppableFlags::IGNORE_CONTAINER_CLIPPING) {
            Some(scrolled)
        } else {
            let clipped = scrolled.intersect(frame.page.border_box);
            (clipped.area() > 0.0).then_some(clipped)
        };
        Self {
            page: *page,
            active,
        }
    }
}

/// Snapshot of a droppable container.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DroppableDimension {
    /// Identity and type.
    pub descriptor: DroppableDescriptor,
    /// Direction items flow in.
    pub axis: Axis,
    /// Measured box in page coordinates.
    pub page: BoxModel,
    /// Optional scroll container.
    pub frame: Option<ScrollFrame>,
    /// Area that can receive a drag.
    pub subject: Subject,
    /// Drop/grouping/clipping flags.
    pub flags: DroppableFlags,
}

impl DroppableDimension {
    /// Build a droppable and derive its subject from the frame and flags.
    pub fn new(
        descriptor: DroppableDescriptor,
        axis: Axis,
        page: BoxModel,
        frame: Option<ScrollFrame>,
        flags: DroppableFlags,
    ) -> Self {
        Self {
            descriptor,
            axis,
            page,
            frame,
            subject: Subject::compute(&page, frame.as_ref(), flags),
            flags,
        }
    }

    /// Shorthand for `self.descriptor.id`.
    pub fn id(&self) -> DroppableId {
        self.descriptor.id
    }

    /// Whether the container accepts drops.
    pub fn is_enabled(&self) -> bool {
        self.flags.contains(DroppableFlags::ENABLED)
    }

    /// How far the container's own scroll frame has scrolled since the drag started.
    pub fn scroll_diff(&self) -> Vec2 {
        self.frame.map_or(Vec2::ZERO, |f| f.scroll.diff())
    }

    /// A copy scrolled to `current`, or `None` if the droppable has no scroll frame.
    pub fn scrolled(&self, current: Vec2) -> Option<Self> {
        let mut frame = self.frame?;
        frame.scroll.current = current;
        Some(Self::new(
            self.descriptor,
            self.axis,
            self.page,
            Some(frame),
            self.flags,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn droppable(frame: Option<ScrollFrame>, flags: DroppableFlags) -> DroppableDimension {
        DroppableDimension::new(
            DroppableDescriptor {
                id: DroppableId(1),
                type_id: TypeId::default(),
            },
            Axis::Vertical,
            BoxModel::from_rect(Rect::new(0.0, 0.0, 100.0, 1000.0)),
            frame,
            flags,
        )
    }

    fn frame() -> ScrollFrame {
        ScrollFrame {
            page: BoxModel::from_rect(Rect::new(0.0, 0.0, 100.0, 300.0)),
            scroll: FrameScroll {
                max: Vec2::new(0.0, 700.0),
                ..Default::default()
            },
        }
    }

    #[test]
    fn unframed_subject_is_margin_box() {
        let d = droppable(None, DroppableFlags::default());
        assert_eq!(d.subject.active, Some(d.page.margin_box));
        assert!(d.is_enabled());
        assert!(d.scrolled(Vec2::new(0.0, 10.0)).is_none());
    }

    #[test]
    fn framed_subject_is_clipped_and_follows_scroll() {
        let d = droppable(Some(frame()), DroppableFlags::default());
        assert_eq!(d.subject.active, Some(Rect::new(0.0, 0.0, 100.0, 300.0)));

        let scrolled = d.scrolled(Vec2::new(0.0, 200.0)).unwrap();
        assert_eq!(scrolled.scroll_diff(), Vec2::new(0.0, 200.0));
        // Content moved up by 200 but the frame still clips it.
        assert_eq!(
            scrolled.subject.active,
            Some(Rect::new(0.0, 0.0, 100.0, 300.0))
        );
    }

    #[test]
    fn ignoring_clipping_keeps_the_scrolled_margin_box() {
        let d = droppable(
            Some(frame()),
            DroppableFlags::ENABLED | DroppableFlags::IGNORE_CONTAINER_CLIPPING,
        );
        let scrolled = d.scrolled(Vec2::new(0.0, 50.0)).unwrap();
        assert_eq!(
            scrolled.subject.active,
            Some(Rect::new(0.0, -50.0, 100.0, 950.0))
        );
    }

    #[test]
    fn fully_clipped_subject_is_inactive() {
        let mut f = frame();
        f.page = BoxModel::from_rect(Rect::new(500.0, 500.0, 600.0, 600.0));
        let d = droppable(Some(f), DroppableFlags::default());
        assert_eq!(d.subject.active, None);
    }
}
