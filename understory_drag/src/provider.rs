// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The measurement collaborator.

use alloc::collections::BTreeSet;
use kurbo::Size;
use understory_reorder::{DimensionError, DimensionMap, DraggableId, Viewport};

/// Everything measured when a drag starts.
#[derive(Clone, Debug)]
pub struct DimensionSnapshot {
    /// Every draggable and droppable.
    pub dimensions: DimensionMap,
    /// The window at lift.
    pub viewport: Viewport,
}

/// Supplies measurements to a [`DragEngine`](crate::DragEngine).
///
/// Measurement happens once per drag in [`collect`](Self::collect). Droppable scroll changes
/// during the drag are reported through
/// [`Action::UpdateDroppableScroll`](crate::Action::UpdateDroppableScroll).
pub trait DimensionProvider {
    /// Measure every draggable and droppable for a drag of `draggable_id`.
    fn collect(&mut self, draggable_id: DraggableId) -> Result<DimensionSnapshot, DimensionError>;

    /// Current scrollable size of the whole document.
    fn document_scroll_size(&self) -> Size;

    /// Whether `draggable_id` may start a drag.
    fn can_start_drag(&self, draggable_id: DraggableId) -> bool {
        let _ = draggable_id;
        true
    }
}

/// A provider that hands out a fixed snapshot.
///
/// Useful for tests and for hosts whose layout cannot change while a drag is open.
#[derive(Clone, Debug)]
pub struct StaticDimensions {
    snapshot: DimensionSnapshot,
    document_scroll_size: Size,
    disabled: BTreeSet<DraggableId>,
}

impl StaticDimensions {
    /// Serve `snapshot`, reporting `document_scroll_size` as the document size.
    pub fn new(snapshot: DimensionSnapshot, document_scroll_size: Size) -> Self {
        Self {
            snapshot,
            document_scroll_size,
            disabled: BTreeSet::new(),
        }
    }

    /// Change the reported document size.
    pub fn set_document_scroll_size(&mut self, size: Size) {
        self.document_scroll_size = size;
    }

    /// Enable or disable dragging of one item.
    pub fn set_drag_disabled(&mut self, draggable_id: DraggableId, disabled: bool) {
        if disabled {
            self.disabled.insert(draggable_id);
        } else {
            self.disabled.remove(&draggable_id);
        }
    }
}

impl DimensionProvider for StaticDimensions {
    fn collect(&mut self, draggable_id: DraggableId) -> Result<DimensionSnapshot, DimensionError> {
        self.snapshot.dimensions.require_draggable(draggable_id)?;
        Ok(self.snapshot.clone())
    }

    fn document_scroll_size(&self) -> Size {
        self.document_scroll_size
    }

    fn can_start_drag(&self, draggable_id: DraggableId) -> bool {
        !self.disabled.contains(&draggable_id)
    }
}
