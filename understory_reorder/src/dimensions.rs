// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dimension registry: every measured draggable and droppable for one drag.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use kurbo::Vec2;

use crate::error::DimensionError;
use crate::types::{Critical, DraggableDimension, DraggableId, DroppableDimension, DroppableId};

/// Read-only snapshot of all measurements taken at lift.
///
/// Entries keep their insertion order. Inserting an id that is already present keeps the
/// first-seen entry and reports a warning, so best-effort ordering always has a single
/// answer.
///
/// The only mutation allowed during a drag is
/// [`update_droppable_scroll`](Self::update_droppable_scroll), which the measurement
/// collaborator uses when an internal scroll container moves.
#[derive(Clone, Debug, Default)]
pub struct DimensionMap {
    draggables: Vec<DraggableDimension>,
    draggable_slots: BTreeMap<DraggableId, usize>,
    droppables: Vec<DroppableDimension>,
    droppable_slots: BTreeMap<DroppableId, usize>,
}

impl DimensionMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a draggable. Returns `false` (and keeps the existing entry) on a duplicate id.
    pub fn insert_draggable(&mut self, dimension: DraggableDimension) -> bool {
        let id = dimension.id();
        if self.draggable_slots.contains_key(&id) {
            tracing::warn!(draggable = ?id, "duplicate draggable id; keeping the first measurement");
            return false;
        }
        self.draggable_slots.insert(id, self.draggables.len());
        self.draggables.push(dimension);
        true
    }

    /// Record a droppable. Returns `false` (and keeps the existing entry) on a duplicate id.
    pub fn insert_droppable(&mut self, dimension: DroppableDimension) -> bool {
        let id = dimension.id();
        if self.droppable_slots.contains_key(&id) {
            tracing::warn!(droppable = ?id, "duplicate droppable id; keeping the first measurement");
            return false;
        }
        self.droppable_slots.insert(id, self.droppables.len());
        self.droppables.push(dimension);
        true
    }

    /// Builder form of [`insert_draggable`](Self::insert_draggable).
    #[must_use]
    pub fn with_draggable(mut self, dimension: DraggableDimension) -> Self {
        self.insert_draggable(dimension);
        self
    }

    /// Builder form of [`insert_droppable`](Self::insert_droppable).
    #[must_use]
    pub fn with_droppable(mut self, dimension: DroppableDimension) -> Self {
        self.insert_droppable(dimension);
        self
    }

    /// Look up a draggable.
    pub fn draggable(&self, id: DraggableId) -> Option<&DraggableDimension> {
        self.draggable_slots.get(&id).map(|&i| &self.draggables[i])
    }

    /// Look up a droppable.
    pub fn droppable(&self, id: DroppableId) -> Option<&DroppableDimension> {
        self.droppable_slots.get(&id).map(|&i| &self.droppables[i])
    }

    /// Look up a draggable that must exist.
    pub fn require_draggable(&self, id: DraggableId) -> Result<&DraggableDimension, DimensionError> {
        self.draggable(id)
            .ok_or(DimensionError::MissingDraggable(id))
    }

    /// Look up a droppable that must exist.
    pub fn require_droppable(&self, id: DroppableId) -> Result<&DroppableDimension, DimensionError> {
        self.droppable(id)
            .ok_or(DimensionError::MissingDroppable(id))
    }

    /// All draggables in insertion order.
    pub fn draggables(&self) -> impl Iterator<Item = &DraggableDimension> + '_ {
        self.draggables.iter()
    }

    /// All droppables in insertion order.
    pub fn droppables(&self) -> impl Iterator<Item = &DroppableDimension> + '_ {
        self.droppables.iter()
    }

    /// Draggables inside `droppable`, ordered by index.
    ///
    /// The sort is stable, so items sharing an index stay in first-seen order.
    pub fn inside(&self, droppable: DroppableId) -> Vec<&DraggableDimension> {
        let mut inside: Vec<_> = self
            .draggables
            .iter()
            .filter(|d| d.descriptor.droppable_id == droppable)
            .collect();
        inside.sort_by_key(|d| d.descriptor.index);
        inside
    }

    /// The draggable/droppable pair for lifting `draggable`.
    pub fn critical(&self, draggable: DraggableId) -> Result<Critical, DimensionError> {
        let dragged = self.require_draggable(draggable)?;
        let home = self.require_droppable(dragged.descriptor.droppable_id)?;
        Ok(Critical {
            draggable: dragged.descriptor,
            droppable: home.descriptor,
        })
    }

    /// Record a new scroll offset for a droppable's scroll frame.
    pub fn update_droppable_scroll(
        &mut self,
        id: DroppableId,
        current: Vec2,
    ) -> Result<(), DimensionError> {
        let slot = *self
            .droppable_slots
            .get(&id)
            .ok_or(DimensionError::MissingDroppable(id))?;
        let scrolled = self.droppables[slot]
            .scrolled(current)
            .ok_or(DimensionError::NotScrollable(id))?;
        self.droppables[slot] = scrolled;
        Ok(())
    }
}
