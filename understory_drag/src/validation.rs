// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Development-time checks on the measurements handed to the engine.
//!
//! These never change behavior: a failed check logs a warning and the drag carries on using
//! the order the items were observed in.

use alloc::vec::Vec;
use core::fmt;
use understory_reorder::{Critical, DimensionMap, DroppableId};

/// Draggable indexes in one droppable that are not `0, 1, 2, ...`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IndexWarning {
    /// The droppable checked.
    pub droppable_id: DroppableId,
    /// Indexes in observed order.
    pub indexes: Vec<usize>,
    /// Positions in `indexes` whose index differs from the position.
    pub flagged: Vec<usize>,
}

impl fmt::Display for IndexWarning {
    /// Comma-separated indexes, with offending ones written as `[🔥n]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, index) in self.indexes.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            if self.flagged.contains(&position) {
                write!(f, "[🔥{index}]")?;
            } else {
                write!(f, "{index}")?;
            }
        }
        Ok(())
    }
}

/// Check that the draggables in `droppable_id` are indexed `0, 1, 2, ...` in order.
///
/// Lists of one or zero items are not checked.
pub fn check_indexes_are_consecutive(
    droppable_id: DroppableId,
    dimensions: &DimensionMap,
) -> Option<IndexWarning> {
    let inside = dimensions.inside(droppable_id);
    if inside.len() <= 1 {
        return None;
    }
    let indexes: Vec<usize> = inside.iter().map(|d| d.descriptor.index).collect();
    let flagged: Vec<usize> = indexes
        .iter()
        .enumerate()
        .filter(|&(position, &index)| position != index)
        .map(|(position, _)| position)
        .collect();
    if flagged.is_empty() {
        return None;
    }
    Some(IndexWarning {
        droppable_id,
        indexes,
        flagged,
    })
}

/// Validate the measurements for a drag of `critical`.
///
/// Runs only in builds with debug assertions, logging any problem at `warn`.
pub fn validate_dimensions(critical: &Critical, dimensions: &DimensionMap) -> Option<IndexWarning> {
    if !cfg!(debug_assertions) {
        return None;
    }
    let warning = check_indexes_are_consecutive(critical.droppable.id, dimensions)?;
    tracing::warn!(
        droppable = ?warning.droppable_id,
        indexes = %warning,
        "detected non-consecutive draggable indexes; this can cause unexpected reordering"
    );
    Some(warning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use kurbo::Rect;
    use understory_box_model::BoxModel;
    use understory_reorder::{DraggableDescriptor, DraggableDimension, DraggableId, TypeId};

    fn with_indexes(indexes: &[usize]) -> DimensionMap {
        let mut map = DimensionMap::new();
        for (i, &index) in indexes.iter().enumerate() {
            map.insert_draggable(DraggableDimension::new(
                DraggableDescriptor {
                    id: DraggableId(i as u64),
                    index,
                    droppable_id: DroppableId(1),
                    type_id: TypeId::default(),
                },
                BoxModel::from_rect(Rect::new(0.0, 0.0, 10.0, 10.0)),
            ));
        }
        map
    }

    #[test]
    fn gaps_flag_every_shifted_index() {
        let warning = check_indexes_are_consecutive(DroppableId(1), &with_indexes(&[0, 2, 3]))
            .unwrap();
        assert_eq!(warning.flagged, [1, 2]);
        assert_eq!(warning.to_string(), "0, [🔥2], [🔥3]");
    }

    #[test]
    fn duplicates_are_flagged() {
        let warning = check_indexes_are_consecutive(DroppableId(1), &with_indexes(&[0, 1, 1]))
            .unwrap();
        assert_eq!(warning.to_string(), "0, 1, [🔥1]");
    }

    #[test]
    fn consecutive_and_tiny_lists_pass() {
        assert_eq!(
            check_indexes_are_consecutive(DroppableId(1), &with_indexes(&[0, 1, 2])),
            None
        );
        assert_eq!(
            check_indexes_are_consecutive(DroppableId(1), &with_indexes(&[4])),
            None
        );
        assert_eq!(
            check_indexes_are_consecutive(DroppableId(1), &with_indexes(&[])),
            None
        );
    }
}
