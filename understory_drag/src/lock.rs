// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The exclusive drag lock.
//!
//! At most one sensor may drive a drag at a time. A sensor claims the lock for one draggable
//! and receives a [`DragLock`] handle; every later report carries that handle. When the lock
//! is released, whether by the holder or by force, the handle goes stale and the engine
//! ignores it from then on.
//!
//! The [`LockManager`] is an ordinary owned value, handed to the engine at construction.

use understory_reorder::DraggableId;

use crate::error::DragError;

/// Unique identity of one lock claim.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct LockToken(u64);

/// Handle proving a claim on the drag lock.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DragLock {
    token: LockToken,
    draggable_id: DraggableId,
}

impl DragLock {
    /// The draggable this claim is for.
    pub fn draggable_id(&self) -> DraggableId {
        self.draggable_id
    }

    /// Identity of the claim.
    pub fn token(&self) -> LockToken {
        self.token
    }
}

/// Owner of the single drag lock.
#[derive(Debug, Default)]
pub struct LockManager {
    next: u64,
    active: Option<DragLock>,
}

impl LockManager {
    /// Create a manager with the lock free.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the lock for `draggable_id`. Fails immediately if it is already held.
    pub fn try_claim(&mut self, draggable_id: DraggableId) -> Result<DragLock, DragError> {
        if self.active.is_some() {
            return Err(DragError::LockAlreadyClaimed);
        }
        let lock = DragLock {
            token: LockToken(self.next),
            draggable_id,
        };
        self.next = self.next.wrapping_add(1);
        self.active = Some(lock);
        Ok(lock)
    }

    /// Whether anyone holds the lock.
    pub fn is_claimed(&self) -> bool {
        self.active.is_some()
    }

    /// Whether `lock` is the current claim.
    pub fn is_active(&self, lock: &DragLock) -> bool {
        self.active.as_ref() == Some(lock)
    }

    /// Release `lock`. Returns `false` and does nothing if the handle is stale.
    pub fn release(&mut self, lock: &DragLock) -> bool {
        if !self.is_active(lock) {
            return false;
        }
        self.active = None;
        true
    }

    /// Release whatever claim is active.
    pub fn force_release(&mut self) -> Option<DragLock> {
        self.active.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_claim_fails_until_release() {
        let mut locks = LockManager::new();
        let first = locks.try_claim(DraggableId(1)).unwrap();
        assert_eq!(
            locks.try_claim(DraggableId(2)),
            Err(DragError::LockAlreadyClaimed)
        );
        assert!(locks.release(&first));
        assert!(!locks.is_claimed());
        let second = locks.try_claim(DraggableId(2)).unwrap();
        assert_ne!(first.token(), second.token());
    }

    #[test]
    fn stale_handles_are_ignored() {
        let mut locks = LockManager::new();
        let first = locks.try_claim(DraggableId(1)).unwrap();
        assert_eq!(locks.force_release(), Some(first));
        let second = locks.try_claim(DraggableId(1)).unwrap();
        assert!(!locks.is_active(&first));
        assert!(!locks.release(&first));
        assert!(locks.is_active(&second));
    }
}
