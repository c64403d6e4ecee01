//! Leaf allocation: the only mutable state of a key pair.
use crate::errors::Error;
use std::sync::atomic::{AtomicU32, Ordering};

/// Whether a key pair can still sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocatorState {
    /// `cursor < capacity`.
    Active,
    /// `cursor == capacity`; permanent.
    Exhausted,
}

/// Monotonic counter handing out each leaf index at most once.
///
/// Allocation is a single compare-and-swap, so concurrent signers never receive the
/// same index, and a call that finds the counter at `capacity` leaves it untouched.
#[derive(Debug)]
pub struct LeafAllocator {
    cursor: AtomicU32,
    capacity: u32,
}

impl LeafAllocator {
    /// A fresh allocator starting at leaf 0.
    pub fn new(capacity: u32) -> Self {
        LeafAllocator {
            cursor: AtomicU32::new(0),
            capacity,
        }
    }

    /// Resume from a persisted cursor.
    ///
    /// # Errors
    /// The function fails if `cursor > capacity`.
    pub fn resume(cursor: u32, capacity: u32) -> Result<Self, Error> {
        if cursor > capacity {
            return Err(Error::InvalidLeafCursor { cursor, capacity });
        }
        Ok(LeafAllocator {
            cursor: AtomicU32::new(cursor),
            capacity,
        })
    }

    /// Claim the next unused leaf index.
    ///
    /// # Errors
    /// Returns `Error::KeyExhausted` once every index has been handed out.
    pub fn allocate(&self) -> Result<u32, Error> {
        let capacity = self.capacity;
        self.cursor
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |cursor| {
                if cursor < capacity {
                    Some(cursor + 1)
                } else {
                    None
                }
            })
            .map_err(|_| {
                tracing::warn!(capacity, "leaf allocator exhausted");
                Error::KeyExhausted { capacity }
            })
    }

    /// Next index to be handed out.
    pub fn cursor(&self) -> u32 {
        self.cursor.load(Ordering::Acquire)
    }

    /// Upper bound on handed out indices.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Indices still available.
    pub fn remaining(&self) -> u32 {
        self.capacity - self.cursor()
    }

    /// Current state.
    pub fn state(&self) -> AllocatorState {
        if self.cursor() < self.capacity {
            AllocatorState::Active
        } else {
            AllocatorState::Exhausted
        }
    }
}
