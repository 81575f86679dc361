//! # Dynamic Array List
//!
//! A single growable sequence container backed by one contiguous,
//! power-of-two sized buffer, plus a bidirectional cursor that can insert,
//! replace and remove relative to the element it last visited.
//!
//! ## Growth
//!
//! 1. **Sizing**: every buffer has `2^k` slots, `1 <= 2^k <= 2^30`
//! 2. **Append**: a full buffer doubles before the new element is written
//! 3. **Insert**: the buffer grows to the smallest power of two `>= required + 1`
//! 4. **Never shrinks**: `clear` and `remove` keep the allocation
//!
//! ## Usage Example
//!
//! ```
//! use dynamic_array_list::DynamicArrayList;
//!
//! let mut list = DynamicArrayList::new();
//! list.push('A')?;
//! list.push('B')?;
//! list.push('C')?;
//!
//! assert!(list.remove_item(&'B'));
//! assert_eq!(list.index_of(&'C'), Some(1));
//!
//! list.insert(1, 'X')?;
//! assert_eq!(list.as_slice(), &['A', 'X', 'C']);
//!
//! let mut cursor = list.cursor();
//! while cursor.has_next() {
//!     if *cursor.next()? == 'X' {
//!         cursor.set('Y')?;
//!     }
//! }
//! assert_eq!(list.as_slice(), &['A', 'Y', 'C']);
//! # Ok::<(), dynamic_array_list::ListError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![deny(unsafe_op_in_unsafe_fn)]

// Core modules
mod buffer; // Raw fixed-capacity storage
pub mod growth; // Power-of-two sizing and reallocation tracking
pub mod list; // The list itself
pub mod cursor; // Bidirectional mutating cursor
pub mod sequence; // Generic sequence capability

// Re-exports for convenience
pub use cursor::Cursor;
pub use growth::{GrowthProfile, DEFAULT_CAPACITY, MAX_CAPACITY};
pub use list::{DynamicArrayList, IntoIter, Iter};
pub use sequence::{Sequence, SequenceMut};

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T, E = ListError> = std::result::Result<T, E>;

/// Errors reported by list and cursor operations
///
/// Every check runs before the operation touches the list, so a failed call
/// leaves the list exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Index outside the bound valid for the operation
    #[error("index {index} out of range (bound {bound})")]
    IndexOutOfRange {
        /// Index that was requested
        index: usize,
        /// Exclusive upper bound the index had to stay below
        bound: usize,
    },

    /// `next`/`previous` ran past the end of the list
    #[error("no element in that direction")]
    NoSuchElement,

    /// Cursor `set`/`remove` with no element visited since the last mutation
    #[error("cursor has no last returned element")]
    IllegalState,

    /// The list was structurally changed behind a live cursor
    #[error("list modified outside the cursor: expected modification {expected}, found {found}")]
    ConcurrentModification {
        /// Modification count the cursor last saw
        expected: u64,
        /// Modification count the list reports now
        found: u64,
    },

    /// The operation would need more slots than one buffer may hold
    #[error("capacity exceeded: {required} elements required, maximum is {max}")]
    CapacityExceeded {
        /// Number of elements the list would have held
        required: usize,
        /// Capacity ceiling
        max: usize,
    },
}

impl ListError {
    /// Helper for constructing bound violations.
    pub(crate) fn out_of_range(index: usize, bound: usize) -> Self {
        ListError::IndexOutOfRange { index, bound }
    }
}

/// Configuration parameters for a new list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// Requested capacity; rounded up to a power of two and clamped to [`MAX_CAPACITY`]
    pub initial_capacity: usize,

    /// Record a [`GrowthProfile`] timeline of every reallocation
    pub profile_growth: bool,
}

impl ListConfig {
    /// Configuration for a list with room for at least `initial_capacity` elements
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            profile_growth: false,
        }
    }

    /// Enable growth profiling
    pub fn profiled(mut self) -> Self {
        self.profile_growth = true;
        self
    }

    /// Capacity the first buffer will actually have
    pub fn effective_capacity(&self) -> usize {
        growth::capacity_for(self.initial_capacity)
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}
