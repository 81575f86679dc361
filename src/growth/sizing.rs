//! Power-of-two capacity sizing
//!
//! Every buffer the list allocates has a power-of-two slot count in
//! `[1, MAX_CAPACITY]`. Rounding is done with plain doubling so the result
//! does not depend on the width of `usize`.

/// Capacity used by [`DynamicArrayList::new`](crate::DynamicArrayList::new).
pub const DEFAULT_CAPACITY: usize = 64;

/// Hard ceiling on the number of slots in one buffer (2^30).
pub const MAX_CAPACITY: usize = 1 << 30;

/// Round `requested` up to the next power of two, clamped to `[1, MAX_CAPACITY]`.
///
/// A request of 0 is treated as a request for one slot. Requests above the
/// ceiling clamp instead of failing.
pub fn capacity_for(requested: usize) -> usize {
    let mut capacity = 1;
    while capacity < requested && capacity < MAX_CAPACITY {
        capacity *= 2;
    }
    capacity
}

/// Capacity to reallocate to when an append finds the buffer full.
///
/// Next power of two strictly greater than `len`: doubling for a full buffer.
pub fn grown_for_append(len: usize) -> usize {
    capacity_for(len + 1)
}

/// Capacity to reallocate to when an insert needs `required` slots.
///
/// Keeps one spare slot past `required` so back-to-back inserts do not
/// reallocate twice at a power-of-two boundary.
pub fn grown_for_insert(required: usize) -> usize {
    capacity_for(required + 1)
}

/// Whether a list of `required` elements fits under the ceiling.
#[inline]
pub fn fits(required: usize) -> bool {
    required <= MAX_CAPACITY
}
