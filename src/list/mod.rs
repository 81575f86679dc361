//! The dynamic array list
//!
//! Owns one [`RawBuffer`](crate::buffer) whose capacity is always a power
//! of two. Indexed reads and writes are O(1), appends are amortized O(1),
//! and inserts/removes in the middle shift the tail in O(n).

mod bulk;
mod iter;

pub use iter::{IntoIter, Iter};

use std::mem;

use tracing::debug;

use crate::buffer::RawBuffer;
use crate::cursor::Cursor;
use crate::growth::{self, GrowthProfile, GrowthTracker, MAX_CAPACITY};
use crate::{ListConfig, ListError, Result};

const TARGET: &str = concat!(module_path!(), "::growth");

/// Ordered, growable sequence backed by a single power-of-two buffer
///
/// Elements at `[0, len)` are valid and contiguous. The buffer is
/// reallocated (never shrunk) when an operation needs more room, and every
/// structural change bumps a modification counter that live cursors check.
#[derive(Clone)]
pub struct DynamicArrayList<T> {
    buffer: RawBuffer<T>,

    /// Bumped on every structural change (not on `set`)
    modifications: u64,

    growth: GrowthTracker,
}

impl<T> DynamicArrayList<T> {
    /// Empty list with [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY) slots
    pub fn new() -> Self {
        Self::with_config(ListConfig::default())
    }

    /// Empty list with room for at least `capacity` elements
    ///
    /// The capacity is rounded up to a power of two; 0 is treated as 1 and
    /// anything past [`MAX_CAPACITY`] is clamped.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(ListConfig::with_capacity(capacity))
    }

    /// Empty list built from an explicit configuration
    pub fn with_config(config: ListConfig) -> Self {
        let capacity = config.effective_capacity();
        Self {
            buffer: RawBuffer::with_capacity(capacity),
            modifications: 0,
            growth: GrowthTracker::new(capacity, config.profile_growth),
        }
    }

    /// List holding `elements` in iteration order, sized to fit them exactly
    ///
    /// Fails with [`ListError::CapacityExceeded`] if the source holds more
    /// than [`MAX_CAPACITY`] elements.
    pub fn from_elements<I>(elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = elements.into_iter().collect();
        Self::from_vec(items)
    }

    pub(crate) fn from_vec(items: Vec<T>) -> Result<Self> {
        let required = items.len();
        check_fits(required)?;

        let capacity = growth::capacity_for(required);
        let mut buffer = RawBuffer::with_capacity(capacity);
        buffer.insert_many(0, items);
        Ok(Self {
            buffer,
            modifications: 0,
            growth: GrowthTracker::new(capacity, false),
        })
    }

    /// Number of elements in the list
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the list holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of slots in the current buffer (always a power of two)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Number of times the buffer has been reallocated
    pub fn reallocations(&self) -> usize {
        self.growth.reallocations()
    }

    /// Largest capacity this list has ever had
    pub fn peak_capacity(&self) -> usize {
        self.growth.peak_capacity()
    }

    /// Growth profile, if the list was built with profiling enabled
    pub fn growth_profile(&self) -> Option<&GrowthProfile> {
        self.growth.profile()
    }

    /// Take the growth profile out, disabling further profiling
    pub fn take_growth_profile(&mut self) -> Option<GrowthProfile> {
        self.growth.take_profile()
    }

    /// Current value of the structural modification counter
    pub(crate) fn modification_count(&self) -> u64 {
        self.modifications
    }

    /// The elements as a slice
    pub fn as_slice(&self) -> &[T] {
        self.buffer.as_slice()
    }

    /// The elements as a mutable slice
    ///
    /// Elements may be replaced in place; the length cannot change.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buffer.as_mut_slice()
    }

    /// Element at `index`
    pub fn get(&self, index: usize) -> Result<&T> {
        self.as_slice()
            .get(index)
            .ok_or_else(|| ListError::out_of_range(index, self.len()))
    }

    /// Replace the element at `index`, returning the old value
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let len = self.len();
        let slot = self
            .as_mut_slice()
            .get_mut(index)
            .ok_or_else(|| ListError::out_of_range(index, len))?;
        Ok(mem::replace(slot, value))
    }

    /// Append `value`, doubling the buffer first if it is full
    pub fn push(&mut self, value: T) -> Result<()> {
        if self.buffer.is_full() {
            let len = self.len();
            check_fits(len + 1)?;
            self.grow_to(growth::grown_for_append(len));
        }
        self.buffer.push(value);
        self.mark_modified();
        Ok(())
    }

    /// Insert `value` at `index`, shifting `[index, len)` right by one
    ///
    /// `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        self.check_insert_index(index)?;
        self.reserve_for_insert(1)?;
        self.buffer.insert(index, value);
        self.mark_modified();
        Ok(())
    }

    /// Remove and return the element at `index`, shifting the tail left
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.len() {
            return Err(ListError::out_of_range(index, self.len()));
        }
        let value = self.buffer.remove(index);
        self.mark_modified();
        Ok(value)
    }

    /// Remove the first element equal to `value`
    ///
    /// Returns `false` and leaves the list untouched when no element matches.
    pub fn remove_item(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => {
                self.buffer.remove(index);
                self.mark_modified();
                true
            }
            None => false,
        }
    }

    /// Index of the first element equal to `value`
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().position(|item| item == value)
    }

    /// Index of the last element equal to `value`
    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().rposition(|item| item == value)
    }

    /// Whether any element equals `value`
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Drop every element; the buffer keeps its capacity
    pub fn clear(&mut self) {
        debug!(target: TARGET, len = self.len(), capacity = self.capacity(), "clearing list");
        self.buffer.clear();
        self.mark_modified();
    }

    /// Cursor positioned before the first element
    pub fn cursor(&mut self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// Cursor positioned before the element at `index`
    ///
    /// `index` may equal `len()`, leaving the cursor at the end.
    pub fn cursor_at(&mut self, index: usize) -> Result<Cursor<'_, T>> {
        self.check_insert_index(index)?;
        Ok(Cursor::new(self, index))
    }

    /// Read-only double-ended iterator over the elements
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    /// Move the elements out into a `Vec`
    pub fn into_vec(self) -> Vec<T> {
        self.buffer.into_vec()
    }

    fn mark_modified(&mut self) {
        self.modifications = self.modifications.wrapping_add(1);
    }

    /// Insert positions run over `[0, len]`.
    fn check_insert_index(&self, index: usize) -> Result<()> {
        if index > self.len() {
            return Err(ListError::out_of_range(index, self.len() + 1));
        }
        Ok(())
    }

    /// Make room for `additional` more elements on the insert path.
    fn reserve_for_insert(&mut self, additional: usize) -> Result<()> {
        let required = self.len().saturating_add(additional);
        check_fits(required)?;
        if required > self.capacity() {
            self.grow_to(growth::grown_for_insert(required));
        }
        Ok(())
    }

    fn grow_to(&mut self, new_capacity: usize) {
        let len = self.len();
        debug!(
            target: TARGET,
            old_capacity = self.capacity(),
            new_capacity,
            len,
            "reallocating buffer"
        );
        self.buffer.reallocate(new_capacity);
        self.growth.record_growth(len, new_capacity);
    }
}

fn check_fits(required: usize) -> Result<()> {
    if growth::fits(required) {
        Ok(())
    } else {
        Err(ListError::CapacityExceeded {
            required,
            max: MAX_CAPACITY,
        })
    }
}

impl<T> Default for DynamicArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> DynamicArrayList<char> {
        DynamicArrayList::from_elements(['A', 'B', 'C']).expect("three elements fit")
    }

    #[test]
    fn default_capacity_is_64() {
        let list: DynamicArrayList<u8> = DynamicArrayList::new();
        assert_eq!(list.capacity(), 64);
        assert!(list.is_empty());
    }

    #[test]
    fn from_elements_is_sized_to_fit() {
        let list = abc();
        assert_eq!(list.capacity(), 4);
        assert_eq!(list.as_slice(), &['A', 'B', 'C']);

        let empty = DynamicArrayList::<i32>::from_elements(Vec::new()).unwrap();
        assert_eq!(empty.capacity(), 1);
    }

    #[test]
    fn remove_by_value_then_insert() {
        let mut list = abc();
        assert!(list.remove_item(&'B'));
        assert_eq!(list.as_slice(), &['A', 'C']);
        assert_eq!(list.len(), 2);
        assert_eq!(list.index_of(&'C'), Some(1));

        list.insert(1, 'X').unwrap();
        assert_eq!(list.as_slice(), &['A', 'X', 'C']);
    }

    #[test]
    fn remove_missing_value_reports_false() {
        let mut list = abc();
        let before = list.modification_count();
        assert!(!list.remove_item(&'Z'));
        assert_eq!(list.as_slice(), &['A', 'B', 'C']);
        assert_eq!(list.modification_count(), before);
    }

    #[test]
    fn set_returns_old_value_without_structural_change() {
        let mut list = abc();
        let before = list.modification_count();
        assert_eq!(list.set(2, 'Z'), Ok('C'));
        assert_eq!(list.modification_count(), before);
        assert_eq!(list.set(3, 'Q'), Err(ListError::out_of_range(3, 3)));
    }

    #[test]
    fn insert_bound_is_inclusive_of_len() {
        let mut list = abc();
        assert!(list.insert(3, 'D').is_ok());
        assert_eq!(
            list.insert(5, 'F'),
            Err(ListError::IndexOutOfRange { index: 5, bound: 5 })
        );
    }

    #[test]
    fn append_doubles_full_buffer() {
        let mut list = DynamicArrayList::with_capacity(2);
        list.push(1).unwrap();
        list.push(2).unwrap();
        assert_eq!(list.capacity(), 2);

        list.push(3).unwrap();
        assert_eq!(list.capacity(), 4);
        assert_eq!(list.reallocations(), 1);
    }

    #[test]
    fn insert_into_full_buffer_keeps_spare_slot() {
        let mut list = DynamicArrayList::with_capacity(4);
        for i in 0..4 {
            list.push(i).unwrap();
        }
        list.insert(0, -1).unwrap();
        assert_eq!(list.capacity(), 8);
        assert_eq!(list.as_slice(), &[-1, 0, 1, 2, 3]);
    }

    #[test]
    fn clear_keeps_capacity_and_bumps_counter() {
        let mut list = abc();
        let before = list.modification_count();
        list.clear();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 4);
        assert!(list.modification_count() > before);
    }

    #[test]
    fn last_index_of_scans_from_back() {
        let list = DynamicArrayList::from_elements([1, 2, 1, 3]).unwrap();
        assert_eq!(list.index_of(&1), Some(0));
        assert_eq!(list.last_index_of(&1), Some(2));
        assert_eq!(list.last_index_of(&9), None);
        assert!(list.contains(&3));
    }

    #[test]
    fn fits_up_to_the_ceiling_only() {
        assert_eq!(check_fits(MAX_CAPACITY), Ok(()));
        assert_eq!(
            check_fits(MAX_CAPACITY + 1),
            Err(ListError::CapacityExceeded {
                required: MAX_CAPACITY + 1,
                max: MAX_CAPACITY,
            })
        );
    }

    #[test]
    fn oversized_reservation_fails_before_touching_the_list() {
        let mut list = abc();
        let before = list.modification_count();

        assert_eq!(
            list.reserve_for_insert(MAX_CAPACITY),
            Err(ListError::CapacityExceeded {
                required: MAX_CAPACITY + 3,
                max: MAX_CAPACITY,
            })
        );
        assert_eq!(
            list.reserve_for_insert(usize::MAX),
            Err(ListError::CapacityExceeded {
                required: usize::MAX,
                max: MAX_CAPACITY,
            })
        );

        assert_eq!(list.as_slice(), &['A', 'B', 'C']);
        assert_eq!(list.capacity(), 4);
        assert_eq!(list.reallocations(), 0);
        assert_eq!(list.modification_count(), before);
    }
}
