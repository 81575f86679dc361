//! Bulk operations: multi-element insert/remove, copies and snapshots

use tracing::trace;

use super::DynamicArrayList;
use crate::sequence::Sequence;
use crate::{ListError, Result};

const TARGET: &str = module_path!();

impl<T> DynamicArrayList<T> {
    /// Append every element of `elements` in order, growing at most once
    pub fn add_all<I>(&mut self, elements: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let len = self.len();
        self.insert_all(len, elements)
    }

    /// Insert every element of `elements` starting at `index`
    ///
    /// The tail `[index, len)` shifts right once by the number of inserted
    /// elements. Nothing is modified if the index or capacity check fails.
    pub fn insert_all<I>(&mut self, index: usize, elements: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_insert_index(index)?;
        let items: Vec<T> = elements.into_iter().collect();
        if items.is_empty() {
            return Ok(());
        }

        self.reserve_for_insert(items.len())?;
        trace!(target: TARGET, index, count = items.len(), "inserting elements");
        self.buffer.insert_many(index, items);
        self.mark_modified();
        Ok(())
    }

    /// Whether every element of `other` is present in this list
    pub fn contains_all<S>(&self, other: &S) -> bool
    where
        S: Sequence<T> + ?Sized,
        T: PartialEq,
    {
        (0..other.len())
            .filter_map(|i| other.item(i))
            .all(|value| self.contains(value))
    }

    /// Remove the first occurrence of each element of `other`
    ///
    /// Returns whether anything was removed.
    pub fn remove_all<S>(&mut self, other: &S) -> bool
    where
        S: Sequence<T> + ?Sized,
        T: PartialEq,
    {
        let mut removed = 0usize;
        for value in (0..other.len()).filter_map(|i| other.item(i)) {
            if self.remove_item(value) {
                removed += 1;
            }
        }
        trace!(target: TARGET, removed, "remove_all finished");
        removed > 0
    }

    /// Keep only the elements that are present in `keep`
    ///
    /// Filters with a cursor, so removals go through the same indexed path as
    /// [`Cursor::remove`](crate::Cursor::remove). Returns whether anything
    /// was removed.
    pub fn retain_all<S>(&mut self, keep: &S) -> bool
    where
        S: Sequence<T> + ?Sized,
        T: PartialEq,
    {
        let mut removed = 0usize;
        let mut cursor = self.cursor();
        while cursor.has_next() {
            // The cursor holds the only borrow of the list, so it can neither
            // run off the end nor see a concurrent modification here.
            let step = cursor.next().map(|item| keep.contains_item(item));
            debug_assert!(step.is_ok(), "cursor failed to advance: {step:?}");
            if let Ok(false) = step {
                let outcome = cursor.remove();
                debug_assert!(
                    outcome.is_ok(),
                    "cursor failed to remove: {:?}",
                    outcome.as_ref().err()
                );
                removed += usize::from(outcome.is_ok());
            }
        }
        trace!(target: TARGET, removed, "retain_all finished");
        removed > 0
    }

    /// Independent copy of the elements in `[from, to)`
    pub fn sub_list(&self, from: usize, to: usize) -> Result<Self>
    where
        T: Clone,
    {
        if to > self.len() {
            return Err(ListError::out_of_range(to, self.len() + 1));
        }
        if from > to {
            return Err(ListError::out_of_range(from, to + 1));
        }
        Self::from_vec(self.as_slice()[from..to].to_vec())
    }

    /// Snapshot of the current elements
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }

    /// Copy the elements into `dest`
    ///
    /// If `dest` is shorter than the list, a new vector of exactly `len()`
    /// slots is returned instead. If it is longer, the slot right after the
    /// copied region is set to `None` as a terminator; later slots are left
    /// as they were.
    pub fn to_array(&self, mut dest: Vec<Option<T>>) -> Vec<Option<T>>
    where
        T: Clone,
    {
        let len = self.len();
        if dest.len() < len {
            return self.iter().cloned().map(Some).collect();
        }

        for (slot, item) in dest.iter_mut().zip(self.iter()) {
            *slot = Some(item.clone());
        }
        if dest.len() > len {
            dest[len] = None;
        }
        dest
    }
}
