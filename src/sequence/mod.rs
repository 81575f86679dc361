//! Ordered, finite sequence capability
//!
//! Generic algorithms written against [`Sequence`] run unmodified on
//! slices, `Vec`s and [`DynamicArrayList`]s. Bulk list operations such as
//! [`DynamicArrayList::remove_all`] take any `Sequence` as their argument.

use std::ops::Range;

use crate::list::DynamicArrayList;

/// Read access to an ordered, finite sequence
pub trait Sequence<T> {
    /// Number of elements
    fn len(&self) -> usize;

    /// Whether the sequence is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`, or `None` past the end
    fn item(&self, index: usize) -> Option<&T>;

    /// Index of the first element equal to `value`
    fn position_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        (0..self.len()).find(|&i| self.item(i) == Some(value))
    }

    /// Whether any element equals `value`
    fn contains_item(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.position_of(value).is_some()
    }

    /// Whether every element of `other` is present in `self`
    fn contains_every<S>(&self, other: &S) -> bool
    where
        S: Sequence<T> + ?Sized,
        T: PartialEq,
    {
        (0..other.len())
            .filter_map(|i| other.item(i))
            .all(|value| self.contains_item(value))
    }
}

/// Write access to an ordered, finite sequence
pub trait SequenceMut<T>: Sequence<T> {
    /// Mutable element at `index`, or `None` past the end
    fn item_mut(&mut self, index: usize) -> Option<&mut T>;

    /// Replace the element at `index`, returning the old value
    ///
    /// Returns `None` and drops `value` if `index` is past the end.
    fn replace(&mut self, index: usize, value: T) -> Option<T> {
        self.item_mut(index)
            .map(|slot| std::mem::replace(slot, value))
    }
}

/// Copy `range` out of any sequence, or `None` if it is out of bounds
pub fn copy_range<T, S>(sequence: &S, range: Range<usize>) -> Option<Vec<T>>
where
    T: Clone,
    S: Sequence<T> + ?Sized,
{
    if range.start > range.end || range.end > sequence.len() {
        return None;
    }
    range.map(|i| sequence.item(i).cloned()).collect()
}

/// Swap the contents of two positions in any mutable sequence
///
/// Returns `false` without touching the sequence if either index is out of bounds.
pub fn swap_items<T, S>(sequence: &mut S, a: usize, b: usize) -> bool
where
    T: Clone,
    S: SequenceMut<T> + ?Sized,
{
    let (Some(first), Some(second)) = (sequence.item(a).cloned(), sequence.item(b).cloned())
    else {
        return false;
    };
    sequence.replace(a, second);
    sequence.replace(b, first);
    true
}

impl<T> Sequence<T> for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn item(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> SequenceMut<T> for [T] {
    fn item_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index)
    }
}

impl<T> Sequence<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn item(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> SequenceMut<T> for Vec<T> {
    fn item_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index)
    }
}

impl<T> Sequence<T> for DynamicArrayList<T> {
    fn len(&self) -> usize {
        DynamicArrayList::len(self)
    }

    fn item(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn position_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.index_of(value)
    }
}

impl<T> SequenceMut<T> for DynamicArrayList<T> {
    fn item_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    fn replace(&mut self, index: usize, value: T) -> Option<T> {
        self.set(index, value).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generic_len<S: Sequence<i32> + ?Sized>(sequence: &S) -> usize {
        sequence.len()
    }

    #[test]
    fn same_algorithm_on_every_sequence() {
        let slice: &[i32] = &[1, 2, 3];
        let vec = vec![1, 2, 3];
        let list = DynamicArrayList::from_elements([1, 2, 3]).unwrap();

        assert_eq!(generic_len(slice), 3);
        assert_eq!(generic_len(&vec), 3);
        assert_eq!(generic_len(&list), 3);

        assert_eq!(copy_range(slice, 1..3), Some(vec![2, 3]));
        assert_eq!(copy_range(&vec, 1..3), Some(vec![2, 3]));
        assert_eq!(copy_range(&list, 1..3), Some(vec![2, 3]));
    }

    #[test]
    fn copy_range_rejects_bad_bounds() {
        let vec = vec![1, 2, 3];
        assert_eq!(copy_range(&vec, 0..4), None);
        assert_eq!(copy_range(&vec, 3..3), Some(vec![]));
    }

    #[test]
    fn position_and_containment() {
        let list = DynamicArrayList::from_elements(['a', 'b', 'a']).unwrap();
        assert_eq!(Sequence::position_of(&list, &'a'), Some(0));
        assert!(list.contains_every(&['b', 'a'][..]));
        assert!(!list.contains_every(&vec!['z']));
        assert!(vec!['a', 'b'].contains_every(&list));
    }

    #[test]
    fn swap_items_on_list_and_vec() {
        let mut list = DynamicArrayList::from_elements([1, 2, 3]).unwrap();
        assert!(swap_items(&mut list, 0, 2));
        assert_eq!(list.as_slice(), &[3, 2, 1]);

        let mut vec = vec![1, 2];
        assert!(!swap_items(&mut vec, 0, 5));
        assert_eq!(vec, vec![1, 2]);
    }

    #[test]
    fn replace_out_of_bounds_is_none() {
        let mut list = DynamicArrayList::from_elements([1]).unwrap();
        assert_eq!(SequenceMut::replace(&mut list, 0, 5), Some(1));
        assert_eq!(SequenceMut::replace(&mut list, 1, 5), None);
    }
}
