//! Fixed-capacity contiguous storage
//!
//! `RawBuffer` owns exactly `capacity` slots. Slots `[0, len)` are
//! initialized, slots `[len, capacity)` are not. The buffer never grows by
//! itself: callers decide the new size and call [`RawBuffer::reallocate`].

#![warn(clippy::undocumented_unsafe_blocks)]

use std::fmt;
use std::mem::MaybeUninit;
use std::ptr;
use std::slice;

pub(crate) struct RawBuffer<T> {
    slots: Box<[MaybeUninit<T>]>,
    len: usize,
}

impl<T> RawBuffer<T> {
    /// Allocate a buffer with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Box::<[T]>::new_uninit_slice(capacity),
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    #[inline]
    fn base_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr().cast::<T>()
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are initialized.
        unsafe { slice::from_raw_parts(self.slots.as_ptr().cast::<T>(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        // SAFETY: slots [0, len) are initialized and we hold `&mut self`.
        unsafe { slice::from_raw_parts_mut(self.base_ptr(), len) }
    }

    /// Append into a free slot. Panics if the buffer is full.
    pub fn push(&mut self, value: T) {
        assert!(!self.is_full(), "push into a full buffer");
        self.slots[self.len].write(value);
        self.len += 1;
    }

    /// Shift `[index, len)` right by one and write `value` at `index`.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(index <= self.len, "insert index {index} past length {}", self.len);
        assert!(!self.is_full(), "insert into a full buffer");

        let len = self.len;
        let base = self.base_ptr();
        // SAFETY: len < capacity, so [index + 1, len + 1) is in bounds.
        // `ptr::copy` handles the overlap.
        unsafe {
            ptr::copy(base.add(index), base.add(index + 1), len - index);
            ptr::write(base.add(index), value);
        }
        self.len = len + 1;
    }

    /// Shift `[index, len)` right by `items.len()` and move `items` into the gap.
    pub fn insert_many(&mut self, index: usize, mut items: Vec<T>) {
        let count = items.len();
        assert!(index <= self.len, "insert index {index} past length {}", self.len);
        assert!(
            self.len + count <= self.capacity(),
            "{count} items do not fit in {} free slots",
            self.capacity() - self.len
        );

        let len = self.len;
        let base = self.base_ptr();
        // SAFETY: len + count <= capacity keeps both ranges in bounds.
        unsafe {
            ptr::copy(base.add(index), base.add(index + count), len - index);
            ptr::copy_nonoverlapping(items.as_ptr(), base.add(index), count);
            // The values now live in the buffer; only the Vec allocation is freed.
            items.set_len(0);
        }
        self.len = len + count;
    }

    /// Take the value at `index` and shift `[index + 1, len)` left by one.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(index < self.len, "remove index {index} past length {}", self.len);

        let len = self.len;
        let base = self.base_ptr();
        // SAFETY: index < len, so the read is of an initialized slot. After
        // the read that slot is logically moved out and gets overwritten.
        unsafe {
            let value = ptr::read(base.add(index));
            ptr::copy(base.add(index + 1), base.add(index), len - index - 1);
            self.len = len - 1;
            value
        }
    }

    /// Drop every element past `new_len`. The allocation is kept.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail = self.len - new_len;
        let base = self.base_ptr();
        // Shrink first so a panicking destructor cannot cause a double drop.
        self.len = new_len;
        // SAFETY: [new_len, new_len + tail) was initialized and is now unreachable.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(new_len), tail));
        }
    }

    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Move all elements into a fresh allocation of `new_capacity` slots.
    pub fn reallocate(&mut self, new_capacity: usize) {
        assert!(
            new_capacity >= self.len,
            "capacity {new_capacity} cannot hold {} elements",
            self.len
        );
        let mut slots = Box::<[T]>::new_uninit_slice(new_capacity);
        // SAFETY: distinct allocations, and both hold at least `len` slots.
        unsafe {
            ptr::copy_nonoverlapping(self.slots.as_ptr(), slots.as_mut_ptr(), self.len);
        }
        // `MaybeUninit` never drops its contents, so the old box only frees memory.
        self.slots = slots;
    }

    /// Move the elements out into a `Vec`.
    pub fn into_vec(mut self) -> Vec<T> {
        let len = self.len;
        let mut out = Vec::with_capacity(len);
        // SAFETY: `out` has room for `len` values; ownership moves with the copy
        // and `self.len = 0` below stops `Drop` from touching them again.
        unsafe {
            ptr::copy_nonoverlapping(self.slots.as_ptr().cast::<T>(), out.as_mut_ptr(), len);
            out.set_len(len);
        }
        self.len = 0;
        out
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for RawBuffer<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity());
        for item in self.as_slice() {
            copy.push(item.clone());
        }
        copy
    }
}

impl<T: fmt::Debug> fmt::Debug for RawBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBuffer")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("items", &self.as_slice())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn insert_and_remove_shift() {
        let mut buf = RawBuffer::with_capacity(4);
        buf.push(1);
        buf.push(3);
        buf.insert(1, 2);
        assert_eq!(buf.as_slice(), &[1, 2, 3]);

        assert_eq!(buf.remove(0), 1);
        assert_eq!(buf.as_slice(), &[2, 3]);
        assert_eq!(buf.capacity(), 4);
    }

    #[test]
    fn insert_many_opens_a_gap() {
        let mut buf = RawBuffer::with_capacity(8);
        buf.push('a');
        buf.push('d');
        buf.insert_many(1, vec!['b', 'c']);
        assert_eq!(buf.as_slice(), &['a', 'b', 'c', 'd']);
    }

    #[test]
    fn reallocate_keeps_order() {
        let mut buf = RawBuffer::with_capacity(2);
        buf.push(String::from("x"));
        buf.push(String::from("y"));
        assert!(buf.is_full());

        buf.reallocate(4);
        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.as_slice(), &["x", "y"]);
    }

    #[test]
    fn clear_and_drop_release_every_element() {
        let tracked = Rc::new(());
        let mut buf = RawBuffer::with_capacity(4);
        for _ in 0..3 {
            buf.push(Rc::clone(&tracked));
        }
        assert_eq!(Rc::strong_count(&tracked), 4);

        let removed = buf.remove(1);
        drop(removed);
        assert_eq!(Rc::strong_count(&tracked), 3);

        buf.clear();
        assert_eq!(Rc::strong_count(&tracked), 1);
        assert_eq!(buf.capacity(), 4);

        buf.push(Rc::clone(&tracked));
        drop(buf);
        assert_eq!(Rc::strong_count(&tracked), 1);
    }

    #[test]
    fn into_vec_moves_elements() {
        let tracked = Rc::new(());
        let mut buf = RawBuffer::with_capacity(2);
        buf.push(Rc::clone(&tracked));
        buf.push(Rc::clone(&tracked));

        let items = buf.into_vec();
        assert_eq!(items.len(), 2);
        assert_eq!(Rc::strong_count(&tracked), 3);
        drop(items);
        assert_eq!(Rc::strong_count(&tracked), 1);
    }

    #[test]
    fn zero_sized_elements() {
        let mut buf = RawBuffer::with_capacity(4);
        buf.push(());
        buf.insert(0, ());
        assert_eq!(buf.len(), 2);
        buf.remove(1);
        assert_eq!(buf.as_slice().len(), 1);
    }
}
