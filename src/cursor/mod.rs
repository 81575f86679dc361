//! Bidirectional mutating cursor
//!
//! A cursor sits between two elements. `next` and `previous` step over one
//! element and remember it as the *last returned* element, which is the
//! implicit target of `set` and `remove`. Every mutation delegates to the
//! list's own indexed operations.
//!
//! The cursor holds the list's exclusive borrow, so the list cannot be
//! touched directly while the cursor is alive. [`Cursor::list_mut`] is the
//! one way around that; structural changes made through it are caught by
//! comparing the list's modification counter with the one the cursor last
//! saw, and reported as [`ListError::ConcurrentModification`].

use tracing::debug;

use crate::list::DynamicArrayList;
use crate::{ListError, Result};

const TARGET: &str = concat!(module_path!(), "::modification");

/// Direction of the move that produced the last returned element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Forward,
    Backward,
}

/// Element most recently stepped over, and which way
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LastReturned {
    index: usize,
    step: Step,
}

/// Bidirectional cursor over a [`DynamicArrayList`]
///
/// Created by [`DynamicArrayList::cursor`] or
/// [`DynamicArrayList::cursor_at`].
#[derive(Debug)]
pub struct Cursor<'a, T> {
    list: &'a mut DynamicArrayList<T>,

    /// Index of the element `next` would return, `0 <= position <= len`
    position: usize,

    /// `None` when fresh and right after `remove`/`add`
    last_returned: Option<LastReturned>,

    expected_modifications: u64,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(list: &'a mut DynamicArrayList<T>, position: usize) -> Self {
        debug_assert!(position <= list.len());
        let expected_modifications = list.modification_count();
        Self {
            list,
            position,
            last_returned: None,
            expected_modifications,
        }
    }

    /// Whether `next` would return an element
    pub fn has_next(&self) -> bool {
        self.position < self.list.len()
    }

    /// Whether `previous` would return an element
    pub fn has_previous(&self) -> bool {
        self.position > 0
    }

    /// Step forward over one element and return it
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&T> {
        self.check_for_modification()?;
        if !self.has_next() {
            return Err(ListError::NoSuchElement);
        }
        let index = self.position;
        self.position += 1;
        self.last_returned = Some(LastReturned {
            index,
            step: Step::Forward,
        });
        self.list.get(index)
    }

    /// Step backward over one element and return it
    pub fn previous(&mut self) -> Result<&T> {
        self.check_for_modification()?;
        if !self.has_previous() {
            return Err(ListError::NoSuchElement);
        }
        self.position -= 1;
        let index = self.position;
        self.last_returned = Some(LastReturned {
            index,
            step: Step::Backward,
        });
        self.list.get(index)
    }

    /// Index of the element `next` would return
    pub fn next_index(&self) -> usize {
        self.position
    }

    /// Index of the element `previous` would return, `None` at the front
    pub fn previous_index(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }

    /// Remove the last returned element and return it
    ///
    /// Fails with [`ListError::IllegalState`] if nothing was returned since the
    /// cursor was created or since the last `remove`/`add`.
    pub fn remove(&mut self) -> Result<T> {
        self.check_for_modification()?;
        let last = self.last_returned.ok_or(ListError::IllegalState)?;

        let value = self.list.remove(last.index)?;
        if last.step == Step::Forward {
            self.position -= 1;
        }
        self.last_returned = None;
        self.resync();
        Ok(value)
    }

    /// Replace the last returned element, returning the old value
    ///
    /// The cursor state is unchanged, so `set` may be called repeatedly.
    pub fn set(&mut self, value: T) -> Result<T> {
        self.check_for_modification()?;
        let last = self.last_returned.ok_or(ListError::IllegalState)?;
        self.list.set(last.index, value)
    }

    /// Insert `value` before the element `next` would return
    ///
    /// The cursor ends up after the new element, and the new element is not
    /// a valid target for `set`/`remove` until the cursor moves again.
    pub fn add(&mut self, value: T) -> Result<()> {
        self.check_for_modification()?;
        self.list.insert(self.position, value)?;
        self.position += 1;
        self.last_returned = None;
        self.resync();
        Ok(())
    }

    /// The list this cursor walks
    pub fn list(&self) -> &DynamicArrayList<T> {
        &*self.list
    }

    /// Direct mutable access to the underlying list
    ///
    /// Structural changes made through this reference are not tracked by the
    /// cursor: its next movement or mutation fails with
    /// [`ListError::ConcurrentModification`].
    pub fn list_mut(&mut self) -> &mut DynamicArrayList<T> {
        &mut *self.list
    }

    fn resync(&mut self) {
        self.expected_modifications = self.list.modification_count();
    }

    fn check_for_modification(&self) -> Result<()> {
        let found = self.list.modification_count();
        if found != self.expected_modifications {
            debug!(
                target: TARGET,
                expected = self.expected_modifications,
                found, "cursor detected concurrent modification"
            );
            return Err(ListError::ConcurrentModification {
                expected: self.expected_modifications,
                found,
            });
        }
        Ok(())
    }
}
