// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A fixed capacity array list that keeps its items in a single heap block, which is
//! allocated once when the list is constructed and never grown.
//!
//! Items always occupy the contiguous prefix `[0, last_index]` of the block. Inserting in
//! the middle or at the front shifts the tail one slot higher, removing shifts it one
//! slot lower. One slot of the block is always kept free, so a list with a `max_size` of
//! `N` holds at most `N - 1` items.

use std::{fmt::{Debug, Formatter, Result as FmtResult},
          ops::{Index, IndexMut}};

use crate::{BoundedListError, BoundedListResult};

/// Capacity used by [`BoundedList::new`] and [`Default`].
pub const DEFAULT_MAX_SIZE: usize = 10;

/// Which part of the block holds live items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Occupancy {
    Empty,
    NonEmpty { last_index: usize },
}

/// A fixed capacity, ordered list.
///
/// # Capacity
///
/// The block has `max_size` slots, but one of them is reserved: [`Self::full`] is true
/// once the list holds `max_size - 1` items, and any further insertion fails with
/// [`BoundedListError::CapacityExceeded`].
///
/// # Access
///
/// There are three ways to reach an item by position:
/// 1. [`Self::at`] and [`Self::at_mut`] validate the position and return
///    [`BoundedListError::InvalidPosition`] when it is outside `[0, last_index]`.
/// 2. `list[index]` does no contract validation. It panics when the slot at `index` is
///    vacant or beyond `max_size`.
/// 3. [`Self::get_unchecked`] does no validation at all, and is `unsafe`.
///
/// # Examples
///
/// ```
/// use r3bl_bounded_list::{BoundedList, BoundedListError};
///
/// let mut list = BoundedList::with_max_size(5).unwrap();
/// list.insert_sorted(5).unwrap();
/// list.insert_sorted(3).unwrap();
/// list.insert_sorted(4).unwrap();
///
/// assert_eq!(list.size(), 3);
/// assert_eq!(list[0], 3);
/// assert_eq!(list.at(2), Ok(&5));
/// assert_eq!(list.at(3), Err(BoundedListError::InvalidPosition { index: 3, size: 3 }));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BoundedList<T> {
    /// Slots outside `[0, last_index]` are always [`None`].
    internal_storage: Box<[Option<T>]>,
    occupancy: Occupancy,
}

impl<T> Default for BoundedList<T> {
    fn default() -> Self { Self::new() }
}

impl<T> BoundedList<T> {
    /// Create a list with [`DEFAULT_MAX_SIZE`] slots.
    #[must_use]
    pub fn new() -> Self {
        Self {
            internal_storage: allocate_storage(DEFAULT_MAX_SIZE),
            occupancy: Occupancy::Empty,
        }
    }

    /// Create a list with `max_size` slots. Since one slot is reserved, a list created
    /// with a `max_size` of 1 is always full.
    ///
    /// # Errors
    ///
    /// Returns [`BoundedListError::ZeroMaxSize`] if `max_size` is 0.
    #[tracing::instrument(level = "debug")]
    pub fn with_max_size(max_size: usize) -> BoundedListResult<Self> {
        if max_size == 0 {
            tracing::warn!(message = "🚫 rejected list with zero max_size");
            return Err(BoundedListError::ZeroMaxSize);
        }

        Ok(Self {
            internal_storage: allocate_storage(max_size),
            occupancy: Occupancy::Empty,
        })
    }
}

fn allocate_storage<T>(max_size: usize) -> Box<[Option<T>]> {
    (0..max_size).map(|_| None).collect()
}

// Size.
impl<T> BoundedList<T> {
    #[must_use]
    pub fn max_size(&self) -> usize { self.internal_storage.len() }

    #[must_use]
    pub fn size(&self) -> usize {
        match self.occupancy {
            Occupancy::Empty => 0,
            Occupancy::NonEmpty { last_index } => last_index + 1,
        }
    }

    /// Index of the last item, or [`None`] if the list is empty.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        match self.occupancy {
            Occupancy::Empty => None,
            Occupancy::NonEmpty { last_index } => Some(last_index),
        }
    }

    #[must_use]
    pub fn empty(&self) -> bool { self.occupancy == Occupancy::Empty }

    /// True once the list holds `max_size - 1` items.
    #[must_use]
    pub fn full(&self) -> bool { self.size() + 1 == self.max_size() }

    fn live_slots(&self) -> &[Option<T>] { &self.internal_storage[..self.size()] }

    fn live_slots_mut(&mut self) -> &mut [Option<T>] {
        let size = self.size();
        &mut self.internal_storage[..size]
    }

    fn set_size(&mut self, size: usize) {
        self.occupancy = match size.checked_sub(1) {
            Some(last_index) => Occupancy::NonEmpty { last_index },
            None => Occupancy::Empty,
        };
    }
}

// Mutators.
impl<T> BoundedList<T> {
    /// Remove all items. The block is kept, so the capacity does not change.
    pub fn clear(&mut self) {
        self.live_slots_mut().iter_mut().for_each(|slot| *slot = None);
        self.occupancy = Occupancy::Empty;
        tracing::trace!(message = "cleared list", max_size = self.max_size());
    }

    /// Append `value` after the last item.
    ///
    /// # Errors
    ///
    /// Returns [`BoundedListError::CapacityExceeded`] if the list is full.
    pub fn push_back(&mut self, value: T) -> BoundedListResult<()> {
        self.ensure_not_full("push_back")?;
        let size = self.size();
        self.internal_storage[size] = Some(value);
        self.set_size(size + 1);

        tracing::trace!(message = "pushed item", index = size, size = self.size());
        Ok(())
    }

    /// Prepend `value`, shifting every item one slot higher.
    ///
    /// # Errors
    ///
    /// Returns [`BoundedListError::CapacityExceeded`] if the list is full.
    pub fn push_front(&mut self, value: T) -> BoundedListResult<()> {
        self.ensure_not_full("push_front")?;
        self.shift_in(value, 0);
        Ok(())
    }

    /// Insert `value` at `index`, shifting the items at and after `index` one slot higher.
    ///
    /// `index` has to point at an existing item (or be 0 when the list is empty). Use
    /// [`Self::push_back`] to append.
    ///
    /// # Errors
    ///
    /// - [`BoundedListError::CapacityExceeded`] if the list is full.
    /// - [`BoundedListError::InvalidPosition`] if `index` is past the last item.
    pub fn insert(&mut self, value: T, index: usize) -> BoundedListResult<()> {
        self.ensure_not_full("insert")?;

        let is_valid_position = match self.occupancy {
            Occupancy::Empty => index == 0,
            Occupancy::NonEmpty { last_index } => index <= last_index,
        };
        if !is_valid_position {
            return Err(invalid_position("insert", index, self.size()));
        }

        self.shift_in(value, index);
        Ok(())
    }

    /// Insert `value` before the first item that is strictly greater than it, so a list
    /// built only with this method stays in non-decreasing order. Items that compare
    /// equal to `value` keep their place in front of it.
    ///
    /// # Errors
    ///
    /// Returns [`BoundedListError::CapacityExceeded`] if the list is full.
    pub fn insert_sorted(&mut self, value: T) -> BoundedListResult<()>
    where
        T: PartialOrd,
    {
        self.ensure_not_full("insert_sorted")?;

        let index = self
            .live_slots()
            .iter()
            .position(|slot| matches!(slot, Some(item) if *item > value))
            .unwrap_or_else(|| self.size());

        self.shift_in(value, index);
        Ok(())
    }

    /// Remove and return the item at `index`, shifting the items after it one slot
    /// lower.
    ///
    /// # Errors
    ///
    /// - [`BoundedListError::EmptyList`] if the list is empty.
    /// - [`BoundedListError::InvalidPosition`] if `index` is past the last item.
    pub fn pop(&mut self, index: usize) -> BoundedListResult<T> {
        if self.empty() {
            return Err(empty_list("pop"));
        }

        let size = self.size();
        let Some(value) = self.live_slots_mut().get_mut(index).and_then(Option::take) else {
            return Err(invalid_position("pop", index, size));
        };

        // The vacated slot moves to the end of the live range. Nothing past
        // `last_index` is touched.
        self.internal_storage[index..size].rotate_left(1);
        self.set_size(size - 1);

        tracing::trace!(message = "popped item", index, size = self.size());
        Ok(value)
    }

    /// Remove and return the last item.
    ///
    /// # Errors
    ///
    /// Returns [`BoundedListError::EmptyList`] if the list is empty.
    pub fn pop_back(&mut self) -> BoundedListResult<T> {
        let last_index = self.last_index().ok_or_else(|| empty_list("pop_back"))?;
        self.pop(last_index)
    }

    /// Remove and return the first item.
    ///
    /// # Errors
    ///
    /// Returns [`BoundedListError::EmptyList`] if the list is empty.
    pub fn pop_front(&mut self) -> BoundedListResult<T> {
        if self.empty() {
            return Err(empty_list("pop_front"));
        }
        self.pop(0)
    }

    /// Remove the first item equal to `value`, and return it. Does nothing if no such
    /// item exists.
    ///
    /// # Errors
    ///
    /// Returns [`BoundedListError::EmptyList`] if the list is empty, since the search goes
    /// through [`Self::find`].
    pub fn remove(&mut self, value: &T) -> BoundedListResult<Option<T>>
    where
        T: PartialEq,
    {
        let index = self.find(value)?;
        if index == self.max_size() {
            return Ok(None);
        }
        self.pop(index).map(Some)
    }

    /// Write `value` into `index` after moving `[index, last_index]` one slot higher.
    /// The caller has checked that the list is not full and `index <= size`.
    fn shift_in(&mut self, value: T, index: usize) {
        let size = self.size();
        // Slot `size` is vacant, and rotating it to the front of the range frees `index`.
        self.internal_storage[index..=size].rotate_right(1);
        self.internal_storage[index] = Some(value);
        self.set_size(size + 1);

        tracing::trace!(message = "inserted item", index, size = self.size());
    }

    fn ensure_not_full(&self, operation: &'static str) -> BoundedListResult<()> {
        if self.full() {
            let max_size = self.max_size();
            // % is Display, ? is Debug.
            tracing::warn!(message = "📦 list is full", operation = %operation, max_size);
            return Err(BoundedListError::CapacityExceeded { max_size });
        }
        Ok(())
    }
}

// Search.
impl<T: PartialEq> BoundedList<T> {
    /// Return the index of the first item equal to `value`.
    ///
    /// When there is no such item, this returns [`Self::max_size`], which is never a
    /// valid index. Compare against it before using the result.
    ///
    /// # Errors
    ///
    /// Returns [`BoundedListError::EmptyList`] if the list is empty.
    pub fn find(&self, value: &T) -> BoundedListResult<usize> {
        if self.empty() {
            return Err(empty_list("find"));
        }

        Ok(self
            .live_slots()
            .iter()
            .position(|slot| slot.as_ref() == Some(value))
            .unwrap_or_else(|| self.max_size()))
    }

    /// # Errors
    ///
    /// Returns [`BoundedListError::EmptyList`] if the list is empty, since the search goes
    /// through [`Self::find`].
    pub fn contains(&self, value: &T) -> BoundedListResult<bool> {
        let index = self.find(value)?;
        Ok(index != self.max_size())
    }
}

// Access.
impl<T> BoundedList<T> {
    /// # Errors
    ///
    /// Returns [`BoundedListError::InvalidPosition`] if `index` is past the last item.
    pub fn at(&self, index: usize) -> BoundedListResult<&T> {
        let size = self.size();
        self.live_slots()
            .get(index)
            .and_then(Option::as_ref)
            .ok_or_else(|| invalid_position("at", index, size))
    }

    /// # Errors
    ///
    /// Returns [`BoundedListError::InvalidPosition`] if `index` is past the last item.
    pub fn at_mut(&mut self, index: usize) -> BoundedListResult<&mut T> {
        let size = self.size();
        self.live_slots_mut()
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or_else(|| invalid_position("at_mut", index, size))
    }

    /// # Safety
    ///
    /// `index` must be in `[0, last_index]`. Anything else is undefined behavior.
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: The caller guarantees that `index` is a live slot, and live slots are
        // always `Some`.
        unsafe {
            self.internal_storage
                .get_unchecked(index)
                .as_ref()
                .unwrap_unchecked()
        }
    }

    /// # Safety
    ///
    /// `index` must be in `[0, last_index]`. Anything else is undefined behavior.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: Same as `get_unchecked`.
        unsafe {
            self.internal_storage
                .get_unchecked_mut(index)
                .as_mut()
                .unwrap_unchecked()
        }
    }
}

impl<T> Index<usize> for BoundedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.internal_storage[index].as_ref() {
            Some(item) => item,
            None => panic!(
                "Index out of bounds: the size is {} but the index is {}",
                self.size(),
                index
            ),
        }
    }
}

impl<T> IndexMut<usize> for BoundedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let size = self.size();
        match self.internal_storage[index].as_mut() {
            Some(item) => item,
            None => panic!(
                "Index out of bounds: the size is {size} but the index is {index}"
            ),
        }
    }
}

/// Only the live items are printed, stale slots are skipped.
impl<T: Debug> Debug for BoundedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("BoundedList")
            .field("max_size", &self.max_size())
            .field("items", &LiveItems(self.live_slots()))
            .finish()
    }
}

struct LiveItems<'a, T>(&'a [Option<T>]);

impl<T: Debug> Debug for LiveItems<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_list().entries(self.0.iter().flatten()).finish()
    }
}

fn empty_list(operation: &'static str) -> BoundedListError {
    tracing::warn!(message = "🫙 list is empty", operation = %operation);
    BoundedListError::EmptyList
}

fn invalid_position(operation: &'static str, index: usize, size: usize) -> BoundedListError {
    tracing::warn!(message = "🔍 invalid position", operation = %operation, index, size);
    BoundedListError::InvalidPosition { index, size }
}
