// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_bounded_list
//!
//! [`BoundedList`] is an ordered list with a fixed capacity. Its items live in one heap
//! block that is allocated when the list is created, and the list never reallocates.
//! Instead of growing, insertions into a full list fail with
//! [`BoundedListError::CapacityExceeded`].
//!
//! It is a building block for other algorithms that need:
//! - Push and pop at both ends, plus positional [`BoundedList::insert`] and
//!   [`BoundedList::pop`].
//! - Linear search with [`BoundedList::find`], [`BoundedList::contains`], and
//!   [`BoundedList::remove`].
//! - Keeping items sorted with [`BoundedList::insert_sorted`].
//! - Checked ([`BoundedList::at`]) and unchecked (`list[index]`,
//!   [`BoundedList::get_unchecked`]) access by position.
//!
//! A list created with a `max_size` of `N` holds at most `N - 1` items, since one slot
//! is kept free.
//!
//! # Errors
//!
//! All fallible operations return [`BoundedListResult`], so the kind of failure can be
//! matched on. [`BoundedListError`] is also a [`miette::Diagnostic`], so `?` works in
//! functions that return [`miette::Result`].
//!
//! # Logging
//!
//! Rejected operations are logged with [`tracing::warn!`] and structural changes with
//! [`tracing::trace!`]. This crate never installs a subscriber, that is up to the
//! application.
//!
//! # Thread safety
//!
//! None is provided. The list assumes a single owner. Wrap it (for example in a
//! [`std::sync::Mutex`]) to share it.
//!
//! # Example
//!
//! ```
//! use r3bl_bounded_list::{BoundedList, BoundedListError};
//!
//! # fn main() -> miette::Result<()> {
//! let mut list = BoundedList::with_max_size(4)?;
//! list.push_back(1)?;
//! list.push_back(2)?;
//! list.push_back(3)?;
//! assert!(list.full());
//!
//! assert_eq!(
//!     list.push_back(4),
//!     Err(BoundedListError::CapacityExceeded { max_size: 4 })
//! );
//!
//! assert_eq!(list.pop_front()?, 1);
//! assert_eq!(list.size(), 2);
//! # Ok(())
//! # }
//! ```

// Production library code denies `unwrap()` in functions returning `Result`. Test code
// is allowed to use it (the workspace `Cargo.toml` allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod bounded_list_error;
pub mod bounded_list_impl;

// Re-export.
pub use bounded_list_error::*;
pub use bounded_list_impl::*;
