// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors returned by [`crate::BoundedList`].
//!
//! Every variant is a contract violation by the caller, not a transient condition. The
//! list never retries, and it never mutates its storage before returning one of these.
//! Since [`BoundedListError`] implements [`miette::Diagnostic`], it can be propagated with
//! `?` from any function that returns [`miette::Result`].

/// Type alias for results of [`crate::BoundedList`] operations. Unlike
/// [`miette::Result`] this keeps the concrete error type, so callers can match on the
/// kind of failure.
pub type BoundedListResult<T> = Result<T, BoundedListError>;

/// Errors from [`crate::BoundedList`] operations.
///
/// | Variant              | Raised by                                                  |
/// | :------------------- | :--------------------------------------------------------- |
/// | [`CapacityExceeded`] | any insertion while the list is full                       |
/// | [`EmptyList`]        | `pop*`, `find`, `contains`, `remove` on an empty list      |
/// | [`InvalidPosition`]  | `insert`, `pop`, `at` with an index outside the live range |
/// | [`ZeroMaxSize`]      | construction with a capacity of zero                       |
///
/// [`CapacityExceeded`]: Self::CapacityExceeded
/// [`EmptyList`]: Self::EmptyList
/// [`InvalidPosition`]: Self::InvalidPosition
/// [`ZeroMaxSize`]: Self::ZeroMaxSize
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum BoundedListError {
    /// The list already holds `max_size - 1` items.
    #[error("📦 List is full (max_size: {max_size})")]
    #[diagnostic(
        code(r3bl_bounded_list::capacity_exceeded),
        help("Check `full()` before inserting, or construct the list with a larger max_size.")
    )]
    CapacityExceeded { max_size: usize },

    /// The operation needs at least one item.
    #[error("🫙 List is empty")]
    #[diagnostic(
        code(r3bl_bounded_list::empty_list),
        help("Check `empty()` before removing or searching.")
    )]
    EmptyList,

    /// `index` is outside the live range of the list, which currently holds `size`
    /// items.
    #[error("🔍 Invalid position {index} (size: {size})")]
    #[diagnostic(
        code(r3bl_bounded_list::invalid_position),
        help("Valid positions are 0 ..= last_index. Use `push_back()` to append.")
    )]
    InvalidPosition { index: usize, size: usize },

    /// A list must have room for its reserved slot.
    #[error("🚫 max_size must be greater than zero")]
    #[diagnostic(code(r3bl_bounded_list::zero_max_size))]
    ZeroMaxSize,
}
