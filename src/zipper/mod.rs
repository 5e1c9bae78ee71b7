//! The list zipper - an immutable, non-empty focused sequence.
//!
//! This module provides [`Zipper`], an ordered, non-empty sequence of
//! elements with one element marked as *focused*, represented as the triple
//! `(before, focus, after)`.
//!
//! # Structural Sharing
//!
//! The two sides of a zipper are persistent cons stacks whose nodes are
//! reference-counted. Moving the focus one step therefore costs O(1) and
//! shares all untouched nodes with the source zipper, and cloning a zipper
//! is O(1). This is what makes [`Zipper::duplicate`] O(n) overall: each
//! neighboring view is derived from its predecessor by a single navigation
//! step rather than rebuilt from scratch.
//!
//! # Examples
//!
//! ```rust
//! use focal::zipper::Zipper;
//!
//! let zipper = Zipper::new([1], 2, [3, 4]);
//! assert_eq!(zipper.to_vec(), vec![1, 2, 3, 4]);
//! assert_eq!(*zipper.focus(), 2);
//!
//! // Navigation never loses elements, it only moves the focus
//! let moved = zipper.right();
//! assert_eq!(*moved.focus(), 3);
//! assert_eq!(moved.to_vec(), zipper.to_vec());
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod list;
mod stack;

pub use list::NeighborIterator;
pub use list::Zipper;
pub use list::ZipperIntoIterator;
pub use list::ZipperIterator;

// =============================================================================
// Tests
// =============================================================================
