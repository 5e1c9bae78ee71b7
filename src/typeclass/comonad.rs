//! Comonad type class - context-aware computation.
//!
//! This module provides the `Comonad` trait, the dual of a monad: where a
//! monad builds values *into* a context, a comonad extracts values *out of*
//! a context and lets a function observe the full context surrounding each
//! value.
//!
//! The motivating instance is the list zipper: `duplicate` turns a zipper
//! into a zipper *of zippers*, one per position, and `extend` maps a
//! neighborhood-aware function over all of those views at once.
//!
//! # Laws
//!
//! All `Comonad` implementations must satisfy these laws:
//!
//! ## Left Identity
//!
//! Duplicating and extracting the center recovers the original:
//!
//! ```text
//! wa.duplicate().extract() == wa
//! ```
//!
//! ## Right Identity
//!
//! Extracting at every position after duplication reconstructs the original
//! element-wise; equivalently, extending with pure extraction is identity:
//!
//! ```text
//! wa.duplicate().fmap_ref(|w| w.extract()) == wa
//! wa.extend(|w| w.extract()) == wa
//! ```
//!
//! ## Associativity
//!
//! Duplicating twice is the same as duplicating then mapping `duplicate`
//! over each position:
//!
//! ```text
//! wa.duplicate().duplicate() == wa.duplicate().fmap_ref(|w| w.duplicate())
//! ```
//!
//! These laws are not incidental: they are the implementation-correctness
//! contract, and the test suite verifies them with property-based tests.
//!
//! # Examples
//!
//! ```rust
//! use focal::typeclass::Comonad;
//! use focal::zipper::Zipper;
//!
//! let zipper = Zipper::new([1, 2], 3, [4, 5]);
//!
//! // `extract` reads the focus
//! assert_eq!(zipper.extract(), 3);
//!
//! // `extend` applies a neighborhood-aware function at every position
//! let sums = zipper.extend(|view| view.extract() + view.iter_after().count() as i32);
//! assert_eq!(sums.to_vec(), vec![5, 5, 5, 5, 5]);
//! ```

use super::functor::Functor;

/// A type class for containers that expose the context around every value.
///
/// `Comonad` extends [`Functor`] with three operations:
///
/// - [`extract`](Comonad::extract): read the currently focused value
/// - [`duplicate`](Comonad::duplicate): expose every position's full context
///   by producing a container of containers, one per position
/// - [`extend`](Comonad::extend): derive a new container by applying a
///   context-aware function at every position
///
/// `extend` is always equivalent to `duplicate` followed by mapping, and
/// implementations must satisfy the three laws documented in the
/// [module documentation](self).
///
/// # Examples
///
/// ```rust
/// use focal::typeclass::{Comonad, Identity};
///
/// // Identity is the trivial comonad: there is no context beyond the value
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.extract(), 42);
/// assert_eq!(wrapped.duplicate(), Identity::new(Identity::new(42)));
/// ```
pub trait Comonad: Functor {
    /// Returns the focused value.
    ///
    /// Total and side-effect free. The value is cloned out of the
    /// container; use a container-specific accessor when a reference
    /// suffices.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::typeclass::{Comonad, Identity};
    ///
    /// assert_eq!(Identity::new(7).extract(), 7);
    /// ```
    fn extract(&self) -> Self::Inner;

    /// Exposes every position's full context.
    ///
    /// The result is a container of containers with the same shape as
    /// `self`: the value at each position is a view of the whole structure
    /// re-focused at that position, and the focus of the result is `self`
    /// itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::typeclass::Comonad;
    /// use focal::zipper::Zipper;
    ///
    /// let zipper = Zipper::new([1], 2, [3]);
    /// let views = zipper.duplicate();
    /// assert_eq!(views.extract(), zipper);
    /// assert_eq!(views.len(), zipper.len());
    /// ```
    fn duplicate(&self) -> Self::WithType<Self>
    where
        Self: Sized;

    /// Applies a context-aware function at every position.
    ///
    /// Equivalent to `duplicate` followed by mapping `function` over each
    /// view, producing one output value per position, each computed from a
    /// view centered at that position.
    ///
    /// # Arguments
    ///
    /// * `function` - A function from a re-focused view to an output value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::typeclass::Comonad;
    /// use focal::zipper::Zipper;
    ///
    /// let zipper = Zipper::new([1, 2], 3, [4]);
    /// let positions = zipper.extend(|view| view.position());
    /// assert_eq!(positions.to_vec(), vec![0, 1, 2, 3]);
    /// ```
    fn extend<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self) -> B,
        Self: Sized;
}
