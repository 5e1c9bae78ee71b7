//! The list zipper data type and its operations.
//!
//! # Overview
//!
//! [`Zipper`] is an immutable, non-empty sequence with a distinguished
//! focused element, represented as the triple `(before, focus, after)`:
//!
//! - `before`: the elements to the left of the focus
//! - `focus`: the focused element, always present
//! - `after`: the elements to the right of the focus
//!
//! Either side may be empty; the zipper as a whole never is. The logical
//! sequence is always `before ++ [focus] ++ after`, and navigation moves
//! only the focus, never the elements.
//!
//! | Operation   | Complexity |
//! |-------------|------------|
//! | `try_left`  | O(1)       |
//! | `try_right` | O(1)       |
//! | `focus`     | O(1)       |
//! | `clone`     | O(1)       |
//! | `map`       | O(n)       |
//! | `duplicate` | O(n)       |
//! | `extend`    | O(n) + n calls of the transformation |
//! | `to_vec`    | O(n)       |
//!
//! # Examples
//!
//! ```rust
//! use focal::zipper::Zipper;
//!
//! let zipper = Zipper::new([1], 2, [3, 4]);
//!
//! // Boundary conditions are absences, not errors
//! let leftmost = zipper.try_left().unwrap();
//! assert_eq!(*leftmost.focus(), 1);
//! assert_eq!(leftmost.try_left(), None);
//!
//! // Context-aware transformation: each output sees its neighborhood
//! let shifted = zipper.extend(|view| view.peek_left().copied().unwrap_or(0));
//! assert_eq!(shifted.to_vec(), vec![0, 1, 2, 3]);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use static_assertions::assert_impl_all;

use super::stack::{Stack, StackIterator};

#[cfg(feature = "typeclass")]
use crate::typeclass::{Comonad, Functor, TypeConstructor};

/// An immutable, non-empty sequence with a focused element.
///
/// A `Zipper` denotes the logical sequence `before ++ [focus] ++ after`.
/// Every operation returns a new zipper; nothing is ever mutated in place.
/// Both sides use reference-counted spines, so navigation and cloning are
/// O(1) and share structure with the source.
///
/// # Examples
///
/// ```rust
/// use focal::zipper::Zipper;
///
/// let zipper = Zipper::new([1, 2], 3, [4, 5]);
/// assert_eq!(*zipper.focus(), 3);
/// assert_eq!(zipper.len(), 5);
/// assert_eq!(zipper.position(), 2);
///
/// // The original is untouched by navigation
/// let moved = zipper.left();
/// assert_eq!(*moved.focus(), 2);
/// assert_eq!(*zipper.focus(), 3);
/// ```
#[derive(Clone)]
pub struct Zipper<T> {
    /// Elements to the left of the focus, nearest to the focus on top.
    before: Stack<T>,
    /// The focused element.
    focus: T,
    /// Elements to the right of the focus, nearest to the focus on top.
    after: Stack<T>,
}

impl<T> Zipper<T> {
    /// Creates a zipper from leading elements, a focus, and trailing
    /// elements.
    ///
    /// `before` is given in left-to-right order (its last element is the
    /// focus's immediate left neighbor); `after` likewise (its first
    /// element is the immediate right neighbor). Either may be empty; no
    /// validation is needed because any such triple is well-formed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::zipper::Zipper;
    ///
    /// let zipper = Zipper::new([1, 2], 3, [4, 5]);
    /// assert_eq!(zipper.to_vec(), vec![1, 2, 3, 4, 5]);
    /// assert_eq!(zipper.peek_left(), Some(&2));
    /// assert_eq!(zipper.peek_right(), Some(&4));
    /// ```
    #[must_use]
    pub fn new<B, A>(before: B, focus: T, after: A) -> Self
    where
        B: IntoIterator<Item = T>,
        A: IntoIterator<Item = T>,
    {
        Self {
            before: before
                .into_iter()
                .fold(Stack::new(), |stack, element| stack.push(element)),
            focus,
            after: Stack::from_top_down(after.into_iter().collect()),
        }
    }

    /// Creates a zipper containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::zipper::Zipper;
    ///
    /// let zipper = Zipper::singleton(42);
    /// assert_eq!(zipper.len(), 1);
    /// assert_eq!(zipper.try_left(), None);
    /// assert_eq!(zipper.try_right(), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn singleton(focus: T) -> Self {
        Self {
            before: Stack::new(),
            focus,
            after: Stack::new(),
        }
    }

    /// Creates a zipper from a sequence, focusing its first element.
    ///
    /// Returns `None` when the sequence is empty, since a zipper cannot be.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::zipper::Zipper;
    ///
    /// let zipper = Zipper::from_vec(vec![1, 2, 3]).unwrap();
    /// assert_eq!(*zipper.focus(), 1);
    /// assert_eq!(zipper.position(), 0);
    ///
    /// assert_eq!(Zipper::<i32>::from_vec(vec![]), None);
    /// ```
    #[must_use]
    pub fn from_vec(elements: Vec<T>) -> Option<Self> {
        let mut iterator = elements.into_iter();
        let focus = iterator.next()?;
        Some(Self {
            before: Stack::new(),
            focus,
            after: Stack::from_top_down(iterator.collect()),
        })
    }

    /// Returns a reference to the focused element.
    #[inline]
    #[must_use]
    pub const fn focus(&self) -> &T {
        &self.focus
    }

    /// Returns a reference to the focus's immediate left neighbor, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::zipper::Zipper;
    ///
    /// let zipper = Zipper::new([1, 2], 3, [4]);
    /// assert_eq!(zipper.peek_left(), Some(&2));
    /// assert_eq!(Zipper::singleton(0).peek_left(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn peek_left(&self) -> Option<&T> {
        self.before.peek()
    }

    /// Returns a reference to the focus's immediate right neighbor, if any.
    #[inline]
    #[must_use]
    pub fn peek_right(&self) -> Option<&T> {
        self.after.peek()
    }

    /// Returns the number of elements in the logical sequence.
    ///
    /// Always at least 1.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.before.len() + 1 + self.after.len()
    }

    /// Returns `false`: a zipper always contains at least its focus.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the index of the focus within the logical sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::zipper::Zipper;
    ///
    /// let zipper = Zipper::new([1, 2], 3, [4]);
    /// assert_eq!(zipper.position(), 2);
    /// assert_eq!(zipper.left().position(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.before.len()
    }

    /// Returns an iterator over references to the elements in logical
    /// order.
    ///
    /// Creating the iterator is O(n) because the left side is stored
    /// nearest-to-focus first and must be reversed once up front.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::zipper::Zipper;
    ///
    /// let zipper = Zipper::new([1, 2], 3, [4, 5]);
    /// let collected: Vec<&i32> = zipper.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3, &4, &5]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> ZipperIterator<'_, T> {
        let mut front: Vec<&T> = self.before.iter().collect();
        front.reverse();
        ZipperIterator {
            front: front.into_iter(),
            focus: Some(&self.focus),
            back: self.after.iter(),
        }
    }

    /// Returns an iterator over the elements before the focus,
    /// nearest-to-focus first.
    ///
    /// Note the order is the reverse of the logical sequence: the first
    /// item is the immediate left neighbor. This is the natural order for
    /// neighborhood computations such as a windowed average.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::zipper::Zipper;
    ///
    /// let zipper = Zipper::new([1, 2, 3], 4, []);
    /// let nearest: Vec<&i32> = zipper.iter_before().collect();
    /// assert_eq!(nearest, vec![&3, &2, &1]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter_before(&self) -> NeighborIterator<'_, T> {
        NeighborIterator {
            inner: self.before.iter(),
        }
    }

    /// Returns an iterator over the elements after the focus,
    /// nearest-to-focus first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::zipper::Zipper;
    ///
    /// let zipper = Zipper::new([], 1, [2, 3, 4]);
    /// let nearest: Vec<&i32> = zipper.iter_after().collect();
    /// assert_eq!(nearest, vec![&2, &3, &4]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter_after(&self) -> NeighborIterator<'_, T> {
        NeighborIterator {
            inner: self.after.iter(),
        }
    }

    /// Applies a function to every element, preserving the structure and
    /// the focus position.
    ///
    /// This is the functor mapping: the result has the same length and the
    /// same focus position, with each element replaced by the function's
    /// output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::zipper::Zipper;
    ///
    /// let zipper = Zipper::new([1], 2, [3]);
    /// let doubled = zipper.map(|n| n * 2);
    /// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
    /// assert_eq!(doubled.position(), zipper.position());
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, mut function: F) -> Zipper<U>
    where
        F: FnMut(&T) -> U,
    {
        let before: Vec<U> = self.before.iter().map(&mut function).collect();
        let focus = function(&self.focus);
        let after: Vec<U> = self.after.iter().map(&mut function).collect();
        Zipper {
            before: Stack::from_top_down(before),
            focus,
            after: Stack::from_top_down(after),
        }
    }
}

impl<T: Clone> Zipper<T> {
    /// Returns the elements before the focus in left-to-right order.
    ///
    /// The last element of the result, if any, is the focus's immediate
    /// left neighbor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::zipper::Zipper;
    ///
    /// let zipper = Zipper::new([1, 2], 3, [4]);
    /// assert_eq!(zipper.before(), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn before(&self) -> Vec<T> {
        let mut elements: Vec<T> = self.before.iter().cloned().collect();
        elements.reverse();
        elements
    }

    /// Returns the elements after the focus in left-to-right order.
    ///
    /// The first element of the result, if any, is the focus's immediate
    /// right neighbor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::zipper::Zipper;
    ///
    /// let zipper = Zipper::new([1, 2], 3, [4, 5]);
    /// assert_eq!(zipper.after(), vec![4, 5]);
    /// ```
    #[must_use]
    pub fn after(&self) -> Vec<T> {
        self.after.iter().cloned().collect()
    }

    /// Returns the whole logical sequence as a `Vec`, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::zipper::Zipper;
    ///
    /// let zipper = Zipper::new([1], 2, [3, 4]);
    /// assert_eq!(zipper.to_vec(), vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Attempts to move the focus one position toward the start.
    ///
    /// Returns `None` when there is no left neighbor. Reaching the boundary
    /// is an expected outcome, not an error. The logical sequence is
    /// unchanged; only the focus position moves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::zipper::Zipper;
    ///
    /// let zipper = Zipper::new([1], 2, [3, 4]);
    /// let moved = zipper.try_left().unwrap();
    /// assert_eq!(*moved.focus(), 1);
    /// assert_eq!(moved.to_vec(), vec![1, 2, 3, 4]);
    /// assert_eq!(moved.try_left(), None);
    /// ```
    #[must_use]
    pub fn try_left(&self) -> Option<Self> {
        let (nearest, rest) = self.before.pop()?;
        Some(Self {
            before: rest,
            focus: nearest.clone(),
            after: self.after.push(self.focus.clone()),
        })
    }

    /// Attempts to move the focus one position toward the end.
    ///
    /// Returns `None` when there is no right neighbor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::zipper::Zipper;
    ///
    /// let zipper = Zipper::new([], 1, [2]);
    /// let moved = zipper.try_right().unwrap();
    /// assert_eq!(*moved.focus(), 2);
    /// assert_eq!(moved.try_right(), None);
    /// ```
    #[must_use]
    pub fn try_right(&self) -> Option<Self> {
        let (nearest, rest) = self.after.pop()?;
        Some(Self {
            before: self.before.push(self.focus.clone()),
            focus: nearest.clone(),
            after: rest,
        })
    }

    /// Moves the focus one position toward the start, staying put at the
    /// boundary.
    ///
    /// Total: at the left boundary this returns a clone of `self`
    /// unchanged, so repeated calls are idempotent there.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::zipper::Zipper;
    ///
    /// let zipper = Zipper::new([1], 2, []);
    /// assert_eq!(*zipper.left().focus(), 1);
    /// assert_eq!(zipper.left().left(), zipper.left());
    /// ```
    #[inline]
    #[must_use]
    pub fn left(&self) -> Self {
        self.try_left().unwrap_or_else(|| self.clone())
    }

    /// Moves the focus one position toward the end, staying put at the
    /// boundary.
    #[inline]
    #[must_use]
    pub fn right(&self) -> Self {
        self.try_right().unwrap_or_else(|| self.clone())
    }

    /// Returns a clone of the focused element.
    ///
    /// This is the comonadic `extract`. Use [`focus`](Self::focus) when a
    /// reference suffices.
    #[inline]
    #[must_use]
    pub fn extract(&self) -> T {
        self.focus.clone()
    }

    /// Exposes every position's full context.
    ///
    /// Produces a zipper of zippers: the focus of the result is `self`, the
    /// left side holds the views reachable by walking left, and the right
    /// side the views reachable by walking right, each centered at a
    /// distinct position of the original sequence. The result has exactly
    /// as many elements as the original.
    ///
    /// Each view is derived from its predecessor by a single O(1)
    /// navigation step, so the whole operation is O(n).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::zipper::Zipper;
    ///
    /// let zipper = Zipper::new([1], 2, [3]);
    /// let views = zipper.duplicate();
    ///
    /// assert_eq!(views.len(), zipper.len());
    /// assert_eq!(*views.focus(), zipper);
    /// let positions: Vec<usize> = views.to_vec().iter().map(|v| v.position()).collect();
    /// assert_eq!(positions, vec![0, 1, 2]);
    /// ```
    #[must_use]
    pub fn duplicate(&self) -> Zipper<Self> {
        let mut lefts = Vec::with_capacity(self.before.len());
        let mut cursor = self.clone();
        while let Some(view) = cursor.try_left() {
            cursor = view.clone();
            lefts.push(view);
        }

        let mut rights = Vec::with_capacity(self.after.len());
        cursor = self.clone();
        while let Some(view) = cursor.try_right() {
            cursor = view.clone();
            rights.push(view);
        }

        Zipper {
            before: Stack::from_top_down(lefts),
            focus: self.clone(),
            after: Stack::from_top_down(rights),
        }
    }

    /// Applies a context-aware function at every position.
    ///
    /// Equivalent to [`duplicate`](Self::duplicate) followed by
    /// [`map`](Self::map): the function receives a view of the whole
    /// sequence centered at each position in turn, with full access to that
    /// position's neighborhood, and its outputs form the new zipper.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::zipper::Zipper;
    ///
    /// // Running maximum over each position's prefix
    /// let zipper = Zipper::new([2, 1, 3, 4, 5], 1, [2]);
    /// let maxima = zipper.extend(|view| {
    ///     view.iter_before().fold(view.extract(), |max, e| max.max(*e))
    /// });
    /// assert_eq!(maxima, Zipper::new([2, 2, 3, 4, 5], 5, [5]));
    /// ```
    #[must_use]
    pub fn extend<U, F>(&self, function: F) -> Zipper<U>
    where
        F: FnMut(&Self) -> U,
    {
        self.duplicate().map(function)
    }

    /// Returns a zipper with `suffix` appended at the end of the sequence.
    ///
    /// The focus and everything before it are unchanged; the order of
    /// `suffix` is preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::zipper::Zipper;
    ///
    /// let zipper = Zipper::new([1], 2, [3]);
    /// let extended = zipper.append([4, 5]);
    /// assert_eq!(extended.to_vec(), vec![1, 2, 3, 4, 5]);
    /// assert_eq!(extended.position(), zipper.position());
    /// ```
    #[must_use]
    pub fn append<I>(&self, suffix: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut elements = self.after();
        elements.extend(suffix);
        Self {
            before: self.before.clone(),
            focus: self.focus.clone(),
            after: Stack::from_top_down(elements),
        }
    }

    /// Returns a zipper with `prefix` placed at the start of the sequence.
    ///
    /// The focus and everything after it are unchanged; `prefix` keeps its
    /// order and lands before the existing leading elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::zipper::Zipper;
    ///
    /// let zipper = Zipper::new([3], 4, [5]);
    /// let extended = zipper.prepend([1, 2]);
    /// assert_eq!(extended.to_vec(), vec![1, 2, 3, 4, 5]);
    /// assert_eq!(*extended.focus(), 4);
    /// ```
    #[must_use]
    pub fn prepend<I>(&self, prefix: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut elements: Vec<T> = prefix.into_iter().collect();
        elements.extend(self.before());
        Self {
            before: elements
                .into_iter()
                .fold(Stack::new(), |stack, element| stack.push(element)),
            focus: self.focus.clone(),
            after: self.after.clone(),
        }
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// An iterator over references to the elements of a [`Zipper`] in logical
/// order.
pub struct ZipperIterator<'a, T> {
    front: std::vec::IntoIter<&'a T>,
    focus: Option<&'a T>,
    back: StackIterator<'a, T>,
}

impl<'a, T> Iterator for ZipperIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.front
            .next()
            .or_else(|| self.focus.take())
            .or_else(|| self.back.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.front.len() + usize::from(self.focus.is_some()) + self.back.len();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for ZipperIterator<'_, T> {}

/// An owning iterator over the elements of a [`Zipper`] in logical order.
pub struct ZipperIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for ZipperIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for ZipperIntoIterator<T> {}

/// An iterator over the elements on one side of the focus,
/// nearest-to-focus first.
pub struct NeighborIterator<'a, T> {
    inner: StackIterator<'a, T>,
}

impl<'a, T> Iterator for NeighborIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for NeighborIterator<'_, T> {}

impl<T: Clone> IntoIterator for Zipper<T> {
    type Item = T;
    type IntoIter = ZipperIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ZipperIntoIterator {
            inner: self.to_vec().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Zipper<T> {
    type Item = &'a T;
    type IntoIter = ZipperIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: PartialEq> PartialEq for Zipper<T> {
    fn eq(&self, other: &Self) -> bool {
        self.focus == other.focus && self.before == other.before && self.after == other.after
    }
}

impl<T: Eq> Eq for Zipper<T> {}

/// Computes a hash value for this zipper.
///
/// Both side lengths are hashed before the elements, so zippers that hold
/// the same logical sequence at different focus positions hash differently,
/// matching `PartialEq` (Hash-Eq consistency).
impl<T: Hash> Hash for Zipper<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.before.len().hash(state);
        for element in self.before.iter() {
            element.hash(state);
        }
        self.focus.hash(state);
        self.after.len().hash(state);
        for element in self.after.iter() {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Zipper<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut before: Vec<&T> = self.before.iter().collect();
        before.reverse();
        let after: Vec<&T> = self.after.iter().collect();
        formatter
            .debug_struct("Zipper")
            .field("before", &before)
            .field("focus", &self.focus)
            .field("after", &after)
            .finish()
    }
}

/// Formats the logical sequence with the focus wrapped in angle brackets,
/// for example `[1, <2>, 3]`.
impl<T: fmt::Display> fmt::Display for Zipper<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            if index == self.position() {
                write!(formatter, "<{element}>")?;
            } else {
                write!(formatter, "{element}")?;
            }
        }
        write!(formatter, "]")
    }
}

assert_impl_all!(Zipper<i32>: Clone, PartialEq, Eq, Hash);

#[cfg(feature = "arc")]
assert_impl_all!(Zipper<i32>: Send, Sync);

// =============================================================================
// Type Class Implementations
// =============================================================================

#[cfg(feature = "typeclass")]
impl<T> TypeConstructor for Zipper<T> {
    type Inner = T;
    type WithType<B> = Zipper<B>;
}

#[cfg(feature = "typeclass")]
impl<T: Clone> Functor for Zipper<T> {
    fn fmap<B, F>(self, mut function: F) -> Zipper<B>
    where
        F: FnMut(T) -> B,
    {
        self.map(|element| function(element.clone()))
    }

    fn fmap_ref<B, F>(&self, function: F) -> Zipper<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

#[cfg(feature = "typeclass")]
impl<T: Clone> Comonad for Zipper<T> {
    fn extract(&self) -> T {
        Self::extract(self)
    }

    fn duplicate(&self) -> Zipper<Self> {
        Self::duplicate(self)
    }

    fn extend<B, F>(&self, function: F) -> Zipper<B>
    where
        F: FnMut(&Self) -> B,
    {
        Self::extend(self, function)
    }
}
