//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents types that can
//! have a function applied to their inner value(s) while preserving the
//! structure.
//!
//! Unlike formulations built around `FnOnce`, the `fmap` here takes an
//! `FnMut`: the flagship instance of this crate (`Zipper`) is a
//! multi-element container, so the mapped function must be callable once
//! per element.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function over a functor returns an equivalent functor:
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! Mapping two functions in sequence is equivalent to mapping their
//! composition:
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use focal::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! let transformed: Option<String> = some_value.fmap(|n| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! let numbers = vec![1, 2, 3];
//! let doubled: Vec<i32> = numbers.fmap(|n| n * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// `Functor` represents the ability to apply a function to the value(s)
/// inside a container while preserving the container's structure: relative
/// order, length, and (for a zipper) the focus position are all unchanged.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use focal::typeclass::Functor;
///
/// let x: Option<i32> = Some(5);
/// let y: Option<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Some("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to every value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value(s)
    ///
    /// # Returns
    ///
    /// A new functor with the transformed value(s)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// let y: Option<i32> = x.fmap(|n| n * 2);
    /// assert_eq!(y, Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a function to references of the value(s) inside the functor.
    ///
    /// This method is useful when you want to transform the functor's
    /// contents without consuming it.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes a reference to the inner value
    ///
    /// # Returns
    ///
    /// A new functor with the transformed value(s)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::typeclass::Functor;
    ///
    /// let x: Option<String> = Some("hello".to_string());
    /// let y: Option<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Some(5));
    /// // x is still available here
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;

    /// Replaces every value inside the functor with a clone of `value`.
    ///
    /// This is equivalent to `fmap(|_| value.clone())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.replace("replaced"), Some("replaced"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
    {
        self.fmap(|_| value.clone())
    }

    /// Discards the value(s) inside the functor, replacing each with `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.void(), Some(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnMut(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Functor for Vec<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}

// =============================================================================
// Box<T> Implementation
// =============================================================================

impl<T> Functor for Box<T> {
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> Box<B>
    where
        F: FnMut(T) -> B,
    {
        Box::new(function(*self))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, mut function: F) -> Box<B>
    where
        F: FnMut(&T) -> B,
    {
        Box::new(function(self.as_ref()))
    }
}
