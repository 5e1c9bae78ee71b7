//! Identity wrapper type - the trivial functor and comonad.
//!
//! This module provides the `Identity` type, which is the simplest possible
//! wrapper around a value. It serves as:
//!
//! - The smallest model for testing type class laws
//! - The trivial comonad: a value with no surrounding context, so
//!   `extract` unwraps and `duplicate` merely nests

use super::TypeConstructor;
use super::comonad::Comonad;
use super::functor::Functor;

/// The identity functor - wraps a value without adding any behavior.
///
/// `Identity` is the simplest possible type constructor. It wraps a single
/// value and provides no additional structure, which makes it the trivial
/// instance of every type class in this crate: the comonad laws hold for it
/// by construction, since there is no context to gather.
///
/// # Examples
///
/// ```rust
/// use focal::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::typeclass::Identity;
    ///
    /// let x = Identity::new(42);
    /// assert_eq!(x.into_inner(), 42);
    /// ```
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// let inner: String = x.into_inner();
    /// assert_eq!(inner, "hello");
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// assert_eq!(x.as_inner(), "hello");
    /// ```
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> Identity<B>
    where
        F: FnMut(A) -> B,
    {
        Identity(function(self.0))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, mut function: F) -> Identity<B>
    where
        F: FnMut(&A) -> B,
    {
        Identity(function(&self.0))
    }
}

impl<A: Clone> Comonad for Identity<A> {
    #[inline]
    fn extract(&self) -> A {
        self.0.clone()
    }

    #[inline]
    fn duplicate(&self) -> Identity<Self> {
        Identity(self.clone())
    }

    #[inline]
    fn extend<B, F>(&self, mut function: F) -> Identity<B>
    where
        F: FnMut(&Self) -> B,
    {
        Identity(function(self))
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
