//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation for emulating Higher-Kinded Types
//! (HKT) in Rust using Generic Associated Types (GAT). This is what allows
//! the `Functor` and `Comonad` traits to speak about "the same container
//! with a different element type".
//!
//! # Background
//!
//! Rust does not natively support Higher-Kinded Types. For example, we
//! cannot write a trait that abstracts over `Option<_>` and `Zipper<_>` as
//! type constructors. This module uses GAT to work around this limitation.
//!
//! # Example
//!
//! ```rust
//! use focal::typeclass::TypeConstructor;
//!
//! fn transform_type<T: TypeConstructor>(value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let some_int: Option<i32> = Some(42);
//! let none_string: Option<String> = transform_type(some_int);
//! assert_eq!(none_string, None);
//! ```

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated
/// Types. It allows abstracting over type constructors like `Option<_>`,
/// `Vec<_>`, or `Zipper<_>`.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently
///   applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
///
/// # Example
///
/// ```rust
/// use focal::typeclass::TypeConstructor;
///
/// fn example<T: TypeConstructor<Inner = i32>>() {
///     // T::WithType<String> is the same constructor applied to String
/// }
///
/// example::<Option<i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Zipper<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Zipper<i32>`, `WithType<String>` would be
    /// `Zipper<String>`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` ensures that the resulting
    /// type is also a valid type constructor, maintaining the ability to
    /// chain transformations.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

impl<T> TypeConstructor for Box<T> {
    type Inner = T;
    type WithType<B> = Box<B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Type-level tests (compile-time verification)
    // =========================================================================

    /// Verifies that Option<i32> has the correct Inner type.
    #[test]
    fn option_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Option<i32>>();
    }

    /// Verifies that Option's WithType produces the correct type.
    #[test]
    fn option_with_type_produces_correct_type() {
        fn transform<T: TypeConstructor>(_value: T) -> T::WithType<String>
        where
            T::WithType<String>: Default,
        {
            Default::default()
        }

        let result: Option<String> = transform(Some(42));
        assert_eq!(result, None);
    }

    /// Verifies that Vec<A> has the correct Inner type.
    #[test]
    fn vec_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Vec<i32>>();
    }

    /// Verifies that Box<A> has the correct Inner type.
    #[test]
    fn box_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = f64>>() {}
        assert_inner::<Box<f64>>();
    }

    /// Tests that nested type constructors work correctly.
    ///
    /// A zipper of zippers (the shape `duplicate` produces) relies on this.
    #[test]
    fn nested_type_constructor_works() {
        fn assert_type_constructor<T: TypeConstructor>() {}
        assert_type_constructor::<Option<Vec<i32>>>();

        fn assert_inner<T: TypeConstructor<Inner = Vec<i32>>>() {}
        assert_inner::<Option<Vec<i32>>>();
    }

    /// Tests chaining WithType transformations.
    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Option<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_option_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_option_bool::<Step2>();
    }
}
