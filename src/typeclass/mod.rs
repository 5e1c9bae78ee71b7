//! Type class traits for functional programming abstractions.
//!
//! This module provides the fundamental type classes (traits) that the
//! zipper's algebraic interface is expressed through:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Comonad`]: Context-aware computation (`extract`, `duplicate`, `extend`)
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior, allowing us to define traits like Functor and Comonad
//! in a generic way.
//!
//! ## Foundation Types
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Identity`]: Identity wrapper type (the trivial functor and comonad)
//!
//! # Examples
//!
//! ## Using Functor
//!
//! ```rust
//! use focal::typeclass::Functor;
//!
//! let numbers = vec![1, 2, 3];
//! let doubled: Vec<i32> = numbers.fmap(|n| n * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```
//!
//! ## Using Comonad
//!
//! ```rust
//! use focal::typeclass::Comonad;
//! use focal::zipper::Zipper;
//!
//! let zipper = Zipper::new([1, 2], 3, [4, 5]);
//! assert_eq!(zipper.extract(), 3);
//!
//! // One output per position, each computed from that position's context
//! let maxima = zipper.extend(|view| {
//!     view.iter_before().fold(view.extract(), |max, e| max.max(*e))
//! });
//! assert_eq!(maxima.to_vec(), vec![1, 2, 3, 4, 5]);
//! ```

mod comonad;
mod functor;
mod higher;
mod identity;

pub use comonad::Comonad;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
