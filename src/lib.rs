//! # focal
//!
//! An immutable, non-empty list zipper with a comonadic interface.
//!
//! ## Overview
//!
//! A [`Zipper`](zipper::Zipper) is an ordered, non-empty sequence with one
//! element distinguished as the *focus*, plus O(1) navigation to adjacent
//! positions. Its comonadic interface (`extract`, `duplicate`, `extend`)
//! enables context-aware transformations: producing a new sequence where
//! each output element is a function of its neighborhood (the elements
//! before and after it) in the input sequence.
//!
//! The library provides:
//!
//! - **Zipper**: the immutable data structure with O(1) navigation,
//!   structural sharing, and the full comonad operations
//! - **Type Classes**: `Functor` and `Comonad` traits with GAT-based
//!   higher-kinded type emulation
//! - **Window**: ready-made neighborhood transformations (running maximum,
//!   local-peak detection, moving average) built atop `extend`
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Functor`/`Comonad` traits and instances (default)
//! - `window`: neighborhood transformation functions (default)
//! - `arc`: use `Arc` instead of `Rc` for structural sharing, making
//!   zippers `Send + Sync`
//!
//! ## Example
//!
//! ```rust
//! use focal::zipper::Zipper;
//!
//! let zipper = Zipper::new([1, 2], 3, [4, 5]);
//! assert_eq!(zipper.to_vec(), vec![1, 2, 3, 4, 5]);
//!
//! // Each output element sees its whole neighborhood
//! let sums = zipper.extend(|view| view.iter().sum::<i32>());
//! assert_eq!(sums.to_vec(), vec![15, 15, 15, 15, 15]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use focal::prelude::*;
/// ```
pub mod prelude {

    pub use crate::zipper::Zipper;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "window")]
    pub use crate::window::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub mod zipper;

#[cfg(feature = "window")]
pub mod window;
