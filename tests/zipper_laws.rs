//! Property-based tests for the zipper's algebraic laws.
//!
//! These verify the functor laws, the three comonad laws, and the
//! navigation/structural equations over generated zippers. The laws are
//! the implementation-correctness contract of the type, not a style
//! exercise, so they are checked here rather than assumed.

use focal::zipper::Zipper;
use proptest::prelude::*;

// =============================================================================
// Strategy for generating zippers
// =============================================================================

/// Generates a `Zipper<i32>` with up to `max_side` elements on each side.
fn zipper_strategy(max_side: usize) -> impl Strategy<Value = Zipper<i32>> {
    (
        prop::collection::vec(any::<i32>(), 0..max_side),
        any::<i32>(),
        prop::collection::vec(any::<i32>(), 0..max_side),
    )
        .prop_map(|(before, focus, after)| Zipper::new(before, focus, after))
}

/// Generates a small zipper for faster tests.
fn small_zipper() -> impl Strategy<Value = Zipper<i32>> {
    zipper_strategy(8)
}

/// Generates a tiny zipper for the O(n^3) nested-duplicate law.
fn tiny_zipper() -> impl Strategy<Value = Zipper<i32>> {
    zipper_strategy(5)
}

proptest! {
    // =========================================================================
    // Functor laws
    // =========================================================================

    #[test]
    fn prop_functor_identity_law(zipper in small_zipper()) {
        prop_assert_eq!(zipper.map(|x| *x), zipper);
    }

    #[test]
    fn prop_functor_composition_law(zipper in small_zipper()) {
        let function1 = |x: &i32| x.wrapping_add(1);
        let function2 = |x: i32| x.wrapping_mul(2);

        let left = zipper.map(function1).map(|x| function2(*x));
        let right = zipper.map(|x| function2(function1(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_map_preserves_shape(zipper in small_zipper()) {
        let mapped = zipper.map(|x| x.to_string());
        prop_assert_eq!(mapped.len(), zipper.len());
        prop_assert_eq!(mapped.position(), zipper.position());
    }

    // =========================================================================
    // Comonad laws
    // =========================================================================

    /// Law 1: duplicating and extracting the center recovers the original.
    #[test]
    fn prop_comonad_left_identity_law(zipper in small_zipper()) {
        prop_assert_eq!(zipper.duplicate().extract(), zipper);
    }

    /// Law 2: extracting at every position after duplication reconstructs
    /// the original element-wise.
    #[test]
    fn prop_comonad_right_identity_law(zipper in small_zipper()) {
        prop_assert_eq!(zipper.duplicate().map(|view| view.extract()), zipper.clone());
        prop_assert_eq!(zipper.extend(|view| view.extract()), zipper);
    }

    /// Law 3: duplicating twice equals duplicating then mapping duplicate
    /// over each position.
    #[test]
    fn prop_comonad_associativity_law(zipper in tiny_zipper()) {
        let left = zipper.duplicate().duplicate();
        let right = zipper.duplicate().map(|view| view.duplicate());
        prop_assert_eq!(left, right);
    }

    /// extend is definitionally duplicate-then-map.
    #[test]
    fn prop_extend_equals_duplicate_then_map(zipper in small_zipper()) {
        let neighborhood_sum = |view: &Zipper<i32>| -> i64 {
            view.iter().map(|element| i64::from(*element)).sum()
        };
        let extended = zipper.extend(neighborhood_sum);
        let duplicated = zipper.duplicate().map(neighborhood_sum);
        prop_assert_eq!(extended, duplicated);
    }

    /// Every view produced by duplicate denotes the same logical sequence,
    /// each centered at a distinct position.
    #[test]
    fn prop_duplicate_views_cover_all_positions(zipper in small_zipper()) {
        let views = zipper.duplicate();
        prop_assert_eq!(views.len(), zipper.len());
        for (index, view) in views.to_vec().into_iter().enumerate() {
            prop_assert_eq!(view.position(), index);
            prop_assert_eq!(view.to_vec(), zipper.to_vec());
        }
    }

    // =========================================================================
    // Navigation properties
    // =========================================================================

    #[test]
    fn prop_navigation_preserves_sequence(zipper in small_zipper()) {
        prop_assert_eq!(zipper.left().to_vec(), zipper.to_vec());
        prop_assert_eq!(zipper.right().to_vec(), zipper.to_vec());
    }

    #[test]
    fn prop_try_left_boundary(zipper in small_zipper()) {
        let at_boundary = zipper.position() == 0;
        prop_assert_eq!(zipper.try_left().is_none(), at_boundary);
        if at_boundary {
            prop_assert_eq!(zipper.left(), zipper);
        }
    }

    #[test]
    fn prop_try_right_boundary(zipper in small_zipper()) {
        let at_boundary = zipper.position() == zipper.len() - 1;
        prop_assert_eq!(zipper.try_right().is_none(), at_boundary);
        if at_boundary {
            prop_assert_eq!(zipper.right(), zipper);
        }
    }

    #[test]
    fn prop_navigation_round_trip_left(zipper in small_zipper()) {
        if let Some(moved) = zipper.try_left() {
            prop_assert_eq!(moved.right(), zipper);
        }
    }

    #[test]
    fn prop_navigation_round_trip_right(zipper in small_zipper()) {
        if let Some(moved) = zipper.try_right() {
            prop_assert_eq!(moved.left(), zipper);
        }
    }

    // =========================================================================
    // Structural helpers
    // =========================================================================

    #[test]
    fn prop_to_vec_concatenates_parts(zipper in small_zipper()) {
        let mut expected = zipper.before();
        expected.push(zipper.extract());
        expected.extend(zipper.after());
        prop_assert_eq!(zipper.to_vec(), expected);
    }

    #[test]
    fn prop_to_vec_round_trips_through_new(zipper in small_zipper()) {
        let elements = zipper.to_vec();
        let position = zipper.position();
        let rebuilt = Zipper::new(
            elements[..position].to_vec(),
            elements[position],
            elements[position + 1..].to_vec(),
        );
        prop_assert_eq!(rebuilt, zipper);
    }

    #[test]
    fn prop_append_extends_to_vec(zipper in small_zipper(), suffix in prop::collection::vec(any::<i32>(), 0..8)) {
        let mut expected = zipper.to_vec();
        expected.extend(suffix.iter().copied());
        let appended = zipper.append(suffix);
        prop_assert_eq!(appended.to_vec(), expected);
        prop_assert_eq!(appended.position(), zipper.position());
        prop_assert_eq!(appended.before(), zipper.before());
    }

    #[test]
    fn prop_prepend_extends_to_vec(zipper in small_zipper(), prefix in prop::collection::vec(any::<i32>(), 0..8)) {
        let mut expected = prefix.clone();
        expected.extend(zipper.to_vec());
        let prepended = zipper.prepend(prefix);
        prop_assert_eq!(prepended.to_vec(), expected);
        prop_assert_eq!(prepended.after(), zipper.after());
        prop_assert_eq!(prepended.extract(), zipper.extract());
    }

    #[test]
    fn prop_len_matches_iter_count(zipper in small_zipper()) {
        prop_assert_eq!(zipper.len(), zipper.iter().count());
        prop_assert!(zipper.len() >= 1);
    }
}
