//! Neighborhood transformations built on [`Zipper::extend`].
//!
//! These are ordinary client functions of the zipper's comonadic
//! interface: each one passes a context-aware closure to `extend`, so
//! every output element is computed from a view of the whole sequence
//! centered at that element's position.
//!
//! # Examples
//!
//! ```rust
//! use focal::window::{local_peaks, running_maximum};
//! use focal::zipper::Zipper;
//!
//! let signal = Zipper::new([1, 4, 2], 5, [3]);
//!
//! let maxima = running_maximum(&signal);
//! assert_eq!(maxima.to_vec(), vec![1, 4, 4, 5, 5]);
//!
//! let peaks = local_peaks(&signal);
//! assert_eq!(peaks.to_vec(), vec![false, true, false, true, false]);
//! ```

use crate::zipper::Zipper;

/// Replaces each element with the maximum of all elements at or before its
/// position.
///
/// The output has the same length and focus position as the input.
///
/// # Examples
///
/// ```rust
/// use focal::window::running_maximum;
/// use focal::zipper::Zipper;
///
/// let zipper = Zipper::new([2, 1, 3, 4, 5], 1, [2]);
/// assert_eq!(running_maximum(&zipper), Zipper::new([2, 2, 3, 4, 5], 5, [5]));
/// ```
#[must_use]
pub fn running_maximum<T>(zipper: &Zipper<T>) -> Zipper<T>
where
    T: Clone + PartialOrd,
{
    zipper.extend(|view| {
        view.iter_before().fold(view.extract(), |maximum, element| {
            if *element > maximum {
                element.clone()
            } else {
                maximum
            }
        })
    })
}

/// Marks each position that is a strict local peak.
///
/// A position is a peak when both immediate neighbors exist and the element
/// is strictly greater than each of them; the first and last positions are
/// therefore never peaks. Detection is a plain boolean, deliberately free
/// of any display-scaling concern.
///
/// # Examples
///
/// ```rust
/// use focal::window::local_peaks;
/// use focal::zipper::Zipper;
///
/// let zipper = Zipper::new([1, 3], 2, [5, 4]);
/// assert_eq!(local_peaks(&zipper).to_vec(), vec![false, true, false, true, false]);
/// ```
#[must_use]
pub fn local_peaks<T>(zipper: &Zipper<T>) -> Zipper<bool>
where
    T: Clone + PartialOrd,
{
    zipper.extend(|view| {
        let focus = view.focus();
        let left_is_lower = view.peek_left().is_some_and(|left| left < focus);
        let right_is_lower = view.peek_right().is_some_and(|right| right < focus);
        left_is_lower && right_is_lower
    })
}

/// Replaces each element with the arithmetic mean of the elements within
/// `radius` positions of it, itself included.
///
/// Near the ends of the sequence the window simply shrinks; no padding is
/// invented. A radius of 0 returns the input unchanged.
///
/// # Examples
///
/// ```rust
/// use focal::window::moving_average;
/// use focal::zipper::Zipper;
///
/// let zipper = Zipper::new([1.0], 2.0, [3.0, 4.0]);
/// let smoothed = moving_average(&zipper, 1);
/// assert_eq!(smoothed.to_vec(), vec![1.5, 2.0, 3.0, 3.5]);
/// ```
#[must_use]
pub fn moving_average(zipper: &Zipper<f64>, radius: usize) -> Zipper<f64> {
    zipper.extend(|view| {
        let mut sum = *view.focus();
        let mut count = 1usize;
        for element in view.iter_before().take(radius) {
            sum += element;
            count += 1;
        }
        for element in view.iter_after().take(radius) {
            sum += element;
            count += 1;
        }
        #[allow(clippy::cast_precision_loss)]
        let divisor = count as f64;
        sum / divisor
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // running_maximum
    // =========================================================================

    #[rstest]
    fn running_maximum_tracks_prefix_maximum() {
        let zipper = Zipper::new([2, 1, 3, 4, 5], 1, [2]);
        assert_eq!(
            running_maximum(&zipper),
            Zipper::new([2, 2, 3, 4, 5], 5, [5])
        );
    }

    #[rstest]
    fn running_maximum_monotone_input_is_identity() {
        let zipper = Zipper::new([1, 2], 3, [4, 5]);
        assert_eq!(running_maximum(&zipper), zipper);
    }

    #[rstest]
    fn running_maximum_singleton() {
        let zipper = Zipper::singleton(9);
        assert_eq!(running_maximum(&zipper), zipper);
    }

    // =========================================================================
    // local_peaks
    // =========================================================================

    #[rstest]
    fn local_peaks_finds_interior_peaks() {
        let zipper = Zipper::new([1, 4, 2], 5, [3]);
        assert_eq!(
            local_peaks(&zipper).to_vec(),
            vec![false, true, false, true, false]
        );
    }

    #[rstest]
    fn local_peaks_boundaries_are_never_peaks() {
        // Strictly decreasing then increasing: the large endpoints do not count
        let zipper = Zipper::new([9, 1], 2, [8]);
        assert_eq!(
            local_peaks(&zipper).to_vec(),
            vec![false, false, false, false]
        );
    }

    #[rstest]
    fn local_peaks_plateau_is_not_a_peak() {
        let zipper = Zipper::new([1, 3], 3, [1]);
        assert_eq!(
            local_peaks(&zipper).to_vec(),
            vec![false, false, false, false]
        );
    }

    #[rstest]
    fn local_peaks_singleton_has_none() {
        let zipper = Zipper::singleton(5);
        assert_eq!(local_peaks(&zipper).to_vec(), vec![false]);
    }

    // =========================================================================
    // moving_average
    // =========================================================================

    #[rstest]
    fn moving_average_radius_one_shrinks_at_ends() {
        let zipper = Zipper::new([1.0], 2.0, [3.0, 4.0]);
        let smoothed = moving_average(&zipper, 1);
        assert_eq!(smoothed.to_vec(), vec![1.5, 2.0, 3.0, 3.5]);
    }

    #[rstest]
    fn moving_average_radius_zero_is_identity() {
        let zipper = Zipper::new([1.0], 2.0, [3.0]);
        assert_eq!(moving_average(&zipper, 0), zipper);
    }

    #[rstest]
    fn moving_average_radius_covering_everything_is_global_mean() {
        let zipper = Zipper::new([0.0, 2.0], 4.0, [6.0]);
        let smoothed = moving_average(&zipper, 10);
        assert_eq!(smoothed.to_vec(), vec![3.0, 3.0, 3.0, 3.0]);
    }

    #[rstest]
    fn moving_average_preserves_focus_position() {
        let zipper = Zipper::new([1.0, 2.0], 3.0, [4.0]);
        assert_eq!(moving_average(&zipper, 1).position(), zipper.position());
    }
}
