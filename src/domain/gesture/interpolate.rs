// SPDX-License-Identifier: MPL-2.0
//! Two-point linear interpolation with configurable extrapolation.
//!
//! Input ranges may run in either direction (`[0, 400]` or `[1, 0.5]`).

/// Behaviour for inputs that fall outside the input range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolation {
    /// Keep the result between the two output edges.
    #[default]
    Clamp,
    /// Continue the line past the edges.
    Extend,
    /// Return the input unchanged outside the range.
    Identity,
}

/// Maps `x` from `input` onto `output`.
///
/// A degenerate input range (both edges equal) yields the left output edge.
///
/// # Example
///
/// ```
/// use photo_lens::domain::gesture::{interpolate, Extrapolation};
///
/// let opacity = interpolate(200.0, [0.0, 400.0], [1.0, 0.5], Extrapolation::Clamp);
/// assert_eq!(opacity, 0.75);
///
/// // Past the end of the range the result stays on the right edge.
/// let clamped = interpolate(900.0, [0.0, 400.0], [1.0, 0.5], Extrapolation::Clamp);
/// assert_eq!(clamped, 0.5);
/// ```
#[must_use]
pub fn interpolate(x: f32, input: [f32; 2], output: [f32; 2], extrapolation: Extrapolation) -> f32 {
    let [left_in, right_in] = input;
    let [left_out, right_out] = output;

    let span = right_in - left_in;
    if span == 0.0 {
        return left_out;
    }

    let progress = (x - left_in) / span;
    let value = left_out + progress * (right_out - left_out);

    // Which side of the range we left through is decided on the output axis,
    // so decreasing input ranges clamp the same way as increasing ones.
    let low = left_out.min(right_out);
    let high = left_out.max(right_out);
    if (low..=high).contains(&value) {
        return value;
    }

    match extrapolation {
        Extrapolation::Clamp => value.clamp(low, high),
        Extrapolation::Extend => value,
        Extrapolation::Identity => x,
    }
}

/// Shorthand for [`interpolate`] with [`Extrapolation::Clamp`].
#[must_use]
pub fn interpolate_clamped(x: f32, input: [f32; 2], output: [f32; 2]) -> f32 {
    interpolate(x, input, output, Extrapolation::Clamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn hits_edges_exactly() {
        assert_eq!(interpolate_clamped(0.0, [0.0, 400.0], [1.0, 0.5]), 1.0);
        assert_eq!(interpolate_clamped(400.0, [0.0, 400.0], [1.0, 0.5]), 0.5);
    }

    #[test]
    fn clamps_on_both_sides() {
        assert_eq!(interpolate_clamped(-50.0, [0.0, 400.0], [1.0, 0.5]), 1.0);
        assert_eq!(interpolate_clamped(1000.0, [0.0, 400.0], [1.0, 0.5]), 0.5);
    }

    #[test]
    fn decreasing_input_range() {
        assert_abs_diff_eq!(interpolate_clamped(0.75, [1.0, 0.5], [1.0, 0.0]), 0.5);
        // Zooming in past natural size keeps the image opaque.
        assert_eq!(interpolate_clamped(2.0, [1.0, 0.5], [1.0, 0.0]), 1.0);
        assert_eq!(interpolate_clamped(0.2, [1.0, 0.5], [1.0, 0.0]), 0.0);
    }

    #[test]
    fn degenerate_range_returns_left_output() {
        assert_eq!(interpolate_clamped(0.0, [0.0, 0.0], [1.0, 0.5]), 1.0);
        assert_eq!(interpolate_clamped(37.0, [37.0, 37.0], [0.2, 0.9]), 0.2);
    }

    #[test]
    fn extend_continues_the_line() {
        let value = interpolate(800.0, [0.0, 400.0], [1.0, 0.5], Extrapolation::Extend);
        assert_abs_diff_eq!(value, 0.0);
    }

    #[test]
    fn identity_returns_input_outside_range() {
        let value = interpolate(800.0, [0.0, 400.0], [1.0, 0.5], Extrapolation::Identity);
        assert_eq!(value, 800.0);
        let inside = interpolate(200.0, [0.0, 400.0], [1.0, 0.5], Extrapolation::Identity);
        assert_abs_diff_eq!(inside, 0.75);
    }
}
