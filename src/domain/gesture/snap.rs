// SPDX-License-Identifier: MPL-2.0
//! Ballistic snap-point selection for released gestures.

/// Seconds of velocity added to the release position when projecting
/// where a flung gesture would come to rest.
pub const PROJECTION_SECONDS: f32 = 0.2;

/// Projects `value` forward by `velocity` and returns the nearest snap point.
///
/// Ties go to the earlier entry in `points`. Returns `value` unchanged when
/// `points` is empty.
///
/// # Example
///
/// ```
/// use photo_lens::domain::gesture::snap_point;
///
/// // Released 300px down while moving slowly: settles back at the origin.
/// assert_eq!(snap_point(300.0, 50.0, &[0.0, 800.0]), 0.0);
///
/// // A fast downward fling carries it off-screen.
/// assert_eq!(snap_point(300.0, 2000.0, &[0.0, 800.0]), 800.0);
/// ```
#[must_use]
pub fn snap_point(value: f32, velocity: f32, points: &[f32]) -> f32 {
    let projected = project(value, velocity);
    points
        .iter()
        .copied()
        .fold(None, |best: Option<(f32, f32)>, point| {
            let distance = (projected - point).abs();
            match best {
                Some((_, best_distance)) if best_distance <= distance => best,
                _ => Some((point, distance)),
            }
        })
        .map_or(value, |(point, _)| point)
}

/// Resting position of a gesture released at `value` with `velocity`.
#[must_use]
pub fn project(value: f32, velocity: f32) -> f32 {
    value + PROJECTION_SECONDS * velocity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slow_release_near_origin_snaps_back() {
        // 300 + 0.2 * 50 = 310, which is closer to 0 than to 800.
        assert_eq!(project(300.0, 50.0), 310.0);
        assert_eq!(snap_point(300.0, 50.0, &[0.0, 800.0]), 0.0);
    }

    #[test]
    fn release_past_midpoint_goes_off_screen() {
        assert_eq!(snap_point(450.0, 0.0, &[0.0, 800.0]), 800.0);
    }

    #[test]
    fn upward_fling_returns_to_origin() {
        assert_eq!(snap_point(600.0, -3000.0, &[0.0, 800.0]), 0.0);
    }

    #[test]
    fn tie_prefers_first_point() {
        assert_eq!(snap_point(400.0, 0.0, &[0.0, 800.0]), 0.0);
    }

    #[test]
    fn empty_points_returns_value() {
        assert_eq!(snap_point(42.0, 10.0, &[]), 42.0);
    }
}
