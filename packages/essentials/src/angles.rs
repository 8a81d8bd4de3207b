/// Degrees in a full turn.
const FULL_TURN: f32 = 360.0;

/// Wraps an angle in degrees into the range `[0, 360)`.
///
/// # Example
///
/// ```rust
/// use essentials::wrap_degrees;
///
/// assert_eq!(wrap_degrees(370.0), 10.0);
/// assert_eq!(wrap_degrees(-90.0), 270.0);
/// ```
#[must_use]
#[cfg_attr(test, mutants::skip)] // The rounding guard cannot be hit reliably from tests.
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(FULL_TURN);

    // rem_euclid can round tiny negative inputs up to exactly 360.
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}

/// Limits an angle in degrees to the arc that runs clockwise from `min` to `max`.
///
/// All three angles are first wrapped into `[0, 360)`, so the arc may cross 0°, e.g. a `min`
/// of 300 and a `max` of 60 allow the 120° arc through 0°. The bounds themselves are allowed.
///
/// An angle inside the arc is returned wrapped but otherwise unchanged. An angle outside the
/// arc is snapped to one of the bounds:
///
/// * If the arc does not cross 0°, angles below `min` snap to `min` and angles above `max`
///   snap to `max`.
/// * If the arc crosses 0°, angles above the midpoint of the forbidden range snap to `min`
///   and the others snap to `max`.
///
/// # Example
///
/// ```rust
/// use essentials::clamp_angle;
///
/// // Arc from 30° to 90°.
/// assert_eq!(clamp_angle(45.0, 30.0, 90.0), 45.0);
/// assert_eq!(clamp_angle(10.0, 30.0, 90.0), 30.0);
/// assert_eq!(clamp_angle(120.0, 30.0, 90.0), 90.0);
///
/// // Arc from 300° through 0° to 60°.
/// assert_eq!(clamp_angle(-20.0, 300.0, 60.0), 340.0);
/// assert_eq!(clamp_angle(200.0, 300.0, 60.0), 300.0);
/// assert_eq!(clamp_angle(100.0, 300.0, 60.0), 60.0);
/// ```
#[must_use]
pub fn clamp_angle(angle: f32, min: f32, max: f32) -> f32 {
    let angle = wrap_degrees(angle);
    let min = wrap_degrees(min);
    let max = wrap_degrees(max);

    if min > max {
        if angle >= min || angle <= max {
            return angle;
        }

        return if angle > min.midpoint(max) { min } else { max };
    }

    if angle < min {
        min
    } else if angle > max {
        max
    } else {
        angle
    }
}
