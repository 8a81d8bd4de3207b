/// Projects world positions into normalized viewport coordinates.
///
/// Viewport coordinates put the visible area at `[0, 1]` on both the x and y axes, with z
/// holding the distance from the camera. Cameras implement this; so does any closure with a
/// matching signature, which is handy in tests.
pub trait ViewportProjection {
    /// Converts a world position into viewport coordinates.
    fn world_to_viewport(&self, position: [f32; 3]) -> [f32; 3];
}

impl<F> ViewportProjection for F
where
    F: Fn([f32; 3]) -> [f32; 3],
{
    fn world_to_viewport(&self, position: [f32; 3]) -> [f32; 3] {
        self(position)
    }
}

/// Whether a world position projects outside the visible part of the viewport.
///
/// Only the x and y coordinates are considered. Positions exactly on the edge count as
/// visible.
///
/// # Example
///
/// ```rust
/// use essentials::is_outside_viewport;
///
/// // A camera looking down the z axis with a 20x10 unit view centered on the origin.
/// let camera = |[x, y, z]: [f32; 3]| [x / 20.0 + 0.5, y / 10.0 + 0.5, z];
///
/// assert!(!is_outside_viewport(&camera, [0.0, 0.0, 5.0]));
/// assert!(is_outside_viewport(&camera, [11.0, 0.0, 5.0]));
/// ```
#[must_use]
pub fn is_outside_viewport<P>(projection: &P, position: [f32; 3]) -> bool
where
    P: ViewportProjection + ?Sized,
{
    let [x, y, _] = projection.world_to_viewport(position);

    !(0.0..=1.0).contains(&x) || !(0.0..=1.0).contains(&y)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    struct Identity;

    impl ViewportProjection for Identity {
        fn world_to_viewport(&self, position: [f32; 3]) -> [f32; 3] {
            position
        }
    }

    #[test]
    fn inside_and_on_edges() {
        assert!(!is_outside_viewport(&Identity, [0.5, 0.5, 0.0]));
        assert!(!is_outside_viewport(&Identity, [0.0, 1.0, 0.0]));
        assert!(!is_outside_viewport(&Identity, [1.0, 0.0, -3.0]));
    }

    #[test]
    fn outside_on_either_axis() {
        assert!(is_outside_viewport(&Identity, [-0.1, 0.5, 0.0]));
        assert!(is_outside_viewport(&Identity, [1.1, 0.5, 0.0]));
        assert!(is_outside_viewport(&Identity, [0.5, -0.1, 0.0]));
        assert!(is_outside_viewport(&Identity, [0.5, 1.1, 0.0]));
    }

    #[test]
    fn works_through_trait_object() {
        let projection: &dyn ViewportProjection = &Identity;

        assert!(is_outside_viewport(projection, [2.0, 2.0, 0.0]));
    }
}
