#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(coverage_nightly, coverage(off))] // This is all test code, no need to test it.

//! Private helpers for testing and examples in the pooling packages.
//!
//! The centerpiece is [`Scene`], a stand-in for a game engine's object storage. Objects in a
//! scene are referenced through [`SceneObject`] handles and can be destroyed through the scene
//! while something else still holds their handle, which is exactly the situation pools must
//! tolerate after a scene transition.

mod scene;

pub use scene::*;

/// Routes `log` output to the test harness, honoring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs the logger.
pub fn init_logging() {
    // Another test may have installed the logger already, which is fine.
    drop(
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .is_test(true)
            .try_init(),
    );
}

/// Calculates the difference between two f32 values and considers
/// them equal if the difference is not more than `close_enough`.
///
/// This is a "correctly performed" floating point equality comparison.
#[must_use]
pub fn f32_diff_abs(a: f32, b: f32, close_enough: f32) -> f32 {
    let diff = (a - b).abs();

    if diff <= close_enough { 0.0 } else { diff }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn init_logging_is_idempotent() {
        init_logging();
        init_logging();
    }

    #[test]
    fn diff_within_tolerance_is_zero() {
        assert!(f32_diff_abs(1.0, 1.000_01, 0.001) == 0.0);
        assert!(f32_diff_abs(1.0, 2.0, 0.001) > 0.9);
    }
}
