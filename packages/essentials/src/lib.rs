#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Small runtime helpers for game loops.
//!
//! * [`clamp_angle()`] and [`wrap_degrees()`] keep rotations within an allowed arc.
//! * [`is_outside_viewport()`] checks whether a world position projects off screen.
//! * [`VecExt`] adds a few set-like operations to `Vec`.
//! * [`save_data()`], [`load_data()`] and [`load_database()`] persist serde values as TOML.
//! * [`Delay`] and [`ExitWatch`] run an action once, driven by the frame loop.
//! * [`Singleton`] lazily adopts or creates one shared instance of a type.
//!
//! # Example
//!
//! ```rust
//! use essentials::{VecExt, clamp_angle};
//!
//! assert_eq!(clamp_angle(370.0, 0.0, 90.0), 10.0);
//!
//! let mut targets = vec![3, 1, 3, 2, 1];
//! targets.retain_exclusive(&[2]);
//! assert_eq!(targets.distinct(), vec![3, 1]);
//! ```

mod angles;
mod collections;
mod error;
mod frame;
mod persistence;
mod singleton;
mod viewport;

pub use angles::*;
pub use collections::*;
pub use error::*;
pub use frame::*;
pub use persistence::*;
pub use singleton::*;
pub use viewport::*;
