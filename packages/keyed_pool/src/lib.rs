#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! This package provides [`PoolManager`], an owner of lazily created object pools keyed by
//! item type and an optional pool name, and [`Pool`], the LIFO pool of reusable instances that
//! the manager hands out.
//!
//! The pools are meant for instances whose real storage lives in a host environment (a scene,
//! an entity world, a GPU resource table) and that are expensive to create and destroy. Instead
//! of destroying an instance when it is no longer needed, the caller releases it back into a
//! pool, which deactivates it and keeps it around for the next caller to acquire.
//!
//! # Features
//!
//! - **Keyed pools**: one pool per `(type, name)` pair, created on first reference.
//! - **LIFO reuse**: the most recently released instance is the first one handed out again.
//! - **Stale entry tolerance**: instances destroyed behind the pool's back are skipped on acquire.
//! - **Pluggable construction**: a factory closure produces new instances from a blueprint.
//! - **Lifecycle hooks**: closures run on every acquire and release, defaulting to toggling the
//!   instance's active flag.
//!
//! # Example
//!
//! ```rust
//! use keyed_pool::{Poolable, PoolManager};
//!
//! #[derive(Debug, Default)]
//! struct Bullet {
//!     active: bool,
//! }
//!
//! impl Poolable for Bullet {
//!     fn instantiate(_blueprint: Option<&Self>) -> Option<Self> {
//!         Some(Self::default())
//!     }
//!
//!     fn set_active(&mut self, active: bool) {
//!         self.active = active;
//!     }
//! }
//!
//! let mut pools = PoolManager::new();
//!
//! // The first acquire constructs a fresh instance.
//! let bullet = pools.acquire::<Bullet>(None).unwrap();
//! assert!(bullet.active);
//!
//! // Releasing deactivates the instance and keeps it for reuse.
//! pools.release(bullet, None);
//! assert_eq!(pools.pool::<Bullet>(None).len(), 1);
//!
//! // Named pools of the same type are independent.
//! assert!(pools.pool::<Bullet>(Some("enemy")).is_empty());
//! ```
//!
//! # Thread safety
//!
//! Pools are driven from a single owning thread (typically the host's main update loop). The
//! types in this package hold boxed closures that are not required to be thread-safe, so they
//! are neither [`Send`] nor [`Sync`].

mod builder;
mod clear_policy;
mod error;
mod manager;
mod pool;
mod poolable;

pub use builder::*;
pub use clear_policy::*;
pub use error::*;
pub use manager::*;
pub use pool::*;
pub use poolable::*;
