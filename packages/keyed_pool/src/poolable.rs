/// The capabilities a type needs to be stored in a [`Pool`][crate::Pool].
///
/// Pooled types are usually cheap handles to objects that live in some host environment, such
/// as an entity in a scene. The trait lets the pool reach the host's primitives for creating,
/// validating, activating and destroying those objects without knowing anything else about them.
///
/// Only [`instantiate()`][Self::instantiate] is required. The remaining methods have defaults
/// suitable for plain values that have no host-side state.
///
/// # Example
///
/// ```rust
/// use keyed_pool::Poolable;
///
/// #[derive(Clone, Debug)]
/// struct Particle {
///     color: u32,
///     visible: bool,
/// }
///
/// impl Poolable for Particle {
///     fn instantiate(blueprint: Option<&Self>) -> Option<Self> {
///         // Duplicate the blueprint if there is one, otherwise create a blank particle.
///         Some(blueprint.cloned().unwrap_or(Self {
///             color: 0,
///             visible: false,
///         }))
///     }
///
///     fn set_active(&mut self, active: bool) {
///         self.visible = active;
///     }
/// }
///
/// let red = Particle { color: 0xff0000, visible: false };
/// let copy = Particle::instantiate(Some(&red)).unwrap();
/// assert_eq!(copy.color, 0xff0000);
/// ```
pub trait Poolable: Sized + 'static {
    /// Creates a new instance, duplicating `blueprint` if one is given.
    ///
    /// This is the construction primitive used by a pool's default factory. Returns `None` if
    /// the host cannot produce an instance, which the pool reports to its caller as absence.
    fn instantiate(blueprint: Option<&Self>) -> Option<Self>;

    /// Whether the instance still refers to a live object.
    ///
    /// Pools discard entries for which this returns `false` instead of handing them out, which
    /// covers objects destroyed by the host while they were sitting in a pool.
    fn is_alive(&self) -> bool {
        true
    }

    /// Sets the activity flag of the instance.
    ///
    /// The default acquire and release hooks of a pool call this with `true` and `false`.
    fn set_active(&mut self, active: bool) {
        _ = active;
    }

    /// Destroys the instance through the host environment.
    ///
    /// Called for each held instance when a pool is cleared with
    /// [`ClearPolicy::DestroyItems`][crate::ClearPolicy::DestroyItems]. The default simply
    /// drops the value.
    fn destroy(self) {}
}
