/// Determines what happens to the instances held by a pool when it is cleared.
///
/// By default, clearing a pool destroys its instances.
///
/// # Examples
///
/// ```
/// use keyed_pool::{ClearPolicy, Pool, Poolable};
///
/// #[derive(Debug)]
/// struct Slot;
///
/// impl Poolable for Slot {
///     fn instantiate(_blueprint: Option<&Self>) -> Option<Self> {
///         Some(Self)
///     }
/// }
///
/// let mut pool = Pool::<Slot>::new();
/// pool.populate(3).unwrap();
///
/// // Forget the instances without asking the host to destroy them.
/// pool.clear_with(ClearPolicy::DetachItems);
/// assert!(pool.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum ClearPolicy {
    /// Every live instance is passed to [`Poolable::destroy()`][crate::Poolable::destroy]
    /// before the pool forgets it. This is the default.
    #[default]
    DestroyItems,

    /// The instances are dropped from the pool without being destroyed.
    ///
    /// Use this when the host environment is about to destroy the objects itself, or when
    /// another owner still references them.
    DetachItems,
}
