use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;

use foldhash::fast::RandomState;

use crate::{ClearPolicy, Pool, Poolable};

/// Owner of a set of [`Pool`]s, one for each combination of item type and optional pool name.
///
/// A pool is created on the first reference to its key and lives as long as the manager. The
/// unnamed pool of a type (`name` of `None`) is the common case and is looked up without
/// hashing the name. Named pools allow several independent pools of the same item type, for
/// example one per prefab, which never share instances with each other.
///
/// The host application typically creates one manager and passes it (or a reference to it) to
/// the code that needs pooling.
///
/// # Example
///
/// ```rust
/// use keyed_pool::{Pool, PoolManager, Poolable};
///
/// #[derive(Clone, Debug, Default)]
/// struct Projectile {
///     speed: f32,
///     active: bool,
/// }
///
/// impl Poolable for Projectile {
///     fn instantiate(blueprint: Option<&Self>) -> Option<Self> {
///         Some(blueprint.cloned().unwrap_or_default())
///     }
///
///     fn set_active(&mut self, active: bool) {
///         self.active = active;
///     }
/// }
///
/// let mut pools = PoolManager::new();
///
/// // Configure the "arrow" pool the first time it is referenced.
/// pools
///     .pool_or_insert_with(Some("arrow"), || {
///         Pool::with_blueprint(Projectile { speed: 20.0, active: false })
///     })
///     .populate(16)
///     .unwrap();
///
/// let arrow = pools.acquire::<Projectile>(Some("arrow")).unwrap();
/// assert_eq!(arrow.speed, 20.0);
///
/// // The default pool of the same type is a separate pool without a blueprint.
/// let plain = pools.acquire::<Projectile>(None).unwrap();
/// assert_eq!(plain.speed, 0.0);
///
/// assert_eq!(pools.len(), 2);
/// ```
#[derive(Default)]
pub struct PoolManager {
    pools_by_type: HashMap<TypeId, TypePools, RandomState>,
}

/// The pools of a single item type.
struct TypePools {
    type_name: &'static str,
    unnamed: Option<Box<dyn ErasedPool>>,
    named: HashMap<String, Box<dyn ErasedPool>, RandomState>,
}

impl TypePools {
    fn new<T: Poolable>() -> Self {
        Self {
            type_name: type_name::<T>(),
            unnamed: None,
            named: HashMap::default(),
        }
    }

    fn get(&self, name: Option<&str>) -> Option<&dyn ErasedPool> {
        match name {
            None => self.unnamed.as_deref(),
            Some(name) => self.named.get(name).map(|pool| &**pool),
        }
    }

    fn pools_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn ErasedPool>> {
        self.unnamed.iter_mut().chain(self.named.values_mut())
    }

    fn count(&self) -> usize {
        self.named
            .len()
            .checked_add(usize::from(self.unnamed.is_some()))
            .expect("there cannot be more pools than fit in memory")
    }
}

/// Type-erased view of a [`Pool`], for operations that span pools of different item types.
trait ErasedPool {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn clear_with(&mut self, policy: ClearPolicy);
}

impl<T: Poolable> ErasedPool for Pool<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn clear_with(&mut self, policy: ClearPolicy) {
        Self::clear_with(self, policy);
    }
}

const ERR_WRONG_POOL_TYPE: &str = "pools are keyed by the TypeId of their item type";

impl PoolManager {
    /// Creates a new [`PoolManager`] that does not yet hold any pools.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the pool for `T` with the given name, creating an empty pool with the default
    /// configuration on first reference.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keyed_pool::{PoolManager, Poolable};
    ///
    /// #[derive(Debug)]
    /// struct Decal;
    ///
    /// impl Poolable for Decal {
    ///     fn instantiate(_blueprint: Option<&Self>) -> Option<Self> {
    ///         Some(Self)
    ///     }
    /// }
    ///
    /// let mut pools = PoolManager::new();
    ///
    /// pools.pool::<Decal>(Some("blood")).populate(4).unwrap();
    ///
    /// assert_eq!(pools.pool::<Decal>(Some("blood")).len(), 4);
    /// assert_eq!(pools.pool::<Decal>(Some("scorch")).len(), 0);
    /// ```
    pub fn pool<T: Poolable>(&mut self, name: Option<&str>) -> &mut Pool<T> {
        self.pool_or_insert_with(name, Pool::new)
    }

    /// Returns the pool for `T` with the given name, creating it via `make` on first reference.
    ///
    /// If the pool already exists, `make` is not called and the existing pool is returned
    /// unchanged.
    pub fn pool_or_insert_with<T, F>(&mut self, name: Option<&str>, make: F) -> &mut Pool<T>
    where
        T: Poolable,
        F: FnOnce() -> Pool<T>,
    {
        let pools = self
            .pools_by_type
            .entry(TypeId::of::<T>())
            .or_insert_with(TypePools::new::<T>);

        let slot = match name {
            None => &mut pools.unnamed,
            Some(name) => {
                // Only allocate the owned name if the pool does not exist yet.
                if !pools.named.contains_key(name) {
                    log::debug!("creating pool '{name}' of {}", type_name::<T>());
                    pools.named.insert(name.to_owned(), Box::new(make()));
                }

                return pools
                    .named
                    .get_mut(name)
                    .and_then(|pool| pool.as_any_mut().downcast_mut())
                    .expect(ERR_WRONG_POOL_TYPE);
            }
        };

        slot.get_or_insert_with(|| {
            log::debug!("creating default pool of {}", type_name::<T>());
            let pool: Box<dyn ErasedPool> = Box::new(make());
            pool
        })
        .as_any_mut()
        .downcast_mut()
        .expect(ERR_WRONG_POOL_TYPE)
    }

    /// Whether a pool for `T` with the given name has been created.
    #[must_use]
    pub fn contains<T: Poolable>(&self, name: Option<&str>) -> bool {
        self.get::<T>(name).is_some()
    }

    /// Returns the pool for `T` with the given name if it has been created.
    #[must_use]
    pub fn get<T: Poolable>(&self, name: Option<&str>) -> Option<&Pool<T>> {
        self.pools_by_type
            .get(&TypeId::of::<T>())?
            .get(name)
            .map(|pool| pool.as_any().downcast_ref().expect(ERR_WRONG_POOL_TYPE))
    }

    /// Takes an instance out of the pool for `T` with the given name.
    ///
    /// This is a shorthand for `pool::<T>(name).acquire()`.
    pub fn acquire<T: Poolable>(&mut self, name: Option<&str>) -> Option<T> {
        self.pool::<T>(name).acquire()
    }

    /// Returns an instance to the pool for `T` with the given name.
    ///
    /// This is a shorthand for `pool::<T>(name).release(instance)`.
    pub fn release<T: Poolable>(&mut self, instance: T, name: Option<&str>) {
        self.pool::<T>(name).release(instance);
    }

    /// Clears every pool of every type according to `policy`.
    ///
    /// The pools themselves, including their configuration, remain registered.
    pub fn clear_all(&mut self, policy: ClearPolicy) {
        for pools in self.pools_by_type.values_mut() {
            for pool in pools.pools_mut() {
                pool.clear_with(policy);
            }
        }
    }

    /// The number of pools that have been created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools_by_type.values().map(TypePools::count).sum()
    }

    /// Whether no pool has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools_by_type.values().all(|pools| pools.count() == 0)
    }
}

impl fmt::Debug for PoolManager {
    #[cfg_attr(test, mutants::skip)] // Sorting only makes the output stable, tests cannot tell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types = self
            .pools_by_type
            .values()
            .map(|pools| (pools.type_name, pools.count()))
            .collect::<Vec<_>>();
        types.sort_unstable();

        f.debug_struct("PoolManager")
            .field("pools_by_type", &types)
            .finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use static_assertions::assert_not_impl_any;

    use super::*;

    assert_not_impl_any!(PoolManager: Send, Sync);

    #[derive(Debug, Default)]
    struct Coin {
        serial: u32,
        active: bool,
    }

    impl Poolable for Coin {
        fn instantiate(_blueprint: Option<&Self>) -> Option<Self> {
            Some(Self::default())
        }

        fn set_active(&mut self, active: bool) {
            self.active = active;
        }
    }

    #[derive(Debug)]
    struct Gem;

    impl Poolable for Gem {
        fn instantiate(_blueprint: Option<&Self>) -> Option<Self> {
            Some(Self)
        }
    }

    #[test]
    fn new_manager_is_empty() {
        let pools = PoolManager::new();

        assert!(pools.is_empty());
        assert_eq!(pools.len(), 0);
        assert!(!pools.contains::<Coin>(None));
    }

    #[test]
    fn pool_is_created_lazily() {
        let mut pools = PoolManager::new();

        assert!(pools.get::<Coin>(None).is_none());

        let pool = pools.pool::<Coin>(None);
        assert!(pool.is_empty());

        assert!(pools.contains::<Coin>(None));
        assert!(!pools.contains::<Coin>(Some("gold")));
        assert_eq!(pools.len(), 1);
    }

    #[test]
    fn pool_returns_same_pool_for_same_key() {
        let mut pools = PoolManager::new();

        pools.pool::<Coin>(Some("gold")).populate(3).unwrap();

        assert_eq!(pools.pool::<Coin>(Some("gold")).len(), 3);
        assert_eq!(pools.len(), 1);
    }

    #[test]
    fn named_pools_do_not_share_instances() {
        let mut pools = PoolManager::new();

        pools.release(Coin { serial: 1, active: true }, Some("gold"));
        pools.release(Coin { serial: 2, active: true }, Some("silver"));

        assert_eq!(pools.acquire::<Coin>(Some("gold")).unwrap().serial, 1);
        assert_eq!(pools.acquire::<Coin>(Some("silver")).unwrap().serial, 2);

        // Both named pools are now exhausted and construct fresh coins.
        assert_eq!(pools.acquire::<Coin>(Some("gold")).unwrap().serial, 0);
        assert!(pools.get::<Coin>(None).is_none());
    }

    #[test]
    fn types_do_not_share_pools() {
        let mut pools = PoolManager::new();

        pools.pool::<Coin>(None).populate(2).unwrap();
        pools.pool::<Gem>(None).populate(5).unwrap();

        assert_eq!(pools.get::<Coin>(None).unwrap().len(), 2);
        assert_eq!(pools.get::<Gem>(None).unwrap().len(), 5);
        assert_eq!(pools.len(), 2);
    }

    #[test]
    fn pool_or_insert_with_only_makes_once() {
        let mut pools = PoolManager::new();
        let made = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let made = Rc::clone(&made);
            pools.pool_or_insert_with::<Coin, _>(Some("gold"), move || {
                made.set(made.get() + 1);
                Pool::with_blueprint(Coin { serial: 99, active: false })
            });
        }

        assert_eq!(made.get(), 1);
        assert_eq!(
            pools.acquire::<Coin>(Some("gold")).unwrap().serial,
            0,
            "default factory of Coin ignores the blueprint"
        );
    }

    #[test]
    fn pool_or_insert_with_keeps_existing_pool() {
        let mut pools = PoolManager::new();
        pools.pool::<Coin>(None).populate(1).unwrap();

        let pool = pools.pool_or_insert_with::<Coin, _>(None, || unreachable!());

        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn acquire_and_release_activate_and_deactivate() {
        let mut pools = PoolManager::new();

        let coin = pools.acquire::<Coin>(None).unwrap();
        assert!(coin.active);

        pools.release(coin, None);
        assert!(!pools.get::<Coin>(None).unwrap().peek().unwrap().active);
    }

    #[test]
    fn clear_all_empties_every_pool() {
        let mut pools = PoolManager::new();

        pools.pool::<Coin>(None).populate(2).unwrap();
        pools.pool::<Coin>(Some("gold")).populate(2).unwrap();
        pools.pool::<Gem>(Some("ruby")).populate(2).unwrap();

        pools.clear_all(ClearPolicy::DestroyItems);

        assert!(pools.get::<Coin>(None).unwrap().is_empty());
        assert!(pools.get::<Coin>(Some("gold")).unwrap().is_empty());
        assert!(pools.get::<Gem>(Some("ruby")).unwrap().is_empty());
        assert_eq!(pools.len(), 3);
    }

    #[test]
    fn debug_output_lists_types() {
        let mut pools = PoolManager::new();
        pools.pool::<Gem>(None);
        pools.pool::<Gem>(Some("ruby"));

        let output = format!("{pools:?}");

        assert!(output.contains("Gem"));
        assert!(output.contains('2'));
    }
}
