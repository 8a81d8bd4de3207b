use std::any::type_name;
use std::fmt;

use crate::{ClearPolicy, Error, PoolBuilder, Poolable, Result};

/// Constructs a new instance from the blueprint in effect, returning `None` on failure.
pub type Factory<T> = Box<dyn FnMut(Option<&T>) -> Option<T>>;

/// Side effect applied to an instance when it enters or leaves a pool.
pub type Hook<T> = Box<dyn FnMut(&mut T)>;

/// A pool of reusable instances of `T`, handed out in last-in-first-out order.
///
/// Instances are moved out of the pool by [`acquire()`][1] and moved back in by
/// [`release()`][2]. While an instance is checked out, the caller owns it and the pool knows
/// nothing about it. Released instances are kept on a stack, so the most recently released
/// instance is the next one to be acquired.
///
/// If the stack is empty when an instance is requested, the pool constructs a new one from its
/// blueprint via its factory. Entries that the host environment destroyed while they were
/// sitting in the pool (see [`Poolable::is_alive()`]) are discarded rather than handed out.
///
/// # Resource usage
///
/// The pool never shrinks on its own. Use [`clear()`][3] to get rid of the held instances.
/// Dropping the pool drops its held instances without destroying them through the host.
///
/// # Example
///
/// ```rust
/// use keyed_pool::{Pool, Poolable};
///
/// #[derive(Clone, Debug, Default)]
/// struct Sprite {
///     frame: u16,
///     visible: bool,
/// }
///
/// impl Poolable for Sprite {
///     fn instantiate(blueprint: Option<&Self>) -> Option<Self> {
///         Some(blueprint.cloned().unwrap_or_default())
///     }
///
///     fn set_active(&mut self, active: bool) {
///         self.visible = active;
///     }
/// }
///
/// let mut pool = Pool::with_blueprint(Sprite { frame: 7, visible: false });
/// pool.populate(8).unwrap();
/// assert_eq!(pool.len(), 8);
///
/// let sprite = pool.acquire().unwrap();
/// assert_eq!(sprite.frame, 7);
/// assert!(sprite.visible);
/// assert_eq!(pool.len(), 7);
///
/// pool.release(sprite);
/// assert_eq!(pool.len(), 8);
/// ```
///
/// [1]: Self::acquire
/// [2]: Self::release
/// [3]: Self::clear
pub struct Pool<T> {
    /// Template for new instances. Kept apart from the stock so that the factory can borrow it
    /// while the stock is being mutated.
    blueprint: Option<T>,

    stock: Stock<T>,
}

/// Everything in a pool except the blueprint.
struct Stock<T> {
    /// Released instances, most recently released last.
    available: Vec<T>,

    factory: Factory<T>,
    on_acquire: Hook<T>,
    on_release: Hook<T>,
}

impl<T: Poolable> Stock<T> {
    fn create(&mut self, blueprint: Option<&T>) -> Option<T> {
        let instance = (self.factory)(blueprint);

        if instance.is_none() {
            log::debug!("factory for {} produced no instance", type_name::<T>());
        }

        instance
    }

    /// Pops entries until a live one is found, dropping the stale ones on the way.
    fn pop_alive(&mut self) -> Option<T> {
        while let Some(instance) = self.available.pop() {
            if instance.is_alive() {
                return Some(instance);
            }

            log::trace!(
                "discarding stale {} found in pool, {} entries left",
                type_name::<T>(),
                self.available.len()
            );
        }

        None
    }

    fn push(&mut self, mut instance: T) {
        (self.on_release)(&mut instance);
        self.available.push(instance);
    }
}

impl<T: Poolable> Pool<T> {
    pub(crate) fn new_inner(
        blueprint: Option<T>,
        factory: Factory<T>,
        on_acquire: Hook<T>,
        on_release: Hook<T>,
    ) -> Self {
        Self {
            blueprint,
            stock: Stock {
                available: Vec::new(),
                factory,
                on_acquire,
                on_release,
            },
        }
    }

    /// Creates a new empty [`Pool`] with the default configuration and no blueprint.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keyed_pool::{Pool, Poolable};
    ///
    /// #[derive(Debug)]
    /// struct Node;
    ///
    /// impl Poolable for Node {
    ///     fn instantiate(_blueprint: Option<&Self>) -> Option<Self> {
    ///         Some(Self)
    ///     }
    /// }
    ///
    /// let pool = Pool::<Node>::new();
    /// assert!(pool.is_empty());
    /// assert!(pool.blueprint().is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a new empty [`Pool`] with the default configuration that constructs its
    /// instances from `blueprint`.
    #[must_use]
    pub fn with_blueprint(blueprint: T) -> Self {
        Self::builder().blueprint(blueprint).build()
    }

    /// Starts building a new [`Pool`].
    ///
    /// Use this when you want to customize the pool configuration beyond the defaults.
    pub fn builder() -> PoolBuilder<T> {
        PoolBuilder::new()
    }

    /// The number of instances ready to be acquired without constructing new ones.
    ///
    /// This count may include stale entries that will be discarded on acquire.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stock.available.len()
    }

    /// Whether the pool holds no instances.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stock.available.is_empty()
    }

    /// The instance that the next [`acquire()`][Self::acquire] would try first.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.stock.available.last()
    }

    /// The template used to construct new instances, if any.
    #[must_use]
    pub fn blueprint(&self) -> Option<&T> {
        self.blueprint.as_ref()
    }

    /// Replaces the template used to construct new instances, returning the previous one.
    ///
    /// Instances already in the pool are not affected.
    pub fn set_blueprint(&mut self, blueprint: Option<T>) -> Option<T> {
        std::mem::replace(&mut self.blueprint, blueprint)
    }

    /// Replaces the construction logic of the pool.
    pub fn set_factory<F>(&mut self, factory: F)
    where
        F: FnMut(Option<&T>) -> Option<T> + 'static,
    {
        self.stock.factory = Box::new(factory);
    }

    /// Replaces the hook that runs on every instance handed out by the pool.
    pub fn set_on_acquire<F>(&mut self, hook: F)
    where
        F: FnMut(&mut T) + 'static,
    {
        self.stock.on_acquire = Box::new(hook);
    }

    /// Replaces the hook that runs on every instance returned to the pool.
    pub fn set_on_release<F>(&mut self, hook: F)
    where
        F: FnMut(&mut T) + 'static,
    {
        self.stock.on_release = Box::new(hook);
    }

    /// Fills the pool with `count` instances constructed from the pool's own blueprint.
    ///
    /// See [`populate_from()`][Self::populate_from] for the exact semantics.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConstructionFailed`] if the first instance could not be constructed.
    /// The pool is left unchanged in that case.
    pub fn populate(&mut self, count: usize) -> Result<()> {
        populate(&mut self.stock, self.blueprint.as_ref(), count)
    }

    /// Fills the pool with `count` instances constructed from `blueprint`.
    ///
    /// The first instance is constructed before anything else happens, to check that the
    /// factory works at all. If it fails, the call fails without touching the pool. Otherwise,
    /// all `count` instances are released into the pool, running the release hook on each.
    /// Should a later construction fail, that instance is skipped.
    ///
    /// Populating with a `count` of zero succeeds without doing anything.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConstructionFailed`] if the first instance could not be constructed.
    /// The pool is left unchanged in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keyed_pool::{Pool, Poolable};
    ///
    /// #[derive(Clone, Debug)]
    /// struct Tile(char);
    ///
    /// impl Poolable for Tile {
    ///     fn instantiate(blueprint: Option<&Self>) -> Option<Self> {
    ///         blueprint.cloned()
    ///     }
    /// }
    ///
    /// let mut pool = Pool::<Tile>::new();
    ///
    /// // Without a blueprint, this type cannot be constructed.
    /// assert!(pool.populate(4).is_err());
    /// assert!(pool.is_empty());
    ///
    /// pool.populate_from(&Tile('#'), 4).unwrap();
    /// assert_eq!(pool.len(), 4);
    /// ```
    pub fn populate_from(&mut self, blueprint: &T, count: usize) -> Result<()> {
        populate(&mut self.stock, Some(blueprint), count)
    }

    /// Takes an instance out of the pool, constructing a new one if the pool has none.
    ///
    /// The most recently released live instance is returned first. Entries that are no longer
    /// alive are discarded. If no live entry remains, a new instance is constructed from the
    /// pool's blueprint. The acquire hook runs on the instance before it is returned.
    ///
    /// Returns `None` only if a new instance was needed and could not be constructed.
    pub fn acquire(&mut self) -> Option<T> {
        let mut instance = match self.stock.pop_alive() {
            Some(instance) => instance,
            None => self.stock.create(self.blueprint.as_ref())?,
        };

        (self.stock.on_acquire)(&mut instance);

        Some(instance)
    }

    /// Takes `count` instances out of the pool, as if by calling [`acquire()`][Self::acquire]
    /// `count` times.
    ///
    /// Instances that could not be constructed are left out, so the result only contains fewer
    /// than `count` instances if construction failed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keyed_pool::{Pool, Poolable};
    ///
    /// #[derive(Debug)]
    /// struct Spark;
    ///
    /// impl Poolable for Spark {
    ///     fn instantiate(_blueprint: Option<&Self>) -> Option<Self> {
    ///         Some(Self)
    ///     }
    /// }
    ///
    /// let mut pool = Pool::<Spark>::new();
    ///
    /// assert!(pool.acquire_many(0).is_empty());
    /// assert_eq!(pool.acquire_many(5).len(), 5);
    /// ```
    #[must_use]
    pub fn acquire_many(&mut self, count: usize) -> Vec<T> {
        let mut instances = Vec::with_capacity(count);

        for _ in 0..count {
            if let Some(instance) = self.acquire() {
                instances.push(instance);
            }
        }

        instances
    }

    /// Returns an instance to the pool, running the release hook on it.
    ///
    /// To return an instance that may be absent, pass the `Option` to
    /// [`release_many()`][Self::release_many], for which `None` is an empty batch.
    pub fn release(&mut self, instance: T) {
        self.stock.push(instance);
    }

    /// Returns every instance of a batch to the pool, in iteration order.
    ///
    /// The last instance of the batch is the first one to be acquired again.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keyed_pool::{Pool, Poolable};
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Id(u32);
    ///
    /// impl Poolable for Id {
    ///     fn instantiate(_blueprint: Option<&Self>) -> Option<Self> {
    ///         None
    ///     }
    /// }
    ///
    /// let mut pool = Pool::<Id>::new();
    ///
    /// pool.release_many([Id(1), Id(2)]);
    /// pool.release_many(None);
    /// pool.release_many(Some(Id(3)));
    ///
    /// assert_eq!(pool.len(), 3);
    /// assert_eq!(pool.acquire(), Some(Id(3)));
    /// ```
    pub fn release_many<I>(&mut self, instances: I)
    where
        I: IntoIterator<Item = T>,
    {
        for instance in instances {
            self.stock.push(instance);
        }
    }

    /// Removes every instance from the pool, destroying each live one through the host.
    ///
    /// This is [`clear_with(ClearPolicy::DestroyItems)`][Self::clear_with].
    pub fn clear(&mut self) {
        self.clear_with(ClearPolicy::DestroyItems);
    }

    /// Removes every instance from the pool, treating them according to `policy`.
    ///
    /// Stale entries are never passed to [`Poolable::destroy()`] because the host has already
    /// destroyed them.
    pub fn clear_with(&mut self, policy: ClearPolicy) {
        log::debug!(
            "clearing {} instances of {} with {policy:?}",
            self.stock.available.len(),
            type_name::<T>()
        );

        match policy {
            ClearPolicy::DestroyItems => {
                for instance in self.stock.available.drain(..) {
                    if instance.is_alive() {
                        instance.destroy();
                    }
                }
            }
            ClearPolicy::DetachItems => self.stock.available.clear(),
        }
    }
}

fn populate<T: Poolable>(stock: &mut Stock<T>, blueprint: Option<&T>, count: usize) -> Result<()> {
    if count == 0 {
        return Ok(());
    }

    let Some(first) = stock.create(blueprint) else {
        log::warn!(
            "cannot populate pool of {}: the first instance could not be constructed",
            type_name::<T>()
        );

        return Err(Error::ConstructionFailed {
            type_name: type_name::<T>(),
        });
    };

    stock.available.reserve(count);
    stock.push(first);

    for _ in 1..count {
        // Pushing an absent instance is a no-op, same as releasing one.
        if let Some(instance) = stock.create(blueprint) {
            stock.push(instance);
        }
    }

    Ok(())
}

impl<T: Poolable> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Pool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("available", &self.stock.available.len())
            .field("has_blueprint", &self.blueprint.is_some())
            .finish_non_exhaustive()
    }
}
