use std::any::type_name;
use std::fmt;

use crate::{Factory, Hook, Pool, Poolable};

/// Builder for creating an instance of [`Pool`].
///
/// You only need to use this builder if you want to customize how the pool constructs its
/// instances or what it does to them on acquire and release. The default configuration used
/// by [`Pool::new()`][1] constructs instances via [`Poolable::instantiate()`] and toggles their
/// active flag via [`Poolable::set_active()`].
///
/// # Examples
///
/// ```
/// use keyed_pool::{Pool, Poolable};
///
/// #[derive(Clone, Debug, Default)]
/// struct Enemy {
///     health: u32,
///     active: bool,
/// }
///
/// impl Poolable for Enemy {
///     fn instantiate(blueprint: Option<&Self>) -> Option<Self> {
///         blueprint.cloned()
///     }
///
///     fn set_active(&mut self, active: bool) {
///         self.active = active;
///     }
/// }
///
/// let mut pool = Pool::<Enemy>::builder()
///     .blueprint(Enemy { health: 100, active: false })
///     .on_acquire(|enemy| {
///         enemy.health = 100;
///         enemy.active = true;
///     })
///     .build();
///
/// let enemy = pool.acquire().unwrap();
/// assert_eq!(enemy.health, 100);
/// ```
///
/// [1]: Pool::new
#[must_use]
pub struct PoolBuilder<T> {
    blueprint: Option<T>,
    factory: Option<Factory<T>>,
    on_acquire: Option<Hook<T>>,
    on_release: Option<Hook<T>>,
}

impl<T> fmt::Debug for PoolBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolBuilder")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("has_blueprint", &self.blueprint.is_some())
            .field("custom_factory", &self.factory.is_some())
            .field("custom_on_acquire", &self.on_acquire.is_some())
            .field("custom_on_release", &self.on_release.is_some())
            .finish()
    }
}

impl<T: Poolable> PoolBuilder<T> {
    pub(crate) fn new() -> Self {
        Self {
            blueprint: None,
            factory: None,
            on_acquire: None,
            on_release: None,
        }
    }

    /// Sets the template instance that new instances are created from.
    ///
    /// The blueprint itself is never handed out by the pool.
    pub fn blueprint(mut self, blueprint: T) -> Self {
        self.blueprint = Some(blueprint);
        self
    }

    /// Replaces the default construction logic.
    ///
    /// The factory receives the blueprint in effect (if any) and returns a new instance, or
    /// `None` if construction failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_pool::{Pool, Poolable};
    ///
    /// #[derive(Debug)]
    /// struct Buffer(Vec<u8>);
    ///
    /// impl Poolable for Buffer {
    ///     fn instantiate(_blueprint: Option<&Self>) -> Option<Self> {
    ///         None
    ///     }
    /// }
    ///
    /// let mut pool = Pool::<Buffer>::builder()
    ///     .factory(|_| Some(Buffer(Vec::with_capacity(4096))))
    ///     .build();
    ///
    /// let buffer = pool.acquire().unwrap();
    /// assert!(buffer.0.capacity() >= 4096);
    /// ```
    pub fn factory<F>(mut self, factory: F) -> Self
    where
        F: FnMut(Option<&T>) -> Option<T> + 'static,
    {
        self.factory = Some(Box::new(factory));
        self
    }

    /// Replaces the hook that runs on every instance handed out by the pool.
    pub fn on_acquire<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut T) + 'static,
    {
        self.on_acquire = Some(Box::new(hook));
        self
    }

    /// Replaces the hook that runs on every instance returned to the pool.
    pub fn on_release<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut T) + 'static,
    {
        self.on_release = Some(Box::new(hook));
        self
    }

    /// Builds the pool with the specified configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_pool::{Pool, Poolable};
    ///
    /// #[derive(Debug)]
    /// struct Token;
    ///
    /// impl Poolable for Token {
    ///     fn instantiate(_blueprint: Option<&Self>) -> Option<Self> {
    ///         Some(Self)
    ///     }
    /// }
    ///
    /// let pool = Pool::<Token>::builder().build();
    /// assert!(pool.is_empty());
    /// ```
    #[must_use]
    pub fn build(self) -> Pool<T> {
        Pool::new_inner(
            self.blueprint,
            self.factory.unwrap_or_else(default_factory),
            self.on_acquire.unwrap_or_else(|| default_hook(true)),
            self.on_release.unwrap_or_else(|| default_hook(false)),
        )
    }
}

pub(crate) fn default_factory<T: Poolable>() -> Factory<T> {
    Box::new(T::instantiate)
}

pub(crate) fn default_hook<T: Poolable>(active: bool) -> Hook<T> {
    Box::new(move |item: &mut T| item.set_active(active))
}
