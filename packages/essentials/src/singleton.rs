use std::any::type_name;
use std::fmt;
use std::sync::OnceLock;

/// Lazily provides the one shared instance of `T`.
///
/// On first access, the singleton tries to adopt an instance that already exists elsewhere
/// (for example one placed in a scene by a level designer) and only creates a new instance if
/// none is found. Every later access returns that same instance.
///
/// The type is usable in a `static`.
///
/// # Example
///
/// ```rust
/// use essentials::Singleton;
///
/// #[derive(Debug)]
/// struct AudioMixer {
///     channels: usize,
/// }
///
/// static MIXER: Singleton<AudioMixer> = Singleton::new();
///
/// assert!(MIXER.get().is_none());
///
/// let mixer = MIXER.get_or_init_with(|| None, || AudioMixer { channels: 32 });
/// assert_eq!(mixer.channels, 32);
///
/// // Later calls never run the constructors again.
/// let again = MIXER.get_or_init_with(|| unreachable!(), || unreachable!());
/// assert!(std::ptr::eq(mixer, again));
/// ```
pub struct Singleton<T> {
    instance: OnceLock<T>,
}

impl<T> Singleton<T> {
    /// Creates a singleton with no instance yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            instance: OnceLock::new(),
        }
    }

    /// The instance, if it has been initialized.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.instance.get()
    }

    /// The instance, initializing it with `create` if needed.
    pub fn get_or_init<C>(&self, create: C) -> &T
    where
        C: FnOnce() -> T,
    {
        self.get_or_init_with(|| None, create)
    }

    /// The instance, initializing it if needed: first from `find`, and if that finds nothing,
    /// from `create`.
    ///
    /// At most one initialization happens even if several threads race to initialize.
    pub fn get_or_init_with<Find, C>(&self, find: Find, create: C) -> &T
    where
        Find: FnOnce() -> Option<T>,
        C: FnOnce() -> T,
    {
        self.instance.get_or_init(|| {
            find().unwrap_or_else(|| {
                log::debug!("no existing {} found, creating one", type_name::<T>());
                create()
            })
        })
    }
}

impl<T> Default for Singleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Singleton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Singleton")
            .field("instance", &self.instance.get())
            .finish()
    }
}
