use std::fmt;
use std::time::Duration;

use crate::{ViewportProjection, is_outside_viewport};

/// Runs an action once, after a given amount of frame time has passed.
///
/// The owner calls [`tick()`][Self::tick] every frame with the frame's delta time.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::time::Duration;
///
/// use essentials::Delay;
///
/// let exploded = Cell::new(false);
/// let mut fuse = Delay::new(Duration::from_millis(50), || exploded.set(true));
///
/// let frame = Duration::from_millis(20);
/// assert!(!fuse.tick(frame));
/// assert!(!fuse.tick(frame));
/// assert!(fuse.tick(frame));
/// assert!(exploded.get());
///
/// // Further ticks do nothing.
/// assert!(!fuse.tick(frame));
/// ```
pub struct Delay<F> {
    remaining: Duration,
    action: Option<F>,
}

impl<F: FnOnce()> Delay<F> {
    /// Creates a delay that runs `action` once `duration` of frame time has been ticked.
    #[must_use]
    pub fn new(duration: Duration, action: F) -> Self {
        Self {
            remaining: duration,
            action: Some(action),
        }
    }

    /// Advances the delay by one frame, returning `true` if the action ran during this call.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.action.is_none() {
            return false;
        }

        self.remaining = self.remaining.saturating_sub(delta);

        if !self.remaining.is_zero() {
            return false;
        }

        self.action.take().is_some_and(|action| {
            action();
            true
        })
    }

    /// The frame time left until the action runs. Zero once it has run.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Whether the action has already run.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.action.is_none()
    }
}

impl<F> fmt::Debug for Delay<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delay")
            .field("remaining", &self.remaining)
            .field("finished", &self.action.is_none())
            .finish()
    }
}

/// Runs an action once, the first time a watched position is seen outside the viewport.
///
/// The owner calls [`poll()`][Self::poll] every frame with the current position of the
/// watched entity.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
///
/// use essentials::ExitWatch;
///
/// let camera = |position: [f32; 3]| position;
/// let recycled = Cell::new(0);
/// let mut watch = ExitWatch::new(|| recycled.set(recycled.get() + 1));
///
/// assert!(!watch.poll(&camera, [0.5, 0.5, 0.0]));
/// assert!(watch.poll(&camera, [1.5, 0.5, 0.0]));
/// assert!(!watch.poll(&camera, [2.5, 0.5, 0.0]));
/// assert_eq!(recycled.get(), 1);
/// ```
pub struct ExitWatch<F> {
    action: Option<F>,
}

impl<F: FnOnce()> ExitWatch<F> {
    /// Creates a watch that runs `action` when the position first leaves the viewport.
    #[must_use]
    pub fn new(action: F) -> Self {
        Self {
            action: Some(action),
        }
    }

    /// Checks the position for this frame, returning `true` if the action ran during this call.
    pub fn poll<P>(&mut self, projection: &P, position: [f32; 3]) -> bool
    where
        P: ViewportProjection + ?Sized,
    {
        if self.action.is_none() || !is_outside_viewport(projection, position) {
            return false;
        }

        self.action.take().is_some_and(|action| {
            action();
            true
        })
    }

    /// Whether the action has already run.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.action.is_none()
    }
}

impl<F> fmt::Debug for ExitWatch<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExitWatch")
            .field("finished", &self.action.is_none())
            .finish()
    }
}

/// The longest of a set of durations, e.g. of the effects attached to an entity, to know when
/// all of them have finished playing.
///
/// Returns `None` if there are no durations.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
///
/// use essentials::max_duration;
///
/// let effects = [Duration::from_millis(300), Duration::from_secs(2)];
///
/// assert_eq!(max_duration(effects), Some(Duration::from_secs(2)));
/// assert_eq!(max_duration([]), None);
/// ```
#[must_use]
pub fn max_duration<I>(durations: I) -> Option<Duration>
where
    I: IntoIterator<Item = Duration>,
{
    durations.into_iter().max()
}
