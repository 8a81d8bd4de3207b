use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A fake object store standing in for a game engine scene.
///
/// Cloning a `Scene` yields another handle to the same store.
#[derive(Clone, Default)]
pub struct Scene {
    state: Rc<RefCell<SceneState>>,
}

#[derive(Debug, Default)]
struct SceneState {
    /// Indexed by `ObjectId`. Destroyed objects keep their slot so ids are never reused.
    objects: Vec<ObjectState>,

    fail_instantiation: bool,
}

#[derive(Debug)]
struct ObjectState {
    name: String,
    active: bool,
    destroyed: bool,
}

/// Identifies an object in a [`Scene`]. Never reused, even after the object is destroyed.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ObjectId(usize);

/// A handle to an object in a [`Scene`].
///
/// The handle is deliberately not `Clone`, so that a test can track where each handle is.
/// The object it refers to may be destroyed through the scene while the handle is held.
pub struct SceneObject {
    id: ObjectId,
    scene: Scene,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new active object.
    #[must_use]
    pub fn spawn(&self, name: &str) -> SceneObject {
        let mut state = self.state.borrow_mut();

        let id = ObjectId(state.objects.len());
        state.objects.push(ObjectState {
            name: name.to_owned(),
            active: true,
            destroyed: false,
        });

        log::trace!("spawned {name} as {id:?}");

        SceneObject {
            id,
            scene: self.clone(),
        }
    }

    /// Duplicates an existing object, the way an engine clones a prefab.
    ///
    /// Returns `None` if the source object has been destroyed or if instantiation failures
    /// have been enabled via [`set_fail_instantiation()`][Self::set_fail_instantiation].
    #[must_use]
    pub fn instantiate(&self, source: &SceneObject) -> Option<SceneObject> {
        let name = {
            let state = self.state.borrow();

            if state.fail_instantiation {
                return None;
            }

            let source = state.objects.get(source.id.0)?;
            if source.destroyed {
                return None;
            }

            format!("{} (Clone)", source.name)
        };

        Some(self.spawn(&name))
    }

    /// Makes every following [`instantiate()`][Self::instantiate] fail (or succeed again).
    pub fn set_fail_instantiation(&self, fail: bool) {
        self.state.borrow_mut().fail_instantiation = fail;
    }

    /// Destroys an object. Handles to it remain but report it as no longer alive.
    pub fn destroy(&self, id: ObjectId) {
        if let Some(object) = self.state.borrow_mut().objects.get_mut(id.0) {
            object.destroyed = true;
            object.active = false;
        }
    }

    /// Destroys every object in the scene, as happens on a scene transition.
    pub fn teardown(&self) {
        for object in &mut self.state.borrow_mut().objects {
            object.destroyed = true;
            object.active = false;
        }
    }

    /// Whether the object exists and has not been destroyed.
    #[must_use]
    pub fn is_alive(&self, id: ObjectId) -> bool {
        self.state
            .borrow()
            .objects
            .get(id.0)
            .is_some_and(|object| !object.destroyed)
    }

    /// Whether the object is alive and active.
    #[must_use]
    pub fn is_active(&self, id: ObjectId) -> bool {
        self.state
            .borrow()
            .objects
            .get(id.0)
            .is_some_and(|object| !object.destroyed && object.active)
    }

    /// The name of the object, if it exists.
    #[must_use]
    pub fn name(&self, id: ObjectId) -> Option<String> {
        self.state
            .borrow()
            .objects
            .get(id.0)
            .map(|object| object.name.clone())
    }

    /// The number of objects ever created in this scene, including destroyed ones.
    #[must_use]
    pub fn spawned_count(&self) -> usize {
        self.state.borrow().objects.len()
    }

    /// The number of objects that have not been destroyed.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.state
            .borrow()
            .objects
            .iter()
            .filter(|object| !object.destroyed)
            .count()
    }
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("spawned", &self.spawned_count())
            .field("live", &self.live_count())
            .finish()
    }
}

impl SceneObject {
    /// The id of the referenced object.
    #[must_use]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// The scene the object lives in.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Whether the referenced object has not been destroyed.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.scene.is_alive(self.id)
    }

    /// Whether the referenced object is alive and active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.scene.is_active(self.id)
    }

    /// Activates or deactivates the referenced object. No effect on destroyed objects.
    pub fn set_active(&self, active: bool) {
        if let Some(object) = self.scene.state.borrow_mut().objects.get_mut(self.id.0) {
            if !object.destroyed {
                object.active = active;
            }
        }
    }

    /// The name of the referenced object.
    #[must_use]
    pub fn name(&self) -> String {
        self.scene.name(self.id).unwrap_or_default()
    }

    /// Destroys the referenced object, consuming the handle.
    pub fn destroy(self) {
        self.scene.destroy(self.id);
    }
}

impl fmt::Debug for SceneObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneObject")
            .field("id", &self.id)
            .field("name", &self.name())
            .field("alive", &self.is_alive())
            .finish()
    }
}
