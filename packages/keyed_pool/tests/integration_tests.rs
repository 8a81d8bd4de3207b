//! Integration tests that drive pools of scene objects through the public API.
#![allow(
    missing_docs,
    reason = "No need for API documentation in test code"
)]
#![allow(
    clippy::indexing_slicing,
    reason = "we do not need to worry about these things when writing test code"
)]

use std::collections::HashSet;

use keyed_pool::{ClearPolicy, Error, Pool, PoolManager, Poolable};
use testing::{ObjectId, Scene, SceneObject};

/// A pooled handle to a scene object, with the scene's primitives as pool capabilities.
#[derive(Debug)]
struct Prop(SceneObject);

impl Prop {
    fn id(&self) -> ObjectId {
        self.0.id()
    }
}

impl Poolable for Prop {
    fn instantiate(blueprint: Option<&Self>) -> Option<Self> {
        let blueprint = blueprint?;
        blueprint.0.scene().instantiate(&blueprint.0).map(Self)
    }

    fn is_alive(&self) -> bool {
        self.0.is_alive()
    }

    fn set_active(&mut self, active: bool) {
        self.0.set_active(active);
    }

    fn destroy(self) {
        self.0.destroy();
    }
}

fn prop_pool(scene: &Scene) -> Pool<Prop> {
    let prefab = scene.spawn("barrel");
    prefab.set_active(false);

    Pool::with_blueprint(Prop(prefab))
}

#[test]
fn acquired_instance_is_never_available() {
    testing::init_logging();

    let scene = Scene::new();
    let mut pool = prop_pool(&scene);
    pool.populate(4).unwrap();

    let taken = pool.acquire_many(3);
    let taken_ids = taken.iter().map(Prop::id).collect::<HashSet<_>>();

    let remaining = pool.acquire().unwrap();
    assert!(!taken_ids.contains(&remaining.id()));
    assert!(pool.is_empty());
}

#[test]
fn release_then_acquire_is_lifo() {
    let scene = Scene::new();
    let mut pool = prop_pool(&scene);
    pool.populate(2).unwrap();

    let prop = pool.acquire().unwrap();
    let id = prop.id();
    assert!(prop.0.is_active());

    pool.release(prop);
    assert!(!scene.is_active(id));

    let again = pool.acquire().unwrap();
    assert_eq!(again.id(), id);
    assert!(again.0.is_active());

    // Prefab plus the two populated instances, nothing constructed since.
    assert_eq!(scene.spawned_count(), 3);
}

#[test]
fn populate_creates_exactly_count() {
    let scene = Scene::new();
    let mut pool = prop_pool(&scene);

    pool.populate(10).unwrap();

    assert_eq!(pool.len(), 10);
    assert_eq!(scene.spawned_count(), 11);
}

#[test]
fn populate_fails_fast() {
    let scene = Scene::new();
    let mut pool = prop_pool(&scene);
    scene.set_fail_instantiation(true);

    let error = pool.populate(10).unwrap_err();

    assert!(matches!(error, Error::ConstructionFailed { .. }));
    assert!(pool.is_empty());
    assert_eq!(scene.spawned_count(), 1);
}

#[test]
fn acquire_many_counts() {
    let scene = Scene::new();
    let mut pool = prop_pool(&scene);

    assert!(pool.acquire_many(0).is_empty());

    let props = pool.acquire_many(6);
    assert_eq!(props.len(), 6);

    let unique = props.iter().map(Prop::id).collect::<HashSet<_>>();
    assert_eq!(unique.len(), 6);
}

#[test]
fn acquire_skips_stale_entry() {
    let scene = Scene::new();
    let mut pool = prop_pool(&scene);

    let valid = pool.acquire().unwrap();
    let stale = pool.acquire().unwrap();
    let (valid_id, stale_id) = (valid.id(), stale.id());

    // The stale entry ends up on top of the valid one.
    pool.release(valid);
    pool.release(stale);
    scene.destroy(stale_id);

    let prop = pool.acquire().unwrap();
    assert_eq!(prop.id(), valid_id);
    assert!(pool.is_empty());
}

#[test]
fn scene_teardown_falls_back_to_construction() {
    let scene = Scene::new();
    let mut pool = prop_pool(&scene);
    pool.populate(5).unwrap();

    // Everything except a fresh prefab is gone, as after loading a new level.
    scene.teardown();
    let new_prefab = scene.spawn("barrel");
    new_prefab.set_active(false);
    drop(pool.set_blueprint(Some(Prop(new_prefab))));

    let prop = pool.acquire().unwrap();

    assert!(prop.is_alive());
    assert!(pool.is_empty());
    assert_eq!(scene.live_count(), 2);
}

#[test]
fn clear_destroys_held_instances() {
    let scene = Scene::new();
    let mut pool = prop_pool(&scene);
    pool.populate(3).unwrap();

    pool.clear();

    assert!(pool.is_empty());

    // Only the prefab survives.
    assert_eq!(scene.live_count(), 1);
}

#[test]
fn clear_without_destroy_leaves_objects_alive() {
    let scene = Scene::new();
    let mut pool = prop_pool(&scene);
    pool.populate(3).unwrap();

    pool.clear_with(ClearPolicy::DetachItems);

    assert!(pool.is_empty());
    assert_eq!(scene.live_count(), 4);
}

#[test]
fn named_pools_never_share_instances() {
    let scene = Scene::new();
    let mut pools = PoolManager::new();

    pools
        .pool_or_insert_with(Some("barrel"), || prop_pool(&scene))
        .populate(2)
        .unwrap();
    pools
        .pool_or_insert_with(Some("crate"), || prop_pool(&scene))
        .populate(2)
        .unwrap();

    let barrels = pools.pool::<Prop>(Some("barrel")).acquire_many(2);
    let crates = pools.pool::<Prop>(Some("crate")).acquire_many(2);

    let barrel_ids = barrels.iter().map(Prop::id).collect::<HashSet<_>>();
    assert!(crates.iter().all(|c| !barrel_ids.contains(&c.id())));

    pools.release(barrels.into_iter().next().unwrap(), Some("barrel"));

    assert_eq!(pools.pool::<Prop>(Some("barrel")).len(), 1);
    assert!(pools.pool::<Prop>(Some("crate")).is_empty());
}

#[test]
fn manager_clear_all_after_teardown() {
    let scene = Scene::new();
    let mut pools = PoolManager::new();

    pools
        .pool_or_insert_with(None, || prop_pool(&scene))
        .populate(3)
        .unwrap();

    scene.teardown();
    pools.clear_all(ClearPolicy::DestroyItems);

    assert!(pools.pool::<Prop>(None).is_empty());
    assert_eq!(scene.live_count(), 0);
}

#[test]
fn custom_factory_spawns_without_blueprint() {
    let scene = Scene::new();
    let spawner = scene.clone();

    let mut pool = Pool::<Prop>::builder()
        .factory(move |_| Some(Prop(spawner.spawn("spark"))))
        .build();

    let prop = pool.acquire().unwrap();

    assert_eq!(prop.0.name(), "spark");
    assert_eq!(scene.spawned_count(), 1);
}
