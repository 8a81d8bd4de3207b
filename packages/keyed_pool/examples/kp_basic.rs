//! Recycles scene objects through keyed pools across a simulated level transition.
//!
//! Run with `RUST_LOG=debug` to see what the pools are doing.

use keyed_pool::{ClearPolicy, Pool, PoolManager, Poolable};
use testing::{Scene, SceneObject};

#[derive(Debug)]
struct Bullet(SceneObject);

impl Poolable for Bullet {
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

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let scene = Scene::new();
    let mut pools = PoolManager::new();

    for kind in ["player", "enemy"] {
        let prefab = scene.spawn(&format!("{kind} bullet"));
        prefab.set_active(false);

        if let Err(e) = pools
            .pool_or_insert_with(Some(kind), || Pool::with_blueprint(Bullet(prefab)))
            .populate(8)
        {
            log::error!("cannot warm up {kind} bullets: {e}");
        }
    }

    println!("After warm-up: {scene:?}");

    // A few frames of shooting and recycling.
    for frame in 0..3 {
        let volley = pools.pool::<Bullet>(Some("player")).acquire_many(5);
        println!("Frame {frame}: fired {} player bullets", volley.len());

        pools.pool::<Bullet>(Some("player")).release_many(volley);
    }

    println!("After shooting: {scene:?}");

    // Loading the next level destroys everything in the scene, including pooled objects.
    scene.teardown();
    pools.clear_all(ClearPolicy::DetachItems);

    println!("After level transition: {pools:?}");
}
