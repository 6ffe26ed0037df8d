//! Main tracked-image reconciliation logic.

use tracing::{debug, trace};

use crate::integration::SceneGraph;
use crate::reconciler::catalog::PrefabCatalog;
use crate::reconciler::detection::{ImageDetection, ImageTrackingEvent};
use crate::reconciler::spawned::SpawnedObject;

/// What to do with pool entries whose image the tracker reports as removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovalPolicy {
    /// Leave spawned objects untouched. This matches the behavior commonly
    /// shipped in AR image-tracking glue code, where removed images are
    /// silently dropped on the floor; over a long session it leaks scene
    /// objects, so prefer `Despawn` unless the host relies on persistence.
    #[default]
    Retain,
    /// Hide every matching spawned object but keep it pooled, so a later
    /// added event for the same image stacks a fresh object next to it.
    Deactivate,
    /// Drain matching entries from the pool and release their handles via
    /// [`SceneGraph::despawn`].
    Despawn,
}

/// Configuration for the [`TrackedImageReconciler`].
#[derive(Debug, Clone, Default)]
pub struct ReconcilerConfig {
    pub removal_policy: RemovalPolicy,
}

impl ReconcilerConfig {
    pub fn with_removal_policy(removal_policy: RemovalPolicy) -> Self {
        Self { removal_policy }
    }
}

/// Maintains a 1:1 association between detected images and spawned scene
/// objects: spawns on added, toggles visibility on updated, and applies the
/// configured [`RemovalPolicy`] on removed.
///
/// All mutation happens inside [`on_images_changed`], which the host invokes
/// synchronously from its update loop; the reconciler is therefore
/// single-threaded and lock-free by contract.
///
/// [`on_images_changed`]: TrackedImageReconciler::on_images_changed
pub struct TrackedImageReconciler<S: SceneGraph> {
    scene: S,
    catalog: PrefabCatalog<S::Template>,
    pool: Vec<SpawnedObject<S::Handle>>,
    config: ReconcilerConfig,
}

impl<S: SceneGraph> TrackedImageReconciler<S> {
    pub fn new(scene: S, catalog: PrefabCatalog<S::Template>, config: ReconcilerConfig) -> Self {
        Self {
            scene,
            catalog,
            pool: Vec::new(),
            config,
        }
    }

    pub fn with_default_config(scene: S, catalog: PrefabCatalog<S::Template>) -> Self {
        Self::new(scene, catalog, ReconcilerConfig::default())
    }

    /// Apply one change batch from the tracking subsystem.
    ///
    /// Processing order is the observable contract: every added detection is
    /// handled before any updated one, each in batch order, and the catalog
    /// and pool are scanned front to back. Detections whose name matches no
    /// catalog entry are skipped without error.
    pub fn on_images_changed(&mut self, event: &ImageTrackingEvent) {
        // Step 1: spawn one object per (added detection, matching entry) pair
        for detection in &event.added {
            self.spawn_matches(detection);
        }

        // Step 2: visibility follows tracking quality
        for detection in &event.updated {
            self.apply_visibility(detection);
        }

        // Step 3: removed detections dispatch on the configured policy
        match self.config.removal_policy {
            RemovalPolicy::Retain => {
                if !event.removed.is_empty() {
                    trace!(
                        count = event.removed.len(),
                        "retaining spawned objects for removed images"
                    );
                }
            }
            RemovalPolicy::Deactivate => {
                for detection in &event.removed {
                    self.deactivate_matches(detection);
                }
            }
            RemovalPolicy::Despawn => {
                for detection in &event.removed {
                    self.despawn_matches(detection);
                }
            }
        }
    }

    fn spawn_matches(&mut self, detection: &ImageDetection) {
        let mut matched = false;
        // No break after a match: duplicate catalog names spawn one object each
        for entry in self.catalog.entries() {
            if entry.name == detection.reference_image_name {
                let handle = self.scene.instantiate(&entry.template, &detection.anchor);
                let spawned = SpawnedObject::new(entry.name.clone(), handle);
                debug!(id = spawned.id, name = %spawned.name, "spawned object for tracked image");
                self.pool.push(spawned);
                matched = true;
            }
        }
        if !matched {
            trace!(name = %detection.reference_image_name, "added image matches no catalog entry");
        }
    }

    fn apply_visibility(&mut self, detection: &ImageDetection) {
        let visible = detection.tracking_state.is_visible();
        for spawned in &mut self.pool {
            if spawned.name == detection.reference_image_name {
                self.scene.set_active(&spawned.handle, visible);
                spawned.active = visible;
            }
        }
    }

    fn deactivate_matches(&mut self, detection: &ImageDetection) {
        for spawned in &mut self.pool {
            if spawned.name == detection.reference_image_name {
                self.scene.set_active(&spawned.handle, false);
                spawned.active = false;
            }
        }
    }

    fn despawn_matches(&mut self, detection: &ImageDetection) {
        let mut kept = Vec::with_capacity(self.pool.len());
        for spawned in self.pool.drain(..) {
            if spawned.name == detection.reference_image_name {
                debug!(id = spawned.id, name = %spawned.name, "despawning object for removed image");
                self.scene.despawn(&spawned.handle);
            } else {
                kept.push(spawned);
            }
        }
        self.pool = kept;
    }

    /// Spawned objects created so far, in spawn order.
    pub fn spawned(&self) -> &[SpawnedObject<S::Handle>] {
        &self.pool
    }

    pub fn catalog(&self) -> &PrefabCatalog<S::Template> {
        &self.catalog
    }

    pub fn config(&self) -> &ReconcilerConfig {
        &self.config
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }
}
