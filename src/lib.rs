//! Reconciles AR tracked-image change events onto a pool of spawned scene
//! objects.
//!
//! A tracking subsystem reports per-tick batches of added, updated and
//! removed image detections. [`TrackedImageReconciler`] maps those batches
//! onto scene-object mutations through an injected [`SceneGraph`] port:
//! added detections spawn one object per matching catalog entry, updated
//! detections toggle visibility from tracking quality, and removed
//! detections follow a configurable [`RemovalPolicy`] (default: leave the
//! pool untouched, matching common AR image-tracking glue).
//!
//! ```ignore
//! use artrack_rs::{
//!     CatalogBuilder, ImageDetection, ImageTrackingEvent, ReconcilerBinding,
//!     TrackedImageFeed, TrackedImageReconciler,
//! };
//!
//! let catalog = CatalogBuilder::new().entry("Earth", earth_prefab).build();
//! let reconciler = TrackedImageReconciler::with_default_config(engine, catalog);
//!
//! let mut feed = TrackedImageFeed::new();
//! let mut binding = ReconcilerBinding::new(reconciler);
//! binding.enable(&mut feed)?;
//!
//! // Host update loop, once per tracking-subsystem change batch:
//! feed.publish(&ImageTrackingEvent::with_added(vec![
//!     ImageDetection::added("Earth", anchor),
//! ]));
//! ```

pub mod integration;
pub mod reconciler;

pub use integration::{
    CatalogBuilder, ImagesChangedHandler, ReconcilerBinding, SceneGraph, SubscriptionError,
    SubscriptionId, TrackedImageFeed,
};
pub use reconciler::{
    CatalogEntry, ImageDetection, ImageTrackingEvent, Pose, PrefabCatalog, ReconcilerConfig,
    RemovalPolicy, SpawnedObject, TrackedImageReconciler, TrackingState,
};
