use std::collections::HashMap;

use artrack_rs::reconciler::reset_spawn_id_counter;
use artrack_rs::{
    CatalogBuilder, ImageDetection, ImageTrackingEvent, Pose, ReconcilerBinding, SceneGraph,
    TrackedImageFeed, TrackedImageReconciler, TrackingState,
};

/// Minimal stand-in for a host engine's scene graph.
#[derive(Default)]
struct SimScene {
    next_handle: u64,
    instantiated: Vec<(String, Pose)>,
    active: HashMap<u64, bool>,
}

impl SceneGraph for SimScene {
    type Template = String;
    type Handle = u64;

    fn instantiate(&mut self, template: &String, parent: &Pose) -> u64 {
        self.next_handle += 1;
        self.instantiated.push((template.clone(), *parent));
        self.active.insert(self.next_handle, true);
        self.next_handle
    }

    fn set_active(&mut self, handle: &u64, active: bool) {
        self.active.insert(*handle, active);
    }
}

#[test]
fn test_earth_walkthrough() {
    reset_spawn_id_counter();

    let catalog = CatalogBuilder::new()
        .entry("Earth", "prefab-earth".to_string())
        .build();
    let reconciler = TrackedImageReconciler::with_default_config(SimScene::default(), catalog);

    let mut feed = TrackedImageFeed::new();
    let mut binding = ReconcilerBinding::new(reconciler);
    binding.enable(&mut feed).unwrap();
    let shared = binding.reconciler();

    // Tick 1: the tracker recognizes "Earth" anchored at T
    let anchor = Pose::translation(0.5, 1.5, -2.0);
    feed.publish(&ImageTrackingEvent::with_added(vec![ImageDetection::added(
        "Earth", anchor,
    )]));
    {
        let reconciler = shared.borrow();
        assert_eq!(reconciler.spawned().len(), 1);
        assert_eq!(reconciler.spawned()[0].name, "Earth");
        assert!(reconciler.spawned()[0].active);
        let (template, parent) = &reconciler.scene().instantiated[0];
        assert_eq!(template.as_str(), "prefab-earth");
        assert_eq!(*parent, anchor);
    }

    // Tick 2: tracked with full confidence, stays visible
    feed.publish(&ImageTrackingEvent::with_updated(vec![
        ImageDetection::updated("Earth", TrackingState::Tracking),
    ]));
    assert!(shared.borrow().spawned()[0].active);

    // Tick 3: tracking degrades, object hides
    feed.publish(&ImageTrackingEvent::with_updated(vec![
        ImageDetection::updated("Earth", TrackingState::Limited),
    ]));
    {
        let reconciler = shared.borrow();
        let handle = reconciler.spawned()[0].handle;
        assert!(!reconciler.spawned()[0].active);
        assert_eq!(reconciler.scene().active[&handle], false);
    }

    // Tick 4: the image is removed; the default policy keeps the pool as-is
    feed.publish(&ImageTrackingEvent::with_removed(vec![
        ImageDetection::updated("Earth", TrackingState::None),
    ]));
    assert_eq!(shared.borrow().spawned().len(), 1);

    // Disabled component receives nothing further
    binding.disable(&mut feed).unwrap();
    feed.publish(&ImageTrackingEvent::with_updated(vec![
        ImageDetection::updated("Earth", TrackingState::Tracking),
    ]));
    assert!(!shared.borrow().spawned()[0].active);
}

#[test]
fn test_detached_handler_sees_no_events() {
    let catalog = CatalogBuilder::new()
        .entry("Earth", "prefab-earth".to_string())
        .build();
    let reconciler = TrackedImageReconciler::with_default_config(SimScene::default(), catalog);

    let mut feed = TrackedImageFeed::new();
    let mut binding = ReconcilerBinding::new(reconciler);

    // Subscribe then immediately unsubscribe
    binding.enable(&mut feed).unwrap();
    binding.disable(&mut feed).unwrap();

    feed.publish(&ImageTrackingEvent::with_added(vec![ImageDetection::added(
        "Earth",
        Pose::identity(),
    )]));

    let shared = binding.reconciler();
    let reconciler = shared.borrow();
    assert!(reconciler.spawned().is_empty());
    assert!(reconciler.scene().instantiated.is_empty());
    assert_eq!(reconciler.catalog().len(), 1);
}
