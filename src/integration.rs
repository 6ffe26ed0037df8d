//! Integration module for connecting host engines with the reconciler.
//!
//! This module provides the scene-graph port the reconciler calls into, the
//! event feed that models the tracker's change notification, and the
//! enable/disable binding that manages handler subscription.

mod binding;
mod builder;
mod feed;
mod scene_graph;

pub use binding::ReconcilerBinding;
pub use builder::CatalogBuilder;
pub use feed::{ImagesChangedHandler, SubscriptionError, SubscriptionId, TrackedImageFeed};
pub use scene_graph::SceneGraph;
