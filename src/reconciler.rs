mod catalog;
mod detection;
mod image_reconciler;
mod spawned;
mod tracking_state;

pub use catalog::{CatalogEntry, PrefabCatalog};
pub use detection::{ImageDetection, ImageTrackingEvent, Pose};
pub use image_reconciler::{ReconcilerConfig, RemovalPolicy, TrackedImageReconciler};
pub use spawned::{SpawnedObject, reset_spawn_id_counter};
pub use tracking_state::TrackingState;
