//! Detection records delivered by the tracking subsystem.

use nalgebra::Isometry3;

use crate::reconciler::tracking_state::TrackingState;

/// Anchor transform of a detected image in world space.
///
/// Opaque to the reconciler: it is captured from the tracking subsystem and
/// handed through to the scene graph as the parent of spawned objects.
pub type Pose = Isometry3<f32>;

/// A single image detection reported by the tracker.
#[derive(Debug, Clone)]
pub struct ImageDetection {
    /// Name of the reference image this detection was matched against
    pub reference_image_name: String,
    /// Current tracking-quality state
    pub tracking_state: TrackingState,
    /// Anchor transform; meaningful for newly added detections
    pub anchor: Pose,
}

impl ImageDetection {
    pub fn new(name: impl Into<String>, state: TrackingState, anchor: Pose) -> Self {
        Self {
            reference_image_name: name.into(),
            tracking_state: state,
            anchor,
        }
    }

    /// A freshly recognized image, anchored at `anchor`.
    pub fn added(name: impl Into<String>, anchor: Pose) -> Self {
        Self::new(name, TrackingState::Tracking, anchor)
    }

    /// A state change for an already recognized image. Updated records carry
    /// a pose too, but the reconciler only reads their name and state.
    pub fn updated(name: impl Into<String>, state: TrackingState) -> Self {
        Self::new(name, state, Pose::identity())
    }
}

/// One change batch from the tracking subsystem: the three collections are
/// ordered, and that order is part of the contract (it decides which catalog
/// entry a label binds to when names collide).
#[derive(Debug, Clone, Default)]
pub struct ImageTrackingEvent {
    pub added: Vec<ImageDetection>,
    pub updated: Vec<ImageDetection>,
    pub removed: Vec<ImageDetection>,
}

impl ImageTrackingEvent {
    pub fn new(
        added: Vec<ImageDetection>,
        updated: Vec<ImageDetection>,
        removed: Vec<ImageDetection>,
    ) -> Self {
        Self {
            added,
            updated,
            removed,
        }
    }

    /// Batch containing only newly added detections.
    pub fn with_added(added: Vec<ImageDetection>) -> Self {
        Self {
            added,
            ..Self::default()
        }
    }

    /// Batch containing only updated detections.
    pub fn with_updated(updated: Vec<ImageDetection>) -> Self {
        Self {
            updated,
            ..Self::default()
        }
    }

    /// Batch containing only removed detections.
    pub fn with_removed(removed: Vec<ImageDetection>) -> Self {
        Self {
            removed,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }
}
