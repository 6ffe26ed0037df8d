/// Tracking-quality state reported for a detected image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingState {
    /// The image is not being tracked at all
    #[default]
    None,
    /// The image is tracked with degraded confidence (pose may be stale)
    Limited,
    /// The image is actively tracked with full confidence
    Tracking,
}

impl TrackingState {
    /// Whether a spawned object bound to this image should be visible.
    pub fn is_visible(self) -> bool {
        self == TrackingState::Tracking
    }
}
