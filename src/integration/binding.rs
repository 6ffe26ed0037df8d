//! Enable/disable lifecycle for a reconciler attached to a feed.

use std::cell::RefCell;
use std::rc::Rc;

use crate::integration::feed::{SubscriptionError, SubscriptionId, TrackedImageFeed};
use crate::integration::scene_graph::SceneGraph;
use crate::reconciler::TrackedImageReconciler;

/// Owns a reconciler and its subscription to a [`TrackedImageFeed`],
/// mirroring a host component's enabled/disabled lifecycle.
///
/// `enable` attaches the handler and `disable` detaches it, exactly once per
/// transition: enabling an enabled binding or disabling a disabled one is an
/// error rather than a silent double-registration. The same handler instance
/// is reused across transitions, so detach always removes what attach added.
pub struct ReconcilerBinding<S: SceneGraph + 'static> {
    reconciler: Rc<RefCell<TrackedImageReconciler<S>>>,
    subscription: Option<SubscriptionId>,
}

impl<S: SceneGraph + 'static> ReconcilerBinding<S> {
    pub fn new(reconciler: TrackedImageReconciler<S>) -> Self {
        Self {
            reconciler: Rc::new(RefCell::new(reconciler)),
            subscription: None,
        }
    }

    /// Attach the reconciler's handler to `feed`.
    pub fn enable(&mut self, feed: &mut TrackedImageFeed) -> Result<(), SubscriptionError> {
        if self.subscription.is_some() {
            return Err(SubscriptionError::AlreadyAttached);
        }
        let id = feed.subscribe(self.reconciler.clone());
        self.subscription = Some(id);
        Ok(())
    }

    /// Detach the handler previously attached by [`enable`].
    ///
    /// [`enable`]: ReconcilerBinding::enable
    pub fn disable(&mut self, feed: &mut TrackedImageFeed) -> Result<(), SubscriptionError> {
        match self.subscription.take() {
            Some(id) => feed.unsubscribe(id),
            None => Err(SubscriptionError::NotAttached),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.subscription.is_some()
    }

    /// Shared handle to the owned reconciler, for inspecting the pool or the
    /// scene port between batches.
    pub fn reconciler(&self) -> Rc<RefCell<TrackedImageReconciler<S>>> {
        self.reconciler.clone()
    }
}
