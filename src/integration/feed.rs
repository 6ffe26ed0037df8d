//! Change-notification feed modeled after a tracker's images-changed event.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use tracing::debug;

use crate::integration::SceneGraph;
use crate::reconciler::{ImageTrackingEvent, TrackedImageReconciler};

/// Token identifying one attached handler.
///
/// The same token returned by [`TrackedImageFeed::subscribe`] must be passed
/// to [`TrackedImageFeed::unsubscribe`]; this is the delegate-identity
/// invariant that makes detach reliably remove what attach added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Errors from the subscribe/unsubscribe surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubscriptionError {
    #[error("no handler is subscribed under {0:?}")]
    UnknownSubscription(SubscriptionId),
    #[error("handler is already attached")]
    AlreadyAttached,
    #[error("handler is not attached")]
    NotAttached,
}

/// Handler invoked for every published change batch.
pub trait ImagesChangedHandler {
    fn on_images_changed(&mut self, event: &ImageTrackingEvent);
}

impl<S: SceneGraph> ImagesChangedHandler for TrackedImageReconciler<S> {
    fn on_images_changed(&mut self, event: &ImageTrackingEvent) {
        TrackedImageReconciler::on_images_changed(self, event);
    }
}

/// Dispatches tracker change batches to subscribed handlers.
///
/// Single-threaded by contract: the host's update loop publishes batches
/// synchronously on its main thread, so handlers are shared with `Rc`, not
/// `Arc`, and no handler invocation can overlap another.
#[derive(Default)]
pub struct TrackedImageFeed {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Rc<RefCell<dyn ImagesChangedHandler>>)>,
}

impl TrackedImageFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a handler; it receives every batch published after this call.
    pub fn subscribe(&mut self, handler: Rc<RefCell<dyn ImagesChangedHandler>>) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.handlers.push((id, handler));
        debug!(?id, "handler subscribed");
        id
    }

    /// Detach the handler registered under `id`. After this returns `Ok`,
    /// no later publish reaches that handler.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> Result<(), SubscriptionError> {
        let before = self.handlers.len();
        self.handlers.retain(|(sub_id, _)| *sub_id != id);
        if self.handlers.len() == before {
            return Err(SubscriptionError::UnknownSubscription(id));
        }
        debug!(?id, "handler unsubscribed");
        Ok(())
    }

    /// Deliver one change batch to every handler, in subscription order.
    pub fn publish(&mut self, event: &ImageTrackingEvent) {
        for (_, handler) in &self.handlers {
            handler.borrow_mut().on_images_changed(event);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}
