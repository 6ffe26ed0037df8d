//! Port trait for the host engine's scene graph.

use crate::reconciler::Pose;

/// Trait for the host scene graph the reconciler spawns into.
///
/// Implement this trait to connect any engine to the reconciler. The
/// reconciler only ever holds this interface, never a concrete engine type.
///
/// # Example
///
/// ```ignore
/// use artrack_rs::{Pose, SceneGraph};
///
/// struct MyEngine {
///     // Your scene graph here
/// }
///
/// impl SceneGraph for MyEngine {
///     type Template = MyPrefab;
///     type Handle = MyNodeId;
///
///     fn instantiate(&mut self, template: &MyPrefab, parent: &Pose) -> MyNodeId {
///         // Clone the prefab under the anchor transform
///     }
///
///     fn set_active(&mut self, handle: &MyNodeId, active: bool) {
///         // Show or hide the node
///     }
/// }
/// ```
pub trait SceneGraph {
    /// Spawnable template objects are cloned from (prefab, archetype, ...).
    type Template;

    /// Reference to an instantiated scene object.
    type Handle;

    /// Clone `template` into the scene, parented under the anchor transform,
    /// and return a reference to the new object.
    fn instantiate(&mut self, template: &Self::Template, parent: &Pose) -> Self::Handle;

    /// Show or hide an instantiated object.
    fn set_active(&mut self, handle: &Self::Handle, active: bool);

    /// Release an object previously returned by [`instantiate`]. Destruction
    /// authority stays with the host engine, so the default only hides the
    /// object; hosts that do own destruction should override this.
    ///
    /// [`instantiate`]: SceneGraph::instantiate
    fn despawn(&mut self, handle: &Self::Handle) {
        self.set_active(handle, false);
    }
}
