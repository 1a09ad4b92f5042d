//! Seams to the host environment: the scene graph and the property service.
//!
//! The core never owns a viewer. Everything it needs is reached through an
//! [`AnalysisContext`] passed explicitly into each call.

pub mod snapshot;
pub mod walker;

use crate::error::FetchError;
use crate::model::{NodeId, PropertyBag};
use std::future::Future;

pub use snapshot::SceneSnapshot;
pub use walker::walk;

/// Hierarchy of a loaded model.
pub trait SceneGraph {
    fn root(&self) -> NodeId;

    /// Direct children of `id`, empty for leaves and unknown ids.
    fn children(&self, id: NodeId) -> &[NodeId];

    /// Leaf ids below `root`. Hosts with their own traversal may override.
    fn walk(&self, root: NodeId) -> Vec<NodeId> {
        walker::walk(self, root)
    }
}

/// Asynchronous access to per-node properties.
pub trait PropertyService {
    fn fetch(&self, id: NodeId) -> impl Future<Output = Result<PropertyBag, FetchError>>;
}

/// Scene graph and property service of one loaded model.
pub struct AnalysisContext<'a, G: ?Sized, S> {
    pub scene: &'a G,
    pub properties: &'a S,
}

impl<G: ?Sized, S> Clone for AnalysisContext<'_, G, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: ?Sized, S> Copy for AnalysisContext<'_, G, S> {}

impl<'a, G, S> AnalysisContext<'a, G, S>
where
    G: SceneGraph + ?Sized,
    S: PropertyService,
{
    pub fn new(scene: &'a G, properties: &'a S) -> Self {
        Self { scene, properties }
    }

    /// Leaf ids of the whole model.
    #[must_use]
    pub fn walk(&self) -> Vec<NodeId> {
        self.scene.walk(self.scene.root())
    }
}
