//! One loaded model with its classified records cached.

use crate::analysis::{build_index, classify_all, metrics_from_records};
use crate::error::AnalysisError;
use crate::model::{ElementRecord, MetricsResult, ModelIndex, NodeId};
use crate::query::{resolve_query, search_live};
use crate::scene::{AnalysisContext, PropertyService, SceneGraph};
use tracing::info;

/// Records and index of a model, fetched once and reused by every query.
///
/// Mutating operations take `&mut self`, so two computations can never run
/// over the same session at once.
pub struct Session<'a, G: ?Sized, S> {
    ctx: AnalysisContext<'a, G, S>,
    node_ids: Vec<NodeId>,
    records: Vec<ElementRecord>,
    index: ModelIndex,
}

impl<'a, G, S> Session<'a, G, S>
where
    G: SceneGraph + ?Sized,
    S: PropertyService,
{
    /// Walks the scene, fetches every leaf and caches the classified records.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyModel`] when the scene has no leaves.
    pub async fn load(ctx: AnalysisContext<'a, G, S>) -> Result<Self, AnalysisError> {
        let mut session = Self {
            ctx,
            node_ids: Vec::new(),
            records: Vec::new(),
            index: ModelIndex::default(),
        };
        session.reload().await?;
        Ok(session)
    }

    /// Discards the cache and rebuilds it from the scene.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyModel`] when the scene has no leaves.
    /// The previous cache is kept in that case.
    pub async fn reload(&mut self) -> Result<(), AnalysisError> {
        let node_ids = self.ctx.walk();
        if node_ids.is_empty() {
            return Err(AnalysisError::EmptyModel);
        }

        let records = classify_all(self.ctx.properties, &node_ids).await;
        let index = build_index(&records);
        info!(
            nodes = node_ids.len(),
            records = records.len(),
            "session loaded"
        );

        self.node_ids = node_ids;
        self.records = records;
        self.index = index;
        Ok(())
    }

    #[must_use]
    pub fn context(&self) -> AnalysisContext<'a, G, S> {
        self.ctx
    }

    /// Leaf ids found by the last walk, including unclassified ones.
    #[must_use]
    pub fn node_ids(&self) -> &[NodeId] {
        &self.node_ids
    }

    #[must_use]
    pub fn records(&self) -> &[ElementRecord] {
        &self.records
    }

    #[must_use]
    pub fn record(&self, id: NodeId) -> Option<&ElementRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn index(&self) -> &ModelIndex {
        &self.index
    }

    #[must_use]
    pub fn metrics(&self) -> MetricsResult {
        metrics_from_records(&self.records)
    }

    #[must_use]
    pub fn resolve(&self, term: &str) -> Vec<NodeId> {
        resolve_query(term, &self.records)
    }

    /// Like [`Session::resolve`], but re-fetches the scene for every term.
    pub async fn search_live(&mut self, term: &str) -> Vec<NodeId> {
        search_live(term, self.ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropertyBag;
    use crate::scene::SceneSnapshot;
    use pretty_assertions::assert_eq;

    fn snapshot() -> SceneSnapshot {
        SceneSnapshot::new("Test", 0)
            .with_element(10, 1, PropertyBag::new("Wall-01").with("Material", "Concrete"))
            .with_element(10, 2, PropertyBag::new("Slab-01").with("Material", "Concrete"))
            .with_failing_element(20, 3, "timeout")
    }

    #[tokio::test]
    async fn load_caches_records_and_index() {
        let scene = snapshot();
        let session = Session::load(AnalysisContext::new(&scene, &scene)).await.unwrap();

        assert_eq!(session.node_ids(), &[1, 2, 3]);
        assert_eq!(session.records().len(), 2);
        assert_eq!(session.index().total_count, 2);
        assert_eq!(session.metrics().elements_analyzed, 2);
        assert_eq!(session.record(2).map(|r| r.name.as_str()), Some("Slab-01"));
    }

    #[tokio::test]
    async fn cached_and_live_search_agree() {
        let scene = snapshot();
        let mut session = Session::load(AnalysisContext::new(&scene, &scene)).await.unwrap();

        assert_eq!(session.resolve("slab"), vec![2]);
        assert_eq!(session.search_live("slab").await, vec![2]);
    }

    #[tokio::test]
    async fn empty_scene_cannot_be_loaded() {
        let scene = SceneSnapshot::new("Empty", 0);
        let result = Session::load(AnalysisContext::new(&scene, &scene)).await;
        assert!(matches!(result, Err(AnalysisError::EmptyModel)));
    }
}
