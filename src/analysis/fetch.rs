//! Fan-out/join over the property service.

use super::classifier::classify;
use crate::error::FetchError;
use crate::model::{ElementRecord, NodeId, PropertyBag};
use crate::scene::PropertyService;
use futures::future::join_all;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Requests every node's properties concurrently and waits for all of them.
///
/// Results come back in the order of `ids`, whatever order the service
/// completes in.
pub async fn fetch_all<S: PropertyService>(
    service: &S,
    ids: &[NodeId],
) -> Vec<(NodeId, Result<PropertyBag, FetchError>)> {
    let requests = ids.iter().map(|&id| async move { (id, service.fetch(id).await) });
    join_all(requests).await
}

/// Fetches and classifies every node, dropping failed and nameless ones.
///
/// Repeated ids are fetched once; records keep first-occurrence order.
pub async fn classify_all<S: PropertyService>(service: &S, ids: &[NodeId]) -> Vec<ElementRecord> {
    let mut seen = HashSet::with_capacity(ids.len());
    let unique: Vec<NodeId> = ids.iter().copied().filter(|id| seen.insert(*id)).collect();
    if unique.len() < ids.len() {
        debug!(duplicates = ids.len() - unique.len(), "ignoring repeated node ids");
    }

    let fetched = fetch_all(service, &unique).await;
    let mut failed = 0usize;

    let records: Vec<ElementRecord> = fetched
        .into_iter()
        .filter_map(|(id, result)| match result {
            Ok(bag) => {
                let record = classify(id, &bag);
                if record.is_none() {
                    debug!(node = id, "skipping element without a usable name");
                }
                record
            }
            Err(err) => {
                failed += 1;
                warn!(node = id, error = %err, "property fetch failed, element excluded");
                None
            }
        })
        .collect();

    info!(
        requested = ids.len(),
        classified = records.len(),
        failed,
        "property fan-out complete"
    );

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneSnapshot;
    use pretty_assertions::assert_eq;

    fn scene() -> SceneSnapshot {
        SceneSnapshot::new("Test", 0)
            .with_element(0, 1, PropertyBag::new("Slab-01").with("Volume", "2"))
            .with_element(0, 2, PropertyBag::new("Slab-02").with("Volume", "3"))
            .with_failing_element(0, 3, "timeout")
    }

    #[tokio::test]
    async fn results_follow_input_order() {
        let scene = scene();
        let fetched = fetch_all(&scene, &[3, 1, 2]).await;

        let ids: Vec<NodeId> = fetched.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert!(fetched[0].1.is_err());
    }

    #[tokio::test]
    async fn repeated_ids_are_classified_once() {
        let scene = scene();
        let records = classify_all(&scene, &[2, 1, 2, 3, 1]).await;

        let ids: Vec<NodeId> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
