use super::terms::expand_terms;
use crate::analysis::fetch_all;
use crate::model::{ElementRecord, NodeId, Property, PropertyBag};
use crate::scene::{AnalysisContext, PropertyService, SceneGraph};
use tracing::{debug, info};

/// Case-insensitive substring match on the name, then on every property
/// name and value. `term` must already be lowercase; an empty term never
/// matches.
fn matches(name: &str, properties: &[Property], term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    if name.to_lowercase().contains(term) {
        return true;
    }
    properties.iter().any(|p| {
        p.display_name.to_lowercase().contains(term)
            || p.display_value.to_lowercase().contains(term)
    })
}

#[must_use]
pub fn record_matches(record: &ElementRecord, term: &str) -> bool {
    matches(&record.name, &record.properties, term)
}

#[must_use]
pub fn bag_matches(bag: &PropertyBag, term: &str) -> bool {
    matches(&bag.name, &bag.properties, term)
}

/// Resolves a free-text criterion against classified records.
///
/// Candidate terms are tried in order and the ids matched by the first
/// term with any hit are returned; hits of different terms are never
/// merged. An empty result means "no match", not a failure.
#[must_use]
pub fn resolve_query(raw_term: &str, records: &[ElementRecord]) -> Vec<NodeId> {
    if raw_term.is_empty() {
        return Vec::new();
    }

    for term in expand_terms(raw_term) {
        let hits: Vec<NodeId> = records
            .iter()
            .filter(|r| record_matches(r, &term))
            .map(|r| r.id)
            .collect();

        debug!(term = %term, hits = hits.len(), "candidate term evaluated");
        if !hits.is_empty() {
            info!(query = raw_term, term = %term, hits = hits.len(), "query resolved");
            return hits;
        }
    }

    info!(query = raw_term, "query matched no element");
    Vec::new()
}

/// Resolves a criterion without any cached records.
///
/// Each candidate term walks the scene and fetches every node again, all
/// concurrently; the next term is only tried once the previous one has
/// fully completed without a hit. Failed fetches and nameless bags never
/// match, as neither yields a record for [`resolve_query`].
pub async fn search_live<G, S>(raw_term: &str, ctx: AnalysisContext<'_, G, S>) -> Vec<NodeId>
where
    G: SceneGraph + ?Sized,
    S: PropertyService,
{
    if raw_term.is_empty() {
        return Vec::new();
    }

    for term in expand_terms(raw_term) {
        let ids = ctx.walk();
        let hits: Vec<NodeId> = fetch_all(ctx.properties, &ids)
            .await
            .into_iter()
            .filter_map(|(id, result)| match result {
                Ok(bag) if bag.usable_name().is_some() && bag_matches(&bag, &term) => Some(id),
                _ => None,
            })
            .collect();

        debug!(term = %term, hits = hits.len(), "candidate term evaluated");
        if !hits.is_empty() {
            info!(query = raw_term, term = %term, hits = hits.len(), "query resolved");
            return hits;
        }
    }

    info!(query = raw_term, "query matched no element");
    Vec::new()
}
